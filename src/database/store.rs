use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    error::Result,
    models::{Product, ProductAggregate, ProductDetail},
};

/// Persistence operations the record service runs against.
///
/// Implementations enforce the same constraints as the SQL schema: product
/// names are unique (violations surface as `AppError::Conflict`), a detail
/// needs an existing product and at most one detail exists per product
/// (violations surface as `AppError::BadRequest`), and removing a product
/// removes its detail.
#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn find_product(&self, id: Uuid) -> Result<Option<Product>>;

    /// Product plus its detail, if any.
    async fn find_product_with_detail(&self, id: Uuid) -> Result<Option<ProductAggregate>>;

    async fn product_name_exists(&self, name: &str) -> Result<bool>;

    async fn list_products(&self) -> Result<Vec<Product>>;

    async fn insert_product(&self, product: &Product) -> Result<()>;

    async fn update_product(&self, product: &Product) -> Result<()>;

    async fn delete_product(&self, id: Uuid) -> Result<()>;

    async fn find_detail(&self, id: Uuid) -> Result<Option<ProductDetail>>;

    async fn insert_detail(&self, detail: &ProductDetail) -> Result<()>;

    async fn update_detail(&self, detail: &ProductDetail) -> Result<()>;

    async fn delete_detail(&self, id: Uuid) -> Result<()>;

    /// Round trip to the backing store, used by readiness checks.
    async fn ping(&self) -> Result<()>;
}
