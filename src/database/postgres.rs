use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    database::{ProductStore, connection},
    error::{AppError, Result},
    models::{Product, ProductAggregate, ProductDetail},
    queries::{product_detail_queries, product_queries},
};

#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// A zero row count means the row disappeared between the service's lookup
// and the write.
fn ensure_affected(rows: u64, what: &str, id: Uuid) -> Result<()> {
    if rows == 0 {
        return Err(AppError::NotFound(format!("{} with id {} not found", what, id)));
    }
    Ok(())
}

#[async_trait]
impl ProductStore for PgStore {
    async fn find_product(&self, id: Uuid) -> Result<Option<Product>> {
        product_queries::find_by_id(&self.pool, id).await
    }

    async fn find_product_with_detail(&self, id: Uuid) -> Result<Option<ProductAggregate>> {
        let Some(product) = product_queries::find_by_id(&self.pool, id).await? else {
            return Ok(None);
        };

        let detail = product_detail_queries::find_by_id(&self.pool, product.id).await?;

        Ok(Some(ProductAggregate { product, detail }))
    }

    async fn product_name_exists(&self, name: &str) -> Result<bool> {
        product_queries::name_exists(&self.pool, name).await
    }

    async fn list_products(&self) -> Result<Vec<Product>> {
        product_queries::find_all(&self.pool).await
    }

    async fn insert_product(&self, product: &Product) -> Result<()> {
        product_queries::insert(&self.pool, product).await
    }

    async fn update_product(&self, product: &Product) -> Result<()> {
        let rows = product_queries::update(&self.pool, product).await?;
        ensure_affected(rows, "Product", product.id)
    }

    async fn delete_product(&self, id: Uuid) -> Result<()> {
        let rows = product_queries::delete(&self.pool, id).await?;
        ensure_affected(rows, "Product", id)
    }

    async fn find_detail(&self, id: Uuid) -> Result<Option<ProductDetail>> {
        product_detail_queries::find_by_id(&self.pool, id).await
    }

    async fn insert_detail(&self, detail: &ProductDetail) -> Result<()> {
        product_detail_queries::insert(&self.pool, detail).await
    }

    async fn update_detail(&self, detail: &ProductDetail) -> Result<()> {
        let rows = product_detail_queries::update(&self.pool, detail).await?;
        ensure_affected(rows, "Product detail", detail.id)
    }

    async fn delete_detail(&self, id: Uuid) -> Result<()> {
        let rows = product_detail_queries::delete(&self.pool, id).await?;
        ensure_affected(rows, "Product detail", id)
    }

    async fn ping(&self) -> Result<()> {
        connection::check_health(&self.pool).await
    }
}
