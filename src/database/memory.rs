use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    database::ProductStore,
    error::{AppError, Result},
    models::{Product, ProductAggregate, ProductDetail},
};

#[derive(Debug, Default)]
struct Tables {
    products: HashMap<Uuid, Product>,
    details: HashMap<Uuid, ProductDetail>,
}

/// In-process store with the same constraints as the Postgres schema.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Tables {
    fn name_taken(&self, name: &str, except: Option<Uuid>) -> bool {
        self.products
            .values()
            .any(|p| p.name == name && Some(p.id) != except)
    }
}

#[async_trait]
impl ProductStore for MemoryStore {
    async fn find_product(&self, id: Uuid) -> Result<Option<Product>> {
        Ok(self.tables.read().await.products.get(&id).cloned())
    }

    async fn find_product_with_detail(&self, id: Uuid) -> Result<Option<ProductAggregate>> {
        let tables = self.tables.read().await;

        Ok(tables.products.get(&id).map(|product| ProductAggregate {
            product: product.clone(),
            detail: tables.details.get(&id).cloned(),
        }))
    }

    async fn product_name_exists(&self, name: &str) -> Result<bool> {
        Ok(self.tables.read().await.name_taken(name, None))
    }

    async fn list_products(&self) -> Result<Vec<Product>> {
        Ok(self.tables.read().await.products.values().cloned().collect())
    }

    async fn insert_product(&self, product: &Product) -> Result<()> {
        let mut tables = self.tables.write().await;

        if tables.name_taken(&product.name, None) {
            return Err(AppError::Conflict(format!(
                "Product named {} already exists",
                product.name
            )));
        }
        if tables.products.contains_key(&product.id) {
            return Err(AppError::Internal(format!(
                "duplicate product id {}",
                product.id
            )));
        }

        tables.products.insert(product.id, product.clone());
        Ok(())
    }

    async fn update_product(&self, product: &Product) -> Result<()> {
        let mut tables = self.tables.write().await;

        if tables.name_taken(&product.name, Some(product.id)) {
            return Err(AppError::Conflict(format!(
                "Product named {} already exists",
                product.name
            )));
        }

        match tables.products.get_mut(&product.id) {
            Some(stored) => {
                *stored = product.clone();
                Ok(())
            }
            None => Err(AppError::NotFound(format!(
                "Product with id {} not found",
                product.id
            ))),
        }
    }

    async fn delete_product(&self, id: Uuid) -> Result<()> {
        let mut tables = self.tables.write().await;

        if tables.products.remove(&id).is_none() {
            return Err(AppError::NotFound(format!("Product with id {} not found", id)));
        }
        // ON DELETE CASCADE
        tables.details.remove(&id);

        Ok(())
    }

    async fn find_detail(&self, id: Uuid) -> Result<Option<ProductDetail>> {
        Ok(self.tables.read().await.details.get(&id).cloned())
    }

    async fn insert_detail(&self, detail: &ProductDetail) -> Result<()> {
        let mut tables = self.tables.write().await;

        if !tables.products.contains_key(&detail.id) {
            return Err(AppError::BadRequest(format!(
                "product with id {} does not exist",
                detail.id
            )));
        }
        if tables.details.contains_key(&detail.id) {
            return Err(AppError::BadRequest(
                "product already has product details".to_string(),
            ));
        }

        tables.details.insert(detail.id, detail.clone());
        Ok(())
    }

    async fn update_detail(&self, detail: &ProductDetail) -> Result<()> {
        let mut tables = self.tables.write().await;

        match tables.details.get_mut(&detail.id) {
            Some(stored) => {
                *stored = detail.clone();
                Ok(())
            }
            None => Err(AppError::NotFound(format!(
                "Product detail with id {} not found",
                detail.id
            ))),
        }
    }

    async fn delete_detail(&self, id: Uuid) -> Result<()> {
        match self.tables.write().await.details.remove(&id) {
            Some(_) => Ok(()),
            None => Err(AppError::NotFound(format!(
                "Product detail with id {} not found",
                id
            ))),
        }
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}
