use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::models::ProductDetail;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, sqlx::Type)]
#[repr(i32)]
pub enum ProductStatus {
    #[default]
    Active = 0,
    Inactive = 1,
    Soldout = 2,
}

impl ProductStatus {
    /// Maps a client-supplied status onto the stored enum. Only `Inactive`
    /// and `Soldout` are recognised; every other value becomes `Active`.
    pub fn from_external(value: &Value) -> Self {
        match value {
            Value::String(name) if name.trim().eq_ignore_ascii_case("inactive") => {
                ProductStatus::Inactive
            }
            Value::String(name) if name.trim().eq_ignore_ascii_case("soldout") => {
                ProductStatus::Soldout
            }
            Value::Number(n) => match n.as_i64() {
                Some(1) => ProductStatus::Inactive,
                Some(2) => ProductStatus::Soldout,
                _ => ProductStatus::Active,
            },
            _ => ProductStatus::Active,
        }
    }
}

fn deserialize_status<'de, D>(deserializer: D) -> Result<ProductStatus, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .map(ProductStatus::from_external)
        .unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub price: Decimal,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
    pub status: ProductStatus,
}

impl Product {
    pub fn new(id: Uuid, req: ProductRequest) -> Self {
        Self {
            id,
            name: req.name,
            price: req.price,
            created_at: req.created_at,
            modified_at: req.modified_at,
            status: req.status,
        }
    }

    /// Full replace of every mutable field.
    pub fn apply(&mut self, req: ProductRequest) {
        self.name = req.name;
        self.price = req.price;
        self.created_at = req.created_at;
        self.modified_at = req.modified_at;
        self.status = req.status;
    }
}

/// Body of both `POST /products` and `PUT /products/{id}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRequest {
    pub name: String,
    pub price: Decimal,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
    #[serde(default, deserialize_with = "deserialize_status")]
    pub status: ProductStatus,
}

/// Read projection; `modifiedAt` and the detail are left out.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummary {
    pub id: Uuid,
    pub name: String,
    pub price: Decimal,
    pub created_at: DateTime<Utc>,
    pub status: ProductStatus,
}

impl From<Product> for ProductSummary {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
            created_at: product.created_at,
            status: product.status,
        }
    }
}

/// A product loaded together with its optional detail.
#[derive(Debug, Clone)]
pub struct ProductAggregate {
    pub product: Product,
    pub detail: Option<ProductDetail>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request_with_status(status: Value) -> ProductRequest {
        serde_json::from_value(json!({
            "name": "Widget",
            "price": "9.99",
            "createdAt": "2023-07-05T20:41:10Z",
            "modifiedAt": "2023-07-06T08:00:00Z",
            "status": status,
        }))
        .unwrap()
    }

    #[test]
    fn recognised_statuses_map_through() {
        assert_eq!(request_with_status(json!("Inactive")).status, ProductStatus::Inactive);
        assert_eq!(request_with_status(json!("Soldout")).status, ProductStatus::Soldout);
        assert_eq!(request_with_status(json!("soldout")).status, ProductStatus::Soldout);
        assert_eq!(request_with_status(json!(1)).status, ProductStatus::Inactive);
        assert_eq!(request_with_status(json!(2)).status, ProductStatus::Soldout);
    }

    #[test]
    fn anything_else_falls_back_to_active() {
        for status in [
            json!("Active"),
            json!(""),
            json!("Discontinued"),
            json!(7),
            json!(-1),
            json!(null),
            json!(true),
            json!({ "name": "Inactive" }),
        ] {
            assert_eq!(
                request_with_status(status.clone()).status,
                ProductStatus::Active,
                "status input {status}"
            );
        }
    }

    #[test]
    fn missing_status_is_active() {
        let req: ProductRequest = serde_json::from_value(json!({
            "name": "Widget",
            "price": "9.99",
            "createdAt": "2023-07-05T20:41:10Z",
            "modifiedAt": "2023-07-05T20:41:10Z",
        }))
        .unwrap();

        assert_eq!(req.status, ProductStatus::Active);
    }

    #[test]
    fn summary_omits_modified_at() {
        let product = Product::new(Uuid::new_v4(), request_with_status(json!("Soldout")));
        let summary = serde_json::to_value(ProductSummary::from(product.clone())).unwrap();

        assert_eq!(summary["id"], json!(product.id.to_string()));
        assert_eq!(summary["name"], json!("Widget"));
        assert_eq!(summary["status"], json!("Soldout"));
        assert!(summary.get("createdAt").is_some());
        assert!(summary.get("modifiedAt").is_none());
    }

    #[test]
    fn apply_overwrites_every_field() {
        let mut product = Product::new(Uuid::new_v4(), request_with_status(json!("Soldout")));
        let id = product.id;

        let mut replacement = request_with_status(json!("bogus"));
        replacement.name = "Gadget".to_string();
        product.apply(replacement.clone());

        assert_eq!(product.id, id);
        assert_eq!(product.name, "Gadget");
        assert_eq!(product.status, ProductStatus::Active);
        assert_eq!(product.modified_at, replacement.modified_at);
    }
}
