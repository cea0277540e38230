use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stored under the owning product's id.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetail {
    pub id: Uuid,
    pub description: Option<String>,
    pub color: Option<String>,
    pub material: Option<String>,
    pub weight: Decimal,
    pub quantity_in_stock: i32,
    pub manufacture_date: DateTime<Utc>,
    pub expiry_date: DateTime<Utc>,
    pub size: Option<String>,
    pub manufacturer: Option<String>,
    pub country_of_origin: Option<String>,
}

impl ProductDetail {
    pub fn new(product_id: Uuid, req: ProductDetailRequest) -> Self {
        Self {
            id: product_id,
            description: req.description,
            color: req.color,
            material: req.material,
            weight: req.weight,
            quantity_in_stock: req.quantity_in_stock,
            manufacture_date: req.manufacture_date,
            expiry_date: req.expiry_date,
            size: req.size,
            manufacturer: req.manufacturer,
            country_of_origin: req.country_of_origin,
        }
    }

    pub fn apply(&mut self, req: ProductDetailRequest) {
        self.description = req.description;
        self.color = req.color;
        self.material = req.material;
        self.weight = req.weight;
        self.quantity_in_stock = req.quantity_in_stock;
        self.manufacture_date = req.manufacture_date;
        self.expiry_date = req.expiry_date;
        self.size = req.size;
        self.manufacturer = req.manufacturer;
        self.country_of_origin = req.country_of_origin;
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetailRequest {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub material: Option<String>,
    pub weight: Decimal,
    pub quantity_in_stock: i32,
    pub manufacture_date: DateTime<Utc>,
    pub expiry_date: DateTime<Utc>,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub manufacturer: Option<String>,
    #[serde(default)]
    pub country_of_origin: Option<String>,
}
