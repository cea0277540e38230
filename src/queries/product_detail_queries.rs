use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::{AppError, Result},
    models::ProductDetail,
};

pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<ProductDetail>> {
    let detail = sqlx::query_as::<_, ProductDetail>(
        r#"
        SELECT
            id, description, color, material, weight, quantity_in_stock,
            manufacture_date, expiry_date, size, manufacturer, country_of_origin
        FROM product_details
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(detail)
}

pub async fn insert(pool: &PgPool, detail: &ProductDetail) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO product_details (
            id, description, color, material, weight, quantity_in_stock,
            manufacture_date, expiry_date, size, manufacturer, country_of_origin
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
        "#,
    )
    .bind(detail.id)
    .bind(&detail.description)
    .bind(&detail.color)
    .bind(&detail.material)
    .bind(detail.weight)
    .bind(detail.quantity_in_stock)
    .bind(detail.manufacture_date)
    .bind(detail.expiry_date)
    .bind(&detail.size)
    .bind(&detail.manufacturer)
    .bind(&detail.country_of_origin)
    .execute(pool)
    .await
    .map_err(|e| match e {
        sqlx::Error::Database(ref db) if db.is_unique_violation() => {
            AppError::BadRequest("product already has product details".to_string())
        }
        sqlx::Error::Database(ref db) if db.is_foreign_key_violation() => {
            AppError::BadRequest(format!("product with id {} does not exist", detail.id))
        }
        other => AppError::Database(other),
    })?;

    Ok(())
}

pub async fn update(pool: &PgPool, detail: &ProductDetail) -> Result<u64> {
    let result = sqlx::query(
        r#"
        UPDATE product_details
        SET
            description = $1,
            color = $2,
            material = $3,
            weight = $4,
            quantity_in_stock = $5,
            manufacture_date = $6,
            expiry_date = $7,
            size = $8,
            manufacturer = $9,
            country_of_origin = $10
        WHERE id = $11
        "#,
    )
    .bind(&detail.description)
    .bind(&detail.color)
    .bind(&detail.material)
    .bind(detail.weight)
    .bind(detail.quantity_in_stock)
    .bind(detail.manufacture_date)
    .bind(detail.expiry_date)
    .bind(&detail.size)
    .bind(&detail.manufacturer)
    .bind(&detail.country_of_origin)
    .bind(detail.id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<u64> {
    let result = sqlx::query("DELETE FROM product_details WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}
