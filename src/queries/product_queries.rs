use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::{AppError, Result},
    models::Product,
};

pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Product>> {
    let product = sqlx::query_as::<_, Product>(
        "SELECT id, name, price, created_at, modified_at, status FROM products WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(product)
}

pub async fn name_exists(pool: &PgPool, name: &str) -> Result<bool> {
    let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM products WHERE name = $1)")
        .bind(name)
        .fetch_one(pool)
        .await?;

    Ok(exists)
}

pub async fn find_all(pool: &PgPool) -> Result<Vec<Product>> {
    let products = sqlx::query_as::<_, Product>(
        "SELECT id, name, price, created_at, modified_at, status FROM products",
    )
    .fetch_all(pool)
    .await?;

    Ok(products)
}

pub async fn insert(pool: &PgPool, product: &Product) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO products (id, name, price, created_at, modified_at, status)
        VALUES ($1, $2, $3, $4, $5, $6)
        "#,
    )
    .bind(product.id)
    .bind(&product.name)
    .bind(product.price)
    .bind(product.created_at)
    .bind(product.modified_at)
    .bind(product.status)
    .execute(pool)
    .await
    .map_err(|e| name_conflict(e, &product.name))?;

    Ok(())
}

pub async fn update(pool: &PgPool, product: &Product) -> Result<u64> {
    let result = sqlx::query(
        r#"
        UPDATE products
        SET
            name = $1,
            price = $2,
            created_at = $3,
            modified_at = $4,
            status = $5
        WHERE id = $6
        "#,
    )
    .bind(&product.name)
    .bind(product.price)
    .bind(product.created_at)
    .bind(product.modified_at)
    .bind(product.status)
    .bind(product.id)
    .execute(pool)
    .await
    .map_err(|e| name_conflict(e, &product.name))?;

    Ok(result.rows_affected())
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<u64> {
    let result = sqlx::query("DELETE FROM products WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}

// The pre-insert existence check races with concurrent writers; the unique
// index on `name` is the actual guard.
fn name_conflict(err: sqlx::Error, name: &str) -> AppError {
    match err {
        sqlx::Error::Database(ref db) if db.is_unique_violation() => {
            AppError::Conflict(format!("Product named {} already exists", name))
        }
        other => AppError::Database(other),
    }
}
