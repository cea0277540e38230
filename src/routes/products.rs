use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

use crate::{
    AppState,
    error::Result,
    models::{Product, ProductRequest, ProductSummary},
    services::product_service,
};

pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<ProductRequest>,
) -> Result<Json<Product>> {
    let product = product_service::create_product(state.store.as_ref(), payload).await?;

    Ok(Json(product))
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ProductSummary>> {
    let product = product_service::get_product(state.store.as_ref(), id).await?;

    Ok(Json(product))
}

pub async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<ProductSummary>>> {
    let products = product_service::list_products(state.store.as_ref()).await?;

    Ok(Json(products))
}

pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ProductRequest>,
) -> Result<Json<Uuid>> {
    let id = product_service::update_product(state.store.as_ref(), id, payload).await?;

    Ok(Json(id))
}

pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode> {
    product_service::delete_product(state.store.as_ref(), id).await?;

    Ok(StatusCode::OK)
}
