use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

use crate::{
    AppState,
    error::Result,
    models::{ProductDetail, ProductDetailRequest},
    services::product_service,
};

pub async fn create_detail(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ProductDetailRequest>,
) -> Result<Json<Uuid>> {
    let detail_id = product_service::create_detail(state.store.as_ref(), id, payload).await?;

    Ok(Json(detail_id))
}

pub async fn get_detail(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ProductDetail>> {
    let detail = product_service::get_detail(state.store.as_ref(), id).await?;

    Ok(Json(detail))
}

pub async fn update_detail(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ProductDetailRequest>,
) -> Result<Json<Uuid>> {
    let detail_id = product_service::update_detail(state.store.as_ref(), id, payload).await?;

    Ok(Json(detail_id))
}

// The path id doubles as the detail id because of the shared primary key.
pub async fn delete_detail(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode> {
    product_service::delete_detail(state.store.as_ref(), id).await?;

    Ok(StatusCode::OK)
}
