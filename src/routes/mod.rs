mod health;
mod product_details;
mod products;

use axum::{Router, routing::get};

use crate::AppState;

pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route(
            "/products",
            get(products::list_products).post(products::create_product),
        )
        .route(
            "/products/{id}",
            get(products::get_product)
                .put(products::update_product)
                .delete(products::delete_product),
        )
        .route(
            "/products/{id}/details",
            get(product_details::get_detail)
                .post(product_details::create_detail)
                .put(product_details::update_detail)
                .delete(product_details::delete_detail),
        )
}
