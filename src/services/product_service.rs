use uuid::Uuid;

use crate::{
    database::ProductStore,
    error::{AppError, Result},
    models::{Product, ProductDetail, ProductDetailRequest, ProductRequest, ProductSummary},
};

fn product_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Product with id {} not found", id))
}

fn detail_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Product detail with id {} not found", id))
}

pub async fn create_product(store: &dyn ProductStore, req: ProductRequest) -> Result<Product> {
    let id = Uuid::new_v4();

    if store.product_name_exists(&req.name).await? {
        return Err(AppError::Conflict("This product already exists".to_string()));
    }

    let product = Product::new(id, req);
    store.insert_product(&product).await?;

    tracing::info!(product_id = %product.id, name = %product.name, "product created");

    Ok(product)
}

pub async fn get_product(store: &dyn ProductStore, id: Uuid) -> Result<ProductSummary> {
    let aggregate = store
        .find_product_with_detail(id)
        .await?
        .ok_or_else(|| product_not_found(id))?;

    tracing::debug!(
        product_id = %id,
        has_detail = aggregate.detail.is_some(),
        "product loaded"
    );

    Ok(aggregate.product.into())
}

pub async fn list_products(store: &dyn ProductStore) -> Result<Vec<ProductSummary>> {
    let products = store.list_products().await?;

    Ok(products.into_iter().map(ProductSummary::from).collect())
}

pub async fn update_product(
    store: &dyn ProductStore,
    id: Uuid,
    req: ProductRequest,
) -> Result<Uuid> {
    let mut product = store
        .find_product(id)
        .await?
        .ok_or_else(|| product_not_found(id))?;

    product.apply(req);
    store.update_product(&product).await?;

    tracing::info!(product_id = %id, "product updated");

    Ok(product.id)
}

pub async fn delete_product(store: &dyn ProductStore, id: Uuid) -> Result<()> {
    if store.find_product(id).await?.is_none() {
        return Err(product_not_found(id));
    }

    store.delete_product(id).await?;

    tracing::info!(product_id = %id, "product deleted");

    Ok(())
}

pub async fn create_detail(
    store: &dyn ProductStore,
    product_id: Uuid,
    req: ProductDetailRequest,
) -> Result<Uuid> {
    let aggregate = store
        .find_product_with_detail(product_id)
        .await?
        .ok_or_else(|| {
            AppError::BadRequest(format!("product with id {} does not exist", product_id))
        })?;

    if aggregate.detail.is_some() {
        return Err(AppError::BadRequest(
            "product already has product details".to_string(),
        ));
    }

    let detail = ProductDetail::new(aggregate.product.id, req);
    store.insert_detail(&detail).await?;

    tracing::info!(product_id = %product_id, "product detail created");

    Ok(detail.id)
}

pub async fn get_detail(store: &dyn ProductStore, product_id: Uuid) -> Result<ProductDetail> {
    store
        .find_product_with_detail(product_id)
        .await?
        .and_then(|aggregate| aggregate.detail)
        .ok_or_else(|| detail_not_found(product_id))
}

pub async fn update_detail(
    store: &dyn ProductStore,
    product_id: Uuid,
    req: ProductDetailRequest,
) -> Result<Uuid> {
    let mut detail = store
        .find_product_with_detail(product_id)
        .await?
        .and_then(|aggregate| aggregate.detail)
        .ok_or_else(|| detail_not_found(product_id))?;

    detail.apply(req);
    store.update_detail(&detail).await?;

    tracing::info!(product_id = %product_id, "product detail updated");

    Ok(detail.id)
}

/// Looks the detail up by its own id, not through the owning product.
pub async fn delete_detail(store: &dyn ProductStore, detail_id: Uuid) -> Result<()> {
    if store.find_detail(detail_id).await?.is_none() {
        return Err(detail_not_found(detail_id));
    }

    store.delete_detail(detail_id).await?;

    tracing::info!(detail_id = %detail_id, "product detail deleted");

    Ok(())
}
