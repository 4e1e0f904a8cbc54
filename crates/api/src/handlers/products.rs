use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use eyre::Result;
use salon_core::{
    errors::SalonError,
    inventory,
    models::product::{CreateProductRequest, Product, ProductUsageQuery},
};
use salon_db::repositories::product;
use std::sync::Arc;
use uuid::Uuid;

use crate::{middleware::error_handling::AppError, ApiState};

#[axum::debug_handler]
pub async fn create_product(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateProductRequest>,
) -> Result<(StatusCode, Json<Product>), AppError> {
    payload.validate()?;

    let db_product = product::create_product(
        &state.db_pool,
        payload.name.trim(),
        payload.quantity,
        payload.price.unwrap_or_default(),
        payload.unit(),
    )
    .await
    .map_err(SalonError::Database)?;

    Ok((StatusCode::CREATED, Json(db_product.into())))
}

#[axum::debug_handler]
pub async fn list_products(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<Product>>, AppError> {
    let products = product::list_products(&state.db_pool)
        .await
        .map_err(SalonError::Database)?;

    Ok(Json(products.into_iter().map(Product::from).collect()))
}

/// Records usage of a product, taking `quantity` units (default 1) from stock.
#[axum::debug_handler]
pub async fn use_product(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    Query(query): Query<ProductUsageQuery>,
) -> Result<Json<Product>, AppError> {
    let amount = inventory::usage_amount(query.quantity)?;

    if let Some(updated) = product::consume_stock(&state.db_pool, id, amount)
        .await
        .map_err(SalonError::Database)?
    {
        tracing::debug!("Product {} stock now {}", updated.id, updated.quantity);
        return Ok(Json(updated.into()));
    }

    // Nothing was updated: either the product is missing or stock is short.
    let current = product::get_product_by_id(&state.db_pool, id)
        .await
        .map_err(SalonError::Database)?
        .ok_or_else(|| SalonError::NotFound(format!("Product with ID {} not found", id)))?;
    inventory::remaining_stock(current.quantity, amount)?;

    Err(SalonError::Conflict(format!("Stock of product {} changed concurrently", id)).into())
}
