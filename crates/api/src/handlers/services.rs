use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use eyre::Result;
use salon_core::{
    errors::SalonError,
    models::{
        appointment::ListQuery,
        service::{CreateServiceRequest, DeleteServiceResponse, Service},
    },
};
use salon_db::repositories::service;
use std::sync::Arc;
use uuid::Uuid;

use crate::{middleware::error_handling::AppError, ApiState};

#[axum::debug_handler]
pub async fn create_service(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateServiceRequest>,
) -> Result<(StatusCode, Json<Service>), AppError> {
    payload.validate()?;

    let db_service = service::create_service(
        &state.db_pool,
        payload.name.trim(),
        payload.price,
        payload.duration_minutes,
        payload.description.as_deref(),
    )
    .await
    .map_err(SalonError::Database)?;

    Ok((StatusCode::CREATED, Json(db_service.into())))
}

/// Active services only.
#[axum::debug_handler]
pub async fn list_services(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Service>>, AppError> {
    let (offset, limit) = query.pagination()?;

    let services = service::list_active_services(&state.db_pool, offset, limit)
        .await
        .map_err(SalonError::Database)?;

    Ok(Json(services.into_iter().map(Service::from).collect()))
}

#[axum::debug_handler]
pub async fn get_service(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Service>, AppError> {
    let db_service = service::get_service_by_id(&state.db_pool, id)
        .await
        .map_err(SalonError::Database)?
        .ok_or_else(|| SalonError::NotFound(format!("Service with ID {} not found", id)))?;

    Ok(Json(db_service.into()))
}

/// Soft delete: the service disappears from the catalog but existing
/// appointments keep pointing at it.
#[axum::debug_handler]
pub async fn delete_service(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteServiceResponse>, AppError> {
    let db_service = service::deactivate_service(&state.db_pool, id)
        .await
        .map_err(SalonError::Database)?
        .ok_or_else(|| SalonError::NotFound(format!("Service with ID {} not found", id)))?;

    tracing::info!("Service {} deactivated", db_service.id);

    Ok(Json(DeleteServiceResponse {
        id: db_service.id,
        active: db_service.active,
    }))
}
