use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use eyre::Result;
use salon_core::{
    errors::SalonError,
    models::appointment::{
        Appointment, CreateAppointmentRequest, DayQuery, ListQuery, MonthQuery,
        UpdateStatusRequest,
    },
    scheduling::parse_day,
};
use salon_db::{models::convert_all, repositories::appointment};
use std::sync::Arc;
use uuid::Uuid;

use crate::{middleware::error_handling::AppError, ApiState};

#[axum::debug_handler]
pub async fn create_appointment(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateAppointmentRequest>,
) -> Result<(StatusCode, Json<Appointment>), AppError> {
    let appointment = state.scheduler.create_appointment(payload).await?;

    Ok((StatusCode::CREATED, Json(appointment)))
}

/// Every appointment, newest first, including cancelled ones.
#[axum::debug_handler]
pub async fn list_appointments(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Appointment>>, AppError> {
    let (offset, limit) = query.pagination()?;

    let rows = appointment::list_appointments(&state.db_pool, offset, limit)
        .await
        .map_err(SalonError::Database)?;
    let appointments = convert_all(rows).map_err(SalonError::Database)?;

    Ok(Json(appointments))
}

#[axum::debug_handler]
pub async fn appointments_by_month(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<MonthQuery>,
) -> Result<Json<Vec<Appointment>>, AppError> {
    let appointments = state
        .scheduler
        .appointments_in_month(query.year, query.month)
        .await?;

    Ok(Json(appointments))
}

#[axum::debug_handler]
pub async fn appointments_by_day(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<DayQuery>,
) -> Result<Json<Vec<Appointment>>, AppError> {
    let date = parse_day(&query.date)?;
    let appointments = state
        .scheduler
        .appointments_in_day(date, query.employee_id)
        .await?;

    Ok(Json(appointments))
}

#[axum::debug_handler]
pub async fn update_status(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateStatusRequest>,
) -> Result<Json<Appointment>, AppError> {
    let appointment = state.scheduler.update_status(id, &payload.status).await?;

    Ok(Json(appointment))
}
