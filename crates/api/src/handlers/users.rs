use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use eyre::{Report, Result};
use salon_core::{
    errors::SalonError,
    models::user::{CreateUserRequest, StaffMember, User},
};
use salon_db::{
    errors::{report_violation, ConstraintViolation},
    models::convert_all,
    repositories::user,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    middleware::{auth, error_handling::AppError},
    ApiState,
};

pub(crate) fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Maps a failed user insert, turning a taken email into a conflict.
pub(crate) fn user_insert_error(err: Report) -> SalonError {
    match report_violation(&err) {
        Some(ConstraintViolation::Unique(_)) => {
            SalonError::Conflict("Email already registered".to_string())
        }
        _ => SalonError::Database(err),
    }
}

/// Bookable professionals, visible without authentication.
#[axum::debug_handler]
pub async fn list_staff(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<StaffMember>>, AppError> {
    let rows = user::list_staff(&state.db_pool)
        .await
        .map_err(SalonError::Database)?;
    let users: Vec<User> = convert_all(rows).map_err(SalonError::Database)?;

    Ok(Json(users.into_iter().map(StaffMember::from).collect()))
}

#[axum::debug_handler]
pub async fn list_users(State(state): State<Arc<ApiState>>) -> Result<Json<Vec<User>>, AppError> {
    let rows = user::list_users(&state.db_pool)
        .await
        .map_err(SalonError::Database)?;
    let users = convert_all(rows).map_err(SalonError::Database)?;

    Ok(Json(users))
}

#[axum::debug_handler]
pub async fn create_user(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<User>), AppError> {
    payload.validate()?;

    let password_hash = auth::hash_password(&payload.password)?;
    let db_user = user::create_user(
        &state.db_pool,
        payload.name.trim(),
        &normalize_email(&payload.email),
        &password_hash,
        payload.role().as_str(),
        payload.effective_commission(),
    )
    .await
    .map_err(user_insert_error)?;

    let created = User::try_from(db_user).map_err(SalonError::Database)?;
    tracing::info!("User {} created with role {}", created.id, created.role);

    Ok((StatusCode::CREATED, Json(created)))
}

/// Hard delete. Users still referenced by appointments cannot be removed.
#[axum::debug_handler]
pub async fn delete_user(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let deleted = user::delete_user(&state.db_pool, id)
        .await
        .map_err(|err| match report_violation(&err) {
            Some(ConstraintViolation::ForeignKey(_)) => SalonError::Conflict(format!(
                "User {} still has appointments and cannot be deleted",
                id
            )),
            _ => SalonError::Database(err),
        })?;

    if !deleted {
        return Err(SalonError::NotFound(format!("User with ID {} not found", id)).into());
    }

    tracing::info!("User {} deleted", id);
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("  Ana@Salon.COM "), "ana@salon.com");
    }

    #[test]
    fn test_plain_insert_error_stays_database() {
        let err = user_insert_error(eyre::eyre!("connection reset"));
        assert!(matches!(err, SalonError::Database(_)));
    }
}
