use axum::{extract::State, http::StatusCode, Extension, Json};
use eyre::Result;
use salon_core::{
    access::Principal,
    errors::SalonError,
    models::{
        auth::{LoginRequest, RegisterRequest, TokenResponse},
        user::{Role, User},
    },
};
use salon_db::repositories::user;
use std::sync::Arc;

use crate::{
    handlers::users::{normalize_email, user_insert_error},
    middleware::{auth, error_handling::AppError},
    ApiState,
};

/// Self-service sign up. Always creates a client account.
#[axum::debug_handler]
pub async fn register(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<TokenResponse>), AppError> {
    payload.validate()?;

    let password_hash = auth::hash_password(&payload.password)?;
    let db_user = user::create_user(
        &state.db_pool,
        payload.name.trim(),
        &normalize_email(&payload.email),
        &password_hash,
        Role::Client.as_str(),
        None,
    )
    .await
    .map_err(user_insert_error)?;
    let created = User::try_from(db_user).map_err(SalonError::Database)?;

    let token = auth::issue_token(&state, &created).await?;
    Ok((StatusCode::CREATED, Json(token)))
}

#[axum::debug_handler]
pub async fn login(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    let rejected = || SalonError::Authentication("Invalid email or password".to_string());

    let db_user = user::get_user_by_email(&state.db_pool, &normalize_email(&payload.email))
        .await
        .map_err(SalonError::Database)?
        .ok_or_else(rejected)?;

    if !db_user.active || !auth::verify_password(&payload.password, &db_user.password_hash) {
        tracing::debug!("Rejected login for user {}", db_user.id);
        return Err(rejected().into());
    }

    let found = User::try_from(db_user).map_err(SalonError::Database)?;
    let token = auth::issue_token(&state, &found).await?;

    Ok(Json(token))
}

/// The caller's own identity, as resolved from the bearer token.
#[axum::debug_handler]
pub async fn me(Extension(principal): Extension<Principal>) -> Json<Principal> {
    Json(principal)
}
