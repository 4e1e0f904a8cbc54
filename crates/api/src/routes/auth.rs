use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, middleware::auth::require_user, ApiState};

pub fn routes(state: Arc<ApiState>) -> Router<Arc<ApiState>> {
    let public = Router::new()
        .route("/api/auth/register", post(handlers::auth::register))
        .route("/api/auth/login", post(handlers::auth::login));

    let authenticated = Router::new()
        .route("/api/auth/me", get(handlers::auth::me))
        .route_layer(middleware::from_fn_with_state(state, require_user));

    public.merge(authenticated)
}
