use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, middleware::auth::require_admin, ApiState};

pub fn routes(state: Arc<ApiState>) -> Router<Arc<ApiState>> {
    let public = Router::new()
        .route("/api/services", get(handlers::services::list_services))
        .route("/api/services/:id", get(handlers::services::get_service));

    let admin = Router::new()
        .route("/api/services", post(handlers::services::create_service))
        .route("/api/services/:id", delete(handlers::services::delete_service))
        .route_layer(middleware::from_fn_with_state(state, require_admin));

    public.merge(admin)
}
