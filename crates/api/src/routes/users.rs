use axum::{
    middleware,
    routing::{delete, get},
    Router,
};
use std::sync::Arc;

use crate::{handlers, middleware::auth::require_admin, ApiState};

pub fn routes(state: Arc<ApiState>) -> Router<Arc<ApiState>> {
    let public = Router::new().route("/api/staff", get(handlers::users::list_staff));

    let admin = Router::new()
        .route(
            "/api/users",
            get(handlers::users::list_users).post(handlers::users::create_user),
        )
        .route("/api/users/:id", delete(handlers::users::delete_user))
        .route_layer(middleware::from_fn_with_state(state, require_admin));

    public.merge(admin)
}
