use axum::{
    middleware,
    routing::{get, patch, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, middleware::auth::require_staff, ApiState};

pub fn routes(state: Arc<ApiState>) -> Router<Arc<ApiState>> {
    let public = Router::new()
        .route("/api/appointments", post(handlers::appointments::create_appointment))
        .route(
            "/api/appointments/month",
            get(handlers::appointments::appointments_by_month),
        )
        .route(
            "/api/appointments/day",
            get(handlers::appointments::appointments_by_day),
        );

    let staff = Router::new()
        .route("/api/appointments", get(handlers::appointments::list_appointments))
        .route(
            "/api/appointments/:id/status",
            patch(handlers::appointments::update_status),
        )
        .route_layer(middleware::from_fn_with_state(state, require_staff));

    public.merge(staff)
}
