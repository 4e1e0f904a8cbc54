use axum::{middleware, routing::get, Router};
use std::sync::Arc;

use crate::{handlers, middleware::auth::require_admin, ApiState};

pub fn routes(state: Arc<ApiState>) -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/reports/financial", get(handlers::reports::financial_summary))
        .route_layer(middleware::from_fn_with_state(state, require_admin))
}
