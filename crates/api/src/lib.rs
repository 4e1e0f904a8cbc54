//! # Salon API
//!
//! The API crate provides the web server implementation for the salon
//! scheduling and inventory backend. It defines RESTful endpoints for
//! appointments, the service catalog, staff, products, authentication and
//! financial reporting.
//!
//! ## Architecture
//!
//! This crate follows a layered architecture:
//!
//! - **Routes**: Define API endpoints, URL structure and which role each group requires
//! - **Handlers**: Translate HTTP requests into core operations
//! - **Middleware**: Authentication, role checks and error mapping
//! - **Config**: Handle environment and application configuration
//!
//! Booking and status changes go through the core `SchedulingEngine`, backed
//! by the transactional `PgSchedulingStore`.

/// Configuration module for API settings
pub mod config;
/// Request handlers
pub mod handlers;
/// Middleware for authentication, role checks and error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::{sync::Arc, time::Duration};

use axum::{http::HeaderValue, Router};
use eyre::{Result, WrapErr};
use salon_core::scheduling::SchedulingEngine;
use salon_db::store::PgSchedulingStore;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::FmtSubscriber;

/// Shared application state that is accessible to all request handlers
pub struct ApiState {
    /// PostgreSQL connection pool for database operations
    pub db_pool: PgPool,
    /// Booking engine over the same pool
    pub scheduler: SchedulingEngine<PgSchedulingStore>,
    /// Lifetime of issued access tokens
    pub token_ttl: chrono::Duration,
}

impl ApiState {
    /// Fails when `token_ttl_hours` is not a representable positive duration.
    pub fn new(db_pool: PgPool, token_ttl_hours: i64) -> Result<Self> {
        let token_ttl = chrono::Duration::try_hours(token_ttl_hours)
            .filter(|ttl| *ttl > chrono::Duration::zero())
            .ok_or_else(|| eyre::eyre!("Invalid token lifetime of {} hours", token_ttl_hours))?;

        Ok(Self {
            scheduler: SchedulingEngine::new(PgSchedulingStore::new(db_pool.clone())),
            db_pool,
            token_ttl,
        })
    }
}

/// Builds the application router with every route group attached.
pub fn build_router(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Registration and login
        .merge(routes::auth::routes(state.clone()))
        // Booking, calendar views and status changes
        .merge(routes::appointments::routes(state.clone()))
        // Service catalog
        .merge(routes::services::routes(state.clone()))
        // Staff and user management
        .merge(routes::users::routes(state.clone()))
        // Product inventory
        .merge(routes::products::routes(state.clone()))
        // Financial reports
        .merge(routes::reports::routes(state.clone()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> Result<CorsLayer> {
    let origins = origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .wrap_err_with(|| format!("Invalid CORS origin '{}'", origin))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::PATCH,
            axum::http::Method::DELETE,
            axum::http::Method::OPTIONS,
        ])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::AUTHORIZATION,
            axum::http::header::ACCEPT,
        ])
        .allow_origin(origins)
        .allow_credentials(true))
}

/// Starts the API server with the provided configuration and database connection
///
/// # Arguments
///
/// * `config` - API configuration including host, port, and other settings
/// * `db_pool` - PostgreSQL connection pool for database operations
pub async fn start_server(config: config::ApiConfig, db_pool: PgPool) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let state = Arc::new(ApiState::new(db_pool, config.token_ttl_hours)?);
    let app = build_router(state);

    // Apply CORS configuration if origins are specified
    let app = match &config.cors_origins {
        Some(origins) => app.layer(cors_layer(origins)?),
        None => app,
    };

    // Add request timeout middleware
    let app = app.layer(
        ServiceBuilder::new().layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout))),
    );

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
