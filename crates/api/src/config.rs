//! # API Configuration Module
//!
//! This module handles loading and managing configuration for the salon API server.
//! It retrieves configuration values from environment variables and provides defaults
//! where appropriate.
//!
//! ## Environment Variables
//!
//! The following environment variables are used:
//!
//! - `API_HOST`: The host address to bind the server to (default: "0.0.0.0")
//! - `API_PORT`: The port to listen on (default: 3000)
//! - `DATABASE_URL`: PostgreSQL connection string (required)
//! - `DATABASE_MAX_CONNECTIONS`: Size of the connection pool (default: 5)
//! - `LOG_LEVEL`: Logging level (default: "info")
//! - `API_CORS_ORIGINS`: Comma-separated list of allowed CORS origins
//! - `API_REQUEST_TIMEOUT_SECONDS`: Per-request timeout (default: 30)
//! - `TOKEN_TTL_HOURS`: Lifetime of issued access tokens (default: 24, at most 8760)

use eyre::{Result, WrapErr};
use std::env;
use tracing::Level;

/// Upper bound for `TOKEN_TTL_HOURS`, one year.
pub const MAX_TOKEN_TTL_HOURS: i64 = 24 * 365;

/// Configuration for the salon API server
///
/// # Example
///
/// ```no_run
/// use eyre::Result;
/// use salon_api::config::ApiConfig;
///
/// fn example() -> Result<()> {
///     let config = ApiConfig::from_env()?;
///     println!("Starting server on {}:{}", config.host, config.port);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host address for the API server (e.g., "127.0.0.1", "0.0.0.0")
    pub host: String,

    /// Port for the API server to listen on
    pub port: u16,

    /// PostgreSQL database connection string
    pub database_url: String,

    /// Maximum number of pooled database connections
    pub database_max_connections: u32,

    /// Log level for the application
    pub log_level: Level,

    /// CORS allowed origins (optional)
    pub cors_origins: Option<Vec<String>>,

    /// Request timeout in seconds
    pub request_timeout: u64,

    /// Access token lifetime in hours
    pub token_ttl_hours: i64,
}

impl ApiConfig {
    /// Creates a new ApiConfig from environment variables
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The DATABASE_URL environment variable is not set
    /// - The API_PORT value cannot be parsed as a u16
    /// - DATABASE_MAX_CONNECTIONS or TOKEN_TTL_HOURS are not positive integers
    /// - TOKEN_TTL_HOURS exceeds [`MAX_TOKEN_TTL_HOURS`]
    pub fn from_env() -> Result<Self> {
        // Network settings
        let host = env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("API_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .wrap_err("Invalid API_PORT value")?;

        // Database settings
        let database_url = env::var("DATABASE_URL")
            .wrap_err("DATABASE_URL environment variable must be set")?;
        let database_max_connections = parse_positive(
            "DATABASE_MAX_CONNECTIONS",
            env::var("DATABASE_MAX_CONNECTIONS").ok(),
            5,
        )?;

        // Logging settings
        let log_level = parse_log_level(env::var("LOG_LEVEL").ok().as_deref());

        // CORS settings
        let cors_origins = env::var("API_CORS_ORIGINS")
            .ok()
            .map(|origins| parse_origins(&origins));

        // Performance settings
        let request_timeout = env::var("API_REQUEST_TIMEOUT_SECONDS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .unwrap_or(30);

        // Security settings
        let token_ttl_hours = parse_token_ttl(env::var("TOKEN_TTL_HOURS").ok())?;

        Ok(Self {
            host,
            port,
            database_url,
            database_max_connections,
            log_level,
            cors_origins,
            request_timeout,
            token_ttl_hours,
        })
    }

    /// Returns the server address as a string
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Maps a `LOG_LEVEL` value to a tracing level, defaulting to INFO.
pub fn parse_log_level(value: Option<&str>) -> Level {
    match value.unwrap_or("info").to_ascii_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

/// Splits a comma-separated origin list, dropping empty entries.
pub fn parse_origins(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parses `TOKEN_TTL_HOURS`, defaulting to 24 and capped at [`MAX_TOKEN_TTL_HOURS`].
pub fn parse_token_ttl(value: Option<String>) -> Result<i64> {
    let hours = parse_positive("TOKEN_TTL_HOURS", value, 24)?;
    if hours > MAX_TOKEN_TTL_HOURS {
        return Err(eyre::eyre!(
            "TOKEN_TTL_HOURS must be at most {}, got {}",
            MAX_TOKEN_TTL_HOURS,
            hours
        ));
    }
    Ok(hours)
}

fn parse_positive<T>(name: &str, value: Option<String>, default: T) -> Result<T>
where
    T: std::str::FromStr + PartialOrd + Default,
{
    let Some(raw) = value else {
        return Ok(default);
    };
    let parsed: T = raw
        .trim()
        .parse()
        .map_err(|_| eyre::eyre!("Invalid {} value '{}'", name, raw))?;
    if parsed <= T::default() {
        return Err(eyre::eyre!("{} must be positive", name));
    }
    Ok(parsed)
}
