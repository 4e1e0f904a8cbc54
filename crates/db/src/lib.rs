//! # Salon DB
//!
//! PostgreSQL persistence for the salon backend: connection pool, schema
//! bootstrap, plain repository functions per table, and
//! [`store::PgSchedulingStore`], the transactional implementation of the
//! scheduling store used by the booking engine.

pub mod errors;
pub mod models;
pub mod repositories;
pub mod schema;
pub mod store;

use eyre::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};

pub type DbPool = Pool<Postgres>;

pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;

    Ok(pool)
}
