// Postgres connection setup

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::domain::errors::{RosterError, RosterResult};

/// Connects to Postgres and applies the embedded migrations
pub async fn connect(database_url: &str, max_connections: u32) -> RosterResult<PgPool> {
    tracing::info!("Connecting to database...");
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .map_err(|e| RosterError::storage(format!("Failed to run migrations: {}", e)))?;

    tracing::info!("Database connected successfully");
    Ok(pool)
}
