#![cfg(test)]
//! Shared helpers for database-backed tests.

use std::time::Duration;

use migration::MigratorTrait;
use models::db::{connect_with_config, DatabaseConfig};
use sea_orm::DatabaseConnection;

/// Fresh in-memory SQLite database with the schema applied.
///
/// Every call returns an isolated database. The pool is pinned to a single
/// connection, which keeps the in-memory store alive for the test's
/// duration.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    common::utils::logging::init_logging_default();
    let cfg = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        min_connections: 1,
        acquire_timeout: Duration::from_secs(10),
    };
    let db = connect_with_config(&cfg).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}
