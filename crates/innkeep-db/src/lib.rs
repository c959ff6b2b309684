//! # Innkeep DB
//!
//! Database pool and migrations for the Innkeep API.
//!
//! This crate provides database connection pool initialization using SQLx
//! with PostgreSQL, and embeds the SQL migrations under `migrations/` at the
//! workspace root.
//!
//! # Example
//!
//! ```ignore
//! use innkeep_config::DatabaseConfig;
//! use innkeep_db::{init_db_pool, run_migrations};
//!
//! #[tokio::main]
//! async fn main() {
//!     let pool = init_db_pool(&DatabaseConfig::from_env()).await;
//!     run_migrations(&pool).await.unwrap();
//! }
//! ```

use innkeep_config::DatabaseConfig;
use sqlx::migrate::{MigrateError, Migrator};
use sqlx::postgres::PgPoolOptions;
use tracing::info;

/// Migrations shipped with the workspace.
pub static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Initializes a PostgreSQL connection pool.
///
/// # Panics
///
/// Panics if the connection to the database fails.
pub async fn init_db_pool(config: &DatabaseConfig) -> PgPool {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.url)
        .await
        .expect("Failed to connect to database");

    info!(
        max_connections = config.max_connections,
        "Database pool initialized"
    );

    pool
}

/// Applies pending migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<(), MigrateError> {
    MIGRATOR.run(pool).await?;
    info!("Database migrations applied");
    Ok(())
}

// Re-export PgPool for convenience
pub use sqlx::PgPool;
