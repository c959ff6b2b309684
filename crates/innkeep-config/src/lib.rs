//! # Innkeep Config
//!
//! Configuration types for the Innkeep API.
//!
//! This crate provides configuration structures loaded from environment variables:
//!
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`database`]: PostgreSQL connection settings
//! - [`observability`]: Log output, OTLP export and Prometheus settings
//! - [`server`]: HTTP listener settings
//!
//! # Example
//!
//! ```ignore
//! use innkeep_config::{CorsConfig, DatabaseConfig, ServerConfig};
//!
//! // Load all configs from environment
//! let cors_config = CorsConfig::from_env();
//! let database_config = DatabaseConfig::from_env();
//! let server_config = ServerConfig::from_env();
//! ```

pub mod cors;
pub mod database;
pub mod observability;
pub mod server;

// Re-export commonly used types at crate root
pub use cors::CorsConfig;
pub use database::DatabaseConfig;
pub use observability::ObservabilityConfig;
pub use server::ServerConfig;

/// Reads and parses an environment variable, falling back to `default` when
/// it is unset or unparsable.
pub(crate) fn env_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
