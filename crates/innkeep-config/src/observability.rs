use std::env;

use crate::env_or;

/// Observability settings loaded from environment variables.
///
/// # Environment Variables
///
/// - `OBSERVABILITY_ENABLED`: set to `false` or `0` to disable metrics (default: enabled)
/// - `LOG_DIR`: directory for rolling log files (default: `storage/logs`)
/// - `OTEL_EXPORTER_OTLP_ENDPOINT`: OTLP collector; tracing export is off when unset
/// - `METRICS_PORT`: port of the Prometheus listener (default: `9090`)
/// - `ENVIRONMENT`: deployment environment tag (default: `development`)
#[derive(Clone, Debug)]
pub struct ObservabilityConfig {
    pub enabled: bool,
    pub log_dir: String,
    pub otlp_endpoint: Option<String>,
    pub metrics_port: u16,
    pub environment: String,
}

impl ObservabilityConfig {
    pub fn from_env() -> Self {
        Self {
            enabled: env::var("OBSERVABILITY_ENABLED")
                .map(|v| parse_enabled(&v))
                .unwrap_or(true),
            log_dir: env::var("LOG_DIR").unwrap_or_else(|_| "storage/logs".to_string()),
            otlp_endpoint: env::var("OTEL_EXPORTER_OTLP_ENDPOINT")
                .ok()
                .filter(|v| !v.trim().is_empty()),
            metrics_port: env_or("METRICS_PORT", 9090),
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
        }
    }
}

fn parse_enabled(value: &str) -> bool {
    value.to_lowercase() != "false" && value != "0"
}
