use dotenvy::dotenv;
use innkeep::logging::{init_tracing, shutdown_tracer};
use innkeep::metrics::{init_metrics, metrics_app};
use innkeep::router::init_router;
use innkeep::state::init_app_state;
use innkeep_config::{DatabaseConfig, ObservabilityConfig, ServerConfig};
use innkeep_db::run_migrations;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let observability = ObservabilityConfig::from_env();
    init_tracing(&observability);

    let server = ServerConfig::from_env();
    let database = DatabaseConfig::from_env();

    let state = init_app_state(&database).await;
    run_migrations(&state.db).await?;

    if let Some(handle) = init_metrics(&observability)? {
        let metrics_addr = format!("{}:{}", server.host, observability.metrics_port);
        let listener = tokio::net::TcpListener::bind(&metrics_addr).await?;
        info!(address = %metrics_addr, "Metrics server listening");
        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, metrics_app(handle)).await {
                error!(error = %e, "Metrics server stopped");
            }
        });
    }

    let app = init_router(state);
    let addr = server.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(address = %addr, "Server running");
    info!("Swagger UI available at http://{}/swagger-ui", addr);
    info!("Scalar UI available at http://{}/scalar", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    shutdown_tracer();
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
    }
    info!("Shutdown signal received");
}
