use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod auth;
mod config;
mod error;
mod routes;

use config::ServiceConfig;
use routes::{app, AppState};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServiceConfig::default();
    let addr = config.addr;
    info!(
        "crossing-backend {} using reference set {}",
        crossing_core::version(),
        config.reference_path.display()
    );

    let app = app(Arc::new(AppState::new(config)));

    let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
        error!("Failed to bind {}: {}", addr, e);
        e
    })?;
    info!("listening on {}", addr);

    axum::serve(listener, app).await.map_err(|e| {
        error!("Server error: {}", e);
        e
    })
}
