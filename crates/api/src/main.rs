//! TabTally - Weekly Browsing-Activity Report Service
//!
//! Main entry point for the HTTP service.

use std::sync::Arc;

use tabtally_api::{router, AppContext};
use tabtally_domain::AppConfig;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging FIRST so we can see .env loading
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load environment variables from .env file
    match dotenvy::dotenv() {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(err) => debug!(error = %err, "no .env file loaded"),
    }

    let config = AppConfig::from_env()?;
    info!(db_path = %config.database.path.display(), "tabtally starting");

    let ctx = Arc::new(AppContext::new(config.clone())?);
    let app = router(ctx);

    let listener = tokio::net::TcpListener::bind(config.server.bind_addr()).await?;
    info!(addr = %listener.local_addr()?, "tabtally listening");

    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

    info!("tabtally stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!(error = %err, "failed to listen for shutdown signal");
        return;
    }
    info!("shutdown signal received");
}
