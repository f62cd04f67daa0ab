//! StrayCare - operational dashboard service
//!
//! Main entry point for the HTTP server.

use std::sync::Arc;

use anyhow::Context;
use straycare_lib::utils::logging::init_logging;
use straycare_lib::{router, AppContext};
use tokio::net::TcpListener;
use tracing::{debug, info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before configuration so STRAYCARE_* variables are visible.
    let dotenv = dotenvy::dotenv();

    let config = straycare_infra::config::load().context("failed to load configuration")?;
    init_logging(&config.logging).context("failed to install tracing subscriber")?;

    match dotenv {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(err) => debug!(error = %err, "no .env file loaded"),
    }

    let bind_address = config.server.bind_address.clone();
    let ctx = Arc::new(AppContext::new(config).context("failed to initialise application")?);

    let listener = TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("failed to bind {bind_address}"))?;
    info!(address = %bind_address, "straycare dashboard listening");

    axum::serve(listener, router(ctx)).with_graceful_shutdown(shutdown_signal()).await?;

    info!("straycare dashboard stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
