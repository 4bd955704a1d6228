//! Todo API HTTP server.
//!
//! Serves an in-memory to-do list under `/api` with health probes at
//! `/health`. Configuration comes from the environment (see
//! [`todo_api_server::Config`]).
//!
//! # Running
//!
//! ```bash
//! PORT=5000 CORS_ALLOWED_ORIGINS='*' cargo run --bin todo-api
//! ```

use anyhow::Context;
use std::sync::Arc;
use tokio::sync::Notify;
use todo_api_server::{Config, init_tracing, shutdown_signal};
use todo_api_web::{AppState, build_router};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let config = Config::from_env().context("invalid configuration")?;
    init_tracing(&config.server.log_filter);

    info!("Starting Todo API server");
    info!(
        cors_permissive = config.cors.is_permissive(),
        shutdown_timeout_secs = config.server.shutdown_timeout,
        "Configuration loaded"
    );

    let state = AppState::empty();
    let app = build_router(state.clone(), &config.cors);

    let address = config.server.address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;
    info!(address = %address, "Server listening");

    let stop = Arc::new(Notify::new());
    let stop_serving = Arc::clone(&stop);
    let mut server = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async move { stop_serving.notified().await })
            .await
    });

    tokio::select! {
        joined = &mut server => {
            joined.context("server task panicked")??;
            info!("Server stopped");
            return Ok(());
        }
        () = shutdown_signal() => {}
    }

    // New mutations are refused with 503 while in-flight requests drain
    state.store.shutdown();
    stop.notify_one();

    match tokio::time::timeout(config.server.shutdown_timeout(), server).await {
        Ok(joined) => joined.context("server task panicked")??,
        Err(_) => warn!(
            timeout_secs = config.server.shutdown_timeout,
            "Graceful shutdown timed out, dropping open connections"
        ),
    }

    info!("Server stopped");
    Ok(())
}
