//! HTTP server runtime setup.
//!
//! Binds the listener and runs the Axum server over a caller-supplied
//! [`Storage`] backend.

use crate::config::Config;
use crate::domain::Storage;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Runs the HTTP server with the given configuration and storage backend.
///
/// Returns once a Ctrl-C shutdown signal has been received and in-flight
/// requests have completed.
///
/// # Example
///
/// ```rust,ignore
/// let config = shortlink_core::config::load_from_env()?;
/// shortlink_core::telemetry::init(&config)?;
/// shortlink_core::server::run(config, Arc::new(MyStorage::connect().await?)).await
/// ```
///
/// # Errors
///
/// Returns an error if:
/// - `listen_addr` cannot be parsed or bound
/// - Server runtime error occurs
pub async fn run(config: Config, storage: Arc<dyn Storage>) -> Result<()> {
    config.print_summary();

    let state = AppState::new(storage).with_max_body_bytes(config.max_body_bytes);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    serve(listener, state).await
}

/// Serves the application on an already bound listener until shutdown.
///
/// # Errors
///
/// Returns an error if the server fails while accepting connections.
pub async fn serve(listener: TcpListener, state: AppState) -> Result<()> {
    let app = app_router(state);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => {
            tracing::error!("Failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
