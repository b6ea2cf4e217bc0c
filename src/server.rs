//! HTTP server initialization and runtime setup.
//!
//! Handles sink construction, router assembly, and Axum server lifecycle.

use crate::config::Config;
use crate::infrastructure::sink::{DiagnosticSink, TracingSink};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::extract::Request;
use axum::ServiceExt;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Diagnostic sink (tracing-backed)
/// - Axum HTTP server with graceful shutdown on ctrl-c
///
/// # Errors
///
/// Returns an error if:
/// - The listen address does not parse
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let sink: Arc<dyn DiagnosticSink> = Arc::new(TracingSink::new());

    let state = AppState::new(sink);

    if !Path::new(&config.static_dir).is_dir() {
        tracing::warn!(
            "Static dir '{}' does not exist; site requests will return 404",
            config.static_dir
        );
    }

    let app = app_router(state, config.behind_proxy, &config.static_dir);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

/// Resolves when the process receives ctrl-c.
async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => tracing::error!("Failed to listen for shutdown signal: {e}"),
    }
}
