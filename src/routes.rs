//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /api/contact` - Contact form submission (rate limited)
//! - `GET  /health`      - Health check: diagnostic sink
//! - everything else     - Static site bundle from `STATIC_DIR`
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket (configurable for proxy deployments)
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{rate_limit, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `behind_proxy` - when `true`, rate limiting reads client IP from
///   `X-Forwarded-For` / `X-Real-IP` headers instead of the peer socket address;
///   enable only when the service runs behind a trusted reverse proxy
/// - `static_dir` - directory served for everything outside the API
pub fn app_router(state: AppState, behind_proxy: bool, static_dir: &str) -> NormalizePath<Router> {
    let api_router = api::routes::public_routes();

    let api_router = if behind_proxy {
        api_router.layer(rate_limit::proxied_layer())
    } else {
        api_router.layer(rate_limit::layer())
    };

    let router = Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .fallback_service(ServeDir::new(static_dir))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
