//! API route configuration.

use crate::api::handlers::contact_handler;
use crate::state::AppState;
use axum::{routing::post, Router};

/// All public API routes.
///
/// # Endpoints
///
/// - `POST /contact` - Receive a contact form submission
pub fn public_routes() -> Router<AppState> {
    Router::new().route("/contact", post(contact_handler))
}
