//! HTTP error types for the public API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Fixed body text returned when a request body cannot be parsed.
///
/// The text is part of the public contract and must not vary per request.
pub const FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

/// Errors surfaced by the HTTP layer.
#[derive(Debug, PartialEq, Eq)]
pub enum AppError {
    /// The request body could not be parsed as the expected structured shape.
    MalformedRequest,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::MalformedRequest => (StatusCode::BAD_REQUEST, FAILURE_MESSAGE),
        };

        (status, Json(json!({ "message": message }))).into_response()
    }
}
