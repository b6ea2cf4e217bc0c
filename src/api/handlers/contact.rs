//! Handler for the contact submission endpoint.

use axum::{body::Bytes, extract::State, Json};

use crate::api::dto::contact::ContactResponse;
use crate::domain::submission::ContactSubmission;
use crate::error::AppError;
use crate::state::AppState;

/// Receives a contact form submission and acknowledges receipt.
///
/// # Endpoint
///
/// `POST /api/contact`
///
/// # Request Body
///
/// ```json
/// {
///   "name": "Jane Doe",
///   "email": "jane@example.com",
///   "phone": "",
///   "message": "Hi"
/// }
/// ```
///
/// Parsing is best-effort: fields are all optional, a `null` body is
/// treated as an empty submission, and no field is validated. The only way
/// to be rejected is a body that does not parse as a JSON object or `null`.
///
/// # Response
///
/// Always the same canned acknowledgement on parse:
///
/// ```json
/// { "message": "Thanks! We'll be in touch shortly." }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request with a fixed message if the body is malformed.
///
/// # Side Effects
///
/// The received fields are recorded to the diagnostic sink. That is the
/// only side effect; nothing is stored or dispatched downstream.
pub async fn contact_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ContactResponse>, AppError> {
    let submission = ContactSubmission::from_json_body(&body)?;

    state.contact_service.submit(submission).await;

    Ok(Json(ContactResponse::received()))
}
