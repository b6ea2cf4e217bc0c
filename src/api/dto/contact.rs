//! DTOs for the contact submission endpoint.

use serde::Serialize;

/// Fixed acknowledgement text returned whenever a submission body parses.
///
/// Part of the public contract: the text never varies with the payload.
pub const ACK_MESSAGE: &str = "Thanks! We'll be in touch shortly.";

/// Response body for an acknowledged submission.
#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub message: &'static str,
}

impl ContactResponse {
    /// The canned receipt acknowledgement.
    pub fn received() -> Self {
        Self {
            message: ACK_MESSAGE,
        }
    }
}
