//! Contact submission entity and lenient wire parsing.

use crate::error::AppError;
use serde_json::{Map, Value};

/// A single contact form enquiry.
///
/// All fields are optional at the wire level: the intake endpoint performs
/// no validation and acknowledges receipt regardless of which fields were
/// filled in. The submission lives only for the duration of one request;
/// it is recorded to the diagnostic sink and then dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
}

impl ContactSubmission {
    /// Parses a raw request body into a submission, best-effort.
    ///
    /// Accepted bodies:
    ///
    /// - a JSON object: string fields are extracted, anything else (absent
    ///   or non-string values) is treated as not provided
    /// - JSON `null`: treated as an empty submission
    ///
    /// # Errors
    ///
    /// Returns [`AppError::MalformedRequest`] if the body is not valid JSON
    /// or its root is neither an object nor `null`.
    pub fn from_json_body(body: &[u8]) -> Result<Self, AppError> {
        let value: Value =
            serde_json::from_slice(body).map_err(|_| AppError::MalformedRequest)?;

        match value {
            Value::Null => Ok(Self::default()),
            Value::Object(mut fields) => Ok(Self {
                name: take_text(&mut fields, "name"),
                email: take_text(&mut fields, "email"),
                phone: take_text(&mut fields, "phone"),
                message: take_text(&mut fields, "message"),
            }),
            _ => Err(AppError::MalformedRequest),
        }
    }

    /// Returns true when no field carries a value.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.phone.is_none() && self.message.is_none()
    }
}

/// Extracts a string field from a parsed object, discarding other types.
fn take_text(fields: &mut Map<String, Value>, key: &str) -> Option<String> {
    match fields.remove(key) {
        Some(Value::String(text)) => Some(text),
        _ => None,
    }
}
