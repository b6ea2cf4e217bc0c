//! Diagnostic sink trait and error types.

use crate::domain::submission::ContactSubmission;
use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur while recording a submission.
#[derive(Debug, Error)]
pub enum SinkError {
    /// The sink could not accept the record.
    #[error("sink write error: {0}")]
    Write(String),
}

/// Result type for sink operations.
pub type SinkResult<T> = Result<T, SinkError>;

/// Trait for recording received contact submissions.
///
/// The sink is the only side effect of the intake endpoint. It is
/// fire-and-forget: callers log failures and acknowledge receipt to the
/// client regardless, so implementations must never disrupt the request
/// flow. Nothing recorded here is a persistence guarantee.
///
/// # Implementations
///
/// - [`crate::infrastructure::sink::TracingSink`] - Structured log events
/// - [`crate::infrastructure::sink::MemorySink`] - In-memory buffer for tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DiagnosticSink: Send + Sync {
    /// Records the fields of a received submission.
    ///
    /// # Errors
    ///
    /// Returns [`SinkError::Write`] if the record could not be accepted.
    /// Callers treat this as a diagnostic loss, not a request failure.
    async fn record(&self, submission: &ContactSubmission) -> SinkResult<()>;

    /// Checks whether the sink can currently accept records.
    ///
    /// Used by the health check endpoint to report sink status.
    async fn health_check(&self) -> bool;
}
