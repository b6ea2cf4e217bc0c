//! Diagnostic sink backed by the tracing pipeline.

use super::service::{DiagnosticSink, SinkResult};
use crate::domain::submission::ContactSubmission;
use async_trait::async_trait;

/// Records submissions as structured log events.
///
/// This is the production sink: each submission becomes one `INFO` event
/// carrying the received fields, picked up by whatever subscriber the
/// binary installed (text or JSON). Absent fields are logged as `-`.
pub struct TracingSink;

impl TracingSink {
    /// Creates a new TracingSink instance.
    pub fn new() -> Self {
        Self
    }
}

impl Default for TracingSink {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DiagnosticSink for TracingSink {
    async fn record(&self, submission: &ContactSubmission) -> SinkResult<()> {
        tracing::info!(
            name = submission.name.as_deref().unwrap_or("-"),
            email = submission.email.as_deref().unwrap_or("-"),
            phone = submission.phone.as_deref().unwrap_or("-"),
            message = submission.message.as_deref().unwrap_or("-"),
            "Contact submission received"
        );

        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }
}
