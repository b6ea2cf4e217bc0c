//! Submission recording service.

use std::sync::Arc;

use crate::domain::submission::ContactSubmission;
use crate::infrastructure::sink::DiagnosticSink;

/// Service handling received contact submissions.
///
/// The whole contract is accept-and-log: every parsed submission is handed
/// to the diagnostic sink and then discarded. Nothing is persisted and no
/// delivery (email, SMS, CRM) is attempted. A validation stage, were one
/// ever wanted, would slot in at the top of [`Self::submit`].
pub struct ContactService {
    sink: Arc<dyn DiagnosticSink>,
}

impl ContactService {
    /// Creates a new contact service.
    pub fn new(sink: Arc<dyn DiagnosticSink>) -> Self {
        Self { sink }
    }

    /// Records the submission to the diagnostic sink.
    ///
    /// The sink is fire-and-forget: a failure is logged as a diagnostic
    /// loss and never surfaced to the caller, so receipt is acknowledged
    /// unconditionally.
    pub async fn submit(&self, submission: ContactSubmission) {
        if submission.is_empty() {
            tracing::debug!("Contact submission carried no fields");
        }

        if let Err(e) = self.sink.record(&submission).await {
            tracing::warn!(error = %e, "Failed to record contact submission");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::sink::{MockDiagnosticSink, SinkError};

    #[tokio::test]
    async fn test_submit_records_fields() {
        let mut sink = MockDiagnosticSink::new();
        sink.expect_record()
            .withf(|submission: &ContactSubmission| {
                submission.name.as_deref() == Some("Jane Doe")
                    && submission.email.as_deref() == Some("jane@example.com")
            })
            .times(1)
            .returning(|_| Ok(()));

        let service = ContactService::new(Arc::new(sink));

        service
            .submit(ContactSubmission {
                name: Some("Jane Doe".to_string()),
                email: Some("jane@example.com".to_string()),
                phone: None,
                message: Some("Hi".to_string()),
            })
            .await;
    }

    #[tokio::test]
    async fn test_submit_swallows_sink_failure() {
        let mut sink = MockDiagnosticSink::new();
        sink.expect_record()
            .times(1)
            .returning(|_| Err(SinkError::Write("boom".to_string())));

        let service = ContactService::new(Arc::new(sink));

        // Must not panic or propagate; the ack path does not depend on the sink.
        service.submit(ContactSubmission::default()).await;
    }

    #[tokio::test]
    async fn test_submit_accepts_empty_submission() {
        let mut sink = MockDiagnosticSink::new();
        sink.expect_record()
            .withf(|submission: &ContactSubmission| submission.is_empty())
            .times(1)
            .returning(|_| Ok(()));

        let service = ContactService::new(Arc::new(sink));

        service.submit(ContactSubmission::default()).await;
    }
}
