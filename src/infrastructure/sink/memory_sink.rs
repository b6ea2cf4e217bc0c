//! In-memory diagnostic sink for tests and embedded use.

use super::service::{DiagnosticSink, SinkError, SinkResult};
use crate::domain::submission::ContactSubmission;
use async_trait::async_trait;
use std::sync::Mutex;

/// A sink that buffers records in memory.
///
/// Lets tests assert exactly what the endpoint recorded without standing up
/// a log subscriber. The buffer grows unbounded, so this implementation is
/// not meant for long-running production use.
#[derive(Default)]
pub struct MemorySink {
    records: Mutex<Vec<ContactSubmission>>,
}

impl MemorySink {
    /// Creates a new, empty MemorySink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of everything recorded so far, in arrival order.
    pub fn records(&self) -> Vec<ContactSubmission> {
        self.records
            .lock()
            .map(|records| records.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl DiagnosticSink for MemorySink {
    async fn record(&self, submission: &ContactSubmission) -> SinkResult<()> {
        self.records
            .lock()
            .map_err(|_| SinkError::Write("record buffer poisoned".to_string()))?
            .push(submission.clone());

        Ok(())
    }

    async fn health_check(&self) -> bool {
        !self.records.is_poisoned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_records_kept_in_arrival_order() {
        let sink = MemorySink::new();

        let first = ContactSubmission {
            name: Some("Jane".to_string()),
            ..Default::default()
        };
        let second = ContactSubmission {
            name: Some("John".to_string()),
            ..Default::default()
        };

        sink.record(&first).await.unwrap();
        sink.record(&second).await.unwrap();

        let records = sink.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name.as_deref(), Some("Jane"));
        assert_eq!(records[1].name.as_deref(), Some("John"));
    }

    #[tokio::test]
    async fn test_health_check_reports_ready() {
        let sink = MemorySink::new();
        assert!(sink.health_check().await);
    }
}
