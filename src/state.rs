//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::ContactService;
use crate::infrastructure::sink::DiagnosticSink;

/// Cloneable handle to the services shared across requests.
#[derive(Clone)]
pub struct AppState {
    pub contact_service: Arc<ContactService>,
    pub sink: Arc<dyn DiagnosticSink>,
}

impl AppState {
    /// Wires the application state over the given diagnostic sink.
    pub fn new(sink: Arc<dyn DiagnosticSink>) -> Self {
        Self {
            contact_service: Arc::new(ContactService::new(sink.clone())),
            sink,
        }
    }
}
