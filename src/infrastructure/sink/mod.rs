//! Diagnostic sink for recording received submissions.
//!
//! Provides a [`DiagnosticSink`] trait with two implementations:
//! - [`TracingSink`] - Production sink emitting structured log events
//! - [`MemorySink`] - Buffering implementation for tests and embedding

mod memory_sink;
mod service;
mod tracing_sink;

pub use memory_sink::MemorySink;
pub use service::{DiagnosticSink, SinkError, SinkResult};
pub use tracing_sink::TracingSink;

#[cfg(test)]
pub use service::MockDiagnosticSink;
