#![allow(dead_code)]

use std::sync::Arc;

use contact_intake::infrastructure::sink::MemorySink;
use contact_intake::state::AppState;

/// Builds an [`AppState`] over a [`MemorySink`], returning the sink handle
/// so tests can inspect what the endpoint recorded.
pub fn create_test_state() -> (AppState, Arc<MemorySink>) {
    let sink = Arc::new(MemorySink::new());
    let state = AppState::new(sink.clone());

    (state, sink)
}
