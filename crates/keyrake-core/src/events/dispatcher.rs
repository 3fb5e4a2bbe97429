//! EventDispatcher — synchronous event dispatch with zero overhead when empty.

use std::sync::Arc;

use super::handler::KeyrakeEventHandler;
use super::types::*;

/// Synchronous dispatcher over a list of handlers.
///
/// A panicking handler is isolated: it does not prevent subsequent
/// handlers from receiving the event, and it never unwinds into the
/// engine's computation.
#[derive(Clone, Default)]
pub struct EventDispatcher {
    handlers: Vec<Arc<dyn KeyrakeEventHandler>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, handler: Arc<dyn KeyrakeEventHandler>) {
        self.handlers.push(handler);
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    fn emit<F: Fn(&dyn KeyrakeEventHandler)>(&self, f: F) {
        for handler in &self.handlers {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                f(handler.as_ref());
            }));
            if result.is_err() {
                tracing::warn!("event handler panicked; continuing with remaining handlers");
            }
        }
    }

    pub fn emit_match_progress(&self, event: &MatchProgressEvent) {
        self.emit(|h| h.on_match_progress(event));
    }

    pub fn emit_step_started(&self, event: &StepStartedEvent) {
        self.emit(|h| h.on_step_started(event));
    }

    pub fn emit_step_completed(&self, event: &StepCompletedEvent) {
        self.emit(|h| h.on_step_completed(event));
    }

    pub fn emit_pipeline_completed(&self, event: &PipelineCompletedEvent) {
        self.emit(|h| h.on_pipeline_completed(event));
    }
}

impl std::fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}
