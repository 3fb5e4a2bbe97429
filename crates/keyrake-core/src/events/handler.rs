//! Event handler trait with no-op defaults.

use super::types::*;

/// Receives engine events. All methods default to no-ops so handlers
/// implement only what they care about.
pub trait KeyrakeEventHandler: Send + Sync {
    fn on_match_progress(&self, _event: &MatchProgressEvent) {}

    fn on_step_started(&self, _event: &StepStartedEvent) {}

    fn on_step_completed(&self, _event: &StepCompletedEvent) {}

    fn on_pipeline_completed(&self, _event: &PipelineCompletedEvent) {}
}
