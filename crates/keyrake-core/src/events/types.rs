//! Event payload types.

/// Payload for `on_match_progress`. Emitted by the pairwise matcher as
/// comparison rows complete; `compared` counts phrase pairs.
#[derive(Debug, Clone)]
pub struct MatchProgressEvent {
    pub compared: usize,
    pub total: usize,
}

/// Payload for `on_step_started`.
#[derive(Debug, Clone)]
pub struct StepStartedEvent {
    pub index: usize,
    pub description: String,
}

/// Payload for `on_step_completed`.
#[derive(Debug, Clone)]
pub struct StepCompletedEvent {
    pub index: usize,
    pub description: String,
    pub before: usize,
    pub after: usize,
}

/// Payload for `on_pipeline_completed`.
#[derive(Debug, Clone)]
pub struct PipelineCompletedEvent {
    pub initial_count: usize,
    pub final_count: usize,
    pub removed: usize,
}
