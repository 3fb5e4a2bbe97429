//! Pipeline errors.

use super::analysis_error::AnalysisError;
use super::error_code::{self, KeyrakeErrorCode};

/// Errors that abort a pipeline run. There is no retry: a failing step
/// stops the run, and the error carries the log accumulated so far
/// (including the failing step's attempt) so callers can surface
/// "stopped at step N" without losing partial progress.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PipelineError {
    #[error("step {n} ({description}) failed: {source}", n = .index + 1)]
    StepFailed {
        /// Zero-based index of the failing step. Displayed 1-based, the
        /// way the run log numbers steps.
        index: usize,
        description: String,
        log: Vec<String>,
        source: AnalysisError,
    },

    #[error("pipeline cancelled")]
    Cancelled { log: Vec<String> },

    #[error("invalid pipeline definition: {0}")]
    InvalidDefinition(String),
}

impl PipelineError {
    /// The partial log, if this error carries one.
    pub fn partial_log(&self) -> Option<&[String]> {
        match self {
            Self::StepFailed { log, .. } | Self::Cancelled { log } => Some(log),
            Self::InvalidDefinition(_) => None,
        }
    }
}

impl KeyrakeErrorCode for PipelineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::StepFailed { .. } => error_code::STEP_FAILED,
            Self::Cancelled { .. } => error_code::CANCELLED,
            Self::InvalidDefinition(_) => error_code::INVALID_PIPELINE,
        }
    }
}
