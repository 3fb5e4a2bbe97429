//! Analysis errors.

use super::error_code::{self, KeyrakeErrorCode};

/// Errors from the detectors, the matcher, and the quality analyzer.
///
/// Detectors are total over well-formed input; only ratio-based analysis
/// (which would divide by zero) and threshold validation can fail.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AnalysisError {
    #[error("quality analysis requires at least one phrase")]
    EmptyInput,

    #[error("overlap threshold {value} is outside the valid range 0..=100")]
    InvalidThreshold { value: f64 },

    #[error("analysis cancelled")]
    Cancelled,
}

impl KeyrakeErrorCode for AnalysisError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyInput => error_code::EMPTY_INPUT,
            Self::InvalidThreshold { .. } => error_code::INVALID_THRESHOLD,
            Self::Cancelled => error_code::CANCELLED,
        }
    }
}
