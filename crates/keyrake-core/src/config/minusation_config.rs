//! Cross-minusation configuration.

use serde::{Deserialize, Serialize};

use crate::errors::AnalysisError;

/// Configuration for the cross-minusation matcher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MinusationConfig {
    /// Minimum token overlap (0–100) for the significant-overlap branch.
    /// Default: 50.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_overlap_percentage: Option<f64>,
    /// Compare stem sets instead of raw token sets. Default: true.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_morphology: Option<bool>,
}

impl MinusationConfig {
    pub const DEFAULT_MIN_OVERLAP: f64 = 50.0;

    /// Returns the effective overlap threshold, defaulting to 50.
    pub fn effective_min_overlap(&self) -> f64 {
        self.min_overlap_percentage
            .unwrap_or(Self::DEFAULT_MIN_OVERLAP)
    }

    /// Returns the effective morphology switch, defaulting to true.
    pub fn effective_use_morphology(&self) -> bool {
        self.use_morphology.unwrap_or(true)
    }

    /// Rejects thresholds outside 0..=100 (and NaN).
    pub fn validate(&self) -> Result<(), AnalysisError> {
        let value = self.effective_min_overlap();
        if (0.0..=100.0).contains(&value) {
            Ok(())
        } else {
            Err(AnalysisError::InvalidThreshold { value })
        }
    }
}
