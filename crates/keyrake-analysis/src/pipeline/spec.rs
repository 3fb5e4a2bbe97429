//! Declarative pipeline definitions — steps are data, not code.
//!
//! The canonical cleanups ship as presets; users can define their own in
//! TOML without recompiling.

use serde::{Deserialize, Serialize};

use keyrake_core::config::MinusationConfig;
use keyrake_core::errors::PipelineError;

/// One cleaning step. Serialized with a `step` tag so TOML definitions
/// read as `{ step = "frequency_floor", min_ws = 100 }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum StepSpec {
    /// Normalize phrase text (case, quotes, dashes, whitespace).
    Normalize,
    /// Collapse exact duplicates to their canonical member.
    DedupExact,
    /// Collapse morphological duplicates to their canonical member.
    DedupMorphological,
    /// Drop noise phrases (URLs, phones, SKUs, digit soup).
    RemoveNoise,
    /// Drop phrases matching the context's stopword dictionary.
    RemoveStopwords,
    /// Apply cross-minusation suggestions to `minus_terms`.
    CrossMinusation {
        #[serde(default)]
        config: MinusationConfig,
    },
    /// Drop phrases below a broad-match volume floor.
    FrequencyFloor { min_ws: u64 },
    /// Tag each phrase `info` or `commercial` by query intent.
    TagQueryIntent,
    /// Drop overtly commercial queries (buy/price/order/...).
    DropCommercial,
}

impl StepSpec {
    /// Human-readable description used in logs, events, and errors.
    pub fn description(&self) -> String {
        match self {
            Self::Normalize => "normalize phrase text".to_string(),
            Self::DedupExact => "remove exact duplicates".to_string(),
            Self::DedupMorphological => "remove morphological duplicates".to_string(),
            Self::RemoveNoise => "drop noise phrases".to_string(),
            Self::RemoveStopwords => "remove phrases matching stopwords".to_string(),
            Self::CrossMinusation { .. } => "apply cross-minusation".to_string(),
            Self::FrequencyFloor { min_ws } => {
                format!("drop phrases with ws below {min_ws}")
            }
            Self::TagQueryIntent => "tag informational vs commercial queries".to_string(),
            Self::DropCommercial => "drop commercial queries".to_string(),
        }
    }
}

/// A named pipeline definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineDef {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub steps: Vec<StepSpec>,
}

/// A TOML file of pipeline definitions:
///
/// ```toml
/// [[pipelines]]
/// name = "weekly cleanup"
/// steps = [
///     { step = "dedup_exact" },
///     { step = "frequency_floor", min_ws = 50 },
/// ]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PipelineFile {
    #[serde(default)]
    pub pipelines: Vec<PipelineDef>,
}

impl PipelineFile {
    pub fn load_from_str(toml_str: &str) -> Result<Self, PipelineError> {
        let file: PipelineFile = toml::from_str(toml_str)
            .map_err(|e| PipelineError::InvalidDefinition(format!("TOML parse error: {e}")))?;
        for def in &file.pipelines {
            if def.name.trim().is_empty() {
                return Err(PipelineError::InvalidDefinition(
                    "pipeline with empty name".to_string(),
                ));
            }
            if def.steps.is_empty() {
                return Err(PipelineError::InvalidDefinition(format!(
                    "pipeline '{}' has no steps",
                    def.name
                )));
            }
        }
        Ok(file)
    }

    pub fn load_from_file(path: &std::path::Path) -> Result<Self, PipelineError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            PipelineError::InvalidDefinition(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::load_from_str(&content)
    }

    pub fn get(&self, name: &str) -> Option<&PipelineDef> {
        self.pipelines.iter().find(|p| p.name == name)
    }
}

/// The canonical cleanups, shipped as data.
pub mod presets {
    use super::StepSpec;
    use keyrake_core::config::MinusationConfig;

    /// Prepare queries for upload into an ad platform.
    pub fn ppc_cleanup() -> Vec<StepSpec> {
        vec![
            StepSpec::DedupExact,
            StepSpec::Normalize,
            StepSpec::RemoveNoise,
            StepSpec::DedupMorphological,
            StepSpec::RemoveStopwords,
            StepSpec::CrossMinusation {
                config: MinusationConfig::default(),
            },
            StepSpec::FrequencyFloor { min_ws: 100 },
        ]
    }

    /// Keep informational queries, drop the overtly commercial ones.
    pub fn info_cleanup() -> Vec<StepSpec> {
        vec![
            StepSpec::Normalize,
            StepSpec::DedupExact,
            StepSpec::RemoveNoise,
            StepSpec::TagQueryIntent,
            StepSpec::DropCommercial,
            StepSpec::FrequencyFloor { min_ws: 50 },
        ]
    }

    /// The minimum: obvious garbage only.
    pub fn quick_cleanup() -> Vec<StepSpec> {
        vec![
            StepSpec::DedupExact,
            StepSpec::Normalize,
            StepSpec::RemoveNoise,
        ]
    }
}

/// Look up a shipped preset by name.
pub fn named_pipeline(name: &str) -> Option<Vec<StepSpec>> {
    match name {
        "ppc_cleanup" => Some(presets::ppc_cleanup()),
        "info_cleanup" => Some(presets::info_cleanup()),
        "quick_cleanup" => Some(presets::quick_cleanup()),
        _ => None,
    }
}
