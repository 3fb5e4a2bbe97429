//! # keyrake-analysis
//!
//! The Keyrake engine: exact and morphological duplicate detection,
//! cross-minusation matching, list quality scoring, and composable
//! cleaning pipelines over an in-memory phrase list.
//!
//! All detector functions are pure and read-only; the only documented
//! mutation is the cross-minusation apply step, which returns a new
//! phrase list. The pairwise matcher is the engine's dominant cost
//! (O(n²) over phrase pairs) and is parallelized per comparison row.

pub mod duplicates;
pub mod minusation;
pub mod noise;
pub mod pipeline;
pub mod quality;
pub mod stopwords;
pub mod text;

pub use duplicates::{
    duplicate_stats, find_exact_duplicates, find_morphological_duplicates,
    remove_exact_duplicates, remove_morphological_duplicates, DuplicateGroup, DuplicateStats,
};
pub use minusation::{
    CrossMinusationMatch, CrossMinusationMatcher, MatchFilter, MatchReason, MatchStatistics,
    MinusationOutcome, MinusationReport,
};
pub use pipeline::{PipelineContext, PipelinePreview, PipelineRun, PipelineRunner, StepSpec};
pub use quality::{analyze_quality, morphology_stats, MorphologyStats, QualityReport};
pub use text::{HeuristicStemmer, RawTokenizer};
