//! Cross-minusation: detecting phrases that will trigger on each other's
//! traffic and recommending negative keywords.
//!
//! The pairwise comparison is the engine's dominant cost — O(n²) pairs
//! with O(k) set work per pair — and becomes impractical in the tens of
//! thousands of phrases without a bucketing pre-filter. The matcher is
//! structured so such a pre-filter can be slotted in front of the full
//! set comparison without changing the public contract.

pub mod matcher;
pub mod report;
pub mod types;

pub use matcher::CrossMinusationMatcher;
pub use report::{
    filter_matches, group_matches_by_source, minusation_report, MatchFilter, MinusationReport,
    ReportSummary, SourceMatches, SourceReport, TargetSuggestion,
};
pub use types::{CrossMinusationMatch, MatchReason, MatchStatistics, MinusationOutcome};
