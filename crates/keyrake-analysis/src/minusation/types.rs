use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use keyrake_core::types::Phrase;

/// Why a match was emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchReason {
    /// The source's token set is a strict subset of the target's.
    Subset,
    /// Token overlap met the configured threshold without strict
    /// containment.
    SignificantOverlap,
}

/// One directional recommendation: add `additional_tokens` to the source
/// phrase's negative keywords so it stops matching the target's traffic.
///
/// Matches embed snapshots of both phrases so projections and reports need
/// no side lookups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossMinusationMatch {
    pub source_phrase: Phrase,
    pub target_phrase: Phrase,
    /// The source's token sequence as compared (stems or raw tokens).
    pub source_tokens: Vec<String>,
    pub target_tokens: Vec<String>,
    /// Tokens present in the target but absent from the source, in target
    /// order, deduplicated. Never empty on an emitted match.
    pub additional_tokens: SmallVec<[String; 4]>,
    /// Jaccard overlap of the two token sets, 0–100.
    pub overlap_percentage: f64,
    pub reason: MatchReason,
}

/// Aggregate counters for one matcher run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchStatistics {
    /// Phrase pairs compared: n·(n−1)/2.
    pub total_comparisons: usize,
    pub found_matches: usize,
    /// Mean `overlap_percentage` over emitted matches; 0 when none.
    pub average_overlap: f64,
}

/// Matches plus run statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinusationOutcome {
    pub matches: Vec<CrossMinusationMatch>,
    pub statistics: MatchStatistics,
}
