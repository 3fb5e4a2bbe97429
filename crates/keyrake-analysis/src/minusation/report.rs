//! Read-only projections over the match list: grouping, filtering, and
//! the operator-facing report. No algorithmic weight beyond sorting and
//! aggregation.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use keyrake_core::types::collections::FxHashMap;
use keyrake_core::types::{Phrase, PhraseId};

use super::types::{CrossMinusationMatch, MatchReason};

/// One suggested target for a source phrase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetSuggestion {
    pub target_phrase: Phrase,
    pub additional_tokens: Vec<String>,
    pub overlap_percentage: f64,
    pub reason: MatchReason,
}

/// All matches for one source phrase, with the union of suggested terms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceMatches {
    pub source_phrase: Phrase,
    pub targets: Vec<TargetSuggestion>,
    pub total_additional_tokens: BTreeSet<String>,
}

/// Group matches by their source phrase, in first-appearance order.
pub fn group_matches_by_source(matches: &[CrossMinusationMatch]) -> Vec<SourceMatches> {
    let mut index: FxHashMap<PhraseId, usize> = FxHashMap::default();
    let mut groups: Vec<SourceMatches> = Vec::new();

    for m in matches {
        let slot = *index.entry(m.source_phrase.id).or_insert_with(|| {
            groups.push(SourceMatches {
                source_phrase: m.source_phrase.clone(),
                targets: Vec::new(),
                total_additional_tokens: BTreeSet::new(),
            });
            groups.len() - 1
        });
        let group = &mut groups[slot];
        group.targets.push(TargetSuggestion {
            target_phrase: m.target_phrase.clone(),
            additional_tokens: m.additional_tokens.to_vec(),
            overlap_percentage: m.overlap_percentage,
            reason: m.reason,
        });
        group
            .total_additional_tokens
            .extend(m.additional_tokens.iter().cloned());
    }

    groups
}

/// Predicate-style filter over a match list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchFilter {
    pub min_tokens: Option<usize>,
    pub max_tokens: Option<usize>,
    pub min_overlap_percentage: Option<f64>,
    pub reason: Option<MatchReason>,
    pub source_phrase_ids: Option<Vec<PhraseId>>,
}

/// Keep only matches passing every set criterion.
pub fn filter_matches(
    matches: &[CrossMinusationMatch],
    filter: &MatchFilter,
) -> Vec<CrossMinusationMatch> {
    matches
        .iter()
        .filter(|m| {
            if let Some(min) = filter.min_tokens {
                if m.additional_tokens.len() < min {
                    return false;
                }
            }
            if let Some(max) = filter.max_tokens {
                if m.additional_tokens.len() > max {
                    return false;
                }
            }
            if let Some(min_overlap) = filter.min_overlap_percentage {
                if m.overlap_percentage < min_overlap {
                    return false;
                }
            }
            if let Some(reason) = filter.reason {
                if m.reason != reason {
                    return false;
                }
            }
            if let Some(ids) = &filter.source_phrase_ids {
                if !ids.contains(&m.source_phrase.id) {
                    return false;
                }
            }
            true
        })
        .cloned()
        .collect()
}

/// Report header numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub total_matches: usize,
    pub unique_source_phrases: usize,
    /// Mean additional-token count per match, rounded to 2 decimals.
    pub average_additional_tokens: f64,
    /// Most frequently suggested minus tokens, best first, at most 20.
    pub top_token_candidates: Vec<String>,
}

/// Per-source section of the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceReport {
    pub phrase: Phrase,
    pub match_count: usize,
    /// Up to 5 targets, largest suggestion lists first.
    pub top_targets: Vec<TargetSuggestion>,
}

/// Operator-facing cross-minusation report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinusationReport {
    pub summary: ReportSummary,
    pub by_source_phrase: Vec<SourceReport>,
    pub recommendations: Vec<String>,
}

/// Build the report. `phrases` is the full working set the matches were
/// computed from (used for the participation recommendation).
pub fn minusation_report(
    matches: &[CrossMinusationMatch],
    phrases: &[Phrase],
) -> MinusationReport {
    let unique_sources: BTreeSet<PhraseId> =
        matches.iter().map(|m| m.source_phrase.id).collect();

    let average_additional_tokens = if matches.is_empty() {
        0.0
    } else {
        let total: usize = matches.iter().map(|m| m.additional_tokens.len()).sum();
        (total as f64 / matches.len() as f64 * 100.0).round() / 100.0
    };

    let mut token_counts: FxHashMap<&str, usize> = FxHashMap::default();
    for m in matches {
        for token in &m.additional_tokens {
            *token_counts.entry(token.as_str()).or_insert(0) += 1;
        }
    }
    let mut counted: Vec<(&str, usize)> = token_counts.into_iter().collect();
    counted.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    let top_token_candidates: Vec<String> = counted
        .iter()
        .take(20)
        .map(|(token, _)| (*token).to_string())
        .collect();

    let mut by_source_phrase: Vec<SourceReport> = group_matches_by_source(matches)
        .into_iter()
        .map(|group| {
            let mut targets = group.targets;
            let match_count = targets.len();
            targets.sort_by(|a, b| {
                b.additional_tokens
                    .len()
                    .cmp(&a.additional_tokens.len())
                    .then_with(|| a.target_phrase.id.cmp(&b.target_phrase.id))
            });
            targets.truncate(5);
            SourceReport {
                phrase: group.source_phrase,
                match_count,
                top_targets: targets,
            }
        })
        .collect();
    by_source_phrase.sort_by(|a, b| {
        b.match_count
            .cmp(&a.match_count)
            .then_with(|| a.phrase.id.cmp(&b.phrase.id))
    });

    let mut recommendations = Vec::new();
    if !phrases.is_empty() && (unique_sources.len() as f64) < phrases.len() as f64 * 0.1 {
        recommendations.push(
            "Few phrases participate in cross-minusation; consider lowering the overlap threshold."
                .to_string(),
        );
    }
    if average_additional_tokens > 5.0 {
        recommendations.push(
            "The average number of suggested minus tokens is high; review the source list quality."
                .to_string(),
        );
    }
    if !top_token_candidates.is_empty() {
        let preview: Vec<&str> = top_token_candidates
            .iter()
            .take(5)
            .map(String::as_str)
            .collect();
        recommendations.push(format!("Top minus-token candidates: {}.", preview.join(", ")));
    }
    recommendations.push(
        "Apply cross-minusation only to vetted, relevant phrases.".to_string(),
    );

    MinusationReport {
        summary: ReportSummary {
            total_matches: matches.len(),
            unique_source_phrases: unique_sources.len(),
            average_additional_tokens,
            top_token_candidates,
        },
        by_source_phrase,
        recommendations,
    }
}
