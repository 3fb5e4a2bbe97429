//! The pairwise cross-minusation matcher.

use std::collections::BTreeSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use rayon::prelude::*;
use smallvec::SmallVec;
use tracing::{debug, info};

use keyrake_core::config::MinusationConfig;
use keyrake_core::errors::AnalysisError;
use keyrake_core::events::{EventDispatcher, MatchProgressEvent};
use keyrake_core::traits::{Cancellable, CancellationToken, Stemmer};
use keyrake_core::types::collections::{FxHashMap, FxHashSet};
use keyrake_core::types::{Phrase, PhraseId};

use crate::text::tokenize;

use super::types::{CrossMinusationMatch, MatchReason, MatchStatistics, MinusationOutcome};

/// Per-phrase token view built once before the pair loop.
struct TokenEntry {
    tokens: Vec<String>,
    set: FxHashSet<String>,
}

/// Pairwise matcher over a phrase list.
///
/// Inputs are borrowed for the duration of a call and never mutated; the
/// `apply` variant returns a new phrase list. Comparison rows run in
/// parallel — match order is not part of the contract, only set membership
/// and per-match fields are.
pub struct CrossMinusationMatcher {
    config: MinusationConfig,
    cancel: CancellationToken,
    dispatcher: Arc<EventDispatcher>,
}

impl CrossMinusationMatcher {
    /// Validates the overlap threshold up front.
    pub fn new(config: MinusationConfig) -> Result<Self, AnalysisError> {
        config.validate()?;
        Ok(Self {
            config,
            cancel: CancellationToken::new(),
            dispatcher: Arc::new(EventDispatcher::new()),
        })
    }

    pub fn with_defaults() -> Self {
        Self {
            config: MinusationConfig::default(),
            cancel: CancellationToken::new(),
            dispatcher: Arc::new(EventDispatcher::new()),
        }
    }

    /// Share a cancellation token; checked between phrase pairs.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    /// Share a dispatcher; progress is emitted as comparison rows complete.
    pub fn with_dispatcher(mut self, dispatcher: Arc<EventDispatcher>) -> Self {
        self.dispatcher = dispatcher;
        self
    }

    fn token_entries(&self, phrases: &[Phrase], stemmer: &dyn Stemmer) -> Vec<TokenEntry> {
        let use_morphology = self.config.effective_use_morphology();
        phrases
            .iter()
            .map(|p| {
                let tokens = if use_morphology {
                    stemmer.stems(&p.text)
                } else {
                    tokenize(&p.text)
                };
                let set = tokens.iter().cloned().collect();
                TokenEntry { tokens, set }
            })
            .collect()
    }

    /// Compare all unordered phrase pairs and emit directional matches.
    ///
    /// For a strict subset relation the broader phrase contributes its
    /// extra tokens as negatives for the narrower one. Above the overlap
    /// threshold without containment, both directions are emitted; a match
    /// whose additional-token list would be empty is suppressed.
    pub fn compute(
        &self,
        phrases: &[Phrase],
        stemmer: &dyn Stemmer,
    ) -> Result<MinusationOutcome, AnalysisError> {
        let n = phrases.len();
        let total_pairs = n * n.saturating_sub(1) / 2;
        let min_overlap = self.config.effective_min_overlap();
        debug!(
            phrases = n,
            pairs = total_pairs,
            min_overlap,
            "starting pairwise comparison"
        );

        let entries = self.token_entries(phrases, stemmer);
        let compared = AtomicUsize::new(0);

        let rows: Result<Vec<Vec<CrossMinusationMatch>>, AnalysisError> = (0..n)
            .into_par_iter()
            .map(|i| {
                let mut row = Vec::new();
                for j in (i + 1)..n {
                    if self.cancel.is_cancelled() {
                        return Err(AnalysisError::Cancelled);
                    }
                    compare_pair(phrases, &entries, i, j, min_overlap, &mut row);
                }
                let row_pairs = n - i - 1;
                let done = compared.fetch_add(row_pairs, Ordering::Relaxed) + row_pairs;
                self.dispatcher.emit_match_progress(&MatchProgressEvent {
                    compared: done,
                    total: total_pairs,
                });
                Ok(row)
            })
            .collect();

        let matches: Vec<CrossMinusationMatch> = rows?.into_iter().flatten().collect();

        let average_overlap = if matches.is_empty() {
            0.0
        } else {
            matches.iter().map(|m| m.overlap_percentage).sum::<f64>() / matches.len() as f64
        };
        info!(
            matches = matches.len(),
            comparisons = total_pairs,
            "cross-minusation complete"
        );

        Ok(MinusationOutcome {
            statistics: MatchStatistics {
                total_comparisons: total_pairs,
                found_matches: matches.len(),
                average_overlap,
            },
            matches,
        })
    }

    /// Compute matches and fold them back onto the phrases: each source
    /// phrase's `minus_terms` gains the union of its suggested tokens.
    /// Returns a new list; the input is untouched.
    pub fn apply(
        &self,
        phrases: &[Phrase],
        stemmer: &dyn Stemmer,
    ) -> Result<Vec<Phrase>, AnalysisError> {
        let outcome = self.compute(phrases, stemmer)?;

        let mut minus_map: FxHashMap<PhraseId, BTreeSet<String>> = FxHashMap::default();
        for m in &outcome.matches {
            minus_map
                .entry(m.source_phrase.id)
                .or_default()
                .extend(m.additional_tokens.iter().cloned());
        }

        Ok(phrases
            .iter()
            .map(|p| {
                let mut updated = p.clone();
                if let Some(terms) = minus_map.get(&p.id) {
                    updated.minus_terms.extend(terms.iter().cloned());
                }
                updated
            })
            .collect())
    }
}

/// Target tokens missing from the source set, in target order, deduplicated.
fn additional_tokens(target: &TokenEntry, source_set: &FxHashSet<String>) -> SmallVec<[String; 4]> {
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    target
        .tokens
        .iter()
        .filter(|t| !source_set.contains(*t) && seen.insert(t.as_str()))
        .cloned()
        .collect()
}

fn make_match(
    phrases: &[Phrase],
    entries: &[TokenEntry],
    source: usize,
    target: usize,
    overlap: f64,
    reason: MatchReason,
) -> CrossMinusationMatch {
    CrossMinusationMatch {
        source_phrase: phrases[source].clone(),
        target_phrase: phrases[target].clone(),
        source_tokens: entries[source].tokens.clone(),
        target_tokens: entries[target].tokens.clone(),
        additional_tokens: additional_tokens(&entries[target], &entries[source].set),
        overlap_percentage: overlap,
        reason,
    }
}

fn compare_pair(
    phrases: &[Phrase],
    entries: &[TokenEntry],
    i: usize,
    j: usize,
    min_overlap: f64,
    out: &mut Vec<CrossMinusationMatch>,
) {
    let (a, b) = (&entries[i], &entries[j]);
    let intersection = a.set.intersection(&b.set).count();
    let union = a.set.len() + b.set.len() - intersection;
    if union == 0 {
        // Two token-less phrases; nothing to minus against.
        return;
    }
    let overlap = intersection as f64 / union as f64 * 100.0;

    let a_in_b = intersection == a.set.len();
    let b_in_a = intersection == b.set.len();

    if a_in_b && b.set.len() > a.set.len() {
        out.push(make_match(phrases, entries, i, j, overlap, MatchReason::Subset));
    } else if b_in_a && a.set.len() > b.set.len() {
        out.push(make_match(phrases, entries, j, i, overlap, MatchReason::Subset));
    } else if overlap >= min_overlap {
        let forward = make_match(
            phrases,
            entries,
            i,
            j,
            overlap,
            MatchReason::SignificantOverlap,
        );
        if !forward.additional_tokens.is_empty() {
            out.push(forward);
        }
        let backward = make_match(
            phrases,
            entries,
            j,
            i,
            overlap,
            MatchReason::SignificantOverlap,
        );
        if !backward.additional_tokens.is_empty() {
            out.push(backward);
        }
    }
}
