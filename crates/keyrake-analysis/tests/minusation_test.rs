//! Cross-minusation matcher tests: subset direction, overlap symmetry,
//! suppression rules, cancellation, progress, and the apply fold.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use keyrake_core::config::MinusationConfig;
use keyrake_core::errors::AnalysisError;
use keyrake_core::events::{EventDispatcher, KeyrakeEventHandler, MatchProgressEvent};
use keyrake_core::traits::{Cancellable, CancellationToken};
use keyrake_core::types::collections::FxHashSet;
use keyrake_core::types::Phrase;

use keyrake_analysis::minusation::{CrossMinusationMatcher, MatchReason};
use keyrake_analysis::text::{HeuristicStemmer, RawTokenizer};

fn phrase(id: u64, text: &str) -> Phrase {
    Phrase::new(id, text)
}

#[test]
fn narrower_phrase_gets_the_broader_phrases_extra_tokens() {
    let phrases = vec![
        phrase(1, "красные кроссовки"),
        phrase(2, "красные кроссовки nike"),
    ];
    let matcher = CrossMinusationMatcher::with_defaults();
    let outcome = matcher.compute(&phrases, &HeuristicStemmer).unwrap();

    assert_eq!(outcome.matches.len(), 1);
    let m = &outcome.matches[0];
    assert_eq!(m.reason, MatchReason::Subset);
    assert_eq!(m.source_phrase.text, "красные кроссовки");
    assert_eq!(m.target_phrase.text, "красные кроссовки nike");
    assert_eq!(m.additional_tokens.as_slice(), ["nike"]);
}

#[test]
fn subset_additional_tokens_are_exactly_the_set_difference() {
    let phrases = vec![phrase(1, "а б"), phrase(2, "а б в г")];
    let matcher = CrossMinusationMatcher::with_defaults();
    let outcome = matcher.compute(&phrases, &RawTokenizer).unwrap();

    assert_eq!(outcome.matches.len(), 1);
    let m = &outcome.matches[0];
    assert_eq!(m.source_phrase.id, phrases[0].id);
    let expected: FxHashSet<&str> = ["в", "г"].into_iter().collect();
    let actual: FxHashSet<&str> = m.additional_tokens.iter().map(String::as_str).collect();
    assert_eq!(actual, expected);
    assert_eq!(m.additional_tokens.len(), 2, "no extraneous entries");
}

#[test]
fn no_match_ever_points_at_itself() {
    let phrases = vec![
        phrase(1, "купить дом"),
        phrase(2, "купить дом недорого"),
        phrase(3, "дом купить"),
        phrase(4, "купить квартиру недорого"),
    ];
    let matcher = CrossMinusationMatcher::with_defaults();
    let outcome = matcher.compute(&phrases, &RawTokenizer).unwrap();
    assert!(!outcome.matches.is_empty());
    for m in &outcome.matches {
        assert_ne!(m.source_phrase.id, m.target_phrase.id);
    }
}

#[test]
fn overlap_threshold_is_configurable() {
    // {а, б} vs {б, в}: intersection 1, union 3 → 33.3%.
    let phrases = vec![phrase(1, "а б"), phrase(2, "б в")];

    let strict = CrossMinusationMatcher::with_defaults();
    assert!(strict.compute(&phrases, &RawTokenizer).unwrap().matches.is_empty());

    let loose = CrossMinusationMatcher::new(MinusationConfig {
        min_overlap_percentage: Some(30.0),
        use_morphology: Some(false),
    })
    .unwrap();
    let outcome = loose.compute(&phrases, &RawTokenizer).unwrap();
    assert_eq!(outcome.matches.len(), 2, "both directions above threshold");
    assert!(outcome
        .matches
        .iter()
        .all(|m| m.reason == MatchReason::SignificantOverlap));
}

#[test]
fn morphology_toggle_changes_token_sets() {
    // Inflections collide only when stemming is on.
    let phrases = vec![phrase(1, "красные кроссовки"), phrase(2, "красный кроссовки nike")];

    let morph = CrossMinusationMatcher::with_defaults();
    let with_stems = morph.compute(&phrases, &HeuristicStemmer).unwrap();
    assert!(with_stems
        .matches
        .iter()
        .any(|m| m.reason == MatchReason::Subset));

    let raw = CrossMinusationMatcher::new(MinusationConfig {
        use_morphology: Some(false),
        ..Default::default()
    })
    .unwrap();
    // Raw tokens: {красные, кроссовки} vs {красный, кроссовки, nike}
    // share only one token (25% overlap) — below the default threshold.
    let without = raw.compute(&phrases, &HeuristicStemmer).unwrap();
    assert!(without.matches.is_empty());
}

#[test]
fn statistics_track_comparisons_and_average_overlap() {
    let phrases = vec![
        phrase(1, "а б"),
        phrase(2, "а б в"),
        phrase(3, "совсем другое здесь"),
    ];
    let matcher = CrossMinusationMatcher::with_defaults();
    let outcome = matcher.compute(&phrases, &RawTokenizer).unwrap();
    assert_eq!(outcome.statistics.total_comparisons, 3);
    assert_eq!(outcome.statistics.found_matches, outcome.matches.len());
    assert!(outcome.statistics.average_overlap > 0.0);
}

#[test]
fn progress_events_cover_every_pair() {
    struct LastProgress(AtomicUsize, AtomicUsize);
    impl KeyrakeEventHandler for LastProgress {
        fn on_match_progress(&self, event: &MatchProgressEvent) {
            self.0.fetch_max(event.compared, Ordering::SeqCst);
            self.1.store(event.total, Ordering::SeqCst);
        }
    }

    let handler = Arc::new(LastProgress(AtomicUsize::new(0), AtomicUsize::new(0)));
    let mut dispatcher = EventDispatcher::new();
    dispatcher.register(handler.clone());

    let phrases: Vec<Phrase> = (0..10)
        .map(|i| phrase(i, &format!("слово{i} запрос{i}")))
        .collect();
    let matcher = CrossMinusationMatcher::with_defaults().with_dispatcher(Arc::new(dispatcher));
    matcher.compute(&phrases, &RawTokenizer).unwrap();

    assert_eq!(handler.0.load(Ordering::SeqCst), 45);
    assert_eq!(handler.1.load(Ordering::SeqCst), 45);
}

#[test]
fn cancellation_stops_the_computation() {
    let token = CancellationToken::new();
    token.cancel();
    let matcher = CrossMinusationMatcher::with_defaults().with_cancellation(token);
    let phrases = vec![phrase(1, "а б"), phrase(2, "а б в")];
    assert_eq!(
        matcher.compute(&phrases, &RawTokenizer),
        Err(AnalysisError::Cancelled)
    );
}

#[test]
fn apply_returns_a_new_list_and_leaves_the_input_alone() {
    let phrases = vec![
        phrase(1, "красные кроссовки"),
        phrase(2, "красные кроссовки nike"),
    ];
    let matcher = CrossMinusationMatcher::with_defaults();
    let updated = matcher.apply(&phrases, &HeuristicStemmer).unwrap();

    assert!(phrases[0].minus_terms.is_empty());
    assert_eq!(updated.len(), phrases.len());
    assert!(updated[0].minus_terms.contains("nike"));
    assert!(updated[1].minus_terms.is_empty());
}

#[test]
fn empty_and_single_phrase_inputs_yield_no_matches() {
    let matcher = CrossMinusationMatcher::with_defaults();
    let empty = matcher.compute(&[], &RawTokenizer).unwrap();
    assert!(empty.matches.is_empty());
    assert_eq!(empty.statistics.total_comparisons, 0);

    let single = matcher
        .compute(&[phrase(1, "один запрос")], &RawTokenizer)
        .unwrap();
    assert!(single.matches.is_empty());
}
