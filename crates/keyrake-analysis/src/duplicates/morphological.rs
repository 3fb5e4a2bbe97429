//! Morphological duplicate detection over the stem-set signature.

use keyrake_core::traits::Stemmer;
use keyrake_core::types::Phrase;

use super::exact::{bucket_by_key, canonical_indices, collect_groups};
use super::types::DuplicateGroup;

/// Order-independent signature of a phrase: stems sorted lexicographically
/// and joined. "купить телефон" and "телефон купить" collide, as do light
/// inflections under a stemming analyzer.
///
/// A phrase that yields zero stems gets the empty signature — it still
/// participates in grouping rather than being dropped.
pub fn stem_signature(text: &str, stemmer: &dyn Stemmer) -> String {
    let mut stems = stemmer.stems(text);
    stems.sort_unstable();
    stems.join("|")
}

/// Group phrases sharing a stem signature. A superset of exact duplicate
/// detection: any two phrases with identical normalized text necessarily
/// share a signature, so every exact group is contained in some
/// morphological group.
pub fn find_morphological_duplicates(
    phrases: &[Phrase],
    stemmer: &dyn Stemmer,
) -> Vec<DuplicateGroup> {
    let buckets = bucket_by_key(phrases, |p| stem_signature(&p.text, stemmer));
    collect_groups(phrases, buckets)
}

/// Collapse morphological groups, keeping the canonical member of each.
/// Survivors stay in input order.
pub fn remove_morphological_duplicates(phrases: &[Phrase], stemmer: &dyn Stemmer) -> Vec<Phrase> {
    let keep = canonical_indices(phrases, |p| stem_signature(&p.text, stemmer));
    phrases
        .iter()
        .zip(keep)
        .filter_map(|(p, kept)| kept.then(|| p.clone()))
        .collect()
}
