//! Duplicate detection: exact (literal normalized text) and morphological
//! (stem-set signature).
//!
//! Detectors are read-only and total: malformed phrases are treated as
//! empty-string phrases, empty input yields empty output.

pub mod exact;
pub mod morphological;
pub mod types;

pub use exact::{find_exact_duplicates, remove_exact_duplicates};
pub use morphological::{
    find_morphological_duplicates, remove_morphological_duplicates, stem_signature,
};
pub use types::{DuplicateGroup, DuplicateStats};

use keyrake_core::traits::Stemmer;
use keyrake_core::types::Phrase;

/// Aggregate duplicate statistics over one phrase list.
///
/// `morphological_extra` counts duplicates the stem signature finds beyond
/// the exact detector; `potential_ws_savings` sums the `ws` of every
/// non-canonical member of a morphological group (volume that would be
/// freed by removing them).
pub fn duplicate_stats(phrases: &[Phrase], stemmer: &dyn Stemmer) -> DuplicateStats {
    let exact: usize = find_exact_duplicates(phrases)
        .iter()
        .map(DuplicateGroup::surplus)
        .sum();
    let morph_groups = find_morphological_duplicates(phrases, stemmer);
    let morph_total: usize = morph_groups.iter().map(DuplicateGroup::surplus).sum();
    let potential_ws_savings = morph_groups
        .iter()
        .flat_map(|g| g.removal_candidates().iter())
        .map(|p| p.ws)
        .sum();

    DuplicateStats {
        exact_duplicates: exact,
        morphological_extra: morph_total.saturating_sub(exact),
        total_duplicates: morph_total,
        potential_ws_savings,
    }
}
