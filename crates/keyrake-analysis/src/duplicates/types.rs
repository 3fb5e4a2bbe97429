use serde::{Deserialize, Serialize};

use keyrake_core::types::{Phrase, PhraseId};

/// Phrases sharing one duplicate key. Always has at least two members;
/// `phrases[0]` is the canonical member (highest `ws`, ties broken by
/// input order), the rest are removal candidates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DuplicateGroup {
    /// The shared key: normalized text for exact groups, stem signature
    /// for morphological groups.
    pub key: String,
    pub phrases: Vec<Phrase>,
}

impl DuplicateGroup {
    /// The member kept when the group is collapsed.
    pub fn canonical(&self) -> &Phrase {
        // Groups are constructed with >= 2 members.
        &self.phrases[0]
    }

    /// Members that would be removed when the group is collapsed.
    pub fn removal_candidates(&self) -> &[Phrase] {
        &self.phrases[1..]
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// Number of removable members (group size minus the canonical one).
    pub fn surplus(&self) -> usize {
        self.phrases.len().saturating_sub(1)
    }

    pub fn member_ids(&self) -> Vec<PhraseId> {
        self.phrases.iter().map(|p| p.id).collect()
    }
}

/// Summary counts from [`super::duplicate_stats`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuplicateStats {
    pub exact_duplicates: usize,
    /// Morphological duplicates beyond the exact ones.
    pub morphological_extra: usize,
    pub total_duplicates: usize,
    pub potential_ws_savings: u64,
}
