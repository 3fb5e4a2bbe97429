use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier for a phrase. Assigned at creation, never reused.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct PhraseId(pub u64);

impl fmt::Display for PhraseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for PhraseId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Identifier of a phrase group (a container managed by the caller).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct GroupId(pub u64);

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for GroupId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// A candidate search phrase with its frequency metrics.
///
/// `ws`/`qws`/`bws` are search-volume proxies used only for ranking and
/// tie-breaking, never for correctness. `group_id`, `tags`, `status`, and
/// the timestamps are pass-through fields: the engine carries them
/// unchanged unless an operation documents otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Phrase {
    pub id: PhraseId,
    pub text: String,
    /// Broad-match search volume.
    #[serde(default)]
    pub ws: u64,
    /// Quoted-match search volume.
    #[serde(default)]
    pub qws: u64,
    /// Exact-match search volume.
    #[serde(default)]
    pub bws: u64,
    #[serde(default)]
    pub group_id: Option<GroupId>,
    /// Negative keywords attached to this phrase. Grown only by the
    /// cross-minusation apply step.
    #[serde(default)]
    pub minus_terms: BTreeSet<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub status: Option<String>,
    /// Epoch milliseconds; opaque to the engine.
    #[serde(default)]
    pub created_at: Option<i64>,
    #[serde(default)]
    pub updated_at: Option<i64>,
}

impl Phrase {
    pub fn new(id: impl Into<PhraseId>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            ws: 0,
            qws: 0,
            bws: 0,
            group_id: None,
            minus_terms: BTreeSet::new(),
            tags: Vec::new(),
            status: None,
            created_at: None,
            updated_at: None,
        }
    }

    pub fn with_ws(mut self, ws: u64) -> Self {
        self.ws = ws;
        self
    }

    /// Whitespace-separated word count of the raw text.
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}
