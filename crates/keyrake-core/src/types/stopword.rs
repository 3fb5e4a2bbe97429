use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier for a stopword entry.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct StopwordId(pub u64);

impl fmt::Display for StopwordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for StopwordId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// How a stopword is matched against a phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    /// Whole-word match on the phrase's tokens.
    Exact,
    /// Substring match anywhere in the lowercased phrase text.
    Partial,
    /// Stem/root match when `use_morphology` is set; otherwise behaves
    /// like `Partial`.
    Independent,
}

/// A stopword dictionary entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stopword {
    pub id: StopwordId,
    pub text: String,
    pub match_type: MatchType,
    #[serde(default)]
    pub use_morphology: bool,
    #[serde(default)]
    pub category: String,
}

impl Stopword {
    pub fn new(id: impl Into<StopwordId>, text: impl Into<String>, match_type: MatchType) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            match_type,
            use_morphology: false,
            category: String::new(),
        }
    }

    pub fn with_morphology(mut self) -> Self {
        self.use_morphology = true;
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }
}
