//! Core data types shared across the workspace.

pub mod collections;
pub mod phrase;
pub mod stopword;

pub use phrase::{GroupId, Phrase, PhraseId};
pub use stopword::{MatchType, Stopword, StopwordId};
