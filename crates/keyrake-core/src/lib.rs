//! # keyrake-core
//!
//! Foundation crate for the Keyrake keyword curation engine.
//! Defines all shared types, traits, errors, config, and events.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod errors;
pub mod events;
pub mod traits;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::MinusationConfig;
pub use errors::{AnalysisError, KeyrakeErrorCode, PipelineError};
pub use traits::{Cancellable, CancellationToken, Stemmer};
pub use types::{GroupId, MatchType, Phrase, PhraseId, Stopword, StopwordId};
