//! Text primitives: normalization, tokenization, and the shipped
//! heuristic morphology.

pub mod morphology;
pub mod normalize;
pub mod tokenize;

pub use morphology::{HeuristicStemmer, RawTokenizer};
pub use normalize::{dedup_key, normalize_text};
pub use tokenize::tokenize;
