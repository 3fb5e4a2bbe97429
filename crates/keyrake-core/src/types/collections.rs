//! Hash collections used throughout the workspace.
//!
//! FxHash is a non-cryptographic hasher; all keys here are internal
//! (phrase ids, dedup keys), never attacker-controlled.

pub use rustc_hash::{FxHashMap, FxHashSet};
