//! Capability traits injected into the engine.

pub mod cancellation;
pub mod stemmer;

pub use cancellation::{Cancellable, CancellationToken};
pub use stemmer::Stemmer;
