//! Morphological stemming as an injected capability.

/// Produces the normalized stem sequence of a phrase.
///
/// Contract: deterministic (same text, same stems), locale-aware, and
/// idempotent. The engine never implements real morphology itself; callers
/// inject whatever analyzer fits their language, and tests inject a fixed
/// dictionary fake.
pub trait Stemmer {
    /// Ordered sequence of stems for `text`. May be empty (a phrase made
    /// of punctuation tokenizes to nothing, which is still a valid result).
    fn stems(&self, text: &str) -> Vec<String>;
}

impl<S: Stemmer + ?Sized> Stemmer for &S {
    fn stems(&self, text: &str) -> Vec<String> {
        (**self).stems(text)
    }
}
