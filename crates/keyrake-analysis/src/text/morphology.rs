//! Shipped `Stemmer` implementations.
//!
//! Real morphological analysis is an injected capability; what ships here
//! is a lightweight suffix-stripping heuristic good enough for Russian
//! commercial queries, plus the raw-token fallback used when no analyzer
//! is available.

use keyrake_core::traits::Stemmer;

use super::tokenize::tokenize;

// Suffix groups tried in order; within a group the first match wins.
const VERB_VOWEL_ENDINGS: &[&str] = &["а", "я", "о", "е", "и", "у", "ы"];
const ADJECTIVE_ENDINGS: &[&str] = &["ый", "ая", "ое", "ие", "ой", "ею", "ями", "ами"];
const PLURAL_ENDINGS: &[&str] = &["ы", "и", "ов", "ам", "ах", "ами"];

fn strip_first_suffix(word: &str, suffixes: &[&str]) -> String {
    for suffix in suffixes {
        if let Some(stripped) = word.strip_suffix(suffix) {
            return stripped.to_string();
        }
    }
    word.to_string()
}

/// Heuristic stem of a single word: strip one vowel ending, one adjective
/// ending, and one plural ending in that order; fall back to the cleaned
/// word when the result gets shorter than 3 characters.
pub fn stem_word(word: &str) -> String {
    let clean: String = word
        .to_lowercase()
        .replace('ё', "е")
        .chars()
        .filter(|c| c.is_alphabetic())
        .collect();
    if clean.is_empty() {
        return clean;
    }

    let stripped = strip_first_suffix(&clean, VERB_VOWEL_ENDINGS);
    let stripped = strip_first_suffix(&stripped, ADJECTIVE_ENDINGS);
    let stripped = strip_first_suffix(&stripped, PLURAL_ENDINGS);

    if stripped.chars().count() >= 3 {
        stripped
    } else {
        clean
    }
}

/// Suffix-stripping stemmer for Russian (passes Latin words through mostly
/// unchanged). Deterministic and idempotent enough for duplicate grouping;
/// not a linguistic lemmatizer.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicStemmer;

impl Stemmer for HeuristicStemmer {
    fn stems(&self, text: &str) -> Vec<String> {
        tokenize(text)
            .iter()
            .map(|t| stem_word(t))
            .filter(|s| !s.is_empty())
            .collect()
    }
}

/// The no-morphology mode: stems are the raw lowercase tokens. A
/// first-class mode, not an error path — callers without an analyzer get
/// exact-token semantics everywhere morphology would be used.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawTokenizer;

impl Stemmer for RawTokenizer {
    fn stems(&self, text: &str) -> Vec<String> {
        tokenize(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_common_endings() {
        assert_eq!(stem_word("машина"), "машин");
        assert_eq!(stem_word("телефоны"), "телефон");
        assert_eq!(stem_word("красные"), "красн");
    }

    #[test]
    fn short_results_fall_back_to_the_clean_word() {
        // "дома" → "дом" is fine, but "еда" → "ед" is too short.
        assert_eq!(stem_word("еда"), "еда");
    }

    #[test]
    fn digits_are_dropped_from_stems() {
        assert_eq!(stem_word("15"), "");
        let stems = HeuristicStemmer.stems("iphone 15 pro");
        assert_eq!(stems, vec!["iphone", "pro"]);
    }

    #[test]
    fn stemming_is_deterministic() {
        let a = HeuristicStemmer.stems("купить красные кроссовки");
        let b = HeuristicStemmer.stems("купить красные кроссовки");
        assert_eq!(a, b);
    }

    #[test]
    fn raw_tokenizer_keeps_inflections_apart() {
        let raw = RawTokenizer.stems("телефоны телефон");
        assert_eq!(raw, vec!["телефоны", "телефон"]);
    }
}
