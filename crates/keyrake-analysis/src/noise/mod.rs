//! Noise filtering: phrases that are not search queries at all.
//!
//! URLs, phone numbers, SKU codes, digit soup, and similar artifacts of
//! messy imports. Rules run in a fixed order; the first that fires names
//! the reason.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use keyrake_core::types::Phrase;

static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)https?://|utm_|www\.|\.com|\.ru").expect("static regex")
});
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\+?\d{10,}|8\(\d{3}\)|\(\d{3}\)\d{3}").expect("static regex")
});
static SKU_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)[a-z]{1,3}\d{3,}|sku\d+|model\d+").expect("static regex")
});

/// Why a phrase was classified as noise.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum NoiseReason {
    TooShort,
    TooManyDigits,
    LooksLikeUrl,
    LooksLikePhone,
    LooksLikeSku,
    TooManySpecialChars,
    NoLetters,
    RepeatedChars,
}

fn has_repeated_run(text: &str, min_run: usize) -> bool {
    let mut run = 0usize;
    let mut prev: Option<char> = None;
    for ch in text.chars() {
        if Some(ch) == prev {
            run += 1;
            if run >= min_run {
                return true;
            }
        } else {
            prev = Some(ch);
            run = 1;
        }
    }
    false
}

/// Classify `text`, returning the first noise rule that fires, or `None`
/// for a legitimate phrase.
pub fn classify_noise(text: &str) -> Option<NoiseReason> {
    let text = text.trim();
    let total = text.chars().count();

    if total < 2 {
        return Some(NoiseReason::TooShort);
    }

    let digits = text.chars().filter(char::is_ascii_digit).count();
    if digits as f64 / total as f64 > 0.4 {
        return Some(NoiseReason::TooManyDigits);
    }

    if URL_RE.is_match(text) {
        return Some(NoiseReason::LooksLikeUrl);
    }

    if PHONE_RE.is_match(text) {
        return Some(NoiseReason::LooksLikePhone);
    }

    if SKU_RE.is_match(text) {
        return Some(NoiseReason::LooksLikeSku);
    }

    let special = text
        .chars()
        .filter(|c| !c.is_alphanumeric() && !c.is_whitespace())
        .count();
    if special as f64 / total as f64 > 0.2 {
        return Some(NoiseReason::TooManySpecialChars);
    }

    if !text.chars().any(char::is_alphabetic) {
        return Some(NoiseReason::NoLetters);
    }

    if has_repeated_run(text, 4) {
        return Some(NoiseReason::RepeatedChars);
    }

    None
}

/// A removed phrase together with the rule that removed it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemovedPhrase {
    pub phrase: Phrase,
    pub reason: NoiseReason,
}

/// Result of splitting a list into kept phrases and noise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoiseSplit {
    pub kept: Vec<Phrase>,
    pub removed: Vec<RemovedPhrase>,
}

/// Split `phrases` into kept and removed. Read-only; both halves preserve
/// input order.
pub fn remove_noise(phrases: &[Phrase]) -> NoiseSplit {
    let mut kept = Vec::with_capacity(phrases.len());
    let mut removed = Vec::new();
    for phrase in phrases {
        match classify_noise(&phrase.text) {
            Some(reason) => removed.push(RemovedPhrase {
                phrase: phrase.clone(),
                reason,
            }),
            None => kept.push(phrase.clone()),
        }
    }
    NoiseSplit { kept, removed }
}

/// Per-reason noise counts over a phrase list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoiseStats {
    pub total_noise: usize,
    /// Share of noisy phrases, 0–100. Zero for an empty list.
    pub percentage: f64,
    pub by_reason: BTreeMap<NoiseReason, usize>,
}

pub fn noise_stats(phrases: &[Phrase]) -> NoiseStats {
    let mut by_reason: BTreeMap<NoiseReason, usize> = BTreeMap::new();
    let mut total_noise = 0usize;
    for phrase in phrases {
        if let Some(reason) = classify_noise(&phrase.text) {
            total_noise += 1;
            *by_reason.entry(reason).or_insert(0) += 1;
        }
    }
    let percentage = if phrases.is_empty() {
        0.0
    } else {
        total_noise as f64 / phrases.len() as f64 * 100.0
    };
    NoiseStats {
        total_noise,
        percentage,
        by_reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_and_empty_are_noise() {
        assert_eq!(classify_noise(""), Some(NoiseReason::TooShort));
        assert_eq!(classify_noise("я"), Some(NoiseReason::TooShort));
    }

    #[test]
    fn digit_heavy_strings_are_noise() {
        assert_eq!(classify_noise("12345 ок"), Some(NoiseReason::TooManyDigits));
    }

    #[test]
    fn urls_and_utm_are_noise() {
        assert_eq!(
            classify_noise("купить на www.shop.example дешево"),
            Some(NoiseReason::LooksLikeUrl)
        );
        assert_eq!(
            classify_noise("страница utm_source рассылка"),
            Some(NoiseReason::LooksLikeUrl)
        );
    }

    #[test]
    fn phone_numbers_are_noise() {
        assert_eq!(
            classify_noise("позвонить 89261234567 сейчас"),
            Some(NoiseReason::LooksLikePhone)
        );
    }

    #[test]
    fn sku_codes_are_noise() {
        assert_eq!(
            classify_noise("наушники xm4000 обзор"),
            Some(NoiseReason::LooksLikeSku)
        );
    }

    #[test]
    fn special_char_soup_is_noise() {
        assert_eq!(
            classify_noise("дом ###&&&"),
            Some(NoiseReason::TooManySpecialChars)
        );
    }

    #[test]
    fn repeated_characters_are_noise() {
        assert_eq!(classify_noise("апаааааа где"), Some(NoiseReason::RepeatedChars));
    }

    #[test]
    fn ordinary_phrases_are_clean() {
        assert_eq!(classify_noise("купить телефон недорого"), None);
        assert_eq!(classify_noise("iphone 15 pro купить"), None);
    }

    #[test]
    fn stats_aggregate_by_reason() {
        let phrases = vec![
            Phrase::new(1u64, "купить дом"),
            Phrase::new(2u64, "х"),
            Phrase::new(3u64, "у"),
            Phrase::new(4u64, "см. www.site.example страницу"),
        ];
        let stats = noise_stats(&phrases);
        assert_eq!(stats.total_noise, 3);
        assert_eq!(stats.by_reason[&NoiseReason::TooShort], 2);
        assert_eq!(stats.by_reason[&NoiseReason::LooksLikeUrl], 1);
        assert!((stats.percentage - 75.0).abs() < 1e-9);
    }
}
