//! Stopword matching and filtering.
//!
//! The match rule per entry: `exact` is a whole-word match on the phrase's
//! tokens, `partial` is a substring match, `independent` is a stem/root
//! match when the entry enables morphology and falls back to `partial`
//! otherwise.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use keyrake_core::traits::Stemmer;
use keyrake_core::types::collections::FxHashSet;
use keyrake_core::types::{MatchType, Phrase, Stopword, StopwordId};

use crate::text::tokenize;

/// Evaluates phrases against a stopword dictionary. Borrows both the
/// dictionary and the stemmer; nothing is retained after a call.
pub struct StopwordMatcher<'a> {
    stopwords: &'a [Stopword],
    stemmer: &'a dyn Stemmer,
}

impl<'a> StopwordMatcher<'a> {
    pub fn new(stopwords: &'a [Stopword], stemmer: &'a dyn Stemmer) -> Self {
        Self { stopwords, stemmer }
    }

    /// Does `text` match the single stopword `entry`?
    pub fn matches(&self, text: &str, entry: &Stopword) -> bool {
        let lower_text = text.to_lowercase();
        let lower_sw = entry.text.to_lowercase();

        match entry.match_type {
            MatchType::Exact => {
                // Tokens come back with ё folded; fold the entry to match.
                let folded = lower_sw.replace('ё', "е");
                tokenize(text).iter().any(|t| *t == folded)
            }
            MatchType::Partial => lower_text.contains(&lower_sw),
            MatchType::Independent => {
                if entry.use_morphology {
                    let phrase_stems: FxHashSet<String> =
                        self.stemmer.stems(text).into_iter().collect();
                    self.stemmer
                        .stems(&entry.text)
                        .iter()
                        .any(|s| phrase_stems.contains(s))
                } else {
                    lower_text.contains(&lower_sw)
                }
            }
        }
    }

    /// First stopword matching `text`, if any.
    pub fn first_match(&self, text: &str) -> Option<&'a Stopword> {
        self.stopwords.iter().find(|sw| self.matches(text, sw))
    }

    /// All stopwords matching `text`, in dictionary order.
    pub fn all_matches(&self, text: &str) -> Vec<&'a Stopword> {
        self.stopwords
            .iter()
            .filter(|sw| self.matches(text, sw))
            .collect()
    }
}

/// Drop every phrase matching at least one stopword. Pipeline building
/// block; survivors keep their input order.
pub fn remove_phrases_with_stopwords(
    phrases: &[Phrase],
    stopwords: &[Stopword],
    stemmer: &dyn Stemmer,
) -> Vec<Phrase> {
    let matcher = StopwordMatcher::new(stopwords, stemmer);
    phrases
        .iter()
        .filter(|p| matcher.first_match(&p.text).is_none())
        .cloned()
        .collect()
}

/// One stopword's hit count across a phrase list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StopwordHit {
    pub text: String,
    pub category: String,
    pub count: usize,
}

/// Dictionary usage statistics over a phrase list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StopwordStats {
    pub total_phrases: usize,
    pub phrases_with_stopwords: usize,
    /// Share of affected phrases, 0–100. Zero for an empty list.
    pub percentage: f64,
    /// Top 20 matched stopwords, by hit count descending then text.
    pub top_stopwords: Vec<StopwordHit>,
    pub categories: BTreeMap<String, usize>,
}

/// Count how the dictionary fires across `phrases`.
pub fn stopword_stats(
    phrases: &[Phrase],
    stopwords: &[Stopword],
    stemmer: &dyn Stemmer,
) -> StopwordStats {
    let matcher = StopwordMatcher::new(stopwords, stemmer);
    let mut affected = 0usize;
    let mut hits: BTreeMap<&str, (usize, &str)> = BTreeMap::new();

    for phrase in phrases {
        let matched = matcher.all_matches(&phrase.text);
        if matched.is_empty() {
            continue;
        }
        affected += 1;
        for sw in matched {
            let entry = hits.entry(sw.text.as_str()).or_insert((0, sw.category.as_str()));
            entry.0 += 1;
        }
    }

    let mut top: Vec<StopwordHit> = hits
        .iter()
        .map(|(text, (count, category))| StopwordHit {
            text: (*text).to_string(),
            category: (*category).to_string(),
            count: *count,
        })
        .collect();
    top.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.text.cmp(&b.text)));
    top.truncate(20);

    let mut categories: BTreeMap<String, usize> = BTreeMap::new();
    for (count, category) in hits.values() {
        *categories.entry((*category).to_string()).or_insert(0) += count;
    }

    let percentage = if phrases.is_empty() {
        0.0
    } else {
        affected as f64 / phrases.len() as f64 * 100.0
    };

    StopwordStats {
        total_phrases: phrases.len(),
        phrases_with_stopwords: affected,
        percentage,
        top_stopwords: top,
        categories,
    }
}

/// Built-in whole-word dictionaries from the `stop-words` corpus.
/// Supported: en, ru, de, fr, es; anything else falls back to English.
pub fn builtin_stopwords(language: &str) -> Vec<Stopword> {
    let lang = match language.to_lowercase().as_str() {
        "ru" | "russian" => stop_words::LANGUAGE::Russian,
        "de" | "german" => stop_words::LANGUAGE::German,
        "fr" | "french" => stop_words::LANGUAGE::French,
        "es" | "spanish" => stop_words::LANGUAGE::Spanish,
        _ => stop_words::LANGUAGE::English,
    };

    stop_words::get(lang)
        .into_iter()
        .enumerate()
        .map(|(idx, word)| {
            Stopword::new(StopwordId(idx as u64), word, MatchType::Exact)
                .with_category("general")
        })
        .collect()
}
