//! List quality scoring: one 0–100 number plus reproducible
//! recommendations.
//!
//! Every band is a ratio over the total phrase count, so an empty list is
//! an error — the scores are undefined by construction, and failing loudly
//! beats returning a misleading number.

use serde::{Deserialize, Serialize};
use tracing::info;

use keyrake_core::errors::AnalysisError;
use keyrake_core::traits::Stemmer;
use keyrake_core::types::collections::{FxHashMap, FxHashSet};
use keyrake_core::types::{Phrase, Stopword};

use crate::duplicates::{find_exact_duplicates, find_morphological_duplicates, DuplicateGroup};
use crate::noise::classify_noise;
use crate::stopwords::StopwordMatcher;
use crate::text::dedup_key;

/// Quality analysis output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityReport {
    pub total_phrases: usize,
    /// Distinct normalized texts.
    pub unique_phrases: usize,
    /// Removable exact-duplicate members.
    pub exact_duplicates: usize,
    /// Morphological duplicates beyond the exact ones.
    pub morphological_duplicates: usize,
    pub noise_count: usize,
    /// Phrases matching at least one stopword.
    pub stopword_count: usize,
    /// Mean text length in characters, rounded to 1 decimal.
    pub average_length: f64,
    /// Mean word count, rounded to 1 decimal.
    pub average_words: f64,
    /// 0–100. Uniqueness and cleanliness weigh 30 points each,
    /// morphological duplication and stopword pressure 20 each.
    pub quality_score: u8,
    pub recommendations: Vec<String>,
}

fn surplus(groups: &[DuplicateGroup]) -> usize {
    groups.iter().map(DuplicateGroup::surplus).sum()
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Score `phrases` against the given stopword dictionary.
///
/// Detector results are recomputed internally; the call is read-only.
pub fn analyze_quality(
    phrases: &[Phrase],
    stopwords: &[Stopword],
    stemmer: &dyn Stemmer,
) -> Result<QualityReport, AnalysisError> {
    let total = phrases.len();
    if total == 0 {
        return Err(AnalysisError::EmptyInput);
    }
    let total_f = total as f64;

    let exact_duplicates = surplus(&find_exact_duplicates(phrases));
    let morph_total = surplus(&find_morphological_duplicates(phrases, stemmer));
    let morphological_duplicates = morph_total.saturating_sub(exact_duplicates);

    let noise_count = phrases
        .iter()
        .filter(|p| classify_noise(&p.text).is_some())
        .count();

    let matcher = StopwordMatcher::new(stopwords, stemmer);
    let stopword_count = phrases
        .iter()
        .filter(|p| matcher.first_match(&p.text).is_some())
        .count();

    let unique_phrases = phrases
        .iter()
        .map(|p| dedup_key(&p.text))
        .collect::<FxHashSet<String>>()
        .len();

    let average_length =
        round1(phrases.iter().map(|p| p.text.chars().count()).sum::<usize>() as f64 / total_f);
    let average_words =
        round1(phrases.iter().map(Phrase::word_count).sum::<usize>() as f64 / total_f);

    let uniqueness_score = unique_phrases as f64 / total_f * 30.0;
    let clean_score = (total_f - noise_count as f64) / total_f * 30.0;
    let morph_score = (total_f - morphological_duplicates as f64) / total_f * 20.0;
    let stopword_score = (total_f - stopword_count as f64) / total_f * 20.0;
    let quality_score = (uniqueness_score + clean_score + morph_score + stopword_score)
        .round()
        .clamp(0.0, 100.0) as u8;

    let mut recommendations = Vec::new();
    if exact_duplicates > 0 {
        recommendations.push(format!(
            "Found {exact_duplicates} exact duplicates. Consider removing them."
        ));
    }
    if morphological_duplicates > 0 {
        recommendations.push(format!(
            "Found {morphological_duplicates} additional morphological duplicates."
        ));
    }
    if noise_count > 0 {
        recommendations.push(format!(
            "Found {noise_count} noise phrases (URLs, phone numbers, SKUs)."
        ));
    }
    if stopword_count as f64 > total_f * 0.3 {
        recommendations.push("More than 30% of phrases contain stopwords.".to_string());
    }
    if average_words < 2.0 {
        recommendations.push(
            "Average phrase length is below 2 words; the list may contain many low-quality queries."
                .to_string(),
        );
    }
    recommendations.push(
        match quality_score {
            80.. => "Data quality is excellent.",
            60..=79 => "Data quality is good. Light cleanup recommended.",
            40..=59 => "Data quality is average. Cleanup recommended.",
            _ => "Data quality is poor. Deep cleanup required.",
        }
        .to_string(),
    );

    info!(total, quality_score, "quality analysis complete");

    Ok(QualityReport {
        total_phrases: total,
        unique_phrases,
        exact_duplicates,
        morphological_duplicates,
        noise_count,
        stopword_count,
        average_length,
        average_words,
        quality_score,
        recommendations,
    })
}

/// Stem-frequency statistics over a phrase list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MorphologyStats {
    pub total_tokens: usize,
    pub unique_stems: usize,
    /// Rounded to 1 decimal; 0 for an empty list.
    pub average_tokens_per_phrase: f64,
    /// Top 20 stems by frequency, then lexicographic.
    pub most_common_stems: Vec<(String, usize)>,
}

pub fn morphology_stats(phrases: &[Phrase], stemmer: &dyn Stemmer) -> MorphologyStats {
    let mut stem_counts: FxHashMap<String, usize> = FxHashMap::default();
    let mut total_tokens = 0usize;

    for phrase in phrases {
        for stem in stemmer.stems(&phrase.text) {
            total_tokens += 1;
            *stem_counts.entry(stem).or_insert(0) += 1;
        }
    }

    let unique_stems = stem_counts.len();
    let mut most_common: Vec<(String, usize)> = stem_counts.into_iter().collect();
    most_common.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    most_common.truncate(20);

    let average_tokens_per_phrase = if phrases.is_empty() {
        0.0
    } else {
        round1(total_tokens as f64 / phrases.len() as f64)
    };

    MorphologyStats {
        total_tokens,
        unique_stems,
        average_tokens_per_phrase,
        most_common_stems: most_common,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::RawTokenizer;

    #[test]
    fn empty_input_is_an_error() {
        assert_eq!(
            analyze_quality(&[], &[], &RawTokenizer),
            Err(AnalysisError::EmptyInput)
        );
    }

    #[test]
    fn morphology_stats_rank_stems() {
        let phrases = vec![
            Phrase::new(1u64, "купить дом"),
            Phrase::new(2u64, "купить квартиру"),
            Phrase::new(3u64, "снять дом"),
        ];
        let stats = morphology_stats(&phrases, &RawTokenizer);
        assert_eq!(stats.total_tokens, 6);
        assert_eq!(stats.unique_stems, 4);
        assert_eq!(stats.average_tokens_per_phrase, 2.0);
        assert_eq!(stats.most_common_stems[0].1, 2);
    }
}
