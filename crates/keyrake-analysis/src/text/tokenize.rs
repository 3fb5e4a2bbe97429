//! Word tokenization shared by the matcher, the stopword rules, and the
//! morphology layer.

/// Tokens longer than this are discarded (paste noise, not words).
pub const MAX_TOKEN_LEN: usize = 50;
/// Phrases are capped at this many tokens; search queries are short.
pub const MAX_TOKENS: usize = 20;

/// Lowercased word tokens with punctuation stripped. ё is folded to е so
/// token comparisons match how the rest of the engine normalizes text.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase().replace('ё', "е");
    lowered
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty() && t.chars().count() < MAX_TOKEN_LEN)
        .take(MAX_TOKENS)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_punctuation_and_whitespace() {
        assert_eq!(
            tokenize("Купить, телефон-недорого!"),
            vec!["купить", "телефон", "недорого"]
        );
    }

    #[test]
    fn keeps_digits() {
        assert_eq!(tokenize("iphone 15 pro"), vec!["iphone", "15", "pro"]);
    }

    #[test]
    fn caps_token_count() {
        let long = (0..40).map(|i| format!("w{i}")).collect::<Vec<_>>().join(" ");
        assert_eq!(tokenize(&long).len(), MAX_TOKENS);
    }

    #[test]
    fn punctuation_only_yields_nothing() {
        assert!(tokenize("?!, ...").is_empty());
    }
}
