//! Phrase text normalization.
//!
//! Pure string transforms; phrase ids and metrics are untouched.

/// Is `ch` clause punctuation that should absorb the preceding space and
/// collapse into runs.
fn is_clause_punct(ch: char) -> bool {
    matches!(ch, '.' | ',' | '!' | '?' | ';' | ':')
}

/// Full normalization: lowercase, ё→е, unify quotes and dashes, collapse
/// whitespace, strip space before punctuation, collapse punctuation runs
/// (keeping the last char of a run), trim.
pub fn normalize_text(text: &str) -> String {
    let lowered = text.to_lowercase();

    let mut out = String::with_capacity(lowered.len());
    let mut pending_space = false;
    for ch in lowered.chars() {
        let mapped = match ch {
            'ё' => 'е',
            '«' | '»' | '“' | '”' | '„' => '"',
            '‘' | '’' => '\'',
            '—' | '–' | '−' | '‐' | '‑' => '-',
            other => other,
        };

        if mapped.is_whitespace() {
            pending_space = true;
            continue;
        }

        if is_clause_punct(mapped) {
            // Punctuation absorbs the space before it; runs keep the last char.
            pending_space = false;
            if out.ends_with(is_clause_punct) {
                out.pop();
            }
            out.push(mapped);
            continue;
        }

        if pending_space && !out.is_empty() {
            out.push(' ');
        }
        pending_space = false;
        out.push(mapped);
    }

    out
}

/// Bucket key for exact-duplicate detection: lowercase, trim, collapse
/// whitespace. Deliberately lighter than [`normalize_text`] so that
/// detection works on lists that have not been normalized yet.
pub fn dedup_key(text: &str) -> String {
    let lowered = text.to_lowercase();
    let mut key = String::with_capacity(lowered.len());
    for word in lowered.split_whitespace() {
        if !key.is_empty() {
            key.push(' ');
        }
        key.push_str(word);
    }
    key
}
