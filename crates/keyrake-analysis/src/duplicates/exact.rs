//! Exact duplicate detection over the normalized text key.

use keyrake_core::types::collections::FxHashMap;
use keyrake_core::types::Phrase;

use crate::text::dedup_key;

use super::types::DuplicateGroup;

/// Bucket `phrases` by a key function, preserving first-seen bucket order
/// and input order within each bucket.
pub(crate) fn bucket_by_key<F>(phrases: &[Phrase], key_fn: F) -> Vec<(String, Vec<usize>)>
where
    F: Fn(&Phrase) -> String,
{
    let mut order: Vec<String> = Vec::new();
    let mut buckets: FxHashMap<String, Vec<usize>> = FxHashMap::default();

    for (idx, phrase) in phrases.iter().enumerate() {
        let key = key_fn(phrase);
        if let Some(members) = buckets.get_mut(&key) {
            members.push(idx);
        } else {
            order.push(key.clone());
            buckets.insert(key, vec![idx]);
        }
    }

    order
        .into_iter()
        .map(|key| {
            let members = buckets.remove(&key).unwrap_or_default();
            (key, members)
        })
        .collect()
}

/// Turn buckets of size >= 2 into groups, sorting each group's members by
/// `ws` descending with input order breaking ties (stable sort, so the
/// canonical member is deterministic).
pub(crate) fn collect_groups(
    phrases: &[Phrase],
    buckets: Vec<(String, Vec<usize>)>,
) -> Vec<DuplicateGroup> {
    buckets
        .into_iter()
        .filter(|(_, members)| members.len() >= 2)
        .map(|(key, mut members)| {
            members.sort_by_key(|&idx| std::cmp::Reverse(phrases[idx].ws));
            DuplicateGroup {
                key,
                phrases: members.iter().map(|&idx| phrases[idx].clone()).collect(),
            }
        })
        .collect()
}

/// Winner index per bucket: highest `ws`, earliest input position on ties.
pub(crate) fn canonical_indices<F>(phrases: &[Phrase], key_fn: F) -> Vec<bool>
where
    F: Fn(&Phrase) -> String,
{
    let mut best: FxHashMap<String, usize> = FxHashMap::default();
    for (idx, phrase) in phrases.iter().enumerate() {
        let key = key_fn(phrase);
        match best.get_mut(&key) {
            Some(winner) => {
                if phrase.ws > phrases[*winner].ws {
                    *winner = idx;
                }
            }
            None => {
                best.insert(key, idx);
            }
        }
    }

    let mut keep = vec![false; phrases.len()];
    for &idx in best.values() {
        keep[idx] = true;
    }
    keep
}

/// Group phrases whose normalized text is literally identical.
/// Groups of size 1 are never surfaced; empty input yields empty output.
pub fn find_exact_duplicates(phrases: &[Phrase]) -> Vec<DuplicateGroup> {
    let buckets = bucket_by_key(phrases, |p| dedup_key(&p.text));
    collect_groups(phrases, buckets)
}

/// Collapse exact-duplicate groups, keeping only the canonical member of
/// each. Survivors stay in input order (the list is not re-sorted by
/// frequency).
pub fn remove_exact_duplicates(phrases: &[Phrase]) -> Vec<Phrase> {
    let keep = canonical_indices(phrases, |p| dedup_key(&p.text));
    phrases
        .iter()
        .zip(keep)
        .filter_map(|(p, kept)| kept.then(|| p.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phrase(id: u64, text: &str, ws: u64) -> Phrase {
        Phrase::new(id, text).with_ws(ws)
    }

    #[test]
    fn case_and_spacing_variants_group_together() {
        let phrases = vec![
            phrase(1, "Купить телефон", 10),
            phrase(2, "купить  ТЕЛЕФОН", 50),
            phrase(3, "продать телефон", 30),
        ];
        let groups = find_exact_duplicates(&phrases);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].len(), 2);
        // Higher ws wins the canonical slot.
        assert_eq!(groups[0].canonical().id.0, 2);
    }

    #[test]
    fn equal_ws_ties_go_to_the_earlier_phrase() {
        let phrases = vec![
            phrase(1, "дом", 10),
            phrase(2, "дом", 10),
            phrase(3, "дом", 10),
        ];
        let groups = find_exact_duplicates(&phrases);
        assert_eq!(groups[0].member_ids(), vec![1.into(), 2.into(), 3.into()]);
    }

    #[test]
    fn removal_keeps_survivors_in_input_order() {
        let phrases = vec![
            phrase(1, "а б", 5),
            phrase(2, "в", 1),
            phrase(3, "А  Б", 50),
            phrase(4, "г", 0),
        ];
        let kept = remove_exact_duplicates(&phrases);
        let ids: Vec<u64> = kept.iter().map(|p| p.id.0).collect();
        assert_eq!(ids, vec![2, 3, 4]);
    }

    #[test]
    fn empty_input_yields_no_groups() {
        assert!(find_exact_duplicates(&[]).is_empty());
        assert!(remove_exact_duplicates(&[]).is_empty());
    }

    #[test]
    fn empty_texts_group_with_each_other() {
        let phrases = vec![phrase(1, "", 0), phrase(2, "   ", 0)];
        let groups = find_exact_duplicates(&phrases);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].key, "");
    }
}
