// Fuzzy matching for "did you mean" status suggestions

use crate::models::StatusKey;
use crate::status::{fold_alias, AliasTable};

/// Calculate Levenshtein distance between two strings
/// Returns the minimum number of single-character edits (insertions, deletions, substitutions)
/// needed to transform one string into another
pub fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();

    if s1_chars.is_empty() {
        return s2_chars.len();
    }
    if s2_chars.is_empty() {
        return s1_chars.len();
    }

    // Two-row dynamic programming
    let mut prev: Vec<usize> = (0..=s2_chars.len()).collect();
    let mut curr = vec![0; s2_chars.len() + 1];

    for (i, c1) in s1_chars.iter().enumerate() {
        curr[0] = i + 1;
        for (j, c2) in s2_chars.iter().enumerate() {
            let cost = if c1 == c2 { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1)       // deletion
                .min(curr[j] + 1)                 // insertion
                .min(prev[j] + cost);             // substitution
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[s2_chars.len()]
}

/// Find canonical keys whose registered spellings are close to `raw`
/// Returns up to 3 keys sorted by best distance (closest first), each key once
pub fn suggest_statuses(raw: &str, table: &AliasTable, max_distance: usize) -> Vec<StatusKey> {
    let Some(folded) = fold_alias(raw) else {
        return Vec::new();
    };

    let mut matches: Vec<(StatusKey, usize)> = Vec::new();
    for spelling in table.spellings() {
        let distance = levenshtein_distance(&folded, spelling);
        let is_prefix = folded.len() >= 3 && spelling.starts_with(&folded);
        if distance > max_distance && !is_prefix {
            continue;
        }
        let Some(key) = table.resolve(spelling) else {
            continue;
        };
        let distance = if is_prefix { distance.min(max_distance) } else { distance };
        match matches.iter_mut().find(|(k, _)| *k == key) {
            Some(existing) => existing.1 = existing.1.min(distance),
            None => matches.push((key, distance)),
        }
    }

    // Sort by distance, then by workflow order
    matches.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
    matches.into_iter().take(3).map(|(key, _)| key).collect()
}
