use std::cmp::Ordering;
use std::collections::HashMap;

use crate::database::MatchResult;

/// Merge candidates from both sub-queries into a ranked list.
///
/// Rows that matched the same text on the same account (an alias
/// spelled exactly like the canonical name) collapse to the highest
/// score. Ties between distinct candidates are unordered.
pub fn rank_matches(candidates: Vec<MatchResult>, limit: usize) -> Vec<MatchResult> {
    let mut best: HashMap<(i64, String), MatchResult> = HashMap::new();
    for candidate in candidates {
        best.entry((candidate.account_id, candidate.matched_text.clone()))
            .and_modify(|existing| {
                if candidate.similarity_score > existing.similarity_score {
                    *existing = candidate.clone();
                }
            })
            .or_insert(candidate);
    }

    let mut ranked = best.into_values().collect::<Vec<_>>();
    ranked.sort_by(|a, b| {
        b.similarity_score
            .partial_cmp(&a.similarity_score)
            .unwrap_or(Ordering::Equal)
    });
    ranked.truncate(limit);
    ranked
}
