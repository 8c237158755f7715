//! Cross-region deduplication by resource name.

use std::collections::HashSet;

use skuscout_core::models::ScoredCandidate;

/// Keep the first occurrence of each name, compared case-insensitively.
/// Input is expected to be sorted best-first.
pub fn deduplicate(candidates: Vec<ScoredCandidate>) -> Vec<ScoredCandidate> {
    let mut seen = HashSet::new();
    candidates
        .into_iter()
        .filter(|c| seen.insert(c.name.to_lowercase()))
        .collect()
}
