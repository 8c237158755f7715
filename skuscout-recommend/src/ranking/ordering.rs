//! Deterministic ordering of scored candidates.

use std::cmp::Ordering;

use skuscout_core::models::ScoredCandidate;

/// Score desc, status rank asc, OK zones desc, then name and region asc.
pub fn compare(a: &ScoredCandidate, b: &ScoredCandidate) -> Ordering {
    b.score
        .cmp(&a.score)
        .then_with(|| a.status.rank().cmp(&b.status.rank()))
        .then_with(|| b.ok_zones.cmp(&a.ok_zones))
        .then_with(|| a.name.cmp(&b.name))
        .then_with(|| a.region.cmp(&b.region))
}

pub fn sort(candidates: &mut [ScoredCandidate]) {
    candidates.sort_by(compare);
}
