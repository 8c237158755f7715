//! RankingPipeline: filter → score → split → sort → dedup → truncate → callout.

pub mod deduplication;
pub mod ordering;

use skuscout_core::config::RecommendConfig;
use skuscout_core::models::{
    AvailabilityStatus, Candidate, Recommendation, ScoredCandidate, TargetProfile,
};
use tracing::debug;

use crate::scorer;

/// Ranks substitute candidates against a target profile.
#[derive(Debug, Clone)]
pub struct RankingPipeline {
    top_n: usize,
    min_vcpu: Option<u32>,
    min_memory_gb: Option<f64>,
    max_smaller_alternatives: usize,
}

impl RankingPipeline {
    pub fn new(config: &RecommendConfig) -> Self {
        Self {
            top_n: config.top_n,
            min_vcpu: config.min_vcpu,
            min_memory_gb: config.min_memory_gb,
            max_smaller_alternatives: config.max_smaller_alternatives,
        }
    }

    /// Run the full pipeline over candidates gathered from every scanned region.
    pub fn rank(&self, target: &TargetProfile, candidates: &[Candidate]) -> Recommendation {
        // Stage 1+2: drop unavailable, score the rest.
        let scored: Vec<ScoredCandidate> = candidates
            .iter()
            .filter(|c| c.status != AvailabilityStatus::Unavailable)
            .map(|c| score_candidate(target, c))
            .collect();
        let considered = scored.len();

        // Stage 3: set below-spec candidates aside.
        let (mut primary, mut below_spec): (Vec<_>, Vec<_>) =
            scored.into_iter().partition(|c| self.meets_minimums(c));

        // Stage 4-6: sort, dedup, truncate.
        ordering::sort(&mut primary);
        let mut ranked = deduplication::deduplicate(primary);
        ranked.truncate(self.top_n);

        // Stage 7: smaller-alternative callout.
        let smaller_alternatives = if ranked.iter().any(|c| c.status.is_available()) {
            Vec::new()
        } else {
            below_spec.retain(|c| c.status.is_available());
            ordering::sort(&mut below_spec);
            let mut smaller = deduplication::deduplicate(below_spec);
            smaller.truncate(self.max_smaller_alternatives);
            smaller
        };

        debug!(
            candidates = candidates.len(),
            considered,
            ranked = ranked.len(),
            smaller = smaller_alternatives.len(),
            "ranked substitutes"
        );

        Recommendation {
            ranked,
            smaller_alternatives,
        }
    }

    fn meets_minimums(&self, candidate: &ScoredCandidate) -> bool {
        let vcpu_ok = self.min_vcpu.map_or(true, |min| candidate.profile.vcpus >= min);
        let memory_ok = self
            .min_memory_gb
            .map_or(true, |min| candidate.profile.memory_gb >= min);
        vcpu_ok && memory_ok
    }
}

impl Default for RankingPipeline {
    fn default() -> Self {
        Self::new(&RecommendConfig::default())
    }
}

fn score_candidate(target: &TargetProfile, candidate: &Candidate) -> ScoredCandidate {
    ScoredCandidate {
        name: candidate.name.clone(),
        region: candidate.region.clone(),
        profile: candidate.profile.clone(),
        score: scorer::score(target, &candidate.profile),
        status: candidate.status,
        ok_zones: candidate.ok_zones,
        price: candidate.price.clone(),
    }
}
