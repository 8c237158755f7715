//! Six-term similarity scorer.
//!
//! Terms: vCPU closeness (25), memory closeness (25), family match (20),
//! generation overlap (13), architecture match (12), premium IO fit (5).
//! The sum is rounded and clamped to 0..=100.

use serde::{Deserialize, Serialize};
use skuscout_core::constants::MAX_SCORE;
use skuscout_core::models::{CandidateProfile, TargetProfile};

use crate::category::FamilyCategory;

pub mod weights {
    pub const VCPU: f64 = 25.0;
    pub const MEMORY: f64 = 25.0;
    pub const FAMILY_EXACT: f64 = 20.0;
    pub const FAMILY_CATEGORY: f64 = 15.0;
    pub const FAMILY_PREFIX: f64 = 10.0;
    pub const GENERATION: f64 = 13.0;
    pub const ARCHITECTURE: f64 = 12.0;
    pub const PREMIUM_IO: f64 = 5.0;
}

/// Per-term contributions to a score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub vcpu: f64,
    pub memory: f64,
    pub family: f64,
    pub generation: f64,
    pub architecture: f64,
    pub premium_io: f64,
}

impl ScoreBreakdown {
    /// Rounded, clamped total.
    pub fn total(&self) -> u8 {
        let sum = self.vcpu
            + self.memory
            + self.family
            + self.generation
            + self.architecture
            + self.premium_io;
        sum.round().clamp(0.0, MAX_SCORE as f64) as u8
    }
}

/// Similarity of `candidate` to `target`, 0..=100.
pub fn score(target: &TargetProfile, candidate: &CandidateProfile) -> u8 {
    score_breakdown(target, candidate).total()
}

/// Compute every term separately.
pub fn score_breakdown(target: &TargetProfile, candidate: &CandidateProfile) -> ScoreBreakdown {
    ScoreBreakdown {
        vcpu: closeness(target.vcpus as f64, candidate.vcpus as f64, weights::VCPU),
        memory: closeness(target.memory_gb, candidate.memory_gb, weights::MEMORY),
        family: family_term(&target.family, &candidate.family),
        generation: if target.generations.is_disjoint(&candidate.generations) {
            0.0
        } else {
            weights::GENERATION
        },
        architecture: if target.architecture == candidate.architecture {
            weights::ARCHITECTURE
        } else {
            0.0
        },
        premium_io: if !target.premium_io || candidate.premium_io {
            weights::PREMIUM_IO
        } else {
            0.0
        },
    }
}

/// `weight * (1 - |t - c| / max(t, c))`; zero when either side is zero.
fn closeness(target: f64, candidate: f64, weight: f64) -> f64 {
    if target <= 0.0 || candidate <= 0.0 {
        return 0.0;
    }
    weight * (1.0 - (target - candidate).abs() / target.max(candidate))
}

fn family_term(target: &str, candidate: &str) -> f64 {
    if target.eq_ignore_ascii_case(candidate) {
        return weights::FAMILY_EXACT;
    }
    match (FamilyCategory::of(target), FamilyCategory::of(candidate)) {
        (Some(a), Some(b)) if a == b => return weights::FAMILY_CATEGORY,
        _ => {}
    }
    let first = |s: &str| s.chars().next().map(|c| c.to_ascii_uppercase());
    match (first(target), first(candidate)) {
        (Some(a), Some(b)) if a == b => weights::FAMILY_PREFIX,
        _ => 0.0,
    }
}
