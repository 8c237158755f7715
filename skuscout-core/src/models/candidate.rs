use serde::{Deserialize, Serialize};

use super::{AvailabilityStatus, CandidateProfile, ClassifiedResource, Price, RegionPrices};

/// Ranker input: one SKU in one region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub name: String,
    pub region: String,
    pub profile: CandidateProfile,
    pub status: AvailabilityStatus,
    pub ok_zones: usize,
    pub price: Option<Price>,
}

impl Candidate {
    /// Build a candidate from a classified resource, looking up its price if known.
    pub fn from_classified(resource: &ClassifiedResource, prices: Option<&RegionPrices>) -> Self {
        Self {
            name: resource.spec.name.clone(),
            region: resource.region.clone(),
            profile: CandidateProfile::from(&resource.spec),
            status: resource.availability.status,
            ok_zones: resource.availability.ok_count(),
            price: prices.and_then(|p| p.get(&resource.spec.name)).cloned(),
        }
    }
}

/// A ranked substitute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    pub name: String,
    pub region: String,
    pub profile: CandidateProfile,
    /// Similarity to the target, 0..=100.
    pub score: u8,
    pub status: AvailabilityStatus,
    pub ok_zones: usize,
    pub price: Option<Price>,
}

/// Ranker output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Best substitutes meeting the configured minimums, best first.
    pub ranked: Vec<ScoredCandidate>,
    /// Available but under-sized options, surfaced only when nothing in
    /// `ranked` is available.
    pub smaller_alternatives: Vec<ScoredCandidate>,
}
