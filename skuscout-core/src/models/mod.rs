mod availability;
mod candidate;
mod classified;
mod price;
mod pricing_fallback;
mod profile;
mod quota;
mod resource;

pub use availability::{AvailabilityStatus, ZoneAvailability};
pub use candidate::{Candidate, Recommendation, ScoredCandidate};
pub use classified::ClassifiedResource;
pub use price::{Price, PriceSource, RegionPrices};
pub use pricing_fallback::PricingFallback;
pub use profile::{CandidateProfile, SkuProfile, TargetProfile};
pub use quota::QuotaUsage;
pub use resource::{
    Architecture, Generation, ResourceSpec, RestrictionReason, RestrictionRecord,
    RestrictionScope,
};
