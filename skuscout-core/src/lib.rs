//! # skuscout-core
//!
//! Foundation crate for SKU availability scanning and substitute recommendation.
//! Defines all shared types, provider traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::ScoutConfig;
pub use errors::{ApiError, ScoutError, ScoutResult};
pub use models::{
    Architecture, AvailabilityStatus, ClassifiedResource, Generation, ResourceSpec,
    RestrictionReason, RestrictionRecord, RestrictionScope, SkuProfile, ZoneAvailability,
};
