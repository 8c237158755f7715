//! # skuscout-scan
//!
//! Orchestrates one scan run: resolves the subscription/region context,
//! fetches every region on a bounded worker pool, classifies the results,
//! and resolves prices through the negotiated → retail fallback.

pub mod cache;
pub mod context;
pub mod engine;
pub mod pricing;
pub mod report;
pub mod tracing_setup;

pub use cache::PriceCache;
pub use context::ScanContext;
pub use engine::{RegionFetch, ScanEngine};
pub use pricing::{PricedRegion, PricingResolver};
pub use report::{RegionScan, ScanReport};
pub use tracing_setup::init_tracing;
