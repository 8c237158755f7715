//! # skuscout-availability
//!
//! Turns raw zone restriction records into a definitive availability status
//! per SKU, and rolls classified SKUs up per family for comparison views.

pub mod aggregator;
pub mod classifier;
pub mod rows;

pub use aggregator::{aggregate_region, FamilyRollup};
pub use classifier::{classify, classify_region, classify_resource};
pub use rows::{resource_rows, FamilyRow, ResourceRow};
