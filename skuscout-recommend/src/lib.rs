//! # skuscout-recommend
//!
//! Finds substitute SKUs when the requested one is unavailable or
//! capacity-constrained: a six-term similarity scorer and a ranking pipeline
//! that filters, scores, sorts, deduplicates, and truncates candidates.

pub mod category;
pub mod ranking;
pub mod scorer;
pub mod target;

pub use category::FamilyCategory;
pub use ranking::RankingPipeline;
pub use scorer::{score, score_breakdown, ScoreBreakdown};
pub use target::resolve_target;
