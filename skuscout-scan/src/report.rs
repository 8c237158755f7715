//! ScanReport: merged result of one run and the views derived from it.

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use skuscout_availability::{aggregate_region, resource_rows, FamilyRow, ResourceRow};
use skuscout_core::config::RecommendConfig;
use skuscout_core::errors::ScanError;
use skuscout_core::models::{
    Candidate, ClassifiedResource, PricingFallback, QuotaUsage, Recommendation, RegionPrices,
};
use skuscout_core::ScoutResult;
use skuscout_recommend::{resolve_target, RankingPipeline};
use uuid::Uuid;

use crate::pricing::PricedRegion;

/// One region's classified listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionScan {
    pub region: String,
    pub resources: Vec<ClassifiedResource>,
    pub quotas: HashMap<String, QuotaUsage>,
    /// Set when the region listing could not be fetched.
    pub error: Option<ScanError>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    pub run_id: Uuid,
    pub scanned_at: DateTime<Utc>,
    pub subscription_id: String,
    /// In configured region order.
    pub regions: Vec<RegionScan>,
    /// Resolved prices per region. Regions without any price are absent.
    pub pricing: BTreeMap<String, PricedRegion>,
    pub pricing_fallbacks: Vec<PricingFallback>,
}

impl ScanReport {
    /// Every classified resource across all regions.
    pub fn resources(&self) -> impl Iterator<Item = &ClassifiedResource> {
        self.regions.iter().flat_map(|r| r.resources.iter())
    }

    pub fn region(&self, name: &str) -> Option<&RegionScan> {
        self.regions.iter().find(|r| r.region.eq_ignore_ascii_case(name))
    }

    pub fn prices_for(&self, region: &str) -> Option<&RegionPrices> {
        self.pricing.get(region).map(|p| &p.prices)
    }

    /// Per-region errors, in region order.
    pub fn failed_regions(&self) -> Vec<&ScanError> {
        self.regions.iter().filter_map(|r| r.error.as_ref()).collect()
    }

    /// Comparison matrix: one row per region and family.
    pub fn family_rows(&self) -> Vec<FamilyRow> {
        self.regions
            .iter()
            .flat_map(|r| {
                aggregate_region(&r.region, &r.resources, &r.quotas, self.prices_for(&r.region))
            })
            .map(|rollup| FamilyRow::from(&rollup))
            .collect()
    }

    /// Detail rows, region order then family and name.
    pub fn resource_rows(&self) -> Vec<ResourceRow> {
        self.regions
            .iter()
            .flat_map(|r| resource_rows(&r.resources, &r.quotas, self.prices_for(&r.region)))
            .collect()
    }

    /// Ranker input built from every scanned resource.
    pub fn candidates(&self) -> Vec<Candidate> {
        self.regions
            .iter()
            .flat_map(|r| {
                let prices = self.prices_for(&r.region);
                r.resources
                    .iter()
                    .map(move |resource| Candidate::from_classified(resource, prices))
            })
            .collect()
    }

    /// Rank substitutes for `target` across every scanned region.
    pub fn recommend(&self, target: &str, config: &RecommendConfig) -> ScoutResult<Recommendation> {
        let resources: Vec<ClassifiedResource> = self.resources().cloned().collect();
        let profile = resolve_target(target, &resources)?;
        Ok(RankingPipeline::new(config).rank(&profile, &self.candidates()))
    }
}
