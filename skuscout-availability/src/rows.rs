//! Flat rows handed to the presentation / export layer.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};
use skuscout_core::models::{
    Architecture, AvailabilityStatus, ClassifiedResource, Generation, QuotaUsage, RegionPrices,
};

use crate::aggregator::FamilyRollup;

/// Per-region, per-family comparison row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FamilyRow {
    pub region: String,
    pub family: String,
    pub total_count: usize,
    pub available_count: usize,
    pub representative: String,
    pub vcpus: u32,
    pub memory_gb: f64,
    pub status: AvailabilityStatus,
    pub zones_ok: usize,
    pub zones_limited: usize,
    pub zones_restricted: usize,
    pub non_zonal: bool,
    pub quota_available: Option<u64>,
    pub hourly_price: Option<f64>,
}

impl From<&FamilyRollup> for FamilyRow {
    fn from(rollup: &FamilyRollup) -> Self {
        Self {
            region: rollup.region.clone(),
            family: rollup.family.clone(),
            total_count: rollup.total_count,
            available_count: rollup.available_count,
            representative: rollup.representative.clone(),
            vcpus: rollup.representative_vcpus,
            memory_gb: rollup.representative_memory_gb,
            status: rollup.availability.status,
            zones_ok: rollup.availability.ok_count(),
            zones_limited: rollup.availability.limited_count(),
            zones_restricted: rollup.availability.restricted_count(),
            non_zonal: rollup.availability.non_zonal,
            quota_available: rollup.quota_available(),
            hourly_price: rollup.price.as_ref().map(|p| p.hourly),
        }
    }
}

/// Per-SKU detail row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceRow {
    pub region: String,
    pub name: String,
    pub family: String,
    pub vcpus: u32,
    pub memory_gb: f64,
    pub status: AvailabilityStatus,
    pub zones_ok: BTreeSet<String>,
    pub zones_limited: BTreeSet<String>,
    pub zones_restricted: BTreeSet<String>,
    pub non_zonal: bool,
    pub quota_available: Option<u64>,
    pub hourly_price: Option<f64>,
    // Passed through from the listing.
    pub generations: BTreeSet<Generation>,
    pub architecture: Architecture,
    pub image_compatible: Option<bool>,
}

impl ResourceRow {
    pub fn new(
        resource: &ClassifiedResource,
        quota: Option<&QuotaUsage>,
        prices: Option<&RegionPrices>,
    ) -> Self {
        let spec = &resource.spec;
        let availability = &resource.availability;
        Self {
            region: resource.region.clone(),
            name: spec.name.clone(),
            family: spec.family.clone(),
            vcpus: spec.vcpus,
            memory_gb: spec.memory_gb,
            status: availability.status,
            zones_ok: availability.ok.clone(),
            zones_limited: availability.limited.clone(),
            zones_restricted: availability.restricted.clone(),
            non_zonal: availability.non_zonal,
            quota_available: quota.map(QuotaUsage::available),
            hourly_price: prices.and_then(|p| p.get(&spec.name)).map(|p| p.hourly),
            generations: spec.generations.clone(),
            architecture: spec.architecture,
            image_compatible: spec.image_compatible,
        }
    }
}

/// Detail rows for one region, ordered by family then name.
pub fn resource_rows(
    resources: &[ClassifiedResource],
    quotas: &HashMap<String, QuotaUsage>,
    prices: Option<&RegionPrices>,
) -> Vec<ResourceRow> {
    let mut rows: Vec<ResourceRow> = resources
        .iter()
        .map(|r| ResourceRow::new(r, quotas.get(&r.spec.family), prices))
        .collect();
    rows.sort_by(|a, b| a.family.cmp(&b.family).then_with(|| a.name.cmp(&b.name)));
    rows
}
