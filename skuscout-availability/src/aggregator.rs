//! Family rollups for comparison views.
//!
//! Groups a region's classified SKUs by family and reports the largest SKU as
//! the family representative. The family status is the representative's own
//! classification; it is never derived a second time here.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use skuscout_core::models::{ClassifiedResource, Price, QuotaUsage, RegionPrices, ZoneAvailability};

/// One family in one region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FamilyRollup {
    pub family: String,
    pub region: String,
    /// SKUs listed for the family.
    pub total_count: usize,
    /// SKUs with no restriction records at all.
    pub available_count: usize,
    /// Largest SKU by vCPU.
    pub representative: String,
    pub representative_vcpus: u32,
    pub representative_memory_gb: f64,
    pub availability: ZoneAvailability,
    pub quota: Option<QuotaUsage>,
    pub price: Option<Price>,
}

impl FamilyRollup {
    /// Quota headroom, when the quota provider knew the family.
    pub fn quota_available(&self) -> Option<u64> {
        self.quota.map(|q| q.available())
    }
}

/// Build rollups for every family in one region, ordered by family code.
pub fn aggregate_region(
    region: &str,
    resources: &[ClassifiedResource],
    quotas: &HashMap<String, QuotaUsage>,
    prices: Option<&RegionPrices>,
) -> Vec<FamilyRollup> {
    let mut families: BTreeMap<&str, Vec<&ClassifiedResource>> = BTreeMap::new();
    for resource in resources {
        families
            .entry(resource.spec.family.as_str())
            .or_default()
            .push(resource);
    }

    families
        .into_iter()
        .filter_map(|(family, members)| {
            let representative = representative(&members)?;
            Some(FamilyRollup {
                family: family.to_string(),
                region: region.to_string(),
                total_count: members.len(),
                available_count: members.iter().filter(|m| m.spec.is_unrestricted()).count(),
                representative: representative.spec.name.clone(),
                representative_vcpus: representative.spec.vcpus,
                representative_memory_gb: representative.spec.memory_gb,
                availability: representative.availability.clone(),
                quota: quotas.get(family).copied(),
                price: prices
                    .and_then(|p| p.get(&representative.spec.name))
                    .cloned(),
            })
        })
        .collect()
}

/// Largest vCPU count; ties go to more memory, then the lexically first name.
fn representative<'a>(members: &[&'a ClassifiedResource]) -> Option<&'a ClassifiedResource> {
    members.iter().copied().max_by(|a, b| {
        a.spec
            .vcpus
            .cmp(&b.spec.vcpus)
            .then(a.spec.memory_gb.total_cmp(&b.spec.memory_gb))
            .then_with(|| b.spec.name.cmp(&a.spec.name))
    })
}
