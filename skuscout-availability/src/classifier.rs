//! Restriction classifier.
//!
//! Partitions a SKU's declared zones into OK / Limited / Restricted and derives
//! one of five statuses from which of those sets are non-empty. Recomputed from
//! scratch per SKU per scan; there is no state carried between calls.
//!
//! A zone named by both a capacity restriction and a subscription restriction
//! is Restricted regardless of record order. Zones a record names but the SKU
//! does not declare are ignored.

use std::collections::BTreeSet;

use skuscout_core::models::{
    AvailabilityStatus, ClassifiedResource, ResourceSpec, RestrictionRecord, RestrictionScope,
    ZoneAvailability,
};
use tracing::debug;

/// Classify one SKU's zones.
pub fn classify(declared: &BTreeSet<String>, restrictions: &[RestrictionRecord]) -> ZoneAvailability {
    let non_zonal = declared.is_empty();

    if restrictions.is_empty() {
        return ZoneAvailability {
            status: AvailabilityStatus::Available,
            ok: declared.clone(),
            limited: BTreeSet::new(),
            restricted: BTreeSet::new(),
            non_zonal,
        };
    }

    let zone_records = restrictions
        .iter()
        .filter(|r| r.scope == RestrictionScope::Zone);

    let mut limited = BTreeSet::new();
    let mut restricted = BTreeSet::new();
    for record in zone_records {
        let target = if record.reason.is_subscription_level() {
            &mut limited
        } else {
            &mut restricted
        };
        target.extend(record.zones.iter().filter(|z| declared.contains(*z)).cloned());
    }
    // Capacity restriction outranks a subscription limit on the same zone.
    limited.retain(|z| !restricted.contains(z));

    let ok: BTreeSet<String> = declared
        .iter()
        .filter(|z| !limited.contains(*z) && !restricted.contains(*z))
        .cloned()
        .collect();

    let status = derive_status(!ok.is_empty(), !limited.is_empty(), !restricted.is_empty());

    ZoneAvailability {
        status,
        ok,
        limited,
        restricted,
        non_zonal,
    }
}

/// Status from the non-emptiness of the three zone sets.
fn derive_status(has_ok: bool, has_limited: bool, has_restricted: bool) -> AvailabilityStatus {
    match (has_restricted, has_limited, has_ok) {
        (true, _, false) => AvailabilityStatus::Unavailable,
        (true, _, true) => AvailabilityStatus::PartialZone,
        (false, true, false) => AvailabilityStatus::SubscriptionLimited,
        (false, true, true) => AvailabilityStatus::ZoneConstrained,
        (false, false, _) => AvailabilityStatus::Available,
    }
}

/// Classify a SKU listed in `region`.
pub fn classify_resource(region: &str, spec: ResourceSpec) -> ClassifiedResource {
    let availability = classify(&spec.zones, &spec.restrictions);
    ClassifiedResource {
        region: region.to_string(),
        spec,
        availability,
    }
}

/// Classify every SKU in a region listing.
pub fn classify_region(region: &str, specs: Vec<ResourceSpec>) -> Vec<ClassifiedResource> {
    let classified: Vec<ClassifiedResource> = specs
        .into_iter()
        .map(|spec| classify_resource(region, spec))
        .collect();

    debug!(
        region,
        skus = classified.len(),
        unavailable = classified
            .iter()
            .filter(|c| c.availability.status == AvailabilityStatus::Unavailable)
            .count(),
        "classified region"
    );

    classified
}
