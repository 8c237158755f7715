use std::collections::BTreeSet;

use proptest::prelude::*;
use skuscout_availability::classify;
use skuscout_core::models::{
    AvailabilityStatus, RestrictionReason, RestrictionRecord, RestrictionScope,
};

fn arb_zone() -> impl Strategy<Value = String> {
    (1u8..=5).prop_map(|z| z.to_string())
}

fn arb_record() -> impl Strategy<Value = RestrictionRecord> {
    (
        prop_oneof![
            4 => Just(RestrictionScope::Zone),
            1 => Just(RestrictionScope::Location),
        ],
        prop_oneof![
            Just(RestrictionReason::SubscriptionLimited),
            Just(RestrictionReason::CapacityRestricted),
            Just(RestrictionReason::Other),
        ],
        prop::collection::btree_set(arb_zone(), 0..4),
    )
        .prop_map(|(scope, reason, zones)| RestrictionRecord {
            scope,
            reason,
            zones,
        })
}

fn arb_input() -> impl Strategy<Value = (BTreeSet<String>, Vec<RestrictionRecord>)> {
    (
        prop::collection::btree_set(arb_zone(), 0..4),
        prop::collection::vec(arb_record(), 0..5),
    )
}

// ── Zone partition ───────────────────────────────────────────────────────

proptest! {
    #[test]
    fn zone_sets_partition_declared_zones((declared, records) in arb_input()) {
        let result = classify(&declared, &records);

        prop_assert_eq!(result.declared(), declared);
        prop_assert!(result.ok.is_disjoint(&result.limited));
        prop_assert!(result.ok.is_disjoint(&result.restricted));
        prop_assert!(result.limited.is_disjoint(&result.restricted));
    }

    #[test]
    fn available_iff_no_limited_and_no_restricted((declared, records) in arb_input()) {
        let result = classify(&declared, &records);
        let clean = result.limited.is_empty() && result.restricted.is_empty();
        prop_assert_eq!(result.status == AvailabilityStatus::Available, clean);
    }

    #[test]
    fn unavailable_iff_restricted_and_no_ok((declared, records) in arb_input()) {
        let result = classify(&declared, &records);
        let blocked = !result.restricted.is_empty() && result.ok.is_empty();
        prop_assert_eq!(result.status == AvailabilityStatus::Unavailable, blocked);
    }

    #[test]
    fn record_order_does_not_matter((declared, records) in arb_input()) {
        let forward = classify(&declared, &records);
        let mut reversed = records.clone();
        reversed.reverse();
        prop_assert_eq!(forward, classify(&declared, &reversed));
    }
}

// ── Status depends only on set non-emptiness ─────────────────────────────

proptest! {
    #[test]
    fn renaming_zones_keeps_status((declared, records) in arb_input()) {
        let rename = |z: &String| format!("az-{z}");
        let renamed_declared: BTreeSet<String> = declared.iter().map(rename).collect();
        let renamed_records: Vec<RestrictionRecord> = records
            .iter()
            .map(|r| RestrictionRecord {
                zones: r.zones.iter().map(rename).collect(),
                ..r.clone()
            })
            .collect();

        let original = classify(&declared, &records);
        let renamed = classify(&renamed_declared, &renamed_records);
        prop_assert_eq!(original.status, renamed.status);
        prop_assert_eq!(original.ok_count(), renamed.ok_count());
    }
}
