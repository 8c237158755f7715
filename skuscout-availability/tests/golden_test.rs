//! Golden region listings: every SKU's status and every family rollup must
//! match the recorded expectations.

use std::collections::HashMap;

use skuscout_availability::{aggregate_region, classify_region, resource_rows, FamilyRow};
use test_fixtures::all_region_fixtures;

#[test]
fn statuses_match_golden_expectations() {
    for fixture in all_region_fixtures() {
        let classified = classify_region(&fixture.region, fixture.skus.clone());
        for resource in &classified {
            let expected = fixture
                .expected_status(&resource.spec.name)
                .unwrap_or_else(|| panic!("no expectation for {}", resource.spec.name));
            assert_eq!(
                resource.availability.status.to_string(),
                expected,
                "{} in {}",
                resource.spec.name,
                fixture.region
            );
        }
    }
}

#[test]
fn family_rollups_match_golden_expectations() {
    for fixture in all_region_fixtures() {
        let classified = classify_region(&fixture.region, fixture.skus.clone());
        let retail = fixture.retail();
        let rollups = aggregate_region(&fixture.region, &classified, &fixture.quotas, Some(&retail));
        let families = fixture.expected["families"].as_object().unwrap();
        assert_eq!(rollups.len(), families.len(), "family count in {}", fixture.region);

        for rollup in &rollups {
            let expected = &families[&rollup.family];
            let row = FamilyRow::from(rollup);
            assert_eq!(row.representative, expected["representative"].as_str().unwrap());
            assert_eq!(row.total_count as u64, expected["total_count"].as_u64().unwrap());
            assert_eq!(
                row.available_count as u64,
                expected["available_count"].as_u64().unwrap()
            );
            assert_eq!(row.status.to_string(), expected["status"].as_str().unwrap());
        }
    }
}

#[test]
fn family_status_agrees_with_representative_detail_row() {
    let fixture = test_fixtures::region_fixture("eastus");
    let classified = classify_region(&fixture.region, fixture.skus.clone());
    let rollups = aggregate_region(&fixture.region, &classified, &fixture.quotas, None);
    let rows = resource_rows(&classified, &fixture.quotas, None);
    let by_name: HashMap<&str, _> = rows.iter().map(|r| (r.name.as_str(), r)).collect();

    for rollup in &rollups {
        let detail = by_name[rollup.representative.as_str()];
        assert_eq!(detail.status, rollup.availability.status);
        assert_eq!(detail.zones_ok.len(), rollup.availability.ok_count());
    }
}

#[test]
fn quota_headroom_from_fixture() {
    let fixture = test_fixtures::region_fixture("eastus");
    let classified = classify_region(&fixture.region, fixture.skus.clone());
    let rollups = aggregate_region(&fixture.region, &classified, &fixture.quotas, None);
    let headroom: HashMap<&str, Option<u64>> = rollups
        .iter()
        .map(|r| (r.family.as_str(), r.quota_available()))
        .collect();

    assert_eq!(headroom["E"], Some(250));
    assert_eq!(headroom["D"], Some(4));
    assert_eq!(headroom["M"], Some(0));
    assert_eq!(headroom["NC"], None);
}

#[test]
fn non_zonal_sku_is_reported_distinctly() {
    let fixture = test_fixtures::region_fixture("eastus");
    let classified = classify_region(&fixture.region, fixture.skus.clone());
    let b2ms = classified
        .iter()
        .find(|c| c.spec.name == "Standard_B2ms")
        .unwrap();
    assert!(b2ms.availability.non_zonal);
    assert!(b2ms.availability.status.is_available());
}
