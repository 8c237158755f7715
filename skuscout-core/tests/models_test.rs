use skuscout_core::models::*;

#[test]
fn resource_spec_deserializes_with_defaults() {
    let json = r#"{
        "name": "Standard_E64s_v5",
        "family": "E",
        "vcpus": 64,
        "memory_gb": 512.0,
        "architecture": "x64"
    }"#;
    let spec: ResourceSpec = serde_json::from_str(json).unwrap();
    assert_eq!(spec.architecture, Architecture::X64);
    assert!(spec.generations.is_empty());
    assert!(spec.zones.is_empty());
    assert!(spec.is_unrestricted());
    assert!(!spec.premium_io);
}

#[test]
fn architecture_accepts_provider_spellings() {
    let arm: Architecture = serde_json::from_str("\"ARM64\"").unwrap();
    assert_eq!(arm, Architecture::Arm64);
    assert_eq!(Architecture::parse("Arm64"), Some(Architecture::Arm64));
    assert_eq!(Architecture::parse(" X64 "), Some(Architecture::X64));
    assert_eq!(Architecture::parse("sparc"), None);
}

#[test]
fn unknown_restriction_reason_maps_to_other() {
    let json = r#"{"scope": "zone", "reason": "quota_exhausted", "zones": ["1"]}"#;
    let record: RestrictionRecord = serde_json::from_str(json).unwrap();
    assert_eq!(record.reason, RestrictionReason::Other);
    assert!(!record.reason.is_subscription_level());
}

#[test]
fn status_rank_groups_constrained_states() {
    assert_eq!(AvailabilityStatus::Available.rank(), 0);
    assert_eq!(AvailabilityStatus::ZoneConstrained.rank(), 1);
    assert_eq!(AvailabilityStatus::SubscriptionLimited.rank(), 1);
    assert_eq!(AvailabilityStatus::PartialZone.rank(), 1);
    assert_eq!(AvailabilityStatus::Unavailable.rank(), 2);
}

#[test]
fn profile_from_spec_copies_scored_fields() {
    let spec = ResourceSpec {
        name: "Standard_D4s_v5".into(),
        family: "D".into(),
        vcpus: 4,
        memory_gb: 16.0,
        generations: [Generation::V1, Generation::V2].into_iter().collect(),
        architecture: Architecture::X64,
        premium_io: true,
        zones: Default::default(),
        restrictions: vec![],
        image_compatible: None,
    };
    let profile = SkuProfile::from(&spec);
    assert_eq!(profile.vcpus, 4);
    assert_eq!(profile.family, "D");
    assert!(profile.premium_io);
    assert_eq!(profile.generations.len(), 2);
}
