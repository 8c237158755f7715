use proptest::prelude::*;
use skuscout_core::models::{Architecture, Generation, SkuProfile};
use skuscout_recommend::{score, score_breakdown};

fn arb_family() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("D"), Just("DS"), Just("E"), Just("EA"), Just("M"), Just("F"),
        Just("NC"), Just("HB"), Just("L"), Just("B"), Just("Q"),
    ]
    .prop_map(|s| s.to_string())
}

fn arb_profile() -> impl Strategy<Value = SkuProfile> {
    (
        1u32..=416,
        1u32..=12_000,
        arb_family(),
        prop::sample::subsequence(vec![Generation::V1, Generation::V2], 1..=2),
        prop_oneof![Just(Architecture::X64), Just(Architecture::Arm64)],
        any::<bool>(),
    )
        .prop_map(|(vcpus, memory, family, generations, architecture, premium_io)| SkuProfile {
            vcpus,
            memory_gb: memory as f64 / 4.0,
            family,
            generations: generations.into_iter().collect(),
            architecture,
            premium_io,
        })
}

// ── Identity and bounds ──────────────────────────────────────────────────

proptest! {
    #[test]
    fn identical_profiles_score_100(profile in arb_profile()) {
        prop_assert_eq!(score(&profile, &profile), 100);
    }

    #[test]
    fn score_never_exceeds_100(target in arb_profile(), candidate in arb_profile()) {
        prop_assert!(score(&target, &candidate) <= 100);
        let b = score_breakdown(&target, &candidate);
        prop_assert!(b.vcpu >= 0.0 && b.memory >= 0.0);
    }
}

// ── Monotonic in closeness ───────────────────────────────────────────────

proptest! {
    #[test]
    fn approaching_from_below_never_lowers_the_score(
        target in arb_profile(),
        fraction in 0.0f64..1.0,
        step in 0.0f64..1.0,
    ) {
        let t = target.vcpus;
        let far = ((t as f64 * fraction) as u32).max(1).min(t);
        let near = far + ((t - far) as f64 * step) as u32;

        let mut a = target.clone();
        a.vcpus = far;
        let mut b = target.clone();
        b.vcpus = near;
        prop_assert!(score(&target, &b) >= score(&target, &a));
    }

    #[test]
    fn approaching_from_above_never_lowers_the_score(
        target in arb_profile(),
        extra in 0u32..512,
        step in 0.0f64..1.0,
    ) {
        let t = target.vcpus;
        let far = t + extra;
        let near = far - (extra as f64 * step) as u32;

        let mut a = target.clone();
        a.vcpus = far;
        let mut b = target.clone();
        b.vcpus = near;
        prop_assert!(score(&target, &b) >= score(&target, &a));
    }

    #[test]
    fn architecture_term_is_all_or_nothing(target in arb_profile()) {
        let mut other = target.clone();
        other.architecture = match target.architecture {
            Architecture::X64 => Architecture::Arm64,
            Architecture::Arm64 => Architecture::X64,
        };
        prop_assert_eq!(score(&target, &target) - score(&target, &other), 12);
    }
}
