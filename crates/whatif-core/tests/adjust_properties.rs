use proptest::prelude::*;
use whatif_core::{adjust_individual, adjust_structural, ClimateScores};

fn scores() -> impl Strategy<Value = ClimateScores> {
    (1.0f64..=5.0, 1.0f64..=5.0, 1.0f64..=5.0)
        .prop_map(|(l, c, t)| ClimateScores::new(l, c, t))
}

#[test]
fn test_reference_examples() {
    assert!((adjust_individual(0.8, 50.0, true) - 0.6).abs() < 1e-12);
    assert_eq!(adjust_individual(0.05, 50.0, true), 0.0);

    let baseline = ClimateScores::new(3.0, 3.0, 3.0);
    let hypothetical = ClimateScores::new(4.0, 3.0, 3.0);
    assert!((adjust_structural(0.5, &baseline, &hypothetical) - 0.45).abs() < 1e-12);
}

#[test]
fn test_calls_are_bit_identical() {
    let a = adjust_individual(0.537, 17.0, true);
    let b = adjust_individual(0.537, 17.0, true);
    assert_eq!(a.to_bits(), b.to_bits());
}

proptest! {
    #[test]
    fn prop_individual_stays_in_unit_interval(
        p in 0.0f64..=1.0,
        s in 0.0f64..=50.0,
        promoted in any::<bool>(),
    ) {
        let r = adjust_individual(p, s, promoted);
        prop_assert!((0.0..=1.0).contains(&r));
    }

    #[test]
    fn prop_identity_scenario(p in 0.0f64..=1.0) {
        prop_assert_eq!(adjust_individual(p, 0.0, false), p);
    }

    #[test]
    fn prop_full_scenario(p in 0.0f64..=1.0) {
        prop_assert_eq!(adjust_individual(p, 50.0, true), (p - 0.1 - 0.1).max(0.0));
    }

    #[test]
    fn prop_salary_is_monotone(
        p in 0.0f64..=1.0,
        s1 in 0.0f64..=50.0,
        s2 in 0.0f64..=50.0,
        promoted in any::<bool>(),
    ) {
        let (lo, hi) = if s1 <= s2 { (s1, s2) } else { (s2, s1) };
        prop_assert!(adjust_individual(p, hi, promoted) <= adjust_individual(p, lo, promoted));
    }

    #[test]
    fn prop_promotion_never_increases(p in 0.0f64..=1.0, s in 0.0f64..=50.0) {
        prop_assert!(adjust_individual(p, s, true) <= adjust_individual(p, s, false));
    }

    #[test]
    fn prop_structural_identity(p in 0.0f64..=1.0, b in scores()) {
        prop_assert_eq!(adjust_structural(p, &b, &b), p);
    }

    #[test]
    fn prop_structural_stays_in_unit_interval(p in 0.0f64..=1.0, b in scores(), h in scores()) {
        let r = adjust_structural(p, &b, &h);
        prop_assert!((0.0..=1.0).contains(&r));
    }
}
