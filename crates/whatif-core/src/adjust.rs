//! Scenario adjusters
//!
//! Both adjusters are linear reductions of the base probability followed by
//! a clamp to [0, 1]. Neither validates its inputs: out-of-range values flow
//! through the formula and only the output is bounded.

use crate::types::ClimateScores;

/// Absolute risk reduction for a 100% salary increase
pub const SALARY_WEIGHT: f64 = 0.2;

/// Absolute risk reduction for a promotion
pub const PROMOTION_WEIGHT: f64 = 0.1;

/// Absolute risk reduction per unit of climate-score improvement
pub const STRUCTURAL_WEIGHT: f64 = 0.05;

/// Clamp a probability to [0, 1]. NaN is returned unchanged.
#[inline]
#[must_use]
pub fn clamp_probability(p: f64) -> f64 {
    p.clamp(0.0, 1.0)
}

/// Adjusted probability for one employee under a salary / promotion scenario.
///
/// `base - 0.2 * (salary_increase_pct / 100) - 0.1 * promoted`, clamped.
#[must_use]
pub fn adjust_individual(base_probability: f64, salary_increase_pct: f64, promoted: bool) -> f64 {
    let promotion = if promoted { 1.0 } else { 0.0 };
    let adjusted = base_probability
        - SALARY_WEIGHT * (salary_increase_pct / 100.0)
        - PROMOTION_WEIGHT * promotion;
    clamp_probability(adjusted)
}

/// Probability delta shared by every employee of a unit when its climate
/// scores move from `baseline` to `hypothetical`.
#[inline]
#[must_use]
pub fn structural_factor(baseline: &ClimateScores, hypothetical: &ClimateScores) -> f64 {
    -STRUCTURAL_WEIGHT * baseline.delta_sum(hypothetical)
}

/// Adjusted probability for one employee under a structural scenario
#[must_use]
pub fn adjust_structural(
    base_probability: f64,
    baseline: &ClimateScores,
    hypothetical: &ClimateScores,
) -> f64 {
    clamp_probability(base_probability + structural_factor(baseline, hypothetical))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_scenario_keeps_probability() {
        for p in [0.0, 0.13, 0.5, 0.99, 1.0] {
            assert_eq!(adjust_individual(p, 0.0, false), p);
        }
    }

    #[test]
    fn full_scenario_reduces_by_two_tenths() {
        let p = adjust_individual(0.8, 50.0, true);
        assert!((p - 0.6).abs() < 1e-12);
    }

    #[test]
    fn result_is_clamped_at_zero() {
        assert_eq!(adjust_individual(0.05, 50.0, true), 0.0);
    }

    #[test]
    fn out_of_range_inputs_are_clamped_not_rejected() {
        assert_eq!(adjust_individual(1.4, 0.0, false), 1.0);
        assert_eq!(adjust_individual(0.5, -500.0, false), 1.0);
    }

    #[test]
    fn structural_single_point_improvement() {
        let base = ClimateScores::new(3.0, 3.0, 3.0);
        let hypo = ClimateScores::new(4.0, 3.0, 3.0);
        assert!((structural_factor(&base, &hypo) + 0.05).abs() < 1e-12);
        assert!((adjust_structural(0.5, &base, &hypo) - 0.45).abs() < 1e-12);
    }

    #[test]
    fn structural_deterioration_raises_risk() {
        let base = ClimateScores::new(4.0, 4.0, 4.0);
        let hypo = ClimateScores::new(3.0, 3.0, 3.0);
        assert!((adjust_structural(0.5, &base, &hypo) - 0.65).abs() < 1e-12);
        assert_eq!(adjust_structural(0.95, &base, &hypo), 1.0);
    }

    #[test]
    fn nan_passes_through() {
        assert!(adjust_individual(f64::NAN, 10.0, true).is_nan());
    }
}
