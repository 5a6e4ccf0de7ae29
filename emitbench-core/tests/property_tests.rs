//! Property tests for the percentile calculator and year-over-year changes.
//!
//! Uses proptest to verify:
//! 1. Non-empty populations always yield a triple summing to 100
//! 2. All three shares are non-negative
//! 3. Subjects outside the population range land entirely in one bucket
//! 4. A population of copies of the subject is 100% equal
//! 5. The calculation is a pure function of its inputs

use emitbench_core::analysis::{year_over_year, PercentileCalculator};
use emitbench_core::domain::YearValue;
use proptest::prelude::*;

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_emission() -> impl Strategy<Value = f64> {
    (0.0..1.0e8_f64).prop_map(|v| (v * 100.0).round() / 100.0)
}

fn arb_population() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(arb_emission(), 1..200)
}

// ── 1-2. Sum and sign ────────────────────────────────────────────────

proptest! {
    #[test]
    fn shares_sum_to_100(pop in arb_population(), subject in arb_emission()) {
        let r = PercentileCalculator::compute(&pop, subject).unwrap();
        prop_assert!((r.total() - 100.0).abs() <= 0.01, "sum = {}", r.total());
    }

    #[test]
    fn shares_are_non_negative(pop in arb_population(), subject in arb_emission()) {
        let r = PercentileCalculator::compute(&pop, subject).unwrap();
        prop_assert!(r.lower_pct >= 0.0);
        prop_assert!(r.equal_pct >= 0.0);
        prop_assert!(r.higher_pct >= 0.0);
    }

    #[test]
    fn subject_from_population_has_equal_share(pop in arb_population(), idx in any::<prop::sample::Index>()) {
        let subject = pop[idx.index(pop.len())];
        let r = PercentileCalculator::compute(&pop, subject).unwrap();
        prop_assert!(r.equal_pct > 0.0);
    }
}

// ── 3. Outside the range ─────────────────────────────────────────────

proptest! {
    #[test]
    fn subject_above_all_has_no_higher(pop in arb_population()) {
        let subject = pop.iter().copied().fold(f64::NEG_INFINITY, f64::max) + 1.0;
        let r = PercentileCalculator::compute(&pop, subject).unwrap();
        prop_assert_eq!(r.higher_pct, 0.0);
        prop_assert_eq!(r.equal_pct, 0.0);
        prop_assert!((r.lower_pct - 100.0).abs() < 1e-9);
    }

    #[test]
    fn subject_below_all_has_no_lower(pop in arb_population()) {
        let subject = pop.iter().copied().fold(f64::INFINITY, f64::min) - 1.0;
        let r = PercentileCalculator::compute(&pop, subject).unwrap();
        prop_assert_eq!(r.lower_pct, 0.0);
        prop_assert_eq!(r.equal_pct, 0.0);
        prop_assert!((r.higher_pct - 100.0).abs() < 1e-9);
    }
}

// ── 4-5. Copies and purity ───────────────────────────────────────────

proptest! {
    #[test]
    fn copies_of_subject_are_all_equal(subject in arb_emission(), n in 1usize..100) {
        let pop = vec![subject; n];
        let r = PercentileCalculator::compute(&pop, subject).unwrap();
        prop_assert_eq!(r.lower_pct, 0.0);
        prop_assert_eq!(r.higher_pct, 0.0);
        prop_assert!((r.equal_pct - 100.0).abs() < 1e-9);
    }

    #[test]
    fn compute_is_idempotent(pop in arb_population(), subject in arb_emission()) {
        let a = PercentileCalculator::compute(&pop, subject);
        let b = PercentileCalculator::compute(&pop, subject);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn empty_population_is_absent(subject in any::<f64>()) {
        prop_assert!(PercentileCalculator::compute(&[], subject).is_none());
    }
}

// ── Year-over-year ───────────────────────────────────────────────────

proptest! {
    /// Applying each change to the previous value reproduces the series.
    #[test]
    fn yoy_changes_reconstruct_series(values in prop::collection::vec(1.0..1.0e6_f64, 2..30)) {
        let history: Vec<YearValue> = values
            .iter()
            .enumerate()
            .map(|(i, &v)| YearValue { year: 2000 + i as i32, value: Some(v) })
            .collect();
        let changes = year_over_year(&history);
        prop_assert_eq!(changes.len(), values.len() - 1);
        for (i, change) in changes.iter().enumerate() {
            let rebuilt = values[i] * (1.0 + change.pct.unwrap() / 100.0);
            prop_assert!((rebuilt - values[i + 1]).abs() <= 1e-6 * values[i + 1].max(1.0));
        }
    }
}

#[test]
fn documented_scenarios() {
    let r = PercentileCalculator::compute(&[10.0, 20.0, 20.0, 30.0], 20.0).unwrap();
    assert_eq!((r.lower_pct, r.equal_pct, r.higher_pct), (25.0, 50.0, 25.0));

    let r = PercentileCalculator::compute(&[5.0], 5.0).unwrap();
    assert_eq!((r.lower_pct, r.equal_pct, r.higher_pct), (0.0, 100.0, 0.0));

    let r = PercentileCalculator::compute(&[1.0, 2.0, 3.0], 10.0).unwrap();
    assert_eq!((r.lower_pct, r.equal_pct, r.higher_pct), (100.0, 0.0, 0.0));

    let history = [100.0, 80.0, 120.0]
        .iter()
        .enumerate()
        .map(|(i, &v)| YearValue { year: 2020 + i as i32, value: Some(v) })
        .collect::<Vec<_>>();
    let pcts: Vec<Option<f64>> = year_over_year(&history).iter().map(|c| c.pct).collect();
    assert_eq!(pcts, vec![Some(-20.0), Some(50.0)]);
}
