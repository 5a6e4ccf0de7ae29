//! Percentile position of a subject value within a peer population.

use serde::Serialize;

/// Deviation from 100 above which the triple is rescaled.
const NORMALIZE_TOLERANCE: f64 = 0.01;

/// Share of the population strictly below, equal to, and strictly above a
/// subject value, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PercentileResult {
    pub lower_pct: f64,
    pub equal_pct: f64,
    pub higher_pct: f64,
}

impl PercentileResult {
    pub fn total(&self) -> f64 {
        self.lower_pct + self.equal_pct + self.higher_pct
    }
}

/// Stateless calculator locating a subject value inside a population.
pub struct PercentileCalculator;

impl PercentileCalculator {
    /// Returns `None` when the population is empty.
    ///
    /// NaN entries compare false against everything, so they land in no
    /// bucket; the rescale step then spreads their share over the other
    /// three. When nothing is comparable at all (NaN subject, or an all-NaN
    /// population) there is no triple to report and `None` is returned.
    pub fn compute(population: &[f64], subject: f64) -> Option<PercentileResult> {
        if population.is_empty() {
            return None;
        }

        let total = population.len() as f64;
        let (mut lower, mut equal, mut higher) = (0usize, 0usize, 0usize);
        for &x in population {
            if x < subject {
                lower += 1;
            } else if x == subject {
                equal += 1;
            } else if x > subject {
                higher += 1;
            }
        }

        let mut result = PercentileResult {
            lower_pct: lower as f64 / total * 100.0,
            equal_pct: equal as f64 / total * 100.0,
            higher_pct: higher as f64 / total * 100.0,
        };

        let sum = result.total();
        if sum == 0.0 {
            return None;
        }
        if (sum - 100.0).abs() > NORMALIZE_TOLERANCE {
            result.lower_pct = result.lower_pct / sum * 100.0;
            result.equal_pct = result.equal_pct / sum * 100.0;
            result.higher_pct = result.higher_pct / sum * 100.0;
        }

        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_triple(r: PercentileResult, lower: f64, equal: f64, higher: f64) {
        assert!((r.lower_pct - lower).abs() < 1e-9, "lower {} != {}", r.lower_pct, lower);
        assert!((r.equal_pct - equal).abs() < 1e-9, "equal {} != {}", r.equal_pct, equal);
        assert!((r.higher_pct - higher).abs() < 1e-9, "higher {} != {}", r.higher_pct, higher);
    }

    #[test]
    fn empty_population_is_absent() {
        assert!(PercentileCalculator::compute(&[], 10.0).is_none());
    }

    #[test]
    fn duplicates_split_evenly() {
        let r = PercentileCalculator::compute(&[10.0, 20.0, 20.0, 30.0], 20.0).unwrap();
        assert_triple(r, 25.0, 50.0, 25.0);
    }

    #[test]
    fn single_member_equal_to_subject() {
        let r = PercentileCalculator::compute(&[5.0], 5.0).unwrap();
        assert_triple(r, 0.0, 100.0, 0.0);
    }

    #[test]
    fn subject_above_everyone() {
        let r = PercentileCalculator::compute(&[1.0, 2.0, 3.0], 10.0).unwrap();
        assert_triple(r, 100.0, 0.0, 0.0);
    }

    #[test]
    fn subject_below_everyone() {
        let r = PercentileCalculator::compute(&[4.0, 8.0, 9.5], -1.0).unwrap();
        assert_triple(r, 0.0, 0.0, 100.0);
    }

    #[test]
    fn subject_outside_population() {
        let r = PercentileCalculator::compute(&[1.0, 3.0], 2.0).unwrap();
        assert_triple(r, 50.0, 0.0, 50.0);
    }

    #[test]
    fn thirds_stay_within_tolerance() {
        let r = PercentileCalculator::compute(&[1.0, 2.0, 3.0], 2.0).unwrap();
        assert!((r.total() - 100.0).abs() <= NORMALIZE_TOLERANCE);
        assert!((r.lower_pct - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn nan_members_are_rescaled_away() {
        let r = PercentileCalculator::compute(&[1.0, f64::NAN, 3.0, f64::NAN], 2.0).unwrap();
        assert_triple(r, 50.0, 0.0, 50.0);
    }

    #[test]
    fn nan_subject_is_absent() {
        assert!(PercentileCalculator::compute(&[1.0, 2.0], f64::NAN).is_none());
    }

    #[test]
    fn all_nan_population_is_absent() {
        assert!(PercentileCalculator::compute(&[f64::NAN, f64::NAN], 1.0).is_none());
    }
}
