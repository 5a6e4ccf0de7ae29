//! Gaussian kernel density estimate of a population, sampled for plotting.

use std::f64::consts::PI;

/// Grid extends this many bandwidths past the data on each side.
const CUT: f64 = 3.0;

#[derive(Debug, Clone, PartialEq)]
pub struct DensityCurve {
    /// `(x, density)` pairs on an evenly spaced grid.
    pub points: Vec<(f64, f64)>,
    pub bandwidth: f64,
    pub peak: f64,
}

impl DensityCurve {
    /// Scott's rule bandwidth (`σ · n^(-1/5)`) over the finite values.
    ///
    /// Returns `None` with fewer than two finite values, zero spread, or
    /// fewer than two samples.
    pub fn estimate(population: &[f64], samples: usize) -> Option<Self> {
        let values: Vec<f64> = population.iter().copied().filter(|v| v.is_finite()).collect();
        let n = values.len();
        if n < 2 || samples < 2 {
            return None;
        }

        let mean = values.iter().sum::<f64>() / n as f64;
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
        let std_dev = variance.sqrt();
        if std_dev <= 0.0 {
            return None;
        }
        let bandwidth = std_dev * (n as f64).powf(-0.2);

        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let lo = min - CUT * bandwidth;
        let hi = max + CUT * bandwidth;
        let step = (hi - lo) / (samples - 1) as f64;

        let norm = 1.0 / (n as f64 * bandwidth * (2.0 * PI).sqrt());
        let points: Vec<(f64, f64)> = (0..samples)
            .map(|i| {
                let x = lo + step * i as f64;
                let density = values
                    .iter()
                    .map(|v| {
                        let z = (x - v) / bandwidth;
                        (-0.5 * z * z).exp()
                    })
                    .sum::<f64>()
                    * norm;
                (x, density)
            })
            .collect();

        let peak = points.iter().map(|p| p.1).fold(0.0, f64::max);
        Some(Self {
            points,
            bandwidth,
            peak,
        })
    }

    pub fn x_range(&self) -> (f64, f64) {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => (first.0, last.0),
            _ => (0.0, 0.0),
        }
    }
}
