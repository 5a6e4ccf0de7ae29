//! Current-year benchmark: where the selected company sits among its peers.

use serde::Serialize;

use super::error::AnalysisError;
use super::percentile::{PercentileCalculator, PercentileResult};
use crate::domain::{EmissionsTable, Selection};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchmarkReport {
    pub company: String,
    pub year: i32,
    /// Selected company's emissions. NaN when its cell was empty.
    pub value: f64,
    pub percentiles: PercentileResult,
    /// Every peer value for the year, including the company's own.
    pub population: Vec<f64>,
}

/// Locate the selected company within its year's population.
pub fn benchmark(table: &EmissionsTable, selection: &Selection) -> Result<BenchmarkReport, AnalysisError> {
    let value = table
        .company_value(&selection.company, selection.year)
        .ok_or_else(|| AnalysisError::MissingSelection {
            company: selection.company.clone(),
            year: selection.year,
        })?
        .unwrap_or(f64::NAN);

    let population = table.year_population(selection.year);
    let percentiles = PercentileCalculator::compute(&population, value).ok_or(AnalysisError::NoData)?;

    tracing::debug!(
        company = %selection.company,
        year = selection.year,
        peers = population.len(),
        lower = percentiles.lower_pct,
        higher = percentiles.higher_pct,
        "benchmark computed"
    );

    Ok(BenchmarkReport {
        company: selection.company.clone(),
        year: selection.year,
        value,
        percentiles,
        population,
    })
}
