//! Multi-year trend for one company against the industry yearly mean.

use serde::Serialize;

use super::error::AnalysisError;
use crate::domain::{EmissionsTable, YearValue};

/// Year-over-year change relative to the previous history point, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YearChange {
    pub year: i32,
    /// `None` when either value is missing or the previous one is zero.
    pub pct: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TrendDirection {
    Decreasing,
    Increasing,
}

impl TrendDirection {
    pub fn from_average(avg: f64) -> Self {
        if avg < 0.0 {
            TrendDirection::Decreasing
        } else {
            TrendDirection::Increasing
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TrendDirection::Decreasing => "Decreasing",
            TrendDirection::Increasing => "Increasing",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendReport {
    pub company: String,
    pub history: Vec<YearValue>,
    pub industry_mean: Vec<YearValue>,
    /// One entry per history point after the first.
    pub changes: Vec<YearChange>,
    pub average_change: Option<f64>,
    pub latest_change: Option<f64>,
    pub direction: Option<TrendDirection>,
}

/// Percent change between consecutive points: `(cur - prev) / prev * 100`.
pub fn year_over_year(history: &[YearValue]) -> Vec<YearChange> {
    history
        .windows(2)
        .map(|w| {
            let pct = match (w[0].value, w[1].value) {
                (Some(prev), Some(cur)) if prev != 0.0 && !prev.is_nan() && !cur.is_nan() => {
                    Some((cur - prev) / prev * 100.0)
                }
                _ => None,
            };
            YearChange { year: w[1].year, pct }
        })
        .collect()
}

/// Build the trend view for `company`. Needs at least two history rows.
pub fn trend(table: &EmissionsTable, company: &str) -> Result<TrendReport, AnalysisError> {
    let history = table.company_history(company);
    if history.len() < 2 {
        return Err(AnalysisError::InsufficientHistory {
            company: company.to_string(),
            points: history.len(),
        });
    }

    let changes = year_over_year(&history);
    let defined: Vec<f64> = changes.iter().filter_map(|c| c.pct).collect();
    let average_change = (!defined.is_empty()).then(|| defined.iter().sum::<f64>() / defined.len() as f64);
    let latest_change = changes.last().and_then(|c| c.pct);

    Ok(TrendReport {
        company: company.to_string(),
        industry_mean: table.industry_mean_by_year(),
        history,
        changes,
        average_change,
        latest_change,
        direction: average_change.map(TrendDirection::from_average),
    })
}
