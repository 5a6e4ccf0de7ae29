use thiserror::Error;

/// Recoverable failures of a single render pass.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    #[error("Unable to calculate percentiles - no comparable data")]
    NoData,

    #[error("No data found for {company} in year {year}")]
    MissingSelection { company: String, year: i32 },

    #[error("Not enough historical data to analyze trends for {company} ({points} point(s))")]
    InsufficientHistory { company: String, points: usize },
}

impl AnalysisError {
    /// Warnings skip a view; everything else is shown as an error.
    pub fn is_warning(&self) -> bool {
        matches!(self, AnalysisError::InsufficientHistory { .. })
    }
}
