//! Percentile benchmark, trend and density analysis.

pub mod benchmark;
pub mod density;
pub mod error;
pub mod percentile;
pub mod render;
pub mod trend;

pub use benchmark::{benchmark, BenchmarkReport};
pub use density::DensityCurve;
pub use error::AnalysisError;
pub use percentile::{PercentileCalculator, PercentileResult};
pub use render::{render_pass, DashboardView, ViewToggles};
pub use trend::{trend, year_over_year, TrendDirection, TrendReport, YearChange};
