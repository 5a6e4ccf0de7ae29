//! EmitBench Core: ingestion, filtering and analysis for the emissions benchmark.
//!
//! This crate contains everything the dashboard and CLI compute:
//! - Configuration (column names, filter labels, default company)
//! - Excel / CSV / Parquet ingestion and the greenhouse-gas source filter
//! - The read-only emissions table and its per-selection queries
//! - Percentile position of a company among its peers
//! - Multi-year trend and year-over-year change rates
//! - Kernel density estimate for the distribution chart
//! - The render pass and its markdown text report

pub mod analysis;
pub mod config;
pub mod data;
pub mod domain;
pub mod report;

pub use analysis::{render_pass, AnalysisError, DashboardView, PercentileCalculator, PercentileResult, ViewToggles};
pub use config::DashboardConfig;
pub use data::IngestError;
pub use domain::{DisclosureRecord, EmissionsTable, Selection};
pub use report::MarkdownReport;
