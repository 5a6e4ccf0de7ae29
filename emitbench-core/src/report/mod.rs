//! Text reports

pub mod markdown;

pub use markdown::MarkdownReport;
