//! Data ingestion and source filtering

pub mod filter;
pub mod ingest;
pub mod schema;

pub use filter::disclosure_plan;
pub use ingest::{IngestError, TableIngestor};
pub use schema::EmissionsSchema;
