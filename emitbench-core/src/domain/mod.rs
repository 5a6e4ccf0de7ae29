//! Domain types for EmitBench

pub mod record;
pub mod table;

pub use record::{DisclosureRecord, Selection, YearValue};
pub use table::EmissionsTable;
