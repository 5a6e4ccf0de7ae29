use polars::prelude::*;

use crate::config::ColumnNames;
use crate::data::ingest::IngestError;

/// Required columns of a disclosure table.
pub struct EmissionsSchema;

impl EmissionsSchema {
    /// Check that every configured column exists. Types are coerced later.
    pub fn validate(df: &DataFrame, columns: &ColumnNames) -> Result<(), IngestError> {
        let actual = df.schema();
        for name in columns.all() {
            if !actual.contains(name) {
                return Err(IngestError::MissingColumn(name.to_string()));
            }
        }
        Ok(())
    }
}
