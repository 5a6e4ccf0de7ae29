//! Source filter: keep greenhouse-gas rows not taken from company reports,
//! coerce types and materialize them as `DisclosureRecord`s.

use std::path::Path;

use polars::prelude::*;

use crate::config::DashboardConfig;
use crate::data::ingest::{IngestError, TableIngestor};
use crate::data::schema::EmissionsSchema;
use crate::domain::{DisclosureRecord, EmissionsTable};

const COMPANY: &str = "company";
const YEAR: &str = "year";
const ITEM: &str = "item";
const VALUE: &str = "value";

fn polars_err(e: PolarsError) -> IngestError {
    IngestError::Polars(e.to_string())
}

fn series<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Series, IngestError> {
    Ok(df.column(name).map_err(polars_err)?.as_materialized_series())
}

/// Lazy plan: source filter, then the four canonical columns.
pub fn disclosure_plan(df: DataFrame, config: &DashboardConfig) -> LazyFrame {
    let cols = &config.columns;
    let source = col(cols.subcategory.as_str())
        .eq(lit(config.filters.subcategory.as_str()))
        .and(col(cols.company_report.as_str()).is_null());

    df.lazy()
        .filter(source)
        .select([
            col(cols.company.as_str()).cast(DataType::String).alias(COMPANY),
            col(cols.year.as_str()).cast(DataType::Int32).alias(YEAR),
            col(cols.item.as_str()).cast(DataType::String).alias(ITEM),
            col(cols.value.as_str()).cast(DataType::Float64).alias(VALUE),
        ])
        .filter(col(COMPANY).is_not_null().and(col(YEAR).is_not_null()))
}

impl EmissionsTable {
    /// Validate, filter and materialize an ingested frame.
    pub fn from_frame(df: DataFrame, config: &DashboardConfig) -> Result<Self, IngestError> {
        EmissionsSchema::validate(&df, &config.columns)?;
        let input_rows = df.height();

        let out = disclosure_plan(df, config).collect().map_err(polars_err)?;

        let company = series(&out, COMPANY)?.str().map_err(polars_err)?;
        let year = series(&out, YEAR)?.i32().map_err(polars_err)?;
        let item = series(&out, ITEM)?.str().map_err(polars_err)?;
        let value = series(&out, VALUE)?.f64().map_err(polars_err)?;

        let records: Vec<DisclosureRecord> = company
            .into_iter()
            .zip(year)
            .zip(item)
            .zip(value)
            .filter_map(|(((company, year), item), value)| {
                Some(DisclosureRecord::new(company?, year?, item.unwrap_or_default(), value))
            })
            .collect();

        tracing::info!(input_rows, kept = records.len(), "applied source filter");
        Ok(EmissionsTable::new(records, config.filters.item.clone()))
    }

    /// Ingest a file and build the table from it.
    pub fn load(path: &Path, config: &DashboardConfig) -> Result<Self, IngestError> {
        let df = TableIngestor::new().ingest(path)?;
        Self::from_frame(df, config)
    }
}
