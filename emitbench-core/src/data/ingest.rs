use calamine::{open_workbook_auto, Data, Range, Reader};
use polars::prelude::*;
use std::path::Path;

/// Reads a disclosure table from an Excel workbook, CSV or Parquet.
pub struct TableIngestor;

impl TableIngestor {
    pub fn new() -> Self {
        Self
    }

    /// Ingest CSV file (header row, schema inferred from every row)
    pub fn ingest_csv(&self, path: &Path) -> Result<LazyFrame, IngestError> {
        LazyCsvReader::new(path)
            .with_has_header(true)
            .with_infer_schema_length(None)
            .finish()
            .map_err(|e| IngestError::Polars(e.to_string()))
    }

    /// Ingest Parquet file
    pub fn ingest_parquet(&self, path: &Path) -> Result<LazyFrame, IngestError> {
        LazyFrame::scan_parquet(path, Default::default())
            .map_err(|e| IngestError::Polars(e.to_string()))
    }

    /// Ingest the first sheet of an Excel workbook. Row one is the header.
    pub fn ingest_spreadsheet(&self, path: &Path) -> Result<DataFrame, IngestError> {
        let mut workbook =
            open_workbook_auto(path).map_err(|e| IngestError::Spreadsheet(e.to_string()))?;
        let sheet = workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| IngestError::Spreadsheet("workbook has no sheets".to_string()))?;
        let range = workbook
            .worksheet_range(&sheet)
            .map_err(|e| IngestError::Spreadsheet(e.to_string()))?;
        tracing::debug!(%sheet, rows = range.height(), "read worksheet");
        sheet_frame(&range)
    }

    /// Pick a reader by extension and collect the whole table.
    pub fn ingest(&self, path: &Path) -> Result<DataFrame, IngestError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        let df = match ext.as_str() {
            "csv" => collect(self.ingest_csv(path)?)?,
            "parquet" => collect(self.ingest_parquet(path)?)?,
            "xlsx" | "xls" => self.ingest_spreadsheet(path)?,
            _ => return Err(IngestError::UnsupportedFormat(path.display().to_string())),
        };
        tracing::debug!(path = %path.display(), rows = df.height(), "ingested table");
        Ok(df)
    }
}

fn collect(lazy: LazyFrame) -> Result<DataFrame, IngestError> {
    lazy.collect().map_err(|e| IngestError::Polars(e.to_string()))
}

fn cell_number(cell: Option<&Data>) -> Option<f64> {
    match cell? {
        Data::Int(i) => Some(*i as f64),
        Data::Float(f) => Some(*f),
        _ => None,
    }
}

fn cell_text(cell: Option<&Data>) -> Option<String> {
    match cell? {
        Data::Empty | Data::Error(_) => None,
        other => Some(other.to_string()),
    }
}

/// Columns holding only numbers and blanks become Float64, the rest String.
/// Blank cells are null either way.
fn sheet_frame(range: &Range<Data>) -> Result<DataFrame, IngestError> {
    let mut rows = range.rows();
    let Some(header) = rows.next() else {
        return Ok(DataFrame::empty());
    };
    let body: Vec<&[Data]> = rows.collect();

    let columns: Vec<Column> = header
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let name = match name {
                Data::Empty => format!("column_{i}"),
                other => other.to_string(),
            };
            let numeric = body.iter().any(|row| cell_number(row.get(i)).is_some())
                && body.iter().all(|row| {
                    matches!(row.get(i), None | Some(Data::Empty | Data::Int(_) | Data::Float(_)))
                });
            if numeric {
                let values: Vec<Option<f64>> = body.iter().map(|row| cell_number(row.get(i))).collect();
                Column::new(name.as_str().into(), values)
            } else {
                let values: Vec<Option<String>> = body.iter().map(|row| cell_text(row.get(i))).collect();
                Column::new(name.as_str().into(), values)
            }
        })
        .collect();

    DataFrame::new(columns).map_err(|e| IngestError::Polars(e.to_string()))
}

impl Default for TableIngestor {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("unsupported file format: {0} (expected .xlsx, .xls, .csv or .parquet)")]
    UnsupportedFormat(String),

    #[error("spreadsheet: {0}")]
    Spreadsheet(String),

    #[error("missing required column: {0}")]
    MissingColumn(String),

    #[error("{0}")]
    Polars(String),
}
