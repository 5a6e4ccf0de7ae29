//! Dashboard configuration: column names, row filters, default company.
//!
//! Stored as TOML. Every field defaults to the layout of the Taiwan
//! petrochemical ESG benchmark workbook, so a partial file only overrides
//! what it names.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read config {path}: {reason}")]
    Read { path: PathBuf, reason: String },

    #[error("parse config TOML: {0}")]
    Parse(String),
}

/// Source column names in the uploaded table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnNames {
    /// Subcategory label, filtered to greenhouse-gas rows.
    pub subcategory: String,
    /// Non-empty when the row was taken from a company self-report.
    pub company_report: String,
    pub company: String,
    pub year: String,
    pub item: String,
    pub value: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            subcategory: "子分類".into(),
            company_report: "來自公司報告".into(),
            company: "中文名稱".into(),
            year: "年份".into(),
            item: "項目".into(),
            value: "數值".into(),
        }
    }
}

impl ColumnNames {
    /// All configured columns, in declaration order.
    pub fn all(&self) -> [&str; 6] {
        [
            self.subcategory.as_str(),
            self.company_report.as_str(),
            self.company.as_str(),
            self.year.as_str(),
            self.item.as_str(),
            self.value.as_str(),
        ]
    }
}

/// Labels the rows are filtered on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RowFilters {
    pub subcategory: String,
    /// Item compared across companies ("direct + indirect emissions").
    pub item: String,
}

impl Default for RowFilters {
    fn default() -> Self {
        Self {
            subcategory: "溫室氣體排放".into(),
            item: "直接＋間接排放".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub columns: ColumnNames,
    pub filters: RowFilters,
    /// Company selected after load when present in the table.
    pub default_company: Option<String>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            columns: ColumnNames::default(),
            filters: RowFilters::default(),
            default_company: Some("台塑".into()),
        }
    }
}

impl DashboardConfig {
    /// Parse a config from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load a config from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::from_toml(&content)
    }

    /// Explicit path must load. Without one, the user config file is used if
    /// it exists, else defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            tracing::debug!(path = %path.display(), "loading config");
            return Self::from_file(path);
        }
        match Self::default_path() {
            Some(path) if path.is_file() => {
                tracing::debug!(path = %path.display(), "loading user config");
                Self::from_file(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    /// `<config_dir>/emitbench/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("emitbench").join("config.toml"))
    }
}
