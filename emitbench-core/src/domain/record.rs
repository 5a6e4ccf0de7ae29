use serde::{Deserialize, Serialize};

/// One disclosure row that survived the source filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisclosureRecord {
    pub company: String,
    pub year: i32,
    pub item: String,
    /// `None` when the value cell was empty or not numeric.
    pub value: Option<f64>,
}

impl DisclosureRecord {
    pub fn new(company: impl Into<String>, year: i32, item: impl Into<String>, value: Option<f64>) -> Self {
        Self {
            company: company.into(),
            year,
            item: item.into(),
            value,
        }
    }
}

/// Company and year picked by the user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selection {
    pub company: String,
    pub year: i32,
}

impl Selection {
    pub fn new(company: impl Into<String>, year: i32) -> Self {
        Self {
            company: company.into(),
            year,
        }
    }
}

/// A value observed in a given year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YearValue {
    pub year: i32,
    pub value: Option<f64>,
}
