//! In-memory emissions table, read-only after load.
//!
//! Every query scopes itself to the target item (the "direct + indirect
//! emissions" row) except `companies()` and `years()`, which list everything
//! the source filter kept so the selectors match the loaded file.

use std::collections::{BTreeMap, BTreeSet};

use super::record::{DisclosureRecord, YearValue};

#[derive(Debug, Clone, Default)]
pub struct EmissionsTable {
    records: Vec<DisclosureRecord>,
    target_item: String,
}

impl EmissionsTable {
    pub fn new(records: Vec<DisclosureRecord>, target_item: impl Into<String>) -> Self {
        Self {
            records,
            target_item: target_item.into(),
        }
    }

    pub fn records(&self) -> &[DisclosureRecord] {
        &self.records
    }

    pub fn target_item(&self) -> &str {
        &self.target_item
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sorted unique company names.
    pub fn companies(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|r| r.company.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Sorted unique years.
    pub fn years(&self) -> Vec<i32> {
        self.records
            .iter()
            .map(|r| r.year)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// The preferred company if it is present, otherwise the first one.
    pub fn default_company(&self, preferred: Option<&str>) -> Option<String> {
        let companies = self.companies();
        if let Some(name) = preferred {
            if companies.iter().any(|c| c == name) {
                return Some(name.to_string());
            }
        }
        companies.into_iter().next()
    }

    fn target_rows(&self) -> impl Iterator<Item = &DisclosureRecord> {
        self.records.iter().filter(move |r| r.item == self.target_item)
    }

    /// Target-item values for every company in `year`. Missing values are NaN.
    pub fn year_population(&self, year: i32) -> Vec<f64> {
        self.target_rows()
            .filter(|r| r.year == year)
            .map(|r| r.value.unwrap_or(f64::NAN))
            .collect()
    }

    /// Value of the first target-item row for `company` in `year`.
    ///
    /// The outer `Option` is the row, the inner one its value.
    pub fn company_value(&self, company: &str, year: i32) -> Option<Option<f64>> {
        self.target_rows()
            .find(|r| r.company == company && r.year == year)
            .map(|r| r.value)
    }

    /// Target-item rows for `company`, stably sorted by year.
    pub fn company_history(&self, company: &str) -> Vec<YearValue> {
        let mut history: Vec<YearValue> = self
            .target_rows()
            .filter(|r| r.company == company)
            .map(|r| YearValue {
                year: r.year,
                value: r.value,
            })
            .collect();
        history.sort_by_key(|p| p.year);
        history
    }

    /// Mean of the non-missing target-item values per year.
    pub fn industry_mean_by_year(&self) -> Vec<YearValue> {
        let mut sums: BTreeMap<i32, (f64, usize)> = BTreeMap::new();
        for r in self.target_rows() {
            let entry = sums.entry(r.year).or_insert((0.0, 0));
            if let Some(v) = r.value.filter(|v| !v.is_nan()) {
                entry.0 += v;
                entry.1 += 1;
            }
        }
        sums.into_iter()
            .map(|(year, (sum, count))| YearValue {
                year,
                value: (count > 0).then(|| sum / count as f64),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ITEM: &str = "direct+indirect";

    fn table() -> EmissionsTable {
        EmissionsTable::new(
            vec![
                DisclosureRecord::new("B", 2021, ITEM, Some(200.0)),
                DisclosureRecord::new("A", 2022, ITEM, Some(120.0)),
                DisclosureRecord::new("A", 2020, ITEM, Some(100.0)),
                DisclosureRecord::new("A", 2021, ITEM, Some(80.0)),
                DisclosureRecord::new("A", 2021, "direct", Some(50.0)),
                DisclosureRecord::new("C", 2021, ITEM, None),
                DisclosureRecord::new("D", 2019, "direct", Some(1.0)),
            ],
            ITEM,
        )
    }

    #[test]
    fn companies_and_years_are_sorted_unique() {
        let t = table();
        assert_eq!(t.companies(), vec!["A", "B", "C", "D"]);
        assert_eq!(t.years(), vec![2019, 2020, 2021, 2022]);
    }

    #[test]
    fn default_company_prefers_configured_name() {
        let t = table();
        assert_eq!(t.default_company(Some("B")).as_deref(), Some("B"));
        assert_eq!(t.default_company(Some("Z")).as_deref(), Some("A"));
        assert_eq!(t.default_company(None).as_deref(), Some("A"));
        assert!(EmissionsTable::default().default_company(None).is_none());
    }

    #[test]
    fn year_population_only_counts_target_item() {
        let pop = table().year_population(2021);
        assert_eq!(pop.len(), 3);
        assert_eq!(pop[0], 200.0);
        assert_eq!(pop[1], 80.0);
        assert!(pop[2].is_nan());
    }

    #[test]
    fn company_value_distinguishes_missing_row_from_missing_value() {
        let t = table();
        assert_eq!(t.company_value("A", 2021), Some(Some(80.0)));
        assert_eq!(t.company_value("C", 2021), Some(None));
        assert_eq!(t.company_value("D", 2019), None);
    }

    #[test]
    fn history_is_sorted_by_year() {
        let years: Vec<i32> = table().company_history("A").iter().map(|p| p.year).collect();
        assert_eq!(years, vec![2020, 2021, 2022]);
    }

    #[test]
    fn industry_mean_skips_missing_values() {
        let means = table().industry_mean_by_year();
        assert_eq!(means.len(), 3);
        assert_eq!(means[0], YearValue { year: 2020, value: Some(100.0) });
        assert_eq!(means[1], YearValue { year: 2021, value: Some(140.0) });
        assert_eq!(means[2], YearValue { year: 2022, value: Some(120.0) });
    }
}
