//! One synchronous render pass over the loaded table.
//!
//! The table, selection and toggles come in as parameters; the pass keeps
//! no state between calls.

use serde::{Deserialize, Serialize};

use super::benchmark::{benchmark, BenchmarkReport};
use super::error::AnalysisError;
use super::trend::{trend, TrendReport};
use crate::domain::{EmissionsTable, Selection};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewToggles {
    pub show_trend: bool,
    /// Only consulted while the trend view is on.
    pub also_show_current: bool,
}

impl Default for ViewToggles {
    fn default() -> Self {
        Self {
            show_trend: false,
            also_show_current: true,
        }
    }
}

impl ViewToggles {
    pub fn show_current(&self) -> bool {
        !self.show_trend || self.also_show_current
    }
}

/// `None` means the view is toggled off for this pass.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub selection: Selection,
    pub toggles: ViewToggles,
    pub benchmark: Option<Result<BenchmarkReport, AnalysisError>>,
    pub trend: Option<Result<TrendReport, AnalysisError>>,
}

impl DashboardView {
    /// Errors from every enabled view, in display order.
    pub fn errors(&self) -> Vec<&AnalysisError> {
        [
            self.trend.as_ref().and_then(|r| r.as_ref().err()),
            self.benchmark.as_ref().and_then(|r| r.as_ref().err()),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

pub fn render_pass(table: &EmissionsTable, selection: &Selection, toggles: ViewToggles) -> DashboardView {
    let view = DashboardView {
        selection: selection.clone(),
        toggles,
        benchmark: toggles.show_current().then(|| benchmark(table, selection)),
        trend: toggles.show_trend.then(|| trend(table, &selection.company)),
    };

    for err in view.errors() {
        if err.is_warning() {
            tracing::warn!(%err, "render pass");
        } else {
            tracing::info!(%err, "render pass");
        }
    }
    view
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DisclosureRecord;

    fn table() -> EmissionsTable {
        EmissionsTable::new(
            vec![
                DisclosureRecord::new("A", 2020, "t", Some(100.0)),
                DisclosureRecord::new("A", 2021, "t", Some(80.0)),
                DisclosureRecord::new("B", 2021, "t", Some(50.0)),
            ],
            "t",
        )
    }

    #[test]
    fn current_view_rule() {
        let mut t = ViewToggles::default();
        assert!(t.show_current());
        t.show_trend = true;
        assert!(t.show_current());
        t.also_show_current = false;
        assert!(!t.show_current());
        t.show_trend = false;
        assert!(t.show_current());
    }

    #[test]
    fn default_pass_has_only_benchmark() {
        let view = render_pass(&table(), &Selection::new("A", 2021), ViewToggles::default());
        assert!(view.trend.is_none());
        let report = view.benchmark.unwrap().unwrap();
        assert_eq!(report.percentiles.lower_pct, 50.0);
        assert_eq!(report.percentiles.equal_pct, 50.0);
    }

    #[test]
    fn trend_only_pass() {
        let toggles = ViewToggles {
            show_trend: true,
            also_show_current: false,
        };
        let view = render_pass(&table(), &Selection::new("A", 2021), toggles);
        assert!(view.benchmark.is_none());
        assert!(view.trend.unwrap().is_ok());
    }

    #[test]
    fn errors_are_collected_per_view() {
        let toggles = ViewToggles {
            show_trend: true,
            also_show_current: true,
        };
        let view = render_pass(&table(), &Selection::new("B", 2020), toggles);
        let errors = view.errors();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].is_warning());
        assert!(matches!(errors[1], AnalysisError::MissingSelection { .. }));
    }

    #[test]
    fn errors_skip_successful_views() {
        let toggles = ViewToggles {
            show_trend: true,
            also_show_current: true,
        };
        let view = render_pass(&table(), &Selection::new("A", 2021), toggles);
        assert!(view.errors().is_empty());

        let view = render_pass(&table(), &Selection::new("B", 2021), toggles);
        let errors = view.errors();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].is_warning());
    }

    #[test]
    fn pass_is_repeatable() {
        let sel = Selection::new("A", 2021);
        let a = render_pass(&table(), &sel, ViewToggles::default());
        let b = render_pass(&table(), &sel, ViewToggles::default());
        assert_eq!(a, b);
    }
}
