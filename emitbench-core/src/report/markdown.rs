//! Markdown text for a render pass: the analysis results printed next to
//! the charts.

use crate::analysis::{AnalysisError, BenchmarkReport, DashboardView, TrendReport};

pub struct MarkdownReport;

impl MarkdownReport {
    pub fn render(view: &DashboardView) -> String {
        let mut out = String::new();

        if let Some(trend) = &view.trend {
            out.push_str("## Historical Emissions Trend Analysis\n\n");
            match trend {
                Ok(report) => Self::write_trend(&mut out, report),
                Err(err) => Self::write_error(&mut out, err),
            }
        }

        if let Some(benchmark) = &view.benchmark {
            if !out.is_empty() {
                out.push('\n');
            }
            match benchmark {
                Ok(report) => Self::write_benchmark(&mut out, report),
                Err(err) => Self::write_error(&mut out, err),
            }
        }

        out
    }

    fn write_benchmark(out: &mut String, r: &BenchmarkReport) {
        let p = &r.percentiles;
        out.push_str("### Analysis Results\n\n");
        out.push_str(&format!(
            "**Year {} {} Emissions Distribution Position:**\n\n",
            r.year, r.company
        ));
        out.push_str("Distribution Statistics:\n");
        out.push_str(&format!(
            "- {:.1}% of companies have lower emissions than {}\n",
            p.lower_pct, r.company
        ));
        out.push_str(&format!(
            "- {:.1}% of companies have similar emissions to {}\n",
            p.equal_pct, r.company
        ));
        out.push_str(&format!(
            "- {:.1}% of companies have higher emissions than {}\n",
            p.higher_pct, r.company
        ));
        out.push_str(&format!("\n{} Emissions: **{:.1}**\n", r.company, r.value));
    }

    fn write_trend(out: &mut String, r: &TrendReport) {
        out.push_str("### Annual Change Rate\n\n");
        out.push_str("| Year | Emissions | Change |\n");
        out.push_str("|------|-----------|--------|\n");
        let mut changes = r.changes.iter();
        for (i, point) in r.history.iter().enumerate() {
            let value = point.value.map_or("-".to_string(), |v| format!("{v:.1}"));
            let change = if i == 0 {
                "-".to_string()
            } else {
                changes
                    .next()
                    .and_then(|c| c.pct)
                    .map_or("-".to_string(), |pct| format!("{pct:+.1}%"))
            };
            out.push_str(&format!("| {} | {} | {} |\n", point.year, value, change));
        }

        out.push_str("\n### Trend Analysis\n\n");
        out.push_str(&format!(
            "- **Average Annual Change Rate**: {}\n",
            fmt_pct(r.average_change)
        ));
        out.push_str(&format!(
            "- **Latest Annual Change Rate**: {}\n",
            fmt_pct(r.latest_change)
        ));
        let direction = r.direction.map_or("Undetermined", |d| d.label());
        out.push_str(&format!("- **Overall Trend**: {direction}\n"));
    }

    fn write_error(out: &mut String, err: &AnalysisError) {
        let tag = if err.is_warning() { "Warning" } else { "Error" };
        out.push_str(&format!("> **{tag}:** {err}\n"));
    }
}

fn fmt_pct(v: Option<f64>) -> String {
    v.map_or("n/a".to_string(), |v| format!("{v:.1}%"))
}
