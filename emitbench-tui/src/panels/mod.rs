//! Chart widgets for the dashboard panels
//!
//! - DensityChart: filled KDE of the year's population with the subject marker
//! - TrendChart: company history against the industry yearly mean
//! - ChangeBars: signed year-over-year change bars

pub mod change_bars;
pub mod density_chart;
pub mod trend_chart;

pub use change_bars::ChangeBars;
pub use density_chart::DensityChart;
pub use trend_chart::TrendChart;

/// Emission values with thousands separators, rounded to whole units.
pub fn format_value(v: f64) -> String {
    if !v.is_finite() {
        return "n/a".to_string();
    }
    let rounded = v.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if rounded < 0.0 {
        out.insert(0, '-');
    }
    out
}
