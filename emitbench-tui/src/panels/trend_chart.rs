//! Trend chart: the company's yearly emissions against the industry mean.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    symbols,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, LegendPosition, Widget},
};

use emitbench_core::analysis::TrendReport;
use emitbench_core::domain::YearValue;

use super::format_value;
use crate::theme::Theme;

pub struct TrendChart<'a> {
    report: &'a TrendReport,
    theme: &'a Theme,
}

impl<'a> TrendChart<'a> {
    pub fn new(report: &'a TrendReport, theme: &'a Theme) -> Self {
        Self { report, theme }
    }
}

fn points(series: &[YearValue]) -> Vec<(f64, f64)> {
    series
        .iter()
        .filter_map(|p| p.value.map(|v| (p.year as f64, v)))
        .collect()
}

/// Year tick labels: every year when they fit, otherwise first / middle / last.
fn year_labels(first: i32, last: i32) -> Vec<Span<'static>> {
    if last - first <= 8 {
        (first..=last).map(|y| Span::raw(y.to_string())).collect()
    } else {
        vec![
            Span::raw(first.to_string()),
            Span::raw(((first + last) / 2).to_string()),
            Span::raw(last.to_string()),
        ]
    }
}

impl<'a> Widget for TrendChart<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let company = points(&self.report.history);
        let industry = points(&self.report.industry_mean);

        let block = Block::default()
            .title(format!(" {} Emissions Trend ", self.report.company))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.accent))
            .style(Style::default().bg(self.theme.background));

        if company.is_empty() {
            let inner = block.inner(area);
            block.render(area, buf);
            if inner.height > 0 {
                buf.set_string(
                    inner.x,
                    inner.y,
                    "No reported values to plot",
                    Style::default().fg(self.theme.muted),
                );
            }
            return;
        }

        let all = company.iter().chain(industry.iter());
        let (mut x_min, mut x_max) = (f64::INFINITY, f64::NEG_INFINITY);
        let (mut y_min, mut y_max) = (f64::INFINITY, f64::NEG_INFINITY);
        for &(x, y) in all {
            x_min = x_min.min(x);
            x_max = x_max.max(x);
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }
        if x_max - x_min < 1.0 {
            x_min -= 0.5;
            x_max += 0.5;
        }
        let y_range = y_max - y_min;
        let y_pad = if y_range > 0.0 { y_range * 0.05 } else { y_max.abs().max(1.0) * 0.1 };
        let y_lower = (y_min - y_pad).max(0.0);
        let y_upper = y_max + y_pad;

        let datasets = vec![
            Dataset::default()
                .name(self.report.company.as_str())
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(self.theme.accent))
                .data(&company),
            Dataset::default()
                .name("Industry Average")
                .marker(symbols::Marker::Dot)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(self.theme.neutral))
                .data(&industry),
        ];

        let y_labels = vec![
            Span::raw(format_value(y_lower)),
            Span::raw(format_value((y_lower + y_upper) / 2.0)),
            Span::raw(format_value(y_upper)),
        ];

        let chart = Chart::new(datasets)
            .block(block)
            .legend_position(Some(LegendPosition::TopRight))
            .x_axis(
                Axis::default()
                    .title(Span::styled("Year", Style::default().fg(self.theme.text_secondary)))
                    .style(Style::default().fg(self.theme.muted))
                    .bounds([x_min, x_max])
                    .labels(year_labels(x_min.ceil() as i32, x_max.floor() as i32)),
            )
            .y_axis(
                Axis::default()
                    .title(Span::styled(
                        "Emissions",
                        Style::default().fg(self.theme.text_secondary),
                    ))
                    .style(Style::default().fg(self.theme.muted))
                    .bounds([y_lower, y_upper])
                    .labels(y_labels),
            );

        chart.render(area, buf);
    }
}
