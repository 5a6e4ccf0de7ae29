//! Density chart: filled KDE of the year's population with the subject
//! marked and annotated.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    symbols,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, LegendPosition, Widget},
};

use emitbench_core::analysis::{BenchmarkReport, DensityCurve};

use super::format_value;
use crate::theme::Theme;

/// Grid resolution for the density estimate.
const SAMPLES: usize = 200;

pub struct DensityChart<'a> {
    report: &'a BenchmarkReport,
    theme: &'a Theme,
}

impl<'a> DensityChart<'a> {
    pub fn new(report: &'a BenchmarkReport, theme: &'a Theme) -> Self {
        Self { report, theme }
    }

    fn annotation(&self) -> [String; 3] {
        let p = &self.report.percentiles;
        [
            format!("{}: {}", self.report.company, format_value(self.report.value)),
            format!("Lower: {:.1}%", p.lower_pct),
            format!("Higher: {:.1}%", p.higher_pct),
        ]
    }

    fn render_annotation(&self, inner: Rect, buf: &mut Buffer) {
        let lines = self.annotation();
        let width = lines.iter().map(|l| Span::raw(l.as_str()).width()).max().unwrap_or(0) as u16 + 2;
        if inner.width < width || inner.height < lines.len() as u16 {
            return;
        }
        let x = inner.right() - width;
        let style = Style::default()
            .fg(self.theme.warning)
            .bg(self.theme.background)
            .add_modifier(Modifier::BOLD);
        for (i, line) in lines.iter().enumerate() {
            buf.set_stringn(x + 1, inner.y + i as u16, line, width as usize - 1, style);
        }
    }
}

impl<'a> Widget for DensityChart<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!(
            " {} Emissions Distribution ({}) ",
            self.report.year, self.report.company
        );
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.accent))
            .style(Style::default().bg(self.theme.background));
        let inner = block.inner(area);

        let Some(curve) = DensityCurve::estimate(&self.report.population, SAMPLES) else {
            block.render(area, buf);
            if inner.height > 0 {
                buf.set_string(
                    inner.x,
                    inner.y,
                    "Not enough spread in this year's values for a density curve",
                    Style::default().fg(self.theme.muted),
                );
            }
            let below = Rect {
                y: inner.y.saturating_add(1),
                height: inner.height.saturating_sub(1),
                ..inner
            };
            self.render_annotation(below, buf);
            return;
        };

        let (x_lo, x_hi) = curve.x_range();
        let x_min = x_lo.min(self.report.value);
        let x_max = x_hi.max(self.report.value);
        let y_max = curve.peak * 1.1;

        let marker = [(self.report.value, 0.0), (self.report.value, curve.peak * 1.05)];

        let datasets = vec![
            Dataset::default()
                .name("Density")
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Bar)
                .style(Style::default().fg(self.theme.neutral))
                .data(&curve.points),
            Dataset::default()
                .name(self.report.company.as_str())
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(self.theme.warning))
                .data(&marker),
        ];

        let x_labels = vec![
            Span::raw(format_value(x_min)),
            Span::raw(format_value((x_min + x_max) / 2.0)),
            Span::raw(format_value(x_max)),
        ];
        let y_labels = vec![Span::raw("0"), Span::raw(format!("{:.1e}", y_max))];

        let chart = Chart::new(datasets)
            .block(block)
            .legend_position(Some(LegendPosition::TopLeft))
            .x_axis(
                Axis::default()
                    .title(Span::styled(
                        "Emissions",
                        Style::default().fg(self.theme.text_secondary),
                    ))
                    .style(Style::default().fg(self.theme.muted))
                    .bounds([x_min, x_max])
                    .labels(x_labels),
            )
            .y_axis(
                Axis::default()
                    .title(Span::styled(
                        "Density",
                        Style::default().fg(self.theme.text_secondary),
                    ))
                    .style(Style::default().fg(self.theme.muted))
                    .bounds([0.0, y_max])
                    .labels(y_labels),
            );

        chart.render(area, buf);

        // Chart has no text annotations; write them after the plot.
        self.render_annotation(inner, buf);
    }
}
