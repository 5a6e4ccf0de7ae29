//! Panel 2: Benchmark. Density chart plus the distribution position text.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use emitbench_core::analysis::BenchmarkReport;

use crate::app::AppState;
use crate::panels::{format_value, DensityChart};
use crate::theme;
use crate::ui::{render_analysis_error, render_hint};

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let Some(view) = &app.view else {
        render_hint(f, area, &["Load a file to begin.", "Press o to open an Excel, CSV or Parquet file."]);
        return;
    };

    match &view.benchmark {
        None => render_hint(
            f,
            area,
            &["Current-year analysis is hidden.", "Press c on the Data panel to show it alongside the trend."],
        ),
        Some(Err(err)) => render_analysis_error(f, area, err),
        Some(Ok(report)) => {
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(8), Constraint::Length(7)])
                .split(area);
            f.render_widget(DensityChart::new(report, &app.theme), rows[0]);
            f.render_widget(Paragraph::new(result_lines(report, &app.theme)), rows[1]);
        }
    }
}

fn result_lines(report: &BenchmarkReport, t: &theme::Theme) -> Vec<Line<'static>> {
    let p = &report.percentiles;
    let rank = Style::default().fg(t.rank_color(p.higher_pct));
    let c = &report.company;
    vec![
        Line::from(Span::styled(
            format!(" Year {} {} Emissions Distribution Position:", report.year, c),
            theme::accent_bold(),
        )),
        Line::from(Span::styled(
            format!("  - {:.1}% of companies have lower emissions than {c}", p.lower_pct),
            theme::muted(),
        )),
        Line::from(Span::styled(
            format!("  - {:.1}% of companies have similar emissions to {c}", p.equal_pct),
            theme::muted(),
        )),
        Line::from(Span::styled(
            format!("  - {:.1}% of companies have higher emissions than {c}", p.higher_pct),
            rank,
        )),
        Line::from(vec![
            Span::styled(format!(" {c} Emissions: "), theme::muted()),
            Span::styled(format_value(report.value), theme::warning()),
        ]),
    ]
}
