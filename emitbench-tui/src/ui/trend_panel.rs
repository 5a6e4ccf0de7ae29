//! Panel 3: Trend. History against the industry mean, yearly change bars and
//! the trend summary.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use emitbench_core::analysis::{TrendDirection, TrendReport};

use crate::app::AppState;
use crate::panels::{ChangeBars, TrendChart};
use crate::theme;
use crate::ui::{render_analysis_error, render_hint};

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let Some(view) = &app.view else {
        render_hint(f, area, &["Load a file to begin.", "Press o to open an Excel, CSV or Parquet file."]);
        return;
    };

    match &view.trend {
        None => render_hint(
            f,
            area,
            &["Historical trend is off.", "Press t on the Data panel to analyze trends."],
        ),
        Some(Err(err)) => render_analysis_error(f, area, err),
        Some(Ok(report)) => {
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
                .split(area);
            let bottom = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
                .split(rows[1]);

            f.render_widget(TrendChart::new(report, &app.theme), rows[0]);
            f.render_widget(ChangeBars::new(&report.changes, &app.theme), bottom[0]);
            render_summary(f, bottom[1], report);
        }
    }
}

fn pct_span(v: Option<f64>) -> Span<'static> {
    match v {
        Some(p) => Span::styled(format!("{p:.1}%"), theme::change_style(p)),
        None => Span::styled("n/a", theme::muted()),
    }
}

fn render_summary(f: &mut Frame, area: Rect, report: &TrendReport) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::muted())
        .title(Span::styled(" Trend Analysis ", theme::accent_bold()));

    let direction = match report.direction {
        Some(d @ TrendDirection::Decreasing) => Span::styled(d.label(), theme::positive()),
        Some(d @ TrendDirection::Increasing) => Span::styled(d.label(), theme::negative()),
        None => Span::styled("Undetermined", theme::muted()),
    };

    let lines = vec![
        Line::from(vec![Span::styled(" Average Annual Change: ", theme::muted()), pct_span(report.average_change)]),
        Line::from(vec![Span::styled(" Latest Annual Change:  ", theme::muted()), pct_span(report.latest_change)]),
        Line::from(vec![Span::styled(" Overall Trend:         ", theme::muted()), direction]),
        Line::from(""),
        Line::from(Span::styled(
            format!(" {} reported years", report.history.iter().filter(|p| p.value.is_some()).count()),
            theme::muted(),
        )),
    ];
    f.render_widget(Paragraph::new(lines).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{buffer_text, loaded_app};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render_text(app: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| {
            let area = f.area();
            render(f, area, app)
        }).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn trend_off_by_default() {
        let (_dir, app) = loaded_app();
        assert!(render_text(&app).contains("Historical trend is off"));
    }

    #[test]
    fn shows_summary_and_bars() {
        let (_dir, mut app) = loaded_app();
        app.toggle_trend();
        let text = render_text(&app);
        assert!(text.contains("Overall Trend:"));
        assert!(text.contains("Decreasing"));
        assert!(text.contains("-5.0%"));
        assert!(text.contains("Year-over-Year Change"));
    }

    #[test]
    fn sparse_company_warns() {
        let (_dir, mut app) = loaded_app();
        app.company_idx = app.companies.iter().position(|c| c == "台塑化").unwrap();
        app.toggle_trend();
        let text = render_text(&app);
        assert!(text.contains("Warning:"));
        assert!(text.contains("Not enough historical data"));
    }
}
