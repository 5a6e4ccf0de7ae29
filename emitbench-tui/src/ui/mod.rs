//! Top-level UI layout: four-panel frame with status bar.

pub mod benchmark_panel;
pub mod data_panel;
pub mod help_panel;
pub mod overlays;
pub mod status_bar;
pub mod trend_panel;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use emitbench_core::AnalysisError;

use crate::app::{AppState, Overlay, Panel};
use crate::theme;

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    // Split: main area + 1-line status bar.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(f.area());

    let main_area = chunks[0];
    let status_area = chunks[1];

    draw_panel(f, main_area, app);
    status_bar::render(f, status_area, app);

    match &app.overlay {
        Overlay::Welcome => overlays::render_welcome(f, main_area),
        Overlay::ErrorHistory => overlays::render_error_history(f, main_area, app),
        Overlay::OpenFile => overlays::render_open_file(f, main_area, &app.path_input),
        Overlay::None => {}
    }
}

/// Draw a single panel with its border.
fn draw_panel(f: &mut Frame, area: Rect, app: &AppState) {
    let panel = app.active_panel;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(true))
        .title(format!(" {} [{}] ", panel.label(), panel.index() + 1))
        .title_style(theme::panel_title(true));

    let inner = block.inner(area);
    f.render_widget(block, area);

    match panel {
        Panel::Data => data_panel::render(f, inner, app),
        Panel::Benchmark => benchmark_panel::render(f, inner, app),
        Panel::Trend => trend_panel::render(f, inner, app),
        Panel::Help => help_panel::render(f, inner, app),
    }
}

/// Placeholder text for a panel with nothing to chart.
pub(crate) fn render_hint(f: &mut Frame, area: Rect, lines: &[&str]) {
    let mut text = vec![Line::from(""), Line::from("")];
    text.extend(lines.iter().map(|l| Line::from(Span::styled(l.to_string(), theme::muted()))));
    f.render_widget(Paragraph::new(text).wrap(Wrap { trim: true }), area);
}

/// An analysis error in place of a chart. Warnings are orange, errors pink.
pub(crate) fn render_analysis_error(f: &mut Frame, area: Rect, err: &AnalysisError) {
    let (tag, style) = if err.is_warning() {
        ("Warning", theme::warning())
    } else {
        ("Error", theme::negative())
    };
    let text = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(format!("{tag}: "), style.add_modifier(ratatui::style::Modifier::BOLD)),
            Span::styled(err.to_string(), style),
        ]),
    ];
    f.render_widget(Paragraph::new(text).wrap(Wrap { trim: true }), area);
}

/// Compute a centered rect for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{buffer_text, loaded_app};
    use emitbench_core::DashboardConfig;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn draw_to_text(app: &AppState, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn welcome_overlay_before_load() {
        let app = AppState::new(DashboardConfig::default());
        let text = draw_to_text(&app, 100, 30);
        assert!(text.contains("Welcome to EmitBench"));
        assert!(text.contains("Data [1]"));
    }

    #[test]
    fn every_panel_draws_with_data() {
        let (_dir, mut app) = loaded_app();
        app.toggle_trend();
        for i in 0..Panel::COUNT {
            app.active_panel = Panel::from_index(i).unwrap();
            let text = draw_to_text(&app, 120, 40);
            assert!(text.contains(&format!("{} [{}]", app.active_panel.label(), i + 1)));
        }
    }

    #[test]
    fn centered_rect_is_inside() {
        let area = Rect::new(0, 0, 100, 50);
        let r = centered_rect(60, 40, area);
        assert!(r.x >= area.x && r.right() <= area.right());
        assert!(r.y >= area.y && r.bottom() <= area.bottom());
        assert_eq!(r.width, 60);
    }
}
