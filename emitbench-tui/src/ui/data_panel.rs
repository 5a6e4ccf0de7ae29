//! Panel 1: Data. Source file, company and year selectors, view toggles.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    render_companies(f, cols[0], app);
    render_controls(f, cols[1], app);
}

/// First visible row so that `cursor` stays on screen.
pub(crate) fn scroll_offset(cursor: usize, visible: usize) -> usize {
    if visible == 0 {
        return cursor;
    }
    cursor.saturating_sub(visible - 1)
}

fn render_companies(f: &mut Frame, area: Rect, app: &AppState) {
    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(theme::muted())
        .title(Span::styled(
            format!(" Companies ({}) [j/k] ", app.companies.len()),
            theme::accent_bold(),
        ));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if app.companies.is_empty() {
        let text = Paragraph::new(Span::styled("No file loaded.", theme::muted()));
        f.render_widget(text, inner);
        return;
    }

    let visible = inner.height as usize;
    let start = scroll_offset(app.company_idx, visible);
    let end = (start + visible).min(app.companies.len());

    let lines: Vec<Line> = (start..end)
        .map(|i| {
            let name = &app.companies[i];
            if i == app.company_idx {
                Line::from(Span::styled(
                    format!("▸ {name}"),
                    theme::accent().add_modifier(Modifier::REVERSED),
                ))
            } else {
                Line::from(Span::styled(format!("  {name}"), theme::neutral()))
            }
        })
        .collect();
    f.render_widget(Paragraph::new(lines), inner);
}

fn render_controls(f: &mut Frame, area: Rect, app: &AppState) {
    let mut lines: Vec<Line> = Vec::new();

    // Source
    let source = app
        .source
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(none)".to_string());
    lines.push(Line::from(vec![
        Span::styled(" File: ", theme::muted()),
        Span::styled(source, theme::accent()),
    ]));
    if let Some(table) = &app.table {
        lines.push(Line::from(Span::styled(
            format!(" {} rows for item {}", table.len(), table.target_item()),
            theme::muted(),
        )));
    }
    lines.push(Line::from(Span::styled(" [o]pen file  [r]eload", theme::muted())));
    lines.push(Line::from(""));

    // Year selector
    lines.push(Line::from(Span::styled(" Year  [h/l] or [ / ]", theme::accent_bold())));
    let mut year_spans = vec![Span::raw(" ")];
    for (i, year) in app.years.iter().enumerate() {
        let style = if i == app.year_idx {
            theme::accent().add_modifier(Modifier::REVERSED)
        } else {
            theme::muted()
        };
        year_spans.push(Span::styled(format!(" {year} "), style));
    }
    if app.years.is_empty() {
        year_spans.push(Span::styled("-", theme::muted()));
    }
    lines.push(Line::from(year_spans));
    lines.push(Line::from(""));

    // Toggles
    lines.push(Line::from(Span::styled(" Time Trend Analysis", theme::accent_bold())));
    lines.push(toggle_line("t", "Show Historical Trend", app.toggles.show_trend, true));
    lines.push(toggle_line(
        "c",
        "Also Show Current Year Analysis",
        app.toggles.also_show_current,
        app.toggles.show_trend,
    ));
    lines.push(Line::from(""));

    // Selection summary
    if let Some(sel) = app.selection() {
        lines.push(Line::from(vec![
            Span::styled(" Selected: ", theme::muted()),
            Span::styled(format!("{} / {}", sel.company, sel.year), theme::accent()),
        ]));
    }

    f.render_widget(Paragraph::new(lines), area);
}

fn toggle_line(key: &str, label: &str, on: bool, enabled: bool) -> Line<'static> {
    let check = if on { "[x]" } else { "[ ]" };
    let style = match (enabled, on) {
        (false, _) => theme::muted().add_modifier(Modifier::DIM),
        (true, true) => theme::accent(),
        (true, false) => theme::neutral(),
    };
    Line::from(vec![
        Span::styled(format!("  [{key}] "), theme::muted()),
        Span::styled(format!("{check} {label}"), style),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_keeps_cursor_visible() {
        assert_eq!(scroll_offset(0, 10), 0);
        assert_eq!(scroll_offset(9, 10), 0);
        assert_eq!(scroll_offset(10, 10), 1);
        assert_eq!(scroll_offset(25, 10), 16);
        assert_eq!(scroll_offset(3, 0), 3);
    }

    #[test]
    fn toggle_line_marks_state() {
        let on = toggle_line("t", "Show Historical Trend", true, true);
        let text: String = on.spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(text.contains("[x] Show Historical Trend"));

        let off = toggle_line("c", "Also Show", false, false);
        let text: String = off.spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(text.contains("[ ] Also Show"));
    }
}
