//! Panel 4: Help. Keyboard shortcuts.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let mut lines: Vec<Line> = Vec::new();

    section(&mut lines, "Global Navigation");
    key(&mut lines, "1-4", "Switch to panel by number");
    key(&mut lines, "Tab / Shift+Tab", "Cycle panels forward / back");
    key(&mut lines, "q", "Quit");
    lines.push(Line::from(""));

    section(&mut lines, "Panel 1: Data");
    key(&mut lines, "j / k", "Next / previous company");
    key(&mut lines, "h / l  or  [ / ]", "Previous / next year");
    key(&mut lines, "t", "Toggle historical trend");
    key(&mut lines, "c", "Toggle current-year analysis while the trend is on");
    key(&mut lines, "o", "Open an Excel, CSV or Parquet file");
    key(&mut lines, "r", "Reload the current file");
    lines.push(Line::from(""));

    section(&mut lines, "Panel 2: Benchmark");
    key(&mut lines, "", "Density of the year's emissions with the company marked");
    lines.push(Line::from(""));

    section(&mut lines, "Panel 3: Trend");
    key(&mut lines, "", "Company history vs industry average, yearly change bars");
    lines.push(Line::from(""));

    section(&mut lines, "Panel 4: Help (this panel)");
    key(&mut lines, "e", "Open error history overlay");
    lines.push(Line::from(""));

    section(&mut lines, "Filters");
    key(&mut lines, "Subcategory", &app.config.filters.subcategory);
    key(&mut lines, "Item", &app.config.filters.item);

    let para = Paragraph::new(lines);
    f.render_widget(para, area);
}

fn section<'a>(lines: &mut Vec<Line<'a>>, title: &str) {
    lines.push(Line::from(Span::styled(title.to_string(), theme::accent_bold())));
}

fn key<'a>(lines: &mut Vec<Line<'a>>, keys: &str, desc: &str) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {:>20}  ", keys), theme::accent()),
        Span::styled(desc.to_string(), theme::muted()),
    ]));
}
