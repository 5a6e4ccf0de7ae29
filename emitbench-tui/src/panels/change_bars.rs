//! Year-over-year change bars drawn around a zero axis.
//!
//! Reductions grow downward in green, increases grow upward in pink. Every
//! bar carries its percentage at the tip and its year underneath.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Widget},
};

use emitbench_core::analysis::YearChange;

use crate::theme::Theme;

const BAR: &str = "\u{2588}"; // █
const AXIS: &str = "\u{2500}"; // ─
const MAX_BAR_WIDTH: u16 = 6;

pub struct ChangeBars<'a> {
    changes: &'a [YearChange],
    theme: &'a Theme,
}

impl<'a> ChangeBars<'a> {
    pub fn new(changes: &'a [YearChange], theme: &'a Theme) -> Self {
        Self { changes, theme }
    }
}

/// Rows above and below the axis for a plot of `usable` bar rows.
fn split_rows(changes: &[YearChange], usable: u16) -> (u16, u16, f64) {
    let up = changes.iter().filter_map(|c| c.pct).fold(0.0_f64, f64::max);
    let down = changes.iter().filter_map(|c| c.pct).fold(0.0_f64, |acc, p| acc.max(-p));
    let span = if up + down > 0.0 { up + down } else { 1.0 };
    let rows_up = ((usable as f64) * up / span).round() as u16;
    (rows_up, usable - rows_up, span)
}

fn centered(slot_x: u16, slot: u16, text_width: u16) -> u16 {
    slot_x + slot.saturating_sub(text_width) / 2
}

impl<'a> Widget for ChangeBars<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" Year-over-Year Change ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.neutral))
            .style(Style::default().bg(self.theme.background));
        let inner = block.inner(area);
        block.render(area, buf);

        let n = self.changes.len() as u16;
        // axis + label above + label below + year row + at least one bar row
        if n == 0 || inner.height < 5 || inner.width < n {
            if inner.height > 0 {
                buf.set_stringn(
                    inner.x,
                    inner.y,
                    "No year-over-year changes to show",
                    inner.width as usize,
                    Style::default().fg(self.theme.muted),
                );
            }
            return;
        }

        let year_y = inner.bottom() - 1;
        let usable = inner.height - 4;
        let (rows_up, rows_down, span) = split_rows(self.changes, usable);
        let axis_y = inner.y + 1 + rows_up;

        let muted = Style::default().fg(self.theme.muted);
        for x in inner.left()..inner.right() {
            buf.set_string(x, axis_y, AXIS, muted);
        }

        let slot = inner.width / n;
        let bar_width = slot.saturating_sub(2).clamp(1, MAX_BAR_WIDTH);

        for (i, change) in self.changes.iter().enumerate() {
            let slot_x = inner.x + i as u16 * slot;
            let year = change.year.to_string();
            buf.set_stringn(
                centered(slot_x, slot, year.len() as u16),
                year_y,
                &year,
                slot as usize,
                Style::default().fg(self.theme.text_secondary),
            );

            let Some(pct) = change.pct else {
                buf.set_stringn(centered(slot_x, slot, 3), axis_y, "n/a", slot as usize, muted);
                continue;
            };

            let color = self.theme.change_color(pct);
            let limit = if pct >= 0.0 { rows_up } else { rows_down };
            let height = ((pct.abs() / span) * usable as f64).round() as u16;
            let height = height.min(limit);
            let bar_x = centered(slot_x, slot, bar_width);

            for h in 1..=height {
                let y = if pct >= 0.0 { axis_y - h } else { axis_y + h };
                for x in bar_x..bar_x + bar_width {
                    buf.set_string(x, y, BAR, Style::default().fg(color));
                }
            }

            let label = format!("{pct:+.1}%");
            let label_y = if pct >= 0.0 { axis_y - height - 1 } else { axis_y + height + 1 };
            buf.set_stringn(
                centered(slot_x, slot, label.len() as u16),
                label_y,
                &label,
                slot as usize,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::buffer_text;

    fn change(year: i32, pct: Option<f64>) -> YearChange {
        YearChange { year, pct }
    }

    #[test]
    fn test_split_rows_mixed_signs() {
        let c = [change(2021, Some(-20.0)), change(2022, Some(60.0))];
        let (up, down, span) = split_rows(&c, 8);
        assert_eq!((up, down), (6, 2));
        assert_eq!(span, 80.0);
    }

    #[test]
    fn test_split_rows_all_negative() {
        let c = [change(2021, Some(-5.0)), change(2022, Some(-10.0))];
        assert_eq!(split_rows(&c, 6).0, 0);
        assert_eq!(split_rows(&c, 6).1, 6);
    }

    #[test]
    fn test_split_rows_no_defined_changes() {
        let c = [change(2021, None)];
        let (up, down, span) = split_rows(&c, 6);
        assert_eq!(up + down, 6);
        assert_eq!(span, 1.0);
    }

    #[test]
    fn test_change_bars_label_each_year() {
        let theme = Theme::default();
        let c = vec![change(2021, Some(-20.0)), change(2022, Some(50.0)), change(2023, None)];
        let area = Rect::new(0, 0, 60, 14);
        let mut buf = Buffer::empty(area);
        ChangeBars::new(&c, &theme).render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("-20.0%"));
        assert!(text.contains("+50.0%"));
        assert!(text.contains("n/a"));
        for year in ["2021", "2022", "2023"] {
            assert!(text.contains(year), "missing {year}");
        }
    }

    #[test]
    fn test_change_bars_colored_by_sign() {
        let theme = Theme::default();
        let c = vec![change(2021, Some(-40.0)), change(2022, Some(40.0))];
        let area = Rect::new(0, 0, 40, 14);
        let mut buf = Buffer::empty(area);
        ChangeBars::new(&c, &theme).render(area, &mut buf);

        let mut left = None;
        let mut right = None;
        for y in 0..area.height {
            for x in 0..area.width {
                let cell = buf.cell((x, y)).unwrap();
                if cell.symbol() == BAR {
                    if x < area.width / 2 {
                        left = Some(cell.fg);
                    } else {
                        right = Some(cell.fg);
                    }
                }
            }
        }
        assert_eq!(left, Some(theme.positive));
        assert_eq!(right, Some(theme.negative));
    }

    #[test]
    fn test_change_bars_empty_and_tiny() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 50, 8);
        let mut buf = Buffer::empty(area);
        ChangeBars::new(&[], &theme).render(area, &mut buf);
        assert!(buffer_text(&buf).contains("No year-over-year changes"));

        let c = vec![change(2021, Some(10.0))];
        let area = Rect::new(0, 0, 4, 4);
        let mut buf = Buffer::empty(area);
        ChangeBars::new(&c, &theme).render(area, &mut buf);
    }
}
