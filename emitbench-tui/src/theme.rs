//! Parrot/neon theme tokens for the EmitBench dashboard.
//!
//! # Color Palette
//! - **Background**: Near-black / deep charcoal (base layer)
//! - **Accent**: Electric cyan (focus, the selected company)
//! - **Positive**: Neon green (emission reductions)
//! - **Negative**: Hot pink (emission increases, errors)
//! - **Warning**: Neon orange (alerts, the subject marker)
//! - **Neutral**: Cool purple (industry mean, secondary info)
//! - **Muted**: Steel blue (disabled, secondary text)

use ratatui::style::{Color, Modifier, Style};

pub const BACKGROUND: Color = Color::Rgb(18, 18, 20);
pub const ACCENT: Color = Color::Rgb(0, 255, 255);
pub const POSITIVE: Color = Color::Rgb(0, 255, 128);
pub const NEGATIVE: Color = Color::Rgb(255, 20, 147);
pub const WARNING: Color = Color::Rgb(255, 140, 0);
pub const NEUTRAL: Color = Color::Rgb(147, 112, 219);
pub const MUTED: Color = Color::Rgb(100, 149, 237);
pub const TEXT_SECONDARY: Color = Color::Rgb(170, 170, 170);

/// Widget palette, passed by reference into the chart widgets.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub accent: Color,
    pub positive: Color,
    pub negative: Color,
    pub warning: Color,
    pub neutral: Color,
    pub muted: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::parrot_neon()
    }
}

impl Theme {
    pub fn parrot_neon() -> Self {
        Self {
            background: BACKGROUND,
            accent: ACCENT,
            positive: POSITIVE,
            negative: NEGATIVE,
            warning: WARNING,
            neutral: NEUTRAL,
            muted: MUTED,
            text_primary: Color::White,
            text_secondary: TEXT_SECONDARY,
        }
    }

    /// Color for a year-over-year change: reductions are good news.
    pub fn change_color(&self, pct: f64) -> Color {
        if pct < 0.0 {
            self.positive
        } else {
            self.negative
        }
    }

    /// Color for a share of peers emitting more than the subject.
    pub fn rank_color(&self, higher_pct: f64) -> Color {
        match higher_pct {
            h if h >= 75.0 => self.positive,
            h if h >= 50.0 => self.accent,
            h if h >= 25.0 => self.neutral,
            _ => self.warning,
        }
    }
}

// ── Free style helpers for the panel renderers ───────────────────────

pub fn accent() -> Style {
    Style::default().fg(ACCENT)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn muted() -> Style {
    Style::default().fg(MUTED)
}

pub fn neutral() -> Style {
    Style::default().fg(NEUTRAL)
}

pub fn warning() -> Style {
    Style::default().fg(WARNING)
}

pub fn negative() -> Style {
    Style::default().fg(NEGATIVE)
}

pub fn positive() -> Style {
    Style::default().fg(POSITIVE)
}

pub fn panel_border(active: bool) -> Style {
    if active {
        accent()
    } else {
        muted()
    }
}

pub fn panel_title(active: bool) -> Style {
    if active {
        accent_bold()
    } else {
        muted()
    }
}

/// Signed change style: decreases green, increases pink.
pub fn change_style(pct: f64) -> Style {
    if pct < 0.0 {
        positive()
    } else {
        negative()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_creation() {
        let theme = Theme::default();
        assert_eq!(theme.background, Color::Rgb(18, 18, 20));
        assert_eq!(theme.accent, Color::Rgb(0, 255, 255));
    }

    #[test]
    fn test_change_color() {
        let theme = Theme::default();
        assert_eq!(theme.change_color(-12.5), theme.positive);
        assert_eq!(theme.change_color(3.0), theme.negative);
        assert_eq!(theme.change_color(0.0), theme.negative);
    }

    #[test]
    fn test_rank_color() {
        let theme = Theme::default();
        assert_eq!(theme.rank_color(80.0), theme.positive);
        assert_eq!(theme.rank_color(60.0), theme.accent);
        assert_eq!(theme.rank_color(30.0), theme.neutral);
        assert_eq!(theme.rank_color(0.0), theme.warning);
    }

    #[test]
    fn test_free_styles_match_palette() {
        assert_eq!(accent().fg, Some(ACCENT));
        assert_eq!(panel_border(false).fg, Some(MUTED));
        assert_eq!(change_style(-1.0).fg, Some(POSITIVE));
        assert_eq!(change_style(1.0).fg, Some(NEGATIVE));
    }
}
