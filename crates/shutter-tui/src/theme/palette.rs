//! Colour palettes, one per theme preference.
//!
//! `System` keeps the terminal's own foreground and background
//! (`Color::Reset`) and only adds accents. `Light` and `Dark` paint every
//! cell with fixed RGB values.

use ratatui::style::Color;
use shutter_core::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    // --- Background layers ---
    pub background: Color,
    pub card_bg: Color,
    pub popup_bg: Color,

    // --- Borders ---
    pub border_dim: Color,
    pub border_active: Color,

    // --- Accent ---
    pub accent: Color,
    /// Text drawn on top of `accent`
    pub contrast_fg: Color,

    // --- Text ---
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // --- Status ---
    pub status_green: Color,
    pub status_red: Color,
    pub error_bg: Color,

    // --- Effects ---
    pub shadow: Color,
}

impl Palette {
    pub const SYSTEM: Palette = Palette {
        background: Color::Reset,
        card_bg: Color::Reset,
        popup_bg: Color::Reset,
        border_dim: Color::DarkGray,
        border_active: Color::Cyan,
        accent: Color::Cyan,
        contrast_fg: Color::Black,
        text_primary: Color::Reset,
        text_secondary: Color::Gray,
        text_muted: Color::DarkGray,
        status_green: Color::Green,
        status_red: Color::Red,
        error_bg: Color::Reset,
        shadow: Color::Black,
    };

    pub const DARK: Palette = Palette {
        background: Color::Rgb(10, 12, 16),
        card_bg: Color::Rgb(18, 21, 28),
        popup_bg: Color::Rgb(28, 33, 43),
        border_dim: Color::Rgb(45, 51, 59),
        border_active: Color::Rgb(88, 166, 255),
        accent: Color::Rgb(88, 166, 255),
        contrast_fg: Color::Rgb(10, 12, 16),
        text_primary: Color::Rgb(201, 209, 217),
        text_secondary: Color::Rgb(125, 133, 144),
        text_muted: Color::Rgb(72, 79, 88),
        status_green: Color::Rgb(16, 185, 129),
        status_red: Color::Rgb(244, 63, 94),
        error_bg: Color::Rgb(45, 18, 24),
        shadow: Color::Rgb(5, 6, 8),
    };

    pub const LIGHT: Palette = Palette {
        background: Color::Rgb(249, 250, 251),
        card_bg: Color::Rgb(255, 255, 255),
        popup_bg: Color::Rgb(255, 255, 255),
        border_dim: Color::Rgb(209, 213, 219),
        border_active: Color::Rgb(37, 99, 235),
        accent: Color::Rgb(37, 99, 235),
        contrast_fg: Color::Rgb(255, 255, 255),
        text_primary: Color::Rgb(17, 24, 39),
        text_secondary: Color::Rgb(75, 85, 99),
        text_muted: Color::Rgb(156, 163, 175),
        status_green: Color::Rgb(5, 150, 105),
        status_red: Color::Rgb(220, 38, 38),
        error_bg: Color::Rgb(254, 242, 242),
        shadow: Color::Rgb(209, 213, 219),
    };

    pub fn for_theme(theme: Theme) -> &'static Palette {
        match theme {
            Theme::System => &Self::SYSTEM,
            Theme::Light => &Self::LIGHT,
            Theme::Dark => &Self::DARK,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_palette_uses_terminal_colours() {
        let p = Palette::for_theme(Theme::System);
        assert_eq!(p.background, Color::Reset);
        assert_eq!(p.text_primary, Color::Reset);
    }

    #[test]
    fn test_each_theme_has_its_own_palette() {
        assert_ne!(
            Palette::for_theme(Theme::Light),
            Palette::for_theme(Theme::Dark)
        );
        assert_ne!(
            Palette::for_theme(Theme::System),
            Palette::for_theme(Theme::Dark)
        );
    }
}
