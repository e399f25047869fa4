//! Semantic style builders over a [`Palette`].

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette::Palette;

// --- Surfaces ---
pub fn base(p: &Palette) -> Style {
    Style::default().fg(p.text_primary).bg(p.background)
}

pub fn card(p: &Palette) -> Style {
    Style::default().fg(p.text_primary).bg(p.card_bg)
}

// --- Text styles ---
pub fn text_primary(p: &Palette) -> Style {
    Style::default().fg(p.text_primary)
}

pub fn text_secondary(p: &Palette) -> Style {
    Style::default().fg(p.text_secondary)
}

pub fn text_muted(p: &Palette) -> Style {
    Style::default().fg(p.text_muted)
}

// --- Border styles ---
pub fn border_inactive(p: &Palette) -> Style {
    Style::default().fg(p.border_dim)
}

pub fn border_active(p: &Palette) -> Style {
    Style::default().fg(p.border_active)
}

// --- Accent styles ---
pub fn accent_bold(p: &Palette) -> Style {
    Style::default().fg(p.accent).add_modifier(Modifier::BOLD)
}

/// Filled button, e.g. the active theme or an enabled submit button
pub fn button_filled(p: &Palette) -> Style {
    Style::default()
        .fg(p.contrast_fg)
        .bg(p.accent)
        .add_modifier(Modifier::BOLD)
}

pub fn button_disabled(p: &Palette) -> Style {
    Style::default().fg(p.text_muted).add_modifier(Modifier::DIM)
}

/// Keyboard cursor on a button that is not otherwise highlighted
pub fn button_cursor(p: &Palette) -> Style {
    Style::default()
        .fg(p.border_active)
        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
}

// --- Status styles ---
pub fn status_green(p: &Palette) -> Style {
    Style::default().fg(p.status_green)
}

pub fn status_red(p: &Palette) -> Style {
    Style::default().fg(p.status_red)
}

pub fn keybinding(p: &Palette) -> Style {
    Style::default().fg(p.accent)
}

// --- Block builders ---
pub fn glass_block(p: &Palette, focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active(p)
        } else {
            border_inactive(p)
        })
        .style(card(p))
}

pub fn modal_block(p: &Palette) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(status_red(p))
        .style(Style::default().fg(p.text_primary).bg(p.popup_bg))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_styles_follow_palette() {
        let p = &Palette::DARK;
        assert_eq!(text_primary(p).fg, Some(p.text_primary));
        assert_eq!(text_muted(p).fg, Some(p.text_muted));
        assert_eq!(text_secondary(p).fg, Some(p.text_secondary));
    }

    #[test]
    fn test_button_styles() {
        let p = &Palette::LIGHT;
        let filled = button_filled(p);
        assert_eq!(filled.bg, Some(p.accent));
        assert!(filled.add_modifier.contains(Modifier::BOLD));
        assert_eq!(button_disabled(p).fg, Some(p.text_muted));
    }

    #[test]
    fn test_border_styles() {
        let p = &Palette::SYSTEM;
        assert_eq!(border_inactive(p).fg, Some(p.border_dim));
        assert_eq!(border_active(p).fg, Some(p.border_active));
    }
}
