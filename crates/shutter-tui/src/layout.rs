//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

use crate::widgets::THEME_CONTROL_WIDTH;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title bar (glass container)
    pub header: Rect,

    /// Speed input, left half of the controls row
    pub input: Rect,

    /// Theme switcher, right half of the controls row
    pub theme: Rect,

    /// Recorded speeds (remaining height)
    pub speeds: Rect,

    /// One-line key hints
    pub footer: Rect,
}

pub fn create(area: Rect) -> ScreenAreas {
    let [header, controls, speeds, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(area);

    let [input, theme] = Layout::horizontal([
        Constraint::Min(24),
        Constraint::Length(THEME_CONTROL_WIDTH),
    ])
    .areas(controls);

    ScreenAreas {
        header,
        input,
        theme,
        speeds,
        footer,
    }
}
