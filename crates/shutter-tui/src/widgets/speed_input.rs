//! The "add speed" text field with its unit label and submit button

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};
use shutter_app::speed_input::SpeedInputState;

use crate::theme::{styles, Palette};

pub const PLACEHOLDER: &str = "1/250";
pub const UNIT_LABEL: &str = " s ";
pub const BUTTON_LABEL: &str = " Add speed ";

pub struct SpeedInputField<'a> {
    input: &'a SpeedInputState,
    focused: bool,
    palette: &'a Palette,
}

impl<'a> SpeedInputField<'a> {
    pub fn new(input: &'a SpeedInputState, focused: bool, palette: &'a Palette) -> Self {
        Self {
            input,
            focused,
            palette,
        }
    }

    /// Muted while the draft does not validate
    pub fn button_style(&self) -> Style {
        if self.input.can_submit() {
            styles::button_filled(self.palette)
        } else {
            styles::button_disabled(self.palette)
        }
    }

    fn areas(area: Rect) -> [Rect; 3] {
        let inner = styles::glass_block(&Palette::SYSTEM, false).inner(area);
        Layout::horizontal([
            Constraint::Min(1),
            Constraint::Length(UNIT_LABEL.len() as u16),
            Constraint::Length(BUTTON_LABEL.len() as u16),
        ])
        .areas(inner)
    }

    /// Where the terminal cursor goes while the field has focus
    pub fn cursor_position(&self, area: Rect) -> Option<Position> {
        if !self.focused {
            return None;
        }
        let [field, _, _] = Self::areas(area);
        if field.width == 0 || field.height == 0 {
            return None;
        }
        let offset = (Span::raw(self.input.draft()).width() as u16).min(field.width - 1);
        Some(Position::new(field.x + offset, field.y))
    }
}

impl Widget for SpeedInputField<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.palette, self.focused)
            .title(Span::styled(" Shutter speed ", styles::text_secondary(self.palette)));
        block.render(area, buf);

        let [field, unit, button] = Self::areas(area);

        let text = if self.input.draft().is_empty() {
            Span::styled(PLACEHOLDER, styles::text_muted(self.palette))
        } else {
            Span::styled(self.input.draft(), styles::text_primary(self.palette))
        };
        Line::from(text).render(field, buf);

        Line::from(Span::styled(UNIT_LABEL, styles::text_secondary(self.palette))).render(unit, buf);
        Line::from(Span::styled(BUTTON_LABEL, self.button_style())).render(button, buf);
    }
}
