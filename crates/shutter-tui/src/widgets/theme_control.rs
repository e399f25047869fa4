//! Three-way theme switcher
//!
//! The active button is derived from the settings store alone; the keyboard
//! cursor is drawn separately and never implies activation.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};
use shutter_core::Theme;

use crate::theme::{styles, IconSet, Palette};

/// Width that fits all three buttons inside a bordered block
pub const THEME_CONTROL_WIDTH: u16 = 49;

pub struct ThemeControl<'a> {
    active: Theme,
    cursor: Theme,
    focused: bool,
    palette: &'a Palette,
    icons: IconSet,
}

impl<'a> ThemeControl<'a> {
    pub fn new(active: Theme, palette: &'a Palette, icons: IconSet) -> Self {
        Self {
            active,
            cursor: active,
            focused: false,
            palette,
            icons,
        }
    }

    pub fn cursor(mut self, cursor: Theme) -> Self {
        self.cursor = cursor;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn button_label(&self, theme: Theme) -> String {
        format!(" {} {} ", self.icons.theme(theme), theme.title())
    }

    pub fn button_style(&self, theme: Theme) -> Style {
        if theme == self.active {
            let style = styles::button_filled(self.palette);
            if self.focused && theme == self.cursor {
                style.add_modifier(ratatui::style::Modifier::UNDERLINED)
            } else {
                style
            }
        } else if self.focused && theme == self.cursor {
            styles::button_cursor(self.palette)
        } else {
            styles::text_secondary(self.palette)
        }
    }
}

impl Widget for ThemeControl<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.palette, self.focused)
            .title(Span::styled(" Theme ", styles::text_secondary(self.palette)));
        let inner = block.inner(area);
        block.render(area, buf);

        let mut spans = Vec::with_capacity(Theme::ALL.len() * 2);
        for (i, theme) in Theme::ALL.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(self.button_label(theme), self.button_style(theme)));
        }
        Line::from(spans).render(inner, buf);
    }
}
