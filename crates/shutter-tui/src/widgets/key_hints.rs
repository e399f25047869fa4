//! Footer line listing the keys that apply right now

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};
use shutter_app::Focus;

use crate::theme::{styles, Palette};

pub struct KeyHints<'a> {
    focus: Focus,
    overlay: bool,
    palette: &'a Palette,
}

impl<'a> KeyHints<'a> {
    pub fn new(focus: Focus, overlay: bool, palette: &'a Palette) -> Self {
        Self {
            focus,
            overlay,
            palette,
        }
    }

    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        if self.overlay {
            return &[
                ("c", "Copy report"),
                ("g", "Open issue"),
                ("r", "Reload"),
                ("Esc", "Close"),
                ("←/→", "Select"),
            ];
        }
        match self.focus {
            Focus::SpeedInput => &[
                ("Enter", "Add"),
                ("Ctrl+U", "Clear"),
                ("Tab", "Theme"),
                ("Ctrl+C", "Quit"),
            ],
            Focus::ThemeControl => &[
                ("←/→", "Move"),
                ("Enter", "Apply"),
                ("1-3", "Pick"),
                ("Tab/Esc", "Input"),
                ("q", "Quit"),
            ],
        }
    }
}

impl Widget for KeyHints<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::raw(" ")];
        for (i, (key, label)) in self.hints().iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", styles::text_muted(self.palette)));
            }
            spans.push(Span::styled(*key, styles::keybinding(self.palette)));
            spans.push(Span::styled(format!(" {label}"), styles::text_muted(self.palette)));
        }
        Line::from(spans).render(area, buf);
    }
}
