//! Header bar widget
//!
//! Shows the application title and the theme currently in effect.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Widget,
};
use shutter_core::Theme;

use crate::theme::{styles, IconSet, Palette};

pub struct MainHeader<'a> {
    theme: Theme,
    palette: &'a Palette,
    icons: IconSet,
}

impl<'a> MainHeader<'a> {
    pub fn new(theme: Theme, palette: &'a Palette, icons: IconSet) -> Self {
        Self {
            theme,
            palette,
            icons,
        }
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.palette, false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let title = Line::from(vec![
            Span::styled(
                format!(" {} Shutter Tester", self.icons.camera()),
                styles::accent_bold(self.palette),
            ),
            Span::styled("  ·  ", styles::text_muted(self.palette)),
            Span::styled(
                format!("{} {}", self.icons.theme(self.theme), self.theme.title()),
                styles::text_secondary(self.palette),
            ),
        ]);
        title.render(inner, buf);

        let version = Line::from(Span::styled(
            format!("v{} ", env!("CARGO_PKG_VERSION")),
            styles::text_muted(self.palette),
        ))
        .alignment(Alignment::Right);
        version.render(inner, buf);
    }
}
