//! Recorded shutter speeds, newest last

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use shutter_core::{SpeedEntry, SpeedKind};

use crate::theme::{styles, IconSet, Palette};

pub struct SpeedList<'a> {
    speeds: &'a [SpeedEntry],
    palette: &'a Palette,
    icons: IconSet,
}

impl<'a> SpeedList<'a> {
    pub fn new(speeds: &'a [SpeedEntry], palette: &'a Palette, icons: IconSet) -> Self {
        Self {
            speeds,
            palette,
            icons,
        }
    }

    fn kind_label(kind: SpeedKind) -> &'static str {
        match kind {
            SpeedKind::Fraction => "fraction",
            SpeedKind::WholeSeconds => "whole seconds",
        }
    }
}

impl Widget for SpeedList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.palette, false).title(Span::styled(
            format!(" Recorded speeds ({}) ", self.speeds.len()),
            styles::text_secondary(self.palette),
        ));
        let inner = block.inner(area);
        block.render(area, buf);

        if self.speeds.is_empty() {
            Paragraph::new(Line::from(Span::styled(
                " No speeds yet. Type one (e.g. 1/250 or 2) and press Enter.",
                styles::text_muted(self.palette),
            )))
            .render(inner, buf);
            return;
        }

        // Keep the latest entries visible once the list overflows
        let visible = inner.height as usize;
        let skip = self.speeds.len().saturating_sub(visible);

        let lines: Vec<Line> = self
            .speeds
            .iter()
            .enumerate()
            .skip(skip)
            .map(|(i, entry)| {
                Line::from(vec![
                    Span::styled(format!(" {:>3}. ", i + 1), styles::text_muted(self.palette)),
                    Span::styled(format!("{} ", self.icons.dot()), styles::keybinding(self.palette)),
                    Span::styled(format!("{:<12}", entry.to_string()), styles::text_primary(self.palette)),
                    Span::styled(
                        Self::kind_label(entry.kind()),
                        styles::text_secondary(self.palette),
                    ),
                ])
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}
