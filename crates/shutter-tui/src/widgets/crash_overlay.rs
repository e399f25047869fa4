//! Modal crash report dialog
//!
//! Drawn over the dimmed application (or an empty screen when the
//! application itself failed to render).

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};
use shutter_app::crash::{CrashAction, CrashReporter};

use super::modal_overlay;
use crate::theme::{styles, IconSet, Palette};

pub const TITLE: &str = "Something went wrong";
pub const BODY: &str =
    "An unexpected error occurred. Please report this issue to help us fix it.";

const MODAL_WIDTH: u16 = 72;
const MODAL_HEIGHT: u16 = 18;

pub struct CrashOverlay<'a> {
    crash: &'a CrashReporter,
    palette: &'a Palette,
    icons: IconSet,
}

impl<'a> CrashOverlay<'a> {
    pub fn new(crash: &'a CrashReporter, palette: &'a Palette, icons: IconSet) -> Self {
        Self {
            crash,
            palette,
            icons,
        }
    }

    fn error_lines(&self) -> Vec<Line<'static>> {
        let error = self
            .crash
            .error
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_else(|| "Unknown error".to_string());

        let mut lines = vec![Line::from(Span::styled(
            error,
            styles::status_red(self.palette).add_modifier(Modifier::BOLD),
        ))];
        if let Some(info) = &self.crash.error_info {
            lines.extend(
                info.component_stack
                    .trim_start_matches('\n')
                    .lines()
                    .map(|l| Line::from(Span::styled(l.to_string(), styles::text_muted(self.palette)))),
            );
        }
        lines
    }

    fn button(&self, action: CrashAction) -> Span<'static> {
        let label = format!(" {} ({}) ", action.label(), action.key());
        let style = if action == self.crash.selected_action {
            styles::button_filled(self.palette)
        } else {
            styles::text_secondary(self.palette)
        };
        Span::styled(label, style)
    }

    fn notice_line(&self) -> Option<Line<'static>> {
        let notice = self.crash.notice.as_ref()?;
        let style = if notice.starts_with("Failed") {
            styles::status_red(self.palette)
        } else {
            styles::status_green(self.palette)
        };
        let icon = if notice.starts_with("Failed") {
            self.icons.alert()
        } else {
            self.icons.check()
        };
        Some(Line::from(Span::styled(format!("{icon} {notice}"), style)).alignment(Alignment::Right))
    }
}

impl Widget for CrashOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        modal_overlay::dim_background(buf, area, self.palette);

        let modal = modal_overlay::centered_rect(MODAL_WIDTH, MODAL_HEIGHT, area);
        modal_overlay::render_shadow(buf, modal, self.palette);
        modal_overlay::clear_area(buf, modal);

        let block = styles::modal_block(self.palette).title(Span::styled(
            format!(" {} {} ", self.icons.alert(), TITLE),
            styles::status_red(self.palette).add_modifier(Modifier::BOLD),
        ));
        let inner = block.inner(modal);
        block.render(modal, buf);

        let [body, _, error_box, buttons, notice] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        Paragraph::new(BODY)
            .style(styles::text_secondary(self.palette))
            .wrap(Wrap { trim: true })
            .render(body, buf);

        let error_block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(styles::border_inactive(self.palette))
            .style(Style::default().bg(self.palette.error_bg));
        Paragraph::new(self.error_lines())
            .block(error_block)
            .wrap(Wrap { trim: false })
            .render(error_box, buf);

        let mut spans = Vec::with_capacity(CrashAction::ALL.len() * 2);
        for (i, action) in CrashAction::ALL.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(self.button(action));
        }
        Line::from(spans).alignment(Alignment::Right).render(buttons, buf);

        if let Some(line) = self.notice_line() {
            line.render(notice, buf);
        }
    }
}
