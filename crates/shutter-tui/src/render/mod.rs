//! Main render/view function (View in TEA pattern)
//!
//! The application subtree is drawn inside the root's error boundary. A panic
//! while drawing it trips the crash reporter; the overlay is drawn on top
//! whenever the reporter is tripped, whatever the cause.


use ratatui::widgets::{Block, Clear};
use ratatui::Frame;
use shutter_app::state::{AppState, Focus};
use shutter_app::AppRoot;

use super::{layout, widgets};
use crate::theme::{styles, IconSet, Palette};

/// Theme-dependent rendering inputs, resolved once per frame
#[derive(Debug, Clone, Copy)]
pub struct ViewContext {
    pub palette: &'static Palette,
    pub icons: IconSet,
}

impl ViewContext {
    pub fn for_state(state: &AppState) -> Self {
        let (theme, icons) = state.settings.with(|s| (s.theme, s.ui.icons));
        Self {
            palette: Palette::for_theme(theme),
            icons: IconSet::new(icons),
        }
    }
}

/// Render the complete UI
pub fn view(frame: &mut Frame, root: &mut AppRoot) {
    render_in_boundary(frame, root, render_app);
}

/// Draw `app` inside the boundary, then the crash overlay if tripped.
///
/// Only the boundary state is mutated here: a caught render panic is recorded
/// on the crash reporter, which stops `app` from being drawn again until the
/// overlay is closed.
pub fn render_in_boundary<F>(frame: &mut Frame, root: &mut AppRoot, app: F)
where
    F: FnOnce(&mut Frame, &AppState, &ViewContext),
{
    let area = frame.area();
    let ctx = ViewContext::for_state(&root.state);
    let background = Block::default().style(styles::base(ctx.palette));
    frame.render_widget(background.clone(), area);

    let boundary = &root.boundary;
    let state = &mut root.state;

    if state.crash.should_render_children() {
        let outcome = boundary.catch_render("App", || app(frame, &*state, &ctx));
        if let Err(caught) = outcome {
            // Discard whatever the failed subtree managed to draw
            frame.render_widget(Clear, area);
            frame.render_widget(background, area);
            state.crash.catch_render_error(caught.error, Some(caught.stack));
        }
    }

    if state.crash.show_overlay() {
        frame.render_widget(
            widgets::CrashOverlay::new(&state.crash, ctx.palette, ctx.icons),
            area,
        );
    }
}

/// The application subtree
pub fn render_app(frame: &mut Frame, state: &AppState, ctx: &ViewContext) {
    let areas = layout::create(frame.area());
    let theme = state.theme();

    frame.render_widget(
        widgets::MainHeader::new(theme, ctx.palette, ctx.icons),
        areas.header,
    );

    let input = widgets::SpeedInputField::new(
        &state.speed_input,
        state.focus == Focus::SpeedInput,
        ctx.palette,
    );
    let cursor = input.cursor_position(areas.input);
    frame.render_widget(input, areas.input);

    frame.render_widget(
        widgets::ThemeControl::new(theme, ctx.palette, ctx.icons)
            .cursor(state.theme_cursor)
            .focused(state.focus == Focus::ThemeControl),
        areas.theme,
    );

    frame.render_widget(
        widgets::SpeedList::new(&state.speeds, ctx.palette, ctx.icons),
        areas.speeds,
    );

    frame.render_widget(
        widgets::KeyHints::new(state.focus, state.crash.show_overlay(), ctx.palette),
        areas.footer,
    );

    if let Some(position) = cursor.filter(|_| !state.crash.show_overlay()) {
        frame.set_cursor_position(position);
    }
}
