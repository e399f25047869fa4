//! Main update function - handles state transitions (TEA pattern)

use crate::config::Settings;
use crate::message::Message;
use crate::state::AppState;
use shutter_core::{AppPhase, Theme};
use tracing::{debug, info};

use super::{crash, keys::handle_key, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => UpdateResult::none(),

        Message::FocusNext => {
            state.focus = state.focus.next();
            UpdateResult::none()
        }

        Message::FocusPrev => {
            state.focus = state.focus.prev();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Speed Input Messages
        // ─────────────────────────────────────────────────────────
        Message::SpeedInputChar(c) => {
            state.speed_input.insert_char(c);
            UpdateResult::none()
        }

        Message::SpeedInputBackspace => {
            state.speed_input.backspace();
            UpdateResult::none()
        }

        Message::SpeedInputClear => {
            state.speed_input.clear();
            UpdateResult::none()
        }

        Message::SubmitSpeed => {
            match state.speed_input.submit() {
                Some(entry) => state.add_speed(entry),
                None => debug!(
                    "Ignoring submit of invalid speed '{}'",
                    state.speed_input.draft()
                ),
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Theme Control Messages
        // ─────────────────────────────────────────────────────────
        Message::ThemeCursorLeft => {
            let index = state.theme_cursor.index().saturating_sub(1);
            state.theme_cursor = Theme::ALL[index];
            UpdateResult::none()
        }

        Message::ThemeCursorRight => {
            let index = (state.theme_cursor.index() + 1).min(Theme::ALL.len() - 1);
            state.theme_cursor = Theme::ALL[index];
            UpdateResult::none()
        }

        Message::ActivateThemeCursor => UpdateResult::message(Message::SetTheme(state.theme_cursor)),

        Message::SetTheme(theme) => {
            state.theme_cursor = theme;
            state.settings.update(|s| Settings { theme, ..s.clone() });
            UpdateResult::none()
        }

        Message::SettingsChanged(settings) => {
            info!("Theme is now {}", settings.theme);
            UpdateResult::action(UpdateAction::PersistSettings { settings })
        }

        // ─────────────────────────────────────────────────────────
        // Crash Reporter Messages
        // ─────────────────────────────────────────────────────────
        Message::GlobalError(error) => crash::handle_global_error(state, error),
        Message::UnhandledRejection(reason) => crash::handle_unhandled_rejection(state, reason),
        Message::CrashFocusNext => crash::handle_focus_next(state),
        Message::CrashFocusPrev => crash::handle_focus_prev(state),
        Message::CrashActivate => crash::handle_activate(state),
        Message::CopyReport => crash::handle_copy_report(state),
        Message::OpenIssue => crash::handle_open_issue(state),
        Message::Reload => crash::handle_reload(state),
        Message::CloseCrash => crash::handle_close(state),
        Message::ReportCopied { result } => crash::handle_report_copied(state, result),
        Message::IssueOpened { result } => crash::handle_issue_opened(state, result),
    }
}
