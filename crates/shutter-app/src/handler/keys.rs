//! Key event handlers for the focused control and the crash overlay

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, Focus};
use shutter_core::Theme;

/// Convert key events to messages based on what currently has focus
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Force quit with Ctrl+C from anywhere
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    // The overlay is modal while a failure is being shown
    if state.crash.show_overlay() {
        return handle_key_crash_overlay(key);
    }

    match state.focus {
        Focus::SpeedInput => handle_key_speed_input(key),
        Focus::ThemeControl => handle_key_theme_control(key),
    }
}

/// Handle key events while the crash overlay is visible
fn handle_key_crash_overlay(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('c') => Some(Message::CopyReport),
        InputKey::Char('g') => Some(Message::OpenIssue),
        InputKey::Char('r') => Some(Message::Reload),
        InputKey::Char('x') | InputKey::Esc => Some(Message::CloseCrash),
        InputKey::Char('q') => Some(Message::Quit),

        InputKey::Right | InputKey::Tab | InputKey::Char('l') => Some(Message::CrashFocusNext),
        InputKey::Left | InputKey::BackTab | InputKey::Char('h') => Some(Message::CrashFocusPrev),
        InputKey::Enter | InputKey::Char(' ') => Some(Message::CrashActivate),

        _ => None,
    }
}

/// Handle key events while the speed input has focus
fn handle_key_speed_input(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter => Some(Message::SubmitSpeed),
        InputKey::Backspace => Some(Message::SpeedInputBackspace),
        InputKey::CharCtrl('u') | InputKey::Esc => Some(Message::SpeedInputClear),
        InputKey::Char(c) => Some(Message::SpeedInputChar(c)),

        InputKey::Tab | InputKey::Down => Some(Message::FocusNext),
        InputKey::BackTab | InputKey::Up => Some(Message::FocusPrev),

        _ => None,
    }
}

/// Handle key events while the theme buttons have focus
fn handle_key_theme_control(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Left | InputKey::Char('h') => Some(Message::ThemeCursorLeft),
        InputKey::Right | InputKey::Char('l') => Some(Message::ThemeCursorRight),
        InputKey::Enter | InputKey::Char(' ') => Some(Message::ActivateThemeCursor),

        // Number keys pick a theme directly
        InputKey::Char('1') => Some(Message::SetTheme(Theme::System)),
        InputKey::Char('2') => Some(Message::SetTheme(Theme::Light)),
        InputKey::Char('3') => Some(Message::SetTheme(Theme::Dark)),

        InputKey::Tab | InputKey::Down => Some(Message::FocusNext),
        InputKey::BackTab | InputKey::Up | InputKey::Esc => Some(Message::FocusPrev),

        InputKey::Char('q') => Some(Message::Quit),

        _ => None,
    }
}
