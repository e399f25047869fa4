//! Tests for handler module

use super::crash::REPORT_COPIED_NOTICE;
use super::*;
use crate::config::{ReportSettings, Settings};
use crate::crash::{CrashAction, ErrorDescriptor, StackDescriptor};
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, Focus};
use shutter_core::{AppPhase, Theme};

/// Run a message and its follow-ups, collecting the actions like the event loop would
fn run(state: &mut AppState, message: Message) -> Vec<UpdateAction> {
    let mut actions = Vec::new();
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = update(state, m);
        actions.extend(result.action);
        msg = result.message;
    }
    actions
}

fn type_text(state: &mut AppState, text: &str) {
    for c in text.chars() {
        run(state, Message::Key(InputKey::Char(c)));
    }
}

fn tripped_state() -> AppState {
    let mut state = AppState::default();
    update(
        &mut state,
        Message::GlobalError(ErrorDescriptor::new("Panic", "lens cap on")),
    );
    state
}

// ─────────────────────────────────────────────────────────
// Lifecycle
// ─────────────────────────────────────────────────────────

#[test]
fn test_quit_message_sets_quitting_phase() {
    let mut state = AppState::default();
    assert_ne!(state.phase, AppPhase::Quitting);

    update(&mut state, Message::Quit);

    assert_eq!(state.phase, AppPhase::Quitting);
    assert!(state.should_quit());
}

#[test]
fn test_ctrl_c_produces_quit_message() {
    let state = AppState::default();
    let result = handle_key(&state, InputKey::CharCtrl('c'));
    assert!(matches!(result, Some(Message::Quit)));
}

#[test]
fn test_ctrl_c_quits_even_with_overlay() {
    let state = tripped_state();
    let result = handle_key(&state, InputKey::CharCtrl('c'));
    assert!(matches!(result, Some(Message::Quit)));
}

#[test]
fn test_tab_moves_focus() {
    let mut state = AppState::default();
    run(&mut state, Message::Key(InputKey::Tab));
    assert_eq!(state.focus, Focus::ThemeControl);
    run(&mut state, Message::Key(InputKey::Tab));
    assert_eq!(state.focus, Focus::SpeedInput);
}

// ─────────────────────────────────────────────────────────
// Speed Input
// ─────────────────────────────────────────────────────────

#[test]
fn test_q_is_text_in_speed_input() {
    let state = AppState::default();
    let result = handle_key(&state, InputKey::Char('q'));
    assert!(matches!(result, Some(Message::SpeedInputChar('q'))));
}

#[test]
fn test_valid_submit_records_speed_and_clears_draft() {
    let mut state = AppState::default();
    type_text(&mut state, "1/250");
    assert!(state.speed_input.can_submit());

    run(&mut state, Message::Key(InputKey::Enter));

    assert_eq!(state.speeds.len(), 1);
    assert_eq!(state.speeds[0].as_str(), "1/250");
    assert_eq!(state.speed_input.draft(), "");
}

#[test]
fn test_spaced_fraction_kept_as_typed() {
    let mut state = AppState::default();
    type_text(&mut state, "1 / 60");
    run(&mut state, Message::SubmitSpeed);
    assert_eq!(state.speeds[0].as_str(), "1 / 60");
}

#[test]
fn test_invalid_submit_is_ignored() {
    let mut state = AppState::default();
    type_text(&mut state, "2/250");

    run(&mut state, Message::SubmitSpeed);

    assert!(state.speeds.is_empty());
    assert_eq!(state.speed_input.draft(), "2/250");
}

#[test]
fn test_empty_submit_is_ignored() {
    let mut state = AppState::default();
    run(&mut state, Message::SubmitSpeed);
    assert!(state.speeds.is_empty());
}

#[test]
fn test_backspace_and_clear() {
    let mut state = AppState::default();
    type_text(&mut state, "125");
    run(&mut state, Message::Key(InputKey::Backspace));
    assert_eq!(state.speed_input.draft(), "12");

    run(&mut state, Message::Key(InputKey::CharCtrl('u')));
    assert_eq!(state.speed_input.draft(), "");
}

#[test]
fn test_each_valid_submit_forwarded_once() {
    let mut state = AppState::default();
    type_text(&mut state, "30");
    run(&mut state, Message::SubmitSpeed);
    // Draft is empty now, so a second submit does nothing
    run(&mut state, Message::SubmitSpeed);
    assert_eq!(state.speeds.len(), 1);
}

// ─────────────────────────────────────────────────────────
// Theme Control
// ─────────────────────────────────────────────────────────

#[test]
fn test_set_theme_updates_store_and_preserves_other_fields() {
    let settings = Settings {
        report: ReportSettings {
            issue_tracker: "https://example.com/fork".into(),
            browser: "firefox".into(),
        },
        ..Settings::default()
    };
    let mut state = AppState::with_settings(settings.clone());

    run(&mut state, Message::SetTheme(Theme::Dark));

    let now = state.settings.get();
    assert_eq!(now.theme, Theme::Dark);
    assert_eq!(now.report, settings.report);
    assert_eq!(now.ui, settings.ui);
}

#[test]
fn test_set_theme_is_idempotent() {
    let mut state = AppState::default();
    run(&mut state, Message::SetTheme(Theme::Light));
    run(&mut state, Message::SetTheme(Theme::Light));
    assert_eq!(state.theme(), Theme::Light);
}

#[test]
fn test_theme_cursor_is_not_the_active_theme() {
    let mut state = AppState::default();
    state.focus = Focus::ThemeControl;

    run(&mut state, Message::Key(InputKey::Right));

    assert_eq!(state.theme_cursor, Theme::Light);
    assert_eq!(state.theme(), Theme::System);

    run(&mut state, Message::Key(InputKey::Enter));
    assert_eq!(state.theme(), Theme::Light);
}

#[test]
fn test_theme_cursor_stops_at_edges() {
    let mut state = AppState::default();
    run(&mut state, Message::ThemeCursorLeft);
    assert_eq!(state.theme_cursor, Theme::System);

    for _ in 0..5 {
        run(&mut state, Message::ThemeCursorRight);
    }
    assert_eq!(state.theme_cursor, Theme::Dark);
}

#[test]
fn test_number_keys_pick_theme() {
    let mut state = AppState::default();
    state.focus = Focus::ThemeControl;

    run(&mut state, Message::Key(InputKey::Char('3')));
    assert_eq!(state.theme(), Theme::Dark);
    assert_eq!(state.theme_cursor, Theme::Dark);

    run(&mut state, Message::Key(InputKey::Char('1')));
    assert_eq!(state.theme(), Theme::System);
}

#[test]
fn test_q_quits_from_theme_control() {
    let mut state = AppState::default();
    state.focus = Focus::ThemeControl;
    run(&mut state, Message::Key(InputKey::Char('q')));
    assert!(state.should_quit());
}

#[test]
fn test_esc_in_theme_control_returns_to_input() {
    let mut state = AppState::default();
    state.focus = Focus::ThemeControl;
    run(&mut state, Message::Key(InputKey::Esc));
    assert_eq!(state.focus, Focus::SpeedInput);
    assert!(!state.should_quit());
}

#[test]
fn test_settings_changed_persists() {
    let mut state = AppState::default();
    let settings = Settings {
        theme: Theme::Dark,
        ..Settings::default()
    };

    let actions = run(&mut state, Message::SettingsChanged(settings.clone()));

    assert_eq!(actions, vec![UpdateAction::PersistSettings { settings }]);
}

// ─────────────────────────────────────────────────────────
// Crash Reporter
// ─────────────────────────────────────────────────────────

#[test]
fn test_global_error_shows_overlay_over_app() {
    let state = tripped_state();
    assert!(state.crash.show_overlay());
    assert!(state.crash.should_render_children());
    assert_eq!(
        state.crash.error_info,
        Some(StackDescriptor::global_error())
    );
}

#[test]
fn test_unhandled_rejection_message() {
    let mut state = AppState::default();
    run(
        &mut state,
        Message::UnhandledRejection(ErrorDescriptor::new("Error", "write failed")),
    );
    assert!(state.crash.has_error);
    assert_eq!(
        state.crash.error_info,
        Some(StackDescriptor::unhandled_rejection())
    );
}

#[test]
fn test_overlay_captures_keys() {
    let mut state = tripped_state();
    type_text(&mut state, "1");
    assert_eq!(state.speed_input.draft(), "");
}

#[test]
fn test_overlay_shortcut_keys() {
    let state = tripped_state();
    assert!(matches!(
        handle_key(&state, InputKey::Char('c')),
        Some(Message::CopyReport)
    ));
    assert!(matches!(
        handle_key(&state, InputKey::Char('g')),
        Some(Message::OpenIssue)
    ));
    assert!(matches!(
        handle_key(&state, InputKey::Char('r')),
        Some(Message::Reload)
    ));
    assert!(matches!(
        handle_key(&state, InputKey::Esc),
        Some(Message::CloseCrash)
    ));
    assert!(matches!(
        handle_key(&state, InputKey::Char('x')),
        Some(Message::CloseCrash)
    ));
}

#[test]
fn test_copy_report_returns_action_with_report() {
    let mut state = tripped_state();

    let actions = run(&mut state, Message::Key(InputKey::Char('c')));

    match actions.as_slice() {
        [UpdateAction::CopyToClipboard { report }] => {
            assert!(report.starts_with("**Error:** `Panic: lens cap on`"));
            assert!(report.contains("(Global Window Error)"));
            assert!(report.contains("**User Agent:** shutter-tester/"));
        }
        other => panic!("unexpected actions {:?}", other),
    }
}

#[test]
fn test_copy_report_without_error_does_nothing() {
    let mut state = AppState::default();
    assert!(run(&mut state, Message::CopyReport).is_empty());
}

#[test]
fn test_report_copied_sets_notice() {
    let mut state = tripped_state();
    run(&mut state, Message::ReportCopied { result: Ok(()) });
    assert_eq!(state.crash.notice.as_deref(), Some(REPORT_COPIED_NOTICE));

    run(
        &mut state,
        Message::ReportCopied {
            result: Err("no clipboard".into()),
        },
    );
    assert_eq!(
        state.crash.notice.as_deref(),
        Some("Failed to copy report: no clipboard")
    );
}

#[test]
fn test_report_copied_after_close_is_dropped() {
    let mut state = tripped_state();
    run(&mut state, Message::CloseCrash);
    run(&mut state, Message::ReportCopied { result: Ok(()) });
    assert!(state.crash.notice.is_none());
}

#[test]
fn test_open_issue_uses_configured_tracker() {
    let mut state = AppState::with_settings(Settings {
        report: ReportSettings {
            issue_tracker: "https://example.com/me/fork/".into(),
            browser: "firefox".into(),
        },
        ..Settings::default()
    });
    run(
        &mut state,
        Message::GlobalError(ErrorDescriptor::new("Panic", "boom")),
    );

    let actions = run(&mut state, Message::OpenIssue);

    match actions.as_slice() {
        [UpdateAction::OpenUrl { url, browser }] => {
            assert!(url.starts_with(
                "https://example.com/me/fork/issues/new?title=Crash%3A%20boom&body="
            ));
            assert_eq!(browser, "firefox");
        }
        other => panic!("unexpected actions {:?}", other),
    }
}

#[test]
fn test_issue_open_failure_sets_notice() {
    let mut state = tripped_state();
    run(
        &mut state,
        Message::IssueOpened {
            result: Err("xdg-open missing".into()),
        },
    );
    assert_eq!(
        state.crash.notice.as_deref(),
        Some("Failed to open browser: xdg-open missing")
    );
}

#[test]
fn test_reload_requests_remount() {
    let mut state = tripped_state();
    run(&mut state, Message::Key(InputKey::Char('r')));
    assert!(state.wants_reload());
    assert!(!state.should_quit());
}

#[test]
fn test_close_resets_crash_state() {
    let mut state = tripped_state();
    run(&mut state, Message::Key(InputKey::Esc));
    assert!(!state.crash.has_error);
    assert!(state.crash.error.is_none());
    assert!(!state.crash.show_overlay());
}

#[test]
fn test_overlay_focus_and_activate() {
    let mut state = tripped_state();
    assert_eq!(state.crash.selected_action, CrashAction::CopyReport);

    run(&mut state, Message::Key(InputKey::Right));
    run(&mut state, Message::Key(InputKey::Right));
    assert_eq!(state.crash.selected_action, CrashAction::Reload);

    run(&mut state, Message::Key(InputKey::Enter));
    assert!(state.wants_reload());
}

#[test]
fn test_activate_close_button() {
    let mut state = tripped_state();
    run(&mut state, Message::Key(InputKey::Left));
    assert_eq!(state.crash.selected_action, CrashAction::Close);

    run(&mut state, Message::Key(InputKey::Enter));
    assert!(!state.crash.has_error);
}

#[test]
fn test_last_error_wins() {
    let mut state = tripped_state();
    run(
        &mut state,
        Message::UnhandledRejection(ErrorDescriptor::new("Error", "second")),
    );
    assert_eq!(state.crash.error.as_ref().unwrap().message, "second");
}
