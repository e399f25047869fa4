//! Crash overlay handlers

use chrono::Utc;

use crate::crash::{user_agent, CrashAction, ErrorDescriptor};
use crate::message::Message;
use crate::state::AppState;
use shutter_core::AppPhase;
use tracing::{debug, warn};

use super::{UpdateAction, UpdateResult};

/// Shown after the report reached the clipboard
pub const REPORT_COPIED_NOTICE: &str = "Error report copied to clipboard!";

pub fn handle_global_error(state: &mut AppState, error: ErrorDescriptor) -> UpdateResult {
    state.crash.handle_global_error(error);
    UpdateResult::none()
}

pub fn handle_unhandled_rejection(state: &mut AppState, reason: ErrorDescriptor) -> UpdateResult {
    state.crash.handle_unhandled_rejection(reason);
    UpdateResult::none()
}

pub fn handle_focus_next(state: &mut AppState) -> UpdateResult {
    state.crash.selected_action = state.crash.selected_action.next();
    UpdateResult::none()
}

pub fn handle_focus_prev(state: &mut AppState) -> UpdateResult {
    state.crash.selected_action = state.crash.selected_action.prev();
    UpdateResult::none()
}

pub fn handle_activate(state: &mut AppState) -> UpdateResult {
    let msg = match state.crash.selected_action {
        CrashAction::CopyReport => Message::CopyReport,
        CrashAction::OpenIssue => Message::OpenIssue,
        CrashAction::Reload => Message::Reload,
        CrashAction::Close => Message::CloseCrash,
    };
    UpdateResult::message(msg)
}

pub fn handle_copy_report(state: &mut AppState) -> UpdateResult {
    if !state.crash.is_tripped() {
        debug!("CopyReport without a captured error");
        return UpdateResult::none();
    }
    let report = state.crash.generate_report(&user_agent(), Utc::now());
    UpdateResult::action(UpdateAction::CopyToClipboard { report })
}

pub fn handle_open_issue(state: &mut AppState) -> UpdateResult {
    if !state.crash.is_tripped() {
        debug!("OpenIssue without a captured error");
        return UpdateResult::none();
    }
    let (tracker, browser) = state
        .settings
        .with(|s| (s.report.issue_tracker.clone(), s.report.browser.clone()));
    let url = state.crash.issue_url(&tracker, &user_agent(), Utc::now());
    UpdateResult::action(UpdateAction::OpenUrl { url, browser })
}

pub fn handle_reload(state: &mut AppState) -> UpdateResult {
    state.phase = AppPhase::Reloading;
    UpdateResult::none()
}

pub fn handle_close(state: &mut AppState) -> UpdateResult {
    state.crash.close();
    UpdateResult::none()
}

pub fn handle_report_copied(state: &mut AppState, result: Result<(), String>) -> UpdateResult {
    // The overlay may have been closed while the copy was in flight
    if !state.crash.is_tripped() {
        return UpdateResult::none();
    }
    state.crash.notice = Some(match result {
        Ok(()) => REPORT_COPIED_NOTICE.to_string(),
        Err(e) => {
            warn!("Failed to copy error report: {}", e);
            format!("Failed to copy report: {}", e)
        }
    });
    UpdateResult::none()
}

pub fn handle_issue_opened(state: &mut AppState, result: Result<(), String>) -> UpdateResult {
    if let Err(e) = result {
        warn!("Failed to open issue page: {}", e);
        if state.crash.is_tripped() {
            state.crash.notice = Some(format!("Failed to open browser: {}", e));
        }
    }
    UpdateResult::none()
}
