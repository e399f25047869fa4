//! Crash reporter state machine
//!
//! ```text
//!            render panic                 global error / task failure
//! Healthy ───────────────▶ Tripped(render)    Healthy ──────────▶ Tripped(global)
//!    ▲                          │                ▲                      │
//!    └────────── close() ───────┘                └────── close() ───────┘
//! ```
//!
//! A tripped reporter keeps accepting events; the latest one wins.

use std::fmt;

use chrono::{DateTime, Utc};

use super::report;

/// Placeholder stack for errors caught by the global error listener
pub const GLOBAL_ERROR_STACK: &str = "\n    at (Global Window Error)";

/// Placeholder stack for failures of unobserved background tasks
pub const UNHANDLED_REJECTION_STACK: &str = "\n    at (Unhandled Promise Rejection)";

/// What failed, in `Error.toString()` shape: `"<name>: <message>"`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorDescriptor {
    pub name: String,
    pub message: String,
}

impl ErrorDescriptor {
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Describe any error value by its `Display` output
    pub fn from_error(err: &dyn std::error::Error) -> Self {
        Self::new("Error", err.to_string())
    }
}

impl fmt::Display for ErrorDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            f.write_str(&self.name)
        } else {
            write!(f, "{}: {}", self.name, self.message)
        }
    }
}

/// Where a failure came from, real or synthesised
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackDescriptor {
    pub component_stack: String,
}

impl StackDescriptor {
    pub fn new(component_stack: impl Into<String>) -> Self {
        Self {
            component_stack: component_stack.into(),
        }
    }

    pub fn global_error() -> Self {
        Self::new(GLOBAL_ERROR_STACK)
    }

    pub fn unhandled_rejection() -> Self {
        Self::new(UNHANDLED_REJECTION_STACK)
    }
}

/// Buttons offered by the crash overlay, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CrashAction {
    #[default]
    CopyReport,
    OpenIssue,
    Reload,
    Close,
}

impl CrashAction {
    pub const ALL: [CrashAction; 4] = [
        CrashAction::CopyReport,
        CrashAction::OpenIssue,
        CrashAction::Reload,
        CrashAction::Close,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CrashAction::CopyReport => "Copy Report",
            CrashAction::OpenIssue => "Open GitHub Issue",
            CrashAction::Reload => "Reload",
            CrashAction::Close => "Close",
        }
    }

    /// Shortcut key shown in the button
    pub fn key(&self) -> &'static str {
        match self {
            CrashAction::CopyReport => "c",
            CrashAction::OpenIssue => "g",
            CrashAction::Reload => "r",
            CrashAction::Close => "Esc",
        }
    }

    fn position(&self) -> usize {
        Self::ALL.iter().position(|a| a == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        Self::ALL[(self.position() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Captured failure state, owned by the crash boundary
#[derive(Debug, Clone, Default)]
pub struct CrashReporter {
    pub has_error: bool,
    /// The failure came from rendering the application subtree
    pub is_render_error: bool,
    pub error: Option<ErrorDescriptor>,
    pub error_info: Option<StackDescriptor>,

    /// Focused overlay button
    pub selected_action: CrashAction,
    /// Transient feedback line (e.g. after copying the report)
    pub notice: Option<String>,
}

impl CrashReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// A descendant panicked while rendering
    pub fn catch_render_error(&mut self, error: ErrorDescriptor, stack: Option<StackDescriptor>) {
        tracing::error!(
            "Uncaught error: {} {}",
            error,
            stack
                .as_ref()
                .map(|s| s.component_stack.as_str())
                .unwrap_or_default()
        );
        self.trip(true, error, stack);
    }

    /// A panic outside the render boundary
    pub fn handle_global_error(&mut self, error: ErrorDescriptor) {
        tracing::error!("Global error: {}", error);
        self.trip(false, error, Some(StackDescriptor::global_error()));
    }

    /// A background task failed and nobody awaited it
    pub fn handle_unhandled_rejection(&mut self, reason: ErrorDescriptor) {
        tracing::error!("Unhandled rejection: {}", reason);
        self.trip(false, reason, Some(StackDescriptor::unhandled_rejection()));
    }

    fn trip(&mut self, render: bool, error: ErrorDescriptor, stack: Option<StackDescriptor>) {
        self.has_error = true;
        self.is_render_error = render;
        self.error = Some(error);
        self.error_info = stack;
        self.selected_action = CrashAction::default();
        self.notice = None;
    }

    /// Dismiss the overlay and forget the captured failure
    pub fn close(&mut self) {
        *self = Self::default();
    }

    /// The application subtree renders unless a render error tripped us
    pub fn should_render_children(&self) -> bool {
        !self.has_error || !self.is_render_error
    }

    pub fn show_overlay(&self) -> bool {
        self.has_error
    }

    pub fn is_tripped(&self) -> bool {
        self.has_error
    }

    /// Markdown report for the clipboard / issue body
    pub fn generate_report(&self, user_agent: &str, now: DateTime<Utc>) -> String {
        report::generate_report(
            self.error.as_ref(),
            self.error_info.as_ref(),
            user_agent,
            now,
        )
    }

    /// Pre-filled "new issue" URL on the given tracker
    pub fn issue_url(&self, issue_tracker: &str, user_agent: &str, now: DateTime<Utc>) -> String {
        let message = self
            .error
            .as_ref()
            .map(|e| e.message.as_str())
            .unwrap_or_default();
        report::issue_url(
            issue_tracker,
            message,
            &self.generate_report(user_agent, now),
        )
    }
}
