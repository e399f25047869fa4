//! Message types for the application (TEA pattern)

use crate::config::Settings;
use crate::crash::ErrorDescriptor;
use crate::input_key::InputKey;
use shutter_core::Theme;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Quit immediately (Ctrl+C, `q`, signal handler)
    Quit,

    /// Move keyboard focus to the next / previous control
    FocusNext,
    FocusPrev,

    // ─────────────────────────────────────────────────────────
    // Speed Input Messages
    // ─────────────────────────────────────────────────────────
    /// Append a character to the draft
    SpeedInputChar(char),
    /// Delete the last character of the draft
    SpeedInputBackspace,
    /// Clear the whole draft
    SpeedInputClear,
    /// Submit the draft (ignored unless it validates)
    SubmitSpeed,

    // ─────────────────────────────────────────────────────────
    // Theme Control Messages
    // ─────────────────────────────────────────────────────────
    /// Move the theme button cursor
    ThemeCursorLeft,
    ThemeCursorRight,
    /// Activate the button under the cursor
    ActivateThemeCursor,
    /// Make `Theme` the active preference
    SetTheme(Theme),
    /// The settings store holds a new value
    SettingsChanged(Settings),

    // ─────────────────────────────────────────────────────────
    // Crash Reporter Messages
    // ─────────────────────────────────────────────────────────
    /// A panic escaped every render boundary
    GlobalError(ErrorDescriptor),
    /// A supervised task failed and nobody awaited it
    UnhandledRejection(ErrorDescriptor),
    /// Move focus between overlay buttons
    CrashFocusNext,
    CrashFocusPrev,
    /// Press the focused overlay button
    CrashActivate,
    /// Copy the Markdown report to the clipboard
    CopyReport,
    /// Open a pre-filled issue in the browser
    OpenIssue,
    /// Tear down and re-mount the application root
    Reload,
    /// Dismiss the overlay
    CloseCrash,
    /// Clipboard copy finished
    ReportCopied { result: Result<(), String> },
    /// Browser launch finished
    IssueOpened { result: Result<(), String> },
}
