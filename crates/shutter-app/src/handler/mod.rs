//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers per focused control
//! - `crash`: Crash overlay handlers

pub(crate) mod crash;
pub(crate) mod keys;
pub(crate) mod update;

#[cfg(test)]
mod tests;

use crate::config::Settings;
use crate::message::Message;

// Re-export main entry point
pub use update::update;

#[cfg(test)]
pub(crate) use keys::handle_key;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Put the crash report on the clipboard; answers with `ReportCopied`
    CopyToClipboard { report: String },

    /// Open `url` in the browser; answers with `IssueOpened`.
    ///
    /// If `browser` is empty, the platform default opener is used.
    OpenUrl { url: String, browser: String },

    /// Write the settings file in a supervised background task
    PersistSettings { settings: Settings },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
