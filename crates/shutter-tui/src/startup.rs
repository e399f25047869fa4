//! Startup functions for the TUI runner
//!
//! Contains initialization logic that runs before the terminal is touched:
//! - `MountPoint::locate`: refuse to start without an interactive terminal
//! - `initial_settings`: settings for the first mount

use std::io::IsTerminal;
use std::path::Path;

use shutter_app::config::{load_settings, Settings};
use shutter_core::prelude::*;
use shutter_core::Theme;

/// Proof that an interactive terminal is attached to stdin and stdout
#[derive(Debug, Clone, Copy)]
pub struct MountPoint(());

impl MountPoint {
    pub fn locate() -> Result<Self> {
        check_streams(std::io::stdout().is_terminal(), std::io::stdin().is_terminal())
    }
}

fn check_streams(stdout_tty: bool, stdin_tty: bool) -> Result<MountPoint> {
    match (stdout_tty, stdin_tty) {
        (true, true) => Ok(MountPoint(())),
        (false, _) => Err(Error::mount_point_missing("stdout is not a terminal")),
        (true, false) => Err(Error::mount_point_missing("stdin is not a terminal")),
    }
}

/// Settings from disk, with the command-line theme taking precedence
pub fn initial_settings(config_path: &Path, theme_override: Option<Theme>) -> Settings {
    let mut settings = load_settings(config_path);
    if let Some(theme) = theme_override {
        debug!("Theme overridden from command line: {}", theme);
        settings.theme = theme;
    }
    settings
}
