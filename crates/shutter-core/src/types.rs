//! Core domain types shared by the app and TUI layers

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    /// Tear down the mounted root and mount a fresh one
    Reloading,
    Quitting,
}

/// Colour theme preference
///
/// Exactly one variant is active at any time; there is no "unset" state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Follow the terminal's own colours
    #[default]
    System,
    Light,
    Dark,
}

impl Theme {
    /// Fixed order used by the theme buttons
    pub const ALL: [Theme; 3] = [Theme::System, Theme::Light, Theme::Dark];

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::System => "system",
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Tooltip-style label shown next to the button
    pub fn title(&self) -> &'static str {
        match self {
            Theme::System => "System Theme",
            Theme::Light => "Light Mode",
            Theme::Dark => "Dark Mode",
        }
    }

    /// Position in [`Theme::ALL`]
    pub fn index(&self) -> usize {
        match self {
            Theme::System => 0,
            Theme::Light => 1,
            Theme::Dark => 2,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "system" => Ok(Theme::System),
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!(
                "unknown theme '{other}' (expected system, light or dark)"
            )),
        }
    }
}
