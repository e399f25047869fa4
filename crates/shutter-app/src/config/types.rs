//! Configuration types for Shutter Tester
//!
//! Defines:
//! - `Settings` - Global application settings, the value held by `SettingsStore`
//! - Related sub-types and enums

use serde::{Deserialize, Serialize};
use shutter_core::Theme;

/// Default issue tracker for crash reports
pub const DEFAULT_ISSUE_TRACKER: &str = "https://github.com/MichalTorma/shutter-tester";

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    /// Active colour theme
    #[serde(default)]
    pub theme: Theme,

    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub report: ReportSettings,
}

/// Icon rendering mode for the TUI.
///
/// Controls whether icons use Nerd Font glyphs (requires a Nerd Font)
/// or safe Unicode characters (works in all terminals).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconMode {
    /// Safe Unicode characters that work in all terminals (default)
    #[default]
    Unicode,
    /// Nerd Font glyphs
    NerdFonts,
}

impl std::fmt::Display for IconMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IconMode::Unicode => write!(f, "unicode"),
            IconMode::NerdFonts => write!(f, "nerd_fonts"),
        }
    }
}

/// UI settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Icon mode: "unicode" (default) or "nerd_fonts"
    #[serde(default)]
    pub icons: IconMode,
}

/// Crash report settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ReportSettings {
    /// Repository URL; issues are filed at `<issue_tracker>/issues/new`
    #[serde(default = "default_issue_tracker")]
    pub issue_tracker: String,

    /// Program used to open the issue page; empty means the platform default
    #[serde(default)]
    pub browser: String,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            issue_tracker: default_issue_tracker(),
            browser: String::new(),
        }
    }
}

fn default_issue_tracker() -> String {
    DEFAULT_ISSUE_TRACKER.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_default() {
        let settings = Settings::default();
        assert_eq!(settings.theme, Theme::System);
        assert_eq!(settings.ui.icons, IconMode::Unicode);
        assert_eq!(settings.report.issue_tracker, DEFAULT_ISSUE_TRACKER);
        assert!(settings.report.browser.is_empty());
    }

    #[test]
    fn test_theme_serializes_lowercase() {
        let settings = Settings {
            theme: Theme::Dark,
            ..Settings::default()
        };
        let content = toml::to_string(&settings).unwrap();
        assert!(content.contains("theme = \"dark\""));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let settings: Settings = toml::from_str("theme = \"light\"").unwrap();
        assert_eq!(settings.theme, Theme::Light);
        assert_eq!(settings.report, ReportSettings::default());
    }

    #[test]
    fn test_icon_mode_parse() {
        let settings: Settings = toml::from_str("[ui]\nicons = \"nerd_fonts\"").unwrap();
        assert_eq!(settings.ui.icons, IconMode::NerdFonts);
        assert_eq!(IconMode::NerdFonts.to_string(), "nerd_fonts");
    }
}
