//! Settings parser for config.toml

use std::path::{Path, PathBuf};

use super::types::{ReportSettings, Settings};
use shutter_core::prelude::*;

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "shutter-tester";

/// Default location: `<config_dir>/shutter-tester/config.toml`
pub fn default_config_path() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join(APP_DIR).join(CONFIG_FILENAME)
}

/// Load settings from a config file
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    let mut settings = match read_settings(config_path) {
        Ok(settings) => {
            debug!("Loaded settings from {:?}", config_path);
            settings
        }
        Err(e) => {
            warn!("Ignoring {:?}: {}", config_path, e);
            Settings::default()
        }
    };

    if let Err(e) = validate_issue_tracker(&settings.report.issue_tracker) {
        warn!("{}, falling back to the default issue tracker", e);
        settings.report.issue_tracker = ReportSettings::default().issue_tracker;
    }

    settings
}

fn read_settings(config_path: &Path) -> Result<Settings> {
    let content = std::fs::read_to_string(config_path)?;
    Ok(toml::from_str(&content)?)
}

/// Check that the issue tracker is an absolute http(s) URL
pub fn validate_issue_tracker(raw: &str) -> Result<()> {
    let parsed = url::Url::parse(raw)
        .map_err(|e| Error::config_invalid(format!("issue_tracker '{}': {}", raw, e)))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(Error::config_invalid(format!(
            "issue_tracker must use http or https, got '{}'",
            other
        ))),
    }
}

/// Save settings to a config file
///
/// Uses atomic write (temp file + rename) for safety.
pub fn save_settings(config_path: &Path, settings: &Settings) -> Result<()> {
    let dir = config_path
        .parent()
        .ok_or_else(|| Error::config(format!("Invalid config path: {:?}", config_path)))?;

    if !dir.as_os_str().is_empty() && !dir.exists() {
        std::fs::create_dir_all(dir).with_context(|| format!("Failed to create {:?}", dir))?;
    }

    let temp_path = dir.join(".config.toml.tmp");

    let content = toml::to_string_pretty(settings)
        .map_err(|e| Error::config(format!("Failed to serialize settings: {}", e)))?;
    let full_content = format!("{}{}", generate_config_header(), content);

    std::fs::write(&temp_path, &full_content).context("Failed to write temp config file")?;

    std::fs::rename(&temp_path, config_path)
        .with_context(|| format!("Failed to replace {:?}", config_path))?;

    info!("Saved settings to {:?}", config_path);
    Ok(())
}

fn generate_config_header() -> String {
    r#"# Shutter Tester Configuration
# theme = "system" | "light" | "dark"
# [report] issue_tracker = "<repository url>", browser = "<program>"
# Rewritten by shutter whenever the theme changes

"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IconMode;
    use shutter_core::Theme;
    use tempfile::tempdir;

    #[test]
    fn test_load_settings_defaults() {
        let temp = tempdir().unwrap();
        let settings = load_settings(&temp.path().join("config.toml"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_settings_custom() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
theme = "dark"

[ui]
icons = "nerd_fonts"

[report]
issue_tracker = "https://example.com/me/fork"
"#,
        )
        .unwrap();

        let settings = load_settings(&path);
        assert_eq!(settings.theme, Theme::Dark);
        assert_eq!(settings.ui.icons, IconMode::NerdFonts);
        assert_eq!(settings.report.issue_tracker, "https://example.com/me/fork");
    }

    #[test]
    fn test_load_settings_invalid_toml() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "theme = [not valid").unwrap();

        assert_eq!(load_settings(&path), Settings::default());
    }

    #[test]
    fn test_load_settings_unknown_theme_falls_back() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "theme = \"sepia\"").unwrap();

        assert_eq!(load_settings(&path).theme, Theme::System);
    }

    #[test]
    fn test_load_settings_rejects_bad_tracker() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(
            &path,
            "theme = \"light\"\n[report]\nissue_tracker = \"ftp://nope\"\n",
        )
        .unwrap();

        let settings = load_settings(&path);
        assert_eq!(settings.theme, Theme::Light);
        assert_eq!(settings.report, ReportSettings::default());
    }

    #[test]
    fn test_save_then_load() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("nested").join("config.toml");
        let settings = Settings {
            theme: Theme::Light,
            ..Settings::default()
        };

        save_settings(&path, &settings).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("# Shutter Tester Configuration"));
        assert_eq!(load_settings(&path), settings);
        assert!(!path.parent().unwrap().join(".config.toml.tmp").exists());
    }

    #[test]
    fn test_read_settings_reports_parse_errors() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "theme = [not valid").unwrap();

        assert!(matches!(read_settings(&path), Err(Error::TomlParse(_))));
    }

    #[test]
    fn test_read_settings_reports_io_errors() {
        let temp = tempdir().unwrap();
        // A directory cannot be read as a file
        assert!(matches!(read_settings(temp.path()), Err(Error::Io(_))));
    }

    #[test]
    fn test_save_settings_surfaces_io_error() {
        let temp = tempdir().unwrap();
        let blocker = temp.path().join("not-a-dir");
        std::fs::write(&blocker, "").unwrap();

        let result = save_settings(&blocker.join("config.toml"), &Settings::default());

        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_validate_issue_tracker() {
        assert!(validate_issue_tracker("https://github.com/a/b").is_ok());
        assert!(validate_issue_tracker("not a url").is_err());
        assert!(validate_issue_tracker("file:///tmp").is_err());
    }

    #[test]
    fn test_default_config_path() {
        assert!(default_config_path().ends_with("shutter-tester/config.toml"));
    }
}
