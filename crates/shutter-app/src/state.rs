//! Application state (Model in TEA pattern)

use crate::config::Settings;
use crate::crash::CrashReporter;
use crate::settings_store::SettingsStore;
use crate::speed_input::SpeedInputState;
use shutter_core::{AppPhase, SpeedEntry, Theme};

/// Which control receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    SpeedInput,
    ThemeControl,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::SpeedInput => Focus::ThemeControl,
            Focus::ThemeControl => Focus::SpeedInput,
        }
    }

    /// Two controls, so previous and next coincide
    pub fn prev(self) -> Self {
        self.next()
    }
}

/// Complete application state
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,

    /// Shared settings cell; clones see the same value
    pub settings: SettingsStore,

    pub speed_input: SpeedInputState,

    /// Submitted speeds, in insertion order
    pub speeds: Vec<SpeedEntry>,

    pub focus: Focus,

    /// Theme button under the keyboard cursor (not necessarily the active one)
    pub theme_cursor: Theme,

    pub crash: CrashReporter,
}

impl AppState {
    pub fn new(settings: SettingsStore) -> Self {
        let theme_cursor = settings.with(|s| s.theme);
        Self {
            phase: AppPhase::Running,
            settings,
            speed_input: SpeedInputState::new(),
            speeds: Vec::new(),
            focus: Focus::default(),
            theme_cursor,
            crash: CrashReporter::new(),
        }
    }

    /// State over a private store holding `settings`
    pub fn with_settings(settings: Settings) -> Self {
        Self::new(SettingsStore::new(settings))
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    pub fn wants_reload(&self) -> bool {
        self.phase == AppPhase::Reloading
    }

    /// The theme currently in effect
    pub fn theme(&self) -> Theme {
        self.settings.with(|s| s.theme)
    }

    /// Receive a validated speed from the input
    pub fn add_speed(&mut self, entry: SpeedEntry) {
        tracing::info!("Recorded shutter speed {}", entry);
        self.speeds.push(entry);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(SettingsStore::default())
    }
}
