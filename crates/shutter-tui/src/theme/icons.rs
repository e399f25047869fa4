//! Icon set for the TUI.
//!
//! Provides `IconSet` which resolves icons at runtime based on `IconMode`.
//! - `IconMode::Unicode`: safe characters that work in all terminals
//! - `IconMode::NerdFonts`: rich Nerd Font glyphs (requires Nerd Font installed)

use shutter_app::config::IconMode;
use shutter_core::Theme;

/// Runtime icon resolver.
#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    mode: IconMode,
}

impl IconSet {
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    /// Glyph on the theme button for `theme`
    pub fn theme(&self, theme: Theme) -> &'static str {
        match theme {
            Theme::System => self.settings(),
            Theme::Light => self.sun(),
            Theme::Dark => self.moon(),
        }
    }

    pub fn settings(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f013}", // nf-fa-cog
            IconMode::Unicode => "\u{2699}",   // ⚙
        }
    }

    pub fn sun(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f185}", // nf-fa-sun_o
            IconMode::Unicode => "\u{2600}",   // ☀
        }
    }

    pub fn moon(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f186}", // nf-fa-moon_o
            IconMode::Unicode => "\u{263e}",   // ☾
        }
    }

    pub fn camera(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f030}", // nf-fa-camera
            IconMode::Unicode => "\u{25c9}",   // ◉
        }
    }

    pub fn alert(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f071}", // nf-fa-warning
            IconMode::Unicode => "\u{26a0}",   // ⚠
        }
    }

    pub fn check(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f00c}", // nf-fa-check
            IconMode::Unicode => "\u{2713}",   // ✓
        }
    }

    pub fn dot(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f444}", // nf-oct-dot_fill
            IconMode::Unicode => "\u{25cf}",   // ●
        }
    }
}
