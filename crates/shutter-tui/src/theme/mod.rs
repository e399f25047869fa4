//! Theme system for the Shutter Tester TUI.
//!
//! This module provides:
//! - `palette`: One colour palette per theme preference
//! - `styles`: Semantic style builder functions over a palette
//! - `icons`: Nerd Font glyphs with Unicode fallbacks

pub mod icons;
pub mod palette;
pub mod styles;

pub use icons::IconSet;
pub use palette::Palette;
