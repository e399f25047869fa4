//! Configuration file parsing for Shutter Tester
//!
//! Supports `<config_dir>/shutter-tester/config.toml` (or a path given with
//! `--config`).

pub mod settings;
pub mod types;

pub use settings::{default_config_path, load_settings, save_settings, validate_issue_tracker};
pub use types::*;
