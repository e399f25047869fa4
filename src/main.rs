//! Shutter Tester - record camera shutter speed tests from the terminal
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;
use shutter_app::config::default_config_path;
use shutter_core::{logging, Theme};
use shutter_tui::RunOptions;

/// Shutter Tester - record camera shutter speed tests from the terminal
#[derive(Parser, Debug)]
#[command(name = "shutter")]
#[command(version, about = "Record camera shutter speed tests", long_about = None)]
struct Args {
    /// Settings file (defaults to <config dir>/shutter-tester/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Start with this theme: system, light or dark
    #[arg(long, value_name = "THEME")]
    theme: Option<Theme>,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    // Logging is optional; the UI works without it
    if let Err(e) = logging::init() {
        eprintln!("Warning: logging disabled: {e}");
    }

    let options = RunOptions {
        config_path: args.config.unwrap_or_else(default_config_path),
        theme_override: args.theme,
    };

    if let Err(e) = shutter_tui::run(options).await {
        tracing::error!("Fatal: {}", e);
        eprintln!("Error: {e}");
        eprintln!("Logs: {}", logging::log_directory().display());
        if e.is_fatal() {
            std::process::exit(1);
        }
        return Err(e.into());
    }
    Ok(())
}
