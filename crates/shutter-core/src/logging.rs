//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

const LOG_FILE_NAME: &str = "shutter.log";

const DEFAULT_FILTER: &str = "shutter_tester=info,shutter_app=info,shutter_tui=info,shutter_core=info,warn";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/shutter-tester/logs/` because the
/// terminal itself belongs to the UI. Log level is controlled by the
/// `SHUTTER_LOG` environment variable.
///
/// # Examples
/// ```bash
/// SHUTTER_LOG=debug cargo run
/// ```
pub fn init() -> Result<()> {
    let log_dir = log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_NAME);

    let env_filter = EnvFilter::try_from_env("SHUTTER_LOG")
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("Shutter Tester starting, logging to {}", log_dir.display());

    Ok(())
}

/// Directory holding the daily `shutter.log.<date>` files
pub fn log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("shutter-tester").join("logs")
}
