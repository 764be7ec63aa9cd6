//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/cadvisor/logs/`. Nothing is ever
/// written to the terminal itself while the TUI owns it.
/// Log level is controlled by the `CADVISOR_LOG` environment variable.
///
/// # Examples
/// ```bash
/// CADVISOR_LOG=debug cargo run
/// CADVISOR_LOG=trace cargo run
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory()?;
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "cadvisor.log");

    // Default to info, allow override via CADVISOR_LOG
    let env_filter = EnvFilter::try_from_env("CADVISOR_LOG")
        .unwrap_or_else(|_| EnvFilter::new("cadvisor=info,warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    tracing::info!("Career Advisor starting");
    tracing::info!("Log directory: {}", log_dir.display());

    Ok(())
}

/// Get the log directory path
fn get_log_directory() -> Result<PathBuf> {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    Ok(base.join("cadvisor").join("logs"))
}
