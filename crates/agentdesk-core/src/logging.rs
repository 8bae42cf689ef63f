//! Logging configuration using tracing
//!
//! The terminal belongs to ratatui, so logs only ever go to a rolling file.

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

const LOG_FILE_NAME: &str = "agentdesk.log";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/agentdesk/logs/`
/// Log level is controlled by the `AGENTDESK_LOG` environment variable.
///
/// # Examples
/// ```bash
/// AGENTDESK_LOG=debug agentdesk
/// AGENTDESK_LOG=agentdesk_app=trace agentdesk
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_NAME);

    let env_filter = EnvFilter::try_from_env("AGENTDESK_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_directives()));

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

    tracing::info!("═══════════════════════════════════════════════════════");
    tracing::info!("agentdesk starting");
    tracing::info!("Log directory: {}", log_dir.display());
    tracing::info!("═══════════════════════════════════════════════════════");

    Ok(())
}

/// Filter used when `AGENTDESK_LOG` is unset or unparsable.
///
/// Each workspace crate is listed because tracing targets use the crate
/// name, not the binary name.
fn default_directives() -> &'static str {
    "agentdesk=info,agentdesk_core=info,agentdesk_app=info,agentdesk_tui=info,warn"
}

/// Get the log directory path
pub fn get_log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("agentdesk").join("logs")
}
