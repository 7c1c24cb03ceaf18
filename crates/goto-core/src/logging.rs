//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Environment variable controlling the log filter
pub const LOG_ENV_VAR: &str = "GOTODLG_LOG";

const DEFAULT_FILTER: &str = "goto_dialog=info,goto_app=info,goto_core=info,warn";
const LOG_FILE_NAME: &str = "gotodlg.log";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/goto-dialog/logs/`.
/// Log level is controlled by the `GOTODLG_LOG` environment variable.
///
/// # Examples
/// ```bash
/// GOTODLG_LOG=debug gotodlg
/// GOTODLG_LOG=goto_app=trace gotodlg
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory()?;
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_NAME);

    tracing_subscriber::registry()
        .with(env_filter())
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("═══════════════════════════════════════════════════════");
    tracing::info!("Goto dialog host starting");
    tracing::info!("Log directory: {}", log_dir.display());
    tracing::info!("═══════════════════════════════════════════════════════");

    Ok(())
}

/// Build the filter from `GOTODLG_LOG`, falling back to the default
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Get the log directory path
fn get_log_directory() -> Result<PathBuf> {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    Ok(base.join("goto-dialog").join("logs"))
}

/// Get the log file path for the current day
pub fn get_current_log_file() -> Result<PathBuf> {
    let dir = get_log_directory()?;
    Ok(dir.join(LOG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_log_file_lives_under_app_directory() {
        let path = get_current_log_file().unwrap();
        assert!(path.ends_with("goto-dialog/logs/gotodlg.log"));
    }

    #[test]
    #[serial]
    fn test_env_filter_defaults_without_variable() {
        std::env::remove_var(LOG_ENV_VAR);
        assert_eq!(env_filter().to_string(), EnvFilter::new(DEFAULT_FILTER).to_string());
    }

    #[test]
    #[serial]
    fn test_env_filter_reads_variable() {
        std::env::set_var(LOG_ENV_VAR, "debug");
        let filter = env_filter().to_string();
        std::env::remove_var(LOG_ENV_VAR);
        assert_eq!(filter, "debug");
    }
}
