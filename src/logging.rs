//! File-backed tracing setup.
//!
//! The terminal is owned by the UI, so logs go to a file through a
//! non-blocking appender. The returned guard must live until exit so the
//! buffered lines are flushed.

use crate::config::LogConfig;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_FILE_NAME: &str = "gradeline.log";

fn default_log_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "gradeline").map(|p| p.data_local_dir().join(LOG_FILE_NAME))
}

/// Resolve the log file: configured path, else the per-user data dir.
pub fn log_path(config: &LogConfig) -> Option<PathBuf> {
    config.file.clone().or_else(default_log_path)
}

/// Install the global subscriber. Returns `None` when no log location exists.
pub fn init_logging(config: &LogConfig) -> Result<Option<WorkerGuard>> {
    let Some(path) = log_path(config) else {
        return Ok(None);
    };
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let file_name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| LOG_FILE_NAME.into());

    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .context("Failed to install log subscriber")?;

    Ok(Some(guard))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_file_wins() {
        let config = LogConfig {
            level: "debug".to_string(),
            file: Some(PathBuf::from("/tmp/gradeline-test.log")),
        };
        assert_eq!(log_path(&config), Some(PathBuf::from("/tmp/gradeline-test.log")));
    }
}
