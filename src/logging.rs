//! Tracing subscriber setup
//!
//! The dashboard owns the terminal, so it logs to a file under the cache
//! directory. One-shot commands log to stderr.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Environment variable that overrides `[logging].level`.
pub const LOG_ENV: &str = "GHDASH_LOG";

const LOG_FILE: &str = "ghdash.log";

/// Where log records go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

/// Default log file: `<cache_dir>/ghdash/ghdash.log`.
pub fn default_log_file() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("ghdash").join(LOG_FILE))
}

/// Filter directive from `GHDASH_LOG`, falling back to the configured level.
pub fn filter_directive(config: &LoggingConfig) -> String {
    std::env::var(LOG_ENV)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| config.level.clone())
}

/// Parse the effective filter directive.
///
/// Errors name the directive that failed, which may come from `GHDASH_LOG`
/// rather than the config file.
pub fn build_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    let directive = filter_directive(config);
    EnvFilter::try_new(&directive).with_context(|| format!("Invalid log filter '{}'", directive))
}

/// Install the global subscriber.
///
/// The returned guard flushes buffered records when dropped; keep it alive
/// for the life of the program.
pub fn init(target: LogTarget, config: &LoggingConfig) -> Result<WorkerGuard> {
    let filter = build_filter(config)?;

    let (writer, guard) = match target {
        LogTarget::Stderr => tracing_appender::non_blocking(std::io::stderr()),
        LogTarget::File(path) => {
            let dir = path
                .parent()
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("."));
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
            let file_name = path
                .file_name()
                .map(|name| name.to_os_string())
                .unwrap_or_else(|| LOG_FILE.into());
            tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name))
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {}", e))?;

    Ok(guard)
}
