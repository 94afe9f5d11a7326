//! File-based logging setup
//!
//! The TUI owns the terminal's alternate screen, so log output goes to a
//! file under the platform data directory instead of stderr. Logging is
//! off unless a level is configured.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Resolve the effective log level, if any.
///
/// The NEWSDECK_LOG environment variable wins over the config file.
/// Neither set means logging stays disabled.
pub(crate) fn resolve_level(
    config_level: Option<&str>,
    env_level: Option<&str>,
) -> Option<String> {
    fn pick(v: Option<&str>) -> Option<&str> {
        v.map(str::trim).filter(|v| !v.is_empty())
    }

    pick(env_level)
        .or_else(|| pick(config_level))
        .map(str::to_string)
}

/// Where the log file lives.
pub fn log_file_path() -> std::io::Result<PathBuf> {
    let data_dir = dirs::data_dir().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "no data directory on this platform",
        )
    })?;
    Ok(data_dir.join("newsdeck").join("newsdeck.log"))
}

/// Initialize the file logger from configuration.
///
/// Returns the log file path when logging was enabled, `None` when it is
/// off. Should be called once, before the terminal enters raw mode.
pub fn init_logging(config: &Config) -> std::io::Result<Option<PathBuf>> {
    let env_level = std::env::var("NEWSDECK_LOG").ok();
    let Some(level) = resolve_level(config.log_level.as_deref(), env_level.as_deref()) else {
        return Ok(None);
    };

    let path = log_file_path()?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let filter = EnvFilter::try_new(&level).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .with_target(true)
        .init();

    Ok(Some(path))
}
