//! Configuration management for Newsdeck

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Default top-headlines endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://newsapi.org/v2/top-headlines";

/// Country code sent with every headline request.
pub const DEFAULT_COUNTRY: &str = "in";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// API credential. Optional in the file so it can be supplied through
    /// the NEWSDECK_API_KEY environment variable instead.
    pub api_key: Option<String>,

    #[serde(default = "default_country")]
    pub country: String,

    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Event-loop tick rate in milliseconds.
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// Log level for the file logger. `None` disables logging entirely.
    #[serde(default)]
    pub log_level: Option<String>,
}

fn default_country() -> String {
    DEFAULT_COUNTRY.to_string()
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_tick_rate_ms() -> u64 {
    100
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            country: default_country(),
            endpoint: default_endpoint(),
            tick_rate_ms: default_tick_rate_ms(),
            log_level: None,
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// A missing file is not an error: a default config is written so the
    /// user has something to put their key into, and the defaults are used
    /// for this run.
    pub fn load() -> Result<Self> {
        let config_path = resolve_config_path()?;

        if config_path.exists() {
            Self::load_from_path(&config_path)
        } else {
            let config = Config::default();
            config.save_to_path(&config_path)?;
            Ok(config)
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        let config = Self::from_toml(&content)?;
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).map_err(ConfigError::ParseError)?;
        Ok(config)
    }

    /// Write this configuration to the given path, creating parent
    /// directories as needed.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::WriteError(e.to_string()))?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::WriteError(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| ConfigError::WriteError(e.to_string()))?;
        Ok(())
    }

    /// The API credential for this run.
    ///
    /// The NEWSDECK_API_KEY environment variable overrides the file value.
    /// Missing both is an error: the credential is never compiled in.
    pub fn api_key(&self) -> Result<String> {
        let env_value = std::env::var("NEWSDECK_API_KEY").ok();
        let key = resolve_api_key(self.api_key.as_deref(), env_value.as_deref())?;
        Ok(key)
    }
}

/// Pick the credential from the env override or the config file, in that
/// order. Blank values count as absent.
pub(crate) fn resolve_api_key(
    file_value: Option<&str>,
    env_value: Option<&str>,
) -> std::result::Result<String, ConfigError> {
    fn pick(v: Option<&str>) -> Option<&str> {
        v.map(str::trim).filter(|v| !v.is_empty())
    }

    pick(env_value)
        .or_else(|| pick(file_value))
        .map(str::to_string)
        .ok_or(ConfigError::MissingApiKey)
}

/// Resolve the configuration file path following XDG Base Directory spec.
pub fn resolve_config_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("NEWSDECK_CONFIG") {
        return Ok(PathBuf::from(shellexpand::tilde(&path).to_string()));
    }

    let config_dir = dirs::config_dir().ok_or_else(|| {
        ConfigError::ReadError(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "no config directory on this platform",
        ))
    })?;

    Ok(config_dir.join("newsdeck").join("config.toml"))
}
