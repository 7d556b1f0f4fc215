//! Client configuration management.
//!
//! Holds the settings fixed at client construction (base URL, auth token,
//! timeout) plus logging preferences. Configuration is persisted as TOML
//! on disk; every field has a default so partial files load cleanly.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants;

/// Errors raised while loading or saving configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Reading or writing the config file failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid TOML for `AppConfig`.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration could not be serialized.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// No platform config directory is available.
    #[error("could not determine config directory")]
    NoConfigDir,
}

/// Top-level configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// API client settings.
    #[serde(default)]
    pub client: ClientConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Settings a `WapiClient` is built from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// API base URL (e.g. "https://wapi2.com").
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Bearer token sent on every request.
    #[serde(default)]
    pub token: String,

    /// Per-request timeout in milliseconds.
    #[serde(default = "default_timeout")]
    pub timeout_ms: u64,

    /// Accept invalid TLS certificates (self-hosted gateways).
    #[serde(default)]
    pub accept_invalid_certs: bool,

    /// Overrides the default user agent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level or filter directive: trace, debug, info, warn, error.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Directory for log files. If empty, uses default location.
    #[serde(default)]
    pub directory: String,

    /// Enable JSON structured logging output.
    #[serde(default)]
    pub json_output: bool,
}

// Default value functions for serde

fn default_base_url() -> String {
    constants::DEFAULT_BASE_URL.to_string()
}

fn default_timeout() -> u64 {
    constants::DEFAULT_TIMEOUT_MS
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            token: String::new(),
            timeout_ms: default_timeout(),
            accept_invalid_certs: false,
            user_agent: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            directory: String::new(),
            json_output: false,
        }
    }
}

impl ClientConfig {
    /// Default configuration with the given token.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            ..Self::default()
        }
    }

    /// Sanitize and normalize a base URL.
    ///
    /// Trims whitespace and quotes, adds `https://` when no scheme is
    /// present and strips trailing slashes.
    pub fn sanitize_base_url(address: &str) -> String {
        let trimmed = address.trim().trim_matches('"').trim();
        if trimmed.is_empty() {
            return String::new();
        }

        let with_scheme = if trimmed.contains("://") {
            trimmed.to_string()
        } else {
            format!("https://{trimmed}")
        };

        with_scheme.trim_end_matches('/').to_string()
    }
}

impl AppConfig {
    /// Load configuration from the default config file path, falling back
    /// to defaults when the file does not exist.
    pub fn load_default() -> Result<Self, ConfigError> {
        let path = Self::default_config_path()?;
        if path.exists() {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file path.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Save configuration to a specific file path.
    pub fn save_to_file(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Directory holding the SDK's config and logs.
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        let base = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(base.join("wapi2"))
    }

    /// Get the default configuration file path.
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Get the effective log directory, using the configured path or the default.
    pub fn effective_log_dir(&self) -> Result<PathBuf, ConfigError> {
        if self.logging.directory.is_empty() {
            Ok(Self::config_dir()?.join("logs"))
        } else {
            Ok(PathBuf::from(&self.logging.directory))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.client.base_url, "https://wapi2.com");
        assert_eq!(config.client.timeout_ms, 30_000);
        assert!(config.client.token.is_empty());
        assert!(!config.client.accept_invalid_certs);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_sanitize_base_url() {
        assert_eq!(
            ClientConfig::sanitize_base_url("https://wapi2.com/"),
            "https://wapi2.com"
        );
        assert_eq!(
            ClientConfig::sanitize_base_url("  \"http://localhost:8080//\"  "),
            "http://localhost:8080"
        );
        assert_eq!(ClientConfig::sanitize_base_url("api.example.com"), "https://api.example.com");
        assert_eq!(ClientConfig::sanitize_base_url("   "), "");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: AppConfig = toml::from_str("[client]\ntoken = \"abc\"\n").unwrap();
        assert_eq!(config.client.token, "abc");
        assert_eq!(config.client.base_url, "https://wapi2.com");
        assert_eq!(config.client.timeout_ms, 30_000);
        assert!(!config.logging.json_output);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = AppConfig::default();
        config.client.token = "secret".into();
        config.client.timeout_ms = 5_000;
        config.logging.json_output = true;
        config.save_to_file(&path).unwrap();

        let loaded = AppConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded.client.token, "secret");
        assert_eq!(loaded.client.timeout_ms, 5_000);
        assert!(loaded.logging.json_output);
        assert!(loaded.client.user_agent.is_none());
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[client\ntoken = 1").unwrap();
        let err = AppConfig::load_from_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_effective_log_dir_prefers_configured() {
        let mut config = AppConfig::default();
        config.logging.directory = "/tmp/wapi-logs".into();
        assert_eq!(config.effective_log_dir().unwrap(), PathBuf::from("/tmp/wapi-logs"));
    }
}
