//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::live::{HttpSourceConfig, PollerConfig};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub poller: PollerSection,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Score polling configuration
#[derive(Debug, Clone, Deserialize)]
pub struct PollerSection {
    /// Site root serving `/api/match/{id}/scores`
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_interval")]
    pub interval_ms: u64,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_ms: u64,

    #[serde(default = "default_stop_when_completed")]
    pub stop_when_completed: bool,

    #[serde(default = "default_status_report_interval")]
    pub status_report_interval_ms: u64,
}

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_interval() -> u64 {
    3000
}

fn default_request_timeout() -> u64 {
    10_000
}

fn default_stop_when_completed() -> bool {
    true
}

fn default_status_report_interval() -> u64 {
    30_000
}

impl Default for PollerSection {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            interval_ms: default_interval(),
            request_timeout_ms: default_request_timeout(),
            stop_when_completed: default_stop_when_completed(),
            status_report_interval_ms: default_status_report_interval(),
        }
    }
}

impl PollerSection {
    pub fn poller_config(&self) -> PollerConfig {
        PollerConfig {
            interval_ms: self.interval_ms,
            stop_when_completed: self.stop_when_completed,
            status_report_interval_ms: self.status_report_interval_ms,
        }
    }

    pub fn source_config(&self) -> HttpSourceConfig {
        HttpSourceConfig {
            base_url: self.base_url.clone(),
            request_timeout_ms: self.request_timeout_ms,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("frisbee-live").join("config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path_opt in config_paths.iter().flatten() {
            if path_opt.exists() {
                match Self::load_with_env(path_opt) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path_opt);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path_opt, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup("FRISBEE_BASE_URL") {
            self.poller.base_url = url;
        }
        if let Some(interval) = lookup("FRISBEE_POLL_INTERVAL_MS") {
            if let Ok(ms) = interval.parse() {
                self.poller.interval_ms = ms;
            }
        }

        if let Some(level) = lookup("FRISBEE_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("FRISBEE_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Frisbee Live Configuration
#
# Environment variables override these settings:
# - FRISBEE_BASE_URL
# - FRISBEE_POLL_INTERVAL_MS
# - FRISBEE_LOG_LEVEL
# - FRISBEE_LOG_FORMAT

[poller]
# Site serving /api/match/{id}/scores
base_url = "http://localhost:5000"

# Time between two score fetches (ms)
interval_ms = 3000

# Per-request timeout (ms)
request_timeout_ms = 10000

# Stop polling once the server reports the match as completed
stop_when_completed = true

# Minimum time between two "live updates interrupted" reports (ms)
status_report_interval_ms = 30000

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.poller.interval_ms, 3000);
        assert_eq!(config.poller.base_url, "http://localhost:5000");
        assert!(config.poller.stop_when_completed);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_generated_config_parses_to_defaults() {
        let parsed = Config::parse(&generate_default_config()).unwrap();
        let defaults = Config::default();

        assert_eq!(parsed.poller.base_url, defaults.poller.base_url);
        assert_eq!(parsed.poller.interval_ms, defaults.poller.interval_ms);
        assert_eq!(parsed.poller.request_timeout_ms, defaults.poller.request_timeout_ms);
        assert_eq!(parsed.poller.stop_when_completed, defaults.poller.stop_when_completed);
        assert_eq!(parsed.logging.level, defaults.logging.level);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[poller]\ninterval_ms = 1500\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.poller.interval_ms, 1500);
        assert_eq!(config.poller.request_timeout_ms, 10_000);
        assert_eq!(config.poller.poller_config().interval_ms, 1500);
    }

    #[test]
    fn test_invalid_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[poller\n").unwrap();

        assert!(matches!(Config::load(&path), Err(ConfigError::Parse { .. })));
        assert!(matches!(
            Config::load(&dir.path().join("missing.toml")),
            Err(ConfigError::Io { .. })
        ));
    }

    #[test]
    fn test_overrides() {
        let mut config = Config::default();
        config.apply_overrides(|key| match key {
            "FRISBEE_BASE_URL" => Some("https://scores.example.org".to_string()),
            "FRISBEE_POLL_INTERVAL_MS" => Some("not-a-number".to_string()),
            "FRISBEE_LOG_FORMAT" => Some("json".to_string()),
            _ => None,
        });

        assert_eq!(config.poller.base_url, "https://scores.example.org");
        assert_eq!(config.poller.interval_ms, 3000);
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.poller.source_config().base_url, "https://scores.example.org");
    }
}
