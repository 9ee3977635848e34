//! Configuration management

use crate::error::{ErrorContext, GuichetError, GuichetResult};
use crate::logging::LoggingConfig;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level configuration for the console
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuichetConfig {
    pub api: ApiSettings,
    pub storage: StorageSettings,
    pub logging: LoggingConfig,
}

/// Remote backend settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSettings {
    /// Base URL of the REST backend, e.g. "https://caisse.example.com/api"
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
    /// User agent string
    pub user_agent: String,
}

/// Local storage settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageSettings {
    /// Directory holding the persisted session
    pub data_dir: String,
}

impl Default for GuichetConfig {
    fn default() -> Self {
        Self {
            api: ApiSettings {
                base_url: "http://localhost:8000/api".to_string(),
                timeout_seconds: 30,
                user_agent: format!("guichet/{}", env!("CARGO_PKG_VERSION")),
            },
            storage: StorageSettings {
                data_dir: "~/.guichet".to_string(),
            },
            logging: LoggingConfig::default(),
        }
    }
}

impl GuichetConfig {
    /// Load configuration from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> GuichetResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| GuichetError::Config {
            message: format!("Failed to read config file: {}", e),
            source: Some(Box::new(e)),
            context: ErrorContext::new("config")
                .with_operation("read_file")
                .with_suggestion("Check if the config file exists and is readable"),
        })?;

        let config: GuichetConfig = toml::from_str(&content).map_err(|e| GuichetError::Config {
            message: format!("Failed to parse config: {}", e),
            source: Some(Box::new(e)),
            context: ErrorContext::new("config")
                .with_operation("parse_toml")
                .with_suggestion("Check TOML syntax in config file"),
        })?;

        Ok(config)
    }

    /// Save configuration to a file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> GuichetResult<()> {
        let content = toml::to_string_pretty(self).map_err(|e| GuichetError::Config {
            message: format!("Failed to serialize config: {}", e),
            source: Some(Box::new(e)),
            context: ErrorContext::new("config").with_operation("serialize_toml"),
        })?;

        std::fs::write(path, content).map_err(|e| GuichetError::Config {
            message: format!("Failed to write config file: {}", e),
            source: Some(Box::new(e)),
            context: ErrorContext::new("config")
                .with_operation("write_file")
                .with_suggestion("Check if the directory exists and is writable"),
        })?;

        Ok(())
    }

    /// Load from the first config file found in the default locations,
    /// falling back to defaults
    pub fn load(explicit: Option<&PathBuf>) -> GuichetResult<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        for path in Self::default_paths().into_iter().flatten() {
            if path.exists() {
                tracing::info!(path = %path.display(), "Loading configuration");
                return Self::from_file(path);
            }
        }

        tracing::info!("No configuration file found, using defaults");
        Ok(Self::default())
    }

    /// Candidate config file locations, in priority order
    pub fn default_paths() -> [Option<PathBuf>; 3] {
        [
            dirs::config_dir().map(|d| d.join("guichet").join("config.toml")),
            dirs::home_dir().map(|d| d.join(".guichet").join("config.toml")),
            Some(PathBuf::from("guichet.toml")),
        ]
    }

    /// Validate the configuration
    pub fn validate(&self) -> GuichetResult<()> {
        if self.api.base_url.is_empty() {
            return Err(GuichetError::Config {
                message: "api.base_url must not be empty".to_string(),
                source: None,
                context: ErrorContext::new("config")
                    .with_operation("validate")
                    .with_suggestion("Set api.base_url to your backend URL"),
            });
        }

        if !self.api.base_url.starts_with("http://") && !self.api.base_url.starts_with("https://") {
            return Err(GuichetError::Config {
                message: format!("api.base_url must be an HTTP(S) URL: {}", self.api.base_url),
                source: None,
                context: ErrorContext::new("config").with_operation("validate"),
            });
        }

        if self.api.timeout_seconds == 0 {
            return Err(GuichetError::Config {
                message: "api.timeout_seconds must be greater than zero".to_string(),
                source: None,
                context: ErrorContext::new("config").with_operation("validate"),
            });
        }

        Ok(())
    }

    /// Session storage directory, with `~` expanded
    pub fn data_dir(&self) -> PathBuf {
        let raw = &self.storage.data_dir;
        if let Some(rest) = raw.strip_prefix("~") {
            if let Some(home) = dirs::home_dir() {
                return home.join(rest.trim_start_matches('/'));
            }
        }
        PathBuf::from(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        GuichetConfig::default().validate().unwrap();
    }

    #[test]
    fn rejects_non_http_base_url() {
        let mut config = GuichetConfig::default();
        config.api.base_url = "ftp://example.com".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn config_round_trips_through_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = GuichetConfig::default();
        config.api.base_url = "https://caisse.example.com/api".to_string();
        config.save_to_file(&path).unwrap();

        let back = GuichetConfig::from_file(&path).unwrap();
        assert_eq!(back.api.base_url, "https://caisse.example.com/api");
        assert_eq!(back.api.timeout_seconds, 30);
    }
}
