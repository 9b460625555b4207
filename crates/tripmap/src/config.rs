//! Configuration management for tripmap.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default data directory name.
const DATA_DIR_NAME: &str = "tripmap";

/// Default map artifact file name.
const ARTIFACT_FILE_NAME: &str = "map.html";

/// Default location-history file name, as exported by Google Takeout.
const HISTORY_FILE_NAME: &str = "Timeline Edits.json";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `TRIPMAP_`)
/// 2. TOML config file at `~/.config/tripmap/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Location-history source configuration.
    pub source: SourceConfig,
    /// Map artifact configuration.
    pub map: MapConfig,
    /// Web server configuration.
    pub server: ServerConfig,
}

/// Location-history source configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Path to the location-history JSON document.
    /// Defaults to `Timeline Edits.json` in the working directory.
    pub history_path: Option<PathBuf>,
}

/// Map artifact configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// Path where the rendered map is persisted.
    /// Defaults to `~/.local/share/tripmap/map.html`.
    pub artifact_path: Option<PathBuf>,
}

/// Web server configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// Configuration is loaded in this order (later sources override earlier):
    /// 1. Default values
    /// 2. TOML config file (if exists)
    /// 3. Environment variables (prefixed with `TRIPMAP_`)
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file).nested())
            .merge(Env::prefixed("TRIPMAP_").split("_"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(DATA_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Get the default data directory path.
    #[must_use]
    pub fn default_data_dir() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from(".local/share"))
            .join(DATA_DIR_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.server.host.is_empty() {
            return Err(Error::ConfigValidation {
                message: "server.host must not be empty".to_string(),
            });
        }

        if self.server.port == 0 {
            return Err(Error::ConfigValidation {
                message: "server.port must be greater than 0".to_string(),
            });
        }

        if let Some(path) = &self.source.history_path {
            if path.as_os_str().is_empty() {
                return Err(Error::ConfigValidation {
                    message: "source.history_path must not be empty".to_string(),
                });
            }
        }

        Ok(())
    }

    /// Get the history path, resolving defaults if not set.
    #[must_use]
    pub fn history_path(&self) -> PathBuf {
        self.source
            .history_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(HISTORY_FILE_NAME))
    }

    /// Get the artifact path, resolving defaults if not set.
    #[must_use]
    pub fn artifact_path(&self) -> PathBuf {
        self.map
            .artifact_path
            .clone()
            .unwrap_or_else(|| Self::default_data_dir().join(ARTIFACT_FILE_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert!(config.source.history_path.is_none());
        assert!(config.map.artifact_path.is_none());
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_validate_valid_config() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_empty_host() {
        let mut config = Config::default();
        config.server.host = String::new();

        let result = config.validate();
        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("server.host"));
    }

    #[test]
    fn test_validate_zero_port() {
        let mut config = Config::default();
        config.server.port = 0;

        let result = config.validate();
        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("server.port"));
    }

    #[test]
    fn test_validate_empty_history_path() {
        let mut config = Config::default();
        config.source.history_path = Some(PathBuf::new());

        let result = config.validate();
        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("history_path"));
    }

    #[test]
    fn test_history_path_default() {
        let config = Config::default();
        assert_eq!(config.history_path(), PathBuf::from("Timeline Edits.json"));
    }

    #[test]
    fn test_history_path_custom() {
        let mut config = Config::default();
        config.source.history_path = Some(PathBuf::from("/data/history.json"));

        assert_eq!(config.history_path(), PathBuf::from("/data/history.json"));
    }

    #[test]
    fn test_artifact_path_default() {
        let config = Config::default();
        let path = config.artifact_path();

        assert!(path.to_string_lossy().contains("tripmap"));
        assert!(path.to_string_lossy().contains("map.html"));
    }

    #[test]
    fn test_artifact_path_custom() {
        let mut config = Config::default();
        config.map.artifact_path = Some(PathBuf::from("/srv/www/map.html"));

        assert_eq!(config.artifact_path(), PathBuf::from("/srv/www/map.html"));
    }

    #[test]
    fn test_default_config_path() {
        let path = Config::default_config_path();
        assert!(path.to_string_lossy().contains("tripmap"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }

    #[test]
    fn test_load_nonexistent_config() {
        // Loading from a nonexistent path should work (uses defaults)
        let result = Config::load_from(Some(PathBuf::from("/nonexistent/config.toml")));
        assert!(result.is_ok());

        let config = result.unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_from_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let config_file = dir.path().join("config.toml");
        std::fs::write(
            &config_file,
            r#"
            [source]
            history_path = "/data/history.json"

            [server]
            port = 9000
            "#,
        )
        .unwrap();

        let config = Config::load_from(Some(config_file)).unwrap();
        assert_eq!(config.history_path(), PathBuf::from("/data/history.json"));
        assert_eq!(config.server.port, 9000);
        // Unset sections keep their defaults.
        assert_eq!(config.server.host, "127.0.0.1");
        assert!(config.map.artifact_path.is_none());
    }

    #[test]
    fn test_config_serialize() {
        let config = Config::default();
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("history_path"));
        assert!(json.contains("artifact_path"));
        assert!(json.contains("port"));
    }

    #[test]
    fn test_config_clone() {
        let config = Config::default();
        let cloned = config.clone();
        assert_eq!(config, cloned);
    }
}
