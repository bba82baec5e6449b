//! Configuration loading and management
//!
//! Configuration is loaded from `~/.config/wellspring/config.toml`
//!
//! This module follows the XDG Base Directory Specification:
//! - Config: `$XDG_CONFIG_HOME/wellspring/` (~/.config/wellspring/)
//! - Data: `$XDG_DATA_HOME/wellspring/` (~/.local/share/wellspring/)
//! - State/Logs: `$XDG_STATE_HOME/wellspring/` (~/.local/state/wellspring/)

use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::PathBuf;

/// Returns a best-effort home directory path.
fn home_dir() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Returns XDG_CONFIG_HOME or ~/.config
fn xdg_config_home() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".config"))
}

/// Returns XDG_DATA_HOME or ~/.local/share
fn xdg_data_home() -> PathBuf {
    std::env::var("XDG_DATA_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".local/share"))
}

/// Returns XDG_STATE_HOME or ~/.local/state
fn xdg_state_home() -> PathBuf {
    std::env::var("XDG_STATE_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".local/state"))
}

/// Main configuration struct
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// Analysis configuration
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Analysis tuning knobs
#[derive(Debug, Deserialize)]
pub struct AnalysisConfig {
    /// Maximum number of recent messages fed into one analysis run
    #[serde(default = "default_max_messages")]
    pub max_messages: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_messages: default_max_messages(),
        }
    }
}

fn default_max_messages() -> usize {
    500
}

/// Logging configuration
#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Maximum number of log files to keep
    #[serde(default = "default_max_log_files")]
    pub max_files: usize,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            max_files: default_max_log_files(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_max_log_files() -> usize {
    5
}

impl Config {
    /// Load configuration from the default path
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            tracing::info!("No config file found at {:?}, using defaults", config_path);
            return Ok(Config::default());
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read config file {:?}: {}", path, e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;

        if config.analysis.max_messages == 0 {
            return Err(Error::Config(
                "analysis.max_messages must be at least 1".to_string(),
            ));
        }

        Ok(config)
    }

    /// Returns the default config file path
    ///
    /// `$XDG_CONFIG_HOME/wellspring/config.toml` (~/.config/wellspring/config.toml)
    pub fn config_path() -> PathBuf {
        xdg_config_home().join("wellspring").join("config.toml")
    }

    /// Returns the data directory path (for SQLite database)
    ///
    /// `$XDG_DATA_HOME/wellspring/` (~/.local/share/wellspring/)
    pub fn data_dir() -> PathBuf {
        xdg_data_home().join("wellspring")
    }

    /// Returns the state directory path (for logs)
    ///
    /// `$XDG_STATE_HOME/wellspring/` (~/.local/state/wellspring/)
    pub fn state_dir() -> PathBuf {
        xdg_state_home().join("wellspring")
    }

    /// Returns the database file path
    ///
    /// `$XDG_DATA_HOME/wellspring/data.db` (~/.local/share/wellspring/data.db)
    pub fn database_path() -> PathBuf {
        Self::data_dir().join("data.db")
    }

    /// Returns the log file path
    ///
    /// `$XDG_STATE_HOME/wellspring/wellspring.log`
    pub fn log_path() -> PathBuf {
        Self::state_dir().join("wellspring.log")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.analysis.max_messages, 500);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.max_files, 5);
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
[analysis]
max_messages = 200

[logging]
level = "debug"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.analysis.max_messages, 200);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.max_files, 5);
    }

    #[test]
    fn test_load_from_rejects_zero_message_cap() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[analysis]\nmax_messages = 0").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_load_from_missing_file() {
        let path = PathBuf::from("/nonexistent/wellspring/config.toml");
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_paths_are_namespaced() {
        assert!(Config::config_path().ends_with("wellspring/config.toml"));
        assert!(Config::database_path().ends_with("wellspring/data.db"));
        assert!(Config::log_path().ends_with("wellspring/wellspring.log"));
    }
}
