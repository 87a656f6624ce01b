//! Configuration management for the faqdesk CLI.
//!
//! This module handles loading and merging configuration from multiple
//! sources, in increasing precedence:
//! - Config file (.faqdesk/config.yaml)
//! - Environment variables
//! - Command-line flags
//!
//! All persistent state (the SQLite database) lives under `.faqdesk/`
//! inside the data directory.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{AppError, AppResult};

/// Main application configuration.
///
/// This struct holds all global options that affect CLI behavior across
/// commands.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Data directory root (contains .faqdesk/)
    pub data_dir: PathBuf,

    /// Optional config file path
    pub config_file: Option<PathBuf>,

    /// Log level override
    pub log_level: Option<String>,

    /// Verbose mode (enables debug logging)
    pub verbose: bool,

    /// Disable colored output
    pub no_color: bool,
}

/// Full configuration file structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ConfigFile {
    storage: Option<StorageConfig>,
    logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StorageConfig {
    data_dir: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct LoggingConfig {
    level: Option<String>,
    color: Option<bool>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            config_file: None,
            log_level: None,
            verbose: false,
            no_color: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables and defaults.
    ///
    /// Environment variables:
    /// - `FAQDESK_DATA_DIR`: Override the data directory
    /// - `FAQDESK_CONFIG`: Path to config file
    /// - `RUST_LOG`: Log level
    /// - `NO_COLOR`: Disable colored output
    pub fn load() -> AppResult<Self> {
        let mut config = Self::default();

        if let Ok(data_dir) = std::env::var("FAQDESK_DATA_DIR") {
            config.data_dir = PathBuf::from(data_dir);
        }

        if let Ok(config_file) = std::env::var("FAQDESK_CONFIG") {
            config.config_file = Some(PathBuf::from(config_file));
        }

        // Validate the data directory exists
        if !config.data_dir.exists() {
            return Err(AppError::Config(format!(
                "Data directory does not exist: {:?}",
                config.data_dir
            )));
        }

        // Load from YAML config file if it exists
        let config_path = if let Some(ref cf) = config.config_file {
            cf.clone()
        } else {
            config.data_dir.join(".faqdesk/config.yaml")
        };

        if config_path.exists() {
            config = config.merge_yaml(&config_path)?;
        }

        // Environment variables override YAML config
        config.log_level = std::env::var("RUST_LOG").ok().or(config.log_level);

        if std::env::var("NO_COLOR").is_ok() {
            config.no_color = true;
        }

        Ok(config)
    }

    /// Merge YAML configuration file into this config.
    fn merge_yaml(&mut self, path: &PathBuf) -> AppResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("Failed to read config file {:?}: {}", path, e))
        })?;

        let config_file: ConfigFile = serde_yaml::from_str(&contents).map_err(|e| {
            AppError::Config(format!("Failed to parse config file {:?}: {}", path, e))
        })?;

        let mut result = self.clone();

        if let Some(storage) = config_file.storage {
            if let Some(data_dir) = storage.data_dir {
                result.data_dir = PathBuf::from(data_dir);
            }
        }

        if let Some(logging) = config_file.logging {
            if let Some(level) = logging.level {
                result.log_level = Some(level);
            }
            if let Some(color) = logging.color {
                result.no_color = !color;
            }
        }

        Ok(result)
    }

    /// Apply CLI overrides to the configuration.
    ///
    /// CLI flags take precedence over environment variables and the
    /// config file.
    pub fn with_overrides(
        mut self,
        data_dir: Option<PathBuf>,
        config_file: Option<PathBuf>,
        log_level: Option<String>,
        verbose: bool,
        no_color: bool,
    ) -> Self {
        if let Some(data_dir) = data_dir {
            self.data_dir = data_dir;
        }

        if let Some(config_file) = config_file {
            self.config_file = Some(config_file);
        }

        if let Some(log_level) = log_level {
            self.log_level = Some(log_level);
        }

        if verbose {
            self.verbose = true;
            // Verbose mode implies debug logging
            if self.log_level.is_none() {
                self.log_level = Some("debug".to_string());
            }
        }

        if no_color {
            self.no_color = true;
        }

        self
    }

    /// Get the path to the .faqdesk directory.
    pub fn faqdesk_dir(&self) -> PathBuf {
        self.data_dir.join(".faqdesk")
    }

    /// Get the path to the SQLite database.
    pub fn db_path(&self) -> PathBuf {
        self.faqdesk_dir().join("faqdesk.db")
    }

    /// Ensure the .faqdesk directory exists.
    pub fn ensure_faqdesk_dir(&self) -> AppResult<()> {
        let dir = self.faqdesk_dir();
        if !dir.exists() {
            std::fs::create_dir_all(&dir).map_err(|e| {
                AppError::Config(format!("Failed to create .faqdesk directory: {}", e))
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert!(!config.verbose);
        assert!(!config.no_color);
        assert!(config.log_level.is_none());
    }

    #[test]
    fn test_db_path_under_faqdesk_dir() {
        let config = AppConfig::default();
        let db_path = config.db_path();
        assert!(db_path.ends_with(".faqdesk/faqdesk.db"));
    }

    #[test]
    fn test_with_overrides() {
        let config = AppConfig::default();
        let overridden = config.with_overrides(
            Some(PathBuf::from("/tmp")),
            None,
            None,
            true,
            true,
        );

        assert_eq!(overridden.data_dir, PathBuf::from("/tmp"));
        assert!(overridden.verbose);
        assert!(overridden.no_color);
        assert_eq!(overridden.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_explicit_log_level_wins_over_verbose() {
        let config = AppConfig::default();
        let overridden =
            config.with_overrides(None, None, Some("trace".to_string()), true, false);
        assert_eq!(overridden.log_level, Some("trace".to_string()));
    }
}
