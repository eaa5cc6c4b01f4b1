//! Configuration management for the moodlog application.
//!
//! This module handles loading and validating configuration settings from environment
//! variables, with sensible defaults.
//!
//! # Environment Variables
//!
//! - `MOODLOG_DIR`: Directory holding the mood data (defaults to ~/.local/share/moodlog)
//! - `MOODLOG_LOG_FORMAT`: `text` or `json` (defaults to `text`)
//! - `MOODLOG_LOG_LEVEL`: Default log level when `RUST_LOG` is unset (defaults to `info`)
//! - `HOME`: Used for expanding the default data directory path

use crate::constants::{
    DEFAULT_DATA_SUBDIR, DEFAULT_LOG_LEVEL, ENV_VAR_HOME, ENV_VAR_MOODLOG_DIR,
    ENV_VAR_MOODLOG_LOG_FORMAT, ENV_VAR_MOODLOG_LOG_LEVEL, REDACTED_PLACEHOLDER,
};
use crate::errors::{AppError, AppResult};
use crate::logging::LogFormat;
use std::env;
use std::fmt;
use std::path::PathBuf;

/// Configuration for the moodlog application.
///
/// # Examples
///
/// Creating a configuration manually:
/// ```
/// use moodlog::Config;
/// use moodlog::logging::LogFormat;
/// use std::path::PathBuf;
///
/// let config = Config {
///     data_dir: PathBuf::from("/path/to/moods"),
///     log_format: LogFormat::Json,
///     log_level: "debug".to_string(),
/// };
/// assert!(config.validate().is_ok());
/// ```
pub struct Config {
    /// Directory where the mood blob is stored.
    ///
    /// Loaded from `MOODLOG_DIR` with a fallback to ~/.local/share/moodlog.
    pub data_dir: PathBuf,

    /// Output format for log lines on stderr.
    pub log_format: LogFormat,

    /// Default log filter directive, overridden by `RUST_LOG`.
    pub log_level: String,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("data_dir", &REDACTED_PLACEHOLDER)
            .field("log_format", &self.log_format)
            .field("log_level", &self.log_level)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_dir: PathBuf::from(""),
            log_format: LogFormat::Text,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables with sensible defaults.
    ///
    /// The data directory is expanded with `shellexpand`, so `~` and `$VAR`
    /// references work.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if:
    /// - The data directory path expansion fails or yields an empty path
    /// - `MOODLOG_LOG_FORMAT` is neither `text` nor `json`
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use moodlog::Config;
    ///
    /// match Config::load() {
    ///     Ok(config) => println!("Storing moods in {}", config.data_dir.display()),
    ///     Err(err) => eprintln!("Failed to load config: {}", err),
    /// }
    /// ```
    pub fn load() -> AppResult<Self> {
        let data_dir_str = env::var(ENV_VAR_MOODLOG_DIR).unwrap_or_else(|_| {
            let home = env::var(ENV_VAR_HOME).unwrap_or_default();
            format!("{}/{}", home, DEFAULT_DATA_SUBDIR)
        });

        let expanded_path = shellexpand::full(&data_dir_str)
            .map_err(|e| AppError::Config(format!("Failed to expand path: {}", e)))?;
        let data_dir = PathBuf::from(expanded_path.into_owned());

        if data_dir.as_os_str().is_empty() {
            return Err(AppError::Config("Data directory path is empty".to_string()));
        }

        let log_format = match env::var(ENV_VAR_MOODLOG_LOG_FORMAT) {
            Ok(raw) => raw.parse::<LogFormat>().map_err(AppError::Config)?,
            Err(_) => LogFormat::Text,
        };

        let log_level =
            env::var(ENV_VAR_MOODLOG_LOG_LEVEL).unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());

        Ok(Config {
            data_dir,
            log_format,
            log_level,
        })
    }

    /// Validates that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` with one of the following messages:
    /// - "Data directory path is empty"
    /// - "Data directory must be an absolute path"
    /// - "Log level is empty"
    pub fn validate(&self) -> AppResult<()> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(AppError::Config("Data directory path is empty".to_string()));
        }

        if !self.data_dir.is_absolute() {
            return Err(AppError::Config(
                "Data directory must be an absolute path".to_string(),
            ));
        }

        if self.log_level.trim().is_empty() {
            return Err(AppError::Config("Log level is empty".to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    fn clear_env() {
        env::remove_var(ENV_VAR_MOODLOG_DIR);
        env::remove_var(ENV_VAR_MOODLOG_LOG_FORMAT);
        env::remove_var(ENV_VAR_MOODLOG_LOG_LEVEL);
    }

    #[test]
    fn test_debug_impl_redacts_data_dir() {
        let config = Config {
            data_dir: PathBuf::from("/home/username/private/moods"),
            ..Config::default()
        };

        let debug_output = format!("{:?}", config);
        assert!(debug_output.contains(REDACTED_PLACEHOLDER));
        assert!(!debug_output.contains("/home/username/private/moods"));
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.data_dir, PathBuf::from(""));
        assert_eq!(config.log_format, LogFormat::Text);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    #[serial]
    fn test_load_with_custom_dir() {
        clear_env();
        let temp_dir = tempdir().unwrap();
        let dir_path = temp_dir.path().to_string_lossy().to_string();

        env::set_var(ENV_VAR_MOODLOG_DIR, &dir_path);
        let config = Config::load().unwrap();
        clear_env();

        assert_eq!(config.data_dir, PathBuf::from(dir_path));
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_load_log_settings() {
        clear_env();
        env::set_var(ENV_VAR_MOODLOG_DIR, "/tmp/moodlog-config-test");
        env::set_var(ENV_VAR_MOODLOG_LOG_FORMAT, "JSON");
        env::set_var(ENV_VAR_MOODLOG_LOG_LEVEL, "debug");

        let config = Config::load().unwrap();
        clear_env();

        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    #[serial]
    fn test_load_rejects_unknown_log_format() {
        clear_env();
        env::set_var(ENV_VAR_MOODLOG_DIR, "/tmp/moodlog-config-test");
        env::set_var(ENV_VAR_MOODLOG_LOG_FORMAT, "yaml");

        let result = Config::load();
        clear_env();

        match result {
            Err(AppError::Config(message)) => assert!(message.contains("yaml")),
            _ => panic!("Expected Config error for unknown log format"),
        }
    }

    #[test]
    fn test_validate_empty_data_dir() {
        let config = Config::default();
        match config.validate() {
            Err(AppError::Config(message)) => {
                assert!(message.contains("Data directory path is empty"))
            }
            _ => panic!("Expected Config error about empty data directory"),
        }
    }

    #[test]
    fn test_validate_relative_data_dir() {
        let config = Config {
            data_dir: PathBuf::from("relative/path"),
            ..Config::default()
        };
        match config.validate() {
            Err(AppError::Config(message)) => assert!(message.contains("must be an absolute path")),
            _ => panic!("Expected Config error about relative path"),
        }
    }

    #[test]
    fn test_validate_empty_log_level() {
        let config = Config {
            data_dir: PathBuf::from("/some/path"),
            log_level: " ".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
