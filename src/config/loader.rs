use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/quizbox/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("quizbox").join("config.toml")
    }

    /// Loads configuration from `path`. Call `validate` once overrides are applied.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - Questions last at least one second
    /// - The answer delay ends before the question does
    /// - The source has a URL and a non-zero limit
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.quiz.question_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "quiz.question_seconds must be greater than zero".to_string(),
            });
        }

        if self.quiz.answer_delay_seconds >= self.quiz.question_seconds {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "quiz.answer_delay_seconds ({}) must be less than quiz.question_seconds ({})",
                    self.quiz.answer_delay_seconds, self.quiz.question_seconds
                ),
            });
        }

        if self.source.url.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "source.url must not be empty".to_string(),
            });
        }

        if self.source.limit == 0 {
            return Err(ConfigError::ValidationError {
                message: "source.limit must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}
