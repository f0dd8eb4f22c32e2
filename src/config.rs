//! Configuration management for the assistant bot.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file in the working directory is loaded first if present.

use crate::error::{ConfigError, ConfigResult};
use chrono::NaiveDate;
use std::env;

/// Default prompt shown before each command.
pub const DEFAULT_PROMPT: &str = "Enter a command: ";

/// Configuration for the assistant bot.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level used when `RUST_LOG` is not set (default: "error")
    pub log_level: String,

    /// Prompt printed before reading each command
    pub prompt: String,

    /// Fixed "today" for the birthday schedule; the local date when unset
    pub today: Option<NaiveDate>,

    /// Minimum similarity (0-100) for a "did you mean" hint (default: 60)
    pub suggestion_threshold: u8,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ASSISTANT_LOG_LEVEL`: Logging level (default: "error")
    /// - `ASSISTANT_PROMPT`: Command prompt (default: "Enter a command: ")
    /// - `ASSISTANT_TODAY`: Pin today's date, `YYYY-MM-DD`
    /// - `ASSISTANT_SUGGESTION_THRESHOLD`: Min similarity for hints (default: 60)
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine; a malformed one is not
        match dotenvy::dotenv() {
            Ok(_) => {}
            Err(e) if e.not_found() => {}
            Err(e) => return Err(ConfigError::DotenvError(e.to_string())),
        }

        let log_level = env::var("ASSISTANT_LOG_LEVEL").unwrap_or_else(|_| "error".to_string());
        let prompt = env::var("ASSISTANT_PROMPT").unwrap_or_else(|_| DEFAULT_PROMPT.to_string());
        let today = Self::parse_env_date("ASSISTANT_TODAY")?;
        let suggestion_threshold = Self::parse_env_u8("ASSISTANT_SUGGESTION_THRESHOLD", 60)?;

        if suggestion_threshold > 100 {
            return Err(ConfigError::InvalidValue {
                var: "ASSISTANT_SUGGESTION_THRESHOLD".to_string(),
                reason: "Must be between 0 and 100".to_string(),
            });
        }

        Ok(Config {
            log_level,
            prompt,
            today,
            suggestion_threshold,
        })
    }

    /// The date the birthday schedule is computed against.
    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| chrono::Local::now().date_naive())
    }

    /// Parse an optional `YYYY-MM-DD` environment variable.
    fn parse_env_date(var_name: &str) -> ConfigResult<Option<NaiveDate>> {
        match env::var(var_name) {
            Ok(val) => NaiveDate::parse_from_str(val.trim(), "%Y-%m-%d")
                .map(Some)
                .map_err(|_| ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be a date in YYYY-MM-DD format, got: {}", val),
                }),
            Err(_) => Ok(None),
        }
    }

    /// Parse an environment variable as u8 with a default value.
    fn parse_env_u8(var_name: &str, default: u8) -> ConfigResult<u8> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u8>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a number between 0-255, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "error".to_string(),
            prompt: DEFAULT_PROMPT.to_string(),
            today: None,
            suggestion_threshold: 60,
        }
    }
}
