//! Configuration management for the `endpoint-check` binary.
//!
//! This module handles loading and validating configuration from environment
//! variables, reading a `.env` file first when one is present.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::str::FromStr;

/// How `endpoint-check` reports each record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One rendered endpoint (or error) per line
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::InvalidValue {
                var: "ENDPOINT_OUTPUT_FORMAT".to_string(),
                reason: format!("Must be one of: text, json, got: {}", other),
            }),
        }
    }
}

/// Configuration for the `endpoint-check` binary.
#[derive(Debug, Clone)]
pub struct Config {
    /// Output format (default: text)
    pub output_format: OutputFormat,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ENDPOINT_OUTPUT_FORMAT`: `text` or `json` (default: text)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is not an error
        let _ = dotenvy::dotenv();

        let output_format = match env::var("ENDPOINT_OUTPUT_FORMAT") {
            Ok(val) => val.parse()?,
            Err(_) => OutputFormat::default(),
        };

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            output_format,
            log_level,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            output_format: OutputFormat::Text,
            log_level: "error".to_string(),
        }
    }
}
