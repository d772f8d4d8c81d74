use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::errors::AppError;

/// Application configuration module
/// This module handles loading and validating the JSON configuration of the
/// direct translator, and the defaults of the placeholder workflow.
/// Represents the direct translator configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// API key for the chat endpoint (required)
    pub api_key: String,

    /// Model identifier sent with every request
    #[serde(default = "default_anthropic_model")]
    pub model: String,

    /// Maximum number of output tokens
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Service endpoint URL
    #[serde(default = "default_anthropic_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Settings for the placeholder-protected workflow
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PlaceholderConfig {
    /// Local model used for analysis (and for the model backend)
    #[serde(default = "default_ollama_model")]
    pub model: String,

    /// Local model server URL
    #[serde(default = "default_ollama_endpoint")]
    pub endpoint: String,

    /// Decoding temperature for analysis requests
    #[serde(default = "default_analysis_temperature")]
    pub temperature: f32,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Language name the templates are translated into
    #[serde(default = "default_target_language")]
    pub target_language: String,
}

impl Default for PlaceholderConfig {
    fn default() -> Self {
        Self {
            model: default_ollama_model(),
            endpoint: default_ollama_endpoint(),
            temperature: default_analysis_temperature(),
            timeout_secs: default_timeout_secs(),
            target_language: default_target_language(),
        }
    }
}

fn default_max_tokens() -> u32 {
    4000
}

fn default_timeout_secs() -> u64 {
    120
}

fn default_analysis_temperature() -> f32 {
    0.1
}

fn default_anthropic_endpoint() -> String {
    "https://api.anthropic.com".to_string()
}

fn default_anthropic_model() -> String {
    "claude-3-5-sonnet-20241022".to_string()
}

fn default_ollama_endpoint() -> String {
    "http://localhost:11434".to_string()
}

fn default_ollama_model() -> String {
    "translation-helper".to_string()
}

fn default_target_language() -> String {
    "Japanese".to_string()
}

impl Config {
    /// Create a configuration with defaults for everything but the API key
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: default_anthropic_model(),
            max_tokens: default_max_tokens(),
            endpoint: default_anthropic_endpoint(),
            timeout_secs: default_timeout_secs(),
            log_level: LogLevel::default(),
        }
    }

    /// Load and validate a configuration file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, AppError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AppError::Config(format!("Config file not found: {}", path.display()))
            } else {
                AppError::Config(format!("Failed to open config file {}: {}", path.display(), e))
            }
        })?;

        let config: Config = serde_json::from_reader(BufReader::new(file)).map_err(|e| {
            if e.is_data() && e.to_string().contains("missing field `api_key`") {
                AppError::Config(format!("api_key not found in config file: {}", path.display()))
            } else {
                AppError::Config(format!("Invalid JSON in config file {}: {}", path.display(), e))
            }
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration for required values
    pub fn validate(&self) -> Result<(), AppError> {
        if self.api_key.trim().is_empty() {
            return Err(AppError::Config("api_key must not be empty".to_string()));
        }

        if self.max_tokens == 0 {
            return Err(AppError::Config("max_tokens must be greater than zero".to_string()));
        }

        if self.timeout_secs == 0 {
            return Err(AppError::Config("timeout_secs must be greater than zero".to_string()));
        }

        Ok(())
    }
}
