//! Configuration management for ragchat
//!
//! This module handles loading, parsing, validating, and managing
//! configuration from files, environment variables, and CLI overrides.

use crate::error::{RagchatError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use url::Url;

/// Main configuration structure for ragchat
///
/// This structure holds all configuration needed for the client,
/// including the backend API settings and chat presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Backend API configuration
    #[serde(default)]
    pub api: ApiConfig,

    /// Chat presentation configuration
    #[serde(default)]
    pub chat: ChatConfig,
}

/// Backend API configuration
///
/// Specifies where the question-answering backend lives and how long
/// to wait for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Origin of the backend API (scheme + host + port)
    #[serde(default = "default_origin")]
    pub origin: String,

    /// Request timeout in seconds
    ///
    /// The client enforces no other bound on a question: once issued, a
    /// request runs to completion or to this transport-level timeout.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

fn default_origin() -> String {
    "http://localhost:8080".to_string()
}

fn default_timeout() -> u64 {
    120
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            origin: default_origin(),
            timeout_seconds: default_timeout(),
        }
    }
}

impl ApiConfig {
    /// Get the effective endpoint with any single trailing slash stripped
    ///
    /// # Examples
    ///
    /// ```
    /// use ragchat::config::ApiConfig;
    ///
    /// let api = ApiConfig {
    ///     origin: "http://localhost:8080/".to_string(),
    ///     ..Default::default()
    /// };
    /// assert_eq!(api.endpoint(), "http://localhost:8080");
    /// ```
    pub fn endpoint(&self) -> &str {
        self.origin.strip_suffix('/').unwrap_or(&self.origin)
    }
}

/// Chat presentation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// The assistant greeting that seeds every new transcript
    #[serde(default = "default_greeting")]
    pub greeting: String,
}

fn default_greeting() -> String {
    "Hi! Ask me anything about your documents. I will search the knowledge base and cite sources."
        .to_string()
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            greeting: default_greeting(),
        }
    }
}

impl Config {
    /// Load configuration from file with environment and CLI overrides
    ///
    /// Precedence, lowest to highest: file defaults, `RAGCHAT_*` environment
    /// variables, CLI flags.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to configuration file
    /// * `cli` - CLI arguments for overrides
    ///
    /// # Returns
    ///
    /// Returns the loaded and merged configuration
    ///
    /// # Errors
    ///
    /// Returns error if the file exists but cannot be read or parsed
    pub fn load(path: &str, cli: &crate::cli::Cli) -> Result<Self> {
        let mut config = if Path::new(path).exists() {
            Self::from_file(path)?
        } else {
            tracing::warn!("Config file not found at {}, using defaults", path);
            Self::default()
        };

        config.apply_env_vars();
        config.apply_cli_overrides(cli);

        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| RagchatError::Config(format!("Failed to read config file: {}", e)))?;
        serde_yaml::from_str(&contents)
            .map_err(|e| RagchatError::Config(format!("Failed to parse config: {}", e)).into())
    }

    fn apply_env_vars(&mut self) {
        if let Ok(origin) = std::env::var("RAGCHAT_API_URL") {
            self.api.origin = origin;
        }

        if let Ok(timeout) = std::env::var("RAGCHAT_TIMEOUT_SECONDS") {
            if let Ok(value) = timeout.parse() {
                self.api.timeout_seconds = value;
            } else {
                tracing::warn!("Invalid RAGCHAT_TIMEOUT_SECONDS: {}", timeout);
            }
        }

        if let Ok(greeting) = std::env::var("RAGCHAT_GREETING") {
            self.chat.greeting = greeting;
        }
    }

    fn apply_cli_overrides(&mut self, cli: &crate::cli::Cli) {
        if let Some(endpoint) = &cli.endpoint {
            self.api.origin = endpoint.clone();
        }
    }

    /// Validate the configuration
    ///
    /// # Returns
    ///
    /// Returns Ok(()) if the configuration is usable
    ///
    /// # Errors
    ///
    /// Returns error if the origin is not an absolute http(s) URL or the
    /// timeout is zero
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(self.api.endpoint()).map_err(|e| {
            RagchatError::Config(format!("Invalid API origin '{}': {}", self.api.origin, e))
        })?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(RagchatError::Config(format!(
                "Unsupported API origin scheme: {}",
                url.scheme()
            ))
            .into());
        }

        if self.api.timeout_seconds == 0 {
            return Err(RagchatError::Config("timeout_seconds must be non-zero".to_string()).into());
        }

        if self.chat.greeting.trim().is_empty() {
            return Err(RagchatError::Config("greeting must not be empty".to_string()).into());
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            chat: ChatConfig::default(),
        }
    }
}
