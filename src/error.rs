//! Error types for ragchat
//!
//! This module defines all error types used throughout the application,
//! using `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Main error type for ragchat operations
///
/// This enum encompasses all possible errors that can occur during
/// configuration loading, session storage, and API interactions.
#[derive(Error, Debug)]
pub enum RagchatError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Session identifier storage errors
    #[error("Session error: {0}")]
    Session(String),

    /// Backend returned a non-success HTTP status
    ///
    /// The response body is read as plain text and carried verbatim;
    /// the backend's error schema is deliberately not parsed.
    #[error("HTTP {status}: {body}")]
    Api { status: u16, body: String },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// HTTP transport errors (connection refused, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type alias for ragchat operations
///
/// This is a convenience alias that uses `anyhow::Error` as the error type,
/// allowing for rich error context and easy error propagation.
pub type Result<T> = anyhow::Result<T>;
