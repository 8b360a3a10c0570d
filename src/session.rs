//! Persistent session identifier storage
//!
//! The backend correlates follow-up questions through an opaque session
//! identifier. This module stores exactly one such identifier per user as a
//! small file in the platform data directory, generating it lazily on first
//! use and reusing it on every subsequent run.

use crate::error::{RagchatError, Result};
use rand::Rng;
use std::path::{Path, PathBuf};

/// File name of the single persisted key
const SESSION_FILE: &str = "session_id";

/// Prefix identifying tokens minted by this client
const TOKEN_PREFIX: &str = "cli-";

/// Number of random characters following the prefix
const TOKEN_LEN: usize = 8;

const TOKEN_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Store for the persisted session identifier
///
/// The identifier is a correlation token, not a credential: it is generated
/// from a non-cryptographic random source and must never be used for
/// authentication.
///
/// # Examples
///
/// ```no_run
/// use ragchat::session::SessionStore;
///
/// # fn example() -> ragchat::error::Result<()> {
/// let store = SessionStore::new()?;
/// let id = store.load_or_create()?;
/// assert!(id.starts_with("cli-"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Create a store rooted at the platform data directory
    ///
    /// # Errors
    ///
    /// Returns error if no home directory can be determined
    pub fn new() -> Result<Self> {
        let dirs = directories::ProjectDirs::from("", "", "ragchat").ok_or_else(|| {
            RagchatError::Session("Could not determine a data directory".to_string())
        })?;
        Ok(Self {
            path: dirs.data_dir().join(SESSION_FILE),
        })
    }

    /// Create a store backed by an explicit file path
    ///
    /// Used by tests and by callers that want full control over where the
    /// identifier lives.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the persisted identifier, generating and persisting a new one
    /// if none exists
    ///
    /// Repeated calls against the same storage return the same token
    /// unchanged. The store never rewrites an existing identifier.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or written
    pub fn load_or_create(&self) -> Result<String> {
        if self.path.exists() {
            let existing = std::fs::read_to_string(&self.path)
                .map_err(|e| RagchatError::Session(format!("Failed to read session file: {}", e)))?;
            let existing = existing.trim();
            if !existing.is_empty() {
                tracing::debug!("Reusing session identifier from {}", self.path.display());
                return Ok(existing.to_string());
            }
        }

        let token = generate_token();
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                RagchatError::Session(format!("Failed to create session directory: {}", e))
            })?;
        }
        std::fs::write(&self.path, &token)
            .map_err(|e| RagchatError::Session(format!("Failed to write session file: {}", e)))?;

        tracing::info!("Generated new session identifier");
        Ok(token)
    }

    /// Delete the persisted identifier, if any
    ///
    /// The next call to [`load_or_create`](Self::load_or_create) mints a
    /// fresh token.
    ///
    /// # Errors
    ///
    /// Returns error if the file exists but cannot be removed
    pub fn reset(&self) -> Result<()> {
        if self.path.exists() {
            std::fs::remove_file(&self.path).map_err(|e| {
                RagchatError::Session(format!("Failed to remove session file: {}", e))
            })?;
            tracing::info!("Session identifier removed");
        }
        Ok(())
    }
}

/// Generate a fresh session token
///
/// Format: `cli-` followed by eight lowercase alphanumeric characters.
fn generate_token() -> String {
    let mut rng = rand::rng();
    let suffix: String = (0..TOKEN_LEN)
        .map(|_| TOKEN_CHARS[rng.random_range(0..TOKEN_CHARS.len())] as char)
        .collect();
    format!("{}{}", TOKEN_PREFIX, suffix)
}
