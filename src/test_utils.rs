//! Test utilities for ragchat
//!
//! This module provides common test utilities including temporary
//! directory management and assertion helpers.

use crate::config::Config;
use crate::error::Result;
use tempfile::TempDir;

/// Create a temporary directory for testing
///
/// # Returns
///
/// Returns a TempDir that will be cleaned up when dropped
pub fn temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Assert that an error contains the expected message
///
/// # Arguments
///
/// * `result` - Result to check
/// * `expected` - Expected error message substring
///
/// # Panics
///
/// Panics if the result is Ok or if the error doesn't contain the expected message
pub fn assert_error_contains<T>(result: Result<T>, expected: &str) {
    match result {
        Ok(_) => panic!("Expected error containing '{}' but got Ok", expected),
        Err(e) => {
            let error_msg = e.to_string();
            assert!(
                error_msg.contains(expected),
                "Error message '{}' does not contain '{}'",
                error_msg,
                expected
            );
        }
    }
}

/// Create a test configuration with default values
///
/// # Returns
///
/// Returns a Config instance suitable for testing
pub fn test_config() -> Config {
    Config::default()
}

/// Create a test configuration YAML string
///
/// # Returns
///
/// Returns a YAML string with test configuration
pub fn test_config_yaml() -> String {
    r#"
api:
  origin: http://file.example.com
  timeout_seconds: 10

chat:
  greeting: Hello from the test suite!
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RagchatError;

    #[test]
    fn test_temp_dir_creation() {
        let dir = temp_dir();
        assert!(dir.path().exists());
    }

    #[test]
    fn test_assert_error_contains_success() {
        let result: Result<()> = Err(RagchatError::Config("test error message".to_string()).into());
        assert_error_contains(result, "test error");
    }

    #[test]
    #[should_panic(expected = "Expected error containing")]
    fn test_assert_error_contains_ok() {
        let result: Result<()> = Ok(());
        assert_error_contains(result, "error");
    }

    #[test]
    #[should_panic(expected = "does not contain")]
    fn test_assert_error_contains_wrong_message() {
        let result: Result<()> = Err(RagchatError::Config("different error".to_string()).into());
        assert_error_contains(result, "not present");
    }

    #[test]
    fn test_test_config() {
        let config = test_config();
        assert_eq!(config.api.origin, "http://localhost:8080");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_test_config_yaml() {
        let yaml = test_config_yaml();
        assert!(yaml.contains("api:"));
        assert!(yaml.contains("chat:"));
        let config: Config = serde_yaml::from_str(&yaml).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.api.origin, "http://file.example.com");
        assert_eq!(config.api.timeout_seconds, 10);
    }
}
