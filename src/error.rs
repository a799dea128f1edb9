//! Error types for the coverage-agent CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::config::API_KEY_ENV;
use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for coverage-agent operations.
///
/// A missing prompt template is deliberately absent here: it degrades to
/// [`crate::prompt::PromptStatus::TemplateMissing`] instead of failing.
#[derive(Error, Debug)]
pub enum CoverageError {
    /// Manual mode needs an API key and none was given.
    #[error(
        "Testomatio API key is required\n   Set {} environment variable or use --api-key option",
        API_KEY_ENV
    )]
    MissingCredential,

    /// Pulling tests from the remote service failed.
    #[error("Failed to pull tests: {0}")]
    Fetch(String),

    /// A filesystem operation failed.
    #[error("{action} '{}': {source}", .path.display())]
    Io {
        /// What was being attempted, e.g. "failed to create directory".
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CoverageError {
    /// Builds an [`CoverageError::Io`] for the given path.
    pub fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CoverageError::Io {
            action,
            path: path.into(),
            source,
        }
    }

    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            CoverageError::MissingCredential => exit_codes::USER_ERROR,
            CoverageError::Fetch(_) => exit_codes::FETCH_FAILURE,
            CoverageError::Io { .. } => exit_codes::USER_ERROR,
        }
    }
}

/// Result type alias for coverage-agent operations.
pub type Result<T> = std::result::Result<T, CoverageError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn missing_credential_has_correct_exit_code() {
        assert_eq!(
            CoverageError::MissingCredential.exit_code(),
            exit_codes::USER_ERROR
        );
    }

    #[test]
    fn fetch_error_has_correct_exit_code() {
        let err = CoverageError::Fetch("connection refused".to_string());
        assert_eq!(err.exit_code(), exit_codes::FETCH_FAILURE);
    }

    #[test]
    fn io_error_has_correct_exit_code() {
        let err = CoverageError::io(
            "failed to create directory",
            "/nope",
            io::Error::from(io::ErrorKind::PermissionDenied),
        );
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn missing_credential_message_spans_two_lines() {
        let message = CoverageError::MissingCredential.to_string();
        let lines: Vec<&str> = message.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "Testomatio API key is required");
        assert_eq!(
            lines[1],
            "   Set TESTOMATIO environment variable or use --api-key option"
        );
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = CoverageError::Fetch("status 401".to_string());
        assert_eq!(err.to_string(), "Failed to pull tests: status 401");

        let err = CoverageError::io(
            "failed to write prompt file",
            "/tmp/prompt.md",
            io::Error::other("disk full"),
        );
        assert_eq!(
            err.to_string(),
            "failed to write prompt file '/tmp/prompt.md': disk full"
        );
    }
}
