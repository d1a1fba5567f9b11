/*
[INPUT]:  Error sources (HTTP transport, API statuses, serialization)
[OUTPUT]: Structured error types with context and retry hints
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the taskdock adapter
#[derive(Error, Debug)]
pub enum TodoError {
    /// HTTP request could not complete
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-success status
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Operation referenced a task id that is not in the local list
    #[error("Unknown task id {0}")]
    UnknownTask(i64),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl TodoError {
    /// Check if the error is retryable
    pub fn is_retryable(&self) -> bool {
        match self {
            TodoError::Http(_) => true,
            TodoError::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Check if the error is a "not found" response from the API
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            TodoError::Api {
                status: 404,
                ..
            }
        )
    }

    /// Create an API error from status code and message
    pub fn api_error(status: StatusCode, message: impl Into<String>) -> Self {
        TodoError::Api {
            status: status.as_u16(),
            message: message.into(),
        }
    }
}

/// Result type alias for taskdock operations
pub type Result<T> = std::result::Result<T, TodoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_retryable() {
        let server_err = TodoError::api_error(StatusCode::INTERNAL_SERVER_ERROR, "boom");
        assert!(server_err.is_retryable());

        let client_err = TodoError::api_error(StatusCode::BAD_REQUEST, "bad body");
        assert!(!client_err.is_retryable());

        let unknown = TodoError::UnknownTask(7);
        assert!(!unknown.is_retryable());
    }

    #[test]
    fn test_error_is_not_found() {
        assert!(TodoError::api_error(StatusCode::NOT_FOUND, "no such owner").is_not_found());
        assert!(!TodoError::api_error(StatusCode::BAD_GATEWAY, "upstream").is_not_found());
        assert!(!TodoError::Config("missing owner".to_string()).is_not_found());
    }

    #[test]
    fn test_api_error_creation() {
        let err = TodoError::api_error(StatusCode::CONFLICT, "duplicate label");
        match err {
            TodoError::Api { status, message } => {
                assert_eq!(status, 409);
                assert_eq!(message, "duplicate label");
            }
            _ => panic!("Expected Api error variant"),
        }
    }
}
