//! API-specific error types
//!
//! Provides error classification for API operations. Failures are
//! terminal: this layer performs no retries, so errors carry only the
//! user-facing message and their HTTP classification.

use std::time::Duration;

use thiserror::Error;

/// API operation errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Rate limit exceeded: {0}")]
    RateLimit(String),

    #[error("Server error: {0}")]
    Server(String),

    #[error("Client error: {0}")]
    Client(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Request timeout after {0:?}")]
    Timeout(Duration),
}

impl ApiError {
    /// The user-facing message: the server-supplied or synthesized text
    /// for HTTP failures, without the category prefix `Display` adds.
    pub fn message(&self) -> String {
        match self {
            Self::Auth(msg)
            | Self::RateLimit(msg)
            | Self::Server(msg)
            | Self::Client(msg)
            | Self::Network(msg)
            | Self::Config(msg) => msg.clone(),
            Self::Timeout(_) => "Request timeout".to_string(),
        }
    }

    /// Classify a non-success HTTP status, carrying the resolved message
    pub fn from_status(status: reqwest::StatusCode, message: String) -> Self {
        use reqwest::StatusCode;

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            Self::Auth(message)
        } else if status == StatusCode::TOO_MANY_REQUESTS {
            Self::RateLimit(message)
        } else if status.is_server_error() {
            Self::Server(message)
        } else if status.is_client_error() {
            Self::Client(message)
        } else {
            Self::Network(message)
        }
    }
}

#[cfg(test)]
mod tests {
    use reqwest::StatusCode;

    use super::*;

    #[test]
    fn status_classification() {
        assert!(matches!(
            ApiError::from_status(StatusCode::UNAUTHORIZED, "no".into()),
            ApiError::Auth(_)
        ));
        assert!(matches!(
            ApiError::from_status(StatusCode::FORBIDDEN, "no".into()),
            ApiError::Auth(_)
        ));
        assert!(matches!(
            ApiError::from_status(StatusCode::TOO_MANY_REQUESTS, "slow down".into()),
            ApiError::RateLimit(_)
        ));
        assert!(matches!(
            ApiError::from_status(StatusCode::INTERNAL_SERVER_ERROR, "boom".into()),
            ApiError::Server(_)
        ));
        assert!(matches!(
            ApiError::from_status(StatusCode::NOT_FOUND, "missing".into()),
            ApiError::Client(_)
        ));
    }

    #[test]
    fn message_returns_exact_text() {
        let err = ApiError::from_status(StatusCode::NOT_FOUND, "Not found".to_string());
        assert_eq!(err.message(), "Not found");
        // Display keeps the category prefix
        assert_eq!(err.to_string(), "Client error: Not found");
    }

    #[test]
    fn timeout_has_distinct_message() {
        let err = ApiError::Timeout(Duration::from_secs(10));
        assert_eq!(err.message(), "Request timeout");
    }
}
