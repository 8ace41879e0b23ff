//! Keychain error types

use thiserror::Error;

/// Errors raised by a [`super::KeychainBackend`]
#[derive(Debug, Error)]
pub enum KeychainError {
    #[error("entry not found")]
    NotFound,

    #[error("keychain backend error: {0}")]
    Backend(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<keyring::Error> for KeychainError {
    fn from(err: keyring::Error) -> Self {
        match err {
            keyring::Error::NoEntry => Self::NotFound,
            other => Self::Backend(other.to_string()),
        }
    }
}
