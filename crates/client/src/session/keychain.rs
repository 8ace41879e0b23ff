//! Platform keychain backend
//!
//! Secrets are stored via the OS keychain (macOS Keychain, Windows
//! Credential Manager, Linux Secret Service) under a service-scoped
//! entry per key.

use async_trait::async_trait;
use keyring::Entry;
use tracing::debug;

use super::error::KeychainError;

/// Backend abstraction for secret storage.
///
/// Individual get/set/delete operations are atomic; compound
/// read-modify-write sequences are not, and concurrent writers are
/// last-write-wins.
#[async_trait]
pub trait KeychainBackend: Send + Sync {
    /// Read the secret stored under `key`
    async fn get_secret(&self, key: &str) -> Result<String, KeychainError>;

    /// Store `value` under `key`, replacing any previous value
    async fn set_secret(&self, key: &str, value: &str) -> Result<(), KeychainError>;

    /// Remove the secret stored under `key`
    async fn delete_secret(&self, key: &str) -> Result<(), KeychainError>;
}

/// Keychain-backed secret storage scoped to a service name
pub struct Keychain {
    service: String,
}

impl Keychain {
    /// Create a keychain accessor for the given service name
    /// (e.g., "Courtside")
    pub fn new(service: impl Into<String>) -> Self {
        Self { service: service.into() }
    }

    fn entry(&self, key: &str) -> Result<Entry, KeychainError> {
        Entry::new(&self.service, key).map_err(KeychainError::from)
    }
}

#[async_trait]
impl KeychainBackend for Keychain {
    async fn get_secret(&self, key: &str) -> Result<String, KeychainError> {
        self.entry(key)?.get_password().map_err(KeychainError::from)
    }

    async fn set_secret(&self, key: &str, value: &str) -> Result<(), KeychainError> {
        debug!(service = %self.service, key = %key, "storing secret");
        self.entry(key)?.set_password(value).map_err(KeychainError::from)
    }

    async fn delete_secret(&self, key: &str) -> Result<(), KeychainError> {
        debug!(service = %self.service, key = %key, "deleting secret");
        self.entry(key)?.delete_credential().map_err(KeychainError::from)
    }
}
