//! In-memory keychain backend
//!
//! Used in tests and on hosts without a platform keychain. Holds secrets
//! in a mutex-guarded map; writes are last-write-wins.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::Mutex;

use super::error::KeychainError;
use super::keychain::KeychainBackend;

/// Volatile secret storage
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryBackend {
    /// Create an empty backend
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeychainBackend for MemoryBackend {
    async fn get_secret(&self, key: &str) -> Result<String, KeychainError> {
        self.entries.lock().get(key).cloned().ok_or(KeychainError::NotFound)
    }

    async fn set_secret(&self, key: &str, value: &str) -> Result<(), KeychainError> {
        self.entries.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn delete_secret(&self, key: &str) -> Result<(), KeychainError> {
        match self.entries.lock().remove(key) {
            Some(_) => Ok(()),
            None => Err(KeychainError::NotFound),
        }
    }
}
