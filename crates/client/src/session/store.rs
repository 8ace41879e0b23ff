//! Fail-open session store
//!
//! Persists the bearer token and the last-fetched user record under
//! fixed keys. Reads and writes never raise: any backend failure is
//! logged at `warn` and treated as "value absent", so a broken keychain
//! degrades to a logged-out session instead of an error surface.

use std::sync::Arc;

use courtside_domain::UserProfile;
use tracing::warn;

use super::error::KeychainError;
use super::keychain::KeychainBackend;

const TOKEN_KEY: &str = "auth.token";
const USER_KEY: &str = "auth.user";

/// Durable storage for the signed-in session
pub struct SessionStore {
    backend: Arc<dyn KeychainBackend>,
}

impl SessionStore {
    /// Create a store over the given backend
    pub fn new(backend: Arc<dyn KeychainBackend>) -> Self {
        Self { backend }
    }

    /// The stored bearer token, or `None` when logged out or when the
    /// backend fails
    pub async fn token(&self) -> Option<String> {
        match self.backend.get_secret(TOKEN_KEY).await {
            Ok(token) => Some(token),
            Err(KeychainError::NotFound) => None,
            Err(err) => {
                warn!(error = %err, "failed to read stored token; treating session as logged out");
                None
            }
        }
    }

    /// Store or clear the bearer token; persisted immediately
    pub async fn set_token(&self, token: Option<&str>) {
        let result = match token {
            Some(value) => self.backend.set_secret(TOKEN_KEY, value).await,
            None => match self.backend.delete_secret(TOKEN_KEY).await {
                // Clearing an already-absent token is a no-op
                Err(KeychainError::NotFound) => Ok(()),
                other => other,
            },
        };

        if let Err(err) = result {
            warn!(error = %err, "failed to persist token");
        }
    }

    /// The cached user record, or `None` when absent, undecodable, or
    /// the backend fails
    pub async fn user(&self) -> Option<UserProfile> {
        let raw = match self.backend.get_secret(USER_KEY).await {
            Ok(raw) => raw,
            Err(KeychainError::NotFound) => return None,
            Err(err) => {
                warn!(error = %err, "failed to read stored user record");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(err) => {
                warn!(error = %err, "stored user record is not decodable; ignoring it");
                None
            }
        }
    }

    /// Store or clear the cached user record, serialized as JSON text
    pub async fn set_user(&self, user: Option<&UserProfile>) {
        let result = match user {
            Some(user) => match serde_json::to_string(user) {
                Ok(raw) => self.backend.set_secret(USER_KEY, &raw).await,
                Err(err) => Err(KeychainError::from(err)),
            },
            None => match self.backend.delete_secret(USER_KEY).await {
                Err(KeychainError::NotFound) => Ok(()),
                other => other,
            },
        };

        if let Err(err) = result {
            warn!(error = %err, "failed to persist user record");
        }
    }

    /// Clear both the token and the user record
    pub async fn clear(&self) {
        self.set_token(None).await;
        self.set_user(None).await;
    }
}
