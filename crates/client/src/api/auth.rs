//! Authentication facade
//!
//! Login and register persist the issued token and user record into the
//! session store before returning; logout clears them. The remote logout
//! call is best-effort — a failing backend never leaves a half-signed-in
//! session behind.

use std::sync::Arc;

use courtside_domain::{NewUser, UserProfile};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use super::client::{ApiClient, Envelope};
use super::errors::ApiError;
use crate::session::SessionStore;

/// Credentials payload for `/auth/login`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Token + user issued on successful login or registration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthPayload {
    pub token: String,
    pub user: UserProfile,
}

/// Authentication operations
pub struct AuthApi {
    client: Arc<ApiClient>,
    session: Arc<SessionStore>,
}

impl AuthApi {
    /// Create a new auth facade
    pub fn new(client: Arc<ApiClient>, session: Arc<SessionStore>) -> Self {
        Self { client, session }
    }

    /// Sign in with email and password.
    ///
    /// On success the issued token and user record are persisted before
    /// the envelope is returned, so a subsequent [`Self::current_user`]
    /// needs no network call.
    ///
    /// # Errors
    ///
    /// Returns error if the credentials are rejected or the request
    /// fails.
    #[instrument(skip(self, password), fields(email = %email))]
    pub async fn login(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Envelope<AuthPayload>, ApiError> {
        let request =
            LoginRequest { email: email.to_string(), password: password.to_string() };
        let envelope: Envelope<AuthPayload> = self.client.post("/auth/login", &request).await?;

        self.session.set_token(Some(&envelope.data.token)).await;
        self.session.set_user(Some(&envelope.data.user)).await;

        info!("login successful");
        Ok(envelope)
    }

    /// Create an account; persists the issued session like [`Self::login`].
    ///
    /// # Errors
    ///
    /// Returns error if registration is rejected or the request fails.
    #[instrument(skip(self, new_user), fields(email = %new_user.email))]
    pub async fn register(&self, new_user: &NewUser) -> Result<Envelope<AuthPayload>, ApiError> {
        let envelope: Envelope<AuthPayload> =
            self.client.post("/auth/register", new_user).await?;

        self.session.set_token(Some(&envelope.data.token)).await;
        self.session.set_user(Some(&envelope.data.user)).await;

        info!("registration successful");
        Ok(envelope)
    }

    /// Sign out.
    ///
    /// The remote revocation call is best-effort: its failure is logged
    /// and the local token and user record are cleared regardless, so
    /// the session always reads as logged out afterwards.
    #[instrument(skip(self))]
    pub async fn logout(&self) {
        let result: Result<Envelope<serde_json::Value>, ApiError> =
            self.client.post("/auth/logout", &serde_json::json!({})).await;
        if let Err(err) = result {
            warn!(error = %err, "remote logout failed; clearing local session anyway");
        }

        self.session.clear().await;
        info!("session cleared");
    }

    /// The locally persisted user record; no network call is made
    pub async fn current_user(&self) -> Option<UserProfile> {
        self.session.user().await
    }
}
