//! Courtside API client
//!
//! This module provides the HTTP-based API client for the Courtside
//! backend. It handles authentication, envelope decoding, and the typed
//! per-resource facades.
//!
//! # Architecture
//!
//! - One explicitly constructed [`ApiClient`] over the shared
//!   [`crate::http::HttpClient`] (no direct reqwest in facades)
//! - Bearer tokens resolved from the [`crate::session::SessionStore`]
//!   on every call
//! - Fixed per-request timeout, no retries at any layer
//! - One facade struct per backend resource

pub mod auth;
pub mod bookings;
pub mod client;
pub mod clubs;
pub mod errors;
pub mod general;
pub mod matches;
pub mod notifications;
pub mod payments;
pub mod support;
pub mod users;

use std::sync::Arc;

pub use auth::{AuthApi, AuthPayload, LoginRequest};
pub use bookings::BookingsApi;
pub use client::{ApiClient, ApiClientConfig, Envelope};
pub use clubs::ClubsApi;
pub use errors::ApiError;
pub use general::{GeneralApi, HealthStatus, RemoteConfig};
pub use matches::MatchesApi;
pub use notifications::NotificationsApi;
pub use payments::PaymentsApi;
pub use support::SupportApi;
pub use users::UsersApi;

use crate::session::SessionStore;

/// All facades over one shared client, wired once at startup
pub struct CourtsideApi {
    pub auth: AuthApi,
    pub users: UsersApi,
    pub clubs: ClubsApi,
    pub matches: MatchesApi,
    pub bookings: BookingsApi,
    pub general: GeneralApi,
    pub payments: PaymentsApi,
    pub notifications: NotificationsApi,
    pub support: SupportApi,
}

impl CourtsideApi {
    /// Build every facade over one [`ApiClient`] sharing `session`
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Config` if the HTTP client cannot be
    /// constructed.
    pub fn new(config: ApiClientConfig, session: Arc<SessionStore>) -> Result<Self, ApiError> {
        let client = Arc::new(ApiClient::new(config, session.clone())?);

        Ok(Self {
            auth: AuthApi::new(client.clone(), session),
            users: UsersApi::new(client.clone()),
            clubs: ClubsApi::new(client.clone()),
            matches: MatchesApi::new(client.clone()),
            bookings: BookingsApi::new(client.clone()),
            general: GeneralApi::new(client.clone()),
            payments: PaymentsApi::new(client.clone()),
            notifications: NotificationsApi::new(client.clone()),
            support: SupportApi::new(client),
        })
    }
}
