//! General platform endpoints

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::client::ApiClient;
use super::errors::ApiError;

/// Backend health report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

/// Remotely managed app configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Oldest app version the backend still accepts
    pub min_app_version: Option<String>,
    pub maintenance: bool,
    /// Announcement banner shown on the home screen
    pub banner: Option<String>,
}

/// Platform-level operations not tied to one resource
pub struct GeneralApi {
    client: Arc<ApiClient>,
}

impl GeneralApi {
    /// Create a new general facade
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Backend health probe
    ///
    /// # Errors
    ///
    /// Returns error if the backend is unreachable.
    #[instrument(skip(self))]
    pub async fn health(&self) -> Result<HealthStatus, ApiError> {
        Ok(self.client.get::<HealthStatus>("/health", &[]).await?.data)
    }

    /// Fetch the remotely managed app configuration
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    #[instrument(skip(self))]
    pub async fn app_config(&self) -> Result<RemoteConfig, ApiError> {
        Ok(self.client.get::<RemoteConfig>("/config", &[]).await?.data)
    }
}
