//! Configuration structures for the client SDK

use serde::{Deserialize, Serialize};

/// Default backend origin, including the `/api` suffix expected by the
/// Courtside REST service.
pub const DEFAULT_API_BASE_URL: &str = "https://api.courtside.app/api";

/// Default per-request time budget in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// API connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL for the backend (e.g., "https://api.courtside.app/api").
    /// Paths passed to the client are appended verbatim.
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_seconds: u64,
    /// Optional User-Agent header sent with every request
    pub user_agent: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout_seconds: DEFAULT_REQUEST_TIMEOUT_SECS,
            user_agent: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_points_at_production_api() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.timeout_seconds, 10);
        assert!(config.user_agent.is_none());
    }
}
