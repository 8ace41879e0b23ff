//! Configuration loader
//!
//! Loads API settings from environment variables, falling back to the
//! fixed production defaults when unset.
//!
//! ## Environment Variables
//! - `COURTSIDE_API_BASE_URL`: Backend base URL (default
//!   `https://api.courtside.app/api`)
//! - `COURTSIDE_API_TIMEOUT_SECS`: Per-request timeout in seconds
//!   (default 10)

use courtside_domain::config::{ApiConfig, DEFAULT_API_BASE_URL, DEFAULT_REQUEST_TIMEOUT_SECS};

use crate::api::ApiError;

/// Base URL override variable
pub const ENV_BASE_URL: &str = "COURTSIDE_API_BASE_URL";

/// Timeout override variable
pub const ENV_TIMEOUT_SECS: &str = "COURTSIDE_API_TIMEOUT_SECS";

/// Load API configuration from the environment
///
/// Unset variables fall back to defaults; set-but-invalid values are a
/// configuration error rather than a silent fallback.
///
/// # Errors
/// Returns `ApiError::Config` if the base URL does not parse or the
/// timeout is not a number.
pub fn load_from_env() -> Result<ApiConfig, ApiError> {
    let base_url = match std::env::var(ENV_BASE_URL) {
        Ok(value) => value,
        Err(_) => DEFAULT_API_BASE_URL.to_string(),
    };

    url::Url::parse(&base_url)
        .map_err(|err| ApiError::Config(format!("invalid base URL {base_url:?}: {err}")))?;
    // Paths are appended verbatim, so the base must not end in a slash
    let base_url = base_url.trim_end_matches('/').to_string();

    let timeout_seconds = match std::env::var(ENV_TIMEOUT_SECS) {
        Ok(value) => value
            .parse::<u64>()
            .map_err(|err| ApiError::Config(format!("invalid timeout: {err}")))?,
        Err(_) => DEFAULT_REQUEST_TIMEOUT_SECS,
    };

    tracing::info!(base_url = %base_url, timeout_seconds, "API configuration loaded");

    Ok(ApiConfig { base_url, timeout_seconds, user_agent: None })
}
