//! API client
//!
//! Turns a method + path + query/body into a parsed response envelope or
//! a typed failure. Handles bearer-token injection from the session
//! store, header merging, ordered query-string construction, JSON
//! decoding, and the per-request time budget.

use std::sync::Arc;
use std::time::Duration;

use courtside_domain::config::{ApiConfig, DEFAULT_API_BASE_URL, DEFAULT_REQUEST_TIMEOUT_SECS};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;
use urlencoding::encode;

use super::errors::ApiError;
use crate::http::HttpClient;
use crate::session::SessionStore;

/// The structured wrapper every backend response arrives in
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// Resource payload
    pub data: T,
    /// Optional human-readable text (login confirmations etc.)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Configuration for the API client
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    /// Base URL the request paths are appended to
    pub base_url: String,
    /// Per-request time budget
    pub timeout: Duration,
    /// Optional User-Agent header
    pub user_agent: Option<String>,
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            user_agent: None,
        }
    }
}

impl From<ApiConfig> for ApiClientConfig {
    fn from(config: ApiConfig) -> Self {
        Self {
            base_url: config.base_url,
            timeout: Duration::from_secs(config.timeout_seconds),
            user_agent: config.user_agent,
        }
    }
}

/// HTTP API client shared by every facade
pub struct ApiClient {
    http: HttpClient,
    session: Arc<SessionStore>,
    config: ApiClientConfig,
}

impl ApiClient {
    /// Create a new API client
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Config` if the underlying HTTP client cannot
    /// be constructed.
    pub fn new(config: ApiClientConfig, session: Arc<SessionStore>) -> Result<Self, ApiError> {
        let mut builder = HttpClient::builder().timeout(config.timeout);
        if let Some(agent) = &config.user_agent {
            builder = builder.user_agent(agent.clone());
        }
        let http = builder.build()?;

        Ok(Self { http, session, config })
    }

    /// The session store this client reads tokens from
    pub fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }

    /// Execute a GET request with query parameters
    ///
    /// # Errors
    ///
    /// Returns error if the request fails, times out, or the response
    /// cannot be decoded.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Envelope<T>, ApiError> {
        self.request(Method::GET, path, query, None, &[]).await
    }

    /// Execute a POST request with a JSON body
    ///
    /// # Errors
    ///
    /// Returns error if the body cannot be serialized or the request
    /// fails.
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Envelope<T>, ApiError> {
        let body = serde_json::to_value(body)
            .map_err(|err| ApiError::Client(format!("failed to serialize body: {err}")))?;
        self.request(Method::POST, path, &[], Some(body), &[]).await
    }

    /// Execute a PUT request with a JSON body
    ///
    /// # Errors
    ///
    /// Returns error if the body cannot be serialized or the request
    /// fails.
    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Envelope<T>, ApiError> {
        let body = serde_json::to_value(body)
            .map_err(|err| ApiError::Client(format!("failed to serialize body: {err}")))?;
        self.request(Method::PUT, path, &[], Some(body), &[]).await
    }

    /// Execute a DELETE request
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<Envelope<T>, ApiError> {
        self.request(Method::DELETE, path, &[], None, &[]).await
    }

    /// Execute a request with full control over query, body and headers.
    ///
    /// Headers are merged in three layers: the `Content-Type` default,
    /// then the bearer token when a session is present, then
    /// caller-supplied overrides, which win on conflict.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails, times out, or the response
    /// cannot be decoded.
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<serde_json::Value>,
        headers: &[(&str, String)],
    ) -> Result<Envelope<T>, ApiError> {
        let url = format!("{}{}{}", self.config.base_url, path, build_query(query));
        debug!(%method, %url, "API request");

        let token = self.session.token().await;
        let header_map = merge_headers(token.as_deref(), headers)?;

        let mut request = self.http.request(method, &url).headers(header_map);
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = match tokio::time::timeout(self.config.timeout, self.http.send(request)).await
        {
            Ok(Ok(response)) => response,
            Ok(Err(err)) => return Err(err),
            Err(_) => return Err(ApiError::Timeout(self.config.timeout)),
        };

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::from_status(status, error_message(status, &body)));
        }

        response
            .json::<Envelope<T>>()
            .await
            .map_err(|err| ApiError::Client(format!("failed to parse response: {err}")))
    }
}

/// Build a query string from ordered pairs.
///
/// Keys and values are URL-encoded and joined with `&`, preserving the
/// insertion order of the pairs; an empty slice produces an empty string
/// with no `?` separator.
fn build_query(pairs: &[(&str, String)]) -> String {
    if pairs.is_empty() {
        return String::new();
    }

    let encoded: Vec<String> =
        pairs.iter().map(|(key, value)| format!("{}={}", encode(key), encode(value))).collect();

    format!("?{}", encoded.join("&"))
}

/// Merge default, token, and caller headers; caller values win.
fn merge_headers(
    token: Option<&str>,
    overrides: &[(&str, String)],
) -> Result<HeaderMap, ApiError> {
    let mut map = HeaderMap::new();
    map.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    if let Some(token) = token {
        let value = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|err| ApiError::Config(format!("stored token is not header-safe: {err}")))?;
        map.insert(AUTHORIZATION, value);
    }

    for (name, value) in overrides {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|err| ApiError::Client(format!("invalid header name {name:?}: {err}")))?;
        let value = HeaderValue::from_str(value)
            .map_err(|err| ApiError::Client(format!("invalid header value: {err}")))?;
        map.insert(name, value);
    }

    Ok(map)
}

/// Resolve the user-facing message for an error response: the JSON
/// `message` field when the body parses, else a synthesized status line.
fn error_message(status: reqwest::StatusCode, body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| value.get("message")?.as_str().map(String::from))
        .unwrap_or_else(|| {
            format!("HTTP {}: {}", status.as_u16(), status.canonical_reason().unwrap_or("Unknown"))
        })
}
