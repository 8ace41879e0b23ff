//! Open matches facade

use std::sync::Arc;

use courtside_domain::{MatchFilter, NewMatch, OpenMatch};
use tracing::{debug, instrument};
use urlencoding::encode;

use super::client::ApiClient;
use super::errors::ApiError;

/// Open-match board operations
pub struct MatchesApi {
    client: Arc<ApiClient>,
}

impl MatchesApi {
    /// Create a new matches facade
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// List open matches matching the filter
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    #[instrument(skip(self, filter))]
    pub async fn open_matches(&self, filter: &MatchFilter) -> Result<Vec<OpenMatch>, ApiError> {
        let query = filter.query_pairs();
        let matches = self.client.get::<Vec<OpenMatch>>("/matches/open", &query).await?.data;

        debug!(count = matches.len(), "open matches listed");
        Ok(matches)
    }

    /// Fetch one match with its roster
    ///
    /// # Errors
    ///
    /// Returns error if the match does not exist or the request fails.
    #[instrument(skip(self), fields(match_id = %id))]
    pub async fn get(&self, id: &str) -> Result<OpenMatch, ApiError> {
        let path = format!("/matches/{}", encode(id));
        Ok(self.client.get::<OpenMatch>(&path, &[]).await?.data)
    }

    /// Publish a new open match
    ///
    /// # Errors
    ///
    /// Returns error if the match is rejected or the request fails.
    #[instrument(skip(self, new_match), fields(club_id = %new_match.club_id))]
    pub async fn create(&self, new_match: &NewMatch) -> Result<OpenMatch, ApiError> {
        Ok(self.client.post::<OpenMatch, _>("/matches", new_match).await?.data)
    }

    /// Join a match; returns the updated roster
    ///
    /// # Errors
    ///
    /// Returns error if the match is full, already joined, or the
    /// request fails.
    #[instrument(skip(self), fields(match_id = %id))]
    pub async fn join(&self, id: &str) -> Result<OpenMatch, ApiError> {
        let path = format!("/matches/{}/join", encode(id));
        Ok(self.client.post::<OpenMatch, _>(&path, &serde_json::json!({})).await?.data)
    }

    /// Leave a match; returns the updated roster
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    #[instrument(skip(self), fields(match_id = %id))]
    pub async fn leave(&self, id: &str) -> Result<OpenMatch, ApiError> {
        let path = format!("/matches/{}/leave", encode(id));
        Ok(self.client.post::<OpenMatch, _>(&path, &serde_json::json!({})).await?.data)
    }
}
