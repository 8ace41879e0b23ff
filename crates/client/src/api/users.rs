//! Users facade

use std::sync::Arc;

use courtside_domain::{UserProfile, UserStats, UserUpdate};
use tracing::instrument;
use urlencoding::encode;

use super::client::ApiClient;
use super::errors::ApiError;

/// User profile operations
pub struct UsersApi {
    client: Arc<ApiClient>,
}

impl UsersApi {
    /// Create a new users facade
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Fetch a user's profile
    ///
    /// # Errors
    ///
    /// Returns error if the user does not exist or the request fails.
    #[instrument(skip(self), fields(user_id = %id))]
    pub async fn get(&self, id: &str) -> Result<UserProfile, ApiError> {
        let path = format!("/users/{}", encode(id));
        Ok(self.client.get::<UserProfile>(&path, &[]).await?.data)
    }

    /// Update a user's profile; absent fields are left untouched
    ///
    /// # Errors
    ///
    /// Returns error if the update is rejected or the request fails.
    #[instrument(skip(self, update), fields(user_id = %id))]
    pub async fn update(&self, id: &str, update: &UserUpdate) -> Result<UserProfile, ApiError> {
        let path = format!("/users/{}", encode(id));
        Ok(self.client.put::<UserProfile, _>(&path, update).await?.data)
    }

    /// Fetch a user's aggregated play statistics
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    #[instrument(skip(self), fields(user_id = %id))]
    pub async fn stats(&self, id: &str) -> Result<UserStats, ApiError> {
        let path = format!("/users/{}/stats", encode(id));
        Ok(self.client.get::<UserStats>(&path, &[]).await?.data)
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::api::client::ApiClientConfig;
    use crate::session::{MemoryBackend, SessionStore};

    fn build_users(server: &MockServer) -> UsersApi {
        let session = Arc::new(SessionStore::new(Arc::new(MemoryBackend::new())));
        let config = ApiClientConfig { base_url: server.uri(), ..Default::default() };
        UsersApi::new(Arc::new(ApiClient::new(config, session).unwrap()))
    }

    fn user_json(id: &str) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "email": "ana@example.com",
            "name": "Ana",
            "first_name": null,
            "last_name": null,
            "avatar_url": null,
            "phone_number": null,
            "level": 3.5,
            "city": "Madrid",
            "created_at": "2026-01-10T09:00:00Z"
        })
    }

    #[tokio::test]
    async fn get_encodes_path_parameter() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/u%2F1"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"data": user_json("u/1")})),
            )
            .mount(&server)
            .await;

        let users = build_users(&server);
        let user = users.get("u/1").await.unwrap();
        assert_eq!(user.id, "u/1");
    }

    #[tokio::test]
    async fn update_sends_only_present_fields() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/users/u-1"))
            .and(body_json(serde_json::json!({"city": "Valencia"})))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"data": user_json("u-1")})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let users = build_users(&server);
        let update = UserUpdate { city: Some("Valencia".to_string()), ..Default::default() };
        let result = users.update("u-1", &update).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn stats_unwraps_envelope_data() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/u-1/stats"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": {"matches_played": 12, "matches_won": 7, "hours_played": 18.5, "level": 3.5}
            })))
            .mount(&server)
            .await;

        let users = build_users(&server);
        let stats = users.stats("u-1").await.unwrap();
        assert_eq!(stats.matches_won, 7);
    }
}
