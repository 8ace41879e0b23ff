//! Notifications facade

use std::sync::Arc;

use courtside_domain::{Notification, NotificationSettings};
use tracing::{debug, instrument};
use urlencoding::encode;

use super::client::ApiClient;
use super::errors::ApiError;

/// Notification inbox and preference operations
pub struct NotificationsApi {
    client: Arc<ApiClient>,
}

impl NotificationsApi {
    /// Create a new notifications facade
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// List the signed-in user's notifications, newest first
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Notification>, ApiError> {
        let notifications =
            self.client.get::<Vec<Notification>>("/notifications", &[]).await?.data;

        debug!(count = notifications.len(), "notifications listed");
        Ok(notifications)
    }

    /// Mark one notification as read
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    #[instrument(skip(self), fields(notification_id = %id))]
    pub async fn mark_read(&self, id: &str) -> Result<Notification, ApiError> {
        let path = format!("/notifications/{}/read", encode(id));
        Ok(self.client.post::<Notification, _>(&path, &serde_json::json!({})).await?.data)
    }

    /// Remove one notification from the inbox
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    #[instrument(skip(self), fields(notification_id = %id))]
    pub async fn dismiss(&self, id: &str) -> Result<(), ApiError> {
        let path = format!("/notifications/{}", encode(id));
        self.client.delete::<serde_json::Value>(&path).await?;
        Ok(())
    }

    /// Replace the user's notification preferences
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    #[instrument(skip(self, settings))]
    pub async fn update_settings(
        &self,
        settings: &NotificationSettings,
    ) -> Result<NotificationSettings, ApiError> {
        Ok(self
            .client
            .put::<NotificationSettings, _>("/notifications/settings", settings)
            .await?
            .data)
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::api::client::ApiClientConfig;
    use crate::session::{MemoryBackend, SessionStore};

    fn build_notifications(server: &MockServer) -> NotificationsApi {
        let session = Arc::new(SessionStore::new(Arc::new(MemoryBackend::new())));
        let config = ApiClientConfig { base_url: server.uri(), ..Default::default() };
        NotificationsApi::new(Arc::new(ApiClient::new(config, session).unwrap()))
    }

    #[tokio::test]
    async fn mark_read_flips_the_flag() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/notifications/n-1/read"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": {
                    "id": "n-1",
                    "title": "Match reminder",
                    "body": "Your match starts in one hour",
                    "read": true,
                    "kind": "booking_reminder",
                    "created_at": "2026-03-14T17:00:00Z"
                }
            })))
            .mount(&server)
            .await;

        let notifications = build_notifications(&server);
        let updated = notifications.mark_read("n-1").await.unwrap();
        assert!(updated.read);
    }

    #[tokio::test]
    async fn dismiss_deletes_the_notification() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/notifications/n-1"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"data": null})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let notifications = build_notifications(&server);
        assert!(notifications.dismiss("n-1").await.is_ok());
    }

    #[tokio::test]
    async fn update_settings_sends_full_payload() {
        let server = MockServer::start().await;
        let payload = serde_json::json!({
            "match_invites": true,
            "booking_reminders": true,
            "promotions": false
        });
        Mock::given(method("PUT"))
            .and(path("/notifications/settings"))
            .and(body_json(payload.clone()))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"data": payload})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let notifications = build_notifications(&server);
        let settings = NotificationSettings {
            match_invites: true,
            booking_reminders: true,
            promotions: false,
        };

        let saved = notifications.update_settings(&settings).await.unwrap();
        assert!(!saved.promotions);
    }
}
