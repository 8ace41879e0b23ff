//! Support facade

use std::sync::Arc;

use courtside_domain::{FaqEntry, NewTicket, SupportTicket};
use tracing::instrument;

use super::client::ApiClient;
use super::errors::ApiError;

/// Support ticket and FAQ operations
pub struct SupportApi {
    client: Arc<ApiClient>,
}

impl SupportApi {
    /// Create a new support facade
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Open a support ticket
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    #[instrument(skip(self, ticket), fields(subject = %ticket.subject))]
    pub async fn create_ticket(&self, ticket: &NewTicket) -> Result<SupportTicket, ApiError> {
        Ok(self.client.post::<SupportTicket, _>("/support/tickets", ticket).await?.data)
    }

    /// Fetch the FAQ entries shown in the help screen
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    #[instrument(skip(self))]
    pub async fn faqs(&self) -> Result<Vec<FaqEntry>, ApiError> {
        Ok(self.client.get::<Vec<FaqEntry>>("/support/faqs", &[]).await?.data)
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::api::client::ApiClientConfig;
    use crate::session::{MemoryBackend, SessionStore};

    fn build_support(server: &MockServer) -> SupportApi {
        let session = Arc::new(SessionStore::new(Arc::new(MemoryBackend::new())));
        let config = ApiClientConfig { base_url: server.uri(), ..Default::default() };
        SupportApi::new(Arc::new(ApiClient::new(config, session).unwrap()))
    }

    #[tokio::test]
    async fn create_ticket_returns_tracked_ticket() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/support/tickets"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": {
                    "id": "t-1",
                    "subject": "Refund request",
                    "status": "open",
                    "created_at": "2026-03-14T10:00:00Z"
                }
            })))
            .mount(&server)
            .await;

        let support = build_support(&server);
        let ticket = NewTicket {
            subject: "Refund request".to_string(),
            message: "Court was closed".to_string(),
            category: Some("billing".to_string()),
        };

        let created = support.create_ticket(&ticket).await.unwrap();
        assert_eq!(created.status, "open");
    }

    #[tokio::test]
    async fn faqs_lists_entries() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/support/faqs"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [{"question": "How do I cancel?", "answer": "Open your booking and tap cancel."}]
            })))
            .mount(&server)
            .await;

        let support = build_support(&server);
        let faqs = support.faqs().await.unwrap();
        assert_eq!(faqs.len(), 1);
    }
}
