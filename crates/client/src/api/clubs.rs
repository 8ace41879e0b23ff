//! Clubs facade

use std::sync::Arc;

use chrono::NaiveDate;
use courtside_domain::{AvailabilitySlot, Club, ClubFilter, Court};
use tracing::{debug, instrument};
use urlencoding::encode;

use super::client::ApiClient;
use super::errors::ApiError;

/// Club directory and availability operations
pub struct ClubsApi {
    client: Arc<ApiClient>,
}

impl ClubsApi {
    /// Create a new clubs facade
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Search clubs; filters map to query-string parameters
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    #[instrument(skip(self, filter))]
    pub async fn search(&self, filter: &ClubFilter) -> Result<Vec<Club>, ApiError> {
        let query = filter.query_pairs();
        let clubs = self.client.get::<Vec<Club>>("/clubs", &query).await?.data;

        debug!(count = clubs.len(), "clubs listed");
        Ok(clubs)
    }

    /// Fetch one club's profile
    ///
    /// # Errors
    ///
    /// Returns error if the club does not exist or the request fails.
    #[instrument(skip(self), fields(club_id = %id))]
    pub async fn get(&self, id: &str) -> Result<Club, ApiError> {
        let path = format!("/clubs/{}", encode(id));
        Ok(self.client.get::<Club>(&path, &[]).await?.data)
    }

    /// List a club's courts
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    #[instrument(skip(self), fields(club_id = %id))]
    pub async fn courts(&self, id: &str) -> Result<Vec<Court>, ApiError> {
        let path = format!("/clubs/{}/courts", encode(id));
        Ok(self.client.get::<Vec<Court>>(&path, &[]).await?.data)
    }

    /// Fetch a club's bookable slots for one day
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    #[instrument(skip(self), fields(club_id = %id, date = %date))]
    pub async fn availability(
        &self,
        id: &str,
        date: NaiveDate,
    ) -> Result<Vec<AvailabilitySlot>, ApiError> {
        let path = format!("/clubs/{}/availability", encode(id));
        let query = [("date", date.format("%Y-%m-%d").to_string())];
        Ok(self.client.get::<Vec<AvailabilitySlot>>(&path, &query).await?.data)
    }
}

#[cfg(test)]
mod tests {
    use courtside_domain::Sport;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::api::client::ApiClientConfig;
    use crate::session::{MemoryBackend, SessionStore};

    fn build_clubs(server: &MockServer) -> ClubsApi {
        let session = Arc::new(SessionStore::new(Arc::new(MemoryBackend::new())));
        let config = ApiClientConfig { base_url: server.uri(), ..Default::default() };
        ClubsApi::new(Arc::new(ApiClient::new(config, session).unwrap()))
    }

    fn club_json() -> serde_json::Value {
        serde_json::json!({
            "id": "c-1",
            "name": "Club Norte",
            "city": "Madrid",
            "address": "Calle Mayor 1",
            "description": null,
            "photo_url": null,
            "rating": 4.6,
            "court_count": 8,
            "amenities": ["parking", "cafe"]
        })
    }

    #[tokio::test]
    async fn search_sends_filter_as_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/clubs"))
            .and(query_param("city", "Madrid"))
            .and(query_param("sport", "padel"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"data": [club_json()]})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let clubs = build_clubs(&server);
        let filter = ClubFilter {
            city: Some("Madrid".to_string()),
            sport: Some(Sport::Padel),
            ..Default::default()
        };

        let found = clubs.search(&filter).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Club Norte");
    }

    #[tokio::test]
    async fn availability_is_scoped_to_a_date() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/clubs/c-1/availability"))
            .and(query_param("date", "2026-03-14"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [{
                    "court_id": "ct-4",
                    "starts_at": "2026-03-14T18:00:00Z",
                    "duration_minutes": 90,
                    "price_cents": 2400,
                    "currency": "EUR"
                }]
            })))
            .mount(&server)
            .await;

        let clubs = build_clubs(&server);
        let date = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
        let slots = clubs.availability("c-1", date).await.unwrap();

        assert_eq!(slots.len(), 1);
        assert_eq!(slots[0].price_cents, 2400);
    }
}
