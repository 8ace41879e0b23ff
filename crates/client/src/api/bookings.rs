//! Bookings facade

use std::sync::Arc;

use courtside_domain::{Booking, NewBooking};
use tracing::{debug, instrument};
use urlencoding::encode;

use super::client::ApiClient;
use super::errors::ApiError;

/// Court reservation operations for the signed-in user
pub struct BookingsApi {
    client: Arc<ApiClient>,
}

impl BookingsApi {
    /// Create a new bookings facade
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// List the signed-in user's bookings
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Booking>, ApiError> {
        let bookings = self.client.get::<Vec<Booking>>("/bookings", &[]).await?.data;

        debug!(count = bookings.len(), "bookings listed");
        Ok(bookings)
    }

    /// Fetch one booking
    ///
    /// # Errors
    ///
    /// Returns error if the booking does not exist or the request fails.
    #[instrument(skip(self), fields(booking_id = %id))]
    pub async fn get(&self, id: &str) -> Result<Booking, ApiError> {
        let path = format!("/bookings/{}", encode(id));
        Ok(self.client.get::<Booking>(&path, &[]).await?.data)
    }

    /// Reserve a slot
    ///
    /// # Errors
    ///
    /// Returns error if the slot is taken or the request fails.
    #[instrument(skip(self, new_booking), fields(club_id = %new_booking.club_id, court_id = %new_booking.court_id))]
    pub async fn create(&self, new_booking: &NewBooking) -> Result<Booking, ApiError> {
        Ok(self.client.post::<Booking, _>("/bookings", new_booking).await?.data)
    }

    /// Cancel a booking; returns it in its cancelled state
    ///
    /// # Errors
    ///
    /// Returns error if cancellation is rejected or the request fails.
    #[instrument(skip(self), fields(booking_id = %id))]
    pub async fn cancel(&self, id: &str) -> Result<Booking, ApiError> {
        let path = format!("/bookings/{}/cancel", encode(id));
        Ok(self.client.post::<Booking, _>(&path, &serde_json::json!({})).await?.data)
    }
}
