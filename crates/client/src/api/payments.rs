//! Payments facade

use std::sync::Arc;

use courtside_domain::{PaymentIntent, PaymentIntentRequest, PaymentMethod, PaymentRecord};
use tracing::{debug, instrument};

use super::client::ApiClient;
use super::errors::ApiError;

/// Payment method and history operations
pub struct PaymentsApi {
    client: Arc<ApiClient>,
}

impl PaymentsApi {
    /// Create a new payments facade
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// List the signed-in user's stored payment methods
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    #[instrument(skip(self))]
    pub async fn methods(&self) -> Result<Vec<PaymentMethod>, ApiError> {
        let methods = self.client.get::<Vec<PaymentMethod>>("/payments/methods", &[]).await?.data;

        debug!(count = methods.len(), "payment methods listed");
        Ok(methods)
    }

    /// Open a payment intent for a booking
    ///
    /// # Errors
    ///
    /// Returns error if the intent is rejected or the request fails.
    #[instrument(skip(self, request), fields(booking_id = %request.booking_id))]
    pub async fn create_intent(
        &self,
        request: &PaymentIntentRequest,
    ) -> Result<PaymentIntent, ApiError> {
        Ok(self.client.post::<PaymentIntent, _>("/payments/intents", request).await?.data)
    }

    /// The signed-in user's charge history
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    #[instrument(skip(self))]
    pub async fn history(&self) -> Result<Vec<PaymentRecord>, ApiError> {
        Ok(self.client.get::<Vec<PaymentRecord>>("/payments/history", &[]).await?.data)
    }
}
