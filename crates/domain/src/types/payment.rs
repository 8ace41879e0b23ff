//! Payment types
//!
//! Payment execution lives entirely in the backend; the client only lists
//! stored methods, opens intents, and reads history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored payment method
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentMethod {
    pub id: String,
    /// Card network or wallet name (e.g., "visa")
    pub brand: String,
    pub last4: String,
    pub expires: Option<String>,
}

/// Request to open a payment intent for a booking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentIntentRequest {
    pub booking_id: String,
    pub payment_method_id: String,
}

/// An opened payment intent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentIntent {
    pub id: String,
    pub status: String,
    /// Provider-side secret the host app hands to the payment sheet
    pub client_secret: Option<String>,
}

/// A settled or pending charge in the user's history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentRecord {
    pub id: String,
    pub amount_cents: i64,
    pub currency: String,
    pub description: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}
