//! Court booking types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle state of a booking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

/// A court reservation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    pub club_id: String,
    pub court_id: String,
    pub user_id: String,
    pub starts_at: DateTime<Utc>,
    pub duration_minutes: u32,
    pub price_cents: i64,
    pub currency: String,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

/// Payload for reserving a slot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBooking {
    pub club_id: String,
    pub court_id: String,
    pub starts_at: DateTime<Utc>,
    pub duration_minutes: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method_id: Option<String>,
}
