//! Support and FAQ types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Payload for opening a support ticket
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTicket {
    pub subject: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// A support ticket as tracked by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupportTicket {
    pub id: String,
    pub subject: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// A frequently-asked-question entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}
