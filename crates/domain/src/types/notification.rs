//! Notification types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An in-app notification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub body: String,
    pub read: bool,
    /// Backend-defined kind tag (e.g., "match_invite"), free-form
    pub kind: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Per-user notification preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationSettings {
    pub match_invites: bool,
    pub booking_reminders: bool,
    pub promotions: bool,
}
