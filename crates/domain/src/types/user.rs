//! User profile types
//!
//! The user record returned by the backend on login/register and cached
//! locally by the session store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User profile as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub name: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub avatar_url: Option<String>,
    pub phone_number: Option<String>,
    /// Self-assessed playing level on the platform scale (0.0 - 7.0)
    pub level: Option<f64>,
    pub city: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Aggregated play statistics for a user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserStats {
    pub matches_played: u32,
    pub matches_won: u32,
    pub hours_played: f64,
    pub level: Option<f64>,
}

/// Registration payload for a new account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<f64>,
}

/// Partial profile update; absent fields are left untouched by the backend
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_update_omits_absent_fields() {
        let update = UserUpdate { name: Some("Ana".to_string()), ..Default::default() };
        let json = serde_json::to_value(&update).unwrap();

        assert_eq!(json, serde_json::json!({ "name": "Ana" }));
    }
}
