//! Open match types
//!
//! Open matches are social games published by a player looking for
//! opponents; other users browse and join them until the roster is full.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::club::Sport;

/// Lifecycle state of an open match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    Open,
    Full,
    InProgress,
    Completed,
    Cancelled,
}

/// A player on a match roster
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchPlayer {
    pub user_id: String,
    pub name: String,
    pub level: Option<f64>,
    /// Team slot (1 or 2), absent until teams are assigned
    pub team: Option<u8>,
}

/// An open match as listed by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenMatch {
    pub id: String,
    pub club_id: String,
    pub club_name: String,
    pub court_id: Option<String>,
    pub sport: Sport,
    pub starts_at: DateTime<Utc>,
    pub duration_minutes: u32,
    pub level_min: Option<f64>,
    pub level_max: Option<f64>,
    pub price_per_player_cents: i64,
    pub currency: String,
    pub players: Vec<MatchPlayer>,
    pub max_players: u32,
    pub status: MatchStatus,
}

/// Search filters for the open-match board
#[derive(Debug, Clone, Default)]
pub struct MatchFilter {
    pub city: Option<String>,
    pub club_id: Option<String>,
    pub sport: Option<Sport>,
    pub date: Option<NaiveDate>,
    /// Only matches whose level band includes this value
    pub level: Option<f64>,
}

impl MatchFilter {
    /// Query pairs in declaration order
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(city) = &self.city {
            pairs.push(("city", city.clone()));
        }
        if let Some(club_id) = &self.club_id {
            pairs.push(("club_id", club_id.clone()));
        }
        if let Some(sport) = &self.sport {
            pairs.push(("sport", sport.as_str().to_string()));
        }
        if let Some(date) = &self.date {
            pairs.push(("date", date.format("%Y-%m-%d").to_string()));
        }
        if let Some(level) = self.level {
            pairs.push(("level", level.to_string()));
        }
        pairs
    }
}

/// Payload for publishing a new open match
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMatch {
    pub club_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub court_id: Option<String>,
    pub sport: Sport,
    pub starts_at: DateTime<Utc>,
    pub duration_minutes: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level_max: Option<f64>,
    pub max_players: u32,
}
