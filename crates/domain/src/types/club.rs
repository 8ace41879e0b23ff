//! Club, court and availability types

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Sport a court is laid out for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sport {
    Padel,
    Tennis,
}

impl Sport {
    /// Wire representation used in query strings
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Padel => "padel",
            Self::Tennis => "tennis",
        }
    }
}

/// A club listed on the platform
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Club {
    pub id: String,
    pub name: String,
    pub city: String,
    pub address: String,
    pub description: Option<String>,
    pub photo_url: Option<String>,
    /// Average review score (1.0 - 5.0), absent for unreviewed clubs
    pub rating: Option<f64>,
    pub court_count: u32,
    #[serde(default)]
    pub amenities: Vec<String>,
}

/// A bookable court within a club
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Court {
    pub id: String,
    pub club_id: String,
    pub name: String,
    pub sport: Sport,
    pub surface: Option<String>,
    pub indoor: bool,
}

/// One bookable slot on a club's availability grid
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilitySlot {
    pub court_id: String,
    pub starts_at: DateTime<Utc>,
    pub duration_minutes: u32,
    pub price_cents: i64,
    pub currency: String,
}

/// Search filters for club listings.
///
/// Filters map to query-string parameters; absent fields are omitted
/// entirely rather than sent as empty values.
#[derive(Debug, Clone, Default)]
pub struct ClubFilter {
    pub city: Option<String>,
    pub search: Option<String>,
    pub sport: Option<Sport>,
    pub date: Option<NaiveDate>,
}

impl ClubFilter {
    /// Query pairs in declaration order
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(city) = &self.city {
            pairs.push(("city", city.clone()));
        }
        if let Some(search) = &self.search {
            pairs.push(("search", search.clone()));
        }
        if let Some(sport) = &self.sport {
            pairs.push(("sport", sport.as_str().to_string()));
        }
        if let Some(date) = &self.date {
            pairs.push(("date", date.format("%Y-%m-%d").to_string()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sport_serializes_snake_case() {
        assert_eq!(serde_json::to_value(Sport::Padel).unwrap(), "padel");
        assert_eq!(serde_json::to_value(Sport::Tennis).unwrap(), "tennis");
    }

    #[test]
    fn empty_filter_produces_no_pairs() {
        assert!(ClubFilter::default().query_pairs().is_empty());
    }

    #[test]
    fn filter_pairs_preserve_declaration_order() {
        let filter = ClubFilter {
            city: Some("Madrid".to_string()),
            search: None,
            sport: Some(Sport::Padel),
            date: NaiveDate::from_ymd_opt(2026, 3, 14),
        };

        let pairs = filter.query_pairs();
        assert_eq!(
            pairs,
            vec![
                ("city", "Madrid".to_string()),
                ("sport", "padel".to_string()),
                ("date", "2026-03-14".to_string()),
            ]
        );
    }
}
