// 🚕 Provider Entity - local service vendor (driver, guide, ...)
//
// Rating is derived state: it is the rounded mean of the reviews once any
// review exists, otherwise the starting value the provider was seeded with.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::config;

// ============================================================================
// LOCATION
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

// ============================================================================
// REVIEW
// ============================================================================

/// A rating + comment left after a trip. Owned by its provider, append-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub rating: f64,

    #[serde(default)]
    pub comment: String,

    #[serde(deserialize_with = "deserialize_utc")]
    pub ts: DateTime<Utc>,
}

/// RFC 3339 timestamp, or an ISO timestamp without offset read as UTC
/// (older snapshots wrote review times that way)
fn deserialize_utc<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;

    if let Ok(ts) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(ts.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| Utc.from_utc_datetime(&naive))
        .map_err(|e| serde::de::Error::custom(format!("invalid timestamp {:?}: {}", raw, e)))
}

// ============================================================================
// PROVIDER
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Provider {
    /// Stable identity - never changes
    pub id: String,

    pub name: String,

    /// Free-text service label, matched by substring
    pub service: String,

    /// Spoken language (open set, e.g. "French")
    pub language: String,

    #[serde(default = "default_rating")]
    pub rating: f64,

    #[serde(default)]
    pub reviews: Vec<Review>,

    #[serde(default = "default_available")]
    pub available: bool,

    /// When a busy provider is simulated to be free again
    #[serde(default)]
    pub next_available: Option<DateTime<Utc>>,

    #[serde(default)]
    pub location: Option<Location>,
}

fn default_rating() -> f64 {
    config::reviews::DEFAULT_RATING
}

fn default_available() -> bool {
    true
}

impl Provider {
    pub fn new(id: &str, name: &str, service: &str, language: &str, rating: f64) -> Self {
        Provider {
            id: id.to_string(),
            name: name.to_string(),
            service: service.to_string(),
            language: language.to_string(),
            rating,
            reviews: Vec::new(),
            available: true,
            next_available: None,
            location: None,
        }
    }

    pub fn with_location(mut self, lat: f64, lng: f64) -> Self {
        self.location = Some(Location { lat, lng });
        self
    }

    /// Append a review and recompute the mean rating. Returns the new rating.
    pub fn push_review(&mut self, review: Review) -> f64 {
        self.reviews.push(review);
        self.rating = mean_rating(&self.reviews).unwrap_or(self.rating);
        self.rating
    }

    /// Human-readable availability, e.g. "Available" or "Busy until ..."
    pub fn availability_label(&self) -> String {
        if self.available {
            "Available".to_string()
        } else {
            match self.next_available {
                Some(ts) => format!("Busy until {}", ts.format("%Y-%m-%d %H:%M UTC")),
                None => "Busy".to_string(),
            }
        }
    }
}

/// Mean of the review scores rounded to 2 decimals, None without reviews
pub fn mean_rating(reviews: &[Review]) -> Option<f64> {
    if reviews.is_empty() {
        return None;
    }
    let total: f64 = reviews.iter().map(|r| r.rating).sum();
    Some(round2(total / reviews.len() as f64))
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Demo providers used when nothing has been persisted yet
pub fn default_providers() -> Vec<Provider> {
    vec![
        Provider::new("p1", "Ravi", "Taxi Driver", "Telugu", 4.8).with_location(17.45, 78.45),
        Provider::new("p2", "Maria", "Tour Guide", "French", 4.9).with_location(48.85, 2.35),
        Provider::new("p3", "Carlos", "City Tour", "Spanish", 4.7).with_location(19.43, -99.13),
    ]
}

// ============================================================================
// TESTS
// ============================================================================
