// 📅 Booking Entity - confirmed engagement between a tourist and a provider
//
// Provider name/service are copied at creation time so the booking keeps
// describing what was booked even if the provider record changes later.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::provider::Provider;

// ============================================================================
// BOOKING STATUS
// ============================================================================

/// Only `Confirmed` exists; the history log leaves room for more states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingStatus {
    Confirmed,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Confirmed => "Confirmed",
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of the append-only status history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusChange {
    pub ts: DateTime<Utc>,
    pub status: BookingStatus,
}

// ============================================================================
// BOOKING
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    /// Short unique id (first 8 chars of a UUID v4)
    pub id: String,

    pub tourist: String,

    pub provider_id: String,
    pub provider_name: String,
    pub service: String,

    /// Requested language, or the provider's language when none was given
    pub language: String,

    #[serde(default)]
    pub phone: Option<String>,

    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,

    #[serde(default)]
    pub history: Vec<StatusChange>,
}

impl Booking {
    /// New confirmed booking with a single history entry
    pub fn confirmed(
        tourist: &str,
        provider: &Provider,
        language: Option<&str>,
        phone: Option<&str>,
    ) -> Self {
        let now = Utc::now();
        let mut id = uuid::Uuid::new_v4().simple().to_string();
        id.truncate(8);

        let language = language
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .unwrap_or(provider.language.as_str());

        Booking {
            id,
            tourist: tourist.trim().to_string(),
            provider_id: provider.id.clone(),
            provider_name: provider.name.clone(),
            service: provider.service.clone(),
            language: language.to_string(),
            phone: phone.map(str::trim).filter(|p| !p.is_empty()).map(str::to_string),
            status: BookingStatus::Confirmed,
            created_at: now,
            history: vec![StatusChange { ts: now, status: BookingStatus::Confirmed }],
        }
    }

    /// Move to `status`, recording the change in the history log
    pub fn record_status(&mut self, status: BookingStatus) {
        self.status = status;
        self.history.push(StatusChange { ts: Utc::now(), status });
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn maria() -> Provider {
        Provider::new("p2", "Maria", "Tour Guide", "French", 4.9)
    }

    #[test]
    fn test_confirmed_booking() {
        let booking = Booking::confirmed("Alice", &maria(), Some("Spanish"), Some("+1 555"));

        assert_eq!(booking.id.len(), 8);
        assert_eq!(booking.tourist, "Alice");
        assert_eq!(booking.provider_id, "p2");
        assert_eq!(booking.provider_name, "Maria");
        assert_eq!(booking.service, "Tour Guide");
        assert_eq!(booking.language, "Spanish");
        assert_eq!(booking.phone.as_deref(), Some("+1 555"));
        assert_eq!(booking.status, BookingStatus::Confirmed);
        assert_eq!(booking.history.len(), 1);
        assert_eq!(booking.history[0].status, BookingStatus::Confirmed);
        assert_eq!(booking.history[0].ts, booking.created_at);
    }

    #[test]
    fn test_language_falls_back_to_provider() {
        let booking = Booking::confirmed("Bob", &maria(), None, None);
        assert_eq!(booking.language, "French");

        let booking = Booking::confirmed("Bob", &maria(), Some("  "), Some(""));
        assert_eq!(booking.language, "French");
        assert_eq!(booking.phone, None);
    }

    #[test]
    fn test_ids_are_unique() {
        let a = Booking::confirmed("A", &maria(), None, None);
        let b = Booking::confirmed("B", &maria(), None, None);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_record_status_appends_history() {
        let mut booking = Booking::confirmed("Alice", &maria(), None, None);
        booking.record_status(BookingStatus::Confirmed);

        assert_eq!(booking.history.len(), 2);
        assert!(booking.history[1].ts >= booking.history[0].ts);
    }

    #[test]
    fn test_status_serializes_as_label() {
        let booking = Booking::confirmed("Alice", &maria(), None, None);
        let json = serde_json::to_value(&booking).unwrap();

        assert_eq!(json["status"], "Confirmed");
        assert_eq!(json["history"][0]["status"], "Confirmed");
        assert!(json["phone"].is_null());
    }
}
