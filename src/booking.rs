// 🧾 Booking Manager - create bookings and manage provider availability

use anyhow::Result;
use chrono::{DateTime, Duration, Utc};

use crate::config;
use crate::entities::Booking;
use crate::error::TravelError;
use crate::store::TravelStore;

/// When a provider marked busy right now becomes free again
pub fn next_slot_from(now: DateTime<Utc>) -> DateTime<Utc> {
    now + Duration::hours(config::scheduling::BUSY_TURNAROUND_HOURS)
}

impl TravelStore {
    /// Record a confirmed booking with `provider_id` and persist the booking list.
    ///
    /// `language` falls back to the provider's language when absent or blank.
    pub fn create_booking(
        &mut self,
        tourist: &str,
        provider_id: &str,
        language: Option<&str>,
        phone: Option<&str>,
    ) -> Result<Booking> {
        if tourist.trim().is_empty() {
            return Err(TravelError::EmptyTouristName.into());
        }

        let provider = self
            .find_provider(provider_id)
            .ok_or_else(|| TravelError::ProviderNotFound(provider_id.to_string()))?;

        let booking = Booking::confirmed(tourist, provider, language, phone);
        log::info!(
            "Booking {} created: {} -> {} ({})",
            booking.id,
            booking.tourist,
            booking.provider_name,
            booking.service
        );

        self.bookings.push(booking.clone());
        self.save_bookings()?;

        Ok(booking)
    }

    /// Set availability fields of a provider. `Ok(false)` when the id is unknown.
    pub fn update_provider_availability(
        &mut self,
        provider_id: &str,
        available: bool,
        next_available: Option<DateTime<Utc>>,
    ) -> Result<bool> {
        let provider = match self.find_provider_mut(provider_id) {
            Some(p) => p,
            None => {
                log::warn!("Availability update for unknown provider {}", provider_id);
                return Ok(false);
            }
        };

        provider.available = available;
        provider.next_available = next_available;
        log::info!(
            "Provider {} available={} next_available={:?}",
            provider_id,
            available,
            next_available
        );

        self.save_providers()?;
        Ok(true)
    }

    /// Flip availability. Going busy books the turnaround slot, going
    /// available clears it. Returns the new flag, `None` for unknown ids.
    pub fn toggle_provider_availability(&mut self, provider_id: &str) -> Result<Option<bool>> {
        let available = match self.find_provider(provider_id) {
            Some(p) => !p.available,
            None => return Ok(None),
        };

        let next_available = if available { None } else { Some(next_slot_from(Utc::now())) };
        self.update_provider_availability(provider_id, available, next_available)?;

        Ok(Some(available))
    }

    /// Mark a provider busy until the next simulated slot (booking a busy
    /// provider for later). Returns the slot, `None` for unknown ids.
    pub fn schedule_next_available(&mut self, provider_id: &str) -> Result<Option<DateTime<Utc>>> {
        let slot = next_slot_from(Utc::now());
        if self.update_provider_availability(provider_id, false, Some(slot))? {
            Ok(Some(slot))
        } else {
            Ok(None)
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
