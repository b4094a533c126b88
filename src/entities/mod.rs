// Entity Models
//
// Providers are mutated in place (availability, reviews) and never deleted.
// Bookings are append-only records.

pub mod provider;
pub mod booking;

pub use provider::{Provider, Review, Location, default_providers, mean_rating, round2};
pub use booking::{Booking, BookingStatus, StatusChange};
