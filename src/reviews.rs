// ⭐ Review Manager - ratings and comments left after a trip

use anyhow::Result;
use chrono::Utc;

use crate::config::reviews::{MAX_RATING, MIN_RATING};
use crate::entities::Review;
use crate::error::TravelError;
use crate::store::TravelStore;

pub fn validate_rating(rating: f64) -> Result<(), TravelError> {
    if rating.is_finite() && (MIN_RATING..=MAX_RATING).contains(&rating) {
        Ok(())
    } else {
        Err(TravelError::RatingOutOfRange(rating))
    }
}

impl TravelStore {
    /// Append a review and return the provider's new mean rating.
    ///
    /// Ratings outside 1-5 are rejected before anything changes.
    /// `Ok(None)` when the provider id is unknown.
    pub fn add_review(&mut self, provider_id: &str, rating: f64, comment: &str) -> Result<Option<f64>> {
        validate_rating(rating)?;

        let provider = match self.find_provider_mut(provider_id) {
            Some(p) => p,
            None => return Ok(None),
        };

        let new_rating = provider.push_review(Review {
            rating,
            comment: comment.trim().to_string(),
            ts: Utc::now(),
        });
        log::info!(
            "Review {} for {} ({} reviews, rating now {})",
            rating,
            provider_id,
            provider.reviews.len(),
            new_rating
        );

        self.save_providers()?;
        Ok(Some(new_rating))
    }
}

// ============================================================================
// TESTS
// ============================================================================
