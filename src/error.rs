// Domain errors surfaced through anyhow so callers can downcast them

/// Rejections raised by the booking and review operations
#[derive(Debug, Clone, PartialEq)]
pub enum TravelError {
    /// No provider with this id
    ProviderNotFound(String),

    /// Review score outside 1-5 (or not a number)
    RatingOutOfRange(f64),

    /// Booking requested without a tourist name
    EmptyTouristName,
}

impl std::fmt::Display for TravelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TravelError::ProviderNotFound(id) => write!(f, "provider not found: {}", id),
            TravelError::RatingOutOfRange(rating) => write!(
                f,
                "rating {} is outside {}-{}",
                rating,
                crate::config::reviews::MIN_RATING,
                crate::config::reviews::MAX_RATING
            ),
            TravelError::EmptyTouristName => write!(f, "tourist name cannot be empty"),
        }
    }
}

impl std::error::Error for TravelError {}
