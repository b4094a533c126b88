// Smart Travel Assistant - Core Library
// Matches tourists to local providers, translates demo phrases and records
// bookings/reviews in local JSON snapshots. Used by the console binary and tests.

pub mod config;
pub mod logging;
pub mod error;
pub mod entities;
pub mod storage;
pub mod store;
pub mod booking;        // Booking manager (impl TravelStore)
pub mod reviews;        // Review manager (impl TravelStore)
pub mod text;
pub mod language;
pub mod phrasebook;
pub mod matcher;
pub mod analytics;
pub mod notify;
pub mod maps;
pub mod export;
pub mod console;

// Only compile the dashboard when the TUI feature is enabled
#[cfg(feature = "tui")]
pub mod ui;

// Re-export commonly used types
pub use config::{AppConfig, DataPaths, DetectorMode};
pub use error::TravelError;
pub use entities::{
    Provider, Review, Location, default_providers,
    Booking, BookingStatus, StatusChange,
};
pub use store::{RecoveredFile, TravelStore};
pub use booking::next_slot_from;
pub use reviews::validate_rating;
pub use text::{normalize_text, title_case, similarity_ratio, close_matches};
pub use language::{
    DetectedLanguage, LanguageDetector, HeuristicDetector, select_detector,
};
#[cfg(feature = "langdetect")]
pub use language::StatisticalDetector;
pub use phrasebook::{Phrasebook, PhraseEntry, Translation};
pub use matcher::{MatchQuery, RankedProvider, match_providers, score_provider};
pub use analytics::{AnalyticsSummary, FrequencyTable, summarize};
pub use notify::Notification;
pub use maps::{map_url, UrlOpener, SystemBrowser, NoBrowser, select_opener};
pub use export::export_bookings_csv;
pub use console::Console;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
