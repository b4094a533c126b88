// ⚙️ Configuration - paths, environment overrides and tuning constants
//
// Keep ALL numeric tuning values here so scoring and cutoffs are not scattered
// across modules.

use std::path::{Path, PathBuf};

pub mod storage {
    pub const DEFAULT_DATA_DIR: &str = "data";
    pub const PROVIDERS_FILE: &str = "providers.json";
    pub const BOOKINGS_FILE: &str = "bookings.json";
    pub const EXPORT_FILE: &str = "bookings.csv";
    /// Appended to an unreadable snapshot's file name when it is set aside
    pub const BACKUP_SUFFIX: &str = ".bak";
}

pub mod logging {
    pub const LOG_DIR_NAME: &str = "logs";
    pub const LOG_FILE_NAME: &str = "smart_travel";
    pub const DEFAULT_LOG_LEVEL: &str = "info";

    pub const LOG_ROTATE_SIZE_BYTES: u64 = 2 * 1024 * 1024;
    pub const LOG_ROTATE_KEEP_FILES: usize = 3;
}

pub mod matching {
    /// Dominates any rating spread so a language match always ranks first
    pub const LANGUAGE_MATCH_BONUS: f64 = 100.0;
    pub const REVIEW_BONUS_PER_REVIEW: f64 = 0.1;
    pub const REVIEW_BONUS_CAP: f64 = 1.0;
}

pub mod phrases {
    pub const PRIMARY_CUTOFF: f64 = 0.6;
    pub const SUGGESTION_CUTOFF: f64 = 0.4;
    pub const SUGGESTION_LIMIT: usize = 3;
}

pub mod reviews {
    pub const MIN_RATING: f64 = 1.0;
    pub const MAX_RATING: f64 = 5.0;
    /// Rating assumed for a stored provider record that has none
    pub const DEFAULT_RATING: f64 = 0.0;
}

pub mod scheduling {
    /// Simulated turnaround before a busy provider is free again
    pub const BUSY_TURNAROUND_HOURS: i64 = 1;
}

pub mod analytics {
    pub const TOP_N: usize = 3;
}

pub mod env {
    pub const DATA_DIR: &str = "SMART_TRAVEL_DATA_DIR";
    pub const DETECTOR: &str = "SMART_TRAVEL_DETECTOR";
    pub const NO_BROWSER: &str = "SMART_TRAVEL_NO_BROWSER";
    pub const LOG_LEVEL: &str = "SMART_TRAVEL_LOG_LEVEL";
}

// ============================================================================
// DATA PATHS
// ============================================================================

/// Locations of the two JSON snapshots
#[derive(Debug, Clone, PartialEq)]
pub struct DataPaths {
    pub data_dir: PathBuf,
    pub providers_file: PathBuf,
    pub bookings_file: PathBuf,
}

impl DataPaths {
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        let data_dir = dir.as_ref().to_path_buf();
        DataPaths {
            providers_file: data_dir.join(storage::PROVIDERS_FILE),
            bookings_file: data_dir.join(storage::BOOKINGS_FILE),
            data_dir,
        }
    }

    pub fn log_dir(&self) -> PathBuf {
        self.data_dir.join(logging::LOG_DIR_NAME)
    }

    pub fn default_export_file(&self) -> PathBuf {
        self.data_dir.join(storage::EXPORT_FILE)
    }
}

// ============================================================================
// APP CONFIG
// ============================================================================

/// Which language detector to use
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DetectorMode {
    /// Statistical detector when compiled in, heuristic otherwise
    Auto,
    /// Always use the keyword heuristic
    Heuristic,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub paths: DataPaths,
    pub detector: DetectorMode,
    pub open_browser: bool,
    pub log_level: String,
}

impl AppConfig {
    /// Resolve configuration from process environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let data_dir = non_empty(env::DATA_DIR).unwrap_or_else(|| storage::DEFAULT_DATA_DIR.to_string());

        let detector = match non_empty(env::DETECTOR).map(|v| v.trim().to_lowercase()) {
            Some(ref v) if v == "heuristic" => DetectorMode::Heuristic,
            _ => DetectorMode::Auto,
        };

        AppConfig {
            paths: DataPaths::in_dir(data_dir),
            detector,
            open_browser: non_empty(env::NO_BROWSER).is_none(),
            log_level: non_empty(env::LOG_LEVEL)
                .unwrap_or_else(|| logging::DEFAULT_LOG_LEVEL.to_string()),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

/// Fresh data directory under the system temp dir (tests only)
#[cfg(test)]
pub(crate) fn temp_paths() -> DataPaths {
    DataPaths::in_dir(std::env::temp_dir().join(format!("smart-travel-test-{}", uuid::Uuid::new_v4())))
}

// ============================================================================
// TESTS
// ============================================================================
