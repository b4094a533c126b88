// 💾 Storage - whole-file JSON snapshots
//
// Every write replaces the whole document. There is no locking and no partial
// update; one interactive user owns the data directory.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Read a JSON document.
///
/// - `Ok(None)` when the file does not exist yet
/// - `Err` when it exists but cannot be read or parsed; the caller decides
///   whether to fall back
pub fn load_json<T, P>(path: P) -> Result<Option<T>>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse JSON in {}", path.display()))?;

    Ok(Some(value))
}

/// Overwrite `path` with a pretty-printed JSON document, creating the parent
/// directory if needed.
pub fn save_json<T, P>(path: P, value: &T) -> Result<()>
where
    T: Serialize + ?Sized,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create data dir {}", parent.display()))?;
        }
    }

    let content = serde_json::to_string_pretty(value).context("Failed to serialize JSON")?;

    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;

    log::debug!("Saved {}", path.display());
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::temp_paths;
    use crate::entities::{default_providers, Provider};

    #[test]
    fn test_missing_file_is_none() {
        let paths = temp_paths();
        let loaded: Option<Vec<Provider>> = load_json(&paths.providers_file).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_provider_round_trip() {
        let paths = temp_paths();
        let mut providers = default_providers();
        providers[1].available = false;

        save_json(&paths.providers_file, &providers).unwrap();
        let loaded: Vec<Provider> = load_json(&paths.providers_file).unwrap().unwrap();

        let summary = |ps: &[Provider]| -> Vec<(String, String, f64, bool)> {
            ps.iter().map(|p| (p.id.clone(), p.name.clone(), p.rating, p.available)).collect()
        };
        assert_eq!(summary(&loaded), summary(&providers));

        fs::remove_dir_all(&paths.data_dir).ok();
    }

    #[test]
    fn test_corrupt_file_is_error() {
        let paths = temp_paths();
        fs::create_dir_all(&paths.data_dir).unwrap();
        fs::write(&paths.bookings_file, "{ not json").unwrap();

        let result: Result<Option<Vec<Provider>>> = load_json(&paths.bookings_file);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Failed to parse JSON"));

        fs::remove_dir_all(&paths.data_dir).ok();
    }

    #[test]
    fn test_save_writes_top_level_array() {
        let paths = temp_paths();
        save_json(&paths.providers_file, &default_providers()).unwrap();

        let raw = fs::read_to_string(&paths.providers_file).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert!(value.is_array());
        assert_eq!(value[0]["id"], "p1");
        assert_eq!(value[0]["location"]["lat"], 17.45);

        fs::remove_dir_all(&paths.data_dir).ok();
    }
}
