// 🗂️ Travel Store - owns the provider and booking collections
//
// Built once at startup from the persisted snapshots and passed by reference
// to the booking, review and analytics operations. Mutations persist the
// affected collection immediately (see booking.rs and reviews.rs).

use anyhow::{bail, Result};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{self, DataPaths};
use crate::entities::{default_providers, Booking, Provider};
use crate::storage;

pub struct TravelStore {
    paths: DataPaths,
    pub(crate) providers: Vec<Provider>,
    pub(crate) bookings: Vec<Booking>,

    /// Snapshot files that could not be read and were replaced by defaults
    recovered: Vec<RecoveredFile>,
}

/// A snapshot that failed to load at startup
#[derive(Debug, Clone, PartialEq)]
pub struct RecoveredFile {
    pub path: PathBuf,

    /// Copy of the unreadable content; None when the copy failed, in which
    /// case the store refuses to overwrite `path`
    pub backup: Option<PathBuf>,
}

impl RecoveredFile {
    /// Copy the unreadable file next to itself before defaults replace it
    fn preserve(path: &Path) -> Self {
        let mut name = OsString::from(path.as_os_str());
        name.push(config::storage::BACKUP_SUFFIX);
        let backup = PathBuf::from(name);

        match fs::copy(path, &backup) {
            Ok(_) => {
                log::warn!("Kept unreadable {} as {}", path.display(), backup.display());
                RecoveredFile { path: path.to_path_buf(), backup: Some(backup) }
            }
            Err(e) => {
                log::error!("Could not back up {}: {}", path.display(), e);
                RecoveredFile { path: path.to_path_buf(), backup: None }
            }
        }
    }
}

impl TravelStore {
    /// Load both snapshots, falling back to the seed providers / no bookings
    /// when a file is missing or unreadable.
    pub fn open(paths: DataPaths) -> Self {
        let mut recovered = Vec::new();

        let providers = match storage::load_json::<Vec<Provider>, _>(&paths.providers_file) {
            Ok(Some(providers)) => providers,
            Ok(None) => default_providers(),
            Err(e) => {
                log::warn!("Using default providers: {:#}", e);
                recovered.push(RecoveredFile::preserve(&paths.providers_file));
                default_providers()
            }
        };

        let bookings = match storage::load_json::<Vec<Booking>, _>(&paths.bookings_file) {
            Ok(Some(bookings)) => bookings,
            Ok(None) => Vec::new(),
            Err(e) => {
                log::warn!("Starting with no bookings: {:#}", e);
                recovered.push(RecoveredFile::preserve(&paths.bookings_file));
                Vec::new()
            }
        };

        log::info!(
            "Loaded {} providers and {} bookings from {}",
            providers.len(),
            bookings.len(),
            paths.data_dir.display()
        );

        TravelStore { paths, providers, bookings, recovered }
    }

    pub fn paths(&self) -> &DataPaths {
        &self.paths
    }

    pub fn providers(&self) -> &[Provider] {
        &self.providers
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn recovered_files(&self) -> &[RecoveredFile] {
        &self.recovered
    }

    pub fn find_provider(&self, id: &str) -> Option<&Provider> {
        self.providers.iter().find(|p| p.id == id)
    }

    pub(crate) fn find_provider_mut(&mut self, id: &str) -> Option<&mut Provider> {
        self.providers.iter_mut().find(|p| p.id == id)
    }

    pub fn save_providers(&self) -> Result<()> {
        self.ensure_writable(&self.paths.providers_file)?;
        storage::save_json(&self.paths.providers_file, &self.providers)
    }

    pub fn save_bookings(&self) -> Result<()> {
        self.ensure_writable(&self.paths.bookings_file)?;
        storage::save_json(&self.paths.bookings_file, &self.bookings)
    }

    /// An unreadable snapshot may only be replaced once a backup of it exists
    fn ensure_writable(&self, path: &Path) -> Result<()> {
        let unsaved = self.recovered.iter().any(|r| r.path == path && r.backup.is_none());
        if unsaved {
            bail!("Refusing to overwrite unreadable {} (backup failed)", path.display());
        }
        Ok(())
    }

    /// Write both snapshots (done at startup so the files exist from first run)
    pub fn persist_all(&self) -> Result<()> {
        self.save_providers()?;
        self.save_bookings()
    }
}

// ============================================================================
// TESTS
// ============================================================================
