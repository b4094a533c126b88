// 📤 CSV export of the booking list

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::entities::Booking;

/// One flat CSV row per booking
#[derive(Debug, Serialize)]
struct BookingRow<'a> {
    id: &'a str,
    tourist: &'a str,
    provider_id: &'a str,
    provider_name: &'a str,
    service: &'a str,
    language: &'a str,
    phone: &'a str,
    status: &'static str,
    created_at: String,
    history_len: usize,
}

impl<'a> From<&'a Booking> for BookingRow<'a> {
    fn from(b: &'a Booking) -> Self {
        BookingRow {
            id: &b.id,
            tourist: &b.tourist,
            provider_id: &b.provider_id,
            provider_name: &b.provider_name,
            service: &b.service,
            language: &b.language,
            phone: b.phone.as_deref().unwrap_or(""),
            status: b.status.as_str(),
            created_at: b.created_at.to_rfc3339(),
            history_len: b.history.len(),
        }
    }
}

/// Write all bookings to `path`. Returns the number of rows written.
pub fn export_bookings_csv<P: AsRef<Path>>(bookings: &[Booking], path: P) -> Result<usize> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }

    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to open CSV file: {}", path.display()))?;

    // Header comes from the first serialized row; write it explicitly so an
    // empty export still has one.
    if bookings.is_empty() {
        writer.write_record([
            "id", "tourist", "provider_id", "provider_name", "service",
            "language", "phone", "status", "created_at", "history_len",
        ])?;
    }

    for booking in bookings {
        writer.serialize(BookingRow::from(booking))?;
    }
    writer.flush().context("Failed to flush CSV")?;

    log::info!("Exported {} bookings to {}", bookings.len(), path.display());
    Ok(bookings.len())
}
