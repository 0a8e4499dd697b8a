//! Booking store backed by a directory of JSON files, one per booking.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use cabin_sync_core::Booking;
use cabin_sync_core::availability::find_conflict;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredBooking {
    pub id: String,
    #[serde(flatten)]
    pub booking: Booking,
}

pub struct BookingStore {
    dir: PathBuf,
    bookings: Vec<StoredBooking>,
}

impl BookingStore {
    /// Open the store at `dir`, creating the directory if needed.
    pub fn open(dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create bookings directory {}", dir.display()))?;

        let mut bookings = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            if path.extension().is_none_or(|e| e != "json") {
                continue;
            }

            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let stored: StoredBooking = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse {}", path.display()))?;
            bookings.push(stored);
        }
        bookings.sort_by(|a, b| a.booking.start.cmp(&b.booking.start));
        log::debug!("Loaded {} booking(s) from {}", bookings.len(), dir.display());

        Ok(BookingStore {
            dir: dir.to_path_buf(),
            bookings,
        })
    }

    pub fn bookings(&self) -> &[StoredBooking] {
        &self.bookings
    }

    /// Store a new booking and return its id. Refuses bookings that overlap
    /// an existing one for the same cabin.
    pub fn create(&mut self, booking: &Booking) -> Result<String> {
        if let Some(existing) = find_conflict(booking, self.bookings.iter().map(|s| &s.booking)) {
            bail!(
                "{} is already booked from {} to {} ({})",
                existing.cabin,
                existing.start.format("%Y-%m-%d"),
                existing.end.format("%Y-%m-%d"),
                existing.title
            );
        }

        let stored = StoredBooking {
            id: Uuid::new_v4().to_string(),
            booking: booking.clone(),
        };

        let path = self.dir.join(format!("{}.json", stored.id));
        let content =
            serde_json::to_string_pretty(&stored).context("Failed to serialize booking")?;
        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;

        let id = stored.id.clone();
        self.bookings.push(stored);
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cabin_sync_core::DiscountCode;
    use chrono::{TimeZone, Utc};

    fn booking(cabin: &str, start_day: u32, end_day: u32) -> Booking {
        Booking {
            title: "Ana".into(),
            cabin: cabin.into(),
            location: cabin.into(),
            guests: 2,
            phone: None,
            discount: DiscountCode::None,
            paid: true,
            monthly: false,
            start: Utc.with_ymd_and_hms(2025, 4, start_day, 0, 0, 0).unwrap(),
            end: Utc.with_ymd_and_hms(2025, 4, end_day, 0, 0, 0).unwrap(),
            days: end_day - start_day,
            nightly_rate: 40_000,
            total: 40_000 * u64::from(end_day - start_day),
            attachments: vec![],
            images: vec![],
            comments: String::new(),
        }
    }

    #[test]
    fn test_create_persists_and_reopens() {
        let dir = tempfile::tempdir().unwrap();

        let mut store = BookingStore::open(dir.path()).unwrap();
        let id = store.create(&booking("Teja Uno", 1, 3)).unwrap();
        assert!(dir.path().join(format!("{id}.json")).exists());

        let reopened = BookingStore::open(dir.path()).unwrap();
        assert_eq!(reopened.bookings().len(), 1);
        assert_eq!(reopened.bookings()[0].id, id);
        assert_eq!(reopened.bookings()[0].booking.cabin, "Teja Uno");
    }

    #[test]
    fn test_create_rejects_double_booking() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = BookingStore::open(dir.path()).unwrap();

        store.create(&booking("Teja Uno", 1, 5)).unwrap();
        let err = store.create(&booking("Teja Uno", 4, 6)).unwrap_err();
        assert!(err.to_string().contains("already booked"));

        // Back-to-back stays and other cabins are fine
        store.create(&booking("Teja Uno", 5, 7)).unwrap();
        store.create(&booking("Regional Dos", 2, 4)).unwrap();
        assert_eq!(store.bookings().len(), 3);
    }
}
