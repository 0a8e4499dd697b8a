//! Import orchestration: read a feed, then hand bookings to the host one at a time.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::booking::{Booking, to_booking};
use crate::cabin::map_to_known;
use crate::error::{ImportError, ImportResult};
use crate::ics;
use crate::reservation::{ExternalReservation, ReservationSource};

/// Outcome of a [`run_sync`] pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncReport {
    pub total: usize,
    pub success_count: usize,
    pub errors: Vec<String>,
    pub created_ids: Vec<String>,
}

impl SyncReport {
    pub fn is_complete_success(&self) -> bool {
        self.errors.is_empty() && self.success_count == self.total
    }
}

/// Parse a local .ics file's contents and map cabins onto `known_cabins`.
///
/// Zero reservations is not an error; the caller decides what it means.
pub fn sync_from_text(
    ics_text: &str,
    known_cabins: &[String],
) -> ImportResult<Vec<ExternalReservation>> {
    parse_and_remap(ics_text, ReservationSource::Local, known_cabins)
}

/// Download a feed and parse it like [`sync_from_text`].
///
/// `webcal://` URLs are fetched over https. There is no timeout or retry.
pub async fn sync_from_url(
    url: &str,
    known_cabins: &[String],
) -> ImportResult<Vec<ExternalReservation>> {
    let url = feed_url(url);
    log::debug!("Fetching calendar feed from {url}");

    let response = reqwest::get(&url).await?;
    let status = response.status();
    if !status.is_success() {
        return Err(ImportError::Fetch {
            url,
            status: status.as_u16(),
        });
    }

    let body = response.text().await?;
    parse_and_remap(&body, ReservationSource::External, known_cabins)
}

/// Convert and persist each reservation in order.
///
/// A failed conversion or `persist` call is recorded as
/// `"Error in reservation <n>: <message>"` (n is 1-based) and the pass
/// moves on to the next reservation.
pub fn run_sync<F, E>(
    reservations: &[ExternalReservation],
    known_cabins: &[String],
    mut persist: F,
) -> SyncReport
where
    F: FnMut(&Booking) -> Result<String, E>,
    E: Display,
{
    let mut report = SyncReport {
        total: reservations.len(),
        ..Default::default()
    };

    for (i, reservation) in reservations.iter().enumerate() {
        let result = to_booking(reservation, known_cabins)
            .map_err(|e| e.to_string())
            .and_then(|booking| persist(&booking).map_err(|e| e.to_string()));

        match result {
            Ok(id) => {
                report.success_count += 1;
                report.created_ids.push(id);
            }
            Err(message) => {
                log::warn!("Reservation {} ({}) failed: {message}", i + 1, reservation.id);
                report
                    .errors
                    .push(format!("Error in reservation {}: {message}", i + 1));
            }
        }
    }

    log::info!(
        "Imported {}/{} reservation(s), {} error(s)",
        report.success_count,
        report.total,
        report.errors.len()
    );

    report
}

fn parse_and_remap(
    ics_text: &str,
    source: ReservationSource,
    known_cabins: &[String],
) -> ImportResult<Vec<ExternalReservation>> {
    let mut reservations = ics::parse_with_source(ics_text, source)?;

    for reservation in &mut reservations {
        reservation.cabin = map_to_known(&reservation.cabin, known_cabins);
    }

    Ok(reservations)
}

fn feed_url(url: &str) -> String {
    match url.strip_prefix("webcal://") {
        Some(rest) => format!("https://{rest}"),
        None => url.to_string(),
    }
}
