//! Reservations as read from an external calendar, before conversion.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cabin::MatchedVia;

/// Prefix for reservation ids derived from the source event UID.
pub const ID_PREFIX: &str = "ext-";

/// Where a reservation was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReservationSource {
    /// Downloaded from the channel's feed URL
    External,
    /// Read from a local .ics file
    Local,
}

/// A booked date range from an external feed.
///
/// `start <= end` always holds for reservations produced by the parser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalReservation {
    /// Stable id derived from the source event UID
    pub id: String,
    /// Cabin label as extracted and cleaned, not yet mapped to a known cabin
    pub cabin: String,
    pub cabin_match: MatchedVia,
    pub guest_name: String,
    pub guest_phone: Option<String>,
    pub guest_email: Option<String>,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    /// Estimated price per night, 0 when the feed carries none
    pub nightly_price: u64,
    /// `nightly_price` times the number of nights
    pub total_price: u64,
    pub notes: String,
    pub source: ReservationSource,
    pub source_event_id: String,
    pub synced_at: DateTime<Utc>,
}

impl ExternalReservation {
    /// Whole days covered, rounding partial days up.
    pub fn nights(&self) -> i64 {
        whole_days(self.start, self.end)
    }
}

/// Number of days between two instants, rounded up. Negative spans give
/// non-positive results.
pub fn whole_days(start: DateTime<Utc>, end: DateTime<Utc>) -> i64 {
    const SECONDS_PER_DAY: i64 = 86_400;

    let seconds = (end - start).num_seconds();
    if seconds <= 0 {
        return seconds / SECONDS_PER_DAY;
    }
    (seconds + SECONDS_PER_DAY - 1) / SECONDS_PER_DAY
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_whole_days_rounds_up() {
        let start = Utc.with_ymd_and_hms(2025, 1, 10, 15, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2025, 1, 13, 11, 0, 0).unwrap();
        assert_eq!(whole_days(start, end), 3);

        let end = Utc.with_ymd_and_hms(2025, 1, 13, 15, 0, 0).unwrap();
        assert_eq!(whole_days(start, end), 3);

        let end = Utc.with_ymd_and_hms(2025, 1, 13, 15, 0, 1).unwrap();
        assert_eq!(whole_days(start, end), 4);
    }

    #[test]
    fn test_whole_days_same_instant() {
        let t = Utc.with_ymd_and_hms(2025, 1, 10, 0, 0, 0).unwrap();
        assert_eq!(whole_days(t, t), 0);
    }
}
