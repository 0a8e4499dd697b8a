//! The host's booking record and conversion from external reservations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cabin::map_to_known;
use crate::error::{ImportError, ImportResult};
use crate::reservation::{ExternalReservation, whole_days};

/// Guests assumed when the feed does not say; Airbnb feeds never do.
pub const DEFAULT_GUESTS: u32 = 2;

/// Discount codes the host recognizes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscountCode {
    #[default]
    None,
    Family,
    Friends,
    Returning,
    LongStay,
}

/// A booking ready to be stored. Ids are assigned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub title: String,
    pub cabin: String,
    pub location: String,
    pub guests: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default)]
    pub discount: DiscountCode,
    pub paid: bool,
    pub monthly: bool,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub days: u32,
    pub nightly_rate: u64,
    pub total: u64,
    #[serde(default)]
    pub attachments: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub comments: String,
}

/// Convert an external reservation into a booking.
///
/// Imported bookings are marked paid (the channel collects payment) and
/// never monthly. The total is carried over from the reservation rather
/// than recomputed.
pub fn to_booking(ext: &ExternalReservation, known_cabins: &[String]) -> ImportResult<Booking> {
    if ext.end < ext.start {
        return Err(ImportError::InvalidReservation(format!(
            "'{}' ends before it starts",
            ext.id
        )));
    }

    let cabin = map_to_known(&ext.cabin, known_cabins);
    let days = whole_days(ext.start, ext.end).max(1);
    let days = u32::try_from(days).map_err(|_| {
        ImportError::InvalidReservation(format!("'{}' spans {days} days", ext.id))
    })?;

    Ok(Booking {
        title: ext.guest_name.clone(),
        location: cabin.clone(),
        cabin,
        guests: DEFAULT_GUESTS,
        phone: ext.guest_phone.clone(),
        discount: DiscountCode::None,
        paid: true,
        monthly: false,
        start: ext.start,
        end: ext.end,
        days,
        nightly_rate: ext.nightly_price,
        total: ext.total_price,
        attachments: Vec::new(),
        images: Vec::new(),
        comments: String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cabin::MatchedVia;
    use crate::reservation::ReservationSource;
    use chrono::{Duration, TimeZone};

    fn reservation(cabin: &str, hours: i64) -> ExternalReservation {
        let start = Utc.with_ymd_and_hms(2025, 2, 10, 15, 0, 0).unwrap();
        ExternalReservation {
            id: "ext-abc".into(),
            cabin: cabin.into(),
            cabin_match: MatchedVia::Pattern,
            guest_name: "Ana Pérez".into(),
            guest_phone: Some("+56 9 1234 5678".into()),
            guest_email: Some("ana@example.cl".into()),
            start,
            end: start + Duration::hours(hours),
            nightly_price: 50_000,
            total_price: 123_456,
            notes: "late check-in".into(),
            source: ReservationSource::External,
            source_event_id: "abc".into(),
            synced_at: start,
        }
    }

    #[test]
    fn test_to_booking_fields() {
        let known = vec!["Regional Uno".to_string(), "Teja Dos".to_string()];
        let booking = to_booking(&reservation("Teja 2", 68), &known).unwrap();

        assert_eq!(booking.title, "Ana Pérez");
        assert_eq!(booking.cabin, "Teja Dos");
        assert_eq!(booking.location, "Teja Dos");
        assert_eq!(booking.guests, 2);
        assert_eq!(booking.phone.as_deref(), Some("+56 9 1234 5678"));
        assert_eq!(booking.discount, DiscountCode::None);
        assert!(booking.paid);
        assert!(!booking.monthly);
        assert_eq!(booking.days, 3);
        assert_eq!(booking.nightly_rate, 50_000);
        assert!(booking.attachments.is_empty() && booking.images.is_empty());
        assert!(booking.comments.is_empty());
    }

    #[test]
    fn test_to_booking_carries_total_through() {
        let booking = to_booking(&reservation("Regional Uno", 48), &[]).unwrap();
        assert_eq!(booking.total, 123_456);
    }

    #[test]
    fn test_to_booking_minimum_one_day() {
        let booking = to_booking(&reservation("Regional Uno", 0), &[]).unwrap();
        assert_eq!(booking.days, 1);
    }

    #[test]
    fn test_to_booking_unknown_cabin_kept() {
        let booking = to_booking(&reservation("Lago Ranco", 24), &[]).unwrap();
        assert_eq!(booking.cabin, "Lago Ranco");
    }

    #[test]
    fn test_to_booking_rejects_reversed_dates() {
        let err = to_booking(&reservation("Regional Uno", -5), &[]).unwrap_err();
        assert!(matches!(err, ImportError::InvalidReservation(_)));
    }

    #[test]
    fn test_discount_code_serializes_snake_case() {
        let json = serde_json::to_string(&DiscountCode::LongStay).unwrap();
        assert_eq!(json, "\"long_stay\"");
    }
}
