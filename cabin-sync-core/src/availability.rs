//! Double-booking checks.

use chrono::{DateTime, Utc};

use crate::booking::Booking;

/// Whether two half-open stays `[start, end)` share any time. A checkout and
/// a check-in on the same instant do not overlap.
pub fn overlaps(
    a: (DateTime<Utc>, DateTime<Utc>),
    b: (DateTime<Utc>, DateTime<Utc>),
) -> bool {
    a.0 < b.1 && b.0 < a.1
}

/// The first existing booking for the same cabin that overlaps `candidate`.
pub fn find_conflict<'a, I>(candidate: &Booking, existing: I) -> Option<&'a Booking>
where
    I: IntoIterator<Item = &'a Booking>,
{
    existing.into_iter().find(|other| {
        other.cabin == candidate.cabin
            && overlaps((candidate.start, candidate.end), (other.start, other.end))
    })
}
