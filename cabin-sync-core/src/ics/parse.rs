//! Reading reservations out of an iCalendar feed using the icalendar crate's parser.

use chrono::{DateTime, NaiveTime, TimeZone, Utc};
use icalendar::{
    CalendarDateTime, DatePerhapsTime,
    parser::{Component, Property, read_calendar, unfold},
};

use super::price::estimate_nightly_price;
use crate::cabin::{collapse_whitespace, resolve};
use crate::error::{ImportError, ImportResult};
use crate::guest;
use crate::reservation::{ExternalReservation, ID_PREFIX, ReservationSource, whole_days};

/// Parse a feed downloaded from the booking channel.
pub fn parse(ics_text: &str) -> ImportResult<Vec<ExternalReservation>> {
    parse_with_source(ics_text, ReservationSource::External)
}

/// Parse ICS content into reservations, tagging each with `source`.
///
/// Events that lack dates or a summary, or whose dates cannot be read, are
/// skipped. Only a document that cannot be tokenized at all is an error.
pub fn parse_with_source(
    ics_text: &str,
    source: ReservationSource,
) -> ImportResult<Vec<ExternalReservation>> {
    if !has_vcalendar(ics_text) {
        return Err(ImportError::IcsParse(
            "document has no VCALENDAR component".into(),
        ));
    }

    let unfolded = unfold(ics_text);
    let calendar = read_calendar(&unfolded).map_err(ImportError::IcsParse)?;

    let mut vevents = Vec::new();
    collect_vevents(&calendar.components, &mut vevents);

    let synced_at = Utc::now();
    let reservations: Vec<ExternalReservation> = vevents
        .into_iter()
        .filter_map(|vevent| parse_reservation(vevent, source, synced_at))
        .collect();

    log::info!("Parsed {} reservation(s) from calendar", reservations.len());

    Ok(reservations)
}

/// Property names are case-insensitive, so `begin:vcalendar` counts.
fn has_vcalendar(text: &str) -> bool {
    text.lines().any(|line| {
        line.trim()
            .get(..15)
            .is_some_and(|head| head.eq_ignore_ascii_case("BEGIN:VCALENDAR"))
    })
}

fn collect_vevents<'c, 'a>(components: &'c [Component<'a>], out: &mut Vec<&'c Component<'a>>) {
    for component in components {
        let name: &str = component.name.as_ref();
        if name.eq_ignore_ascii_case("VEVENT") {
            out.push(component);
        } else if name.eq_ignore_ascii_case("VCALENDAR") {
            collect_vevents(&component.components, out);
        }
    }
}

fn parse_reservation(
    vevent: &Component,
    source: ReservationSource,
    synced_at: DateTime<Utc>,
) -> Option<ExternalReservation> {
    // Required fields
    let (Some(start_prop), Some(end_prop), Some(summary)) = (
        non_empty_prop(vevent, "DTSTART"),
        non_empty_prop(vevent, "DTEND"),
        text_prop(vevent, "SUMMARY"),
    ) else {
        log::debug!("Skipping event without DTSTART, DTEND or SUMMARY");
        return None;
    };

    let Some(start) = to_utc(start_prop) else {
        log::warn!(
            "Skipping '{}': unreadable DTSTART '{}'",
            summary,
            start_prop.val.as_ref()
        );
        return None;
    };
    let Some(end) = to_utc(end_prop) else {
        log::warn!(
            "Skipping '{}': unreadable DTEND '{}'",
            summary,
            end_prop.val.as_ref()
        );
        return None;
    };
    if end < start {
        log::warn!("Skipping '{summary}': ends ({end}) before it starts ({start})");
        return None;
    }

    let description = text_prop(vevent, "DESCRIPTION");
    let location = text_prop(vevent, "LOCATION");

    let guest = guest::extract(Some(summary.as_str()), description.as_deref());
    let cabin = resolve(location.as_deref(), Some(summary.as_str()), description.as_deref());

    let nights = whole_days(start, end).max(0) as u64;
    let nightly_price = description.as_deref().map(estimate_nightly_price).unwrap_or(0);

    let source_event_id = match non_empty_prop(vevent, "UID") {
        Some(uid) => uid.val.as_ref().trim().to_string(),
        None => fallback_uid(start, &summary),
    };

    Some(ExternalReservation {
        id: format!("{ID_PREFIX}{source_event_id}"),
        cabin: cabin.name,
        cabin_match: cabin.matched_via,
        guest_name: guest.name,
        guest_phone: Some(guest.phone).filter(|p| !p.is_empty()),
        guest_email: Some(guest.email).filter(|e| !e.is_empty()),
        start,
        end,
        nightly_price,
        total_price: nightly_price.saturating_mul(nights),
        notes: description.unwrap_or_default(),
        source,
        source_event_id,
        synced_at,
    })
}

fn non_empty_prop<'c>(vevent: &'c Component<'_>, name: &str) -> Option<&'c Property<'c>> {
    vevent
        .find_prop(name)
        .filter(|p| !p.val.as_ref().trim().is_empty())
}

/// A text property with ICS escapes removed, or None if absent or blank.
fn text_prop(vevent: &Component, name: &str) -> Option<String> {
    non_empty_prop(vevent, name).map(|p| unescape_text(p.val.as_ref()))
}

/// Undo RFC 5545 TEXT escaping.
fn unescape_text(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') | Some('N') => out.push('\n'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out.trim().to_string()
}

/// Convert a DTSTART/DTEND property to a UTC instant.
///
/// All-day dates become midnight UTC, floating times are read as UTC, and
/// TZID times are converted through chrono-tz.
fn to_utc(prop: &Property) -> Option<DateTime<Utc>> {
    match DatePerhapsTime::try_from(prop).ok()? {
        DatePerhapsTime::Date(d) => Some(d.and_time(NaiveTime::MIN).and_utc()),
        DatePerhapsTime::DateTime(cal_dt) => match cal_dt {
            CalendarDateTime::Utc(dt) => Some(dt),
            CalendarDateTime::Floating(naive) => Some(naive.and_utc()),
            CalendarDateTime::WithTimezone { date_time, tzid } => {
                let tz: chrono_tz::Tz = tzid.parse().ok()?;
                tz.from_local_datetime(&date_time)
                    .earliest()
                    .map(|dt| dt.with_timezone(&Utc))
            }
        },
    }
}

/// Stable stand-in id for events that arrive without a UID.
fn fallback_uid(start: DateTime<Utc>, summary: &str) -> String {
    let slug = collapse_whitespace(summary)
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect::<String>();

    format!("{}-{}", start.format("%Y%m%d"), slug)
}
