//! Raw catalog records to core event conversion.
//!
//! Flattens the upstream wrapper objects into [`CatalogEvent`] fields and
//! parses timestamp strings leniently. A timestamp that fails to parse is
//! simply dropped: the event will resolve as invalid later and be excluded
//! silently, matching how the system treats malformed individual records.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use tracing::debug;

use whatson_core::{CatalogEvent, Schedule};

use crate::raw::{RawCatalogEvent, RawTimeAndDate};

/// Parses an upstream timestamp string.
///
/// Accepted forms, in order: RFC 3339, naive datetime
/// (`2025-12-15T19:30:00`), date-only (`2025-12-15`, read as midnight UTC).
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0).expect("valid time").and_utc());
    }
    debug!(value, "dropping unparsable timestamp");
    None
}

fn parse_field(value: Option<&str>) -> Option<DateTime<Utc>> {
    value.and_then(parse_timestamp)
}

/// Converts the raw date record into a [`Schedule`].
fn convert_schedule(raw: &RawTimeAndDate) -> Schedule {
    Schedule {
        single_day: raw.single_day_event,
        date: parse_field(raw.date.as_deref()),
        start_date: parse_field(raw.start_date.as_deref()),
        end_date: parse_field(raw.end_date.as_deref()),
    }
}

/// Converts one raw record into a [`CatalogEvent`].
pub fn normalize_event(raw: &RawCatalogEvent) -> CatalogEvent {
    CatalogEvent {
        title: raw.title.clone(),
        short_description: raw.short_description.clone(),
        schedule: raw.time_and_date.as_ref().map(convert_schedule),
        event_type: raw.event_type.as_ref().and_then(|t| t.title.clone()),
        category: raw.categories.as_ref().and_then(|t| t.title.clone()),
        venue: raw
            .entry_details
            .as_ref()
            .and_then(|d| d.venue.as_ref())
            .and_then(|v| v.place.clone()),
        thumbnail_url: raw.thumbnail.as_ref().and_then(|t| t.url.clone()),
        details_url: raw.redirect_url.as_ref().and_then(|r| r.redirect_to.clone()),
    }
}

/// Batch converts raw records, preserving order.
///
/// No filtering happens here; validity and cutoff checks run when the
/// canonical set is built.
pub fn normalize_events(raw_events: &[RawCatalogEvent]) -> Vec<CatalogEvent> {
    raw_events.iter().map(normalize_event).collect()
}
