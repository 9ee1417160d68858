//! Raw payload types for the upstream catalog API.
//!
//! These structs mirror the JSON shape the content API returns, before any
//! normalization. Field names follow the upstream camelCase spelling; every
//! event field is optional because the upstream data is ragged. Only the
//! `docs` array itself is required: a response without it is malformed.

use serde::{Deserialize, Serialize};

/// One page of the catalog listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogPage {
    /// The event records on this page.
    pub docs: Vec<RawCatalogEvent>,
    /// The page number, 1-based.
    #[serde(default)]
    pub page: Option<u32>,
    /// Total number of pages in the listing.
    #[serde(default)]
    pub total_pages: Option<u32>,
}

/// An event record as the upstream API returns it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawCatalogEvent {
    /// The event title.
    pub title: Option<String>,
    /// A short description.
    pub short_description: Option<String>,
    /// The date fields.
    pub time_and_date: Option<RawTimeAndDate>,
    /// Event type classification.
    pub event_type: Option<RawTitled>,
    /// Category classification.
    pub categories: Option<RawTitled>,
    /// Venue details.
    pub entry_details: Option<RawEntryDetails>,
    /// Thumbnail image.
    pub thumbnail: Option<RawThumbnail>,
    /// Link to the event page. Upstream spells this `redirectURL`.
    #[serde(rename = "redirectURL")]
    pub redirect_url: Option<RawRedirect>,
}

/// The upstream date record.
///
/// `single_day_event` is genuinely tri-state in the data: true, false, or
/// absent, and each state selects a different authoritative field.
/// Timestamps stay as strings here; parsing is lenient and happens during
/// normalization so one bad value never fails a whole fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawTimeAndDate {
    /// Whether the event is a single-day event.
    pub single_day_event: Option<bool>,
    /// Timestamp for single-day events.
    pub date: Option<String>,
    /// Range start timestamp.
    pub start_date: Option<String>,
    /// Range end timestamp.
    pub end_date: Option<String>,
}

/// A classification wrapper carrying only a title.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawTitled {
    /// The classification title.
    pub title: Option<String>,
}

/// Entry details wrapper around the venue.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawEntryDetails {
    /// The venue record.
    pub venue: Option<RawVenue>,
}

/// The venue record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawVenue {
    /// The venue place name.
    pub place: Option<String>,
}

/// The thumbnail record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawThumbnail {
    /// The image URL.
    pub url: Option<String>,
}

/// The redirect record pointing at the event page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawRedirect {
    /// The target URL.
    pub redirect_to: Option<String>,
}
