//! Display-ready view models.
//!
//! [`EventView`] is the typed record handed to whatever rendering strategy
//! sits on top of the core (terminal renderer, templating engine, component
//! tree). Missing presentational fields are substituted with placeholder
//! text here, so renderers never deal with absent values.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::event::{CatalogEvent, DisplayDate};

/// Title shown when the event has none.
pub const UNTITLED_EVENT: &str = "Untitled Event";
/// Date label shown when no date is resolvable for display.
pub const DATE_TBA: &str = "Date TBA";
/// Venue label shown when the event has none.
pub const VENUE_TBA: &str = "Venue TBA";
/// Image used when the event has no thumbnail.
pub const PLACEHOLDER_IMAGE: &str = "https://placehold.co/640x360?text=Event";

/// The presentational layout for the event collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    /// One event per row with full detail.
    #[default]
    List,
    /// Compact cards in columns.
    Grid,
}

impl ViewMode {
    /// Returns the mode name as used in config files and CLI flags.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Grid => "grid",
        }
    }
}

/// A display-ready view of one catalog event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventView {
    /// The event title, or [`UNTITLED_EVENT`].
    pub title: String,
    /// The short description, when present.
    pub description: Option<String>,
    /// Human-readable date or date range, or [`DATE_TBA`].
    pub date_label: String,
    /// The venue place name, or [`VENUE_TBA`].
    pub venue: String,
    /// The event type title, when present.
    pub event_type: Option<String>,
    /// The category title, when present.
    pub category: Option<String>,
    /// Thumbnail URL, or [`PLACEHOLDER_IMAGE`].
    pub thumbnail_url: String,
    /// Link to the event details page, when present.
    pub details_url: Option<String>,
}

impl EventView {
    /// Builds a view from a catalog event, substituting placeholders.
    pub fn from_event(event: &CatalogEvent) -> Self {
        Self {
            title: event
                .title
                .clone()
                .filter(|t| !t.trim().is_empty())
                .unwrap_or_else(|| UNTITLED_EVENT.to_string()),
            description: event.short_description.clone(),
            date_label: date_label(event.display_date()),
            venue: event
                .venue
                .clone()
                .unwrap_or_else(|| VENUE_TBA.to_string()),
            event_type: event.event_type.clone(),
            category: event.category.clone(),
            thumbnail_url: event
                .thumbnail_url
                .clone()
                .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
            details_url: event.details_url.clone(),
        }
    }

    /// Builds views for a whole result set, preserving its order.
    pub fn from_events<'a>(events: impl IntoIterator<Item = &'a CatalogEvent>) -> Vec<Self> {
        events.into_iter().map(Self::from_event).collect()
    }
}

/// Formats a resolved display date, or the TBA placeholder.
fn date_label(display: Option<DisplayDate>) -> String {
    match display {
        None => DATE_TBA.to_string(),
        Some(DisplayDate::Single(ts)) => format_day(ts),
        Some(DisplayDate::Range { start, end }) => {
            format!("{} to {}", format_day(start), format_day(end))
        }
    }
}

fn format_day(ts: DateTime<Utc>) -> String {
    ts.format("%-d %b %Y").to_string()
}
