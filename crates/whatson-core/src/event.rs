//! Event types for the events catalog.
//!
//! This module provides the core types for representing catalog events:
//! - [`CatalogEvent`]: the canonical event record after normalization
//! - [`Schedule`]: the upstream date fields and their resolution rules
//! - [`DisplayDate`]: a resolved date as shown to the user (single or range)
//!
//! Date resolution is the load-bearing rule of the whole system: it decides
//! both whether an event is shown at all and where it sorts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// When an event takes place, as supplied by the catalog.
///
/// The upstream data carries a tri-state single-day flag alongside three
/// timestamp fields. Which field is authoritative depends on the flag:
///
/// 1. `single_day == Some(true)`: `date` is authoritative.
/// 2. `single_day == Some(false)`: `start_date` is authoritative, with
///    `end_date` completing the range for display.
/// 3. `single_day == None`: `date` if present, else `start_date`.
///
/// A schedule that resolves to no timestamp under these rules marks the
/// event as invalid; invalid events are dropped at load time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Whether the event is a single-day event. Frequently absent upstream,
    /// in which case `date` takes priority over `start_date`.
    pub single_day: Option<bool>,
    /// The event date for single-day events.
    pub date: Option<DateTime<Utc>>,
    /// Range start for multi-day events.
    pub start_date: Option<DateTime<Utc>>,
    /// Range end for multi-day events.
    pub end_date: Option<DateTime<Utc>>,
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the single-day flag.
    pub fn with_single_day(mut self, single_day: bool) -> Self {
        self.single_day = Some(single_day);
        self
    }

    /// Builder method to set the single-day date.
    pub fn with_date(mut self, date: DateTime<Utc>) -> Self {
        self.date = Some(date);
        self
    }

    /// Builder method to set the range start.
    pub fn with_start_date(mut self, start: DateTime<Utc>) -> Self {
        self.start_date = Some(start);
        self
    }

    /// Builder method to set the range end.
    pub fn with_end_date(mut self, end: DateTime<Utc>) -> Self {
        self.end_date = Some(end);
        self
    }

    /// Resolves the canonical timestamp for sorting and validity.
    ///
    /// Returns `None` when the schedule fields cannot be resolved under the
    /// tri-state rule, in which case the event is invalid.
    pub fn resolve(&self) -> Option<DateTime<Utc>> {
        match self.single_day {
            Some(true) => self.date,
            Some(false) => self.start_date,
            None => self.date.or(self.start_date),
        }
    }

    /// Resolves the date as it should be displayed.
    ///
    /// Follows the same precedence as [`Schedule::resolve`], except that an
    /// explicit multi-day event with both bounds present yields a range.
    pub fn display(&self) -> Option<DisplayDate> {
        match self.single_day {
            Some(true) => self.date.map(DisplayDate::Single),
            Some(false) => match (self.start_date, self.end_date) {
                (Some(start), Some(end)) => Some(DisplayDate::Range { start, end }),
                (Some(start), None) => Some(DisplayDate::Single(start)),
                (None, _) => None,
            },
            None => self.date.or(self.start_date).map(DisplayDate::Single),
        }
    }
}

/// A resolved event date, ready for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum DisplayDate {
    /// The event happens on one date.
    Single(DateTime<Utc>),
    /// The event spans a start/end range.
    Range {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
}

impl DisplayDate {
    /// Returns the first (or only) timestamp of this display date.
    pub fn start(&self) -> DateTime<Utc> {
        match self {
            Self::Single(ts) => *ts,
            Self::Range { start, .. } => *start,
        }
    }

    /// Returns the last timestamp of this display date.
    pub fn end(&self) -> DateTime<Utc> {
        match self {
            Self::Single(ts) => *ts,
            Self::Range { end, .. } => *end,
        }
    }

    /// Returns `true` if this is a multi-day range.
    pub fn is_range(&self) -> bool {
        matches!(self, Self::Range { .. })
    }
}

/// A catalog event after normalization.
///
/// Every field except the schedule is presentational; missing values are
/// rendered with placeholder text rather than treated as errors. The
/// schedule decides validity: an event whose schedule does not resolve is
/// excluded from the canonical set at load time and never reconsidered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEvent {
    /// The event title.
    pub title: Option<String>,
    /// A short description used for search and display.
    pub short_description: Option<String>,
    /// The upstream date fields.
    pub schedule: Option<Schedule>,
    /// Classification: event type title.
    pub event_type: Option<String>,
    /// Classification: category title.
    pub category: Option<String>,
    /// Classification: venue place name.
    pub venue: Option<String>,
    /// Thumbnail image URL.
    pub thumbnail_url: Option<String>,
    /// Link to the event details page.
    pub details_url: Option<String>,
}

impl CatalogEvent {
    /// Creates an empty event.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Builder method to set the short description.
    pub fn with_short_description(mut self, description: impl Into<String>) -> Self {
        self.short_description = Some(description.into());
        self
    }

    /// Builder method to set the schedule.
    pub fn with_schedule(mut self, schedule: Schedule) -> Self {
        self.schedule = Some(schedule);
        self
    }

    /// Builder method to set the event type.
    pub fn with_event_type(mut self, event_type: impl Into<String>) -> Self {
        self.event_type = Some(event_type.into());
        self
    }

    /// Builder method to set the category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Builder method to set the venue.
    pub fn with_venue(mut self, venue: impl Into<String>) -> Self {
        self.venue = Some(venue.into());
        self
    }

    /// Builder method to set the thumbnail URL.
    pub fn with_thumbnail_url(mut self, url: impl Into<String>) -> Self {
        self.thumbnail_url = Some(url.into());
        self
    }

    /// Builder method to set the details URL.
    pub fn with_details_url(mut self, url: impl Into<String>) -> Self {
        self.details_url = Some(url.into());
        self
    }

    /// Returns the canonical sort timestamp, if resolvable.
    pub fn sort_date(&self) -> Option<DateTime<Utc>> {
        self.schedule.as_ref().and_then(Schedule::resolve)
    }

    /// Returns the date to display, if resolvable.
    pub fn display_date(&self) -> Option<DisplayDate> {
        self.schedule.as_ref().and_then(Schedule::display)
    }

    /// Returns `true` if the event's dates are resolvable.
    ///
    /// Invalid events are excluded from the canonical set at load time.
    pub fn is_valid(&self) -> bool {
        self.sort_date().is_some()
    }
}
