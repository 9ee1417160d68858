//! Facet extraction for populating filter choices.
//!
//! A facet is a categorical dimension (event type, venue, category) whose
//! distinct values feed the selectable filter controls. Facets are derived
//! from the canonical set once per load.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::event::CatalogEvent;

/// Collects the distinct values of one selector over the event set.
///
/// Events where the selector yields nothing are ignored. Output is unique by
/// exact string equality and sorted lexicographically ascending.
pub fn distinct_values<'a, F>(events: &'a [CatalogEvent], selector: F) -> Vec<String>
where
    F: Fn(&'a CatalogEvent) -> Option<&'a str>,
{
    let values: BTreeSet<&str> = events.iter().filter_map(selector).collect();
    values.into_iter().map(str::to_owned).collect()
}

/// The distinct values of every facet dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetSet {
    /// Distinct event type titles.
    pub event_types: Vec<String>,
    /// Distinct venue place names.
    pub venues: Vec<String>,
    /// Distinct category titles.
    pub categories: Vec<String>,
}

impl FacetSet {
    /// Scans the event set and extracts every facet dimension.
    pub fn from_events(events: &[CatalogEvent]) -> Self {
        Self {
            event_types: distinct_values(events, |e| e.event_type.as_deref()),
            venues: distinct_values(events, |e| e.venue.as_deref()),
            categories: distinct_values(events, |e| e.category.as_deref()),
        }
    }

    /// Returns `true` if no dimension has any value.
    pub fn is_empty(&self) -> bool {
        self.event_types.is_empty() && self.venues.is_empty() && self.categories.is_empty()
    }
}
