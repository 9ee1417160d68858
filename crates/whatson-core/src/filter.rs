//! Filtering and sorting over the canonical event set.
//!
//! The filter engine is a pure function: the caller owns a [`FilterCriteria`]
//! value, mutates its fields as the user changes controls, and re-derives the
//! visible subset from the canonical set on every change. No filtering state
//! lives anywhere else.
//!
//! Two passes exist:
//! - [`build_canonical`] runs once per load: it drops invalid events and
//!   events before the configured cutoff, then sorts ascending.
//! - [`filter_events`] runs on every criteria change against the cached
//!   canonical set.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::event::CatalogEvent;

/// Interactive filter criteria.
///
/// All fields are optional; an unset (or empty-string) field places no
/// constraint. Each field is mutated independently by its corresponding
/// control and the whole struct is read on every re-filter pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    /// Case-insensitive substring match against title or short description.
    pub search: Option<String>,
    /// Exact match against the event type title.
    pub event_type: Option<String>,
    /// Exact match against the venue place name.
    pub venue: Option<String>,
    /// Exact match against the category title.
    pub category: Option<String>,
    /// Inclusive lower date bound, compared at start of day.
    pub date_from: Option<NaiveDate>,
    /// Inclusive upper date bound, compared at end of day.
    pub date_to: Option<NaiveDate>,
}

impl FilterCriteria {
    /// Creates empty criteria (no constraints).
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the search term.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Builder method to set the event type constraint.
    pub fn with_event_type(mut self, event_type: impl Into<String>) -> Self {
        self.event_type = Some(event_type.into());
        self
    }

    /// Builder method to set the venue constraint.
    pub fn with_venue(mut self, venue: impl Into<String>) -> Self {
        self.venue = Some(venue.into());
        self
    }

    /// Builder method to set the category constraint.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Builder method to set the lower date bound.
    pub fn with_date_from(mut self, from: NaiveDate) -> Self {
        self.date_from = Some(from);
        self
    }

    /// Builder method to set the upper date bound.
    pub fn with_date_to(mut self, to: NaiveDate) -> Self {
        self.date_to = Some(to);
        self
    }

    /// Returns `true` if no field places a constraint.
    pub fn is_empty(&self) -> bool {
        active(self.search.as_deref()).is_none()
            && active(self.event_type.as_deref()).is_none()
            && active(self.venue.as_deref()).is_none()
            && active(self.category.as_deref()).is_none()
            && self.date_from.is_none()
            && self.date_to.is_none()
    }

    /// Resets every field, restoring the full canonical set on the next pass.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Returns `true` if the event passes every active constraint.
    pub fn matches(&self, event: &CatalogEvent) -> bool {
        if let Some(term) = active(self.search.as_deref()) {
            if !matches_search(event, term) {
                return false;
            }
        }

        if let Some(wanted) = active(self.event_type.as_deref()) {
            if event.event_type.as_deref() != Some(wanted) {
                return false;
            }
        }

        if let Some(wanted) = active(self.venue.as_deref()) {
            if event.venue.as_deref() != Some(wanted) {
                return false;
            }
        }

        if let Some(wanted) = active(self.category.as_deref()) {
            if event.category.as_deref() != Some(wanted) {
                return false;
            }
        }

        if self.date_from.is_some() || self.date_to.is_some() {
            // A date bound requires a resolvable sort date.
            let Some(when) = event.sort_date() else {
                return false;
            };
            if let Some(from) = self.date_from {
                if when < start_of_day(from) {
                    return false;
                }
            }
            if let Some(to) = self.date_to {
                if when > end_of_day(to) {
                    return false;
                }
            }
        }

        true
    }
}

/// Treats empty strings like unset fields.
fn active(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Case-insensitive substring match over title and short description.
/// Missing fields count as non-matches.
fn matches_search(event: &CatalogEvent, term: &str) -> bool {
    let needle = term.to_lowercase();
    let haystack_matches =
        |field: Option<&str>| field.is_some_and(|text| text.to_lowercase().contains(&needle));
    haystack_matches(event.title.as_deref()) || haystack_matches(event.short_description.as_deref())
}

/// The inclusive lower bound instant for a date constraint.
fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_hms_opt(0, 0, 0).expect("valid time").and_utc()
}

/// The inclusive upper bound instant for a date constraint.
fn end_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_hms_milli_opt(23, 59, 59, 999)
        .expect("valid time")
        .and_utc()
}

/// Applies the criteria to the canonical set and sorts the result.
///
/// The result is always re-sorted ascending by sort date; undated events
/// sort last (their relative order is not part of the contract).
pub fn filter_events<'a>(
    events: &'a [CatalogEvent],
    criteria: &FilterCriteria,
) -> Vec<&'a CatalogEvent> {
    let mut matched: Vec<&CatalogEvent> = events.iter().filter(|e| criteria.matches(e)).collect();
    matched.sort_by_key(|e| (e.sort_date().is_none(), e.sort_date()));
    matched
}

/// Sorts events in place, ascending by sort date, undated last.
pub fn sort_by_date(events: &mut [CatalogEvent]) {
    events.sort_by_key(|e| (e.sort_date().is_none(), e.sort_date()));
}

/// Builds the canonical event set from freshly fetched events.
///
/// Load-time-only pass, applied once before the set is cached: drops events
/// whose dates do not resolve, drops events dated strictly before the
/// cutoff, and sorts ascending. Interactive criteria never re-run this.
pub fn build_canonical(mut events: Vec<CatalogEvent>, cutoff: DateTime<Utc>) -> Vec<CatalogEvent> {
    events.retain(|e| e.sort_date().is_some_and(|when| when >= cutoff));
    sort_by_date(&mut events);
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Schedule;
    use chrono::TimeZone;

    fn utc(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn dated_event(title: &str, when: DateTime<Utc>) -> CatalogEvent {
        CatalogEvent::new()
            .with_title(title)
            .with_schedule(Schedule::new().with_single_day(true).with_date(when))
    }

    fn sample_events() -> Vec<CatalogEvent> {
        vec![
            dated_event("Modern Art Fair", utc(2025, 12, 15))
                .with_event_type("Exhibition")
                .with_venue("City Hall")
                .with_category("Visual Arts"),
            dated_event("Sculpture Expo", utc(2025, 12, 10))
                .with_event_type("Exhibition")
                .with_venue("Riverside Gallery"),
            dated_event("Jazz Night", utc(2025, 12, 20))
                .with_event_type("Concert")
                .with_venue("City Hall")
                .with_category("Music"),
        ]
    }

    mod criteria {
        use super::*;

        #[test]
        fn empty_criteria_matches_everything() {
            let criteria = FilterCriteria::new();
            assert!(criteria.is_empty());
            for event in sample_events() {
                assert!(criteria.matches(&event));
            }
        }

        #[test]
        fn empty_strings_place_no_constraint() {
            let criteria = FilterCriteria::new().with_search("").with_venue("");
            assert!(criteria.is_empty());
            assert!(criteria.matches(&sample_events()[0]));
        }

        #[test]
        fn clear_resets_all_fields() {
            let mut criteria = FilterCriteria::new()
                .with_search("art")
                .with_venue("City Hall")
                .with_date_from(date(2025, 12, 1));
            criteria.clear();
            assert!(criteria.is_empty());
        }

        #[test]
        fn search_is_case_insensitive() {
            let events = sample_events();
            let criteria = FilterCriteria::new().with_search("art");
            assert!(criteria.matches(&events[0])); // "Modern Art Fair"
            assert!(!criteria.matches(&events[1])); // "Sculpture Expo"
        }

        #[test]
        fn search_covers_short_description() {
            let event = dated_event("Sculpture Expo", utc(2025, 12, 10))
                .with_short_description("Large-scale ART installations");
            let criteria = FilterCriteria::new().with_search("art");
            assert!(criteria.matches(&event));
        }

        #[test]
        fn search_misses_events_without_text_fields() {
            let event = CatalogEvent::new()
                .with_schedule(Schedule::new().with_date(utc(2025, 12, 10)));
            let criteria = FilterCriteria::new().with_search("art");
            assert!(!criteria.matches(&event));
        }

        #[test]
        fn facet_fields_use_exact_equality() {
            let events = sample_events();
            let criteria = FilterCriteria::new().with_venue("City Hall");
            assert!(criteria.matches(&events[0]));
            assert!(!criteria.matches(&events[1]));

            // Substrings do not match.
            let criteria = FilterCriteria::new().with_venue("City");
            assert!(!criteria.matches(&events[0]));
        }

        #[test]
        fn facet_constraint_excludes_events_missing_the_field() {
            let events = sample_events();
            let criteria = FilterCriteria::new().with_category("Visual Arts");
            assert!(criteria.matches(&events[0]));
            assert!(!criteria.matches(&events[1])); // no category at all
        }

        #[test]
        fn date_from_is_inclusive_at_midnight() {
            let at_midnight = dated_event("A", utc(2025, 12, 14));
            let instant_before = dated_event("B", Utc.with_ymd_and_hms(2025, 12, 13, 23, 59, 59).unwrap());

            let criteria = FilterCriteria::new().with_date_from(date(2025, 12, 14));
            assert!(criteria.matches(&at_midnight));
            assert!(!criteria.matches(&instant_before));
        }

        #[test]
        fn date_to_is_inclusive_through_end_of_day() {
            let late_in_day = dated_event("A", Utc.with_ymd_and_hms(2025, 12, 14, 23, 59, 59).unwrap());
            let next_midnight = dated_event("B", utc(2025, 12, 15));

            let criteria = FilterCriteria::new().with_date_to(date(2025, 12, 14));
            assert!(criteria.matches(&late_in_day));
            assert!(!criteria.matches(&next_midnight));
        }

        #[test]
        fn date_bounds_exclude_undated_events() {
            let undated = CatalogEvent::new().with_title("Sometime");
            let criteria = FilterCriteria::new().with_date_from(date(2025, 1, 1));
            assert!(!criteria.matches(&undated));
        }

        #[test]
        fn serde_roundtrip() {
            let criteria = FilterCriteria::new()
                .with_search("art")
                .with_date_from(date(2025, 12, 1));
            let json = serde_json::to_string(&criteria).unwrap();
            let parsed: FilterCriteria = serde_json::from_str(&json).unwrap();
            assert_eq!(criteria, parsed);
        }
    }

    mod filtering {
        use super::*;

        #[test]
        fn result_is_sorted_ascending() {
            let events = sample_events();
            let visible = filter_events(&events, &FilterCriteria::new());
            let titles: Vec<_> = visible.iter().map(|e| e.title.as_deref().unwrap()).collect();
            assert_eq!(titles, ["Sculpture Expo", "Modern Art Fair", "Jazz Night"]);
        }

        #[test]
        fn filtering_is_idempotent() {
            let events = sample_events();
            let criteria = FilterCriteria::new().with_venue("City Hall");
            let first = filter_events(&events, &criteria);
            let second = filter_events(&events, &criteria);
            assert_eq!(first, second);
        }

        #[test]
        fn all_predicates_must_pass() {
            let events = sample_events();
            let criteria = FilterCriteria::new()
                .with_venue("City Hall")
                .with_event_type("Concert");
            let visible = filter_events(&events, &criteria);
            assert_eq!(visible.len(), 1);
            assert_eq!(visible[0].title.as_deref(), Some("Jazz Night"));
        }

        #[test]
        fn undated_events_sort_last() {
            let mut events = sample_events();
            events.insert(0, CatalogEvent::new().with_title("Sometime"));
            let visible = filter_events(&events, &FilterCriteria::new());
            assert_eq!(visible.last().unwrap().title.as_deref(), Some("Sometime"));
        }
    }

    mod canonical {
        use super::*;

        #[test]
        fn drops_invalid_and_pre_cutoff_events_and_sorts() {
            // A is single-day on the 15th, B a range starting the 13th,
            // cutoff the 12th. Both retained, B sorts before A.
            let a = dated_event("A", utc(2025, 12, 15));
            let b = CatalogEvent::new().with_title("B").with_schedule(
                Schedule::new()
                    .with_single_day(false)
                    .with_start_date(utc(2025, 12, 13))
                    .with_end_date(utc(2025, 12, 14)),
            );
            let stale = dated_event("Stale", utc(2025, 12, 1));
            let undated = CatalogEvent::new().with_title("Undated");

            let canonical =
                build_canonical(vec![a, stale, undated, b], utc(2025, 12, 12));
            let titles: Vec<_> = canonical.iter().map(|e| e.title.as_deref().unwrap()).collect();
            assert_eq!(titles, ["B", "A"]);
        }

        #[test]
        fn event_dated_exactly_at_cutoff_is_retained() {
            let canonical = build_canonical(
                vec![dated_event("Edge", utc(2025, 12, 12))],
                utc(2025, 12, 12),
            );
            assert_eq!(canonical.len(), 1);
        }

        #[test]
        fn clearing_criteria_restores_the_canonical_set() {
            let canonical = build_canonical(sample_events(), utc(2025, 1, 1));

            let mut criteria = FilterCriteria::new().with_search("art");
            assert_eq!(filter_events(&canonical, &criteria).len(), 1);

            criteria.clear();
            let restored = filter_events(&canonical, &criteria);
            assert_eq!(restored.len(), canonical.len());
            let expected: Vec<&CatalogEvent> = canonical.iter().collect();
            assert_eq!(restored, expected);
        }
    }
}
