//! Session state: the canonical event set and the active filter criteria.
//!
//! One `Session` lives for the duration of a run. Loading replaces the
//! canonical set (and the facets derived from it); criteria changes only
//! re-derive the visible subset. Nothing is persisted.

use chrono::{DateTime, NaiveDate, Utc};

use whatson_core::{
    CatalogEvent, EventView, FacetSet, FilterCriteria, build_canonical, filter_events,
};

/// In-memory state for one page session.
#[derive(Debug, Default)]
pub struct Session {
    canonical: Vec<CatalogEvent>,
    facets: FacetSet,
    criteria: FilterCriteria,
}

impl Session {
    /// Creates an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the canonical set with freshly fetched events.
    ///
    /// Runs the load-time-only pass (validity + cutoff + sort) and rebuilds
    /// the facets. Invalid events are gone for good; interactive filtering
    /// never reconsiders them.
    pub fn load(&mut self, events: Vec<CatalogEvent>, cutoff: DateTime<Utc>) {
        self.canonical = build_canonical(events, cutoff);
        self.facets = FacetSet::from_events(&self.canonical);
    }

    /// The canonical set (post load-time filtering, sorted ascending).
    pub fn canonical(&self) -> &[CatalogEvent] {
        &self.canonical
    }

    /// The facet values for populating filter choices.
    pub fn facets(&self) -> &FacetSet {
        &self.facets
    }

    /// The active criteria.
    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Replaces the whole criteria object.
    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
    }

    /// Sets the search term.
    pub fn set_search(&mut self, term: Option<String>) {
        self.criteria.search = term;
    }

    /// Sets the event type constraint.
    pub fn set_event_type(&mut self, event_type: Option<String>) {
        self.criteria.event_type = event_type;
    }

    /// Sets the venue constraint.
    pub fn set_venue(&mut self, venue: Option<String>) {
        self.criteria.venue = venue;
    }

    /// Sets the category constraint.
    pub fn set_category(&mut self, category: Option<String>) {
        self.criteria.category = category;
    }

    /// Sets the date bounds.
    pub fn set_date_range(&mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) {
        self.criteria.date_from = from;
        self.criteria.date_to = to;
    }

    /// Clears every criteria field, restoring the full canonical set.
    pub fn clear_filters(&mut self) {
        self.criteria.clear();
    }

    /// The currently visible subset, re-derived from the canonical set.
    pub fn visible(&self) -> Vec<&CatalogEvent> {
        filter_events(&self.canonical, &self.criteria)
    }

    /// The visible subset as display-ready view models.
    pub fn visible_views(&self) -> Vec<EventView> {
        EventView::from_events(self.visible())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use whatson_core::Schedule;

    fn utc(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    fn dated_event(title: &str, when: DateTime<Utc>) -> CatalogEvent {
        CatalogEvent::new()
            .with_title(title)
            .with_schedule(Schedule::new().with_single_day(true).with_date(when))
    }

    fn loaded_session() -> Session {
        let mut session = Session::new();
        session.load(
            vec![
                dated_event("Jazz Night", utc(2025, 12, 20)).with_venue("City Hall"),
                dated_event("Modern Art Fair", utc(2025, 12, 15)).with_venue("Riverside Gallery"),
                dated_event("Old News", utc(2025, 11, 1)),
                CatalogEvent::new().with_title("No Date"),
            ],
            utc(2025, 12, 1),
        );
        session
    }

    #[test]
    fn load_applies_cutoff_and_validity_and_sorts() {
        let session = loaded_session();
        let titles: Vec<_> = session
            .canonical()
            .iter()
            .map(|e| e.title.as_deref().unwrap())
            .collect();
        assert_eq!(titles, ["Modern Art Fair", "Jazz Night"]);
    }

    #[test]
    fn load_rebuilds_facets() {
        let session = loaded_session();
        assert_eq!(session.facets().venues, ["City Hall", "Riverside Gallery"]);
    }

    #[test]
    fn criteria_fields_mutate_independently() {
        let mut session = loaded_session();
        session.set_search(Some("jazz".to_string()));
        session.set_venue(Some("City Hall".to_string()));
        assert_eq!(session.visible().len(), 1);

        session.set_search(None);
        assert_eq!(session.criteria().venue.as_deref(), Some("City Hall"));
        assert_eq!(session.visible().len(), 1);
    }

    #[test]
    fn clear_restores_the_full_canonical_set() {
        let mut session = loaded_session();
        session.set_search(Some("art".to_string()));
        assert_eq!(session.visible().len(), 1);

        session.clear_filters();
        assert_eq!(session.visible().len(), session.canonical().len());
    }

    #[test]
    fn reload_replaces_the_canonical_set() {
        let mut session = loaded_session();
        session.load(vec![dated_event("Only One", utc(2025, 12, 25))], utc(2025, 12, 1));
        assert_eq!(session.canonical().len(), 1);
        assert!(session.facets().venues.is_empty());
    }

    #[test]
    fn visible_views_carry_placeholders() {
        let mut session = Session::new();
        session.load(
            vec![dated_event("Jazz Night", utc(2025, 12, 20))],
            utc(2025, 12, 1),
        );
        let views = session.visible_views();
        assert_eq!(views[0].title, "Jazz Night");
        assert_eq!(views[0].venue, whatson_core::VENUE_TBA);
    }
}
