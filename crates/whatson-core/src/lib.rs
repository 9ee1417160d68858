//! Core types: events, date resolution, filtering, facets, view models

pub mod event;
pub mod facet;
pub mod filter;
pub mod tracing;
pub mod view;

pub use event::{CatalogEvent, DisplayDate, Schedule};
pub use facet::{FacetSet, distinct_values};
pub use filter::{FilterCriteria, build_canonical, filter_events, sort_by_date};
pub use tracing::{LogConfig, LogFormat, LogSetupError, init_logging};
pub use view::{DATE_TBA, EventView, PLACEHOLDER_IMAGE, UNTITLED_EVENT, VENUE_TBA, ViewMode};
