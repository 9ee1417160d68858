//! Upstream catalog API client: raw payload types, HTTP fetch, normalization

pub mod client;
pub mod error;
pub mod normalize;
pub mod raw;

pub use client::{CatalogClient, DEFAULT_TIMEOUT, parse_page};
pub use error::{CatalogError, CatalogResult};
pub use normalize::{normalize_event, normalize_events, parse_timestamp};
pub use raw::{CatalogPage, RawCatalogEvent, RawTimeAndDate};
