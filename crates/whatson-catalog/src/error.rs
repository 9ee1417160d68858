//! Error types for the catalog fetch boundary.
//!
//! Everything that can go wrong while talking to the upstream API is caught
//! here and surfaced as a single [`CatalogError`]. There is no retry and no
//! partial-result recovery: a failed fetch means an empty displayed set.
//! Individually malformed events are not errors; they are excluded during
//! date resolution instead.

use thiserror::Error;

/// An error from the catalog fetch boundary.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The request never completed: connection, DNS, timeout.
    #[error("request failed: {0}")]
    Network(String),

    /// The upstream answered with a non-success status.
    #[error("catalog API returned HTTP {status}")]
    Http {
        /// The HTTP status code.
        status: u16,
    },

    /// The response body did not have the expected shape
    /// (e.g. missing or non-array `docs`).
    #[error("malformed catalog response: {0}")]
    InvalidResponse(String),

    /// The client was misconfigured (bad endpoint or relay URL).
    #[error("invalid catalog configuration: {0}")]
    Configuration(String),
}

/// A specialized Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;
