//! Error type for the whatson binary.

use thiserror::Error;

use whatson_catalog::CatalogError;
use whatson_core::LogSetupError;

/// Any error the CLI can surface to the user.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Configuration file problems (unreadable, unparsable, bad URLs).
    #[error("configuration error: {0}")]
    Config(String),

    /// Errors from the catalog fetch boundary.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Tracing initialization failed.
    #[error(transparent)]
    LogSetup(#[from] LogSetupError),

    /// Terminal or file I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for CLI operations.
pub type ClientResult<T> = Result<T, ClientError>;
