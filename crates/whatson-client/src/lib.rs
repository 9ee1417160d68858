//! Terminal client for the events catalog.
//!
//! Ties the pieces together: configuration, the in-memory session,
//! debounced watch mode, and text rendering.

pub mod cli;
pub mod config;
pub mod debounce;
pub mod error;
pub mod render;
pub mod session;

pub use cli::{Cli, Command};
pub use config::ClientConfig;
pub use debounce::Debouncer;
pub use error::{ClientError, ClientResult};
pub use session::Session;
