//! Tracing setup for whatson.
//!
//! One initialization path shared by every binary in the workspace. The
//! `RUST_LOG` environment variable overrides the configured default level.

use thiserror::Error;
use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Errors that can occur during tracing initialization.
#[derive(Debug, Error)]
pub enum LogSetupError {
    /// The global subscriber was already installed.
    #[error("failed to set global tracing subscriber: {0}")]
    SetGlobalSubscriber(#[from] tracing::subscriber::SetGlobalDefaultError),

    /// The env filter directive could not be parsed.
    #[error("failed to parse env filter: {0}")]
    EnvFilter(#[from] tracing_subscriber::filter::ParseError),
}

/// Output format for log lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Compact single-line output, suited to CLI usage.
    #[default]
    Compact,
    /// Multi-line pretty output.
    Pretty,
    /// Structured JSON output.
    Json,
}

/// Configuration for tracing initialization.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// The default level when `RUST_LOG` is not set.
    pub default_level: Level,
    /// Output format for log lines.
    pub format: LogFormat,
    /// Whether to include the module path in log lines.
    pub show_target: bool,
    /// Custom env filter directive; overrides `default_level` when set.
    pub env_filter: Option<String>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            default_level: Level::WARN,
            format: LogFormat::Compact,
            show_target: false,
            env_filter: None,
        }
    }
}

impl LogConfig {
    /// A config for `--debug` runs: everything from this workspace at DEBUG.
    #[must_use]
    pub fn debug() -> Self {
        Self {
            default_level: Level::DEBUG,
            show_target: true,
            ..Default::default()
        }
    }

    /// Set the default level.
    #[must_use]
    pub fn with_level(mut self, level: Level) -> Self {
        self.default_level = level;
        self
    }

    /// Set the output format.
    #[must_use]
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Set a custom env filter directive.
    #[must_use]
    pub fn with_env_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }
}

/// Initializes the global tracing subscriber.
///
/// Call once at process start.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed or the env
/// filter directive is invalid.
pub fn init_logging(config: LogConfig) -> Result<(), LogSetupError> {
    let env_filter = if let Some(ref filter) = config.env_filter {
        EnvFilter::try_new(filter)?
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("whatson={}", config.default_level)))
    };

    match config.format {
        LogFormat::Compact => {
            let subscriber = tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().compact().without_time().with_target(config.show_target));
            tracing::subscriber::set_global_default(subscriber)?;
        }
        LogFormat::Pretty => {
            let subscriber = tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().pretty().with_target(config.show_target));
            tracing::subscriber::set_global_default(subscriber)?;
        }
        LogFormat::Json => {
            let subscriber = tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_target(config.show_target));
            tracing::subscriber::set_global_default(subscriber)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = LogConfig::default();
        assert_eq!(config.default_level, Level::WARN);
        assert_eq!(config.format, LogFormat::Compact);
        assert!(!config.show_target);
        assert!(config.env_filter.is_none());
    }

    #[test]
    fn debug_config() {
        let config = LogConfig::debug();
        assert_eq!(config.default_level, Level::DEBUG);
        assert!(config.show_target);
    }

    #[test]
    fn builder_methods() {
        let config = LogConfig::default()
            .with_level(Level::INFO)
            .with_format(LogFormat::Json)
            .with_env_filter("whatson=trace");

        assert_eq!(config.default_level, Level::INFO);
        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(config.env_filter, Some("whatson=trace".to_string()));
    }
}
