//! Client configuration.
//!
//! All settings live in a single `config.toml`, by default at
//! `~/.config/whatson/config.toml`. Everything has a default so the binary
//! runs without any file present. Settings are read once at startup; there
//! is no runtime reconfiguration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

use whatson_core::ViewMode;

use crate::error::{ClientError, ClientResult};

/// Events dated before this default cutoff are dropped at load time.
const DEFAULT_CUTOFF: &str = "2025-01-01";

/// Configuration for the whatson client.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Upstream catalog settings.
    pub catalog: CatalogSettings,

    /// Display settings.
    pub display: DisplaySettings,

    /// Watch-mode settings.
    pub watch: WatchSettings,
}

/// Upstream catalog settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    /// The catalog listing endpoint.
    pub endpoint: String,

    /// Optional CORS-relay passthrough; requests go here with the
    /// percent-encoded target URL when set.
    pub relay: Option<String>,

    /// Minimum event date; earlier events are dropped at load time.
    pub cutoff_date: NaiveDate,

    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            endpoint: "https://api.example-events.org/v1/events".to_string(),
            relay: None,
            cutoff_date: DEFAULT_CUTOFF.parse().expect("valid default cutoff"),
            timeout_secs: 30,
        }
    }
}

/// Display settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Default presentational layout.
    pub view: ViewMode,

    /// Number of columns in grid view.
    pub grid_columns: usize,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            view: ViewMode::List,
            grid_columns: 3,
        }
    }
}

/// Watch-mode settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WatchSettings {
    /// Delay before a typed search term triggers a re-filter.
    pub debounce_ms: u64,
}

impl Default for WatchSettings {
    fn default() -> Self {
        Self { debounce_ms: 300 }
    }
}

impl ClientConfig {
    /// The default config file location, if a config dir exists.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("whatson").join("config.toml"))
    }

    /// Loads the config from the default location, falling back to defaults
    /// when no file exists.
    pub fn load() -> ClientResult<Self> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Loads the config from an explicit path.
    pub fn load_from(path: &Path) -> ClientResult<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| ClientError::Config(format!("cannot read {}: {e}", path.display())))?;
        toml::from_str(&text)
            .map_err(|e| ClientError::Config(format!("cannot parse {}: {e}", path.display())))
    }

    /// The parsed endpoint URL.
    pub fn endpoint_url(&self) -> ClientResult<Url> {
        Url::parse(&self.catalog.endpoint)
            .map_err(|e| ClientError::Config(format!("invalid endpoint URL: {e}")))
    }

    /// The parsed relay URL, when configured.
    pub fn relay_url(&self) -> ClientResult<Option<Url>> {
        self.catalog
            .relay
            .as_deref()
            .map(|relay| {
                Url::parse(relay).map_err(|e| ClientError::Config(format!("invalid relay URL: {e}")))
            })
            .transpose()
    }

    /// The cutoff instant: start of the configured cutoff date, UTC.
    pub fn cutoff(&self) -> DateTime<Utc> {
        self.catalog
            .cutoff_date
            .and_hms_opt(0, 0, 0)
            .expect("valid time")
            .and_utc()
    }

    /// The request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.catalog.timeout_secs)
    }

    /// The watch-mode debounce delay.
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.watch.debounce_ms)
    }
}
