//! Command-line interface definition.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};

use whatson_core::{FilterCriteria, ViewMode};

/// whatson - browse the public events catalog
#[derive(Debug, Parser)]
#[command(name = "whatson")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, short, env = "WHATSON_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug output
    #[arg(long, short = 'v')]
    pub debug: bool,

    /// Presentational layout (overrides the config file)
    #[arg(long, value_enum)]
    pub view: Option<ViewModeArg>,

    // --- Filter flags, one per criteria field ---
    /// Match events whose title or description contains this term
    #[arg(long)]
    pub search: Option<String>,

    /// Only events of this exact type
    #[arg(long)]
    pub event_type: Option<String>,

    /// Only events at this exact venue
    #[arg(long)]
    pub venue: Option<String>,

    /// Only events in this exact category
    #[arg(long)]
    pub category: Option<String>,

    /// Only events on or after this date (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<NaiveDate>,

    /// Only events on or before this date (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<NaiveDate>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Subcommands beyond the default listing.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the distinct filter choices (types, venues, categories)
    Facets,
    /// Read search terms from stdin and re-filter as they are typed
    Watch,
}

/// CLI spelling of the view mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ViewModeArg {
    /// One event per row with full detail
    List,
    /// Compact cards in columns
    Grid,
}

impl From<ViewModeArg> for ViewMode {
    fn from(arg: ViewModeArg) -> Self {
        match arg {
            ViewModeArg::List => ViewMode::List,
            ViewModeArg::Grid => ViewMode::Grid,
        }
    }
}

impl Cli {
    /// Builds the initial filter criteria from the flags.
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            search: self.search.clone(),
            event_type: self.event_type.clone(),
            venue: self.venue.clone(),
            category: self.category.clone(),
            date_from: self.from,
            date_to: self.to,
        }
    }
}
