//! whatson CLI entry point.

use std::process::ExitCode;
use std::sync::{Arc, Mutex};

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, warn};

use whatson_catalog::CatalogClient;
use whatson_client::cli::{Cli, Command};
use whatson_client::config::ClientConfig;
use whatson_client::debounce::Debouncer;
use whatson_client::error::ClientResult;
use whatson_client::render;
use whatson_client::session::Session;
use whatson_core::{LogConfig, ViewMode, init_logging};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_config = if cli.debug {
        LogConfig::debug()
    } else {
        LogConfig::default()
    };
    if let Err(e) = init_logging(log_config) {
        eprintln!("error: {e}");
        return ExitCode::FAILURE;
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> ClientResult<()> {
    let config = if let Some(ref path) = cli.config {
        ClientConfig::load_from(path)?
    } else {
        ClientConfig::load()?
    };

    let view = cli
        .view
        .map(ViewMode::from)
        .unwrap_or(config.display.view);
    let columns = config.display.grid_columns;

    let client = CatalogClient::new(
        config.endpoint_url()?,
        config.relay_url()?,
        config.timeout(),
    )?;

    // One fetch per run; a failure shows the error banner with an empty
    // set instead of retrying.
    let events = match client.fetch_events().await {
        Ok(events) => events,
        Err(e) => {
            warn!(error = %e, "catalog fetch failed");
            println!("{}", render::render_error(&e.to_string()));
            return Ok(());
        }
    };
    debug!(count = events.len(), "fetched events");

    let mut session = Session::new();
    session.load(events, config.cutoff());
    session.set_criteria(cli.criteria());

    match cli.command {
        Some(Command::Facets) => {
            println!("{}", render::render_facets(session.facets()));
            Ok(())
        }
        Some(Command::Watch) => watch(session, view, columns, config.debounce()).await,
        None => {
            println!("{}", render::render(&session.visible_views(), view, columns));
            Ok(())
        }
    }
}

/// Reads search terms from stdin, one per line, and re-renders after each
/// debounced update. An empty line clears the search term.
async fn watch(
    session: Session,
    view: ViewMode,
    columns: usize,
    delay: std::time::Duration,
) -> ClientResult<()> {
    println!("{}", render::render(&session.visible_views(), view, columns));

    let session = Arc::new(Mutex::new(session));
    let mut debouncer = Debouncer::new(delay);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        let session = Arc::clone(&session);
        debouncer.call(move || {
            let Ok(mut session) = session.lock() else {
                return;
            };
            let term = line.trim();
            let term = (!term.is_empty()).then(|| term.to_string());
            session.set_search(term);
            println!("{}", render::render(&session.visible_views(), view, columns));
        });
    }

    // Stdin closed; let the last update land before exiting.
    debouncer.flush().await;
    Ok(())
}
