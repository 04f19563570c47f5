//! End-to-end export of a tournament schedule to a CSV file
//!
//! Resolve the event reference, check the token, list divisions and only
//! then create the output file. Everything the run needs arrives through
//! [`ExportOptions`]; nothing is read from the environment here.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use tracing::info;

use crate::client::{BracketClient, ClientConfig};
use crate::error::{BracketError, Result};
use crate::parser::parse_event_id;
use crate::scraper::BracketScraper;
use crate::types::ExportSummary;

/// Default output file name
pub const DEFAULT_OUTPUT: &str = "schedules.csv";

/// Inputs for a single export run
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Numeric tournament id or an event URL containing `/event/{id}/`
    pub event_ref: String,
    /// CSV file to create (overwritten if present)
    pub output: PathBuf,
    /// API token; `None` or blank fails the run with `MissingToken`
    pub token: Option<String>,
    pub client: ClientConfig,
}

impl ExportOptions {
    pub fn new(event_ref: impl Into<String>, token: Option<String>) -> Self {
        Self {
            event_ref: event_ref.into(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            token,
            client: ClientConfig::default(),
        }
    }
}

/// Run a complete export.
///
/// # Errors
/// - `BracketError::MalformedIdentifier` - before any network access
/// - `BracketError::MissingToken` / `InvalidToken` - before any network access
/// - `BracketError::NoDivisionsFound` - the tournament listed no divisions; no file is created
/// - `BracketError::Io` / `Csv` - the output file could not be written
pub async fn run_export(options: &ExportOptions) -> Result<ExportSummary> {
    let tournament_id = parse_event_id(&options.event_ref)?;

    let token = options
        .token
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or(BracketError::MissingToken)?;

    let client = BracketClient::with_config(options.client.clone(), token)?;
    let scraper = BracketScraper::with_client(client);

    let divisions = scraper.list_divisions(tournament_id).await;
    if divisions.is_empty() {
        return Err(BracketError::NoDivisionsFound(tournament_id));
    }
    info!(
        "Tournament {tournament_id}: {} divisions",
        divisions.len()
    );

    let file = BufWriter::new(File::create(&options.output)?);
    scraper
        .write_schedule(tournament_id, &divisions, file)
        .await
}
