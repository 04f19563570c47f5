//! Main BracketTeam scraper API
//!
//! Combines the HTTP client with the JSON parsers: list a tournament's
//! divisions, walk each division's schedule, and write one CSV row per
//! match.

use std::io::Write;

use tokio::time::sleep;
use tracing::{info, warn};

use crate::client::{BracketClient, PUBLIC_TOURNAMENT_ENDPOINT};
use crate::error::Result;
use crate::paginator::MatchPaginator;
use crate::parser::{extract_row, parse_divisions};
use crate::types::{Division, DivisionCount, ExportSummary, ScheduleRow, TournamentId};

/// High-level access to BracketTeam tournament schedules
///
/// # Example
/// ```no_run
/// use bracket_core::{BracketScraper, TournamentId};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let scraper = BracketScraper::new("token")?;
///     let divisions = scraper.list_divisions(TournamentId::new(6489)).await;
///     println!("Found {} divisions", divisions.len());
///     Ok(())
/// }
/// ```
pub struct BracketScraper {
    client: BracketClient,
}

impl BracketScraper {
    /// Create a scraper with default client configuration.
    ///
    /// # Errors
    /// Returns an error if the token is blank or the HTTP client cannot be created.
    pub fn new(token: &str) -> Result<Self> {
        let client = BracketClient::new(token)?;
        Ok(Self { client })
    }

    /// Create a scraper around a pre-configured client.
    pub fn with_client(client: BracketClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &BracketClient {
        &self.client
    }

    /// List all divisions of a tournament, in upstream order.
    ///
    /// A failed request or a response without
    /// `content.tournament.divisions` yields an empty list.
    pub async fn list_divisions(&self, tournament_id: TournamentId) -> Vec<Division> {
        let params = [("tournament_id", tournament_id.to_string())];
        match self
            .client
            .get_json(PUBLIC_TOURNAMENT_ENDPOINT, &params)
            .await
        {
            Ok(response) => parse_divisions(&response),
            Err(e) => {
                warn!("Could not list divisions for tournament {tournament_id}: {e}");
                Vec::new()
            }
        }
    }

    /// Lazy cursor over one division's matches, starting at page 1.
    pub fn matches(&self, tournament_id: TournamentId, division_id: u64) -> MatchPaginator<'_> {
        MatchPaginator::new(&self.client, tournament_id, division_id)
    }

    /// Write the CSV header and then every match of every division.
    ///
    /// Divisions are processed in the given order, pausing for the polite
    /// delay after each one. A division whose pages fail to load simply
    /// contributes no rows.
    ///
    /// # Errors
    /// Only write failures are reported; fetch failures never abort.
    pub async fn write_schedule<W: Write>(
        &self,
        tournament_id: TournamentId,
        divisions: &[Division],
        writer: W,
    ) -> Result<ExportSummary> {
        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);
        wtr.write_record(ScheduleRow::HEADER)?;
        wtr.flush()?;

        let mut counts = Vec::with_capacity(divisions.len());
        let mut rows_written = 0;

        for division in divisions {
            info!("Exporting division {} ({})", division.name, division.id);

            let mut paginator = self.matches(tournament_id, division.id);
            let mut rows = 0;
            while let Some(m) = paginator.next_match().await {
                wtr.serialize(extract_row(&m, division))?;
                rows += 1;
            }
            wtr.flush()?;

            info!("Division {}: {rows} games", division.name);
            rows_written += rows;
            counts.push(DivisionCount {
                division: division.clone(),
                rows,
            });

            sleep(self.client.config().polite_delay).await;
        }

        Ok(ExportSummary {
            tournament_id,
            divisions: counts,
            rows_written,
        })
    }
}
