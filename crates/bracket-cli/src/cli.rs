use std::path::PathBuf;

use bracket_core::export::DEFAULT_OUTPUT;
use bracket_core::{ClientConfig, ExportOptions};
use clap::Parser;

/// Export a BracketTeam event's schedules to CSV.
///
/// Walks every division of the tournament and writes one row per game with
/// start time, location, court, division, home team and away team.
#[derive(Parser, Debug)]
#[command(name = "bracket-export", version, about, long_about = None)]
pub struct Args {
    /// Event URL like https://bracketteam.com/event/6489/... or just the numeric id (e.g., 6489)
    pub event: String,

    /// Output CSV file
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// X-Authorization token
    #[arg(long, env = "BRACKETTEAM_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// API host to talk to
    #[arg(long, env = "BRACKETTEAM_BASE_URL", value_name = "URL")]
    pub base_url: Option<String>,

    /// Log every request and page to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn into_export_options(self) -> ExportOptions {
        let mut client = ClientConfig::default();
        if let Some(base_url) = self.base_url {
            client.base_url = base_url;
        }

        ExportOptions {
            event_ref: self.event,
            output: self.output,
            token: self.token,
            client,
        }
    }
}
