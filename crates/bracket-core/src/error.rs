//! Error types for the BracketTeam exporter
//!
//! Fetch-level variants are swallowed into "no data" by the division
//! enumerator and the match paginator. The remaining variants abort a run
//! and map onto process exit codes via [`BracketError::exit_code`].

use thiserror::Error;

use crate::types::TournamentId;

/// Error type for BracketTeam export operations
#[derive(Error, Debug)]
pub enum BracketError {
    /// Connection, DNS, timeout or body read failure
    #[error("Request error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Server kept answering 429 or 5xx until the attempt cap was reached
    #[error("HTTP {status} after {attempts} attempts: {url}")]
    RetriesExhausted {
        status: u16,
        url: String,
        attempts: u32,
    },

    /// Non-success status that is not worth retrying
    #[error("HTTP {status}: {url}")]
    HttpStatus { status: u16, url: String },

    /// Successful response whose body is not JSON
    #[error("JSON parse error: {url} :: {source}")]
    InvalidJson {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// Event reference contained no usable tournament id
    #[error("Could not parse event/tournament id from: {0}")]
    MalformedIdentifier(String),

    /// No API token was supplied
    #[error("Missing API token. Provide --token or set BRACKETTEAM_TOKEN.")]
    MissingToken,

    /// Token cannot be sent as a header value
    #[error("API token contains characters not allowed in an HTTP header")]
    InvalidToken,

    /// Client configuration value cannot be used
    #[error("Invalid client configuration: {0}")]
    InvalidConfig(String),

    /// Division enumeration came back empty
    #[error("No divisions found for tournament {0}")]
    NoDivisionsFound(TournamentId),

    /// Output file could not be written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialization failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl BracketError {
    /// Whether the failure is worth another attempt.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            BracketError::Transport(_) | BracketError::RetriesExhausted { .. }
        )
    }

    /// Process exit code for a run that ended with this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            BracketError::MissingToken | BracketError::InvalidToken => 2,
            _ => 1,
        }
    }
}

/// Result type alias for BracketTeam export operations
pub type Result<T> = std::result::Result<T, BracketError>;
