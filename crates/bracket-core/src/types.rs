//! Data types for the BracketTeam exporter
//!
//! Upstream match records have no fixed schema and stay as raw JSON until
//! the field extractor turns them into a [`ScheduleRow`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// One scheduled game exactly as the schedule endpoint returned it.
pub type RawMatch = serde_json::Value;

/// Canonical tournament identifier (always positive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TournamentId(u64);

impl TournamentId {
    /// Wrap a raw id. Validation happens in the identifier resolver.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TournamentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named bracket/pool grouping within a tournament
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Division {
    /// Upstream division id, unique within the tournament
    pub id: u64,
    /// Display name written into every row of this division
    pub name: String,
}

impl Division {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Normalized output record, one per match.
///
/// Empty strings mean the field could not be determined.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRow {
    pub game_start_time: String,
    pub location: String,
    pub court: String,
    pub division: String,
    pub home_team: String,
    pub away_team: String,
}

impl ScheduleRow {
    /// Column names, in output order
    pub const HEADER: [&'static str; 6] = [
        "game_start_time",
        "location",
        "court",
        "division",
        "home_team",
        "away_team",
    ];
}

/// Row count for a single division
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DivisionCount {
    pub division: Division,
    pub rows: usize,
}

/// Outcome of a completed export
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportSummary {
    pub tournament_id: TournamentId,
    pub divisions: Vec<DivisionCount>,
    pub rows_written: usize,
}
