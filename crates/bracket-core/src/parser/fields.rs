//! Defensive field extraction for raw match records
//!
//! Upstream payloads spell the same field many different ways. Each output
//! column is described by an ordered table of key paths; the first path
//! that resolves to a non-blank string wins.

use serde_json::Value;

use crate::types::{Division, RawMatch, ScheduleRow};

/// A sequence of object keys walked from the match root.
pub type KeyPath = &'static [&'static str];

const TIME_PATHS: &[KeyPath] = &[
    &["start_date_time"],
    &["date"],
    &["start_time"],
    &["start_datetime"],
];

const LOCATION_PATHS: &[KeyPath] = &[
    &["court", "venue", "name"],
    &["venue_name"],
    &["facility_name"],
    &["location"],
    &["venue", "name"],
    &["facility", "name"],
    &["site", "name"],
];

const COURT_PATHS: &[KeyPath] = &[
    &["court", "court_name"],
    &["court_name"],
    &["court"],
    &["field"],
    &["court", "name"],
    &["resource", "name"],
];

const HOME_TEAM_PATHS: &[KeyPath] = &[
    &["home_team", "name"],
    &["home_team", "team_name"],
    &["home_name"],
    &["homeTeamName"],
    &["team_home_name"],
];

const AWAY_TEAM_PATHS: &[KeyPath] = &[
    &["away_team", "name"],
    &["away_team", "team_name"],
    &["away_name"],
    &["awayTeamName"],
    &["team_away_name"],
];

/// Walk `path` through nested objects.
///
/// Returns `None` as soon as a key is missing or an intermediate value is
/// not an object.
pub fn lookup<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter()
        .try_fold(value, |current, key| current.as_object()?.get(*key))
}

/// Return the first candidate that is a string with non-whitespace content,
/// trimmed. Non-string and missing candidates are skipped.
///
/// # Examples
/// ```
/// use bracket_core::parser::first_nonempty;
/// use serde_json::json;
///
/// let (blank, spaces, x) = (json!(""), json!("   "), json!("X"));
/// assert_eq!(first_nonempty([Some(&blank), Some(&spaces), None, Some(&x)]), "X");
/// ```
pub fn first_nonempty<'a, I>(candidates: I) -> String
where
    I: IntoIterator<Item = Option<&'a Value>>,
{
    candidates
        .into_iter()
        .flatten()
        .filter_map(Value::as_str)
        .map(str::trim)
        .find(|s| !s.is_empty())
        .map(str::to_string)
        .unwrap_or_default()
}

/// Try each path in order and return the first non-blank string found.
pub fn first_in_paths(record: &Value, paths: &[KeyPath]) -> String {
    first_nonempty(paths.iter().map(|path| lookup(record, path)))
}

pub fn extract_time(m: &RawMatch) -> String {
    first_in_paths(m, TIME_PATHS)
}

pub fn extract_location(m: &RawMatch) -> String {
    first_in_paths(m, LOCATION_PATHS)
}

pub fn extract_court(m: &RawMatch) -> String {
    first_in_paths(m, COURT_PATHS)
}

/// Home team name. The nested `home_team` object takes precedence over the
/// flat key variants.
pub fn extract_home(m: &RawMatch) -> String {
    first_in_paths(m, HOME_TEAM_PATHS)
}

/// Away team name. The nested `away_team` object takes precedence over the
/// flat key variants.
pub fn extract_away(m: &RawMatch) -> String {
    first_in_paths(m, AWAY_TEAM_PATHS)
}

/// Build the output row for one match of `division`.
pub fn extract_row(m: &RawMatch, division: &Division) -> ScheduleRow {
    ScheduleRow {
        game_start_time: extract_time(m),
        location: extract_location(m),
        court: extract_court(m),
        division: division.name.clone(),
        home_team: extract_home(m),
        away_team: extract_away(m),
    }
}
