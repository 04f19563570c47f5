//! Tournament identifier resolver
//!
//! Accepts either a bare numeric id (`6489`) or a schedules page URL such as
//! `https://bracketteam.com/event/6489/2025_Fall_Tip_Off/schedules`.

use regex_lite::Regex;

use crate::error::{BracketError, Result};
use crate::types::TournamentId;

/// Resolve a user-supplied event reference into a tournament id.
///
/// An `/event/<digits>/` segment anywhere in the input wins; otherwise the
/// trimmed input must consist solely of ASCII digits. Zero and values that
/// do not fit in a `u64` are rejected.
///
/// # Examples
/// ```
/// use bracket_core::parser::parse_event_id;
///
/// let id = parse_event_id("https://bracketteam.com/event/6489/Fall/schedules").unwrap();
/// assert_eq!(id.get(), 6489);
/// assert_eq!(parse_event_id(" 42 ").unwrap().get(), 42);
/// assert!(parse_event_id("not-an-id").is_err());
/// ```
pub fn parse_event_id(reference: &str) -> Result<TournamentId> {
    let malformed = || BracketError::MalformedIdentifier(reference.to_string());

    let event_path = Regex::new(r"/event/(\d+)/").map_err(|_| malformed())?;

    let digits = match event_path.captures(reference) {
        Some(caps) => caps.get(1).map(|m| m.as_str()).ok_or_else(malformed)?,
        None => {
            let trimmed = reference.trim();
            if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
                return Err(malformed());
            }
            trimmed
        }
    };

    match digits.parse::<u64>() {
        Ok(id) if id > 0 => Ok(TournamentId::new(id)),
        _ => Err(malformed()),
    }
}
