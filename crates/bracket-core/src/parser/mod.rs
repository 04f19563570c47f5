//! Parsers for user input and BracketTeam JSON payloads
//!
//! - `identifier`: resolve an event reference into a tournament id
//! - `response`: walk the `content` envelopes of API responses
//! - `fields`: tolerant per-column extraction from raw match records

pub mod fields;
pub mod identifier;
pub mod response;

// Re-export main parsing functions
pub use fields::{
    extract_away, extract_court, extract_home, extract_location, extract_row, extract_time,
    first_in_paths, first_nonempty, lookup, KeyPath,
};
pub use identifier::parse_event_id;
pub use response::{parse_division, parse_divisions, take_matches};
