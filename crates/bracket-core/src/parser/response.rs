//! Navigation of the `content` envelopes returned by the BracketTeam API
//!
//! Missing or mistyped levels are treated as "no data", never as errors.

use serde_json::Value;

use super::fields::{first_nonempty, lookup};
use crate::types::{Division, RawMatch};

/// Read a division id that may be encoded as a number or a numeric string.
fn parse_division_id(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Parse one entry of `content.tournament.divisions`.
///
/// Returns `None` when the record has no usable id.
pub fn parse_division(record: &Value) -> Option<Division> {
    let id = record.get("id").and_then(parse_division_id)?;

    let name = first_nonempty([record.get("division_name"), record.get("name")]);
    let name = if name.is_empty() {
        format!("Division {id}")
    } else {
        name
    };

    Some(Division::new(id, name))
}

/// Extract all divisions from a public tournament response.
pub fn parse_divisions(response: &Value) -> Vec<Division> {
    lookup(response, &["content", "tournament", "divisions"])
        .and_then(Value::as_array)
        .map(|records| records.iter().filter_map(parse_division).collect())
        .unwrap_or_default()
}

/// Take the match list out of a division schedule response.
pub fn take_matches(response: Value) -> Vec<RawMatch> {
    match response {
        Value::Object(mut root) => match root.remove("content") {
            Some(Value::Object(mut content)) => match content.remove("matches") {
                Some(Value::Array(matches)) => matches,
                _ => Vec::new(),
            },
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}
