//! Shared helpers for unit tests

use std::time::Duration;

use serde_json::{json, Value};

use crate::client::ClientConfig;

/// Client configuration pointed at a mock server, with millisecond delays.
pub fn fast_config(base_url: &str) -> ClientConfig {
    ClientConfig {
        base_url: base_url.to_string(),
        initial_backoff: Duration::from_millis(20),
        polite_delay: Duration::from_millis(1),
        ..ClientConfig::default()
    }
}

/// A schedule page body holding `count` matches numbered from `first`.
pub fn schedule_page(first: usize, count: usize) -> Value {
    let matches: Vec<Value> = (first..first + count)
        .map(|n| {
            json!({
                "id": n,
                "start_date_time": format!("2025-10-04 {:02}:00", n % 24),
                "court": {"court_name": format!("Court {n}"), "venue": {"name": "Fieldhouse"}},
                "home_team": {"name": format!("Home {n}")},
                "away_team": {"name": format!("Away {n}")}
            })
        })
        .collect();
    json!({"content": {"matches": matches}})
}

/// A public tournament body listing `(id, name)` divisions.
pub fn tournament_body(divisions: &[(u64, &str)]) -> Value {
    let divisions: Vec<Value> = divisions
        .iter()
        .map(|(id, name)| json!({"id": id, "division_name": name}))
        .collect();
    json!({"content": {"tournament": {"id": 6489, "divisions": divisions}}})
}
