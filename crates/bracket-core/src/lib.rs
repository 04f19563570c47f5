//! BracketTeam Schedule Export Core Library
//!
//! This crate harvests tournament schedules from the BracketTeam JSON API
//! and flattens them into a six-column CSV.
//!
//! # Features
//! - Resolve tournament ids from bare numbers or event URLs
//! - Retrying HTTP client with exponential backoff on 429/5xx
//! - Lazy per-division pagination with polite delays
//! - Tolerant field extraction across inconsistent payload shapes

pub mod client;
pub mod error;
pub mod export;
pub mod paginator;
pub mod parser;
pub mod scraper;
pub mod types;

#[cfg(test)]
mod testing;

// Re-export main types for convenience
pub use client::{BracketClient, ClientConfig};
pub use error::{BracketError, Result};
pub use export::{run_export, ExportOptions};
pub use paginator::MatchPaginator;
pub use scraper::BracketScraper;
pub use types::{Division, DivisionCount, ExportSummary, RawMatch, ScheduleRow, TournamentId};
