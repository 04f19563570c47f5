//! Lazy page-by-page iteration over a division's schedule
//!
//! Pages are requested one at a time and only when the previous page has
//! been drained. Iteration stops after an empty page or after a page holding
//! fewer matches than the page size. A full final page therefore costs one
//! extra request that comes back empty.

use std::collections::VecDeque;

use tokio::time::sleep;
use tracing::debug;

use crate::client::{BracketClient, DIVISION_SCHEDULE_ENDPOINT};
use crate::parser::take_matches;
use crate::types::{RawMatch, TournamentId};

/// Schedule filters the exporter never narrows; sent as the literal `null`.
const NULL_FILTERS: [&str; 7] = [
    "start_date",
    "end_date",
    "filter_team",
    "pool_id",
    "bracket_id",
    "venue_id",
    "court_id",
];

/// Pull-based cursor over the matches of one division.
///
/// A fresh paginator always starts again from page 1.
///
/// # Example
/// ```no_run
/// use bracket_core::{BracketClient, MatchPaginator, TournamentId};
///
/// # async fn example() -> Result<(), bracket_core::BracketError> {
/// let client = BracketClient::new("token")?;
/// let mut matches = MatchPaginator::new(&client, TournamentId::new(6489), 1201);
/// while let Some(m) = matches.next_match().await {
///     println!("{}", m["id"]);
/// }
/// # Ok(())
/// # }
/// ```
pub struct MatchPaginator<'a> {
    client: &'a BracketClient,
    tournament_id: TournamentId,
    division_id: u64,
    /// Next page to request (1-based)
    page: u32,
    buffer: VecDeque<RawMatch>,
    exhausted: bool,
    pages_fetched: u32,
}

impl<'a> MatchPaginator<'a> {
    pub fn new(client: &'a BracketClient, tournament_id: TournamentId, division_id: u64) -> Self {
        Self {
            client,
            tournament_id,
            division_id,
            page: 1,
            buffer: VecDeque::new(),
            exhausted: false,
            pages_fetched: 0,
        }
    }

    /// Next match in upstream order, fetching another page when needed.
    ///
    /// Returns `None` once the division is exhausted. A page that fails to
    /// load counts as empty and ends the iteration.
    pub async fn next_match(&mut self) -> Option<RawMatch> {
        loop {
            if let Some(m) = self.buffer.pop_front() {
                return Some(m);
            }
            if self.exhausted {
                return None;
            }
            self.fetch_next_page().await;
        }
    }

    /// Drain every remaining match into a vector.
    pub async fn collect_all(mut self) -> Vec<RawMatch> {
        let mut all = Vec::new();
        while let Some(m) = self.next_match().await {
            all.push(m);
        }
        all
    }

    /// Number of schedule requests issued so far.
    pub fn pages_fetched(&self) -> u32 {
        self.pages_fetched
    }

    fn page_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("tournament_id", self.tournament_id.to_string()),
            ("division_id", self.division_id.to_string()),
            ("page", self.page.to_string()),
        ];
        params.extend(NULL_FILTERS.iter().map(|key| (*key, "null".to_string())));
        params.push((
            "matches_per_page",
            self.client.config().page_size.to_string(),
        ));
        params.push(("only_games", "false".to_string()));
        params
    }

    async fn fetch_next_page(&mut self) {
        let client = self.client;
        let config = client.config();
        if self.page > 1 {
            sleep(config.polite_delay).await;
        }

        let params = self.page_params();
        self.pages_fetched += 1;
        let matches = match client.get_json(DIVISION_SCHEDULE_ENDPOINT, &params).await {
            Ok(response) => take_matches(response),
            // already logged by the client
            Err(_) => Vec::new(),
        };

        debug!(
            "Division {} page {}: {} matches",
            self.division_id,
            self.page,
            matches.len()
        );

        if matches.is_empty() || matches.len() < config.page_size {
            self.exhausted = true;
        } else {
            self.page += 1;
        }
        self.buffer.extend(matches);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ClientConfig;
    use crate::testing::{fast_config, schedule_page};
    use std::time::{Duration, Instant};
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn mount_page(server: &MockServer, page: u32, body: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path(DIVISION_SCHEDULE_ENDPOINT))
            .and(query_param("page", page.to_string()))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(1)
            .mount(server)
            .await;
    }

    fn client_for(server: &MockServer) -> BracketClient {
        BracketClient::with_config(fast_config(&server.uri()), "t").unwrap()
    }

    #[tokio::test]
    async fn test_stops_after_short_page() {
        let server = MockServer::start().await;
        mount_page(&server, 1, schedule_page(0, 20)).await;
        mount_page(&server, 2, schedule_page(20, 20)).await;
        mount_page(&server, 3, schedule_page(40, 7)).await;

        let client = client_for(&server);
        let mut paginator = MatchPaginator::new(&client, TournamentId::new(6489), 77);
        let mut ids = Vec::new();
        while let Some(m) = paginator.next_match().await {
            ids.push(m["id"].as_u64().unwrap());
        }

        assert_eq!(ids.len(), 47);
        assert_eq!(ids, (0..47).collect::<Vec<u64>>());
        assert_eq!(paginator.pages_fetched(), 3);
    }

    #[tokio::test]
    async fn test_full_last_page_costs_one_empty_fetch() {
        let server = MockServer::start().await;
        mount_page(&server, 1, schedule_page(0, 20)).await;
        mount_page(&server, 2, schedule_page(20, 20)).await;
        mount_page(&server, 3, schedule_page(40, 20)).await;
        mount_page(&server, 4, schedule_page(60, 0)).await;

        let client = client_for(&server);
        let mut paginator = MatchPaginator::new(&client, TournamentId::new(6489), 77);
        let mut count = 0;
        while paginator.next_match().await.is_some() {
            count += 1;
        }

        assert_eq!(count, 60);
        assert_eq!(paginator.pages_fetched(), 4);
    }

    #[tokio::test]
    async fn test_empty_first_page_yields_nothing() {
        let server = MockServer::start().await;
        mount_page(&server, 1, schedule_page(0, 0)).await;

        let client = client_for(&server);
        let matches = MatchPaginator::new(&client, TournamentId::new(1), 2)
            .collect_all()
            .await;

        assert!(matches.is_empty());
    }

    #[tokio::test]
    async fn test_failed_page_ends_division() {
        let server = MockServer::start().await;
        mount_page(&server, 1, schedule_page(0, 20)).await;
        Mock::given(method("GET"))
            .and(path(DIVISION_SCHEDULE_ENDPOINT))
            .and(query_param("page", "2"))
            .respond_with(ResponseTemplate::new(403))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let matches = MatchPaginator::new(&client, TournamentId::new(1), 2)
            .collect_all()
            .await;

        assert_eq!(matches.len(), 20);
    }

    #[tokio::test]
    async fn test_missing_matches_key_is_empty_page() {
        let server = MockServer::start().await;
        mount_page(&server, 1, serde_json::json!({"content": {}})).await;

        let client = client_for(&server);
        let matches = MatchPaginator::new(&client, TournamentId::new(1), 2)
            .collect_all()
            .await;

        assert!(matches.is_empty());
    }

    #[tokio::test]
    async fn test_request_carries_schedule_params() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(DIVISION_SCHEDULE_ENDPOINT))
            .and(query_param("tournament_id", "6489"))
            .and(query_param("division_id", "1201"))
            .and(query_param("page", "1"))
            .and(query_param("matches_per_page", "20"))
            .and(query_param("start_date", "null"))
            .and(query_param("end_date", "null"))
            .and(query_param("filter_team", "null"))
            .and(query_param("pool_id", "null"))
            .and(query_param("bracket_id", "null"))
            .and(query_param("venue_id", "null"))
            .and(query_param("court_id", "null"))
            .and(query_param("only_games", "false"))
            .respond_with(ResponseTemplate::new(200).set_body_json(schedule_page(0, 3)))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let matches = MatchPaginator::new(&client, TournamentId::new(6489), 1201)
            .collect_all()
            .await;

        assert_eq!(matches.len(), 3);
    }

    #[tokio::test]
    async fn test_fresh_paginator_restarts_at_first_page() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(DIVISION_SCHEDULE_ENDPOINT))
            .and(query_param("page", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(schedule_page(0, 2)))
            .expect(2)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let first = MatchPaginator::new(&client, TournamentId::new(1), 2)
            .collect_all()
            .await;
        let second = MatchPaginator::new(&client, TournamentId::new(1), 2)
            .collect_all()
            .await;

        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }

    #[tokio::test]
    async fn test_empty_page_stops_even_with_zero_page_size() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(DIVISION_SCHEDULE_ENDPOINT))
            .respond_with(ResponseTemplate::new(200).set_body_json(schedule_page(0, 0)))
            .expect(1)
            .mount(&server)
            .await;

        let config = ClientConfig {
            page_size: 0,
            ..fast_config(&server.uri())
        };
        let client = BracketClient::with_config(config, "t").unwrap();
        let mut paginator = MatchPaginator::new(&client, TournamentId::new(1), 2);

        let next = tokio::time::timeout(Duration::from_secs(2), paginator.next_match())
            .await
            .expect("empty page must end iteration");
        assert!(next.is_none());
        assert_eq!(paginator.pages_fetched(), 1);
    }

    #[tokio::test]
    async fn test_pauses_between_pages() {
        let server = MockServer::start().await;
        mount_page(&server, 1, schedule_page(0, 20)).await;
        mount_page(&server, 2, schedule_page(20, 3)).await;

        let polite_delay = Duration::from_millis(30);
        let config = ClientConfig {
            polite_delay,
            ..fast_config(&server.uri())
        };
        let client = BracketClient::with_config(config, "t").unwrap();

        let start = Instant::now();
        let matches = MatchPaginator::new(&client, TournamentId::new(1), 2)
            .collect_all()
            .await;

        assert_eq!(matches.len(), 23);
        assert!(start.elapsed() >= polite_delay);
    }

    #[tokio::test]
    async fn test_is_lazy() {
        let server = MockServer::start().await;
        mount_page(&server, 1, schedule_page(0, 20)).await;

        let client = client_for(&server);
        let mut paginator = MatchPaginator::new(&client, TournamentId::new(1), 2);
        assert_eq!(paginator.pages_fetched(), 0);

        for _ in 0..20 {
            assert!(paginator.next_match().await.is_some());
        }
        assert_eq!(paginator.pages_fetched(), 1);
    }
}
