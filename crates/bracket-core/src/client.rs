//! HTTP client with retry logic for the BracketTeam API
//!
//! Every request carries the same identifying headers and token, shares one
//! connection pool, and is retried with exponential backoff on 429, 5xx and
//! transport failures.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::StatusCode;
use serde_json::Value;
use tokio::time::sleep;
use tracing::{debug, error, warn};

use crate::error::{BracketError, Result};

/// Base URL for BracketTeam
const BRACKETTEAM_BASE_URL: &str = "https://bracketteam.com";

/// Endpoint listing a tournament and its divisions
pub const PUBLIC_TOURNAMENT_ENDPOINT: &str = "/api/get-public-tournament";

/// Endpoint returning one page of a division's schedule
pub const DIVISION_SCHEDULE_ENDPOINT: &str = "/api/get-division-schedule";

const DEFAULT_USER_AGENT: &str = "BracketTeamScraper/1.0 (+https://example.org)";

const DEFAULT_ACCEPT: &str = "application/json, */*";

/// Header carrying the API token
const AUTHORIZATION_HEADER: &str = "x-authorization";

/// Configuration for the BracketTeam HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Scheme and host requests are sent to (default: https://bracketteam.com)
    pub base_url: String,
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
    /// User-Agent header value
    pub user_agent: String,
    /// Total attempts per request, first one included (default: 3)
    pub max_attempts: u32,
    /// Sleep before the first retry (default: 1.5s)
    pub initial_backoff: Duration,
    /// Factor applied to the sleep after every retry (default: 1.5)
    pub backoff_multiplier: f64,
    /// Matches requested per schedule page (default: 20)
    pub page_size: usize,
    /// Courtesy pause between schedule pages and between divisions (default: 500ms)
    pub polite_delay: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: BRACKETTEAM_BASE_URL.to_string(),
            timeout_secs: 30,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            max_attempts: 3,
            initial_backoff: Duration::from_millis(1500),
            backoff_multiplier: 1.5,
            page_size: 20,
            polite_delay: Duration::from_millis(500),
        }
    }
}

/// HTTP client for the BracketTeam JSON API
///
/// Failures come back as `Err` values; the client never panics and never
/// retries client errors or unparseable bodies.
pub struct BracketClient {
    /// Underlying HTTP client, reused for every request of a run
    client: reqwest::Client,
    config: ClientConfig,
}

impl BracketClient {
    /// Create a client with default configuration.
    ///
    /// # Errors
    /// - `BracketError::MissingToken` if `token` is blank
    /// - `BracketError::InvalidToken` if `token` is not a valid header value
    pub fn new(token: &str) -> Result<Self> {
        Self::with_config(ClientConfig::default(), token)
    }

    /// Create a client with custom configuration.
    ///
    /// # Errors
    /// Same as [`BracketClient::new`], plus `BracketError::InvalidConfig` for
    /// an unusable user agent or backoff multiplier and
    /// `BracketError::Transport` if the underlying HTTP client cannot be built.
    pub fn with_config(config: ClientConfig, token: &str) -> Result<Self> {
        if !config.backoff_multiplier.is_finite() || config.backoff_multiplier < 1.0 {
            return Err(BracketError::InvalidConfig(format!(
                "backoff_multiplier must be a finite number >= 1, got {}",
                config.backoff_multiplier
            )));
        }

        let token = token.trim();
        if token.is_empty() {
            return Err(BracketError::MissingToken);
        }

        let mut auth = HeaderValue::from_str(token).map_err(|_| BracketError::InvalidToken)?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(DEFAULT_ACCEPT));
        headers.insert(HeaderName::from_static(AUTHORIZATION_HEADER), auth);

        let user_agent = HeaderValue::from_str(&config.user_agent).map_err(|_| {
            BracketError::InvalidConfig(format!("user_agent {:?}", config.user_agent))
        })?;
        headers.insert(USER_AGENT, user_agent);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// GET `endpoint` with `params` and parse the body as JSON.
    ///
    /// # Errors
    /// - `BracketError::RetriesExhausted` - 429/5xx on every attempt
    /// - `BracketError::Transport` - network failure on every attempt
    /// - `BracketError::HttpStatus` - any other non-success status (not retried)
    /// - `BracketError::InvalidJson` - success status with a non-JSON body (not retried)
    pub async fn get_json(&self, endpoint: &str, params: &[(&str, String)]) -> Result<Value> {
        let url = format!("{}{}", self.config.base_url.trim_end_matches('/'), endpoint);
        let max_attempts = self.config.max_attempts.max(1);
        let mut attempt = 0u32;

        loop {
            attempt += 1;
            debug!("GET {url} (attempt {attempt}/{max_attempts})");

            let transport_error = match self.client.get(&url).query(params).send().await {
                Ok(response) => {
                    let status = response.status();
                    let full_url = response.url().to_string();

                    if is_retryable(status) {
                        if attempt < max_attempts {
                            let delay = self.backoff_delay(attempt);
                            warn!("HTTP {status} from {full_url}. Retrying in {delay:?} (attempt {attempt}/{max_attempts})");
                            sleep(delay).await;
                            continue;
                        }
                        let err = BracketError::RetriesExhausted {
                            status: status.as_u16(),
                            url: full_url,
                            attempts: attempt,
                        };
                        error!("{err}");
                        return Err(err);
                    }

                    if !status.is_success() {
                        let err = BracketError::HttpStatus {
                            status: status.as_u16(),
                            url: full_url,
                        };
                        error!("{err}");
                        return Err(err);
                    }

                    match response.bytes().await {
                        Ok(body) => {
                            return serde_json::from_slice(&body).map_err(|source| {
                                let err = BracketError::InvalidJson {
                                    url: full_url,
                                    source,
                                };
                                error!("{err}");
                                err
                            });
                        }
                        Err(e) => e,
                    }
                }
                Err(e) => e,
            };

            if attempt < max_attempts {
                let delay = self.backoff_delay(attempt);
                warn!("Request error {transport_error} for {url}. Retrying in {delay:?} (attempt {attempt}/{max_attempts})");
                sleep(delay).await;
                continue;
            }

            error!("Request error after {attempt} attempts: {url} :: {transport_error}");
            return Err(BracketError::Transport(transport_error));
        }
    }

    /// Sleep before retry number `retry` (1-based): the initial backoff,
    /// multiplied once more for every earlier retry.
    fn backoff_delay(&self, retry: u32) -> Duration {
        let exponent = retry.saturating_sub(1).min(i32::MAX as u32) as i32;
        let secs =
            self.config.initial_backoff.as_secs_f64() * self.config.backoff_multiplier.powi(exponent);
        Duration::try_from_secs_f64(secs).unwrap_or(Duration::MAX)
    }
}

/// 429 and every 5xx are worth another attempt.
fn is_retryable(status: StatusCode) -> bool {
    status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
}
