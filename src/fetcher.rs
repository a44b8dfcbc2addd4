use crate::error::ScrapeError;
use reqwest::Client;
use std::time::Duration;

/// Result of fetching a single page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// 2xx response with its decoded body
    Success(String),
    /// Network error or non-success status, with a readable reason
    Failure(String),
}

/// HTTP fetcher sharing one client across requests
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    timeout: Duration,
}

impl Fetcher {
    /// Build a fetcher with the given per-request timeout and User-Agent
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, ScrapeError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client, timeout })
    }

    /// Issue a GET for `url` and classify the result.
    ///
    /// Never fails: every problem becomes `FetchOutcome::Failure`.
    pub async fn fetch(&self, url: &str) -> FetchOutcome {
        ::log::debug!("Fetching: {}", url);

        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => return FetchOutcome::Failure(self.describe(url, &e)),
        };

        let response = match response.error_for_status() {
            Ok(response) => response,
            Err(e) => return FetchOutcome::Failure(self.describe(url, &e)),
        };

        match response.text().await {
            Ok(body) => FetchOutcome::Success(body),
            Err(e) => FetchOutcome::Failure(self.describe(url, &e)),
        }
    }

    fn describe(&self, url: &str, error: &reqwest::Error) -> String {
        if error.is_timeout() {
            format!(
                "{}: timed out after {} seconds ({})",
                url,
                self.timeout.as_secs(),
                error
            )
        } else if error.is_connect() {
            format!("{}: connection failed ({})", url, error)
        } else if let Some(status) = error.status() {
            format!("{}: HTTP status {}", url, status)
        } else {
            format!("{}: {}", url, error)
        }
    }
}
