pub mod config;
pub mod error;
pub mod fetcher;
pub mod loader;
pub mod parsers;
pub mod results;
pub mod runner;
pub mod utils;

// Re-export commonly used types for convenience
pub use config::ScraperConfig;
pub use error::ScrapeError;
pub use fetcher::{FetchOutcome, Fetcher};
pub use parsers::extract;
pub use results::{Image, Link, PageRecord, ResultSet};

use std::path::{Path, PathBuf};

/// Counts reported at the end of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// URLs taken from the input list
    pub attempted: usize,
    /// Pages fetched and extracted
    pub scraped: usize,
    /// Pages skipped after a fetch failure
    pub failed: usize,
}

/// Process exit status for the outcome of a run.
///
/// Only run-level errors fail the process; pages that could not be fetched
/// are already counted in the summary.
pub fn exit_code(result: &Result<RunSummary, ScrapeError>) -> u8 {
    match result {
        Ok(_) => 0,
        Err(_) => 1,
    }
}

/// Main builder for a scrape run
#[derive(Debug, Clone, Default)]
pub struct Scraper {
    config: ScraperConfig,
}

impl Scraper {
    /// Create a new Scraper from a configuration
    pub fn new(config: ScraperConfig) -> Self {
        Self { config }
    }

    /// Set the per-request timeout
    pub fn with_timeout(mut self, timeout_seconds: u64) -> Self {
        self.config.timeout_secs = timeout_seconds;
        self
    }

    /// Set the maximum number of concurrent fetches
    pub fn with_max_concurrency(mut self, max_concurrency: usize) -> Self {
        self.config.max_concurrency = max_concurrency;
        self
    }

    /// Set the User-Agent header sent with every request
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Set the file the URL list is read from
    pub fn with_urls_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.urls_file = path.into();
        self
    }

    /// Set the file results are written to
    pub fn with_output_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.output_file = path.into();
        self
    }

    /// Replace the configuration with one loaded from a JSON file
    pub fn with_config_file(self, path: impl AsRef<Path>) -> Result<Self, ScrapeError> {
        let config = ScraperConfig::from_file(path)?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ScraperConfig {
        &self.config
    }

    /// Scrape the given URLs without touching the filesystem
    pub async fn scrape(&self, urls: &[String]) -> Result<ResultSet, ScrapeError> {
        let fetcher = Fetcher::new(self.config.timeout(), &self.config.user_agent)?;
        Ok(runner::scrape_urls(&fetcher, urls, self.config.max_concurrency).await)
    }

    /// Load the URL list, scrape every page and save the results.
    ///
    /// Fails before any request if the URL list cannot be read. Per-page
    /// failures are logged and only show up in the summary.
    pub async fn run(&self) -> Result<RunSummary, ScrapeError> {
        ::log::info!(
            "Starting scrape with URLs from {}",
            self.config.urls_file.display()
        );
        let urls = loader::load_urls(&self.config.urls_file)?;
        ::log::info!("Loaded {} URLs", urls.len());

        let results = self.scrape(&urls).await?;
        let summary = RunSummary {
            attempted: urls.len(),
            scraped: results.len(),
            failed: urls.len() - results.len(),
        };

        if results.is_empty() {
            ::log::warn!("No pages were scraped; writing an empty result set");
        }
        results.write_to(&self.config.output_file)?;
        ::log::info!("Saved results to {}", self.config.output_file.display());

        Ok(summary)
    }
}
