use crate::error::ScrapeError;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Identifying header sent with every request
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (compatible; WebScraper/1.0)";

/// Configuration for a scrape run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScraperConfig {
    /// File containing the URLs to scrape, one per line
    #[serde(default = "default_urls_file")]
    pub urls_file: PathBuf,

    /// Destination of the JSON results
    #[serde(default = "default_output_file")]
    pub output_file: PathBuf,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Value of the User-Agent header
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Maximum number of pages fetched at the same time (1 = sequential)
    #[serde(default = "default_max_concurrency")]
    pub max_concurrency: usize,
}

impl ScraperConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ScrapeError> {
        let path = path.as_ref();
        let mut contents = String::new();
        File::open(path)
            .and_then(|mut file| file.read_to_string(&mut contents))
            .map_err(|e| ScrapeError::Config(format!("{}: {}", path.display(), e)))?;

        Self::from_json(&contents)
            .map_err(|e| ScrapeError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Parse configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ScrapeError> {
        serde_json::from_str(json).map_err(|e| ScrapeError::Config(e.to_string()))
    }

    /// Request timeout as a duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            urls_file: default_urls_file(),
            output_file: default_output_file(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            max_concurrency: default_max_concurrency(),
        }
    }
}

fn default_urls_file() -> PathBuf {
    PathBuf::from("urls.txt")
}

fn default_output_file() -> PathBuf {
    PathBuf::from("scraped_data.json")
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_max_concurrency() -> usize {
    1
}
