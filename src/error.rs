use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Run-level failures.
///
/// Per-page problems are not represented here; they are logged and the page
/// is skipped.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// The URL list could not be opened or read
    #[error("URL file not available: {}: {source}", .path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The output file could not be written
    #[error("Failed to write output file {}: {source}", .path.display())]
    SinkUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The result set could not be encoded as JSON
    #[error("Failed to serialize results: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Invalid or unreadable configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// The HTTP client could not be built
    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

impl ScrapeError {
    /// Whether the error happened after pages were already scraped in memory
    pub fn is_sink_failure(&self) -> bool {
        matches!(
            self,
            ScrapeError::SinkUnavailable { .. } | ScrapeError::Serialize(_)
        )
    }
}
