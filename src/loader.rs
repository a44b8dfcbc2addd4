use crate::error::ScrapeError;
use std::fs;
use std::path::Path;

/// Reads the URL list from `path`.
///
/// A missing or unreadable file is fatal for the run.
pub fn load_urls<P: AsRef<Path>>(path: P) -> Result<Vec<String>, ScrapeError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| ScrapeError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    let urls = parse_url_list(&contents);
    ::log::debug!("Loaded {} URLs from {}", urls.len(), path.display());
    Ok(urls)
}

/// Splits text into candidate URLs, skipping blank and `#` comment lines
pub fn parse_url_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect()
}
