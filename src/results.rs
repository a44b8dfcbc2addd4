use crate::error::ScrapeError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Hyperlink found on a page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Anchor text, possibly empty
    pub text: String,
    /// Absolute target URL
    pub url: String,
}

/// Image found on a page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    /// Absolute source URL
    pub url: String,
    /// Alt text, empty when the attribute is missing
    pub alt: String,
}

/// Structured content extracted from a single page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRecord {
    /// URL of the page as listed in the input
    pub url: String,

    /// Title of the page (if a title element exists)
    pub title: Option<String>,

    /// Content of the description meta tag (if present and non-empty)
    pub meta_description: Option<String>,

    /// Text of all h1-h6 elements, sorted
    pub headings: Vec<String>,

    /// Text of all paragraphs, in document order
    pub paragraphs: Vec<String>,

    /// Links sorted by URL
    pub links: Vec<Link>,

    /// Images in document order
    pub images: Vec<Image>,
}

/// Ordered collection of page records for one run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultSet {
    records: Vec<PageRecord>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record, keeping processing order
    pub fn push(&mut self, record: PageRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[PageRecord] {
        &self.records
    }

    /// Pretty-printed JSON; non-ASCII text is written as-is
    pub fn to_json(&self) -> Result<String, ScrapeError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Serialize and write the whole set to `path`
    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<(), ScrapeError> {
        let path = path.as_ref();
        let json = self.to_json()?;
        fs::write(path, json).map_err(|source| ScrapeError::SinkUnavailable {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl FromIterator<PageRecord> for ResultSet {
    fn from_iter<I: IntoIterator<Item = PageRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}
