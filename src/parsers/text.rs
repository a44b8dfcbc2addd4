//! Text normalization shared by the extractor.
//!
//! Normalized text is the element's text with surrounding whitespace
//! stripped. Internal whitespace is left exactly as authored.

/// Strips leading and trailing whitespace
pub fn normalize(text: &str) -> String {
    text.trim().to_string()
}

/// Normalizes text and drops it when nothing is left
pub fn normalize_non_empty(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
