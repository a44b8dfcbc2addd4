use crate::parsers::document::Document;
use crate::parsers::text;
use crate::results::{Image, Link, PageRecord};
use crate::utils;

const HEADING_TAGS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

/// Extracts the structured record for one page.
///
/// Pure: no I/O and no shared state, so identical input always yields an
/// identical record.
pub fn extract(url: &str, html: &str) -> PageRecord {
    let doc = Document::parse(html);
    let base = utils::parse_base(url);

    let title = doc
        .find_first("title", |_| true)
        .map(|el| text::normalize(&el.text_content()));

    let meta_description = doc
        .find_first("meta", |el| el.attribute("name") == Some("description"))
        .and_then(|el| el.attribute("content"))
        .and_then(text::normalize_non_empty);

    let mut headings = Vec::new();
    for tag in HEADING_TAGS {
        headings.extend(
            doc.find_all(tag)
                .filter_map(|el| text::normalize_non_empty(&el.text_content())),
        );
    }
    headings.sort();

    let paragraphs = doc
        .find_all("p")
        .filter_map(|el| text::normalize_non_empty(&el.text_content()))
        .collect::<Vec<_>>();

    let mut links = doc
        .find_all("a")
        .filter_map(|el| {
            let href = el.attribute("href")?;
            let url = utils::resolve_url(base.as_ref(), href)?;
            Some(Link {
                text: text::normalize(&el.text_content()),
                url,
            })
        })
        .collect::<Vec<_>>();
    // sort_by is stable, ties keep document order
    links.sort_by(|a, b| a.url.cmp(&b.url));

    let images = doc
        .find_all("img")
        .filter_map(|el| {
            let src = el.attribute("src")?;
            let url = utils::resolve_url(base.as_ref(), src)?;
            Some(Image {
                url,
                alt: el.attribute("alt").map(text::normalize).unwrap_or_default(),
            })
        })
        .collect::<Vec<_>>();

    ::log::debug!(
        "Extracted {} headings, {} paragraphs, {} links, {} images from {}",
        headings.len(),
        paragraphs.len(),
        links.len(),
        images.len(),
        url
    );

    PageRecord {
        url: url.to_string(),
        title,
        meta_description,
        headings,
        paragraphs,
        links,
        images,
    }
}
