use scraper::{ElementRef, Html};

/// Parsed HTML document with tag and attribute lookups.
///
/// Parsing never fails: malformed markup is recovered by the HTML5
/// tree builder into whatever structure it can produce.
pub struct Document {
    html: Html,
}

/// A single element in a [`Document`]
#[derive(Clone, Copy)]
pub struct Element<'a> {
    inner: ElementRef<'a>,
}

impl Document {
    pub fn parse(html: &str) -> Self {
        let html = Html::parse_document(html);
        if !html.errors.is_empty() {
            ::log::trace!("Recovered from {} HTML parse errors", html.errors.len());
        }
        Self { html }
    }

    /// All elements named `tag`, in document order
    pub fn find_all<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = Element<'a>> + 'a {
        self.html
            .tree
            .root()
            .descendants()
            .filter_map(ElementRef::wrap)
            .filter(move |el| el.value().name() == tag)
            .map(|inner| Element { inner })
    }

    /// First element named `tag` that satisfies `filter`
    pub fn find_first<'a, F>(&'a self, tag: &'a str, filter: F) -> Option<Element<'a>>
    where
        F: Fn(&Element<'a>) -> bool,
    {
        self.find_all(tag).find(|el| filter(el))
    }
}

impl<'a> Element<'a> {
    /// Concatenation of every descendant text node
    pub fn text_content(&self) -> String {
        self.inner.text().collect()
    }

    pub fn attribute(&self, name: &str) -> Option<&'a str> {
        self.inner.value().attr(name)
    }
}
