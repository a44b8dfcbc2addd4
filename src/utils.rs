use url::Url;

/// Parses the page URL used as the base for relative references
pub fn parse_base(page_url: &str) -> Option<Url> {
    match Url::parse(page_url) {
        Ok(base) => Some(base),
        Err(e) => {
            ::log::debug!("Page URL {} is not a valid base: {}", page_url, e);
            None
        }
    }
}

/// Resolves `reference` against `base` into an absolute URL string.
///
/// A reference that cannot be joined onto a valid base is kept as authored
/// (trimmed). Without a usable base only references that are already
/// absolute resolve.
pub fn resolve_url(base: Option<&Url>, reference: &str) -> Option<String> {
    match base {
        Some(base) => match base.join(reference) {
            Ok(url) => Some(url.to_string()),
            Err(e) => {
                ::log::debug!("Keeping unjoinable reference {:?} as authored: {}", reference, e);
                Some(reference.trim().to_string())
            }
        },
        None => match Url::parse(reference) {
            Ok(url) => Some(url.to_string()),
            Err(e) => {
                ::log::debug!("Skipping unresolvable reference {:?}: {}", reference, e);
                None
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("http://e.com/dir/page?x=1#top").unwrap()
    }

    #[test]
    fn test_resolve_relative_forms() {
        let base = base();
        let cases = [
            ("/x", "http://e.com/x"),
            ("y.png", "http://e.com/dir/y.png"),
            ("../up", "http://e.com/up"),
            ("//cdn.e.com/a.js", "http://cdn.e.com/a.js"),
            ("#frag", "http://e.com/dir/page?x=1#frag"),
            ("?q=2", "http://e.com/dir/page?q=2"),
            ("https://other.org/p", "https://other.org/p"),
            ("", "http://e.com/dir/page?x=1"),
        ];

        for (reference, expected) in cases {
            assert_eq!(
                resolve_url(Some(&base), reference).as_deref(),
                Some(expected),
                "reference {:?}",
                reference
            );
        }
    }

    #[test]
    fn test_unjoinable_reference_kept_as_authored() {
        let base = base();
        assert_eq!(
            resolve_url(Some(&base), " http://exa mple.com/ ").as_deref(),
            Some("http://exa mple.com/")
        );
        assert_eq!(
            resolve_url(Some(&base), "http://[bad/i.png").as_deref(),
            Some("http://[bad/i.png")
        );
    }

    #[test]
    fn test_resolve_without_base() {
        assert_eq!(
            resolve_url(None, "https://example.com/a").as_deref(),
            Some("https://example.com/a")
        );
        assert_eq!(resolve_url(None, "/relative"), None);
    }

    #[test]
    fn test_parse_base() {
        assert!(parse_base("http://e.com/p").is_some());
        assert!(parse_base("not a url").is_none());
    }
}
