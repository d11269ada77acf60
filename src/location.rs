//! Splitting a fragment location into page path and anchor.

use std::fmt;

/// A parsed `location` value such as `extra/#ADCME.tic`.
///
/// The page path is everything before the first `#` and may be empty for the
/// site root. An empty anchor (`extra/#`) means the fragment points at the page
/// itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location<'a> {
    pub page_path: &'a str,
    pub anchor: Option<&'a str>,
    raw: &'a str,
}

impl<'a> Location<'a> {
    pub fn parse(raw: &'a str) -> Self {
        match raw.split_once('#') {
            Some((page_path, anchor)) => Self {
                page_path,
                anchor: (!anchor.is_empty()).then_some(anchor),
                raw,
            },
            None => Self {
                page_path: raw,
                anchor: None,
                raw,
            },
        }
    }

    /// Whether the location addresses a whole page rather than a spot within it.
    pub const fn is_page(&self) -> bool {
        self.anchor.is_none()
    }

    /// Resolves the location against a documentation root URL.
    ///
    /// `https://example.org/docs` and `https://example.org/docs/` give the same result.
    pub fn resolve(&self, base: &str) -> String {
        let mut url = base.trim_end_matches('/').to_string();
        url.push('/');
        url.push_str(self.page_path);
        if let Some(anchor) = self.anchor {
            url.push('#');
            url.push_str(anchor);
        }
        url
    }
}

/// Writes the location exactly as it was parsed.
impl fmt::Display for Location<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.raw)
    }
}
