//! URL extractor: scans arbitrary clipboard text for well-formed URLs.

use std::sync::OnceLock;

use regex::Regex;

/// RFC-3986-flavored URL grammar, inherited from the overlay this feature
/// replaces. Matches `scheme://userinfo@host:port/path?query#fragment` with
/// permissive character classes: it deliberately accepts some invalid URIs
/// (trailing `,` or `.` is swallowed into the match) and rejects some valid
/// ones (unencoded spaces and `"` act as delimiters). This is the behavioral
/// contract of the paste feature; do not tighten it.
///
/// `(?-u)` keeps `\w`/`\d` ASCII-only, matching the original semantics.
const URL_GRAMMAR: &str = r"(?-u)\w[\w\d+\-.]+://(?:[\w\d\-._~%!$&'()*+,;=:]*@)?(?:\[[\d.A-Fa-f:]+\]|[\w\d\-._~%!$&'()*+,;=]+)(?::\d+)?(?:/[\w\d\-._~%!$&'()*+,;=:@]*)*(?:\?[\w\d\-._~%!$&'()*+,;=:@/?]*)?(?:#[\w\d\-._~%!$&'()*+,;=:@/?]*)?";

static URL_PATTERN: OnceLock<Regex> = OnceLock::new();

fn url_pattern() -> &'static Regex {
    URL_PATTERN.get_or_init(|| Regex::new(URL_GRAMMAR).expect("URL grammar must compile"))
}

/// A URL found in scanned text: the matched substring and its byte offset,
/// which orders matches left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UrlMatch<'t> {
    pub start: usize,
    pub text: &'t str,
}

/// Lazily yields every non-overlapping URL in `text`, left to right, with
/// standard greedy scan semantics. Pure function of `text`: re-running the
/// scan on the same input yields identical matches.
pub fn matches(text: &str) -> impl Iterator<Item = UrlMatch<'_>> {
    url_pattern().find_iter(text).map(|m| UrlMatch {
        start: m.start(),
        text: m.as_str(),
    })
}

/// Collects [`matches`] into a vector. No matches yields an empty vector,
/// not an error.
pub fn extract(text: &str) -> Vec<UrlMatch<'_>> {
    matches(text).collect()
}
