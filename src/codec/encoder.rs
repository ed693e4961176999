//! Tab encoder: turns an ordered list of tabs into clipboard text.

use crate::platform::LineSeparator;
use crate::types::tab::Tab;

/// Joins the tabs' URLs with the given separator, preserving input order
/// exactly. No sorting, no de-duplication, no URL validation: an empty or
/// malformed URL passes through unchanged. Empty input yields an empty
/// string.
pub fn encode_tabs(tabs: &[Tab], sep: LineSeparator) -> String {
    tabs.iter()
        .map(|tab| tab.url.as_str())
        .collect::<Vec<_>>()
        .join(sep.as_str())
}
