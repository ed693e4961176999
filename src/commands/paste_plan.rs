//! Paste planning: decides, per extracted URL, how the new tab is created
//! and where it is inserted. Pure; actual tab creation happens in
//! [`crate::commands::tab_clipboard`].

use crate::codec::extractor::UrlMatch;
use crate::types::session::LazyTabState;

/// How a planned tab comes to life.
#[derive(Debug, Clone, PartialEq)]
pub enum PasteAction {
    /// Navigate to the URL immediately.
    Navigate(String),
    /// Create a placeholder carrying serialized state; the host loads the
    /// page when the tab is first activated.
    RestoreOnDemand(LazyTabState),
}

/// One tab to create, at a fixed strip index.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedTab {
    pub index: usize,
    pub action: PasteAction,
}

/// Assigns match `i` the insertion index `anchor + 1 + i`, so the new tabs
/// land immediately behind the anchor in match order. The action is a pure
/// branch on `restore_on_demand`.
pub fn plan_paste(
    matches: &[UrlMatch<'_>],
    restore_on_demand: bool,
    anchor: usize,
) -> Vec<PlannedTab> {
    matches
        .iter()
        .enumerate()
        .map(|(i, m)| {
            let action = if restore_on_demand {
                PasteAction::RestoreOnDemand(LazyTabState::for_url(m.text))
            } else {
                PasteAction::Navigate(m.text.to_string())
            };
            PlannedTab {
                index: anchor + 1 + i,
                action,
            }
        })
        .collect()
}
