use serde::{Deserialize, Serialize};

use super::session::LazyTabState;

/// A browser tab as seen by this feature: an identifier, the current URL,
/// and, for tabs created in on-demand restore mode, the serialized state the
/// host resolves when the tab is first activated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Tab {
    pub id: String,
    pub url: String,
    pub title: String,
    pub pending_state: Option<LazyTabState>,
}
