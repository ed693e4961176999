use serde::{Deserialize, Serialize};

use super::errors::SessionError;

/// Serialized navigation state carried by a placeholder tab in on-demand
/// restore mode. The host loads the page only when the tab is activated.
///
/// The title mirrors the URL so the placeholder is legible in the tab strip
/// before the page has ever loaded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LazyTabState {
    pub url: String,
    pub title: String,
}

impl LazyTabState {
    /// Builds the placeholder state for a URL, with `title == url`.
    pub fn for_url(url: &str) -> Self {
        Self {
            url: url.to_string(),
            title: url.to_string(),
        }
    }

    /// Serializes the state to the JSON blob handed to the host.
    pub fn to_json(&self) -> Result<String, SessionError> {
        serde_json::to_string(self).map_err(|e| SessionError::SerializationError(e.to_string()))
    }

    /// Parses a JSON blob previously produced by [`LazyTabState::to_json`].
    pub fn from_json(json: &str) -> Result<Self, SessionError> {
        serde_json::from_str(json).map_err(|e| SessionError::SerializationError(e.to_string()))
    }
}
