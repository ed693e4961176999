//! Clipboard collaborator: read and write the system clipboard's text flavor.

use crate::types::errors::ClipboardError;

/// Trait defining the clipboard service interface.
pub trait ClipboardTrait {
    /// Reads the clipboard's text contents. An empty clipboard, or one
    /// holding no text flavor, yields [`ClipboardError::NoDataAvailable`].
    fn read(&mut self) -> Result<String, ClipboardError>;
    /// Replaces the clipboard contents with `text`.
    fn write(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// In-memory clipboard for tests and the demo binary.
#[derive(Debug, Default)]
pub struct InMemoryClipboard {
    contents: Option<String>,
}

impl InMemoryClipboard {
    /// Starts empty; the first read fails with `NoDataAvailable`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts pre-loaded with `text`.
    pub fn with_text(text: &str) -> Self {
        Self {
            contents: Some(text.to_string()),
        }
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl ClipboardTrait for InMemoryClipboard {
    fn read(&mut self) -> Result<String, ClipboardError> {
        self.contents.clone().ok_or(ClipboardError::NoDataAvailable)
    }

    fn write(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}
