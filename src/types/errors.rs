use std::fmt;

// === ClipboardError ===

/// Errors raised by the host clipboard service.
#[derive(Debug)]
pub enum ClipboardError {
    /// The clipboard holds nothing readable as the expected text flavor.
    NoDataAvailable,
    /// The clipboard backend failed outright.
    Backend(String),
}

impl fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClipboardError::NoDataAvailable => {
                write!(f, "No text data available in the clipboard")
            }
            ClipboardError::Backend(msg) => write!(f, "Clipboard backend error: {}", msg),
        }
    }
}

impl std::error::Error for ClipboardError {}

// === TabError ===

/// Errors related to tab strip operations.
#[derive(Debug)]
pub enum TabError {
    /// Tab with the given ID was not found.
    NotFound(String),
}

impl fmt::Display for TabError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TabError::NotFound(id) => write!(f, "Tab not found: {}", id),
        }
    }
}

impl std::error::Error for TabError {}

// === SessionError ===

/// Errors related to session persistence.
#[derive(Debug)]
pub enum SessionError {
    /// The host exposes no session-persistence capability.
    Unsupported,
    /// Failed to serialize or deserialize session state.
    SerializationError(String),
    /// The host's session save failed.
    SaveFailed(String),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::Unsupported => write!(f, "Session persistence not supported by host"),
            SessionError::SerializationError(msg) => {
                write!(f, "Session serialization error: {}", msg)
            }
            SessionError::SaveFailed(msg) => write!(f, "Session save failed: {}", msg),
        }
    }
}

impl std::error::Error for SessionError {}

// === PrefsError ===

/// Errors related to the preference store.
#[derive(Debug)]
pub enum PrefsError {
    /// An I/O error occurred while reading or writing preferences.
    IoError(String),
    /// Failed to serialize or deserialize the preference file.
    SerializationError(String),
}

impl fmt::Display for PrefsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrefsError::IoError(msg) => write!(f, "Preferences I/O error: {}", msg),
            PrefsError::SerializationError(msg) => {
                write!(f, "Preferences serialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for PrefsError {}
