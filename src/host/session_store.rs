//! Session persistence collaborator.
//!
//! Best-effort: hosts without this capability report
//! [`SessionError::Unsupported`] and the feature continues without the side
//! effect.

use crate::types::errors::SessionError;

/// Trait defining the session-persistence service interface.
pub trait SessionStoreTrait {
    /// Asks the host to persist its current session state.
    fn save(&mut self) -> Result<(), SessionError>;
}

/// In-memory session store counting save requests, with a switch to mimic a
/// host lacking the capability.
#[derive(Debug)]
pub struct InMemorySessionStore {
    supported: bool,
    save_count: usize,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self {
            supported: true,
            save_count: 0,
        }
    }

    /// A store that fails every save with `Unsupported`.
    pub fn unsupported() -> Self {
        Self {
            supported: false,
            save_count: 0,
        }
    }

    pub fn save_count(&self) -> usize {
        self.save_count
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStoreTrait for InMemorySessionStore {
    fn save(&mut self) -> Result<(), SessionError> {
        if !self.supported {
            return Err(SessionError::Unsupported);
        }
        self.save_count += 1;
        Ok(())
    }
}
