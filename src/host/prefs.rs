//! Preference store collaborator.
//!
//! Boolean preferences backed by a flat JSON map on disk. A missing file
//! means "no preference set"; callers supply their own defaults. Modeled as
//! a constructor-injected service so the paste logic is testable without a
//! live host profile.

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};

use crate::types::errors::PrefsError;

/// Trait defining the preference service interface.
pub trait PrefStoreTrait {
    /// Returns the boolean preference, or `None` when the key is absent or
    /// holds a non-boolean value.
    fn get_bool(&self, key: &str) -> Option<bool>;
    fn set_bool(&mut self, key: &str, value: bool) -> Result<(), PrefsError>;
}

/// Preference store persisting a flat JSON object, one entry per key.
#[derive(Debug, Default)]
pub struct PrefStore {
    path: Option<String>,
    values: Map<String, Value>,
}

impl PrefStore {
    /// Purely in-memory store; nothing is persisted.
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Store backed by the JSON file at `path`. Call [`PrefStore::load`]
    /// before first use.
    pub fn at_path(path: &str) -> Self {
        Self {
            path: Some(path.to_string()),
            values: Map::new(),
        }
    }

    /// Loads preferences from disk. A missing file yields an empty store;
    /// a malformed file is an error.
    pub fn load(&mut self) -> Result<(), PrefsError> {
        let path = match &self.path {
            Some(p) => p,
            None => return Ok(()),
        };
        if !Path::new(path).exists() {
            self.values = Map::new();
            return Ok(());
        }
        let content = fs::read_to_string(path)
            .map_err(|e| PrefsError::IoError(format!("Failed to read preference file: {}", e)))?;
        self.values = serde_json::from_str(&content).map_err(|e| {
            PrefsError::SerializationError(format!("Failed to parse preference file: {}", e))
        })?;
        Ok(())
    }

    fn save(&self) -> Result<(), PrefsError> {
        let path = match &self.path {
            Some(p) => p,
            None => return Ok(()),
        };
        if let Some(parent) = Path::new(path).parent() {
            fs::create_dir_all(parent).map_err(|e| {
                PrefsError::IoError(format!("Failed to create preference directory: {}", e))
            })?;
        }
        let json = serde_json::to_string_pretty(&self.values).map_err(|e| {
            PrefsError::SerializationError(format!("Failed to serialize preferences: {}", e))
        })?;
        fs::write(path, json)
            .map_err(|e| PrefsError::IoError(format!("Failed to write preference file: {}", e)))?;
        Ok(())
    }
}

impl PrefStoreTrait for PrefStore {
    fn get_bool(&self, key: &str) -> Option<bool> {
        self.values.get(key).and_then(Value::as_bool)
    }

    fn set_bool(&mut self, key: &str, value: bool) -> Result<(), PrefsError> {
        self.values.insert(key.to_string(), Value::Bool(value));
        self.save()
    }
}
