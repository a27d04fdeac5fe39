use std::collections::HashMap;
use std::sync::Mutex;
use tracing::{debug, instrument};

use super::{KeyValueStore, StorageError};

/// In-memory implementation of KeyValueStore for development and testing
///
/// Data is lost when the process exits; use `FileStore` to keep rounds
/// across restarts.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl InMemoryStore {
    /// Creates a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store with pre-populated entries
    pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let map = entries
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();

        Self {
            entries: Mutex::new(map),
        }
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.lock()?;
        Ok(entries.get(key).cloned())
    }

    #[instrument(skip(self, value))]
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock()?;
        entries.insert(key.to_string(), value.to_string());
        debug!(key, "Stored entry in memory");
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, StorageError> {
        let entries = self.entries.lock()?;
        Ok(entries.keys().cloned().collect())
    }

    fn len(&self) -> Result<usize, StorageError> {
        Ok(self.entries.lock()?.len())
    }

    #[instrument(skip(self))]
    fn clear(&self) -> Result<(), StorageError> {
        let mut entries = self.entries.lock()?;
        let removed = entries.len();
        entries.clear();
        debug!(removed, "Cleared in-memory store");
        Ok(())
    }
}
