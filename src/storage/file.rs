//! JSON-file backed store.
//!
//! The whole map lives in one JSON object. Every mutation rewrites the file
//! through a temporary sibling that is synced and then renamed over the
//! original, so a crash mid-write leaves the previous contents intact.

use std::collections::HashMap;
use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, info, instrument};

use super::{KeyValueStore, StorageError};

#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    temp_path: PathBuf,
    entries: Mutex<HashMap<String, String>>,
}

impl FileStore {
    /// Opens the store at `path`, starting empty when the file does not exist.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let path = path.as_ref().to_path_buf();

        let entries = match std::fs::read(&path) {
            Ok(bytes) if bytes.is_empty() => HashMap::new(),
            Ok(bytes) => serde_json::from_slice::<HashMap<String, String>>(&bytes)
                .map_err(|e| StorageError::Corrupt(format!("{}: {}", path.display(), e)))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(e.into()),
        };

        info!(path = %path.display(), entries = entries.len(), "Opened file store");

        Ok(Self {
            temp_path: temp_sibling(&path),
            path,
            entries: Mutex::new(entries),
        })
    }

    fn persist(&self, entries: &HashMap<String, String>) -> Result<(), StorageError> {
        let data = serde_json::to_vec(entries)?;
        {
            let mut file = std::fs::File::create(&self.temp_path)?;
            file.write_all(&data)?;
            file.sync_all()?;
        }

        std::fs::rename(&self.temp_path, &self.path)?;
        debug!(path = %self.path.display(), bytes = data.len(), "Persisted file store");
        Ok(())
    }

    /// Applies `mutate` to a copy of the map and swaps it in only once the
    /// copy is on disk.
    fn mutate(
        &self,
        mutate: impl FnOnce(&mut HashMap<String, String>),
    ) -> Result<(), StorageError> {
        let mut entries = self.entries.lock()?;
        let mut next = entries.clone();
        mutate(&mut next);
        self.persist(&next)?;
        *entries = next;
        Ok(())
    }
}

/// `rounds.json` -> `rounds.json.tmp`. Appending keeps the temp file distinct
/// from the store even when the store itself ends in `.tmp`.
fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.lock()?.get(key).cloned())
    }

    #[instrument(skip(self, value))]
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.mutate(|entries| {
            entries.insert(key.to_string(), value.to_string());
        })
    }

    fn keys(&self) -> Result<Vec<String>, StorageError> {
        Ok(self.entries.lock()?.keys().cloned().collect())
    }

    fn len(&self) -> Result<usize, StorageError> {
        Ok(self.entries.lock()?.len())
    }

    #[instrument(skip(self))]
    fn clear(&self) -> Result<(), StorageError> {
        self.mutate(HashMap::clear)
    }
}
