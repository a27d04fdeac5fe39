// Public API - what other modules can use
pub use errors::StorageError;
pub use file::FileStore;
pub use memory::InMemoryStore;

// Internal modules
mod errors;
mod file;
mod memory;

/// Flat string-to-string store with no ordering guarantee.
///
/// Mirrors a browser's local storage: `keys` returns entries in whatever
/// order the backend keeps them, there are no range queries and every
/// mutation touches a single key (except `clear`). Callers needing order must
/// rebuild it themselves.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn keys(&self) -> Result<Vec<String>, StorageError>;
    fn len(&self) -> Result<usize, StorageError>;
    /// Removes every key. Clearing an empty store is not an error.
    fn clear(&self) -> Result<(), StorageError>;
}
