use thiserror::Error;

use crate::storage::StorageError;

#[derive(Debug, Error)]
pub enum RoundLogError {
    /// The next index already holds a valid round, meaning the store was
    /// written outside the round log.
    #[error("Round index {index} is already taken")]
    IndexCollision { index: u64 },

    #[error("Failed to encode round record: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}
