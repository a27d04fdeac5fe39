// Library crate for the Dice Duel game server
// This file exposes the public API for integration tests

pub mod config;
pub mod duel;
pub mod round;
pub mod round_log;
pub mod shared;
pub mod storage;

// Re-export commonly used types for easier access in tests
pub use config::{AppConfig, ConfigError, StoreBackend};
pub use duel::{routes, DuelService};
pub use round::{DiceRoller, DieFace, Outcome, RoundEngine, RoundResult, Stats};
pub use round_log::{Diagnostics, RoundLog, RoundLogError};
pub use shared::{AppError, AppState};
pub use storage::{FileStore, InMemoryStore, KeyValueStore, StorageError};
