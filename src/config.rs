use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

use crate::round::{DiceRoller, SeededRoller, ThreadRngRoller};
use crate::storage::{FileStore, InMemoryStore, KeyValueStore, StorageError};

pub const BIND_ADDR_VAR: &str = "DICE_DUEL_BIND_ADDR";
pub const STORE_VAR: &str = "DICE_DUEL_STORE";
pub const SEED_VAR: &str = "DICE_DUEL_SEED";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_STORE_PATH: &str = "dice-duel-rounds.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid {var}: {value}")]
    Invalid { var: &'static str, value: String },

    #[error("Failed to open store: {0}")]
    Store(#[from] StorageError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    Memory,
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub store: StoreBackend,
    pub seed: Option<u64>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the config from any variable source; unset or blank variables
    /// fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let bind_addr_raw = var(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr_raw
            .trim()
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::Invalid {
                var: BIND_ADDR_VAR,
                value: bind_addr_raw.clone(),
            })?;

        let store = match var(STORE_VAR) {
            Some(value) if value.trim().eq_ignore_ascii_case("memory") => StoreBackend::Memory,
            Some(value) => StoreBackend::File(PathBuf::from(value.trim())),
            None => StoreBackend::File(PathBuf::from(DEFAULT_STORE_PATH)),
        };

        let seed = var(SEED_VAR)
            .map(|value| {
                value.trim().parse::<u64>().map_err(|_| ConfigError::Invalid {
                    var: SEED_VAR,
                    value: value.clone(),
                })
            })
            .transpose()?;

        Ok(Self {
            bind_addr,
            store,
            seed,
        })
    }

    pub fn open_store(&self) -> Result<Arc<dyn KeyValueStore>, ConfigError> {
        let store: Arc<dyn KeyValueStore> = match &self.store {
            StoreBackend::Memory => Arc::new(InMemoryStore::new()),
            StoreBackend::File(path) => Arc::new(FileStore::open(path)?),
        };
        Ok(store)
    }

    pub fn roller(&self) -> Arc<dyn DiceRoller> {
        match self.seed {
            Some(seed) => Arc::new(SeededRoller::new(seed)),
            None => Arc::new(ThreadRngRoller),
        }
    }
}
