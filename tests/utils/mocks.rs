#![allow(dead_code)] // Test utilities may not all be used in every test

use std::collections::HashMap;
use std::sync::Mutex;

use dice_duel::{DiceRoller, Diagnostics, DieFace, KeyValueStore, StorageError};

// ============================================================================
// Mock Infrastructure
// ============================================================================

/// Rolls faces from a fixed script, cycling once exhausted.
pub struct ScriptedRoller {
    faces: Vec<u8>,
    next: Mutex<usize>,
}

impl ScriptedRoller {
    pub fn new(faces: &[u8]) -> Self {
        assert!(!faces.is_empty(), "script needs at least one face");
        Self {
            faces: faces.to_vec(),
            next: Mutex::new(0),
        }
    }
}

impl DiceRoller for ScriptedRoller {
    fn roll(&self) -> DieFace {
        let mut next = self.next.lock().unwrap();
        let face = self.faces[*next % self.faces.len()];
        *next += 1;
        DieFace::new(face).unwrap()
    }
}

/// Keeps every key reported as skipped.
#[derive(Default)]
pub struct RecordingDiagnostics {
    skipped: Mutex<Vec<String>>,
}

impl RecordingDiagnostics {
    pub fn skipped_keys(&self) -> Vec<String> {
        let mut keys = self.skipped.lock().unwrap().clone();
        keys.sort();
        keys
    }
}

impl Diagnostics for RecordingDiagnostics {
    fn skipped_entry(&self, key: &str, _reason: &str) {
        self.skipped.lock().unwrap().push(key.to_string());
    }
}

/// Store that enumerates keys in reverse-lexical order and can be told to
/// reject writes, standing in for a full or disabled medium.
#[derive(Default)]
pub struct HostileStore {
    entries: Mutex<HashMap<String, String>>,
    reject_writes: Mutex<bool>,
}

impl HostileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reject_writes(&self, reject: bool) {
        *self.reject_writes.lock().unwrap() = reject;
    }

    pub fn insert(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    fn check_writable(&self) -> Result<(), StorageError> {
        if *self.reject_writes.lock().unwrap() {
            return Err(StorageError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                "quota exceeded",
            )));
        }
        Ok(())
    }
}

impl KeyValueStore for HostileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.check_writable()?;
        self.insert(key, value);
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, StorageError> {
        let mut keys: Vec<String> = self.entries.lock().unwrap().keys().cloned().collect();
        keys.sort_by(|a, b| b.cmp(a));
        Ok(keys)
    }

    fn len(&self) -> Result<usize, StorageError> {
        Ok(self.entries.lock().unwrap().len())
    }

    fn clear(&self) -> Result<(), StorageError> {
        self.check_writable()?;
        self.entries.lock().unwrap().clear();
        Ok(())
    }
}
