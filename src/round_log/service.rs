use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use super::{
    diagnostics::{Diagnostics, TracingDiagnostics},
    errors::RoundLogError,
    key::{parse_round_key, round_key},
    record::RoundRecord,
};
use crate::round::{DieFace, RoundResult, Stats};
use crate::storage::KeyValueStore;

/// Ordered, append-only round log kept in an unordered key-value store.
///
/// Each round lives under its decimal index. Order is rebuilt from the
/// numeric keys on every read; enumeration order of the store is never
/// trusted and keys that are not canonical indices are left alone.
pub struct RoundLog {
    store: Arc<dyn KeyValueStore>,
    diagnostics: Arc<dyn Diagnostics>,
}

impl RoundLog {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self::with_diagnostics(store, Arc::new(TracingDiagnostics))
    }

    pub fn with_diagnostics(
        store: Arc<dyn KeyValueStore>,
        diagnostics: Arc<dyn Diagnostics>,
    ) -> Self {
        Self { store, diagnostics }
    }

    /// Appends a round under the next index, which is the number of valid
    /// rounds currently stored.
    #[instrument(skip(self))]
    pub fn append(
        &self,
        player1: DieFace,
        player2: DieFace,
    ) -> Result<RoundResult, RoundLogError> {
        let valid = self.scan(false)?;
        let index = valid.len() as u64;

        if valid.contains_key(&index) {
            return Err(RoundLogError::IndexCollision { index });
        }

        let key = round_key(index);
        if self.store.get(&key)?.is_some() {
            warn!(key = %key, "Overwriting malformed entry at next round index");
        }

        let record = RoundRecord::new(player1, player2);
        self.store.set(&key, &record.encode()?)?;

        let round = record.into_round(index);
        debug!(index, %player1, %player2, outcome = ?round.outcome(), "Appended round");
        Ok(round)
    }

    /// Rebuilds the ordered round sequence and its stats.
    ///
    /// Malformed round entries are reported to the diagnostics sink and
    /// skipped; the rounds around them keep their positions and no
    /// placeholder is produced for the hole.
    #[instrument(skip(self))]
    pub fn load_all(&self) -> Result<(Vec<RoundResult>, Stats), RoundLogError> {
        let rounds: Vec<RoundResult> = self
            .scan(true)?
            .into_iter()
            .map(|(index, record)| record.into_round(index))
            .collect();
        let stats = Stats::from_rounds(&rounds);

        debug!(rounds = stats.rounds, "Reconstructed round log");
        Ok((rounds, stats))
    }

    /// Wipes the whole store, including keys this log does not own.
    #[instrument(skip(self))]
    pub fn clear(&self) -> Result<(), RoundLogError> {
        let removed = self.store.len()?;
        self.store.clear()?;
        info!(removed, "Cleared round log");
        Ok(())
    }

    fn scan(&self, report: bool) -> Result<BTreeMap<u64, RoundRecord>, RoundLogError> {
        let mut valid = BTreeMap::new();

        for key in self.store.keys()? {
            let Some(index) = parse_round_key(&key) else {
                continue;
            };
            let Some(payload) = self.store.get(&key)? else {
                continue;
            };

            match RoundRecord::decode(&payload) {
                Ok(record) => {
                    valid.insert(index, record);
                }
                Err(err) if report => self.diagnostics.skipped_entry(&key, &err.to_string()),
                Err(_) => {}
            }
        }

        Ok(valid)
    }
}
