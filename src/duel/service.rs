use std::sync::Mutex;
use tracing::{error, info, instrument};

use crate::{
    round::{RoundEngine, RoundResult, Stats},
    round_log::RoundLog,
    shared::AppError,
};

/// Plays rounds against the persisted log.
///
/// Every operation holds the log lock for its whole duration, so index
/// assignment in `play_round` never interleaves with another write.
pub struct DuelService {
    engine: RoundEngine,
    log: Mutex<RoundLog>,
}

impl DuelService {
    pub fn new(engine: RoundEngine, log: RoundLog) -> Self {
        Self {
            engine,
            log: Mutex::new(log),
        }
    }

    /// Rolls both dice, appends the round and returns it with the stats of
    /// the log as it now stands.
    #[instrument(skip(self))]
    pub fn play_round(&self) -> Result<(RoundResult, Stats), AppError> {
        let log = self.log.lock().map_err(|_| AppError::Internal)?;

        let (player1, player2) = self.engine.roll();
        let round = log.append(player1, player2).map_err(|err| {
            error!(?err, "Failed to append round");
            AppError::from(err)
        })?;
        let (_, stats) = log.load_all()?;

        info!(
            index = round.index,
            outcome = ?round.outcome(),
            rounds = stats.rounds,
            "Round played"
        );

        Ok((round, stats))
    }

    #[instrument(skip(self))]
    pub fn history(&self) -> Result<(Vec<RoundResult>, Stats), AppError> {
        let log = self.log.lock().map_err(|_| AppError::Internal)?;
        Ok(log.load_all()?)
    }

    #[instrument(skip(self))]
    pub fn reset(&self) -> Result<(), AppError> {
        let log = self.log.lock().map_err(|_| AppError::Internal)?;
        log.clear()?;
        info!("Game reset");
        Ok(())
    }
}
