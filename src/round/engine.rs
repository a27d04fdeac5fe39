use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Arc, Mutex};
use tracing::debug;

use super::models::{DieFace, RoundResult};

/// Source of uniformly distributed die faces.
pub trait DiceRoller: Send + Sync {
    fn roll(&self) -> DieFace;
}

fn face_from_rng<R: Rng>(rng: &mut R) -> DieFace {
    DieFace::ALL[rng.random_range(0..DieFace::ALL.len())]
}

/// Rolls with the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngRoller;

impl DiceRoller for ThreadRngRoller {
    fn roll(&self) -> DieFace {
        face_from_rng(&mut rand::rng())
    }
}

/// Deterministic roller for reproducible sessions.
#[derive(Debug)]
pub struct SeededRoller {
    rng: Mutex<StdRng>,
}

impl SeededRoller {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl DiceRoller for SeededRoller {
    fn roll(&self) -> DieFace {
        match self.rng.lock() {
            Ok(mut rng) => face_from_rng(&mut *rng),
            // A panic mid-draw leaves the generator usable
            Err(poisoned) => face_from_rng(&mut *poisoned.into_inner()),
        }
    }
}

/// Produces the two faces of a round. Index assignment belongs to the
/// round log, so the engine never tracks how many rounds were played.
#[derive(Clone)]
pub struct RoundEngine {
    roller: Arc<dyn DiceRoller>,
}

impl Default for RoundEngine {
    fn default() -> Self {
        Self::new(Arc::new(ThreadRngRoller))
    }
}

impl RoundEngine {
    pub fn new(roller: Arc<dyn DiceRoller>) -> Self {
        Self { roller }
    }

    /// Draws both players' faces independently.
    pub fn roll(&self) -> (DieFace, DieFace) {
        let player1 = self.roller.roll();
        let player2 = self.roller.roll();
        debug!(%player1, %player2, "Rolled dice");
        (player1, player2)
    }

    pub fn roll_round(&self, index: u64) -> RoundResult {
        let (player1, player2) = self.roll();
        RoundResult::new(index, player1, player2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn thread_rng_roller_stays_in_range_and_covers_all_faces() {
        let roller = ThreadRngRoller;
        let seen: HashSet<u8> = (0..2_000).map(|_| roller.roll().value()).collect();

        assert_eq!(seen, (1..=6).collect::<HashSet<u8>>());
    }

    #[test]
    fn face_from_rng_draws_every_face() {
        let mut rng = StdRng::seed_from_u64(3);
        let seen: HashSet<DieFace> = (0..600).map(|_| face_from_rng(&mut rng)).collect();

        assert_eq!(seen, DieFace::ALL.into_iter().collect::<HashSet<DieFace>>());
    }

    #[test]
    fn seeded_rollers_repeat_the_same_sequence() {
        let a = SeededRoller::new(42);
        let b = SeededRoller::new(42);

        let first: Vec<DieFace> = (0..50).map(|_| a.roll()).collect();
        let second: Vec<DieFace> = (0..50).map(|_| b.roll()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn roll_round_keeps_caller_index() {
        let engine = RoundEngine::new(Arc::new(SeededRoller::new(7)));
        let round = engine.roll_round(12);

        assert_eq!(round.index, 12);
        assert!((1..=6).contains(&round.player1_value.value()));
        assert!((1..=6).contains(&round.player2_value.value()));
    }
}
