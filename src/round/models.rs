use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::EnumIter;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Die face must be between {min} and {max}, got {0}", min = DieFace::MIN, max = DieFace::MAX)]
pub struct DieFaceError(pub i64);

/// A single die value, always within 1..=6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct DieFace(u8);

impl DieFace {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 6;

    /// Every face in ascending order.
    pub const ALL: [DieFace; 6] = [
        DieFace(1),
        DieFace(2),
        DieFace(3),
        DieFace(4),
        DieFace(5),
        DieFace(6),
    ];

    pub fn new(value: u8) -> Result<Self, DieFaceError> {
        Self::try_from(i64::from(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for DieFace {
    type Error = DieFaceError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            Ok(DieFace(value as u8))
        } else {
            Err(DieFaceError(value))
        }
    }
}

impl From<DieFace> for u8 {
    fn from(face: DieFace) -> Self {
        face.0
    }
}

impl fmt::Display for DieFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Player1Wins,
    Player2Wins,
    Draw,
}

impl Outcome {
    pub fn classify(player1: DieFace, player2: DieFace) -> Self {
        match player1.cmp(&player2) {
            std::cmp::Ordering::Greater => Outcome::Player1Wins,
            std::cmp::Ordering::Less => Outcome::Player2Wins,
            std::cmp::Ordering::Equal => Outcome::Draw,
        }
    }
}

/// One resolved round. The outcome is derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub index: u64,
    pub player1_value: DieFace,
    pub player2_value: DieFace,
}

impl RoundResult {
    pub fn new(index: u64, player1_value: DieFace, player2_value: DieFace) -> Self {
        Self {
            index,
            player1_value,
            player2_value,
        }
    }

    pub fn outcome(&self) -> Outcome {
        Outcome::classify(self.player1_value, self.player2_value)
    }
}

/// Aggregate counts over a round sequence.
///
/// Only ever built from the sequence itself (`Stats::from_rounds`), so the
/// counters cannot drift from the log they describe.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub rounds: u64,
    pub player1_wins: u64,
    pub player2_wins: u64,
    pub draws: u64,
}

impl Stats {
    pub fn from_rounds(rounds: &[RoundResult]) -> Self {
        rounds.iter().fold(Stats::default(), |mut stats, round| {
            stats.rounds += 1;
            match round.outcome() {
                Outcome::Player1Wins => stats.player1_wins += 1,
                Outcome::Player2Wins => stats.player2_wins += 1,
                Outcome::Draw => stats.draws += 1,
            }
            stats
        })
    }

    pub fn count(&self, outcome: Outcome) -> u64 {
        match outcome {
            Outcome::Player1Wins => self.player1_wins,
            Outcome::Player2Wins => self.player2_wins,
            Outcome::Draw => self.draws,
        }
    }
}
