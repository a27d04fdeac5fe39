use serde::{Deserialize, Serialize};

use crate::round::{DieFace, RoundResult};

/// Payload stored under each round key: `{"P1": 3, "P2": 5}`.
///
/// Older writers used the long field names, so both spellings decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    #[serde(rename = "P1", alias = "player1Value")]
    pub player1: DieFace,
    #[serde(rename = "P2", alias = "player2Value")]
    pub player2: DieFace,
}

impl RoundRecord {
    pub fn new(player1: DieFace, player2: DieFace) -> Self {
        Self { player1, player2 }
    }

    pub fn decode(payload: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(payload)
    }

    pub fn encode(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn into_round(self, index: u64) -> RoundResult {
        RoundResult::new(index, self.player1, self.player2)
    }
}
