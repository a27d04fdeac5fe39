use serde::{Deserialize, Serialize};

use super::display;
use crate::round::{Outcome, RoundResult, Stats};

/// One round as presented to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundView {
    pub index: u64,
    pub player1_value: u8,
    pub player2_value: u8,
    pub outcome: Outcome,
    pub line: String,
}

impl From<&RoundResult> for RoundView {
    fn from(round: &RoundResult) -> Self {
        Self {
            index: round.index,
            player1_value: round.player1_value.value(),
            player2_value: round.player2_value.value(),
            outcome: round.outcome(),
            line: display::history_line(round),
        }
    }
}

/// Title and dice images currently on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardView {
    pub title: String,
    pub player1_image: String,
    pub player2_image: String,
}

impl BoardView {
    pub fn initial() -> Self {
        Self {
            title: display::DEFAULT_TITLE.to_string(),
            player1_image: display::die_image(display::DEFAULT_FACE),
            player2_image: display::die_image(display::DEFAULT_FACE),
        }
    }

    pub fn for_round(round: &RoundResult) -> Self {
        Self {
            title: display::outcome_title(round.outcome()).to_string(),
            player1_image: display::die_image(round.player1_value.value()),
            player2_image: display::die_image(round.player2_value.value()),
        }
    }
}

/// Response for POST /rounds
#[derive(Debug, Serialize, Deserialize)]
pub struct PlayResponse {
    pub round: RoundView,
    pub board: BoardView,
    pub stats: Stats,
}

/// Response for GET /rounds
#[derive(Debug, Serialize, Deserialize)]
pub struct HistoryResponse {
    pub rounds: Vec<RoundView>,
    pub stats: Stats,
    pub label: String,
}

impl HistoryResponse {
    pub fn new(rounds: &[RoundResult], stats: Stats) -> Self {
        Self {
            rounds: rounds.iter().map(RoundView::from).collect(),
            stats,
            label: display::history_label(!rounds.is_empty()).to_string(),
        }
    }
}
