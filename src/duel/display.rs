//! Text and image references shown for rounds and the board.

use crate::round::{DieFace, Outcome, RoundResult};

/// Title shown before the first roll and after a reset. The page has no
/// outcome to show yet, so it prompts the player to reload and roll.
pub const DEFAULT_TITLE: &str = "Refresh Me";

/// Face both dice show before the first roll and after a reset.
pub const DEFAULT_FACE: u8 = DieFace::MAX;

pub fn outcome_title(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Player1Wins => "player 1 wins",
        Outcome::Player2Wins => "player 2 wins",
        Outcome::Draw => "it's a draw",
    }
}

pub fn die_image(face: u8) -> String {
    format!("images/dice{}.png", face)
}

/// One line of the results history; rounds are numbered from 1.
///
/// Widened to `u128` so a stored round at `u64::MAX` still gets a number.
pub fn history_line(round: &RoundResult) -> String {
    format!(
        "Round {}, Player1: {}, Player2: {}",
        u128::from(round.index) + 1,
        round.player1_value,
        round.player2_value
    )
}

pub fn history_label(has_rounds: bool) -> &'static str {
    if has_rounds {
        "Update results database with new values"
    } else {
        "Show results database"
    }
}
