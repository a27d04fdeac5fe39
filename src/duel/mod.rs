// Public API - what other modules can use
pub use handlers::{get_stats, list_rounds, play_round, reset_game};
pub use service::DuelService;
pub use types::{BoardView, HistoryResponse, PlayResponse, RoundView};

// Internal modules
pub mod display;
mod handlers;
mod service;
mod types;

use axum::{
    routing::{get, post},
    Router,
};

use crate::shared::AppState;

/// Game routes, without middleware layers
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(|| async { "Dice Duel" }))
        .route(
            "/rounds",
            post(play_round).get(list_rounds).delete(reset_game),
        )
        .route("/stats", get(get_stats))
}
