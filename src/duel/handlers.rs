use axum::{extract::State, Json};
use std::sync::Arc;
use tracing::{error, info, instrument};

use super::service::DuelService;
use super::types::{BoardView, HistoryResponse, PlayResponse, RoundView};
use crate::round::Stats;
use crate::shared::{AppError, AppState};

/// Runs a duel operation on the blocking pool. Store access does file IO
/// under a mutex and must not stall the async workers.
async fn run_blocking<T, F>(state: &AppState, op: F) -> Result<T, AppError>
where
    T: Send + 'static,
    F: FnOnce(&DuelService) -> Result<T, AppError> + Send + 'static,
{
    let duel: Arc<DuelService> = state.duel.clone();
    tokio::task::spawn_blocking(move || op(&duel))
        .await
        .map_err(|err| {
            error!(?err, "Blocking duel task failed");
            AppError::Internal
        })?
}

/// HTTP handler for playing a round
///
/// POST /rounds
/// Rolls both dice, persists the round and returns it with the updated board
#[instrument(name = "play_round", skip(state))]
pub async fn play_round(State(state): State<AppState>) -> Result<Json<PlayResponse>, AppError> {
    let (round, stats) = run_blocking(&state, DuelService::play_round).await?;

    Ok(Json(PlayResponse {
        round: RoundView::from(&round),
        board: BoardView::for_round(&round),
        stats,
    }))
}

/// HTTP handler for the results history
///
/// GET /rounds
/// Returns every stored round in play order with stats over them
#[instrument(name = "list_rounds", skip(state))]
pub async fn list_rounds(
    State(state): State<AppState>,
) -> Result<Json<HistoryResponse>, AppError> {
    let (rounds, stats) = run_blocking(&state, DuelService::history).await?;

    info!(round_count = rounds.len(), "Rounds listed successfully");

    Ok(Json(HistoryResponse::new(&rounds, stats)))
}

/// GET /stats
#[instrument(name = "get_stats", skip(state))]
pub async fn get_stats(State(state): State<AppState>) -> Result<Json<Stats>, AppError> {
    let (_, stats) = run_blocking(&state, DuelService::history).await?;
    Ok(Json(stats))
}

/// HTTP handler for resetting the game
///
/// DELETE /rounds
/// Clears the persisted log and returns the default board
#[instrument(name = "reset_game", skip(state))]
pub async fn reset_game(State(state): State<AppState>) -> Result<Json<BoardView>, AppError> {
    run_blocking(&state, DuelService::reset).await?;
    Ok(Json(BoardView::initial()))
}
