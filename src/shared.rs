use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;

use crate::duel::DuelService;
use crate::round_log::RoundLogError;
use crate::storage::StorageError;

/// Shared application state containing all dependencies
#[derive(Clone)]
pub struct AppState {
    pub duel: Arc<DuelService>,
}

impl AppState {
    pub fn new(duel: Arc<DuelService>) -> Self {
        Self { duel }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Round log invariant violated: {0}")]
    Invariant(String),

    #[error("Internal server error")]
    Internal,
}

impl From<RoundLogError> for AppError {
    fn from(err: RoundLogError) -> Self {
        match err {
            RoundLogError::Storage(err) => AppError::Storage(err),
            err @ RoundLogError::IndexCollision { .. } => AppError::Invariant(err.to_string()),
            RoundLogError::Encode(_) => AppError::Internal,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Storage(err) => (
                StatusCode::SERVICE_UNAVAILABLE,
                format!("Storage error: {}", err),
            ),
            AppError::Invariant(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            AppError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        let body = Json(json!({
            "error": error_message
        }));

        (status, body).into_response()
    }
}
