use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use thiserror::Error;

use tally_chain::ChainError;
use tally_sync::SyncError;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("chain error: {0}")]
    Chain(#[from] ChainError),

    #[error("sync error: {0}")]
    Sync(#[from] SyncError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServerResult<T> = Result<T, ServerError>;

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = match &self {
            ServerError::Chain(ChainError::SealTimeout { .. })
            | ServerError::Chain(ChainError::SealCancelled) => StatusCode::SERVICE_UNAVAILABLE,
            ServerError::Chain(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ServerError::Sync(_) => StatusCode::BAD_GATEWAY,
            ServerError::Config(_) => StatusCode::BAD_REQUEST,
            ServerError::Io(_) | ServerError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}
