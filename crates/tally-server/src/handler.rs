use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};

use tally_sync::{FullChainResponse, RegisterRequest, StatusResponse};
use tally_types::{BlockHeader, Transaction};

use crate::error::{ServerError, ServerResult};
use crate::server::AppState;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MineResponse {
    pub block_height: usize,
    pub block: BlockHeader,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TransferRequest {
    pub sender: String,
    pub receiver: String,
    pub amount: u64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SyncQuery {
    pub propagate: Option<bool>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SyncResponse {
    pub replaced: bool,
}

/// Seal the pending pool into a new block.
///
/// The nonce search runs on the blocking pool so it never stalls the
/// reactor; a configured seal timeout surfaces as `503`.
pub async fn mine_handler(
    State(state): State<AppState>,
) -> ServerResult<Json<MineResponse>> {
    let node = state.node.clone();
    let limits = state.seal_limits.clone();
    let block = tokio::task::spawn_blocking(move || node.chain().create_block(&limits))
        .await
        .map_err(|e| ServerError::Internal(e.to_string()))??;
    Ok(Json(MineResponse {
        block_height: block.height as usize + 1,
        block,
    }))
}

/// Record a transfer in the pending pool.
pub async fn transactions_handler(
    State(state): State<AppState>,
    Json(request): Json<TransferRequest>,
) -> (StatusCode, Json<Transaction>) {
    let txn = state
        .node
        .chain()
        .transfer(request.sender, request.receiver, request.amount);
    (StatusCode::CREATED, Json(txn))
}

pub async fn status_handler(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(state.node.status())
}

pub async fn fullnode_handler(State(state): State<AppState>) -> Json<FullChainResponse> {
    Json(state.node.full_chain())
}

/// Reconcile with peers; propagation defaults on, and propagated requests
/// arrive with `propagate=false` so a sync never cascades.
pub async fn sync_handler(
    State(state): State<AppState>,
    Query(query): Query<SyncQuery>,
) -> Json<SyncResponse> {
    let replaced = state
        .engine
        .sync(&state.node, query.propagate.unwrap_or(true))
        .await;
    Json(SyncResponse { replaced })
}

pub async fn register_handler(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> ServerResult<StatusCode> {
    state
        .engine
        .register_peer(&state.node, &request.node, request.propagate)
        .await?;
    Ok(StatusCode::OK)
}
