use axum::routing::{get, post};
use axum::Router;

use crate::handler;
use crate::server::AppState;

/// Build the axum router with all node endpoints.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/mine", get(handler::mine_handler))
        .route("/transactions", post(handler::transactions_handler))
        .route("/status", get(handler::status_handler))
        .route("/fullnode", get(handler::fullnode_handler))
        .route("/sync", get(handler::sync_handler))
        .route("/register_node", post(handler::register_handler))
        .with_state(state)
}
