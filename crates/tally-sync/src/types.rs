use serde::{Deserialize, Serialize};

use tally_types::{BlockHeader, Transaction};

/// A peer's `/status` response: enough to compare heights.
///
/// `block_height` is the block count, one more than the latest header's
/// zero-based `height` field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub block_height: usize,
    pub block_headers: Vec<BlockHeader>,
    pub pending_transactions: Vec<Transaction>,
    pub nodes: Vec<String>,
}

/// A peer's `/fullnode` response: the complete header and transaction
/// history needed to validate and adopt its chain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FullChainResponse {
    pub block_height: usize,
    pub block_headers: Vec<BlockHeader>,
    pub transactions: Vec<Vec<Transaction>>,
    pub nodes: Vec<String>,
}

/// Body of a `/register_node` request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub node: String,
    pub propagate: bool,
}
