use async_trait::async_trait;

use crate::error::SyncResult;
use crate::types::{FullChainResponse, StatusResponse};

/// Transport interface to remote peers.
///
/// Peers are identified by an opaque `host:port` string. Implementations
/// are expected to bound every call with a timeout so a stalled peer
/// surfaces as [`SyncError::PeerTimeout`](crate::SyncError::PeerTimeout)
/// instead of wedging reconciliation.
#[async_trait]
pub trait PeerTransport: Send + Sync {
    /// A peer's current status: height, headers, pending pool, known nodes.
    async fn fetch_status(&self, peer: &str) -> SyncResult<StatusResponse>;

    /// A peer's complete header and transaction history.
    async fn fetch_full_chain(&self, peer: &str) -> SyncResult<FullChainResponse>;

    /// Ask a peer to run its own non-propagating sync.
    async fn request_sync(&self, peer: &str) -> SyncResult<()>;

    /// Register `node` in `peer`'s registry.
    async fn register_node(&self, peer: &str, node: &str, propagate: bool) -> SyncResult<()>;
}
