use thiserror::Error;

/// Errors from peer I/O.
///
/// All of these are recovered locally by the sync engine: an unreachable
/// or malformed peer is skipped, never fatal to reconciliation.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("peer unreachable: {peer}")]
    PeerUnreachable { peer: String },

    #[error("peer timed out: {peer}")]
    PeerTimeout { peer: String },

    #[error("malformed response from {peer}: {detail}")]
    MalformedResponse { peer: String, detail: String },

    #[error("transport error: {0}")]
    Transport(String),
}

pub type SyncResult<T> = Result<T, SyncError>;
