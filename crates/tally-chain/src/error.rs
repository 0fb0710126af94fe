use std::time::Duration;

use thiserror::Error;

/// Errors from sealing and chain validation.
///
/// Validation errors carry the height of the first offending block.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChainError {
    #[error("proof-of-work search timed out after {elapsed:?} at difficulty {difficulty}")]
    SealTimeout { difficulty: u32, elapsed: Duration },

    #[error("proof-of-work search cancelled")]
    SealCancelled,

    #[error("header/batch length mismatch: {headers} headers, {batches} batches")]
    LengthMismatch { headers: usize, batches: usize },

    #[error("chain has no blocks")]
    Empty,

    #[error("broken previous-hash link at height {height}")]
    BrokenLink { height: usize },

    #[error("transaction root mismatch at height {height}")]
    RootMismatch { height: usize },

    #[error("invalid proof of work at height {height}")]
    InvalidProof { height: usize },
}

pub type ChainResult<T> = Result<T, ChainError>;
