//! Block chain state for the Tally ledger.
//!
//! [`Chain`] owns the sealed block headers, the per-block transaction
//! batches, and the pending pool of not-yet-sealed transactions. Blocks are
//! sealed by a leading-zero proof-of-work search bounded by [`SealLimits`],
//! and whole chains are validated link by link before a reconciliation swap
//! is allowed to replace local state.

pub mod chain;
pub mod error;
pub mod seal;

pub use chain::Chain;
pub use error::{ChainError, ChainResult};
pub use seal::SealLimits;
