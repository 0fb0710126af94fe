//! Peer reconciliation for the Tally ledger.
//!
//! A node discovers every peer's chain height, fetches the tallest
//! strictly-taller peer's full history, validates it end to end with the
//! chain's own validator, and only then swaps local state — the
//! longest-valid-chain rule. Peer failures are recovered per peer and
//! never abort reconciliation as a whole.

pub mod engine;
pub mod error;
pub mod http;
pub mod node;
pub mod transport;
pub mod types;

pub use engine::SyncEngine;
pub use error::{SyncError, SyncResult};
pub use http::HttpTransport;
pub use node::Node;
pub use transport::PeerTransport;
pub use types::{FullChainResponse, RegisterRequest, StatusResponse};
