//! HTTP surface for a Tally ledger node.
//!
//! Exposes mining, transaction submission, status/full-chain inspection,
//! reconciliation, and peer registration over axum. Consensus lives in
//! `tally-chain` and `tally-sync`; this crate only shuttles their state
//! across the wire.

pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use router::build_router;
pub use server::{AppState, TallyServer};
