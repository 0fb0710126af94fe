//! Foundation types for the Tally ledger.
//!
//! This crate provides the value types shared by every other Tally crate.
//!
//! # Key Types
//!
//! - [`Digest`] — Hex-encoded 256-bit content digest with an empty sentinel
//! - [`Transaction`] — A balance transfer between two parties
//! - [`BlockHeader`] — A sealed block's header, linked by previous-hash
//! - [`Canonical`] — Canonical byte serialization for hashing
//! - [`object_hash`] — Digest of a value's canonical bytes

pub mod canonical;
pub mod digest;
pub mod error;
pub mod header;
pub mod transaction;

pub use canonical::{object_hash, Canonical};
pub use digest::Digest;
pub use error::TypeError;
pub use header::BlockHeader;
pub use transaction::Transaction;
