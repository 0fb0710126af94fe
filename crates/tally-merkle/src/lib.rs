//! Binary hash-tree commitment for the Tally ledger.
//!
//! A tree is built bottom-up from the batch's leaf digests, halving the
//! layer by pairing adjacent digests until one remains. The three
//! [`OddLayerPolicy`] variants differ only in how an odd-length layer is
//! handled, which changes both the root and the structural cost of the
//! tree. Only digests are retained during construction — there is no node
//! graph, since nothing below the root is inspected after the build.

pub mod tree;

pub use tree::{hash_pair, OddLayerPolicy, TreeSummary};
