use serde::{Deserialize, Serialize};

use crate::canonical::{object_hash, Canonical};
use crate::digest::Digest;

/// Header of one sealed block.
///
/// `height` is the zero-based index of the block in the chain. Height 0 is
/// the genesis header, whose `previous_hash` and `transaction_root` are the
/// empty sentinel. Only `nonce` is mutated, and only during the
/// proof-of-work search; a header is immutable once sealed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockHeader {
    pub height: u64,
    pub previous_hash: Digest,
    pub transaction_root: Digest,
    pub difficulty: u32,
    pub nonce: u64,
}

impl BlockHeader {
    /// A new unsealed header with `nonce = 0`.
    pub fn new(
        height: u64,
        previous_hash: Digest,
        transaction_root: Digest,
        difficulty: u32,
    ) -> Self {
        Self {
            height,
            previous_hash,
            transaction_root,
            difficulty,
            nonce: 0,
        }
    }

    /// The unsealed genesis header.
    pub fn genesis(difficulty: u32) -> Self {
        Self::new(0, Digest::empty(), Digest::empty(), difficulty)
    }

    /// Digest of this header's canonical form.
    pub fn hash(&self) -> Digest {
        object_hash(self)
    }
}

impl Canonical for BlockHeader {
    fn canonical_bytes(&self) -> Vec<u8> {
        // Keys in lexicographic order.
        serde_json::json!({
            "difficulty": self.difficulty,
            "height": self.height,
            "nonce": self.nonce,
            "previous_hash": self.previous_hash.as_str(),
            "transaction_root": self.transaction_root.as_str(),
        })
        .to_string()
        .into_bytes()
    }
}
