use serde::{Deserialize, Serialize};

use crate::canonical::Canonical;

/// A balance transfer between two parties.
///
/// Immutable once created. Owned by the chain's pending pool until sealed
/// into a block, then by that block's transaction batch permanently.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub sender: String,
    pub receiver: String,
    pub amount: u64,
}

impl Transaction {
    pub fn new(sender: impl Into<String>, receiver: impl Into<String>, amount: u64) -> Self {
        Self {
            sender: sender.into(),
            receiver: receiver.into(),
            amount,
        }
    }
}

impl Canonical for Transaction {
    fn canonical_bytes(&self) -> Vec<u8> {
        // Keys in lexicographic order.
        serde_json::json!({
            "amount": self.amount,
            "receiver": self.receiver,
            "sender": self.sender,
        })
        .to_string()
        .into_bytes()
    }
}
