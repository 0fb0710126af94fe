use std::collections::BTreeSet;
use std::sync::{Mutex, MutexGuard};

use tally_chain::Chain;

use crate::types::{FullChainResponse, StatusResponse};

/// One ledger node: the chain, the peer registry, and this node's own
/// advertised `host:port` address.
///
/// All chain mutation — transaction submission, block sealing, chain
/// replacement — serializes through the one mutex here. Network I/O never
/// runs under it; callers take snapshots, work off-lock, and re-acquire
/// only to swap.
pub struct Node {
    addr: String,
    chain: Mutex<Chain>,
    peers: Mutex<BTreeSet<String>>,
}

impl Node {
    pub fn new(addr: impl Into<String>, difficulty: u32) -> Self {
        Self {
            addr: addr.into(),
            chain: Mutex::new(Chain::new(difficulty)),
            peers: Mutex::new(BTreeSet::new()),
        }
    }

    /// This node's advertised `host:port` address.
    pub fn addr(&self) -> &str {
        &self.addr
    }

    /// Exclusive access to the chain. Never hold this across an await.
    pub fn chain(&self) -> MutexGuard<'_, Chain> {
        self.chain.lock().expect("chain lock poisoned")
    }

    /// Add a peer address. Returns `false` if the address is this node's
    /// own or is already registered.
    pub fn add_peer(&self, peer: &str) -> bool {
        if peer == self.addr {
            return false;
        }
        self.peers
            .lock()
            .expect("peer lock poisoned")
            .insert(peer.to_string())
    }

    /// Snapshot of known peers, in lexicographic order.
    pub fn peers(&self) -> Vec<String> {
        self.peers
            .lock()
            .expect("peer lock poisoned")
            .iter()
            .cloned()
            .collect()
    }

    /// Snapshot for the `/status` wire shape.
    pub fn status(&self) -> StatusResponse {
        let chain = self.chain();
        StatusResponse {
            block_height: chain.height(),
            block_headers: chain.headers().to_vec(),
            pending_transactions: chain.pending().to_vec(),
            nodes: self.peers(),
        }
    }

    /// Snapshot for the `/fullnode` wire shape.
    pub fn full_chain(&self) -> FullChainResponse {
        let chain = self.chain();
        FullChainResponse {
            block_height: chain.height(),
            block_headers: chain.headers().to_vec(),
            transactions: chain.batches().to_vec(),
            nodes: self.peers(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_peer_skips_self() {
        let node = Node::new("127.0.0.1:9000", 1);
        assert!(!node.add_peer("127.0.0.1:9000"));
        assert!(node.peers().is_empty());
    }

    #[test]
    fn add_peer_skips_duplicates() {
        let node = Node::new("127.0.0.1:9000", 1);
        assert!(node.add_peer("127.0.0.1:9001"));
        assert!(!node.add_peer("127.0.0.1:9001"));
        assert_eq!(node.peers().len(), 1);
    }

    #[test]
    fn peers_iterate_in_lexicographic_order() {
        let node = Node::new("self:0", 1);
        node.add_peer("c:3");
        node.add_peer("a:1");
        node.add_peer("b:2");
        assert_eq!(node.peers(), vec!["a:1", "b:2", "c:3"]);
    }

    #[test]
    fn status_snapshot_reflects_chain() {
        let node = Node::new("self:0", 1);
        node.chain().transfer("alice", "bob", 3);
        let status = node.status();
        assert_eq!(status.block_height, 1);
        assert_eq!(status.block_headers.len(), 1);
        assert_eq!(status.pending_transactions.len(), 1);
    }

    #[test]
    fn full_chain_snapshot_is_length_consistent() {
        let node = Node::new("self:0", 1);
        let full = node.full_chain();
        assert_eq!(full.block_height, full.block_headers.len());
        assert_eq!(full.block_headers.len(), full.transactions.len());
    }
}
