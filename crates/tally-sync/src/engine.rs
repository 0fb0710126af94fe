use tracing::{debug, info, warn};

use tally_chain::Chain;

use crate::node::Node;
use crate::transport::PeerTransport;
use crate::SyncResult;

/// Drives reconciliation and registration gossip over a [`PeerTransport`].
pub struct SyncEngine<T: PeerTransport> {
    transport: T,
}

impl<T: PeerTransport> SyncEngine<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Replace the local chain with the tallest valid peer chain, if any.
    ///
    /// Every peer's height is queried; unreachable peers are skipped. The
    /// tallest peer strictly taller than the local chain wins, ties broken
    /// to the lexicographically smallest address (the registry iterates in
    /// sorted order and the comparison is strict). The candidate must be
    /// length-consistent and pass full validation before the swap, which
    /// happens under the chain lock with a height re-check so a block
    /// sealed during the fetch is never silently discarded.
    ///
    /// Returns `true` iff the local chain was replaced. Every rejection
    /// path is a logged no-op.
    pub async fn sync_self(&self, node: &Node) -> bool {
        let local_height = node.chain().height();

        let mut best: Option<(String, usize)> = None;
        for peer in node.peers() {
            match self.transport.fetch_status(&peer).await {
                Ok(status) if status.block_height > local_height => {
                    if best
                        .as_ref()
                        .map_or(true, |(_, height)| status.block_height > *height)
                    {
                        best = Some((peer, status.block_height));
                    }
                }
                Ok(_) => {}
                Err(err) => warn!(peer = %peer, error = %err, "peer unavailable, skipping"),
            }
        }
        let Some((peer, peer_height)) = best else {
            debug!(local_height, "no taller peer");
            return false;
        };
        debug!(peer = %peer, height = peer_height, "taller peer selected");

        let full = match self.transport.fetch_full_chain(&peer).await {
            Ok(full) => full,
            Err(err) => {
                warn!(peer = %peer, error = %err, "full-chain fetch failed");
                return false;
            }
        };
        if full.block_height <= local_height
            || full.block_height != full.block_headers.len()
            || full.block_headers.len() != full.transactions.len()
        {
            warn!(peer = %peer, "inconsistent full-chain response");
            return false;
        }
        if let Err(err) = Chain::check_chain(&full.block_headers, &full.transactions) {
            warn!(peer = %peer, error = %err, "candidate chain failed validation");
            return false;
        }

        let mut chain = node.chain();
        if full.block_height <= chain.height() {
            debug!(peer = %peer, "local chain grew past candidate during fetch");
            return false;
        }
        info!(peer = %peer, height = full.block_height, "replacing local chain");
        chain.replace(full.block_headers, full.transactions);
        true
    }

    /// Sync this node, then optionally ask every peer to sync itself.
    ///
    /// Propagated requests are non-propagating, so one sync never cascades.
    pub async fn sync(&self, node: &Node, propagate: bool) -> bool {
        let replaced = self.sync_self(node).await;
        if propagate {
            for peer in node.peers() {
                debug!(peer = %peer, "asking peer to sync");
                if let Err(err) = self.transport.request_sync(&peer).await {
                    warn!(peer = %peer, error = %err, "sync propagation failed");
                }
            }
        }
        replaced
    }

    /// Register a new peer, optionally gossiping the registry.
    ///
    /// Gossip is full-mesh: every known peer learns about every other
    /// (non-propagating), then the newcomer is asked to register this node
    /// back. Self-registration and duplicates are silent no-ops.
    pub async fn register_peer(
        &self,
        node: &Node,
        new_peer: &str,
        propagate: bool,
    ) -> SyncResult<()> {
        if !node.add_peer(new_peer) {
            return Ok(());
        }
        info!(peer = %new_peer, "peer registered");
        if propagate {
            let peers = node.peers();
            for target in &peers {
                for subject in &peers {
                    if subject != target {
                        if let Err(err) =
                            self.transport.register_node(target, subject, false).await
                        {
                            warn!(peer = %target, error = %err, "registration gossip failed");
                        }
                    }
                }
            }
            self.transport
                .register_node(new_peer, node.addr(), true)
                .await?;
        }
        Ok(())
    }
}
