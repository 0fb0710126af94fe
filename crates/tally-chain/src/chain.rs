use std::sync::atomic::Ordering;
use std::time::Instant;

use tracing::debug;

use tally_merkle::OddLayerPolicy;
use tally_types::{BlockHeader, Transaction};

use crate::error::{ChainError, ChainResult};
use crate::seal::SealLimits;

/// How many nonces to try between wall-clock timeout checks.
const TIMEOUT_CHECK_INTERVAL: u64 = 1024;

/// The ledger: sealed block headers, their transaction batches, and the
/// pending pool.
///
/// `headers` and `batches` are parallel sequences of equal length; entries
/// are appended only, never mutated or removed. A reconciliation swap
/// replaces both sequences wholesale via [`Chain::replace`], never
/// element-wise. Commitment roots use the [`OddLayerPolicy::Promote`] tree.
#[derive(Clone, Debug)]
pub struct Chain {
    headers: Vec<BlockHeader>,
    batches: Vec<Vec<Transaction>>,
    pending: Vec<Transaction>,
    difficulty: u32,
}

impl Chain {
    /// Create a chain holding a freshly mined genesis block.
    ///
    /// The genesis search runs unbounded; difficulty comes from local
    /// configuration, not from peers, so termination is in the operator's
    /// hands.
    pub fn new(difficulty: u32) -> Self {
        let mut genesis = BlockHeader::genesis(difficulty);
        while !Self::proof_of_work(&genesis) {
            genesis.nonce += 1;
        }
        debug!(nonce = genesis.nonce, difficulty, "genesis sealed");
        Self {
            headers: vec![genesis],
            batches: vec![Vec::new()],
            pending: Vec::new(),
            difficulty,
        }
    }

    /// Record a transfer in the pending pool and return it.
    pub fn transfer(
        &mut self,
        sender: impl Into<String>,
        receiver: impl Into<String>,
        amount: u64,
    ) -> Transaction {
        let txn = Transaction::new(sender, receiver, amount);
        self.pending.push(txn.clone());
        txn
    }

    /// Seal the pending pool into a new block and append it.
    ///
    /// The commitment root is computed over the pool as it stands at entry;
    /// the pool is cleared atomically with the append, under the same
    /// mutable borrow. On timeout or cancellation nothing is mutated: the
    /// pool keeps its transactions and the chain keeps its height.
    pub fn create_block(&mut self, limits: &SealLimits) -> ChainResult<BlockHeader> {
        let transaction_root = OddLayerPolicy::Promote.build(&self.pending).root;
        let latest = self.latest();
        let mut header = BlockHeader::new(
            latest.height + 1,
            latest.hash(),
            transaction_root,
            self.difficulty,
        );
        Self::mine(&mut header, limits)?;
        debug!(
            height = header.height,
            nonce = header.nonce,
            transactions = self.pending.len(),
            "block sealed"
        );
        self.headers.push(header.clone());
        self.batches.push(std::mem::take(&mut self.pending));
        Ok(header)
    }

    /// True iff the first `difficulty` hex digits of the header's digest
    /// are zero.
    pub fn proof_of_work(header: &BlockHeader) -> bool {
        header.hash().has_leading_zeros(header.difficulty as usize)
    }

    fn mine(header: &mut BlockHeader, limits: &SealLimits) -> ChainResult<()> {
        let started = Instant::now();
        loop {
            if let Some(cancel) = &limits.cancel {
                if cancel.load(Ordering::Relaxed) {
                    return Err(ChainError::SealCancelled);
                }
            }
            if let Some(timeout) = limits.timeout {
                if header.nonce % TIMEOUT_CHECK_INTERVAL == 0 && started.elapsed() >= timeout {
                    return Err(ChainError::SealTimeout {
                        difficulty: header.difficulty,
                        elapsed: started.elapsed(),
                    });
                }
            }
            if Self::proof_of_work(header) {
                return Ok(());
            }
            header.nonce += 1;
        }
    }

    /// Validate a candidate chain, reporting the first violation.
    ///
    /// A genesis-only chain is valid unconditionally. Longer chains must
    /// link each header to the digest of its predecessor, commit each
    /// batch through the Promote-policy root, and carry a valid proof of
    /// work on every header.
    pub fn check_chain(
        headers: &[BlockHeader],
        batches: &[Vec<Transaction>],
    ) -> ChainResult<()> {
        if headers.len() != batches.len() {
            return Err(ChainError::LengthMismatch {
                headers: headers.len(),
                batches: batches.len(),
            });
        }
        if headers.is_empty() {
            return Err(ChainError::Empty);
        }
        if headers.len() == 1 {
            return Ok(());
        }

        for (i, header) in headers.iter().enumerate() {
            if i > 0 && header.previous_hash != headers[i - 1].hash() {
                return Err(ChainError::BrokenLink { height: i });
            }
            if header.transaction_root != OddLayerPolicy::Promote.build(&batches[i]).root {
                return Err(ChainError::RootMismatch { height: i });
            }
            if !Self::proof_of_work(header) {
                return Err(ChainError::InvalidProof { height: i });
            }
        }
        Ok(())
    }

    /// Bool surface over [`Chain::check_chain`].
    pub fn verify_chain(headers: &[BlockHeader], batches: &[Vec<Transaction>]) -> bool {
        Self::check_chain(headers, batches).is_ok()
    }

    /// Swap in a replacement chain wholesale.
    ///
    /// The caller has already validated the candidate with
    /// [`Chain::check_chain`]. Pending transactions survive the swap.
    pub fn replace(&mut self, headers: Vec<BlockHeader>, batches: Vec<Vec<Transaction>>) {
        self.headers = headers;
        self.batches = batches;
    }

    /// Number of sealed blocks.
    pub fn height(&self) -> usize {
        self.headers.len()
    }

    /// The most recently sealed header.
    pub fn latest(&self) -> &BlockHeader {
        self.headers.last().expect("chain always holds genesis")
    }

    pub fn headers(&self) -> &[BlockHeader] {
        &self.headers
    }

    pub fn batches(&self) -> &[Vec<Transaction>] {
        &self.batches
    }

    pub fn pending(&self) -> &[Transaction] {
        &self.pending
    }

    pub fn difficulty(&self) -> u32 {
        self.difficulty
    }
}
