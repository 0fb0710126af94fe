use std::fmt;

use tally_types::{object_hash, Canonical, Digest};

/// How an odd-length layer is reduced during tree construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OddLayerPolicy {
    /// Carry the unpaired digest up to the next layer unchanged. No extra
    /// node, no extra hash; the tree is asymmetric.
    Promote,
    /// Append a copy of the last digest so every layer pairs fully. This is
    /// the scheme Bitcoin uses, and it carries Bitcoin's known ambiguity:
    /// a batch that explicitly duplicates its own last entry commits to
    /// the same root as the batch without the duplicate. That property is
    /// preserved here deliberately for compatibility testing.
    Duplicate,
    /// Append the empty sentinel digest so every layer pairs fully. The
    /// filler is distinguishable from any real leaf because the sentinel
    /// is never produced by the hash function. Libra's approach.
    Pad,
}

impl OddLayerPolicy {
    /// All policies, in a stable order.
    pub const ALL: [OddLayerPolicy; 3] = [Self::Promote, Self::Duplicate, Self::Pad];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Promote => "promote",
            Self::Duplicate => "duplicate",
            Self::Pad => "pad",
        }
    }

    /// Build the tree over every item in the batch.
    pub fn build<T: Canonical>(self, items: &[T]) -> TreeSummary {
        self.build_prefix(items, items.len())
    }

    /// Build the tree over the first `size` items of the batch.
    ///
    /// `size` is clamped to the batch length. An empty prefix yields the
    /// sentinel root; a single item yields that item's leaf digest with no
    /// internal hashing.
    pub fn build_prefix<T: Canonical>(self, items: &[T], size: usize) -> TreeSummary {
        let size = size.min(items.len());
        let mut layer: Vec<Digest> = items[..size].iter().map(|item| object_hash(item)).collect();
        let mut node_count = layer.len() as u64;
        let mut hash_count = layer.len() as u64;

        while layer.len() > 1 {
            if layer.len() % 2 == 1 {
                match self {
                    // The unpaired digest rides up after pairing.
                    Self::Promote => {}
                    Self::Duplicate => {
                        layer.push(layer[layer.len() - 1].clone());
                        node_count += 1;
                    }
                    Self::Pad => {
                        layer.push(Digest::empty());
                        node_count += 1;
                    }
                }
            }

            let pairs = layer.len() / 2;
            let mut up = Vec::with_capacity(pairs + 1);
            for i in 0..pairs {
                up.push(hash_pair(&layer[2 * i], &layer[2 * i + 1]));
            }
            if layer.len() % 2 == 1 {
                up.push(layer[layer.len() - 1].clone());
            }
            node_count += pairs as u64;
            hash_count += pairs as u64;
            layer = up;
        }

        let root = match layer.pop() {
            Some(digest) => digest,
            None => {
                // Empty batch: the designated sentinel root, not a hash.
                node_count += 1;
                Digest::empty()
            }
        };

        TreeSummary {
            root,
            node_count,
            hash_count,
        }
    }
}

impl fmt::Display for OddLayerPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of one tree build: the commitment root plus structural counters
/// for comparing policies.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TreeSummary {
    /// The root digest committing to the whole batch.
    pub root: Digest,
    /// Nodes the equivalent node-graph construction would allocate.
    pub node_count: u64,
    /// Hash-function invocations, leaf digests included.
    pub hash_count: u64,
}

/// Parent digest of two adjacent nodes: the hash of the concatenated hex
/// forms, left first.
pub fn hash_pair(left: &Digest, right: &Digest) -> Digest {
    let mut buf = String::with_capacity(left.as_str().len() + right.as_str().len());
    buf.push_str(left.as_str());
    buf.push_str(right.as_str());
    Digest::of_bytes(buf.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn roots_are_deterministic() {
        let items = batch(&["A", "B", "C", "D", "E"]);
        for policy in OddLayerPolicy::ALL {
            assert_eq!(policy.build(&items).root, policy.build(&items).root);
        }
    }

    #[test]
    fn empty_batch_yields_sentinel_root() {
        let items: Vec<String> = vec![];
        for policy in OddLayerPolicy::ALL {
            let summary = policy.build(&items);
            assert!(summary.root.is_empty(), "{policy} root should be sentinel");
            assert_eq!(summary.node_count, 1);
            assert_eq!(summary.hash_count, 0);
        }
    }

    #[test]
    fn single_item_root_is_leaf_digest() {
        let items = batch(&["X"]);
        for policy in OddLayerPolicy::ALL {
            let summary = policy.build(&items);
            assert_eq!(summary.root, object_hash("X"));
            assert_eq!(summary.node_count, 1);
            assert_eq!(summary.hash_count, 1);
        }
    }

    #[test]
    fn size_three_constructions_match_their_definitions() {
        let items = batch(&["A", "B", "C"]);
        let la = object_hash("A");
        let lb = object_hash("B");
        let lc = object_hash("C");
        let ab = hash_pair(&la, &lb);

        let promote = OddLayerPolicy::Promote.build(&items).root;
        let duplicate = OddLayerPolicy::Duplicate.build(&items).root;
        let pad = OddLayerPolicy::Pad.build(&items).root;

        assert_eq!(promote, hash_pair(&ab, &lc));
        assert_eq!(duplicate, hash_pair(&ab, &hash_pair(&lc, &lc)));
        assert_eq!(pad, hash_pair(&ab, &hash_pair(&lc, &Digest::empty())));

        assert_ne!(promote, duplicate);
        assert_ne!(promote, pad);
        assert_ne!(duplicate, pad);
    }

    #[test]
    fn policies_agree_on_even_layers() {
        let items = batch(&["A", "B", "C", "D"]);
        let promote = OddLayerPolicy::Promote.build(&items);
        let duplicate = OddLayerPolicy::Duplicate.build(&items);
        let pad = OddLayerPolicy::Pad.build(&items);
        assert_eq!(promote, duplicate);
        assert_eq!(promote, pad);
    }

    #[test]
    fn duplicate_policy_keeps_bitcoins_last_leaf_ambiguity() {
        // [A, B, C] and [A, B, C, C] commit to the same root under the
        // Duplicate policy. Expected behavior, not a bug.
        let three = batch(&["A", "B", "C"]);
        let four = batch(&["A", "B", "C", "C"]);
        assert_eq!(
            OddLayerPolicy::Duplicate.build(&three).root,
            OddLayerPolicy::Duplicate.build(&four).root,
        );
        assert_ne!(
            OddLayerPolicy::Promote.build(&three).root,
            OddLayerPolicy::Promote.build(&four).root,
        );
        assert_ne!(
            OddLayerPolicy::Pad.build(&three).root,
            OddLayerPolicy::Pad.build(&four).root,
        );
    }

    #[test]
    fn changing_any_item_changes_the_root() {
        let items = batch(&["A", "B", "C", "D", "E"]);
        for policy in OddLayerPolicy::ALL {
            let baseline = policy.build(&items).root;
            for i in 0..items.len() {
                let mut mutated = items.clone();
                mutated[i] = "Z".to_string();
                assert_ne!(
                    policy.build(&mutated).root,
                    baseline,
                    "{policy} root unchanged after mutating item {i}"
                );
            }
        }
    }

    #[test]
    fn promote_counters_for_size_three() {
        let summary = OddLayerPolicy::Promote.build(&batch(&["A", "B", "C"]));
        assert_eq!(summary.node_count, 5);
        assert_eq!(summary.hash_count, 5);
    }

    #[test]
    fn padding_policies_pay_extra_nodes_for_size_three() {
        for policy in [OddLayerPolicy::Duplicate, OddLayerPolicy::Pad] {
            let summary = policy.build(&batch(&["A", "B", "C"]));
            assert_eq!(summary.node_count, 7, "{policy}");
            assert_eq!(summary.hash_count, 6, "{policy}");
        }
    }

    #[test]
    fn even_batch_counters_agree() {
        for policy in OddLayerPolicy::ALL {
            let summary = policy.build(&batch(&["A", "B", "C", "D"]));
            assert_eq!(summary.node_count, 7, "{policy}");
            assert_eq!(summary.hash_count, 7, "{policy}");
        }
    }

    #[test]
    fn prefix_build_matches_truncated_batch() {
        let items = batch(&["A", "B", "C", "D", "E"]);
        let prefix = batch(&["A", "B", "C"]);
        for policy in OddLayerPolicy::ALL {
            assert_eq!(policy.build_prefix(&items, 3), policy.build(&prefix));
        }
    }

    #[test]
    fn oversized_prefix_clamps_to_batch_length() {
        let items = batch(&["A", "B"]);
        assert_eq!(
            OddLayerPolicy::Promote.build_prefix(&items, 10),
            OddLayerPolicy::Promote.build(&items),
        );
    }

    #[test]
    fn pair_hash_is_order_sensitive() {
        let a = object_hash("A");
        let b = object_hash("B");
        assert_ne!(hash_pair(&a, &b), hash_pair(&b, &a));
    }
}
