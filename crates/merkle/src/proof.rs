//! Inclusion proofs and the verifier-side combine rule

use serde::{Deserialize, Serialize};

use crate::{hasher::Keccak256Hasher, Hash};

/// Merkle inclusion proof.
///
/// Carries the leaf hash and the sibling hashes from the leaf's level up
/// to, but excluding, the root. Because pairing is sorted the proof needs
/// no left/right direction bits, only the sibling sequence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerkleProof {
    /// The leaf hash being proven
    pub leaf: Hash,
    /// Sibling hashes from the leaf level to just below the root
    pub siblings: Vec<Hash>,
}

impl MerkleProof {
    /// Assemble a proof from a leaf and its authentication path
    pub fn new(leaf: Hash, siblings: Vec<Hash>) -> Self {
        Self { leaf, siblings }
    }

    /// Recompute the root this proof commits to.
    ///
    /// This is the exact rule an independent verifier applies with no
    /// access to the tree: fold the leaf through the siblings, hashing
    /// each pair in sorted order.
    pub fn compute_root(&self) -> Hash {
        self.siblings.iter().fold(self.leaf, |node, sibling| {
            Keccak256Hasher::hash_sorted_pair(&node, sibling)
        })
    }

    /// Verify this proof against a known root
    pub fn verify(&self, root: &Hash) -> bool {
        self.compute_root() == *root
    }

    /// Number of siblings on the path
    pub fn len(&self) -> usize {
        self.siblings.len()
    }

    /// A proof over a single-leaf tree has no siblings
    pub fn is_empty(&self) -> bool {
        self.siblings.is_empty()
    }

    /// Siblings as 0x-prefixed hex strings, the wire form served to
    /// clients.
    pub fn to_hex(&self) -> Vec<String> {
        self.siblings
            .iter()
            .map(|sibling| format!("0x{}", hex::encode(sibling)))
            .collect()
    }
}
