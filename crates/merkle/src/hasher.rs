//! Keccak256 hashing and the canonical pair ordering rule

use tiny_keccak::{Hasher, Keccak};

use crate::Hash;

/// Keccak256 hasher
pub struct Keccak256Hasher;

impl Keccak256Hasher {
    /// Hash an arbitrary byte string
    pub fn hash(data: &[u8]) -> Hash {
        let mut hasher = Keccak::v256();
        hasher.update(data);
        let mut output = [0u8; 32];
        hasher.finalize(&mut output);
        output
    }

    /// Hash two 32-byte nodes in the given order
    pub fn hash_pair(left: &Hash, right: &Hash) -> Hash {
        let mut hasher = Keccak::v256();
        hasher.update(left);
        hasher.update(right);
        let mut output = [0u8; 32];
        hasher.finalize(&mut output);
        output
    }

    /// Hash two nodes under the canonical ordering rule.
    ///
    /// The children are compared as byte strings (equivalently, as
    /// big-endian 256-bit integers) and concatenated smaller || larger
    /// before hashing. A parent hash therefore does not depend on which
    /// side each child sat on, and proofs carry no position bits. Any
    /// external verifier must apply this exact rule when recombining a
    /// leaf with its siblings.
    pub fn hash_sorted_pair(a: &Hash, b: &Hash) -> Hash {
        if a <= b {
            Self::hash_pair(a, b)
        } else {
            Self::hash_pair(b, a)
        }
    }
}
