//! Dense Merkle tree with sorted pairing for whitelist commitments
//!
//! This crate fixes the hashing protocol shared between the proof service
//! and any external verifier:
//! - Leaves are 32-byte keccak256 digests supplied by the caller
//! - Parent nodes hash their two children in sorted byte order, so proofs
//!   carry no left/right position bits
//! - An unpaired node at the end of a level is carried to the next level
//!   unchanged, and the proof emits no sibling for that step
//!
//! Any deviation from these rules on the verifying side breaks root
//! recomputation, so they are tested bit-exactly here.

mod hasher;
mod proof;
mod tree;

pub use hasher::Keccak256Hasher;
pub use proof::MerkleProof;
pub use tree::{MerkleError, MerkleTree};

/// 32-byte hash type
pub type Hash = [u8; 32];
