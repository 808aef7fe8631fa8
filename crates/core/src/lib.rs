//! Whitelist domain logic for the mintlist proof service
//!
//! Ties address normalization to the Merkle commitment: tokens are
//! normalized to 20 raw bytes, hashed once with keccak256 into leaves,
//! and committed into a sorted-pair Merkle tree. Lookups map an address
//! to its inclusion proof or a `NotFound` outcome.

pub mod address;
pub mod error;
pub mod whitelist;

pub use address::Address;
pub use error::WhitelistError;
pub use whitelist::Whitelist;

pub use mintlist_merkle::{Hash, MerkleProof};
