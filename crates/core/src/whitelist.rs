//! Whitelist commitment and lookup interface

use mintlist_merkle::{Hash, MerkleError, MerkleProof, MerkleTree};

use crate::{address::Address, error::WhitelistError};

/// An immutable Merkle commitment over a fixed set of addresses.
///
/// Built once at startup, before any lookup is served, then shared
/// read-only (typically behind an `Arc`) across request handlers; lookups
/// never lock or mutate. Refreshing the set means building a new
/// `Whitelist` aside and atomically swapping the shared handle, so
/// in-flight readers keep the version they started with. Proofs are only
/// valid against the root of the tree that produced them.
#[derive(Clone, Debug)]
pub struct Whitelist {
    tree: MerkleTree,
}

impl Whitelist {
    /// Build the commitment from raw address tokens.
    ///
    /// Every token must normalize; the first malformed one aborts
    /// construction with no partial result. Duplicate addresses are kept
    /// as duplicate leaves.
    pub fn new<I, S>(addresses: I) -> Result<Self, WhitelistError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let leaves = addresses
            .into_iter()
            .map(|token| Address::parse(token.as_ref()).map(|address| address.leaf_hash()))
            .collect::<Result<Vec<Hash>, WhitelistError>>()?;

        let tree = MerkleTree::from_leaves(leaves).map_err(|err| match err {
            MerkleError::EmptyLeaves => WhitelistError::EmptyWhitelist,
        })?;

        Ok(Self { tree })
    }

    /// Root commitment, the value an external verifier checks proofs
    /// against (e.g. recorded on-chain).
    pub fn root(&self) -> Hash {
        self.tree.root()
    }

    /// Generate the inclusion proof for an address token.
    ///
    /// [`WhitelistError::NotFound`] is the normal outcome for a
    /// well-formed non-member, not a failure.
    pub fn proof(&self, token: &str) -> Result<MerkleProof, WhitelistError> {
        let address = Address::parse(token)?;
        self.tree
            .proof(&address.leaf_hash())
            .ok_or(WhitelistError::NotFound)
    }

    /// Membership check without materializing a proof. Malformed tokens
    /// are simply not members.
    pub fn contains(&self, token: &str) -> bool {
        Address::parse(token)
            .map(|address| self.tree.contains(&address.leaf_hash()))
            .unwrap_or(false)
    }

    /// Number of whitelisted entries, duplicates included
    pub fn len(&self) -> usize {
        self.tree.leaf_count()
    }

    /// Always false: construction rejects an empty list
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALICE: &str = "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";
    const BOB: &str = "0xbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb";
    const CAROL: &str = "0xcccccccccccccccccccccccccccccccccccccccc";
    const DAVE: &str = "0xdddddddddddddddddddddddddddddddddddddddd";

    fn three_member_whitelist() -> Whitelist {
        Whitelist::new([ALICE, BOB, CAROL]).unwrap()
    }

    #[test]
    fn test_member_proof_recombines_to_root() {
        let whitelist = three_member_whitelist();

        let proof = whitelist.proof(ALICE).unwrap();
        assert_eq!(proof.len(), 2);
        assert_eq!(proof.compute_root(), whitelist.root());
        assert!(proof.verify(&whitelist.root()));
    }

    #[test]
    fn test_absent_address_is_not_found() {
        let whitelist = three_member_whitelist();
        assert_eq!(whitelist.proof(DAVE), Err(WhitelistError::NotFound));
        assert!(!whitelist.contains(DAVE));
        assert!(whitelist.contains(BOB));
    }

    #[test]
    fn test_single_member_proof_is_empty() {
        let whitelist = Whitelist::new([ALICE]).unwrap();
        let proof = whitelist.proof(ALICE).unwrap();
        assert!(proof.is_empty());
        assert_eq!(whitelist.root(), proof.leaf);
        assert!(proof.verify(&whitelist.root()));
    }

    #[test]
    fn test_lookup_folds_case_and_prefix() {
        let whitelist = three_member_whitelist();
        let canonical = whitelist.proof(ALICE).unwrap();

        let shouting = format!("0X{}", ALICE[2..].to_uppercase());
        assert_eq!(whitelist.proof(&shouting).unwrap(), canonical);
        assert_eq!(whitelist.proof(&ALICE[2..]).unwrap(), canonical);
    }

    #[test]
    fn test_malformed_token_fails_before_lookup() {
        let whitelist = three_member_whitelist();
        assert!(matches!(
            whitelist.proof("0xdead"),
            Err(WhitelistError::InvalidAddress { .. })
        ));
        assert!(!whitelist.contains("0xdead"));
    }

    #[test]
    fn test_malformed_token_aborts_construction() {
        let result = Whitelist::new([ALICE, "garbage", BOB]);
        assert!(matches!(
            result,
            Err(WhitelistError::InvalidAddress { .. })
        ));
    }

    #[test]
    fn test_empty_list_is_unbuildable() {
        let addresses: [&str; 0] = [];
        assert_eq!(
            Whitelist::new(addresses).unwrap_err(),
            WhitelistError::EmptyWhitelist
        );
    }

    #[test]
    fn test_duplicate_addresses_still_prove() {
        let whitelist = Whitelist::new([ALICE, BOB, ALICE]).unwrap();
        assert_eq!(whitelist.len(), 3);
        let proof = whitelist.proof(ALICE).unwrap();
        assert!(proof.verify(&whitelist.root()));
    }

    #[test]
    fn test_rebuild_from_same_input_matches() {
        let first = three_member_whitelist();
        let second = three_member_whitelist();
        assert_eq!(first.root(), second.root());
        assert_eq!(first.proof(CAROL), second.proof(CAROL));
    }

    #[test]
    fn test_rebuild_from_changed_input_moves_the_root() {
        // Old proofs are only valid against the root they were generated
        // under.
        let old = three_member_whitelist();
        let new = Whitelist::new([ALICE, BOB, CAROL, DAVE]).unwrap();
        assert_ne!(old.root(), new.root());

        let stale = old.proof(ALICE).unwrap();
        assert!(!stale.verify(&new.root()));
    }
}
