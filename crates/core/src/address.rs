//! Address normalization and leaf encoding

use std::fmt;

use mintlist_merkle::{Hash, Keccak256Hasher};

use crate::error::WhitelistError;

/// Length of a raw address in bytes
pub const ADDRESS_LEN: usize = 20;

/// A 20-byte account address in canonical form.
///
/// The canonical form is the raw 20 bytes. The accepted text form is 40
/// hex digits with an optional `0x`/`0X` prefix; hex digits are
/// case-insensitive, so two tokens differing only in case or prefix
/// normalize to the same address and hash to the same leaf.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Address([u8; ADDRESS_LEN]);

impl Address {
    /// Parse and normalize an address token.
    ///
    /// Fails with [`WhitelistError::InvalidAddress`] when the token is
    /// not exactly 40 hex digits after prefix stripping.
    pub fn parse(token: &str) -> Result<Self, WhitelistError> {
        let digits = token
            .strip_prefix("0x")
            .or_else(|| token.strip_prefix("0X"))
            .unwrap_or(token);

        if digits.len() != ADDRESS_LEN * 2 {
            return Err(WhitelistError::InvalidAddress {
                token: token.to_string(),
            });
        }

        let bytes = hex::decode(digits).map_err(|_| WhitelistError::InvalidAddress {
            token: token.to_string(),
        })?;

        let mut raw = [0u8; ADDRESS_LEN];
        raw.copy_from_slice(&bytes);
        Ok(Self(raw))
    }

    /// Raw address bytes
    pub fn as_bytes(&self) -> &[u8; ADDRESS_LEN] {
        &self.0
    }

    /// Leaf digest: one round of keccak256 over the raw 20 bytes.
    ///
    /// Matches the on-chain form `keccak256(abi.encodePacked(addr))`, so
    /// a contract recomputes the identical leaf from `msg.sender`.
    pub fn leaf_hash(&self) -> Hash {
        Keccak256Hasher::hash(&self.0)
    }
}

impl fmt::Display for Address {
    /// Canonical text form: `0x` followed by lowercase hex
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}
