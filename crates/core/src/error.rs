//! Whitelist error types

use thiserror::Error;

/// Errors surfaced by whitelist construction and lookups
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum WhitelistError {
    /// The token is not a 20-byte hex address. Detected before any
    /// hashing happens.
    #[error("invalid address format: {token}")]
    InvalidAddress {
        /// The rejected input token, verbatim
        token: String,
    },

    /// Well-formed address with no leaf in the tree. The expected outcome
    /// for non-members, not a failure.
    #[error("address is not on the whitelist")]
    NotFound,

    /// Construction refuses an empty address list rather than committing
    /// to a degenerate root. Fatal at startup.
    #[error("whitelist is empty")]
    EmptyWhitelist,
}
