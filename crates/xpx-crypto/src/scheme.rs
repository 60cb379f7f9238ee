//! Account derivation schemes.
//!
//! The network migrated its account cryptography once: version 1 accounts
//! use the legacy Keccak-based scheme (with the historical reversed
//! private-key convention), version 2 accounts use the SHA-2-based scheme.
//! The two are mutually exclusive; a signature produced under one never
//! verifies under the other. Every operation that hashes or signs takes the
//! scheme as an explicit parameter or carries it bound into a `KeyPair`.

use crate::CryptoError;

/// The hash family applied inside Ed25519 and during address derivation,
/// selected by the signing account's version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DerivationScheme {
    /// Legacy scheme (version 1 accounts): Keccak-512 key expansion over the
    /// reversed private-key bytes, Keccak-512 nonce/challenge hashes,
    /// Keccak-256 for 32-byte digests. Kept byte-compatible with the
    /// pre-migration network; pinned by test vectors rather than derived.
    Ed25519Keccak,

    /// Current scheme (version 2 accounts): SHA-512 key expansion and
    /// nonce/challenge hashes, SHA-512/256 for 32-byte digests.
    Ed25519Sha2,
}

impl DerivationScheme {
    /// Select the scheme for an account version.
    ///
    /// # Arguments
    /// * `version` - The account version (1 = legacy, 2 = current).
    ///
    /// # Returns
    /// The matching scheme, or `CryptoError::UnknownAccountVersion`.
    pub fn for_account_version(version: u8) -> Result<Self, CryptoError> {
        match version {
            1 => Ok(DerivationScheme::Ed25519Keccak),
            2 => Ok(DerivationScheme::Ed25519Sha2),
            other => Err(CryptoError::UnknownAccountVersion(other)),
        }
    }

    /// The one-byte tag stamped into the transaction version word.
    pub fn tag(&self) -> u8 {
        match self {
            DerivationScheme::Ed25519Keccak => 1,
            DerivationScheme::Ed25519Sha2 => 2,
        }
    }

    /// Recover a scheme from a version-word tag.
    ///
    /// Tag 0 (an unsigned transaction that has not been stamped yet) and
    /// unknown tags return `None`.
    pub fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            1 => Some(DerivationScheme::Ed25519Keccak),
            2 => Some(DerivationScheme::Ed25519Sha2),
            _ => None,
        }
    }
}
