//! Incremental hasher selected by derivation scheme and digest length.
//!
//! The signer and address codec mostly use the one-shot functions in
//! `xpx_primitives::hash`; this type exists for callers that accumulate
//! input in pieces (multi-part signing data, streamed attachments) and for
//! the hex-string inputs the DTO layer produces.

use sha2::{Digest, Sha512, Sha512_256};
use sha3::{Keccak256, Keccak512};

use xpx_primitives::convert;

use crate::{CryptoError, DerivationScheme};

#[derive(Debug)]
enum Inner {
    Keccak256(Keccak256),
    Keccak512(Keccak512),
    Sha512_256(Sha512_256),
    Sha512(Sha512),
}

/// An incremental hasher with `reset`/`update`/`finalize` semantics.
///
/// Instantiable at two digest lengths: 32 bytes (Keccak-256 for the legacy
/// scheme, SHA-512/256 for the current scheme) and 64 bytes (Keccak-512 /
/// SHA-512). Any other length is `UnsupportedHashLength`.
#[derive(Debug)]
pub struct SchemeHasher {
    inner: Inner,
}

impl SchemeHasher {
    /// Create a hasher for the given scheme and digest length.
    ///
    /// # Arguments
    /// * `scheme` - The derivation scheme selecting the hash family.
    /// * `length` - Digest length in bytes; must be 32 or 64.
    ///
    /// # Returns
    /// A fresh hasher, or `CryptoError::UnsupportedHashLength`.
    pub fn for_scheme(scheme: DerivationScheme, length: usize) -> Result<Self, CryptoError> {
        let inner = match (scheme, length) {
            (DerivationScheme::Ed25519Keccak, 32) => Inner::Keccak256(Keccak256::new()),
            (DerivationScheme::Ed25519Keccak, 64) => Inner::Keccak512(Keccak512::new()),
            (DerivationScheme::Ed25519Sha2, 32) => Inner::Sha512_256(Sha512_256::new()),
            (DerivationScheme::Ed25519Sha2, 64) => Inner::Sha512(Sha512::new()),
            (_, other) => return Err(CryptoError::UnsupportedHashLength(other)),
        };
        Ok(SchemeHasher { inner })
    }

    /// The digest length in bytes this hasher produces.
    pub fn output_len(&self) -> usize {
        match self.inner {
            Inner::Keccak256(_) | Inner::Sha512_256(_) => 32,
            Inner::Keccak512(_) | Inner::Sha512(_) => 64,
        }
    }

    /// Discard accumulated input and start over.
    pub fn reset(&mut self) {
        match &mut self.inner {
            Inner::Keccak256(h) => Digest::reset(h),
            Inner::Keccak512(h) => Digest::reset(h),
            Inner::Sha512_256(h) => Digest::reset(h),
            Inner::Sha512(h) => Digest::reset(h),
        }
    }

    /// Absorb raw bytes.
    pub fn update(&mut self, data: &[u8]) {
        match &mut self.inner {
            Inner::Keccak256(h) => h.update(data),
            Inner::Keccak512(h) => h.update(data),
            Inner::Sha512_256(h) => h.update(data),
            Inner::Sha512(h) => h.update(data),
        }
    }

    /// Absorb a hex string as its decoded bytes.
    ///
    /// # Returns
    /// `Ok(())`, or `CryptoError::UnsupportedInput` for malformed hex — the
    /// only non-byte input shape the hasher accepts.
    pub fn update_hex(&mut self, hex_str: &str) -> Result<(), CryptoError> {
        let bytes = convert::hex_to_bytes(hex_str)
            .map_err(|e| CryptoError::UnsupportedInput(e.to_string()))?;
        self.update(&bytes);
        Ok(())
    }

    /// Produce the digest and reset the hasher for reuse.
    pub fn finalize(&mut self) -> Vec<u8> {
        match &mut self.inner {
            Inner::Keccak256(h) => h.finalize_reset().to_vec(),
            Inner::Keccak512(h) => h.finalize_reset().to_vec(),
            Inner::Sha512_256(h) => h.finalize_reset().to_vec(),
            Inner::Sha512(h) => h.finalize_reset().to_vec(),
        }
    }
}
