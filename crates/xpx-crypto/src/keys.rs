//! Ed25519 key and signature types.
//!
//! A `KeyPair` binds a private key to the derivation scheme it was created
//! under; the public key and every signature from the pair are derived with
//! that scheme's hashes. Private key material is zeroized on drop.

use curve25519_dalek::edwards::EdwardsPoint;
use curve25519_dalek::scalar::Scalar;
use rand::RngCore;
use zeroize::{Zeroize, ZeroizeOnDrop};

use xpx_primitives::{convert, hash};

use crate::{CryptoError, DerivationScheme};

/// Private key length in bytes.
pub const PRIVATE_KEY_SIZE: usize = 32;
/// Public key length in bytes.
pub const PUBLIC_KEY_SIZE: usize = 32;
/// Signature length in bytes.
pub const SIGNATURE_SIZE: usize = 64;

// ---------------------------------------------------------------------------
// PrivateKey
// ---------------------------------------------------------------------------

/// A 32-byte Ed25519 private key seed.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey([u8; PRIVATE_KEY_SIZE]);

impl PrivateKey {
    /// Create a private key from a byte slice.
    ///
    /// # Returns
    /// `Ok(PrivateKey)` if the slice is exactly 32 bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CryptoError> {
        let arr: [u8; PRIVATE_KEY_SIZE] =
            bytes.try_into().map_err(|_| CryptoError::InvalidKeyLength {
                expected: PRIVATE_KEY_SIZE,
                got: bytes.len(),
            })?;
        Ok(PrivateKey(arr))
    }

    /// Create a private key from a 64-character hex string.
    pub fn from_hex(hex_str: &str) -> Result<Self, CryptoError> {
        Self::from_bytes(&convert::hex_to_bytes(hex_str)?)
    }

    /// Generate a fresh random private key from the OS RNG.
    pub fn random() -> Self {
        let mut bytes = [0u8; PRIVATE_KEY_SIZE];
        rand::rngs::OsRng.fill_bytes(&mut bytes);
        PrivateKey(bytes)
    }

    /// The raw key bytes.
    pub fn as_bytes(&self) -> &[u8; PRIVATE_KEY_SIZE] {
        &self.0
    }

    /// Uppercase hex form of the key.
    pub fn to_hex(&self) -> String {
        convert::bytes_to_hex(&self.0)
    }
}

impl std::fmt::Debug for PrivateKey {
    /// Never print key material.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PrivateKey(..)")
    }
}

// ---------------------------------------------------------------------------
// PublicKey
// ---------------------------------------------------------------------------

/// A 32-byte compressed Ed25519 public key.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct PublicKey([u8; PUBLIC_KEY_SIZE]);

impl PublicKey {
    /// Create a public key from a byte slice.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CryptoError> {
        let arr: [u8; PUBLIC_KEY_SIZE] =
            bytes.try_into().map_err(|_| CryptoError::InvalidKeyLength {
                expected: PUBLIC_KEY_SIZE,
                got: bytes.len(),
            })?;
        Ok(PublicKey(arr))
    }

    /// Create a public key from a 64-character hex string.
    pub fn from_hex(hex_str: &str) -> Result<Self, CryptoError> {
        Self::from_bytes(&convert::hex_to_bytes(hex_str)?)
    }

    /// The raw compressed point bytes.
    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_SIZE] {
        &self.0
    }

    /// Uppercase hex form of the key.
    pub fn to_hex(&self) -> String {
        convert::bytes_to_hex(&self.0)
    }
}

impl std::fmt::Display for PublicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

// ---------------------------------------------------------------------------
// Signature
// ---------------------------------------------------------------------------

/// A 64-byte Ed25519 signature (R ‖ S).
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Signature([u8; SIGNATURE_SIZE]);

impl Signature {
    /// Create a signature from a byte slice.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CryptoError> {
        let arr: [u8; SIGNATURE_SIZE] = bytes
            .try_into()
            .map_err(|_| CryptoError::InvalidSignatureLength(bytes.len()))?;
        Ok(Signature(arr))
    }

    /// Create a signature from a 128-character hex string.
    pub fn from_hex(hex_str: &str) -> Result<Self, CryptoError> {
        Self::from_bytes(&convert::hex_to_bytes(hex_str)?)
    }

    pub(crate) fn from_array(bytes: [u8; SIGNATURE_SIZE]) -> Self {
        Signature(bytes)
    }

    /// The raw signature bytes.
    pub fn as_bytes(&self) -> &[u8; SIGNATURE_SIZE] {
        &self.0
    }

    /// Uppercase hex form of the signature.
    pub fn to_hex(&self) -> String {
        convert::bytes_to_hex(&self.0)
    }
}

impl std::fmt::Debug for Signature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Signature({})", self.to_hex())
    }
}

// ---------------------------------------------------------------------------
// KeyPair
// ---------------------------------------------------------------------------

/// A private/public key pair bound to the derivation scheme it was created
/// under.
///
/// Binding the scheme at construction is what prevents the two account
/// generations from being mixed inside one signature: the pair signs with
/// the scheme it was derived with, and nothing else.
#[derive(Debug)]
pub struct KeyPair {
    private: PrivateKey,
    public: PublicKey,
    scheme: DerivationScheme,
}

impl KeyPair {
    /// Derive a key pair from a private key under the given scheme.
    pub fn from_private_key(private: PrivateKey, scheme: DerivationScheme) -> Self {
        let public = derive_public_key(&private, scheme);
        KeyPair {
            private,
            public,
            scheme,
        }
    }

    /// Derive a key pair from a hex private key under the given scheme.
    pub fn from_hex_private_key(
        hex_str: &str,
        scheme: DerivationScheme,
    ) -> Result<Self, CryptoError> {
        Ok(Self::from_private_key(PrivateKey::from_hex(hex_str)?, scheme))
    }

    /// Generate a random key pair under the given scheme.
    pub fn random(scheme: DerivationScheme) -> Self {
        Self::from_private_key(PrivateKey::random(), scheme)
    }

    /// The private key.
    pub fn private_key(&self) -> &PrivateKey {
        &self.private
    }

    /// The derived public key.
    pub fn public_key(&self) -> &PublicKey {
        &self.public
    }

    /// The scheme this pair was derived under.
    pub fn scheme(&self) -> DerivationScheme {
        self.scheme
    }
}

// ---------------------------------------------------------------------------
// Key expansion
// ---------------------------------------------------------------------------

/// Expand a private key into the clamped scalar bytes and the nonce prefix.
///
/// The legacy scheme hashes the private key bytes in reversed order with
/// Keccak-512; the current scheme hashes them as-is with SHA-512.
pub(crate) fn expand_private_key(
    private: &PrivateKey,
    scheme: DerivationScheme,
) -> ([u8; 32], [u8; 32]) {
    let digest = match scheme {
        DerivationScheme::Ed25519Keccak => {
            let mut reversed = *private.as_bytes();
            reversed.reverse();
            let digest = hash::keccak_512(&reversed);
            reversed.zeroize();
            digest
        }
        DerivationScheme::Ed25519Sha2 => hash::sha512(private.as_bytes()),
    };

    let mut scalar_bytes = [0u8; 32];
    scalar_bytes.copy_from_slice(&digest[..32]);
    scalar_bytes[0] &= 248;
    scalar_bytes[31] &= 127;
    scalar_bytes[31] |= 64;

    let mut prefix = [0u8; 32];
    prefix.copy_from_slice(&digest[32..]);

    (scalar_bytes, prefix)
}

/// Derive the public key for a private key under the given scheme.
pub fn derive_public_key(private: &PrivateKey, scheme: DerivationScheme) -> PublicKey {
    let (scalar_bytes, _) = expand_private_key(private, scheme);
    let scalar = Scalar::from_bytes_mod_order(scalar_bytes);
    let point = EdwardsPoint::mul_base(&scalar);
    PublicKey(point.compress().to_bytes())
}
