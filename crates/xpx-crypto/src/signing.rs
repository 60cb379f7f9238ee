//! Ed25519 signing and verification with scheme-selected hashes.
//!
//! The scheme swaps the 64-byte hash used for key expansion and for the
//! nonce and challenge computations inside the signature equations, not
//! just a pre-hash of the payload. `ed25519-dalek` hard-wires SHA-512, so
//! the equations are written out against `curve25519-dalek` directly:
//!
//! ```text
//! r = H64(prefix ‖ M)        R = r·B
//! k = H64(R ‖ A ‖ M)         S = k·a + r (mod ℓ)
//! verify: S·B - k·A == R
//! ```

use curve25519_dalek::edwards::{CompressedEdwardsY, EdwardsPoint};
use curve25519_dalek::scalar::Scalar;

use xpx_primitives::hash;

use crate::keys::{expand_private_key, KeyPair, PublicKey, Signature, SIGNATURE_SIZE};
use crate::DerivationScheme;

/// Compute the scheme's 64-byte digest over concatenated parts.
fn hash_512(scheme: DerivationScheme, parts: &[&[u8]]) -> [u8; 64] {
    let mut joined = Vec::with_capacity(parts.iter().map(|p| p.len()).sum());
    for part in parts {
        joined.extend_from_slice(part);
    }
    match scheme {
        DerivationScheme::Ed25519Keccak => hash::keccak_512(&joined),
        DerivationScheme::Ed25519Sha2 => hash::sha512(&joined),
    }
}

/// Sign a message with the key pair's bound scheme.
///
/// # Arguments
/// * `message` - The bytes to sign (for transactions, the serialized
///   payload from the version field onward).
/// * `key_pair` - The signing pair; its scheme selects the internal hash.
///
/// # Returns
/// A 64-byte signature (R ‖ S).
pub fn sign(message: &[u8], key_pair: &KeyPair) -> Signature {
    let scheme = key_pair.scheme();
    let (scalar_bytes, prefix) = expand_private_key(key_pair.private_key(), scheme);
    let a = Scalar::from_bytes_mod_order(scalar_bytes);

    let r = Scalar::from_bytes_mod_order_wide(&hash_512(scheme, &[&prefix, message]));
    let big_r = EdwardsPoint::mul_base(&r).compress();

    let k = Scalar::from_bytes_mod_order_wide(&hash_512(
        scheme,
        &[big_r.as_bytes(), key_pair.public_key().as_bytes(), message],
    ));
    let s = k * a + r;

    let mut bytes = [0u8; SIGNATURE_SIZE];
    bytes[..32].copy_from_slice(big_r.as_bytes());
    bytes[32..].copy_from_slice(&s.to_bytes());
    Signature::from_array(bytes)
}

/// Verify a signature under an explicit scheme.
///
/// Verification with the wrong scheme fails deterministically even for a
/// message validly signed under the other scheme, because the challenge
/// hash differs.
///
/// # Arguments
/// * `message` - The signed bytes.
/// * `signature` - The 64-byte signature to check.
/// * `public_key` - The signer's public key (derived under the same scheme).
/// * `scheme` - The derivation scheme to verify under.
///
/// # Returns
/// `true` only if the signature is valid for this message, key, and scheme.
pub fn verify(
    message: &[u8],
    signature: &Signature,
    public_key: &PublicKey,
    scheme: DerivationScheme,
) -> bool {
    let sig_bytes = signature.as_bytes();
    let mut r_bytes = [0u8; 32];
    r_bytes.copy_from_slice(&sig_bytes[..32]);
    let mut s_bytes = [0u8; 32];
    s_bytes.copy_from_slice(&sig_bytes[32..]);

    // S must be canonical (< ℓ); a non-canonical S is malleable, not valid.
    let s = match Option::<Scalar>::from(Scalar::from_canonical_bytes(s_bytes)) {
        Some(s) => s,
        None => return false,
    };

    let a_point = match CompressedEdwardsY(*public_key.as_bytes()).decompress() {
        Some(p) => p,
        None => return false,
    };

    let k = Scalar::from_bytes_mod_order_wide(&hash_512(
        scheme,
        &[&r_bytes, public_key.as_bytes(), message],
    ));

    // R' = S·B - k·A; the signature is valid iff R' encodes to R.
    let expected_r = EdwardsPoint::vartime_double_scalar_mul_basepoint(&-k, &a_point, &s);
    expected_r.compress().as_bytes() == &r_bytes
}
