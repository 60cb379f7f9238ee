//! Hash function primitives for the chain SDK.
//!
//! Provides SHA3-256, Keccak-256/512, SHA-512, SHA-512/256, and RIPEMD-160.
//! SHA3-256 is the network-wide digest for identifiers and transaction
//! hashes; the Keccak variants serve the legacy account scheme; the SHA-2
//! variants serve the current account scheme; RIPEMD-160 condenses public
//! key hashes during address derivation.

use ripemd::Ripemd160;
use sha2::{Digest, Sha512, Sha512_256};
use sha3::{Keccak256, Keccak512, Sha3_256};

/// Compute SHA3-256 (FIPS 202) of the input data.
///
/// # Arguments
/// * `data` - Byte slice to hash.
///
/// # Returns
/// A 32-byte SHA3-256 digest.
pub fn sha3_256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha3_256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Compute Keccak-256 (pre-standard SHA3 padding) of the input data.
///
/// # Returns
/// A 32-byte Keccak-256 digest.
pub fn keccak_256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Compute Keccak-512 (pre-standard SHA3 padding) of the input data.
///
/// # Returns
/// A 64-byte Keccak-512 digest.
pub fn keccak_512(data: &[u8]) -> [u8; 64] {
    let mut hasher = Keccak512::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut output = [0u8; 64];
    output.copy_from_slice(&result);
    output
}

/// Compute SHA-512 of the input data.
///
/// # Returns
/// A 64-byte SHA-512 digest.
pub fn sha512(data: &[u8]) -> [u8; 64] {
    let mut hasher = Sha512::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut output = [0u8; 64];
    output.copy_from_slice(&result);
    output
}

/// Compute SHA-512/256 of the input data.
///
/// # Returns
/// A 32-byte SHA-512/256 digest.
pub fn sha512_256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha512_256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Compute RIPEMD-160 of the input data.
///
/// # Returns
/// A 20-byte RIPEMD-160 digest.
pub fn ripemd160(data: &[u8]) -> [u8; 20] {
    let mut hasher = Ripemd160::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut output = [0u8; 20];
    output.copy_from_slice(&result);
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    // ---- SHA3-256 ----

    #[test]
    fn test_sha3_256_empty_string() {
        assert_eq!(
            hex::encode(sha3_256(b"")),
            "a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a"
        );
    }

    #[test]
    fn test_sha3_256_abc() {
        assert_eq!(
            hex::encode(sha3_256(b"abc")),
            "3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532"
        );
    }

    // ---- Keccak-256 ----

    #[test]
    fn test_keccak_256_empty_string() {
        assert_eq!(
            hex::encode(keccak_256(b"")),
            "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
    }

    #[test]
    fn test_keccak_256_abc() {
        assert_eq!(
            hex::encode(keccak_256(b"abc")),
            "4e03657aea45a94fc7d47ba826c8d667c0d1e6e33a64a036ec44f58fa12d6c45"
        );
    }

    // ---- Keccak-512 ----

    #[test]
    fn test_keccak_512_abc() {
        assert_eq!(
            hex::encode(keccak_512(b"abc")),
            "18587dc2ea106b9a1563e32b3312421ca164c7f1f07bc922a9c83d77cea3a1e5\
             d0c69910739025372dc14ac9642629379540c17e2a65b19d77aa511a9d00bb96"
        );
    }

    // ---- SHA-512 ----

    #[test]
    fn test_sha512_abc() {
        assert_eq!(
            hex::encode(sha512(b"abc")),
            "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a\
             2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f"
        );
    }

    // ---- SHA-512/256 ----

    #[test]
    fn test_sha512_256_abc() {
        assert_eq!(
            hex::encode(sha512_256(b"abc")),
            "53048e2681941ef99b2e29b76b4c7dabe4c2d0c634fc6d46e0e2f13107e7af23"
        );
    }

    // ---- RIPEMD-160 ----

    #[test]
    fn test_ripemd160_empty_string() {
        assert_eq!(
            hex::encode(ripemd160(b"")),
            "9c1185a5c5e9fc54612808977ee8f548b2258d31"
        );
    }
}
