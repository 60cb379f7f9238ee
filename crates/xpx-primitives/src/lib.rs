/// Sirius Chain SDK - Binary primitives.
///
/// This crate provides the foundational building blocks for the chain SDK:
/// - Hex conversion with the SDK's uppercase output convention
/// - 64-bit value helpers for the wire and DTO boundaries
/// - RFC 4648 Base32 encoding/decoding (no padding)
/// - Cursor-based wire reader/writer for little-endian transaction data
/// - Hash functions (SHA3-256, Keccak-256/512, SHA-512, SHA-512/256, RIPEMD-160)

pub mod base32;
pub mod convert;
pub mod hash;
pub mod uint64;
pub mod util;

mod error;
pub use error::FormatError;
