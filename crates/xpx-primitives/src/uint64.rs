//! 64-bit value helpers for the wire and DTO boundaries.
//!
//! The SDK uses plain `u64` everywhere internally. On the wire every 64-bit
//! field is eight little-endian bytes; at the JSON/DTO boundary 64-bit
//! values travel as a `[low, high]` pair of 32-bit words (hosts without
//! exact 64-bit integers read DTOs too). These helpers are the only places
//! the alternative shapes exist.

/// Encode a u64 as eight little-endian bytes.
pub fn to_le_bytes(value: u64) -> [u8; 8] {
    value.to_le_bytes()
}

/// Decode eight little-endian bytes into a u64.
pub fn from_le_bytes(bytes: [u8; 8]) -> u64 {
    u64::from_le_bytes(bytes)
}

/// Split a u64 into `(low, high)` 32-bit words for the DTO boundary.
///
/// # Returns
/// A tuple `(low, high)` where `value == low | (high << 32)`.
pub fn to_words(value: u64) -> (u32, u32) {
    (value as u32, (value >> 32) as u32)
}

/// Rebuild a u64 from `(low, high)` 32-bit words.
pub fn from_words(low: u32, high: u32) -> u64 {
    (low as u64) | ((high as u64) << 32)
}
