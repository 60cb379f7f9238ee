//! Hex conversion helpers.
//!
//! The SDK's fixed convention is uppercase hex on output; decode accepts
//! either case. Malformed input fails with a `FormatError` naming the
//! offense (odd length or the index of the first non-hex character).

use crate::FormatError;

/// Decode a hex string into bytes.
///
/// # Arguments
/// * `hex_str` - A hex string of even length, upper or lower case.
///
/// # Returns
/// `Ok(Vec<u8>)` on success, `FormatError::OddLength` for odd-length input,
/// or `FormatError::InvalidHexCharacter` for a non-hex character.
pub fn hex_to_bytes(hex_str: &str) -> Result<Vec<u8>, FormatError> {
    if hex_str.len() % 2 != 0 {
        return Err(FormatError::OddLength);
    }
    Ok(hex::decode(hex_str)?)
}

/// Encode bytes as an uppercase hex string.
///
/// Output is always even-length; this is the SDK's canonical hex form for
/// payloads, hashes, and keys.
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    hex::encode_upper(bytes)
}

/// Decode a hex string into a fixed-size byte array.
///
/// # Arguments
/// * `hex_str` - A hex string encoding exactly `N` bytes.
///
/// # Returns
/// `Ok([u8; N])` on success, or a `FormatError` if the string is malformed
/// or decodes to a different length.
pub fn hex_to_array<const N: usize>(hex_str: &str) -> Result<[u8; N], FormatError> {
    let bytes = hex_to_bytes(hex_str)?;
    let got = bytes.len();
    bytes
        .try_into()
        .map_err(|_| FormatError::InvalidLength { expected: N, got })
}
