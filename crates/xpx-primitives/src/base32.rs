//! RFC 4648 §6 Base32 encoding and decoding.
//!
//! Operates on 5-byte blocks mapped to 8 characters of the `A-Z2-7`
//! alphabet. The SDK never emits padding characters; inputs whose length is
//! not a whole number of blocks are rejected rather than padded. Decode
//! rejects characters outside the alphabet.

use data_encoding::BASE32_NOPAD;

use crate::FormatError;

/// Bytes per Base32 block.
const DECODED_BLOCK_SIZE: usize = 5;

/// Characters per Base32 block.
const ENCODED_BLOCK_SIZE: usize = 8;

/// Encode bytes to an unpadded uppercase Base32 string.
///
/// # Arguments
/// * `data` - Input whose length must be a multiple of 5.
///
/// # Returns
/// The Base32 string (8 characters per 5 input bytes), or
/// `FormatError::InvalidLength` for a partial block.
pub fn encode(data: &[u8]) -> Result<String, FormatError> {
    if data.len() % DECODED_BLOCK_SIZE != 0 {
        return Err(FormatError::InvalidLength {
            expected: DECODED_BLOCK_SIZE * (data.len() / DECODED_BLOCK_SIZE + 1),
            got: data.len(),
        });
    }
    Ok(BASE32_NOPAD.encode(data))
}

/// Decode an unpadded Base32 string to bytes.
///
/// # Arguments
/// * `encoded` - Input whose length must be a multiple of 8, using only
///   `A-Z2-7`.
///
/// # Returns
/// The decoded bytes (5 per 8 input characters), or a `FormatError` for a
/// partial block or an out-of-alphabet character.
pub fn decode(encoded: &str) -> Result<Vec<u8>, FormatError> {
    if encoded.len() % ENCODED_BLOCK_SIZE != 0 {
        return Err(FormatError::InvalidLength {
            expected: ENCODED_BLOCK_SIZE * (encoded.len() / ENCODED_BLOCK_SIZE + 1),
            got: encoded.len(),
        });
    }
    BASE32_NOPAD
        .decode(encoded.as_bytes())
        .map_err(|e| FormatError::InvalidBase32(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    // RFC 4648 test vectors, restricted to whole blocks.

    #[test]
    fn test_encode_empty() {
        assert_eq!(encode(&[]).unwrap(), "");
    }

    #[test]
    fn test_encode_single_block() {
        // "fooba" -> "MZXW6YTB" (RFC 4648 §10 without padding)
        assert_eq!(encode(b"fooba").unwrap(), "MZXW6YTB");
    }

    #[test]
    fn test_decode_single_block() {
        assert_eq!(decode("MZXW6YTB").unwrap(), b"fooba");
    }

    #[test]
    fn test_encode_address_sized_input() {
        // 25 bytes -> exactly 40 characters, the encoded address length.
        let decoded =
            hex::decode("90A75B6B63D31BDA93808727940F24699AECDDF17C568508BA").unwrap();
        let encoded = encode(&decoded).unwrap();
        assert_eq!(encoded.len(), 40);
        assert_eq!(encoded, "SCTVW23D2MN5VE4AQ4TZIDZENGNOZXPRPRLIKCF2");
        assert_eq!(decode(&encoded).unwrap(), decoded);
    }

    #[test]
    fn test_encode_partial_block_rejected() {
        assert!(matches!(
            encode(&[1, 2, 3]),
            Err(FormatError::InvalidLength { .. })
        ));
    }

    #[test]
    fn test_decode_partial_block_rejected() {
        assert!(matches!(
            decode("MZXW6"),
            Err(FormatError::InvalidLength { .. })
        ));
    }

    #[test]
    fn test_decode_invalid_alphabet() {
        // '1' and '0' are not in the RFC 4648 alphabet.
        assert!(matches!(
            decode("MZXW6YT0"),
            Err(FormatError::InvalidBase32(_))
        ));
        assert!(matches!(
            decode("mzxw6ytb"),
            Err(FormatError::InvalidBase32(_))
        ));
    }
}
