/// Unified error type for all primitives operations.
///
/// Covers errors from hex conversion, Base32 codecs, and wire-format reads.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("hex string has odd length")]
    OddLength,

    #[error("invalid hex character at index {0}")]
    InvalidHexCharacter(usize),

    #[error("invalid base32: {0}")]
    InvalidBase32(String),

    #[error("invalid length: expected {expected}, got {got}")]
    InvalidLength { expected: usize, got: usize },

    #[error("unexpected end of data")]
    UnexpectedEof,
}

impl From<hex::FromHexError> for FormatError {
    fn from(e: hex::FromHexError) -> Self {
        match e {
            hex::FromHexError::OddLength | hex::FromHexError::InvalidStringLength => {
                FormatError::OddLength
            }
            hex::FromHexError::InvalidHexCharacter { index, .. } => {
                FormatError::InvalidHexCharacter(index)
            }
        }
    }
}
