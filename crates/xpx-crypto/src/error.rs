use xpx_primitives::FormatError;

/// Error type for key handling, hashing, and signing operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CryptoError {
    /// A hasher was requested with a digest length other than 32 or 64.
    #[error("unsupported hash length: {0} (expected 32 or 64)")]
    UnsupportedHashLength(usize),

    /// A hasher update was fed something that is not raw bytes or hex.
    #[error("unsupported hasher input: {0}")]
    UnsupportedInput(String),

    #[error("invalid key length: expected {expected}, got {got}")]
    InvalidKeyLength { expected: usize, got: usize },

    #[error("invalid signature length: expected 64, got {0}")]
    InvalidSignatureLength(usize),

    /// The account version maps to no known derivation scheme.
    #[error("unknown account version: {0}")]
    UnknownAccountVersion(u8),

    #[error("format error: {0}")]
    Format(#[from] FormatError),
}
