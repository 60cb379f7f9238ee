use xpx_crypto::CryptoError;
use xpx_primitives::FormatError;

/// Error type for address, network, and identifier operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AccountError {
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    /// An encoded address string had the wrong length after separator
    /// stripping.
    #[error("invalid encoded address length {got}: address must be 40 characters long")]
    InvalidAddressLength { got: usize },

    #[error("address checksum mismatch")]
    ChecksumMismatch,

    #[error("unknown network identifier: 0x{0:02X}")]
    UnknownNetwork(u8),

    /// An empty or malformed namespace/mosaic name.
    #[error("invalid name: {0}")]
    InvalidName(String),

    #[error("namespace path depth {0} exceeds the maximum of 3 levels")]
    NamespaceDepthExceeded(usize),

    #[error("format error: {0}")]
    Format(#[from] FormatError),

    #[error("crypto error: {0}")]
    Crypto(#[from] CryptoError),
}
