use xpx_account::AccountError;
use xpx_crypto::CryptoError;
use xpx_primitives::FormatError;

/// Error types for transaction construction, codec, and state transitions.
#[derive(Debug, thiserror::Error)]
pub enum TransactionError {
    /// Embedding requires the signer's account version to be known.
    #[error("signer account version is required to embed a transaction")]
    MissingVersion,

    /// Aggregate transactions cannot themselves be embedded.
    #[error("{0} transaction cannot be an inner transaction")]
    InvalidInnerTransaction(&'static str),

    /// The transaction already carries confirmation metadata.
    #[error("transaction has already been announced")]
    AlreadyAnnounced,

    /// A field value does not fit its fixed wire width.
    #[error("value out of range: {0}")]
    Range(String),

    /// A signed-transaction hash was not 64 hex characters.
    #[error("invalid transaction hash length: expected 64 hex characters, got {0}")]
    InvalidHashLength(usize),

    #[error("unknown entity type: 0x{0:04X}")]
    UnknownEntityType(u16),

    /// The binary payload or JSON DTO does not describe a valid transaction.
    #[error("malformed payload: {0}")]
    MalformedPayload(String),

    #[error("format error: {0}")]
    Format(#[from] FormatError),

    #[error("account error: {0}")]
    Account(#[from] AccountError),

    #[error("crypto error: {0}")]
    Crypto(#[from] CryptoError),
}
