/// Sirius Chain SDK - Account cryptography.
///
/// Provides the two mutually exclusive account derivation schemes, the
/// scheme-selected incremental hasher, Ed25519 key types, and signing and
/// verification. The scheme is bound to a key pair at construction and
/// passed explicitly to every standalone hashing/verification call; it is
/// never inferred from ambient state.

pub mod hasher;
pub mod keys;
pub mod scheme;
pub mod signing;

mod error;
pub use error::CryptoError;
pub use hasher::SchemeHasher;
pub use keys::{KeyPair, PrivateKey, PublicKey, Signature};
pub use scheme::DerivationScheme;
pub use signing::{sign, verify};
