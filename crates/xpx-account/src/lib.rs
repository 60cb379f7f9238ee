/// Sirius Chain SDK - Accounts, addresses, and deterministic identifiers.
///
/// Provides the network identifier table, the 25-byte address codec with
/// Base32 string form and checksum validation, the mosaic and namespace id
/// generators, and the account types that bind a public key to its derived
/// address and version.

pub mod account;
pub mod address;
pub mod id_generator;
pub mod network;

mod error;
pub use account::{Account, PublicAccount};
pub use address::{Address, Recipient};
pub use error::AccountError;
pub use network::NetworkType;
