/// Sirius Chain SDK - Transaction model, builders, and codec.
///
/// Provides the closed transaction sum type with its per-kind bodies and
/// builder configs, deterministic size and fee calculation, the binary wire
/// codec and JSON projection (exact inverses), deadlines, and the signing
/// envelope handed to the transport layer.

pub mod body;
pub mod builder;
pub mod deadline;
pub mod entity_type;
pub mod fee;
pub mod message;
pub mod mosaic;
pub mod signed;
pub mod transaction;
pub mod version;

mod codec;
mod error;
mod json;

pub use deadline::Deadline;
pub use entity_type::EntityType;
pub use error::TransactionError;
pub use fee::{calculate_fee, FeeCalculationStrategy, MAX_FEE};
pub use message::Message;
pub use mosaic::Mosaic;
pub use signed::SignedTransaction;
pub use transaction::{Transaction, TransactionHeader, TransactionInfo};
pub use version::TransactionVersion;

#[cfg(test)]
mod tests;
