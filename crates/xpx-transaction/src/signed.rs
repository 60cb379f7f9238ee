//! The signed-transaction envelope.

use xpx_account::NetworkType;

use crate::{EntityType, TransactionError};

/// The immutable result of signing: exactly what the transport layer needs
/// to announce a transaction, and nothing it could mutate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedTransaction {
    payload: String,
    hash: String,
    signer: String,
    entity_type: EntityType,
    network: NetworkType,
}

impl SignedTransaction {
    /// Assemble an envelope, enforcing the 64-hex-character hash invariant.
    pub fn new(
        payload: String,
        hash: String,
        signer: String,
        entity_type: EntityType,
        network: NetworkType,
    ) -> Result<Self, TransactionError> {
        if hash.len() != 64 {
            return Err(TransactionError::InvalidHashLength(hash.len()));
        }
        Ok(SignedTransaction {
            payload,
            hash,
            signer,
            entity_type,
            network,
        })
    }

    /// The full serialized payload, uppercase hex.
    pub fn payload(&self) -> &str {
        &self.payload
    }

    /// The transaction hash, 64 uppercase hex characters.
    pub fn hash(&self) -> &str {
        &self.hash
    }

    /// The signer's public key, uppercase hex.
    pub fn signer(&self) -> &str {
        &self.signer
    }

    /// The signed transaction's kind.
    pub fn entity_type(&self) -> EntityType {
        self.entity_type
    }

    /// The network the transaction targets.
    pub fn network(&self) -> NetworkType {
        self.network
    }
}
