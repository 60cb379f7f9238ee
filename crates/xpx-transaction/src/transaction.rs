//! The transaction type and its state machine.
//!
//! A `Transaction` is an immutable value built by a config's `build()`.
//! State transitions never mutate: signing produces a `SignedTransaction`
//! envelope, embedding produces an `EmbeddedTransaction`, re-deadlining and
//! confirmation metadata produce fresh copies. Once confirmation metadata
//! is attached the value is final; further transitions fail.

use xpx_account::{Account, NetworkType, PublicAccount};
use xpx_crypto::{DerivationScheme, Signature};
use xpx_primitives::{convert, hash};

use crate::body::{EmbeddedTransaction, TransactionBody};
use crate::codec;
use crate::deadline::Deadline;
use crate::signed::SignedTransaction;
use crate::version::TransactionVersion;
use crate::{EntityType, TransactionError};

/// Wire size of the common header:
/// size(4) + signature(64) + signer(32) + version(4) + type(2) + maxFee(8) + deadline(8).
pub const TRANSACTION_HEADER_SIZE: u32 = 122;

/// Offset of the signed region: everything after size + signature + signer.
pub const SIGNING_DATA_OFFSET: usize = 100;

// ---------------------------------------------------------------------------
// TransactionInfo
// ---------------------------------------------------------------------------

/// Confirmation metadata attached after network inclusion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionInfo {
    /// Block height the transaction was included at.
    pub height: u64,
    /// Index within the block.
    pub index: u32,
    /// The transaction hash, 64 hex characters.
    pub hash: Option<String>,
    /// The merkle component hash, 64 hex characters.
    pub merkle_component_hash: Option<String>,
}

// ---------------------------------------------------------------------------
// TransactionHeader
// ---------------------------------------------------------------------------

/// The fields every transaction kind shares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionHeader {
    pub version: TransactionVersion,
    pub deadline: Deadline,
    pub max_fee: u64,
    pub signature: Option<Signature>,
    pub signer: Option<PublicAccount>,
    pub info: Option<TransactionInfo>,
}

impl TransactionHeader {
    /// An unsigned header for a freshly built transaction.
    pub fn unsigned(version: TransactionVersion, deadline: Deadline, max_fee: u64) -> Self {
        TransactionHeader {
            version,
            deadline,
            max_fee,
            signature: None,
            signer: None,
            info: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Transaction
// ---------------------------------------------------------------------------

/// A typed transaction: shared header plus per-kind body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub header: TransactionHeader,
    pub body: TransactionBody,
}

impl Transaction {
    /// The kind of this transaction.
    pub fn entity_type(&self) -> EntityType {
        self.body.entity_type()
    }

    /// The network this transaction targets.
    pub fn network(&self) -> NetworkType {
        self.header.version.network()
    }

    /// Total serialized size: 122-byte header plus body.
    ///
    /// A pure function of the body fields; it never depends on whether a
    /// signature is present.
    pub fn size(&self) -> u32 {
        TRANSACTION_HEADER_SIZE + self.body.size()
    }

    /// Whether the transaction has not been announced yet (no confirmation
    /// metadata).
    pub fn is_unannounced(&self) -> bool {
        self.header.info.is_none()
    }

    /// Sign with an account, producing the announce-ready envelope.
    ///
    /// The account's version selects the derivation scheme; its tag is
    /// stamped into the version word before the signing bytes are produced,
    /// so the scheme choice is part of what gets signed. The transaction
    /// hash is SHA3-256 over the first signature half, the signer key, and
    /// the signed region.
    ///
    /// # Returns
    /// The `SignedTransaction`, or `AlreadyAnnounced` if confirmation
    /// metadata is attached.
    pub fn sign_with(&self, account: &Account) -> Result<SignedTransaction, TransactionError> {
        if !self.is_unannounced() {
            return Err(TransactionError::AlreadyAnnounced);
        }

        let scheme = account.scheme();
        let version = self.header.version.with_scheme(scheme);
        let signing_bytes = codec::signing_data(
            version,
            self.entity_type(),
            self.header.max_fee,
            self.header.deadline,
            &self.body,
        )?;

        let signature = xpx_crypto::sign(&signing_bytes, account.key_pair());
        let signer_key = account.public_key();

        let mut payload = Vec::with_capacity(self.size() as usize);
        payload.extend_from_slice(&self.size().to_le_bytes());
        payload.extend_from_slice(signature.as_bytes());
        payload.extend_from_slice(signer_key.as_bytes());
        payload.extend_from_slice(&signing_bytes);

        let mut hash_input = Vec::with_capacity(32 + 32 + signing_bytes.len());
        hash_input.extend_from_slice(&signature.as_bytes()[..32]);
        hash_input.extend_from_slice(signer_key.as_bytes());
        hash_input.extend_from_slice(&signing_bytes);
        let tx_hash = hash::sha3_256(&hash_input);

        SignedTransaction::new(
            convert::bytes_to_hex(&payload),
            convert::bytes_to_hex(&tx_hash),
            signer_key.to_hex(),
            self.entity_type(),
            self.network(),
        )
    }

    /// Convert into an inner transaction of an aggregate.
    ///
    /// # Arguments
    /// * `signer` - The account the inner transaction acts for. Its version
    ///   must be known, because the version word's scheme tag is stamped
    ///   from it.
    ///
    /// # Returns
    /// The embedded form, or `InvalidInnerTransaction` for aggregate kinds
    /// and `MissingVersion` for an unversioned signer.
    pub fn to_aggregate(
        self,
        signer: &PublicAccount,
    ) -> Result<EmbeddedTransaction, TransactionError> {
        if self.body.is_aggregate() {
            return Err(TransactionError::InvalidInnerTransaction(
                self.entity_type().name(),
            ));
        }
        let version = signer.version().ok_or(TransactionError::MissingVersion)?;
        let scheme = DerivationScheme::for_account_version(version)?;
        Ok(EmbeddedTransaction {
            signer: *signer,
            version: self.header.version.with_scheme(scheme),
            body: self.body,
        })
    }

    /// Produce a fresh unsigned copy with a new deadline.
    ///
    /// Changing the deadline invalidates any existing signature, so the
    /// copy drops it along with the signer.
    ///
    /// # Returns
    /// The new transaction, or `AlreadyAnnounced` once confirmation
    /// metadata is attached.
    pub fn with_deadline(self, deadline: Deadline) -> Result<Transaction, TransactionError> {
        if !self.is_unannounced() {
            return Err(TransactionError::AlreadyAnnounced);
        }
        Ok(Transaction {
            header: TransactionHeader {
                deadline,
                signature: None,
                signer: None,
                ..self.header
            },
            body: self.body,
        })
    }

    /// Attach confirmation metadata after network inclusion.
    pub fn with_info(self, info: TransactionInfo) -> Transaction {
        Transaction {
            header: TransactionHeader {
                info: Some(info),
                ..self.header
            },
            body: self.body,
        }
    }

    /// Serialize the full payload (zeroed signature/signer when unsigned).
    pub fn to_payload_bytes(&self) -> Result<Vec<u8>, TransactionError> {
        codec::to_payload_bytes(self)
    }

    /// Serialize the full payload as uppercase hex.
    pub fn to_payload(&self) -> Result<String, TransactionError> {
        Ok(convert::bytes_to_hex(&self.to_payload_bytes()?))
    }

    /// Reconstruct a transaction from a hex payload.
    pub fn from_payload(payload_hex: &str) -> Result<Transaction, TransactionError> {
        codec::from_payload(payload_hex)
    }

    /// Project to the JSON DTO form.
    pub fn to_json(&self) -> serde_json::Value {
        crate::json::to_json(self)
    }

    /// Reconstruct a transaction from its JSON DTO form.
    pub fn from_dto(dto: &serde_json::Value) -> Result<Transaction, TransactionError> {
        crate::json::from_dto(dto)
    }
}
