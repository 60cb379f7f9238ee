//! Per-kind transaction bodies.
//!
//! The transaction model is a closed sum type: one variant per kind, each
//! carrying its own field struct. `entity_type` and `size` are matched
//! exhaustively here and the binary/JSON codecs match the same variants, so
//! a new kind cannot be added without implementing all of them.
//!
//! `size` returns body bytes only; a top-level transaction adds the 122-byte
//! common header, an embedded one the 42-byte embedded header. Every size
//! is a pure function of field lengths and is computed identically before
//! fee calculation and during serialization.

use xpx_account::{Address, PublicAccount, Recipient};
use xpx_crypto::PublicKey;

use crate::mosaic::{Mosaic, MosaicProperties, SupplyDirection, MOSAIC_ENTRY_SIZE};
use crate::version::TransactionVersion;
use crate::{EntityType, Message, TransactionError};

// ---------------------------------------------------------------------------
// Field enums
// ---------------------------------------------------------------------------

/// Namespace registration flavor: a root rents for a duration, a child
/// hangs off its parent id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamespaceKind {
    Root { duration: u64 },
    Sub { parent_id: u64 },
}

impl NamespaceKind {
    /// The wire type byte: 0 for root, 1 for child.
    pub fn type_byte(&self) -> u8 {
        match self {
            NamespaceKind::Root { .. } => 0,
            NamespaceKind::Sub { .. } => 1,
        }
    }

    /// The 8-byte field that follows the type byte (duration or parent id).
    pub fn wire_value(&self) -> u64 {
        match self {
            NamespaceKind::Root { duration } => *duration,
            NamespaceKind::Sub { parent_id } => *parent_id,
        }
    }
}

/// Link or unlink an alias.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum AliasAction {
    Link = 0,
    Unlink = 1,
}

impl AliasAction {
    pub fn value(&self) -> u8 {
        *self as u8
    }

    pub fn from_raw(value: u8) -> Result<Self, TransactionError> {
        match value {
            0 => Ok(AliasAction::Link),
            1 => Ok(AliasAction::Unlink),
            other => Err(TransactionError::MalformedPayload(format!(
                "unknown alias action: {}",
                other
            ))),
        }
    }
}

/// Account restriction flavor and allow/block polarity, packed as the wire
/// flags byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum RestrictionType {
    AllowAddress = 0x01,
    AllowMosaic = 0x02,
    AllowTransaction = 0x04,
    BlockAddress = 0x81,
    BlockMosaic = 0x82,
    BlockTransaction = 0x84,
}

impl RestrictionType {
    pub fn value(&self) -> u8 {
        *self as u8
    }

    pub fn from_raw(value: u8) -> Result<Self, TransactionError> {
        match value {
            0x01 => Ok(RestrictionType::AllowAddress),
            0x02 => Ok(RestrictionType::AllowMosaic),
            0x04 => Ok(RestrictionType::AllowTransaction),
            0x81 => Ok(RestrictionType::BlockAddress),
            0x82 => Ok(RestrictionType::BlockMosaic),
            0x84 => Ok(RestrictionType::BlockTransaction),
            other => Err(TransactionError::MalformedPayload(format!(
                "unknown restriction type: 0x{:02X}",
                other
            ))),
        }
    }

    /// Whether this flags byte is an address-value restriction.
    pub fn targets_addresses(&self) -> bool {
        matches!(self, RestrictionType::AllowAddress | RestrictionType::BlockAddress)
    }

    /// Whether this flags byte is a mosaic-value restriction.
    pub fn targets_mosaics(&self) -> bool {
        matches!(self, RestrictionType::AllowMosaic | RestrictionType::BlockMosaic)
    }

    /// Whether this flags byte is an entity-type restriction.
    pub fn targets_operations(&self) -> bool {
        matches!(
            self,
            RestrictionType::AllowTransaction | RestrictionType::BlockTransaction
        )
    }
}

/// Add or remove a restriction list entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum RestrictionAction {
    Add = 0,
    Remove = 1,
}

impl RestrictionAction {
    pub fn value(&self) -> u8 {
        *self as u8
    }

    pub fn from_raw(value: u8) -> Result<Self, TransactionError> {
        match value {
            0 => Ok(RestrictionAction::Add),
            1 => Ok(RestrictionAction::Remove),
            other => Err(TransactionError::MalformedPayload(format!(
                "unknown restriction modification action: {}",
                other
            ))),
        }
    }
}

/// One restriction-list modification: an action and the restricted value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestrictionModification<T> {
    pub action: RestrictionAction,
    pub value: T,
}

/// The aggregate container flavors. V2 containers share the V1 layout; the
/// version word's scheme tag tells the signer generations apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregateKind {
    CompleteV1,
    BondedV1,
    CompleteV2,
    BondedV2,
}

impl AggregateKind {
    pub fn entity_type(&self) -> EntityType {
        match self {
            AggregateKind::CompleteV1 => EntityType::AggregateComplete,
            AggregateKind::BondedV1 => EntityType::AggregateBonded,
            AggregateKind::CompleteV2 => EntityType::AggregateCompleteV2,
            AggregateKind::BondedV2 => EntityType::AggregateBondedV2,
        }
    }

    pub fn from_entity_type(entity_type: EntityType) -> Option<Self> {
        match entity_type {
            EntityType::AggregateComplete => Some(AggregateKind::CompleteV1),
            EntityType::AggregateBonded => Some(AggregateKind::BondedV1),
            EntityType::AggregateCompleteV2 => Some(AggregateKind::CompleteV2),
            EntityType::AggregateBondedV2 => Some(AggregateKind::BondedV2),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Body structs
// ---------------------------------------------------------------------------

/// Transfer: recipient, attached mosaics, and a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferBody {
    pub recipient: Recipient,
    pub mosaics: Vec<Mosaic>,
    pub message: Message,
}

/// Root or child namespace registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterNamespaceBody {
    pub kind: NamespaceKind,
    pub namespace_id: u64,
    pub name: String,
}

/// Mosaic definition: nonce, derived id, and properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MosaicDefinitionBody {
    pub nonce: [u8; 4],
    pub mosaic_id: u64,
    pub properties: MosaicProperties,
}

/// Mosaic supply increase or decrease.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MosaicSupplyChangeBody {
    pub mosaic_id: u64,
    pub direction: SupplyDirection,
    pub delta: u64,
}

/// Link/unlink a namespace to an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressAliasBody {
    pub action: AliasAction,
    pub namespace_id: u64,
    pub address: Address,
}

/// Link/unlink a namespace to a mosaic id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MosaicAliasBody {
    pub action: AliasAction,
    pub namespace_id: u64,
    pub mosaic_id: u64,
}

/// Address-valued account restriction modifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressRestrictionBody {
    pub restriction_type: RestrictionType,
    pub modifications: Vec<RestrictionModification<Address>>,
}

/// Mosaic-valued account restriction modifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MosaicRestrictionBody {
    pub restriction_type: RestrictionType,
    pub modifications: Vec<RestrictionModification<u64>>,
}

/// Entity-type-valued account restriction modifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationRestrictionBody {
    pub restriction_type: RestrictionType,
    pub modifications: Vec<RestrictionModification<EntityType>>,
}

/// Metadata attached to an account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountMetadataBody {
    pub target_key: PublicKey,
    pub scoped_key: u64,
    pub value_size_delta: i16,
    pub value: Vec<u8>,
}

/// Metadata attached to a mosaic or namespace (carries the target id).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetedMetadataBody {
    pub target_key: PublicKey,
    pub scoped_key: u64,
    pub target_id: u64,
    pub value_size_delta: i16,
    pub value: Vec<u8>,
}

/// Delegated harvester registration (add and remove share the layout).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HarvesterBody {
    pub harvester_key: PublicKey,
}

/// Liquidity provider creation parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreateLiquidityProviderBody {
    pub provider_mosaic_id: u64,
    pub currency_deposit: u64,
    pub initial_mosaics_minting: u64,
    pub slashing_period: u32,
    pub window_size: u16,
    pub slashing_account: PublicKey,
    pub alpha: u32,
    pub beta: u32,
}

/// Manual exchange-rate change for a liquidity provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManualRateChangeBody {
    pub provider_mosaic_id: u64,
    pub currency_balance_increase: bool,
    pub currency_balance_change: u64,
    pub mosaic_balance_increase: bool,
    pub mosaic_balance_change: u64,
}

/// Aggregate container: flavor plus embedded transactions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateBody {
    pub kind: AggregateKind,
    pub inner: Vec<EmbeddedTransaction>,
}

// ---------------------------------------------------------------------------
// Embedded transactions
// ---------------------------------------------------------------------------

/// Wire size of the embedded header: size(4) + signer(32) + version(4) + type(2).
pub const EMBEDDED_HEADER_SIZE: u32 = 42;

/// An inner transaction of an aggregate: carries its signer but no own
/// signature, fee, or deadline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbeddedTransaction {
    pub signer: PublicAccount,
    pub version: TransactionVersion,
    pub body: TransactionBody,
}

impl EmbeddedTransaction {
    /// The kind of the embedded transaction.
    pub fn entity_type(&self) -> EntityType {
        self.body.entity_type()
    }

    /// Total embedded wire size: 42-byte header plus body.
    pub fn size(&self) -> u32 {
        EMBEDDED_HEADER_SIZE + self.body.size()
    }
}

// ---------------------------------------------------------------------------
// TransactionBody
// ---------------------------------------------------------------------------

/// The closed set of transaction bodies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionBody {
    Transfer(TransferBody),
    RegisterNamespace(RegisterNamespaceBody),
    MosaicDefinition(MosaicDefinitionBody),
    MosaicSupplyChange(MosaicSupplyChangeBody),
    AddressAlias(AddressAliasBody),
    MosaicAlias(MosaicAliasBody),
    AddressRestriction(AddressRestrictionBody),
    MosaicRestriction(MosaicRestrictionBody),
    OperationRestriction(OperationRestrictionBody),
    AccountMetadata(AccountMetadataBody),
    MosaicMetadata(TargetedMetadataBody),
    NamespaceMetadata(TargetedMetadataBody),
    AddHarvester(HarvesterBody),
    RemoveHarvester(HarvesterBody),
    CreateLiquidityProvider(CreateLiquidityProviderBody),
    ManualRateChange(ManualRateChangeBody),
    Aggregate(AggregateBody),
}

impl TransactionBody {
    /// The entity type this body serializes as.
    pub fn entity_type(&self) -> EntityType {
        match self {
            TransactionBody::Transfer(_) => EntityType::Transfer,
            TransactionBody::RegisterNamespace(_) => EntityType::RegisterNamespace,
            TransactionBody::MosaicDefinition(_) => EntityType::MosaicDefinition,
            TransactionBody::MosaicSupplyChange(_) => EntityType::MosaicSupplyChange,
            TransactionBody::AddressAlias(_) => EntityType::AddressAlias,
            TransactionBody::MosaicAlias(_) => EntityType::MosaicAlias,
            TransactionBody::AddressRestriction(_) => EntityType::AccountRestrictionAddress,
            TransactionBody::MosaicRestriction(_) => EntityType::AccountRestrictionMosaic,
            TransactionBody::OperationRestriction(_) => EntityType::AccountRestrictionOperation,
            TransactionBody::AccountMetadata(_) => EntityType::AccountMetadata,
            TransactionBody::MosaicMetadata(_) => EntityType::MosaicMetadata,
            TransactionBody::NamespaceMetadata(_) => EntityType::NamespaceMetadata,
            TransactionBody::AddHarvester(_) => EntityType::AddHarvester,
            TransactionBody::RemoveHarvester(_) => EntityType::RemoveHarvester,
            TransactionBody::CreateLiquidityProvider(_) => EntityType::CreateLiquidityProvider,
            TransactionBody::ManualRateChange(_) => EntityType::ManualRateChange,
            TransactionBody::Aggregate(body) => body.kind.entity_type(),
        }
    }

    /// Body wire size in bytes, a pure function of field lengths.
    pub fn size(&self) -> u32 {
        match self {
            TransactionBody::Transfer(body) => {
                // recipient + message size + mosaic count + message + mosaics
                (25 + 2
                    + 1
                    + body.message.wire_size()
                    + MOSAIC_ENTRY_SIZE * body.mosaics.len()) as u32
            }
            TransactionBody::RegisterNamespace(body) => {
                // type + duration/parent + id + name size + name
                (1 + 8 + 8 + 1 + body.name.len()) as u32
            }
            TransactionBody::MosaicDefinition(body) => {
                // nonce + id + optional count + flags + divisibility
                // + (property id + value) per optional
                4 + 8 + 1 + 1 + 1 + 9 * body.properties.optional_count() as u32
            }
            TransactionBody::MosaicSupplyChange(_) => 8 + 1 + 8,
            TransactionBody::AddressAlias(_) => 1 + 8 + 25,
            TransactionBody::MosaicAlias(_) => 1 + 8 + 8,
            TransactionBody::AddressRestriction(body) => {
                // flags + count + (action + 25-byte address) each
                (1 + 1 + 26 * body.modifications.len()) as u32
            }
            TransactionBody::MosaicRestriction(body) => {
                (1 + 1 + 9 * body.modifications.len()) as u32
            }
            TransactionBody::OperationRestriction(body) => {
                (1 + 1 + 3 * body.modifications.len()) as u32
            }
            TransactionBody::AccountMetadata(body) => {
                // target key + scoped key + delta + value size + value
                (32 + 8 + 2 + 2 + body.value.len()) as u32
            }
            TransactionBody::MosaicMetadata(body) | TransactionBody::NamespaceMetadata(body) => {
                (32 + 8 + 8 + 2 + 2 + body.value.len()) as u32
            }
            TransactionBody::AddHarvester(_) | TransactionBody::RemoveHarvester(_) => 32,
            TransactionBody::CreateLiquidityProvider(_) => 8 + 8 + 8 + 4 + 2 + 32 + 4 + 4,
            TransactionBody::ManualRateChange(_) => 8 + 1 + 8 + 1 + 8,
            TransactionBody::Aggregate(body) => {
                4 + body.inner.iter().map(|tx| tx.size()).sum::<u32>()
            }
        }
    }

    /// Whether this body is an aggregate container.
    pub fn is_aggregate(&self) -> bool {
        matches!(self, TransactionBody::Aggregate(_))
    }
}
