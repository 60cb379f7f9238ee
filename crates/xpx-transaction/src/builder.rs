//! Transaction construction.
//!
//! One plain config struct per transaction kind, with public fields and a
//! single validating `build()`. There is no mutable builder state: a config
//! is filled in as a struct literal, `build()` checks every field against
//! its wire constraints, computes the size, derives the default max fee
//! from the strategy unless an explicit fee overrides it, and returns the
//! immutable transaction.

use xpx_account::{id_generator, Address, NetworkType, Recipient};
use xpx_crypto::PublicKey;

use crate::body::{
    AccountMetadataBody, AddressAliasBody, AddressRestrictionBody, AggregateBody, AggregateKind,
    AliasAction, CreateLiquidityProviderBody, EmbeddedTransaction, HarvesterBody,
    ManualRateChangeBody, MosaicAliasBody, MosaicDefinitionBody, MosaicRestrictionBody,
    MosaicSupplyChangeBody, NamespaceKind, OperationRestrictionBody, RegisterNamespaceBody,
    RestrictionModification, RestrictionType, TargetedMetadataBody, TransactionBody, TransferBody,
};
use crate::deadline::Deadline;
use crate::fee::{calculate_fee, FeeCalculationStrategy};
use crate::message::Message;
use crate::mosaic::{Mosaic, MosaicProperties, SupplyDirection};
use crate::transaction::{Transaction, TransactionHeader, TRANSACTION_HEADER_SIZE};
use crate::version::TransactionVersion;
use crate::{EntityType, TransactionError};

/// Assemble the immutable transaction once the body has been validated.
fn assemble(
    network: NetworkType,
    deadline: Deadline,
    body: TransactionBody,
    max_fee: Option<u64>,
    strategy: FeeCalculationStrategy,
) -> Transaction {
    let entity_type = body.entity_type();
    let version = TransactionVersion::new(network, entity_type.version());
    let size = TRANSACTION_HEADER_SIZE + body.size();
    let max_fee = max_fee.unwrap_or_else(|| calculate_fee(size, strategy));
    Transaction {
        header: TransactionHeader::unsigned(version, deadline, max_fee),
        body,
    }
}

fn check_modification_count(count: usize) -> Result<(), TransactionError> {
    if count > 255 {
        return Err(TransactionError::Range(format!(
            "modification count {} exceeds 255",
            count
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Transfer
// ---------------------------------------------------------------------------

/// Configuration of a transfer transaction.
pub struct TransferConfig {
    pub network: NetworkType,
    pub deadline: Deadline,
    pub recipient: Recipient,
    pub mosaics: Vec<Mosaic>,
    pub message: Message,
    pub max_fee: Option<u64>,
    pub strategy: FeeCalculationStrategy,
}

impl TransferConfig {
    /// Validate the fields and construct the transaction.
    pub fn build(self) -> Result<Transaction, TransactionError> {
        if self.message.wire_size() > u16::MAX as usize {
            return Err(TransactionError::Range(format!(
                "message of {} bytes exceeds the 16-bit size field",
                self.message.payload.len()
            )));
        }
        if self.mosaics.len() > 255 {
            return Err(TransactionError::Range(format!(
                "mosaic count {} exceeds 255",
                self.mosaics.len()
            )));
        }
        let body = TransactionBody::Transfer(TransferBody {
            recipient: self.recipient,
            mosaics: self.mosaics,
            message: self.message,
        });
        Ok(assemble(
            self.network,
            self.deadline,
            body,
            self.max_fee,
            self.strategy,
        ))
    }
}

// ---------------------------------------------------------------------------
// Namespace registration
// ---------------------------------------------------------------------------

/// Configuration of a root namespace registration.
pub struct RootNamespaceConfig {
    pub network: NetworkType,
    pub deadline: Deadline,
    pub name: String,
    pub duration: u64,
    pub max_fee: Option<u64>,
    pub strategy: FeeCalculationStrategy,
}

impl RootNamespaceConfig {
    pub fn build(self) -> Result<Transaction, TransactionError> {
        if self.name.contains('.') {
            return Err(TransactionError::Account(
                xpx_account::AccountError::InvalidName(format!(
                    "root namespace name must be a single level: '{}'",
                    self.name
                )),
            ));
        }
        let namespace_id = id_generator::namespace_id(&self.name)?;
        let body = TransactionBody::RegisterNamespace(RegisterNamespaceBody {
            kind: NamespaceKind::Root {
                duration: self.duration,
            },
            namespace_id,
            name: self.name,
        });
        Ok(assemble(
            self.network,
            self.deadline,
            body,
            self.max_fee,
            self.strategy,
        ))
    }
}

/// Configuration of a child namespace registration.
pub struct SubNamespaceConfig {
    pub network: NetworkType,
    pub deadline: Deadline,
    /// The full parent path, e.g. `"prx"` or `"prx.xpx"`.
    pub parent_name: String,
    /// The single-level child name.
    pub name: String,
    pub max_fee: Option<u64>,
    pub strategy: FeeCalculationStrategy,
}

impl SubNamespaceConfig {
    pub fn build(self) -> Result<Transaction, TransactionError> {
        let namespace_id = id_generator::sub_namespace_id(&self.parent_name, &self.name)?;
        let parent_id = id_generator::sub_namespace_parent_id(&self.parent_name, &self.name)?;
        let body = TransactionBody::RegisterNamespace(RegisterNamespaceBody {
            kind: NamespaceKind::Sub { parent_id },
            namespace_id,
            name: self.name,
        });
        Ok(assemble(
            self.network,
            self.deadline,
            body,
            self.max_fee,
            self.strategy,
        ))
    }
}

// ---------------------------------------------------------------------------
// Mosaics
// ---------------------------------------------------------------------------

/// Configuration of a mosaic definition. The mosaic id is derived from the
/// nonce and the creating account's public key.
pub struct MosaicDefinitionConfig {
    pub network: NetworkType,
    pub deadline: Deadline,
    pub nonce: [u8; 4],
    pub owner_public_key: PublicKey,
    pub properties: MosaicProperties,
    pub max_fee: Option<u64>,
    pub strategy: FeeCalculationStrategy,
}

impl MosaicDefinitionConfig {
    pub fn build(self) -> Result<Transaction, TransactionError> {
        let mosaic_id = id_generator::generate_mosaic_id(self.nonce, &self.owner_public_key);
        let body = TransactionBody::MosaicDefinition(MosaicDefinitionBody {
            nonce: self.nonce,
            mosaic_id,
            properties: self.properties,
        });
        Ok(assemble(
            self.network,
            self.deadline,
            body,
            self.max_fee,
            self.strategy,
        ))
    }
}

/// Configuration of a mosaic supply change.
pub struct MosaicSupplyChangeConfig {
    pub network: NetworkType,
    pub deadline: Deadline,
    pub mosaic_id: u64,
    pub direction: SupplyDirection,
    pub delta: u64,
    pub max_fee: Option<u64>,
    pub strategy: FeeCalculationStrategy,
}

impl MosaicSupplyChangeConfig {
    pub fn build(self) -> Result<Transaction, TransactionError> {
        let body = TransactionBody::MosaicSupplyChange(MosaicSupplyChangeBody {
            mosaic_id: self.mosaic_id,
            direction: self.direction,
            delta: self.delta,
        });
        Ok(assemble(
            self.network,
            self.deadline,
            body,
            self.max_fee,
            self.strategy,
        ))
    }
}

// ---------------------------------------------------------------------------
// Aliases
// ---------------------------------------------------------------------------

/// Configuration of an address alias link/unlink.
pub struct AddressAliasConfig {
    pub network: NetworkType,
    pub deadline: Deadline,
    pub action: AliasAction,
    pub namespace_id: u64,
    pub address: Address,
    pub max_fee: Option<u64>,
    pub strategy: FeeCalculationStrategy,
}

impl AddressAliasConfig {
    pub fn build(self) -> Result<Transaction, TransactionError> {
        let body = TransactionBody::AddressAlias(AddressAliasBody {
            action: self.action,
            namespace_id: self.namespace_id,
            address: self.address,
        });
        Ok(assemble(
            self.network,
            self.deadline,
            body,
            self.max_fee,
            self.strategy,
        ))
    }
}

/// Configuration of a mosaic alias link/unlink.
pub struct MosaicAliasConfig {
    pub network: NetworkType,
    pub deadline: Deadline,
    pub action: AliasAction,
    pub namespace_id: u64,
    pub mosaic_id: u64,
    pub max_fee: Option<u64>,
    pub strategy: FeeCalculationStrategy,
}

impl MosaicAliasConfig {
    pub fn build(self) -> Result<Transaction, TransactionError> {
        let body = TransactionBody::MosaicAlias(MosaicAliasBody {
            action: self.action,
            namespace_id: self.namespace_id,
            mosaic_id: self.mosaic_id,
        });
        Ok(assemble(
            self.network,
            self.deadline,
            body,
            self.max_fee,
            self.strategy,
        ))
    }
}

// ---------------------------------------------------------------------------
// Account restrictions
// ---------------------------------------------------------------------------

/// Configuration of an address-valued account restriction modification.
pub struct AddressRestrictionConfig {
    pub network: NetworkType,
    pub deadline: Deadline,
    pub restriction_type: RestrictionType,
    pub modifications: Vec<RestrictionModification<Address>>,
    pub max_fee: Option<u64>,
    pub strategy: FeeCalculationStrategy,
}

impl AddressRestrictionConfig {
    pub fn build(self) -> Result<Transaction, TransactionError> {
        if !self.restriction_type.targets_addresses() {
            return Err(TransactionError::Range(format!(
                "restriction type 0x{:02X} does not take address values",
                self.restriction_type.value()
            )));
        }
        check_modification_count(self.modifications.len())?;
        let body = TransactionBody::AddressRestriction(AddressRestrictionBody {
            restriction_type: self.restriction_type,
            modifications: self.modifications,
        });
        Ok(assemble(
            self.network,
            self.deadline,
            body,
            self.max_fee,
            self.strategy,
        ))
    }
}

/// Configuration of a mosaic-valued account restriction modification.
pub struct MosaicRestrictionConfig {
    pub network: NetworkType,
    pub deadline: Deadline,
    pub restriction_type: RestrictionType,
    pub modifications: Vec<RestrictionModification<u64>>,
    pub max_fee: Option<u64>,
    pub strategy: FeeCalculationStrategy,
}

impl MosaicRestrictionConfig {
    pub fn build(self) -> Result<Transaction, TransactionError> {
        if !self.restriction_type.targets_mosaics() {
            return Err(TransactionError::Range(format!(
                "restriction type 0x{:02X} does not take mosaic values",
                self.restriction_type.value()
            )));
        }
        check_modification_count(self.modifications.len())?;
        let body = TransactionBody::MosaicRestriction(MosaicRestrictionBody {
            restriction_type: self.restriction_type,
            modifications: self.modifications,
        });
        Ok(assemble(
            self.network,
            self.deadline,
            body,
            self.max_fee,
            self.strategy,
        ))
    }
}

/// Configuration of an entity-type-valued account restriction modification.
pub struct OperationRestrictionConfig {
    pub network: NetworkType,
    pub deadline: Deadline,
    pub restriction_type: RestrictionType,
    pub modifications: Vec<RestrictionModification<EntityType>>,
    pub max_fee: Option<u64>,
    pub strategy: FeeCalculationStrategy,
}

impl OperationRestrictionConfig {
    pub fn build(self) -> Result<Transaction, TransactionError> {
        if !self.restriction_type.targets_operations() {
            return Err(TransactionError::Range(format!(
                "restriction type 0x{:02X} does not take entity-type values",
                self.restriction_type.value()
            )));
        }
        check_modification_count(self.modifications.len())?;
        let body = TransactionBody::OperationRestriction(OperationRestrictionBody {
            restriction_type: self.restriction_type,
            modifications: self.modifications,
        });
        Ok(assemble(
            self.network,
            self.deadline,
            body,
            self.max_fee,
            self.strategy,
        ))
    }
}

// ---------------------------------------------------------------------------
// Metadata
// ---------------------------------------------------------------------------

fn check_metadata_value(value: &[u8]) -> Result<(), TransactionError> {
    if value.len() > u16::MAX as usize {
        return Err(TransactionError::Range(format!(
            "metadata value of {} bytes exceeds the 16-bit size field",
            value.len()
        )));
    }
    Ok(())
}

/// Configuration of account metadata.
pub struct AccountMetadataConfig {
    pub network: NetworkType,
    pub deadline: Deadline,
    pub target_key: PublicKey,
    pub scoped_key: u64,
    pub value_size_delta: i16,
    pub value: Vec<u8>,
    pub max_fee: Option<u64>,
    pub strategy: FeeCalculationStrategy,
}

impl AccountMetadataConfig {
    pub fn build(self) -> Result<Transaction, TransactionError> {
        check_metadata_value(&self.value)?;
        let body = TransactionBody::AccountMetadata(AccountMetadataBody {
            target_key: self.target_key,
            scoped_key: self.scoped_key,
            value_size_delta: self.value_size_delta,
            value: self.value,
        });
        Ok(assemble(
            self.network,
            self.deadline,
            body,
            self.max_fee,
            self.strategy,
        ))
    }
}

/// Configuration of mosaic or namespace metadata.
pub struct TargetedMetadataConfig {
    pub network: NetworkType,
    pub deadline: Deadline,
    pub target_key: PublicKey,
    pub scoped_key: u64,
    /// The mosaic or namespace id the metadata attaches to.
    pub target_id: u64,
    pub value_size_delta: i16,
    pub value: Vec<u8>,
    pub max_fee: Option<u64>,
    pub strategy: FeeCalculationStrategy,
}

impl TargetedMetadataConfig {
    fn body(self) -> Result<TargetedMetadataBody, TransactionError> {
        check_metadata_value(&self.value)?;
        Ok(TargetedMetadataBody {
            target_key: self.target_key,
            scoped_key: self.scoped_key,
            target_id: self.target_id,
            value_size_delta: self.value_size_delta,
            value: self.value,
        })
    }

    /// Build as mosaic metadata.
    pub fn build_for_mosaic(self) -> Result<Transaction, TransactionError> {
        let network = self.network;
        let deadline = self.deadline;
        let max_fee = self.max_fee;
        let strategy = self.strategy;
        let body = TransactionBody::MosaicMetadata(self.body()?);
        Ok(assemble(network, deadline, body, max_fee, strategy))
    }

    /// Build as namespace metadata.
    pub fn build_for_namespace(self) -> Result<Transaction, TransactionError> {
        let network = self.network;
        let deadline = self.deadline;
        let max_fee = self.max_fee;
        let strategy = self.strategy;
        let body = TransactionBody::NamespaceMetadata(self.body()?);
        Ok(assemble(network, deadline, body, max_fee, strategy))
    }
}

// ---------------------------------------------------------------------------
// Harvesters
// ---------------------------------------------------------------------------

/// Configuration of a delegated-harvester registration.
pub struct AddHarvesterConfig {
    pub network: NetworkType,
    pub deadline: Deadline,
    pub harvester_key: PublicKey,
    pub max_fee: Option<u64>,
    pub strategy: FeeCalculationStrategy,
}

impl AddHarvesterConfig {
    pub fn build(self) -> Result<Transaction, TransactionError> {
        let body = TransactionBody::AddHarvester(HarvesterBody {
            harvester_key: self.harvester_key,
        });
        Ok(assemble(
            self.network,
            self.deadline,
            body,
            self.max_fee,
            self.strategy,
        ))
    }
}

/// Configuration of a delegated-harvester removal.
pub struct RemoveHarvesterConfig {
    pub network: NetworkType,
    pub deadline: Deadline,
    pub harvester_key: PublicKey,
    pub max_fee: Option<u64>,
    pub strategy: FeeCalculationStrategy,
}

impl RemoveHarvesterConfig {
    pub fn build(self) -> Result<Transaction, TransactionError> {
        let body = TransactionBody::RemoveHarvester(HarvesterBody {
            harvester_key: self.harvester_key,
        });
        Ok(assemble(
            self.network,
            self.deadline,
            body,
            self.max_fee,
            self.strategy,
        ))
    }
}

// ---------------------------------------------------------------------------
// Liquidity providers
// ---------------------------------------------------------------------------

/// Configuration of a liquidity provider creation.
pub struct CreateLiquidityProviderConfig {
    pub network: NetworkType,
    pub deadline: Deadline,
    pub provider_mosaic_id: u64,
    pub currency_deposit: u64,
    pub initial_mosaics_minting: u64,
    pub slashing_period: u32,
    pub window_size: u16,
    pub slashing_account: PublicKey,
    pub alpha: u32,
    pub beta: u32,
    pub max_fee: Option<u64>,
    pub strategy: FeeCalculationStrategy,
}

impl CreateLiquidityProviderConfig {
    pub fn build(self) -> Result<Transaction, TransactionError> {
        if self.window_size == 0 {
            return Err(TransactionError::Range(
                "liquidity provider window size must be at least 1".to_string(),
            ));
        }
        let body = TransactionBody::CreateLiquidityProvider(CreateLiquidityProviderBody {
            provider_mosaic_id: self.provider_mosaic_id,
            currency_deposit: self.currency_deposit,
            initial_mosaics_minting: self.initial_mosaics_minting,
            slashing_period: self.slashing_period,
            window_size: self.window_size,
            slashing_account: self.slashing_account,
            alpha: self.alpha,
            beta: self.beta,
        });
        Ok(assemble(
            self.network,
            self.deadline,
            body,
            self.max_fee,
            self.strategy,
        ))
    }
}

/// Configuration of a manual liquidity-provider rate change.
pub struct ManualRateChangeConfig {
    pub network: NetworkType,
    pub deadline: Deadline,
    pub provider_mosaic_id: u64,
    pub currency_balance_increase: bool,
    pub currency_balance_change: u64,
    pub mosaic_balance_increase: bool,
    pub mosaic_balance_change: u64,
    pub max_fee: Option<u64>,
    pub strategy: FeeCalculationStrategy,
}

impl ManualRateChangeConfig {
    pub fn build(self) -> Result<Transaction, TransactionError> {
        let body = TransactionBody::ManualRateChange(ManualRateChangeBody {
            provider_mosaic_id: self.provider_mosaic_id,
            currency_balance_increase: self.currency_balance_increase,
            currency_balance_change: self.currency_balance_change,
            mosaic_balance_increase: self.mosaic_balance_increase,
            mosaic_balance_change: self.mosaic_balance_change,
        });
        Ok(assemble(
            self.network,
            self.deadline,
            body,
            self.max_fee,
            self.strategy,
        ))
    }
}

// ---------------------------------------------------------------------------
// Aggregates
// ---------------------------------------------------------------------------

/// Configuration of an aggregate container.
pub struct AggregateConfig {
    pub network: NetworkType,
    pub deadline: Deadline,
    pub kind: AggregateKind,
    pub inner: Vec<EmbeddedTransaction>,
    pub max_fee: Option<u64>,
    pub strategy: FeeCalculationStrategy,
}

impl AggregateConfig {
    pub fn build(self) -> Result<Transaction, TransactionError> {
        if self.inner.is_empty() {
            return Err(TransactionError::Range(
                "aggregate requires at least one inner transaction".to_string(),
            ));
        }
        let body = TransactionBody::Aggregate(AggregateBody {
            kind: self.kind,
            inner: self.inner,
        });
        Ok(assemble(
            self.network,
            self.deadline,
            body,
            self.max_fee,
            self.strategy,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fee::MAX_FEE;

    fn deadline() -> Deadline {
        Deadline::from_raw(100_000_000)
    }

    fn owner() -> PublicKey {
        PublicKey::from_hex("C2F93346E27CE6AD1A9F8F5E3066F8326593A406BDF357ACB041E2F9AB402EFE")
            .unwrap()
    }

    #[test]
    fn test_transfer_fee_from_strategy() {
        let tx = TransferConfig {
            network: NetworkType::MijinTest,
            deadline: deadline(),
            recipient: Recipient::NamespaceAlias(1),
            mosaics: vec![Mosaic::new(2, 100)],
            message: Message::plain("hi"),
            max_fee: None,
            strategy: FeeCalculationStrategy::Low,
        }
        .build()
        .unwrap();
        assert_eq!(tx.header.max_fee, tx.size() as u64 * 25);
    }

    #[test]
    fn test_explicit_fee_overrides_strategy() {
        let tx = TransferConfig {
            network: NetworkType::MijinTest,
            deadline: deadline(),
            recipient: Recipient::NamespaceAlias(1),
            mosaics: vec![],
            message: Message::empty(),
            max_fee: Some(MAX_FEE + 12345),
            strategy: FeeCalculationStrategy::High,
        }
        .build()
        .unwrap();
        // The override bypasses both the formula and the cap.
        assert_eq!(tx.header.max_fee, MAX_FEE + 12345);
    }

    #[test]
    fn test_transfer_message_range() {
        let result = TransferConfig {
            network: NetworkType::MijinTest,
            deadline: deadline(),
            recipient: Recipient::NamespaceAlias(1),
            mosaics: vec![],
            message: Message {
                message_type: 0,
                payload: vec![0u8; u16::MAX as usize],
            },
            max_fee: None,
            strategy: FeeCalculationStrategy::Middle,
        }
        .build();
        assert!(matches!(result, Err(TransactionError::Range(_))));
    }

    #[test]
    fn test_root_namespace_derives_id() {
        let tx = RootNamespaceConfig {
            network: NetworkType::MijinTest,
            deadline: deadline(),
            name: "nem".to_string(),
            duration: 1000,
            max_fee: None,
            strategy: FeeCalculationStrategy::Middle,
        }
        .build()
        .unwrap();
        match &tx.body {
            TransactionBody::RegisterNamespace(body) => {
                assert_eq!(body.namespace_id, 0x84B3_552D_375F_FA4B);
                assert_eq!(body.kind, NamespaceKind::Root { duration: 1000 });
            }
            other => panic!("unexpected body: {:?}", other),
        }
    }

    #[test]
    fn test_root_namespace_rejects_dotted_name() {
        let result = RootNamespaceConfig {
            network: NetworkType::MijinTest,
            deadline: deadline(),
            name: "prx.xpx".to_string(),
            duration: 1000,
            max_fee: None,
            strategy: FeeCalculationStrategy::Middle,
        }
        .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_sub_namespace_derives_parent_chain() {
        let tx = SubNamespaceConfig {
            network: NetworkType::MijinTest,
            deadline: deadline(),
            parent_name: "prx".to_string(),
            name: "xpx".to_string(),
            max_fee: None,
            strategy: FeeCalculationStrategy::Middle,
        }
        .build()
        .unwrap();
        match &tx.body {
            TransactionBody::RegisterNamespace(body) => {
                assert_eq!(body.namespace_id, 0xD423_931B_D268_D1F4);
                assert_eq!(
                    body.kind,
                    NamespaceKind::Sub {
                        parent_id: 0x316D_77FD_8B6F_B3BE
                    }
                );
                assert_eq!(body.name, "xpx");
            }
            other => panic!("unexpected body: {:?}", other),
        }
    }

    #[test]
    fn test_mosaic_definition_derives_id() {
        let tx = MosaicDefinitionConfig {
            network: NetworkType::MijinTest,
            deadline: deadline(),
            nonce: [0, 0, 0, 0],
            owner_public_key: owner(),
            properties: MosaicProperties::new(true, true, 6, Some(1000)).unwrap(),
            max_fee: None,
            strategy: FeeCalculationStrategy::Middle,
        }
        .build()
        .unwrap();
        match &tx.body {
            TransactionBody::MosaicDefinition(body) => {
                assert_eq!(body.mosaic_id, 0x5D1B_4D3A_8DD9_CB12);
            }
            other => panic!("unexpected body: {:?}", other),
        }
        assert_eq!(tx.size(), 122 + 4 + 8 + 1 + 1 + 1 + 9);
    }

    #[test]
    fn test_restriction_flavor_mismatch() {
        let result = AddressRestrictionConfig {
            network: NetworkType::MijinTest,
            deadline: deadline(),
            restriction_type: RestrictionType::AllowMosaic,
            modifications: vec![],
            max_fee: None,
            strategy: FeeCalculationStrategy::Middle,
        }
        .build();
        assert!(matches!(result, Err(TransactionError::Range(_))));
    }

    #[test]
    fn test_liquidity_provider_window_size_range() {
        let result = CreateLiquidityProviderConfig {
            network: NetworkType::MijinTest,
            deadline: deadline(),
            provider_mosaic_id: 1,
            currency_deposit: 2,
            initial_mosaics_minting: 3,
            slashing_period: 4,
            window_size: 0,
            slashing_account: owner(),
            alpha: 5,
            beta: 6,
            max_fee: None,
            strategy: FeeCalculationStrategy::Middle,
        }
        .build();
        assert!(matches!(result, Err(TransactionError::Range(_))));
    }

    #[test]
    fn test_aggregate_requires_inner() {
        let result = AggregateConfig {
            network: NetworkType::MijinTest,
            deadline: deadline(),
            kind: AggregateKind::CompleteV1,
            inner: vec![],
            max_fee: None,
            strategy: FeeCalculationStrategy::Middle,
        }
        .build();
        assert!(matches!(result, Err(TransactionError::Range(_))));
    }

    #[test]
    fn test_size_is_signature_independent() {
        // The same fields always produce the same size, whether or not the
        // transaction has been signed.
        let build = || {
            TransferConfig {
                network: NetworkType::MijinTest,
                deadline: deadline(),
                recipient: Recipient::NamespaceAlias(7),
                mosaics: vec![Mosaic::new(1, 1)],
                message: Message::plain("x"),
                max_fee: None,
                strategy: FeeCalculationStrategy::Middle,
            }
            .build()
            .unwrap()
        };
        assert_eq!(build().size(), build().size());
        assert_eq!(build().size(), 122 + 25 + 2 + 1 + 2 + 16);
    }
}
