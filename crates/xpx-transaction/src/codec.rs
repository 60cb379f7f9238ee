//! Binary wire codec.
//!
//! Encode and decode share one field-order definition per kind: the write
//! and read arms below mirror each other line by line, and `body.size()`
//! counts the same fields. Decode reads every count before its variable
//! payload and requires full consumption; trailing bytes are an error.

use xpx_account::{Address, PublicAccount, Recipient};
use xpx_crypto::{PublicKey, Signature};
use xpx_primitives::convert;
use xpx_primitives::util::{WireReader, WireWriter};

use crate::body::{
    AccountMetadataBody, AddressAliasBody, AddressRestrictionBody, AggregateBody, AggregateKind,
    AliasAction, CreateLiquidityProviderBody, EmbeddedTransaction, HarvesterBody,
    ManualRateChangeBody, MosaicAliasBody, MosaicDefinitionBody, MosaicRestrictionBody,
    MosaicSupplyChangeBody, NamespaceKind, OperationRestrictionBody, RegisterNamespaceBody,
    RestrictionAction, RestrictionModification, RestrictionType, TargetedMetadataBody,
    TransactionBody, TransferBody, EMBEDDED_HEADER_SIZE,
};
use crate::deadline::Deadline;
use crate::message::Message;
use crate::mosaic::{Mosaic, MosaicProperties, SupplyDirection};
use crate::transaction::{Transaction, TransactionHeader, TRANSACTION_HEADER_SIZE};
use crate::version::TransactionVersion;
use crate::{EntityType, TransactionError};

// ---------------------------------------------------------------------------
// Encoding
// ---------------------------------------------------------------------------

fn check_count(count: usize, what: &str) -> Result<u8, TransactionError> {
    u8::try_from(count)
        .map_err(|_| TransactionError::Range(format!("{} count {} exceeds 255", what, count)))
}

fn check_u16_len(len: usize, what: &str) -> Result<u16, TransactionError> {
    u16::try_from(len).map_err(|_| {
        TransactionError::Range(format!("{} length {} exceeds {}", what, len, u16::MAX))
    })
}

/// Append a body's wire form to the writer.
pub(crate) fn write_body(
    body: &TransactionBody,
    writer: &mut WireWriter,
) -> Result<(), TransactionError> {
    match body {
        TransactionBody::Transfer(body) => {
            writer.write_bytes(&body.recipient.to_bytes());
            writer.write_u16_le(check_u16_len(body.message.wire_size(), "message")?);
            writer.write_u8(check_count(body.mosaics.len(), "mosaic")?);
            writer.write_u8(body.message.message_type);
            writer.write_bytes(&body.message.payload);
            for mosaic in &body.mosaics {
                writer.write_u64_le(mosaic.id);
                writer.write_u64_le(mosaic.amount);
            }
        }
        TransactionBody::RegisterNamespace(body) => {
            writer.write_u8(body.kind.type_byte());
            writer.write_u64_le(body.kind.wire_value());
            writer.write_u64_le(body.namespace_id);
            writer.write_u8(check_count(body.name.len(), "namespace name byte")?);
            writer.write_bytes(body.name.as_bytes());
        }
        TransactionBody::MosaicDefinition(body) => {
            writer.write_bytes(&body.nonce);
            writer.write_u64_le(body.mosaic_id);
            writer.write_u8(body.properties.optional_count());
            writer.write_u8(body.properties.flags());
            writer.write_u8(body.properties.divisibility);
            if let Some(duration) = body.properties.duration {
                writer.write_u8(MosaicProperties::duration_property_id());
                writer.write_u64_le(duration);
            }
        }
        TransactionBody::MosaicSupplyChange(body) => {
            writer.write_u64_le(body.mosaic_id);
            writer.write_u8(body.direction.value());
            writer.write_u64_le(body.delta);
        }
        TransactionBody::AddressAlias(body) => {
            writer.write_u8(body.action.value());
            writer.write_u64_le(body.namespace_id);
            writer.write_bytes(body.address.as_bytes());
        }
        TransactionBody::MosaicAlias(body) => {
            writer.write_u8(body.action.value());
            writer.write_u64_le(body.namespace_id);
            writer.write_u64_le(body.mosaic_id);
        }
        TransactionBody::AddressRestriction(body) => {
            writer.write_u8(body.restriction_type.value());
            writer.write_u8(check_count(body.modifications.len(), "modification")?);
            for modification in &body.modifications {
                writer.write_u8(modification.action.value());
                writer.write_bytes(modification.value.as_bytes());
            }
        }
        TransactionBody::MosaicRestriction(body) => {
            writer.write_u8(body.restriction_type.value());
            writer.write_u8(check_count(body.modifications.len(), "modification")?);
            for modification in &body.modifications {
                writer.write_u8(modification.action.value());
                writer.write_u64_le(modification.value);
            }
        }
        TransactionBody::OperationRestriction(body) => {
            writer.write_u8(body.restriction_type.value());
            writer.write_u8(check_count(body.modifications.len(), "modification")?);
            for modification in &body.modifications {
                writer.write_u8(modification.action.value());
                writer.write_u16_le(modification.value.value());
            }
        }
        TransactionBody::AccountMetadata(body) => {
            writer.write_bytes(body.target_key.as_bytes());
            writer.write_u64_le(body.scoped_key);
            writer.write_u16_le(body.value_size_delta as u16);
            writer.write_u16_le(check_u16_len(body.value.len(), "metadata value")?);
            writer.write_bytes(&body.value);
        }
        TransactionBody::MosaicMetadata(body) | TransactionBody::NamespaceMetadata(body) => {
            writer.write_bytes(body.target_key.as_bytes());
            writer.write_u64_le(body.scoped_key);
            writer.write_u64_le(body.target_id);
            writer.write_u16_le(body.value_size_delta as u16);
            writer.write_u16_le(check_u16_len(body.value.len(), "metadata value")?);
            writer.write_bytes(&body.value);
        }
        TransactionBody::AddHarvester(body) | TransactionBody::RemoveHarvester(body) => {
            writer.write_bytes(body.harvester_key.as_bytes());
        }
        TransactionBody::CreateLiquidityProvider(body) => {
            writer.write_u64_le(body.provider_mosaic_id);
            writer.write_u64_le(body.currency_deposit);
            writer.write_u64_le(body.initial_mosaics_minting);
            writer.write_u32_le(body.slashing_period);
            writer.write_u16_le(body.window_size);
            writer.write_bytes(body.slashing_account.as_bytes());
            writer.write_u32_le(body.alpha);
            writer.write_u32_le(body.beta);
        }
        TransactionBody::ManualRateChange(body) => {
            writer.write_u64_le(body.provider_mosaic_id);
            writer.write_u8(body.currency_balance_increase as u8);
            writer.write_u64_le(body.currency_balance_change);
            writer.write_u8(body.mosaic_balance_increase as u8);
            writer.write_u64_le(body.mosaic_balance_change);
        }
        TransactionBody::Aggregate(body) => {
            let payload_size: u32 = body.inner.iter().map(|tx| tx.size()).sum();
            writer.write_u32_le(payload_size);
            for inner in &body.inner {
                write_embedded(inner, writer)?;
            }
        }
    }
    Ok(())
}

/// Serialize the region a signature covers: version, type, fee, deadline,
/// body — the payload from byte 100 onward.
pub(crate) fn signing_data(
    version: TransactionVersion,
    entity_type: EntityType,
    max_fee: u64,
    deadline: Deadline,
    body: &TransactionBody,
) -> Result<Vec<u8>, TransactionError> {
    let mut writer = WireWriter::with_capacity(22 + body.size() as usize);
    writer.write_u32_le(version.to_u32());
    writer.write_u16_le(entity_type.value());
    writer.write_u64_le(max_fee);
    writer.write_u64_le(deadline.value());
    write_body(body, &mut writer)?;
    Ok(writer.into_bytes())
}

/// Serialize a full payload; a missing signature or signer is zero-filled.
pub(crate) fn to_payload_bytes(tx: &Transaction) -> Result<Vec<u8>, TransactionError> {
    let mut writer = WireWriter::with_capacity(tx.size() as usize);
    writer.write_u32_le(tx.size());
    match &tx.header.signature {
        Some(signature) => writer.write_bytes(signature.as_bytes()),
        None => writer.write_bytes(&[0u8; 64]),
    }
    match &tx.header.signer {
        Some(signer) => writer.write_bytes(signer.public_key().as_bytes()),
        None => writer.write_bytes(&[0u8; 32]),
    }
    writer.write_bytes(&signing_data(
        tx.header.version,
        tx.entity_type(),
        tx.header.max_fee,
        tx.header.deadline,
        &tx.body,
    )?);

    let bytes = writer.into_bytes();
    debug_assert_eq!(bytes.len(), tx.size() as usize);
    Ok(bytes)
}

fn write_embedded(
    tx: &EmbeddedTransaction,
    writer: &mut WireWriter,
) -> Result<(), TransactionError> {
    writer.write_u32_le(tx.size());
    writer.write_bytes(tx.signer.public_key().as_bytes());
    writer.write_u32_le(tx.version.to_u32());
    writer.write_u16_le(tx.entity_type().value());
    write_body(&tx.body, writer)
}

// ---------------------------------------------------------------------------
// Decoding
// ---------------------------------------------------------------------------

fn read_recipient(reader: &mut WireReader) -> Result<Recipient, TransactionError> {
    Ok(Recipient::from_bytes(reader.read_bytes(25)?)?)
}

fn read_address(reader: &mut WireReader) -> Result<Address, TransactionError> {
    Ok(Address::from_decoded(reader.read_bytes(25)?)?)
}

fn read_public_key(reader: &mut WireReader) -> Result<PublicKey, TransactionError> {
    Ok(PublicKey::from_bytes(reader.read_bytes(32)?)?)
}

/// Parse a body of the given kind from the reader.
fn read_body(
    entity_type: EntityType,
    reader: &mut WireReader,
) -> Result<TransactionBody, TransactionError> {
    let body = match entity_type {
        EntityType::Transfer => {
            let recipient = read_recipient(reader)?;
            let message_size = reader.read_u16_le()?;
            if message_size == 0 {
                return Err(TransactionError::MalformedPayload(
                    "message size must include the type byte".to_string(),
                ));
            }
            let mosaic_count = reader.read_u8()?;
            let message_type = reader.read_u8()?;
            let payload = reader.read_bytes(message_size as usize - 1)?.to_vec();
            let mut mosaics = Vec::with_capacity(mosaic_count as usize);
            for _ in 0..mosaic_count {
                let id = reader.read_u64_le()?;
                let amount = reader.read_u64_le()?;
                mosaics.push(Mosaic::new(id, amount));
            }
            TransactionBody::Transfer(TransferBody {
                recipient,
                mosaics,
                message: Message {
                    message_type,
                    payload,
                },
            })
        }
        EntityType::RegisterNamespace => {
            let type_byte = reader.read_u8()?;
            let wire_value = reader.read_u64_le()?;
            let namespace_id = reader.read_u64_le()?;
            let name_size = reader.read_u8()?;
            let name = String::from_utf8(reader.read_bytes(name_size as usize)?.to_vec())
                .map_err(|_| {
                    TransactionError::MalformedPayload("namespace name is not UTF-8".to_string())
                })?;
            let kind = match type_byte {
                0 => NamespaceKind::Root {
                    duration: wire_value,
                },
                1 => NamespaceKind::Sub {
                    parent_id: wire_value,
                },
                other => {
                    return Err(TransactionError::MalformedPayload(format!(
                        "unknown namespace type: {}",
                        other
                    )))
                }
            };
            TransactionBody::RegisterNamespace(RegisterNamespaceBody {
                kind,
                namespace_id,
                name,
            })
        }
        EntityType::MosaicDefinition => {
            let nonce = reader.read_array::<4>()?;
            let mosaic_id = reader.read_u64_le()?;
            let optional_count = reader.read_u8()?;
            let flags = reader.read_u8()?;
            let divisibility = reader.read_u8()?;
            let mut duration = None;
            for _ in 0..optional_count {
                let property_id = reader.read_u8()?;
                let value = reader.read_u64_le()?;
                if property_id == MosaicProperties::duration_property_id() {
                    duration = Some(value);
                } else {
                    return Err(TransactionError::MalformedPayload(format!(
                        "unknown optional mosaic property: {}",
                        property_id
                    )));
                }
            }
            TransactionBody::MosaicDefinition(MosaicDefinitionBody {
                nonce,
                mosaic_id,
                properties: MosaicProperties::from_flags(flags, divisibility, duration),
            })
        }
        EntityType::MosaicSupplyChange => {
            let mosaic_id = reader.read_u64_le()?;
            let direction = SupplyDirection::from_raw(reader.read_u8()?)?;
            let delta = reader.read_u64_le()?;
            TransactionBody::MosaicSupplyChange(MosaicSupplyChangeBody {
                mosaic_id,
                direction,
                delta,
            })
        }
        EntityType::AddressAlias => {
            let action = AliasAction::from_raw(reader.read_u8()?)?;
            let namespace_id = reader.read_u64_le()?;
            let address = read_address(reader)?;
            TransactionBody::AddressAlias(AddressAliasBody {
                action,
                namespace_id,
                address,
            })
        }
        EntityType::MosaicAlias => {
            let action = AliasAction::from_raw(reader.read_u8()?)?;
            let namespace_id = reader.read_u64_le()?;
            let mosaic_id = reader.read_u64_le()?;
            TransactionBody::MosaicAlias(MosaicAliasBody {
                action,
                namespace_id,
                mosaic_id,
            })
        }
        EntityType::AccountRestrictionAddress => {
            let restriction_type = RestrictionType::from_raw(reader.read_u8()?)?;
            let count = reader.read_u8()?;
            let mut modifications = Vec::with_capacity(count as usize);
            for _ in 0..count {
                let action = RestrictionAction::from_raw(reader.read_u8()?)?;
                let value = read_address(reader)?;
                modifications.push(RestrictionModification { action, value });
            }
            TransactionBody::AddressRestriction(AddressRestrictionBody {
                restriction_type,
                modifications,
            })
        }
        EntityType::AccountRestrictionMosaic => {
            let restriction_type = RestrictionType::from_raw(reader.read_u8()?)?;
            let count = reader.read_u8()?;
            let mut modifications = Vec::with_capacity(count as usize);
            for _ in 0..count {
                let action = RestrictionAction::from_raw(reader.read_u8()?)?;
                let value = reader.read_u64_le()?;
                modifications.push(RestrictionModification { action, value });
            }
            TransactionBody::MosaicRestriction(MosaicRestrictionBody {
                restriction_type,
                modifications,
            })
        }
        EntityType::AccountRestrictionOperation => {
            let restriction_type = RestrictionType::from_raw(reader.read_u8()?)?;
            let count = reader.read_u8()?;
            let mut modifications = Vec::with_capacity(count as usize);
            for _ in 0..count {
                let action = RestrictionAction::from_raw(reader.read_u8()?)?;
                let value = EntityType::from_raw(reader.read_u16_le()?)?;
                modifications.push(RestrictionModification { action, value });
            }
            TransactionBody::OperationRestriction(OperationRestrictionBody {
                restriction_type,
                modifications,
            })
        }
        EntityType::AccountMetadata => {
            let target_key = read_public_key(reader)?;
            let scoped_key = reader.read_u64_le()?;
            let value_size_delta = reader.read_u16_le()? as i16;
            let value_size = reader.read_u16_le()?;
            let value = reader.read_bytes(value_size as usize)?.to_vec();
            TransactionBody::AccountMetadata(AccountMetadataBody {
                target_key,
                scoped_key,
                value_size_delta,
                value,
            })
        }
        EntityType::MosaicMetadata | EntityType::NamespaceMetadata => {
            let target_key = read_public_key(reader)?;
            let scoped_key = reader.read_u64_le()?;
            let target_id = reader.read_u64_le()?;
            let value_size_delta = reader.read_u16_le()? as i16;
            let value_size = reader.read_u16_le()?;
            let value = reader.read_bytes(value_size as usize)?.to_vec();
            let body = TargetedMetadataBody {
                target_key,
                scoped_key,
                target_id,
                value_size_delta,
                value,
            };
            if entity_type == EntityType::MosaicMetadata {
                TransactionBody::MosaicMetadata(body)
            } else {
                TransactionBody::NamespaceMetadata(body)
            }
        }
        EntityType::AddHarvester | EntityType::RemoveHarvester => {
            let harvester_key = read_public_key(reader)?;
            let body = HarvesterBody { harvester_key };
            if entity_type == EntityType::AddHarvester {
                TransactionBody::AddHarvester(body)
            } else {
                TransactionBody::RemoveHarvester(body)
            }
        }
        EntityType::CreateLiquidityProvider => {
            TransactionBody::CreateLiquidityProvider(CreateLiquidityProviderBody {
                provider_mosaic_id: reader.read_u64_le()?,
                currency_deposit: reader.read_u64_le()?,
                initial_mosaics_minting: reader.read_u64_le()?,
                slashing_period: reader.read_u32_le()?,
                window_size: reader.read_u16_le()?,
                slashing_account: read_public_key(reader)?,
                alpha: reader.read_u32_le()?,
                beta: reader.read_u32_le()?,
            })
        }
        EntityType::ManualRateChange => {
            TransactionBody::ManualRateChange(ManualRateChangeBody {
                provider_mosaic_id: reader.read_u64_le()?,
                currency_balance_increase: reader.read_u8()? != 0,
                currency_balance_change: reader.read_u64_le()?,
                mosaic_balance_increase: reader.read_u8()? != 0,
                mosaic_balance_change: reader.read_u64_le()?,
            })
        }
        EntityType::AggregateComplete
        | EntityType::AggregateBonded
        | EntityType::AggregateCompleteV2
        | EntityType::AggregateBondedV2 => {
            let kind = AggregateKind::from_entity_type(entity_type)
                .expect("matched aggregate entity types only");
            let payload_size = reader.read_u32_le()? as usize;
            let end = reader.position() + payload_size;
            let mut inner = Vec::new();
            while reader.position() < end {
                inner.push(read_embedded(reader)?);
            }
            if reader.position() != end {
                return Err(TransactionError::MalformedPayload(
                    "aggregate payload size does not match its contents".to_string(),
                ));
            }
            TransactionBody::Aggregate(AggregateBody { kind, inner })
        }
    };
    Ok(body)
}

fn read_embedded(reader: &mut WireReader) -> Result<EmbeddedTransaction, TransactionError> {
    let size = reader.read_u32_le()?;
    if size < EMBEDDED_HEADER_SIZE {
        return Err(TransactionError::MalformedPayload(format!(
            "embedded transaction size {} is below the header size",
            size
        )));
    }
    let signer_key = read_public_key(reader)?;
    let version = TransactionVersion::from_u32(reader.read_u32_le()?)?;
    let entity_type = EntityType::from_raw(reader.read_u16_le()?)?;
    if entity_type.is_aggregate() {
        return Err(TransactionError::InvalidInnerTransaction(entity_type.name()));
    }

    let body_start = reader.position();
    let body = read_body(entity_type, reader)?;
    let consumed = (reader.position() - body_start) as u32;
    if consumed != size - EMBEDDED_HEADER_SIZE {
        return Err(TransactionError::MalformedPayload(format!(
            "embedded transaction body consumed {} bytes, header declared {}",
            consumed,
            size - EMBEDDED_HEADER_SIZE
        )));
    }

    let signer = signer_account(signer_key, version)?;
    Ok(EmbeddedTransaction {
        signer,
        version,
        body,
    })
}

/// Rebuild the signer's public account from its key and the version word.
fn signer_account(
    key: PublicKey,
    version: TransactionVersion,
) -> Result<PublicAccount, TransactionError> {
    let network = version.network();
    match version.scheme() {
        Some(scheme) => Ok(PublicAccount::from_public_key(key, network, scheme.tag())?),
        None => Ok(PublicAccount::from_public_key_unversioned(key, network)),
    }
}

/// Reconstruct a transaction from raw payload bytes.
pub(crate) fn from_payload_bytes(bytes: &[u8]) -> Result<Transaction, TransactionError> {
    if bytes.len() < TRANSACTION_HEADER_SIZE as usize {
        return Err(TransactionError::MalformedPayload(format!(
            "payload of {} bytes is below the {}-byte header",
            bytes.len(),
            TRANSACTION_HEADER_SIZE
        )));
    }

    let mut reader = WireReader::new(bytes);
    let declared_size = reader.read_u32_le()?;
    if declared_size as usize != bytes.len() {
        return Err(TransactionError::MalformedPayload(format!(
            "declared size {} does not match payload length {}",
            declared_size,
            bytes.len()
        )));
    }

    let signature_bytes = reader.read_array::<64>()?;
    let signer_bytes = reader.read_array::<32>()?;
    let version = TransactionVersion::from_u32(reader.read_u32_le()?)?;
    let entity_type = EntityType::from_raw(reader.read_u16_le()?)?;
    let max_fee = reader.read_u64_le()?;
    let deadline = Deadline::from_raw(reader.read_u64_le()?);

    let body = read_body(entity_type, &mut reader)?;
    if reader.remaining() != 0 {
        return Err(TransactionError::MalformedPayload(format!(
            "trailing {} bytes after transaction",
            reader.remaining()
        )));
    }

    let signature = if signature_bytes == [0u8; 64] {
        None
    } else {
        Some(Signature::from_bytes(&signature_bytes)?)
    };
    let signer = if signer_bytes == [0u8; 32] {
        None
    } else {
        Some(signer_account(PublicKey::from_bytes(&signer_bytes)?, version)?)
    };

    Ok(Transaction {
        header: TransactionHeader {
            version,
            deadline,
            max_fee,
            signature,
            signer,
            info: None,
        },
        body,
    })
}

/// Reconstruct a transaction from a hex payload.
pub(crate) fn from_payload(payload_hex: &str) -> Result<Transaction, TransactionError> {
    from_payload_bytes(&convert::hex_to_bytes(payload_hex)?)
}
