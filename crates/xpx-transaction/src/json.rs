//! JSON projection of transactions.
//!
//! `to_json` and `from_dto` are exact inverses over the same envelope the
//! binary codec describes: 64-bit values as `[low, high]` word pairs, byte
//! fields as uppercase hex, field names matching the wire layout. The JSON
//! form and the binary form describe the same transaction unambiguously.

use serde_json::{json, Map, Value};

use xpx_account::{Address, PublicAccount, Recipient};
use xpx_crypto::{PublicKey, Signature};
use xpx_primitives::{convert, uint64};

use crate::body::{
    AccountMetadataBody, AddressAliasBody, AddressRestrictionBody, AggregateBody, AggregateKind,
    AliasAction, CreateLiquidityProviderBody, EmbeddedTransaction, HarvesterBody,
    ManualRateChangeBody, MosaicAliasBody, MosaicDefinitionBody, MosaicRestrictionBody,
    MosaicSupplyChangeBody, NamespaceKind, OperationRestrictionBody, RegisterNamespaceBody,
    RestrictionAction, RestrictionModification, RestrictionType, TargetedMetadataBody,
    TransactionBody, TransferBody,
};
use crate::deadline::Deadline;
use crate::message::Message;
use crate::mosaic::{Mosaic, MosaicProperties, SupplyDirection};
use crate::transaction::{Transaction, TransactionHeader, TransactionInfo};
use crate::version::TransactionVersion;
use crate::{EntityType, TransactionError};

// ---------------------------------------------------------------------------
// DTO helpers
// ---------------------------------------------------------------------------

fn u64_dto(value: u64) -> Value {
    let (low, high) = uint64::to_words(value);
    json!([low, high])
}

fn u64_from_dto(value: &Value, field: &str) -> Result<u64, TransactionError> {
    let words = value.as_array().ok_or_else(|| malformed(field, "a [low, high] pair"))?;
    if words.len() != 2 {
        return Err(malformed(field, "a [low, high] pair"));
    }
    let low = u32_from_value(&words[0], field)?;
    let high = u32_from_value(&words[1], field)?;
    Ok(uint64::from_words(low, high))
}

fn malformed(field: &str, expected: &str) -> TransactionError {
    TransactionError::MalformedPayload(format!("field '{}' must be {}", field, expected))
}

fn get<'a>(obj: &'a Map<String, Value>, field: &str) -> Result<&'a Value, TransactionError> {
    obj.get(field)
        .ok_or_else(|| TransactionError::MalformedPayload(format!("missing field '{}'", field)))
}

fn u32_from_value(value: &Value, field: &str) -> Result<u32, TransactionError> {
    value
        .as_u64()
        .and_then(|v| u32::try_from(v).ok())
        .ok_or_else(|| malformed(field, "a 32-bit unsigned integer"))
}

fn u8_from(obj: &Map<String, Value>, field: &str) -> Result<u8, TransactionError> {
    get(obj, field)?
        .as_u64()
        .and_then(|v| u8::try_from(v).ok())
        .ok_or_else(|| malformed(field, "an 8-bit unsigned integer"))
}

fn u16_from(obj: &Map<String, Value>, field: &str) -> Result<u16, TransactionError> {
    get(obj, field)?
        .as_u64()
        .and_then(|v| u16::try_from(v).ok())
        .ok_or_else(|| malformed(field, "a 16-bit unsigned integer"))
}

fn u32_from(obj: &Map<String, Value>, field: &str) -> Result<u32, TransactionError> {
    u32_from_value(get(obj, field)?, field)
}

fn u64_from(obj: &Map<String, Value>, field: &str) -> Result<u64, TransactionError> {
    u64_from_dto(get(obj, field)?, field)
}

fn str_from<'a>(obj: &'a Map<String, Value>, field: &str) -> Result<&'a str, TransactionError> {
    get(obj, field)?
        .as_str()
        .ok_or_else(|| malformed(field, "a string"))
}

fn bool_from(obj: &Map<String, Value>, field: &str) -> Result<bool, TransactionError> {
    get(obj, field)?
        .as_bool()
        .ok_or_else(|| malformed(field, "a boolean"))
}

fn bytes_from(obj: &Map<String, Value>, field: &str) -> Result<Vec<u8>, TransactionError> {
    Ok(convert::hex_to_bytes(str_from(obj, field)?)?)
}

fn public_key_from(obj: &Map<String, Value>, field: &str) -> Result<PublicKey, TransactionError> {
    Ok(PublicKey::from_hex(str_from(obj, field)?)?)
}

fn obj<'a>(value: &'a Value, what: &str) -> Result<&'a Map<String, Value>, TransactionError> {
    value
        .as_object()
        .ok_or_else(|| TransactionError::MalformedPayload(format!("{} must be an object", what)))
}

// ---------------------------------------------------------------------------
// Projection
// ---------------------------------------------------------------------------

/// Project a transaction to its JSON DTO.
pub(crate) fn to_json(tx: &Transaction) -> Value {
    let mut fields = common_fields(&tx.header, tx.entity_type());
    body_fields(&tx.body, &mut fields);

    let mut envelope = Map::new();
    envelope.insert("transaction".to_string(), Value::Object(fields));
    if let Some(info) = &tx.header.info {
        envelope.insert("transactionInfo".to_string(), info_to_json(info));
    }
    Value::Object(envelope)
}

fn common_fields(header: &TransactionHeader, entity_type: EntityType) -> Map<String, Value> {
    let mut fields = Map::new();
    fields.insert("type".to_string(), json!(entity_type.value()));
    fields.insert(
        "networkType".to_string(),
        json!(header.version.network().value()),
    );
    fields.insert("version".to_string(), json!(header.version.to_u32()));
    fields.insert("maxFee".to_string(), u64_dto(header.max_fee));
    fields.insert("deadline".to_string(), u64_dto(header.deadline.value()));
    if let Some(signature) = &header.signature {
        fields.insert("signature".to_string(), json!(signature.to_hex()));
    }
    if let Some(signer) = &header.signer {
        fields.insert("signer".to_string(), json!(signer.public_key().to_hex()));
    }
    fields
}

fn info_to_json(info: &TransactionInfo) -> Value {
    let mut fields = Map::new();
    fields.insert("height".to_string(), u64_dto(info.height));
    fields.insert("index".to_string(), json!(info.index));
    if let Some(hash) = &info.hash {
        fields.insert("hash".to_string(), json!(hash));
    }
    if let Some(merkle) = &info.merkle_component_hash {
        fields.insert("merkleComponentHash".to_string(), json!(merkle));
    }
    Value::Object(fields)
}

fn body_fields(body: &TransactionBody, fields: &mut Map<String, Value>) {
    match body {
        TransactionBody::Transfer(body) => {
            fields.insert(
                "recipient".to_string(),
                json!(convert::bytes_to_hex(&body.recipient.to_bytes())),
            );
            fields.insert(
                "mosaics".to_string(),
                Value::Array(
                    body.mosaics
                        .iter()
                        .map(|m| json!({ "id": u64_dto(m.id), "amount": u64_dto(m.amount) }))
                        .collect(),
                ),
            );
            fields.insert(
                "message".to_string(),
                json!({
                    "type": body.message.message_type,
                    "payload": convert::bytes_to_hex(&body.message.payload),
                }),
            );
        }
        TransactionBody::RegisterNamespace(body) => {
            fields.insert("namespaceType".to_string(), json!(body.kind.type_byte()));
            match body.kind {
                NamespaceKind::Root { duration } => {
                    fields.insert("duration".to_string(), u64_dto(duration));
                }
                NamespaceKind::Sub { parent_id } => {
                    fields.insert("parentId".to_string(), u64_dto(parent_id));
                }
            }
            fields.insert("namespaceId".to_string(), u64_dto(body.namespace_id));
            fields.insert("name".to_string(), json!(body.name));
        }
        TransactionBody::MosaicDefinition(body) => {
            fields.insert(
                "mosaicNonce".to_string(),
                json!(u32::from_le_bytes(body.nonce)),
            );
            fields.insert("mosaicId".to_string(), u64_dto(body.mosaic_id));
            fields.insert("flags".to_string(), json!(body.properties.flags()));
            fields.insert(
                "divisibility".to_string(),
                json!(body.properties.divisibility),
            );
            if let Some(duration) = body.properties.duration {
                fields.insert("duration".to_string(), u64_dto(duration));
            }
        }
        TransactionBody::MosaicSupplyChange(body) => {
            fields.insert("mosaicId".to_string(), u64_dto(body.mosaic_id));
            fields.insert("direction".to_string(), json!(body.direction.value()));
            fields.insert("delta".to_string(), u64_dto(body.delta));
        }
        TransactionBody::AddressAlias(body) => {
            fields.insert("aliasAction".to_string(), json!(body.action.value()));
            fields.insert("namespaceId".to_string(), u64_dto(body.namespace_id));
            fields.insert(
                "address".to_string(),
                json!(convert::bytes_to_hex(body.address.as_bytes())),
            );
        }
        TransactionBody::MosaicAlias(body) => {
            fields.insert("aliasAction".to_string(), json!(body.action.value()));
            fields.insert("namespaceId".to_string(), u64_dto(body.namespace_id));
            fields.insert("mosaicId".to_string(), u64_dto(body.mosaic_id));
        }
        TransactionBody::AddressRestriction(body) => {
            fields.insert(
                "restrictionType".to_string(),
                json!(body.restriction_type.value()),
            );
            fields.insert(
                "modifications".to_string(),
                Value::Array(
                    body.modifications
                        .iter()
                        .map(|m| {
                            json!({
                                "type": m.action.value(),
                                "value": convert::bytes_to_hex(m.value.as_bytes()),
                            })
                        })
                        .collect(),
                ),
            );
        }
        TransactionBody::MosaicRestriction(body) => {
            fields.insert(
                "restrictionType".to_string(),
                json!(body.restriction_type.value()),
            );
            fields.insert(
                "modifications".to_string(),
                Value::Array(
                    body.modifications
                        .iter()
                        .map(|m| json!({ "type": m.action.value(), "value": u64_dto(m.value) }))
                        .collect(),
                ),
            );
        }
        TransactionBody::OperationRestriction(body) => {
            fields.insert(
                "restrictionType".to_string(),
                json!(body.restriction_type.value()),
            );
            fields.insert(
                "modifications".to_string(),
                Value::Array(
                    body.modifications
                        .iter()
                        .map(|m| json!({ "type": m.action.value(), "value": m.value.value() }))
                        .collect(),
                ),
            );
        }
        TransactionBody::AccountMetadata(body) => {
            fields.insert("targetKey".to_string(), json!(body.target_key.to_hex()));
            fields.insert("scopedMetadataKey".to_string(), u64_dto(body.scoped_key));
            fields.insert("valueSizeDelta".to_string(), json!(body.value_size_delta));
            fields.insert(
                "value".to_string(),
                json!(convert::bytes_to_hex(&body.value)),
            );
        }
        TransactionBody::MosaicMetadata(body) | TransactionBody::NamespaceMetadata(body) => {
            fields.insert("targetKey".to_string(), json!(body.target_key.to_hex()));
            fields.insert("scopedMetadataKey".to_string(), u64_dto(body.scoped_key));
            fields.insert("targetId".to_string(), u64_dto(body.target_id));
            fields.insert("valueSizeDelta".to_string(), json!(body.value_size_delta));
            fields.insert(
                "value".to_string(),
                json!(convert::bytes_to_hex(&body.value)),
            );
        }
        TransactionBody::AddHarvester(body) | TransactionBody::RemoveHarvester(body) => {
            fields.insert(
                "harvesterKey".to_string(),
                json!(body.harvester_key.to_hex()),
            );
        }
        TransactionBody::CreateLiquidityProvider(body) => {
            fields.insert(
                "providerMosaicId".to_string(),
                u64_dto(body.provider_mosaic_id),
            );
            fields.insert(
                "currencyDeposit".to_string(),
                u64_dto(body.currency_deposit),
            );
            fields.insert(
                "initialMosaicsMinting".to_string(),
                u64_dto(body.initial_mosaics_minting),
            );
            fields.insert("slashingPeriod".to_string(), json!(body.slashing_period));
            fields.insert("windowSize".to_string(), json!(body.window_size));
            fields.insert(
                "slashingAccount".to_string(),
                json!(body.slashing_account.to_hex()),
            );
            fields.insert("alpha".to_string(), json!(body.alpha));
            fields.insert("beta".to_string(), json!(body.beta));
        }
        TransactionBody::ManualRateChange(body) => {
            fields.insert(
                "providerMosaicId".to_string(),
                u64_dto(body.provider_mosaic_id),
            );
            fields.insert(
                "currencyBalanceIncrease".to_string(),
                json!(body.currency_balance_increase),
            );
            fields.insert(
                "currencyBalanceChange".to_string(),
                u64_dto(body.currency_balance_change),
            );
            fields.insert(
                "mosaicBalanceIncrease".to_string(),
                json!(body.mosaic_balance_increase),
            );
            fields.insert(
                "mosaicBalanceChange".to_string(),
                u64_dto(body.mosaic_balance_change),
            );
        }
        TransactionBody::Aggregate(body) => {
            fields.insert(
                "transactions".to_string(),
                Value::Array(body.inner.iter().map(embedded_to_json).collect()),
            );
        }
    }
}

fn embedded_to_json(tx: &EmbeddedTransaction) -> Value {
    let mut fields = Map::new();
    fields.insert("type".to_string(), json!(tx.entity_type().value()));
    fields.insert(
        "networkType".to_string(),
        json!(tx.version.network().value()),
    );
    fields.insert("version".to_string(), json!(tx.version.to_u32()));
    fields.insert("signer".to_string(), json!(tx.signer.public_key().to_hex()));
    body_fields(&tx.body, &mut fields);
    json!({ "transaction": Value::Object(fields) })
}

// ---------------------------------------------------------------------------
// Reconstruction
// ---------------------------------------------------------------------------

/// Reconstruct a transaction from its JSON DTO.
pub(crate) fn from_dto(dto: &Value) -> Result<Transaction, TransactionError> {
    let envelope = obj(dto, "transaction DTO")?;
    let fields = obj(get(envelope, "transaction")?, "'transaction'")?;

    let entity_type = EntityType::from_raw(u16_from(fields, "type")?)?;
    let version = TransactionVersion::from_u32(u32_from(fields, "version")?)?;
    let network_byte = u8_from(fields, "networkType")?;
    if network_byte != version.network().value() {
        return Err(TransactionError::MalformedPayload(format!(
            "networkType 0x{:02X} disagrees with the version word's 0x{:02X}",
            network_byte,
            version.network().value()
        )));
    }
    let max_fee = u64_from(fields, "maxFee")?;
    let deadline = Deadline::from_raw(u64_from(fields, "deadline")?);

    let signature = match fields.get("signature") {
        Some(value) => Some(Signature::from_hex(
            value.as_str().ok_or_else(|| malformed("signature", "a hex string"))?,
        )?),
        None => None,
    };
    let signer = match fields.get("signer") {
        Some(value) => {
            let key = PublicKey::from_hex(
                value.as_str().ok_or_else(|| malformed("signer", "a hex string"))?,
            )?;
            Some(signer_from_version(key, version)?)
        }
        None => None,
    };

    let body = body_from_dto(entity_type, fields)?;

    let info = match envelope.get("transactionInfo") {
        Some(value) => Some(info_from_json(value)?),
        None => None,
    };

    Ok(Transaction {
        header: TransactionHeader {
            version,
            deadline,
            max_fee,
            signature,
            signer,
            info,
        },
        body,
    })
}

fn signer_from_version(
    key: PublicKey,
    version: TransactionVersion,
) -> Result<PublicAccount, TransactionError> {
    match version.scheme() {
        Some(scheme) => Ok(PublicAccount::from_public_key(
            key,
            version.network(),
            scheme.tag(),
        )?),
        None => Ok(PublicAccount::from_public_key_unversioned(
            key,
            version.network(),
        )),
    }
}

fn info_from_json(value: &Value) -> Result<TransactionInfo, TransactionError> {
    let fields = obj(value, "'transactionInfo'")?;
    Ok(TransactionInfo {
        height: u64_from(fields, "height")?,
        index: u32_from(fields, "index")?,
        hash: fields
            .get("hash")
            .and_then(|v| v.as_str())
            .map(str::to_string),
        merkle_component_hash: fields
            .get("merkleComponentHash")
            .and_then(|v| v.as_str())
            .map(str::to_string),
    })
}

fn recipient_from(fields: &Map<String, Value>) -> Result<Recipient, TransactionError> {
    Ok(Recipient::from_bytes(&bytes_from(fields, "recipient")?)?)
}

fn address_from(fields: &Map<String, Value>, field: &str) -> Result<Address, TransactionError> {
    Ok(Address::from_decoded(&bytes_from(fields, field)?)?)
}

fn i16_from(obj: &Map<String, Value>, field: &str) -> Result<i16, TransactionError> {
    get(obj, field)?
        .as_i64()
        .and_then(|v| i16::try_from(v).ok())
        .ok_or_else(|| malformed(field, "a 16-bit signed integer"))
}

fn modifications_from<'a>(
    fields: &'a Map<String, Value>,
) -> Result<Vec<(&'a Map<String, Value>, RestrictionAction)>, TransactionError> {
    let list = get(fields, "modifications")?
        .as_array()
        .ok_or_else(|| malformed("modifications", "an array"))?;
    let mut out = Vec::with_capacity(list.len());
    for item in list {
        let entry = obj(item, "'modifications' entry")?;
        let action = RestrictionAction::from_raw(u8_from(entry, "type")?)?;
        out.push((entry, action));
    }
    Ok(out)
}

fn body_from_dto(
    entity_type: EntityType,
    fields: &Map<String, Value>,
) -> Result<TransactionBody, TransactionError> {
    let body = match entity_type {
        EntityType::Transfer => {
            let recipient = recipient_from(fields)?;
            let mosaics_value = get(fields, "mosaics")?
                .as_array()
                .ok_or_else(|| malformed("mosaics", "an array"))?;
            let mut mosaics = Vec::with_capacity(mosaics_value.len());
            for item in mosaics_value {
                let entry = obj(item, "'mosaics' entry")?;
                mosaics.push(Mosaic::new(
                    u64_from(entry, "id")?,
                    u64_from(entry, "amount")?,
                ));
            }
            let message_fields = obj(get(fields, "message")?, "'message'")?;
            let message = Message {
                message_type: u8_from(message_fields, "type")?,
                payload: bytes_from(message_fields, "payload")?,
            };
            TransactionBody::Transfer(TransferBody {
                recipient,
                mosaics,
                message,
            })
        }
        EntityType::RegisterNamespace => {
            let kind = match u8_from(fields, "namespaceType")? {
                0 => NamespaceKind::Root {
                    duration: u64_from(fields, "duration")?,
                },
                1 => NamespaceKind::Sub {
                    parent_id: u64_from(fields, "parentId")?,
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
                namespace_id: u64_from(fields, "namespaceId")?,
                name: str_from(fields, "name")?.to_string(),
            })
        }
        EntityType::MosaicDefinition => {
            let duration = match fields.get("duration") {
                Some(value) => Some(u64_from_dto(value, "duration")?),
                None => None,
            };
            TransactionBody::MosaicDefinition(MosaicDefinitionBody {
                nonce: u32_from(fields, "mosaicNonce")?.to_le_bytes(),
                mosaic_id: u64_from(fields, "mosaicId")?,
                properties: MosaicProperties::from_flags(
                    u8_from(fields, "flags")?,
                    u8_from(fields, "divisibility")?,
                    duration,
                ),
            })
        }
        EntityType::MosaicSupplyChange => {
            TransactionBody::MosaicSupplyChange(MosaicSupplyChangeBody {
                mosaic_id: u64_from(fields, "mosaicId")?,
                direction: SupplyDirection::from_raw(u8_from(fields, "direction")?)?,
                delta: u64_from(fields, "delta")?,
            })
        }
        EntityType::AddressAlias => TransactionBody::AddressAlias(AddressAliasBody {
            action: AliasAction::from_raw(u8_from(fields, "aliasAction")?)?,
            namespace_id: u64_from(fields, "namespaceId")?,
            address: address_from(fields, "address")?,
        }),
        EntityType::MosaicAlias => TransactionBody::MosaicAlias(MosaicAliasBody {
            action: AliasAction::from_raw(u8_from(fields, "aliasAction")?)?,
            namespace_id: u64_from(fields, "namespaceId")?,
            mosaic_id: u64_from(fields, "mosaicId")?,
        }),
        EntityType::AccountRestrictionAddress => {
            let restriction_type = RestrictionType::from_raw(u8_from(fields, "restrictionType")?)?;
            let mut modifications = Vec::new();
            for (entry, action) in modifications_from(fields)? {
                modifications.push(RestrictionModification {
                    action,
                    value: address_from(entry, "value")?,
                });
            }
            TransactionBody::AddressRestriction(AddressRestrictionBody {
                restriction_type,
                modifications,
            })
        }
        EntityType::AccountRestrictionMosaic => {
            let restriction_type = RestrictionType::from_raw(u8_from(fields, "restrictionType")?)?;
            let mut modifications = Vec::new();
            for (entry, action) in modifications_from(fields)? {
                modifications.push(RestrictionModification {
                    action,
                    value: u64_from(entry, "value")?,
                });
            }
            TransactionBody::MosaicRestriction(MosaicRestrictionBody {
                restriction_type,
                modifications,
            })
        }
        EntityType::AccountRestrictionOperation => {
            let restriction_type = RestrictionType::from_raw(u8_from(fields, "restrictionType")?)?;
            let mut modifications = Vec::new();
            for (entry, action) in modifications_from(fields)? {
                modifications.push(RestrictionModification {
                    action,
                    value: EntityType::from_raw(u16_from(entry, "value")?)?,
                });
            }
            TransactionBody::OperationRestriction(OperationRestrictionBody {
                restriction_type,
                modifications,
            })
        }
        EntityType::AccountMetadata => TransactionBody::AccountMetadata(AccountMetadataBody {
            target_key: public_key_from(fields, "targetKey")?,
            scoped_key: u64_from(fields, "scopedMetadataKey")?,
            value_size_delta: i16_from(fields, "valueSizeDelta")?,
            value: bytes_from(fields, "value")?,
        }),
        EntityType::MosaicMetadata | EntityType::NamespaceMetadata => {
            let body = TargetedMetadataBody {
                target_key: public_key_from(fields, "targetKey")?,
                scoped_key: u64_from(fields, "scopedMetadataKey")?,
                target_id: u64_from(fields, "targetId")?,
                value_size_delta: i16_from(fields, "valueSizeDelta")?,
                value: bytes_from(fields, "value")?,
            };
            if entity_type == EntityType::MosaicMetadata {
                TransactionBody::MosaicMetadata(body)
            } else {
                TransactionBody::NamespaceMetadata(body)
            }
        }
        EntityType::AddHarvester | EntityType::RemoveHarvester => {
            let body = HarvesterBody {
                harvester_key: public_key_from(fields, "harvesterKey")?,
            };
            if entity_type == EntityType::AddHarvester {
                TransactionBody::AddHarvester(body)
            } else {
                TransactionBody::RemoveHarvester(body)
            }
        }
        EntityType::CreateLiquidityProvider => {
            TransactionBody::CreateLiquidityProvider(CreateLiquidityProviderBody {
                provider_mosaic_id: u64_from(fields, "providerMosaicId")?,
                currency_deposit: u64_from(fields, "currencyDeposit")?,
                initial_mosaics_minting: u64_from(fields, "initialMosaicsMinting")?,
                slashing_period: u32_from(fields, "slashingPeriod")?,
                window_size: u16_from(fields, "windowSize")?,
                slashing_account: public_key_from(fields, "slashingAccount")?,
                alpha: u32_from(fields, "alpha")?,
                beta: u32_from(fields, "beta")?,
            })
        }
        EntityType::ManualRateChange => TransactionBody::ManualRateChange(ManualRateChangeBody {
            provider_mosaic_id: u64_from(fields, "providerMosaicId")?,
            currency_balance_increase: bool_from(fields, "currencyBalanceIncrease")?,
            currency_balance_change: u64_from(fields, "currencyBalanceChange")?,
            mosaic_balance_increase: bool_from(fields, "mosaicBalanceIncrease")?,
            mosaic_balance_change: u64_from(fields, "mosaicBalanceChange")?,
        }),
        EntityType::AggregateComplete
        | EntityType::AggregateBonded
        | EntityType::AggregateCompleteV2
        | EntityType::AggregateBondedV2 => {
            let kind = AggregateKind::from_entity_type(entity_type)
                .expect("matched aggregate entity types only");
            let list = get(fields, "transactions")?
                .as_array()
                .ok_or_else(|| malformed("transactions", "an array"))?;
            let mut inner = Vec::with_capacity(list.len());
            for item in list {
                inner.push(embedded_from_json(item)?);
            }
            TransactionBody::Aggregate(AggregateBody { kind, inner })
        }
    };
    Ok(body)
}

fn embedded_from_json(value: &Value) -> Result<EmbeddedTransaction, TransactionError> {
    let envelope = obj(value, "embedded transaction DTO")?;
    let fields = obj(get(envelope, "transaction")?, "'transaction'")?;

    let entity_type = EntityType::from_raw(u16_from(fields, "type")?)?;
    if entity_type.is_aggregate() {
        return Err(TransactionError::InvalidInnerTransaction(entity_type.name()));
    }
    let version = TransactionVersion::from_u32(u32_from(fields, "version")?)?;
    let signer_key = public_key_from(fields, "signer")?;
    let signer = signer_from_version(signer_key, version)?;
    let body = body_from_dto(entity_type, fields)?;

    Ok(EmbeddedTransaction {
        signer,
        version,
        body,
    })
}
