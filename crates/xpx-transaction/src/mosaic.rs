//! Mosaic value types.

use crate::TransactionError;

/// Wire size of one mosaic entry in a transfer: id(8) + amount(8).
pub const MOSAIC_ENTRY_SIZE: usize = 16;

/// Maximum mosaic divisibility the network accepts.
pub const MAX_DIVISIBILITY: u8 = 6;

/// A quantity of a mosaic, as attached to a transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mosaic {
    /// The 64-bit mosaic id.
    pub id: u64,
    /// The amount in the mosaic's smallest units.
    pub amount: u64,
}

impl Mosaic {
    pub fn new(id: u64, amount: u64) -> Self {
        Mosaic { id, amount }
    }
}

/// Wire ids of the optional mosaic properties.
const PROPERTY_ID_DURATION: u8 = 2;

/// The configurable properties of a mosaic definition.
///
/// `supply_mutable` and `transferable` pack into the flags byte; `duration`
/// is the only optional property and costs 9 extra body bytes when present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MosaicProperties {
    pub supply_mutable: bool,
    pub transferable: bool,
    pub divisibility: u8,
    pub duration: Option<u64>,
}

impl MosaicProperties {
    /// Build validated properties.
    ///
    /// # Returns
    /// The properties, or `Range` if divisibility exceeds the network
    /// maximum of 6.
    pub fn new(
        supply_mutable: bool,
        transferable: bool,
        divisibility: u8,
        duration: Option<u64>,
    ) -> Result<Self, TransactionError> {
        if divisibility > MAX_DIVISIBILITY {
            return Err(TransactionError::Range(format!(
                "mosaic divisibility {} exceeds the maximum of {}",
                divisibility, MAX_DIVISIBILITY
            )));
        }
        Ok(MosaicProperties {
            supply_mutable,
            transferable,
            divisibility,
            duration,
        })
    }

    /// The packed flags byte.
    pub fn flags(&self) -> u8 {
        (self.supply_mutable as u8) | ((self.transferable as u8) << 1)
    }

    /// Rebuild properties from a decoded flags byte.
    pub fn from_flags(flags: u8, divisibility: u8, duration: Option<u64>) -> Self {
        MosaicProperties {
            supply_mutable: flags & 0x01 != 0,
            transferable: flags & 0x02 != 0,
            divisibility,
            duration,
        }
    }

    /// Count of optional properties present.
    pub fn optional_count(&self) -> u8 {
        self.duration.is_some() as u8
    }

    /// The wire id byte of the duration property.
    pub fn duration_property_id() -> u8 {
        PROPERTY_ID_DURATION
    }
}

/// Direction of a mosaic supply change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum SupplyDirection {
    Decrease = 0,
    Increase = 1,
}

impl SupplyDirection {
    pub fn value(&self) -> u8 {
        *self as u8
    }

    pub fn from_raw(value: u8) -> Result<Self, TransactionError> {
        match value {
            0 => Ok(SupplyDirection::Decrease),
            1 => Ok(SupplyDirection::Increase),
            other => Err(TransactionError::MalformedPayload(format!(
                "unknown supply change direction: {}",
                other
            ))),
        }
    }
}
