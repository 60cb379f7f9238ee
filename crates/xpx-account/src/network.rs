//! Network identifiers.
//!
//! Fixed single-byte values shared by the address codec and the transaction
//! version word. The table is closed; an unknown byte is an error, never a
//! default.

use crate::AccountError;

/// The networks a transaction or address can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum NetworkType {
    /// Public main network.
    MainNet = 0xB8,
    /// Public test network.
    TestNet = 0xA8,
    /// Private chain deployment.
    Private = 0xC8,
    /// Private chain test deployment.
    PrivateTest = 0xB0,
    /// Mijin managed network.
    Mijin = 0x60,
    /// Mijin managed test network.
    MijinTest = 0x90,
}

impl NetworkType {
    /// All known networks, in wire-value order.
    pub const ALL: [NetworkType; 6] = [
        NetworkType::Mijin,
        NetworkType::MijinTest,
        NetworkType::TestNet,
        NetworkType::PrivateTest,
        NetworkType::MainNet,
        NetworkType::Private,
    ];

    /// The single-byte wire value.
    pub fn value(&self) -> u8 {
        *self as u8
    }

    /// Look up a network by its wire byte.
    ///
    /// # Returns
    /// The network, or `AccountError::UnknownNetwork` for an unassigned byte.
    pub fn from_raw(value: u8) -> Result<Self, AccountError> {
        match value {
            0xB8 => Ok(NetworkType::MainNet),
            0xA8 => Ok(NetworkType::TestNet),
            0xC8 => Ok(NetworkType::Private),
            0xB0 => Ok(NetworkType::PrivateTest),
            0x60 => Ok(NetworkType::Mijin),
            0x90 => Ok(NetworkType::MijinTest),
            other => Err(AccountError::UnknownNetwork(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_values() {
        assert_eq!(NetworkType::MainNet.value(), 0xB8);
        assert_eq!(NetworkType::TestNet.value(), 0xA8);
        assert_eq!(NetworkType::Private.value(), 0xC8);
        assert_eq!(NetworkType::PrivateTest.value(), 0xB0);
        assert_eq!(NetworkType::Mijin.value(), 0x60);
        assert_eq!(NetworkType::MijinTest.value(), 0x90);
    }

    #[test]
    fn test_from_raw_roundtrip() {
        for network in NetworkType::ALL {
            assert_eq!(NetworkType::from_raw(network.value()).unwrap(), network);
        }
    }

    #[test]
    fn test_from_raw_unknown() {
        assert_eq!(
            NetworkType::from_raw(0x00).unwrap_err(),
            AccountError::UnknownNetwork(0x00)
        );
        assert!(NetworkType::from_raw(0x68).is_err());
    }
}
