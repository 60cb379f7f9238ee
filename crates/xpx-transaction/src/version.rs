//! The 32-bit transaction version word.
//!
//! Packs the network identifier, the signer's derivation-scheme tag, and
//! the per-type numeric version into one little-endian u32:
//!
//! ```text
//! (network << 24) | (scheme_tag << 16) | version
//! ```
//!
//! Builders construct the word with scheme tag 0 (unsigned); signing and
//! embedding stamp the signer's tag. The packed form round-trips exactly.

use xpx_account::NetworkType;
use xpx_crypto::DerivationScheme;

use crate::TransactionError;

/// The composite network / scheme / version value of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransactionVersion {
    network: NetworkType,
    scheme_tag: u8,
    version: u8,
}

impl TransactionVersion {
    /// Create a version word with no scheme tag (unsigned transaction).
    pub fn new(network: NetworkType, version: u8) -> Self {
        TransactionVersion {
            network,
            scheme_tag: 0,
            version,
        }
    }

    /// Return a copy stamped with a derivation-scheme tag.
    pub fn with_scheme(self, scheme: DerivationScheme) -> Self {
        TransactionVersion {
            scheme_tag: scheme.tag(),
            ..self
        }
    }

    /// The network identifier.
    pub fn network(&self) -> NetworkType {
        self.network
    }

    /// The raw scheme tag (0 when unsigned).
    pub fn scheme_tag(&self) -> u8 {
        self.scheme_tag
    }

    /// The derivation scheme, if a known tag has been stamped.
    pub fn scheme(&self) -> Option<DerivationScheme> {
        DerivationScheme::from_tag(self.scheme_tag)
    }

    /// The per-type numeric version.
    pub fn version(&self) -> u8 {
        self.version
    }

    /// Pack into the 32-bit wire value.
    pub fn to_u32(&self) -> u32 {
        ((self.network.value() as u32) << 24)
            | ((self.scheme_tag as u32) << 16)
            | (self.version as u32)
    }

    /// Unpack a 32-bit wire value.
    ///
    /// # Returns
    /// The version, or a `MalformedPayload`/`UnknownNetwork` error if the
    /// reserved byte is set or the network byte is unassigned.
    pub fn from_u32(value: u32) -> Result<Self, TransactionError> {
        let reserved = (value >> 8) as u8;
        if reserved != 0 {
            return Err(TransactionError::MalformedPayload(format!(
                "reserved version byte is set: 0x{:02X}",
                reserved
            )));
        }
        let network = NetworkType::from_raw((value >> 24) as u8)?;
        Ok(TransactionVersion {
            network,
            scheme_tag: (value >> 16) as u8,
            version: value as u8,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packing() {
        let version = TransactionVersion::new(NetworkType::MijinTest, 3)
            .with_scheme(DerivationScheme::Ed25519Sha2);
        assert_eq!(version.to_u32(), 0x9002_0003);
    }

    #[test]
    fn test_roundtrip() {
        for network in NetworkType::ALL {
            for scheme in [DerivationScheme::Ed25519Keccak, DerivationScheme::Ed25519Sha2] {
                let version = TransactionVersion::new(network, 7).with_scheme(scheme);
                let unpacked = TransactionVersion::from_u32(version.to_u32()).unwrap();
                assert_eq!(unpacked, version);
                assert_eq!(unpacked.scheme(), Some(scheme));
            }
        }
    }

    #[test]
    fn test_unsigned_word_has_no_scheme() {
        let version = TransactionVersion::new(NetworkType::MainNet, 2);
        assert_eq!(version.scheme_tag(), 0);
        assert_eq!(version.scheme(), None);
        assert_eq!(
            TransactionVersion::from_u32(version.to_u32()).unwrap(),
            version
        );
    }

    #[test]
    fn test_reserved_byte_rejected() {
        assert!(matches!(
            TransactionVersion::from_u32(0x9002_0103),
            Err(TransactionError::MalformedPayload(_))
        ));
    }

    #[test]
    fn test_unknown_network_rejected() {
        assert!(TransactionVersion::from_u32(0x1102_0003).is_err());
    }
}
