//! Address derivation, encoding, and validation.
//!
//! An address is 25 decoded bytes: one network byte, the 20-byte RIPEMD-160
//! condensation of the scheme hash of the public key, and a 4-byte checksum
//! over the first 21 bytes. The string form is 40 characters of unpadded
//! Base32, uppercase canonical; a dash-grouped "pretty" form exists purely
//! for display and is stripped on input, never serialized.

use std::fmt;

use xpx_crypto::{DerivationScheme, PublicKey};
use xpx_primitives::{base32, hash};

use crate::{AccountError, NetworkType};

/// Length of a decoded address in bytes.
pub const ADDRESS_DECODED_SIZE: usize = 25;
/// Length of an encoded address in characters.
pub const ADDRESS_ENCODED_SIZE: usize = 40;
/// Length of the trailing checksum in bytes.
pub const CHECKSUM_SIZE: usize = 4;

/// Marker byte for a namespace alias in an address-shaped recipient field.
/// The reserved high bit distinguishes it from every network byte.
const NAMESPACE_ALIAS_MARKER: u8 = 0x91;

/// The 32-byte digest used in address derivation for a scheme.
///
/// Legacy accounts hash with Keccak-256 (pre-migration compatibility);
/// current accounts hash with SHA3-256, the network-wide digest.
fn address_hash_256(scheme: DerivationScheme, data: &[u8]) -> [u8; 32] {
    match scheme {
        DerivationScheme::Ed25519Keccak => hash::keccak_256(data),
        DerivationScheme::Ed25519Sha2 => hash::sha3_256(data),
    }
}

// ---------------------------------------------------------------------------
// Address
// ---------------------------------------------------------------------------

/// A decoded 25-byte network address.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address {
    bytes: [u8; ADDRESS_DECODED_SIZE],
}

impl Address {
    /// Derive an address from a public key under the current scheme.
    ///
    /// # Arguments
    /// * `public_key` - The account's 32-byte public key.
    /// * `network` - The target network.
    pub fn from_public_key(public_key: &PublicKey, network: NetworkType) -> Self {
        Self::from_public_key_with_scheme(public_key, network, DerivationScheme::Ed25519Sha2)
    }

    /// Derive an address from a public key under an explicit scheme.
    ///
    /// Pipeline: scheme hash of the key, RIPEMD-160 of that digest, network
    /// byte prepended, first 4 bytes of the scheme hash of those 21 bytes
    /// appended as checksum.
    pub fn from_public_key_with_scheme(
        public_key: &PublicKey,
        network: NetworkType,
        scheme: DerivationScheme,
    ) -> Self {
        let key_digest = address_hash_256(scheme, public_key.as_bytes());
        let ripe = hash::ripemd160(&key_digest);

        let mut bytes = [0u8; ADDRESS_DECODED_SIZE];
        bytes[0] = network.value();
        bytes[1..21].copy_from_slice(&ripe);
        let checksum = address_hash_256(scheme, &bytes[..21]);
        bytes[21..].copy_from_slice(&checksum[..CHECKSUM_SIZE]);

        Address { bytes }
    }

    /// Parse an encoded address string.
    ///
    /// Accepts the dash-grouped pretty form; separators are stripped before
    /// the 40-character length check.
    ///
    /// # Returns
    /// The address, or `InvalidAddressLength` / a Base32 error.
    pub fn from_encoded(encoded: &str) -> Result<Self, AccountError> {
        let stripped: String = encoded.chars().filter(|&c| c != '-').collect();
        if stripped.len() != ADDRESS_ENCODED_SIZE {
            return Err(AccountError::InvalidAddressLength {
                got: stripped.len(),
            });
        }
        let decoded = base32::decode(&stripped)?;
        Self::from_decoded(&decoded)
    }

    /// Build an address from its 25 decoded bytes.
    ///
    /// # Returns
    /// The address, or `InvalidAddress` if the slice is not 25 bytes.
    pub fn from_decoded(decoded: &[u8]) -> Result<Self, AccountError> {
        let bytes: [u8; ADDRESS_DECODED_SIZE] = decoded.try_into().map_err(|_| {
            AccountError::InvalidAddress(format!(
                "decoded address must be {} bytes, got {}",
                ADDRESS_DECODED_SIZE,
                decoded.len()
            ))
        })?;
        Ok(Address { bytes })
    }

    /// The 25 decoded bytes.
    pub fn as_bytes(&self) -> &[u8; ADDRESS_DECODED_SIZE] {
        &self.bytes
    }

    /// The network this address belongs to.
    ///
    /// # Returns
    /// The network, or `UnknownNetwork` for a corrupt leading byte.
    pub fn network(&self) -> Result<NetworkType, AccountError> {
        NetworkType::from_raw(self.bytes[0])
    }

    /// The canonical 40-character uppercase Base32 form.
    pub fn encoded(&self) -> String {
        base32::encode(&self.bytes).expect("25 bytes is a whole number of base32 blocks")
    }

    /// The dash-grouped display form (groups of six characters).
    ///
    /// Display convenience only; no wire format ever carries this form.
    pub fn pretty(&self) -> String {
        let encoded = self.encoded();
        encoded
            .as_bytes()
            .chunks(6)
            .map(|chunk| std::str::from_utf8(chunk).expect("base32 output is ascii"))
            .collect::<Vec<_>>()
            .join("-")
    }

    /// Validate the checksum and network byte under the current scheme.
    pub fn is_valid(&self) -> bool {
        self.is_valid_with_scheme(DerivationScheme::Ed25519Sha2)
    }

    /// Validate the checksum and network byte under an explicit scheme.
    ///
    /// Recomputes the 4-byte checksum over the first 21 bytes and compares
    /// it to the stored tail; any single corrupted byte fails the check.
    pub fn is_valid_with_scheme(&self, scheme: DerivationScheme) -> bool {
        if NetworkType::from_raw(self.bytes[0]).is_err() {
            return false;
        }
        let checksum = address_hash_256(scheme, &self.bytes[..21]);
        checksum[..CHECKSUM_SIZE] == self.bytes[21..]
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.encoded())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.encoded())
    }
}

/// Validate an encoded address string under the given scheme.
///
/// Returns `false` for anything that does not strip/decode to 25 valid
/// bytes.
pub fn is_valid_encoded_address(encoded: &str, scheme: DerivationScheme) -> bool {
    match Address::from_encoded(encoded) {
        Ok(address) => address.is_valid_with_scheme(scheme),
        Err(_) => false,
    }
}

// ---------------------------------------------------------------------------
// Recipient
// ---------------------------------------------------------------------------

/// A 25-byte recipient field: either a concrete address or a namespace
/// alias to be resolved by the network.
///
/// The alias form is marked by a reserved byte (`0x91`, high bit set) that
/// no network identifier uses, followed by the 8-byte namespace id and zero
/// padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recipient {
    /// A concrete network address.
    Address(Address),
    /// A namespace id standing in for the address it is aliased to.
    NamespaceAlias(u64),
}

impl Recipient {
    /// Serialize to the 25-byte wire form.
    pub fn to_bytes(&self) -> [u8; ADDRESS_DECODED_SIZE] {
        match self {
            Recipient::Address(address) => *address.as_bytes(),
            Recipient::NamespaceAlias(namespace_id) => {
                let mut bytes = [0u8; ADDRESS_DECODED_SIZE];
                bytes[0] = NAMESPACE_ALIAS_MARKER;
                bytes[1..9].copy_from_slice(&namespace_id.to_le_bytes());
                bytes
            }
        }
    }

    /// Parse the 25-byte wire form.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, AccountError> {
        if bytes.len() != ADDRESS_DECODED_SIZE {
            return Err(AccountError::InvalidAddress(format!(
                "recipient must be {} bytes, got {}",
                ADDRESS_DECODED_SIZE,
                bytes.len()
            )));
        }
        if bytes[0] == NAMESPACE_ALIAS_MARKER {
            let mut id_bytes = [0u8; 8];
            id_bytes.copy_from_slice(&bytes[1..9]);
            Ok(Recipient::NamespaceAlias(u64::from_le_bytes(id_bytes)))
        } else {
            Ok(Recipient::Address(Address::from_decoded(bytes)?))
        }
    }
}

impl From<Address> for Recipient {
    fn from(address: Address) -> Self {
        Recipient::Address(address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_PUBLIC_KEY: &str =
        "C2F93346E27CE6AD1A9F8F5E3066F8326593A406BDF357ACB041E2F9AB402EFE";

    fn test_key() -> PublicKey {
        PublicKey::from_hex(TEST_PUBLIC_KEY).unwrap()
    }

    // -----------------------------------------------------------------------
    // Derivation
    // -----------------------------------------------------------------------

    #[test]
    fn test_from_public_key_mijin_test() {
        let address = Address::from_public_key(&test_key(), NetworkType::MijinTest);
        assert_eq!(address.encoded(), "SCTVW23D2MN5VE4AQ4TZIDZENGNOZXPRPRLIKCF2");
        assert_eq!(
            hex::encode_upper(address.as_bytes()),
            "90A75B6B63D31BDA93808727940F24699AECDDF17C568508BA"
        );
        assert!(address.is_valid());
    }

    #[test]
    fn test_from_public_key_network_changes_address() {
        let mijin = Address::from_public_key(&test_key(), NetworkType::MijinTest);
        let main = Address::from_public_key(&test_key(), NetworkType::MainNet);
        assert_ne!(mijin, main);
        assert_eq!(main.network().unwrap(), NetworkType::MainNet);
    }

    #[test]
    fn test_legacy_scheme_address() {
        // Legacy accounts hash the key with Keccak-256; same key, same
        // network, different address than the current scheme.
        let key = PublicKey::from_hex(
            "C5F54BA980FCBB657DBAAA42700539B207873E134D2375EFEAB5F1AB52F87844",
        )
        .unwrap();
        let address = Address::from_public_key_with_scheme(
            &key,
            NetworkType::MainNet,
            DerivationScheme::Ed25519Keccak,
        );
        assert_eq!(address.encoded(), "XDD2CT6LQLIYQ56KIXI3ENTM6EK3D44P5ITPFYGC");
        assert!(address.is_valid_with_scheme(DerivationScheme::Ed25519Keccak));
        assert!(!address.is_valid_with_scheme(DerivationScheme::Ed25519Sha2));
    }

    // -----------------------------------------------------------------------
    // Encoding
    // -----------------------------------------------------------------------

    #[test]
    fn test_encoded_roundtrip() {
        let address = Address::from_public_key(&test_key(), NetworkType::MijinTest);
        let parsed = Address::from_encoded(&address.encoded()).unwrap();
        assert_eq!(parsed, address);
    }

    #[test]
    fn test_pretty_form_strips_on_input() {
        let address = Address::from_public_key(&test_key(), NetworkType::MijinTest);
        let pretty = address.pretty();
        assert_eq!(pretty, "SCTVW2-3D2MN5-VE4AQ4-TZIDZE-NGNOZX-PRPRLI-KCF2");
        assert_eq!(Address::from_encoded(&pretty).unwrap(), address);
    }

    #[test]
    fn test_from_encoded_wrong_length() {
        // 33 characters; the error names the 40-character requirement.
        let err = Address::from_encoded("ZCTVW234AQ4TZIDZENGNOZXPRPSDRSFRF").unwrap_err();
        assert_eq!(err, AccountError::InvalidAddressLength { got: 33 });
        assert!(err.to_string().contains("40 characters"));
    }

    #[test]
    fn test_from_decoded_wrong_length() {
        assert!(matches!(
            Address::from_decoded(&[0x90; 24]),
            Err(AccountError::InvalidAddress(_))
        ));
    }

    // -----------------------------------------------------------------------
    // Validation
    // -----------------------------------------------------------------------

    #[test]
    fn test_corrupting_any_byte_invalidates() {
        let address = Address::from_public_key(&test_key(), NetworkType::MijinTest);
        for index in 0..ADDRESS_DECODED_SIZE {
            let mut corrupted = *address.as_bytes();
            corrupted[index] ^= 0x04;
            let corrupted = Address::from_decoded(&corrupted).unwrap();
            assert!(
                !corrupted.is_valid(),
                "corruption at byte {} went undetected",
                index
            );
        }
    }

    #[test]
    fn test_is_valid_encoded_address() {
        let address = Address::from_public_key(&test_key(), NetworkType::MijinTest);
        assert!(is_valid_encoded_address(
            &address.encoded(),
            DerivationScheme::Ed25519Sha2
        ));
        assert!(!is_valid_encoded_address(
            "SCTVW23D2MN5VE4AQ4TZIDZENGNOZXPRPRLIKCF3",
            DerivationScheme::Ed25519Sha2
        ));
        assert!(!is_valid_encoded_address("short", DerivationScheme::Ed25519Sha2));
    }

    #[test]
    fn test_unknown_network_byte_is_invalid() {
        let mut bytes = *Address::from_public_key(&test_key(), NetworkType::MijinTest).as_bytes();
        bytes[0] = 0x25;
        let address = Address::from_decoded(&bytes).unwrap();
        assert!(!address.is_valid());
        assert!(address.network().is_err());
    }

    // -----------------------------------------------------------------------
    // Recipient
    // -----------------------------------------------------------------------

    #[test]
    fn test_recipient_alias_layout() {
        let recipient = Recipient::NamespaceAlias(0x84B3_552D_375F_FA4B);
        let bytes = recipient.to_bytes();
        assert_eq!(bytes[0], 0x91);
        assert_eq!(&bytes[1..9], &0x84B3_552D_375F_FA4Bu64.to_le_bytes());
        assert_eq!(&bytes[9..], &[0u8; 16]);
        assert_eq!(Recipient::from_bytes(&bytes).unwrap(), recipient);
    }

    #[test]
    fn test_recipient_address_roundtrip() {
        let address = Address::from_public_key(&test_key(), NetworkType::MijinTest);
        let recipient = Recipient::from(address);
        let parsed = Recipient::from_bytes(&recipient.to_bytes()).unwrap();
        assert_eq!(parsed, recipient);
    }
}
