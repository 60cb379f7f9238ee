//! Account types.
//!
//! A `PublicAccount` is the signer-side view other parties hold: a public
//! key, its derived address, and (when known) the account version that
//! selects the derivation scheme. An `Account` adds the private key and can
//! sign. Embedding a transaction into an aggregate requires the signer's
//! version to be known, so `version` is optional only on the public view.

use xpx_crypto::{DerivationScheme, KeyPair, PrivateKey, PublicKey};

use crate::{AccountError, Address, NetworkType};

// ---------------------------------------------------------------------------
// PublicAccount
// ---------------------------------------------------------------------------

/// A public key with its derived address and, when known, account version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublicAccount {
    public_key: PublicKey,
    address: Address,
    version: Option<u8>,
}

impl PublicAccount {
    /// Build a public account with a known version.
    ///
    /// The version selects the derivation scheme used for the address.
    pub fn from_public_key(
        public_key: PublicKey,
        network: NetworkType,
        version: u8,
    ) -> Result<Self, AccountError> {
        let scheme = DerivationScheme::for_account_version(version)?;
        let address = Address::from_public_key_with_scheme(&public_key, network, scheme);
        Ok(PublicAccount {
            public_key,
            address,
            version: Some(version),
        })
    }

    /// Build a public account whose version is not known (e.g. from a DTO
    /// that omits it). The address uses the current scheme.
    ///
    /// Such an account cannot be the signer of an embedded transaction.
    pub fn from_public_key_unversioned(
        public_key: PublicKey,
        network: NetworkType,
    ) -> Self {
        let address = Address::from_public_key(&public_key, network);
        PublicAccount {
            public_key,
            address,
            version: None,
        }
    }

    /// The account's public key.
    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    /// The derived address.
    pub fn address(&self) -> &Address {
        &self.address
    }

    /// The account version, if known.
    pub fn version(&self) -> Option<u8> {
        self.version
    }

    /// The derivation scheme, if the version is known.
    pub fn scheme(&self) -> Option<DerivationScheme> {
        self.version
            .and_then(|v| DerivationScheme::for_account_version(v).ok())
    }
}

// ---------------------------------------------------------------------------
// Account
// ---------------------------------------------------------------------------

/// A signing account: key pair plus public view.
#[derive(Debug)]
pub struct Account {
    key_pair: KeyPair,
    public_account: PublicAccount,
    version: u8,
}

impl Account {
    /// Create an account from a private key, version, and network.
    pub fn from_private_key(
        private_key: PrivateKey,
        version: u8,
        network: NetworkType,
    ) -> Result<Self, AccountError> {
        let scheme = DerivationScheme::for_account_version(version)?;
        let key_pair = KeyPair::from_private_key(private_key, scheme);
        let public_account =
            PublicAccount::from_public_key(*key_pair.public_key(), network, version)?;
        Ok(Account {
            key_pair,
            public_account,
            version,
        })
    }

    /// Create an account from a hex private key.
    pub fn from_hex_private_key(
        hex_str: &str,
        version: u8,
        network: NetworkType,
    ) -> Result<Self, AccountError> {
        Self::from_private_key(PrivateKey::from_hex(hex_str)?, version, network)
    }

    /// Generate a fresh random account.
    pub fn random(version: u8, network: NetworkType) -> Result<Self, AccountError> {
        Self::from_private_key(PrivateKey::random(), version, network)
    }

    /// The account's key pair (scheme-bound).
    pub fn key_pair(&self) -> &KeyPair {
        &self.key_pair
    }

    /// The public view of this account.
    pub fn public_account(&self) -> &PublicAccount {
        &self.public_account
    }

    /// The account's public key.
    pub fn public_key(&self) -> &PublicKey {
        self.key_pair.public_key()
    }

    /// The derived address.
    pub fn address(&self) -> &Address {
        self.public_account.address()
    }

    /// The account version.
    pub fn version(&self) -> u8 {
        self.version
    }

    /// The derivation scheme selected by the account version.
    pub fn scheme(&self) -> DerivationScheme {
        self.key_pair.scheme()
    }
}
