#![deny(missing_docs)]

//! Sirius Chain SDK - Complete codec and signing core.
//!
//! Re-exports all SDK components for convenient single-crate usage.

pub use xpx_account as account;
pub use xpx_crypto as crypto;
pub use xpx_primitives as primitives;
pub use xpx_transaction as transaction;
