//! Deterministic mosaic and namespace id generation.
//!
//! Both identifiers are 64-bit values carved out of SHA3-256 digests.
//! Mosaic ids hash a 4-byte nonce with the owner's public key and clear
//! bit 63, so a mosaic id is always non-negative when read as a signed
//! value. Namespace ids chain over the dot-separated path segments,
//! starting from a fixed root parent of zero.

use xpx_crypto::PublicKey;
use xpx_primitives::hash;

use crate::AccountError;

/// Root parent id the namespace chain starts from.
pub const NAMESPACE_BASE_ID: u64 = 0;

/// Maximum number of levels in a namespace path.
pub const NAMESPACE_MAX_DEPTH: usize = 3;

/// Take the first 8 bytes of a digest as a little-endian u64.
fn id_from_digest(digest: [u8; 32]) -> u64 {
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    u64::from_le_bytes(bytes)
}

/// Derive a mosaic id from a nonce and the owner's public key.
///
/// SHA3-256 over nonce ‖ key; the first 8 digest bytes little-endian with
/// bit 63 cleared.
///
/// # Arguments
/// * `nonce` - The 4-byte mosaic nonce.
/// * `owner_public_key` - The creating account's public key.
pub fn generate_mosaic_id(nonce: [u8; 4], owner_public_key: &PublicKey) -> u64 {
    let mut input = Vec::with_capacity(4 + 32);
    input.extend_from_slice(&nonce);
    input.extend_from_slice(owner_public_key.as_bytes());
    id_from_digest(hash::sha3_256(&input)) & 0x7FFF_FFFF_FFFF_FFFF
}

/// Check a single namespace path segment against the name rules:
/// lowercase letters, digits, underscore, hyphen; must start with a letter
/// or digit.
fn is_valid_part_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_lowercase() || c.is_ascii_digit() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-')
}

/// Derive the id of one namespace level from its parent id and name.
fn generate_namespace_id(parent_id: u64, name: &str) -> u64 {
    let mut input = Vec::with_capacity(8 + name.len());
    input.extend_from_slice(&parent_id.to_le_bytes());
    input.extend_from_slice(name.as_bytes());
    id_from_digest(hash::sha3_256(&input))
}

/// Derive the full id path for a dot-separated namespace name.
///
/// # Arguments
/// * `name` - The namespace name, e.g. `"prx.xpx"`.
///
/// # Returns
/// Ids in root-to-leaf order, or `InvalidName` for an empty or malformed
/// name, or `NamespaceDepthExceeded` for more than 3 levels.
pub fn generate_namespace_path(name: &str) -> Result<Vec<u64>, AccountError> {
    if name.is_empty() {
        return Err(AccountError::InvalidName(
            "namespace name must not be empty".to_string(),
        ));
    }

    let parts: Vec<&str> = name.split('.').collect();
    if parts.len() > NAMESPACE_MAX_DEPTH {
        return Err(AccountError::NamespaceDepthExceeded(parts.len()));
    }

    let mut path = Vec::with_capacity(parts.len());
    let mut parent_id = NAMESPACE_BASE_ID;
    for part in parts {
        if !is_valid_part_name(part) {
            return Err(AccountError::InvalidName(format!(
                "invalid namespace part name: '{}'",
                part
            )));
        }
        parent_id = generate_namespace_id(parent_id, part);
        path.push(parent_id);
    }
    Ok(path)
}

/// The id of a namespace name (the last element of its path).
pub fn namespace_id(name: &str) -> Result<u64, AccountError> {
    let path = generate_namespace_path(name)?;
    Ok(*path.last().expect("path of a non-empty name is non-empty"))
}

/// The id of a child namespace under a parent, by full-path re-derivation.
pub fn sub_namespace_id(parent_name: &str, child_name: &str) -> Result<u64, AccountError> {
    namespace_id(&format!("{}.{}", parent_name, child_name))
}

/// The immediate parent id of a child namespace, by full-path re-derivation.
pub fn sub_namespace_parent_id(
    parent_name: &str,
    child_name: &str,
) -> Result<u64, AccountError> {
    let path = generate_namespace_path(&format!("{}.{}", parent_name, child_name))?;
    Ok(path[path.len() - 2])
}
