//! bcrypt hashing used by the application's login flow.

use bcrypt::{hash, verify};

use crate::error::AdminError;

/// Work factor the application uses for stored password hashes.
pub const BCRYPT_COST: u32 = 12;

/// Number of hash characters shown in diagnostics.
pub const HASH_PREVIEW_LEN: usize = 20;

/// Hash `password` with a fresh salt at [`BCRYPT_COST`].
pub fn hash_password(password: &str) -> Result<String, AdminError> {
    hash_password_with_cost(password, BCRYPT_COST)
}

pub fn hash_password_with_cost(password: &str, cost: u32) -> Result<String, AdminError> {
    Ok(hash(password, cost)?)
}

/// Check `password` against a stored bcrypt hash.
///
/// A malformed hash is an error, not a mismatch.
pub fn verify_password(password: &str, stored_hash: &str) -> Result<bool, AdminError> {
    Ok(verify(password, stored_hash)?)
}

/// First [`HASH_PREVIEW_LEN`] characters of `hash`, never splitting a
/// multi-byte character.
pub fn hash_preview(hash: &str) -> &str {
    match hash.char_indices().nth(HASH_PREVIEW_LEN) {
        Some((idx, _)) => &hash[..idx],
        None => hash,
    }
}
