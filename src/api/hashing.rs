//! One-off hashing entry points using the default configuration.

use crate::errors::HashError;
use crate::hasher::{EncodedHash, Hasher};

/// Hash `password` with a generated salt using the default configuration
/// (argon2i, version 0x13, official default costs, 16-byte digest).
///
/// If you are unsure what to do and just want to hash a password, use this.
/// Store the returned encoded string; it carries the salt and parameters
/// that [`quick_verify`] needs.
pub fn quick_hash(password: &[u8]) -> Result<EncodedHash, HashError> {
    Hasher::default().hash(password)
}

/// Check `password` against an encoded hash using the default configuration.
pub fn quick_verify(encoded: &str, password: &[u8]) -> Result<bool, HashError> {
    Hasher::default().verify(encoded, password)
}
