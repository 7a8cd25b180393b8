//! Sizing and assembly of the encoded (PHC string) form.
//!
//! `$argon2<tag>$v=<version>$m=<m>,t=<t>,p=<p>$<b64 salt>$<b64 digest>`,
//! unpadded standard base64 throughout. Version 0x10 hashes carry no `v=`
//! segment; parsers read its absence as 0x10.

use std::fmt::Write as _;

use argon2::password_hash::{Output, ParamsString, PasswordHash, SaltString};

use crate::errors::HashError;
use crate::hasher::params::SecurityParameters;
use crate::types::{Variant, Version};

/// Fixed portion of the encoded form: the `$` separators, the algorithm tag,
/// the `m=`/`t=`/`p=` keys, plus 2 bytes of slack for base64 edge cases.
const ENCODED_BASE_LEN: usize = 25;

/// Upper bound, in bytes, for the encoded form of a hash with the given
/// shape.
///
/// This is a safety margin, not an exact count: it always covers what the
/// encoder emits, over-counting a little rather than chasing the grammar.
/// The facade reserves this many bytes for the encoded string up front.
#[must_use]
pub fn encoded_len(
    params: &SecurityParameters,
    version: Version,
    hash_len: usize,
    salt_len: usize,
) -> usize {
    let mut len = ENCODED_BASE_LEN;
    len += decimal_digits(version.as_u32());
    len += decimal_digits(params.m_cost_kib);
    len += decimal_digits(params.t_cost);
    len += decimal_digits(params.lanes);
    len += b64_len(salt_len);
    len += b64_len(hash_len);
    len
}

/// Unpadded base64 expansion of `n` input bytes.
#[inline]
fn b64_len(n: usize) -> usize {
    4 * n.div_ceil(3)
}

#[inline]
fn decimal_digits(mut value: u32) -> usize {
    let mut digits = 1;
    while value >= 10 {
        value /= 10;
        digits += 1;
    }
    digits
}

/// Assemble the encoded string for a finished digest, writing into a buffer
/// pre-sized to `capacity` bytes.
pub(crate) fn encode_phc(
    variant: Variant,
    version: Version,
    params: argon2::Params,
    salt: &[u8],
    digest: &[u8],
    capacity: usize,
) -> Result<String, HashError> {
    let salt_b64 = SaltString::encode_b64(salt)
        .map_err(|e| HashError::InvalidParams(format!("salt not encodable: {e}")))?;
    let params_string = ParamsString::try_from(params)
        .map_err(|e| HashError::InvalidParams(e.to_string()))?;
    let output = Output::new(digest)
        .map_err(|e| HashError::InvalidParams(format!("digest not encodable: {e}")))?;

    let phc = PasswordHash {
        algorithm: variant.algorithm().ident(),
        version: match version {
            Version::V0x10 => None,
            Version::V0x13 => Some(version.as_u32()),
        },
        params: params_string,
        salt: Some(salt_b64.as_salt()),
        hash: Some(output),
    };

    let mut encoded = String::with_capacity(capacity);
    let _ = write!(encoded, "{phc}");
    if encoded.len() > capacity {
        log::warn!("encoded hash outgrew its size estimate: {} > {capacity}", encoded.len());
    }
    Ok(encoded)
}
