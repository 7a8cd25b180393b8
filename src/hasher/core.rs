//! The hashing facade: one instance carries one configuration and drives the
//! engine for every call made through it.

use argon2::password_hash::{Output, PasswordHash};
use zeroize::Zeroizing;

use crate::errors::HashError;
use crate::hasher::encoding;
use crate::hasher::params::SecurityParameters;
use crate::hasher::result::{EncodedHash, RawHash};
use crate::salt;
use crate::types::{Variant, Version};

/// Default length in bytes of produced digests.
pub const DEFAULT_HASH_LEN: usize = 16;

/// Facade over the Argon2 engine.
///
/// Holds the tuning for repeated calls: cost parameters, digest length,
/// variant, and version. Calls are independent request/response pairs; an
/// instance has no per-call state and is safe to share across threads. The
/// only process-wide state behind it is the lazily-seeded salt generator in
/// [`crate::salt`].
///
/// Hashing is intentionally expensive and runs synchronously on the calling
/// thread; bound the cost through [`SecurityParameters`] up front rather
/// than trying to interrupt a running call.
#[derive(Clone, Debug)]
pub struct Hasher {
    params: SecurityParameters,
    hash_len: usize,
    variant: Variant,
    version: Version,
}

impl Default for Hasher {
    /// Argon2i, version 0x13, official default costs, 16-byte digest.
    fn default() -> Self {
        Self::new(
            SecurityParameters::OFFICIAL_DEFAULT,
            DEFAULT_HASH_LEN,
            Variant::Argon2i,
            Version::V0x13,
        )
    }
}

impl Hasher {
    #[must_use]
    pub const fn new(
        params: SecurityParameters,
        hash_len: usize,
        variant: Variant,
        version: Version,
    ) -> Self {
        Self { params, hash_len, variant, version }
    }

    #[must_use]
    pub const fn params(&self) -> SecurityParameters {
        self.params
    }

    #[must_use]
    pub const fn hash_len(&self) -> usize {
        self.hash_len
    }

    #[must_use]
    pub const fn variant(&self) -> Variant {
        self.variant
    }

    #[must_use]
    pub const fn version(&self) -> Version {
        self.version
    }

    /// Hash `password` with a freshly generated 16-byte salt and return the
    /// digest together with its encoded form.
    ///
    /// The generated salt travels inside the encoded string; store that
    /// string verbatim, it is everything [`verify`](Self::verify) needs
    /// later. Non-deterministic across calls by construction.
    pub fn hash(&self, password: &[u8]) -> Result<EncodedHash, HashError> {
        self.hash_with_salt(password, &salt::generate_default())
    }

    /// Hash `password` with a caller-supplied salt and return the digest
    /// together with its encoded form.
    ///
    /// Deterministic: the same configuration, password, and salt always
    /// produce the same digest and the same encoded string.
    pub fn hash_with_salt(&self, password: &[u8], salt: &[u8]) -> Result<EncodedHash, HashError> {
        let params = self.engine_params()?;
        let digest = self.digest(params.clone(), password, salt)?;
        let capacity =
            encoding::encoded_len(&self.params, self.version, self.hash_len, salt.len());
        let encoded =
            encoding::encode_phc(self.variant, self.version, params, salt, &digest, capacity)?;
        Ok(EncodedHash::new(RawHash::new(digest), encoded))
    }

    /// Hash `password` with a freshly generated 16-byte salt and return only
    /// the digest.
    ///
    /// No encoded form is produced, so nothing ties the digest back to its
    /// salt or parameters; the caller is responsible for keeping those.
    pub fn hash_raw(&self, password: &[u8]) -> Result<RawHash, HashError> {
        self.hash_raw_with_salt(password, &salt::generate_default())
    }

    /// Hash `password` with a caller-supplied salt and return only the
    /// digest.
    pub fn hash_raw_with_salt(&self, password: &[u8], salt: &[u8]) -> Result<RawHash, HashError> {
        let params = self.engine_params()?;
        Ok(RawHash::new(self.digest(params, password, salt)?))
    }

    /// Check `password` against an encoded hash.
    ///
    /// The digest is re-derived from the parameters, salt, and digest length
    /// embedded in `encoded`, using this instance's configured variant; the
    /// comparison runs in constant time. Returns `Ok(true)` on an exact
    /// match and `Ok(false)` on a well-formed encoding whose digest differs.
    ///
    /// # Errors
    /// [`HashError::Decoding`] when `encoded` does not parse as the expected
    /// format (wrong algorithm tag, missing segments, bad base64, unknown
    /// version). A malformed input is never reported as a plain mismatch,
    /// since that would hide format and version incompatibilities.
    pub fn verify(&self, encoded: &str, password: &[u8]) -> Result<bool, HashError> {
        let parsed = PasswordHash::new(encoded).map_err(|e| {
            log::debug!("verify: encoded hash failed to parse: {e}");
            HashError::Decoding(e.to_string())
        })?;

        if parsed.algorithm != self.variant.algorithm().ident() {
            return Err(HashError::Decoding(format!(
                "algorithm tag {} does not match configured {}",
                parsed.algorithm,
                self.variant.tag()
            )));
        }
        let version = match parsed.version {
            None => Version::V0x10,
            Some(v) => Version::from_wire(v)
                .ok_or_else(|| HashError::Decoding(format!("unknown version {v}")))?,
        };
        let params = argon2::Params::try_from(&parsed)
            .map_err(|e| HashError::Decoding(e.to_string()))?;
        let salt = parsed
            .salt
            .ok_or_else(|| HashError::Decoding("missing salt segment".into()))?;
        let expected = parsed
            .hash
            .ok_or_else(|| HashError::Decoding("missing digest segment".into()))?;

        let mut salt_buf = [0u8; 64];
        let salt_bytes = salt
            .decode_b64(&mut salt_buf)
            .map_err(|e| HashError::Decoding(format!("salt segment: {e}")))?;

        let engine =
            argon2::Argon2::new(self.variant.algorithm(), version.engine(), params);
        let mut candidate = Zeroizing::new(vec![0u8; expected.len()]);
        engine.hash_password_into(password, salt_bytes, candidate.as_mut_slice())?;
        let candidate = Output::new(&candidate)
            .map_err(|e| HashError::Decoding(format!("digest segment: {e}")))?;
        Ok(candidate == expected)
    }

    fn engine_params(&self) -> Result<argon2::Params, HashError> {
        argon2::Params::new(
            self.params.m_cost_kib,
            self.params.t_cost,
            self.params.lanes,
            Some(self.hash_len),
        )
        .map_err(HashError::from)
    }

    fn digest(
        &self,
        params: argon2::Params,
        password: &[u8],
        salt: &[u8],
    ) -> Result<Vec<u8>, HashError> {
        let engine = argon2::Argon2::new(self.variant.algorithm(), self.version.engine(), params);
        let mut out = vec![0u8; self.hash_len];
        engine.hash_password_into(password, salt, &mut out)?;
        Ok(out)
    }
}
