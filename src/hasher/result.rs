/// Raw digest produced by a hashing call. Owned by the caller; the facade
/// keeps nothing.
///
/// Comparing digests to check a password is the verifier's job (`verify`
/// compares in constant time); avoid `==` on raw digests in authentication
/// paths.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawHash {
    digest: Vec<u8>,
}

impl RawHash {
    pub(crate) fn new(digest: Vec<u8>) -> Self {
        Self { digest }
    }

    #[must_use]
    pub fn digest(&self) -> &[u8] {
        &self.digest
    }

    /// Digest as lowercase hex.
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(&self.digest)
    }

    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.digest
    }
}

/// Raw digest plus its self-describing encoded form.
///
/// The encoded string carries the variant, version, cost parameters, salt,
/// and digest; it is everything `verify` needs later. Store it verbatim.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedHash {
    raw: RawHash,
    encoded: String,
}

impl EncodedHash {
    pub(crate) fn new(raw: RawHash, encoded: String) -> Self {
        Self { raw, encoded }
    }

    #[must_use]
    pub fn digest(&self) -> &[u8] {
        self.raw.digest()
    }

    #[must_use]
    pub fn encoded(&self) -> &str {
        &self.encoded
    }

    /// Digest as lowercase hex.
    #[must_use]
    pub fn to_hex(&self) -> String {
        self.raw.to_hex()
    }

    #[must_use]
    pub fn into_parts(self) -> (RawHash, String) {
        (self.raw, self.encoded)
    }
}
