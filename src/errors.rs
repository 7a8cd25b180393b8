use thiserror::Error;

/// Errors surfaced by hashing and verification.
///
/// A failed password check is not an error: `verify` returns `Ok(false)` for
/// a well-formed encoded hash whose digest does not match. Errors are
/// reserved for inputs the engine cannot act on at all.
#[derive(Debug, Error)]
pub enum HashError {
    /// The encoded string does not parse as an Argon2 hash in the expected
    /// format: wrong algorithm tag, missing `$`-separated segments, invalid
    /// or truncated base64, unknown version number.
    #[error("Decoding error: {0}")]
    Decoding(String),

    /// The engine rejected the cost parameters or input lengths (memory cost
    /// below the minimum for the lane count, salt or output length out of
    /// range).
    #[error("Invalid parameters: {0}")]
    InvalidParams(String),
}

impl From<argon2::Error> for HashError {
    fn from(err: argon2::Error) -> Self {
        match err {
            argon2::Error::AlgorithmInvalid
            | argon2::Error::B64Encoding(_)
            | argon2::Error::VersionInvalid => Self::Decoding(err.to_string()),
            other => Self::InvalidParams(other.to_string()),
        }
    }
}
