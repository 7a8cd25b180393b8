use serde::{Deserialize, Serialize};

/// Argon2 family members.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Variant {
    /// Data-dependent memory addressing. Fastest, but open to cache-timing
    /// side channels; meant for cryptocurrencies and proof-of-work.
    Argon2d,
    /// Data-independent memory addressing; the password-hashing default here.
    Argon2i,
    /// Hybrid: first pass data-independent, the rest data-dependent.
    Argon2id,
}

impl Variant {
    /// Tag as it appears in the encoded form.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Argon2d => "argon2d",
            Self::Argon2i => "argon2i",
            Self::Argon2id => "argon2id",
        }
    }

    pub(crate) fn algorithm(self) -> argon2::Algorithm {
        match self {
            Self::Argon2d => argon2::Algorithm::Argon2d,
            Self::Argon2i => argon2::Algorithm::Argon2i,
            Self::Argon2id => argon2::Algorithm::Argon2id,
        }
    }
}

/// Algorithm wire versions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Version {
    /// Version 0x10. Encoded hashes of this version carry no `v=` segment;
    /// parsers treat its absence as 0x10.
    V0x10,
    /// Version 0x13, the current revision.
    V0x13,
}

impl Version {
    /// Numeric wire value (16 or 19) as it would appear in a `v=` segment.
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        match self {
            Self::V0x10 => 0x10,
            Self::V0x13 => 0x13,
        }
    }

    pub(crate) fn from_wire(value: u32) -> Option<Self> {
        match value {
            0x10 => Some(Self::V0x10),
            0x13 => Some(Self::V0x13),
            _ => None,
        }
    }

    pub(crate) fn engine(self) -> argon2::Version {
        match self {
            Self::V0x10 => argon2::Version::V0x10,
            Self::V0x13 => argon2::Version::V0x13,
        }
    }
}
