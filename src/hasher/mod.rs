//! Password hashing facade.
//! - Cost parameters and the recommended default template
//! - Raw and encoded result types
//! - Output sizing and assembly of the encoded form

pub mod core;
pub mod encoding;
pub mod params;
pub mod result;

pub use core::{DEFAULT_HASH_LEN, Hasher};
pub use encoding::encoded_len;
pub use params::SecurityParameters;
pub use result::{EncodedHash, RawHash};
