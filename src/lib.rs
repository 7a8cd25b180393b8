pub mod api;
pub mod errors;
pub mod hasher;
pub mod logger;
pub mod salt;
pub mod types;

pub use crate::api::{quick_hash, quick_verify};
pub use crate::errors::HashError;
pub use crate::hasher::{DEFAULT_HASH_LEN, EncodedHash, Hasher, RawHash, SecurityParameters};
pub use crate::types::{Variant, Version};
