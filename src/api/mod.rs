// Submodules for clear separation of concerns
pub mod hashing;

// Re-export the public API surface from submodules for a stable facade
pub use hashing::{quick_hash, quick_verify};
