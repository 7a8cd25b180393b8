//! Process-wide salt generation.
//!
//! The generator is constructed on first use and shared for the rest of the
//! process. `OnceCell` guarantees exactly one construction even when the
//! first callers race, and every caller observes a fully-seeded generator.
//! Failure to read system entropy aborts the process; there is no meaningful
//! recovery from a machine that cannot produce randomness.

use once_cell::sync::OnceCell;
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// Length in bytes of generated salts.
pub const GENERATED_SALT_LEN: usize = 16;

static RNG: OnceCell<Mutex<StdRng>> = OnceCell::new();

fn rng() -> &'static Mutex<StdRng> {
    RNG.get_or_init(|| {
        log::debug!("seeding process-wide salt generator");
        Mutex::new(StdRng::from_os_rng())
    })
}

/// Fill `buf` with cryptographically secure random bytes.
pub fn fill(buf: &mut [u8]) {
    rng().lock().fill_bytes(buf);
}

/// Generate a salt of exactly `len` bytes.
#[must_use]
pub fn generate(len: usize) -> Vec<u8> {
    let mut salt = vec![0u8; len];
    fill(&mut salt);
    salt
}

/// Generate a salt of [`GENERATED_SALT_LEN`] bytes.
#[must_use]
pub fn generate_default() -> Vec<u8> {
    generate(GENERATED_SALT_LEN)
}

/// Whether the process-wide generator has been constructed yet.
///
/// Only tests need this; callers can rely on construction happening on
/// demand.
#[must_use]
pub fn is_initialized() -> bool {
    RNG.get().is_some()
}
