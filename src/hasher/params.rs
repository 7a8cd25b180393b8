use serde::{Deserialize, Serialize};

/// Cost parameters for a hashing call: passes over memory, memory in KiB,
/// and lanes.
///
/// A plain value holder. Numeric ranges are validated by the engine when a
/// hash is computed, not here; the engine requires all three to be at least 1
/// and `m_cost_kib >= 8 * lanes`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityParameters {
    pub t_cost: u32,
    pub m_cost_kib: u32,
    pub lanes: u32,
}

impl SecurityParameters {
    /// The upstream project's recommended default: 3 passes over 4 MiB on a
    /// single lane.
    pub const OFFICIAL_DEFAULT: Self = Self { t_cost: 3, m_cost_kib: 1 << 12, lanes: 1 };

    #[must_use]
    pub const fn new(t_cost: u32, m_cost_kib: u32, lanes: u32) -> Self {
        Self { t_cost, m_cost_kib, lanes }
    }
}

impl Default for SecurityParameters {
    fn default() -> Self {
        Self::OFFICIAL_DEFAULT
    }
}
