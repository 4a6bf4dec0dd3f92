use primitive_types::H256;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a pool, a 32-byte digest assigned by the AMM engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PoolId(pub H256);

impl PoolId {
    /// Convenience constructor used by fixtures and simulations.
    #[must_use]
    pub fn from_low_u64(v: u64) -> Self {
        Self(H256::from_low_u64_be(v))
    }
}

impl fmt::Display for PoolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}
