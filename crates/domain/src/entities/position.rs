use crate::value_objects::{Epoch, TickRange};
use primitive_types::{H160, H256};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Account that owns liquidity positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Owner(pub H160);

impl Owner {
    #[must_use]
    pub fn from_low_u64(v: u64) -> Self {
        Self(H160::from_low_u64_be(v))
    }
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

/// Disambiguates several positions of one owner over the same range.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Salt(pub H256);

impl Salt {
    #[must_use]
    pub fn from_low_u64(v: u64) -> Self {
        Self(H256::from_low_u64_be(v))
    }
}

/// Stable identity of a liquidity position.
///
/// Two keys with equal fields denote the same position. A key may be reused
/// after the position is closed, which starts a fresh lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PositionKey {
    pub owner: Owner,
    pub range: TickRange,
    pub salt: Salt,
}

impl PositionKey {
    #[must_use]
    pub fn new(owner: Owner, range: TickRange, salt: Salt) -> Self {
        Self { owner, range, salt }
    }
}

impl fmt::Display for PositionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}#{:#x}", self.owner, self.range, self.salt.0)
    }
}

/// Bookkeeping attached to a live position.
///
/// Absence is represented by the caller holding no record (`Option::None`),
/// so every epoch number, zero included, is a valid creation epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionRecord {
    pub creation_epoch: Epoch,
    pub range: TickRange,
}

impl PositionRecord {
    #[must_use]
    pub fn new(creation_epoch: Epoch, range: TickRange) -> Self {
        Self {
            creation_epoch,
            range,
        }
    }

    /// Epochs elapsed between creation and `current`.
    #[must_use]
    pub fn age(&self, current: Epoch) -> u64 {
        current.elapsed_since(self.creation_epoch)
    }
}
