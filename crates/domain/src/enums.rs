use serde::{Deserialize, Serialize};

/// Lifecycle phase of a position key as seen by the lock rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PositionPhase {
    /// No live record for the key.
    Nonexistent,
    /// Live, but the lock duration has not elapsed yet.
    Locked,
    /// Live and eligible for a full withdrawal.
    Unlockable,
}
