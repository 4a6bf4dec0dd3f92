//! Isolated first-epoch fees per position.

use snipe_guard_domain::{FeeAmounts, PositionKey};
use std::collections::HashMap;

/// Fees attributed to positions during their creation epoch.
///
/// Written once by settlement, consumed once at withdrawal.
#[derive(Debug, Clone, Default)]
pub struct FirstEpochFeeLedger {
    entries: HashMap<PositionKey, FeeAmounts>,
}

impl FirstEpochFeeLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the settled amounts for `key`, overwriting any previous value.
    pub fn record(&mut self, key: PositionKey, amounts: FeeAmounts) {
        self.entries.insert(key, amounts);
    }

    /// Current amounts for `key`; zero if never settled.
    #[must_use]
    pub fn get(&self, key: &PositionKey) -> FeeAmounts {
        self.entries.get(key).copied().unwrap_or_default()
    }

    /// Returns the amounts for `key` and resets them to zero.
    pub fn consume_and_clear(&mut self, key: &PositionKey) -> FeeAmounts {
        self.entries.remove(key).unwrap_or_default()
    }

    pub fn clear(&mut self, key: &PositionKey) {
        self.entries.remove(key);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
