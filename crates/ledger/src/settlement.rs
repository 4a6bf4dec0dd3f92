//! Lazy batched settlement of first-epoch fees.
//!
//! Positions created in the open epoch are queued. The first operation observed
//! in any later epoch diffs each queued position's fee growth inside its range
//! against the value recorded at its creation, which yields exactly the growth
//! accrued during the creation epoch.

use crate::error::HookResult;
use crate::oracle::FeeGrowthOracle;
use crate::registry::PositionRegistry;
use snipe_guard_domain::math::fees_between;
use snipe_guard_domain::{Epoch, FeeAmounts, PoolId, PositionKey};

/// Positions created during the open epoch, plus the settlement cursor.
#[derive(Debug, Clone, Default)]
pub struct EpochSettlementQueue {
    pending: Vec<PositionKey>,
    last_settled: Option<Epoch>,
}

impl EpochSettlementQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether observing `current` triggers a settlement.
    #[must_use]
    pub fn needs_settlement(&self, current: Epoch) -> bool {
        self.last_settled.is_none_or(|last| current > last)
    }

    /// Queue length once `current` has been observed.
    #[must_use]
    pub fn len_after_observe(&self, current: Epoch) -> usize {
        if self.needs_settlement(current) {
            0
        } else {
            self.pending.len()
        }
    }

    /// Appends a position created in the open epoch.
    pub fn enqueue(&mut self, key: PositionKey) {
        self.pending.push(key);
    }

    /// Drops `key` from the open queue, returning whether it was queued.
    pub fn remove(&mut self, key: &PositionKey) -> bool {
        let before = self.pending.len();
        self.pending.retain(|k| k != key);
        self.pending.len() != before
    }

    /// Empties the queue and advances the cursor to `current`.
    pub fn mark_settled(&mut self, current: Epoch) {
        self.pending.clear();
        self.last_settled = Some(current);
    }

    #[must_use]
    pub fn pending(&self) -> &[PositionKey] {
        &self.pending
    }

    #[must_use]
    pub fn last_settled_epoch(&self) -> Option<Epoch> {
        self.last_settled
    }
}

/// Outcome of one settlement run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettlementReport {
    /// Epoch whose observation triggered the run.
    pub epoch: Epoch,
    /// First-epoch fees computed for each previously queued position.
    pub settled: Vec<(PositionKey, FeeAmounts)>,
}

/// Computes first-epoch fees for every queued position without mutating anything.
///
/// Keys without a live record are skipped.
pub fn compute_first_epoch_fees(
    oracle: &dyn FeeGrowthOracle,
    pool: PoolId,
    registry: &PositionRegistry,
    pending: &[PositionKey],
) -> HookResult<Vec<(PositionKey, FeeAmounts)>> {
    let mut settled = Vec::with_capacity(pending.len());
    for key in pending {
        let Some(record) = registry.get(key) else {
            continue;
        };
        let info = oracle.position_info(pool, key);
        let inside_now = oracle.fee_growth_inside(pool, record.range);
        let amounts = fees_between(inside_now, info.fee_growth_inside_last, info.liquidity)?;
        settled.push((*key, amounts));
    }
    Ok(settled)
}
