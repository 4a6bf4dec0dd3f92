//! Per-pool bookkeeping: registry, settlement queue and fee ledger.

use crate::error::HookResult;
use crate::fee_ledger::FirstEpochFeeLedger;
use crate::oracle::FeeGrowthOracle;
use crate::registry::PositionRegistry;
use crate::settlement::{EpochSettlementQueue, SettlementReport, compute_first_epoch_fees};
use snipe_guard_domain::{Epoch, PoolId, PositionKey};
use tracing::debug;

/// All first-epoch state kept for one pool.
#[derive(Debug, Clone, Default)]
pub struct PoolBook {
    pub(crate) registry: PositionRegistry,
    pub(crate) queue: EpochSettlementQueue,
    pub(crate) fees: FirstEpochFeeLedger,
}

impl PoolBook {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn registry(&self) -> &PositionRegistry {
        &self.registry
    }

    #[must_use]
    pub fn queue(&self) -> &EpochSettlementQueue {
        &self.queue
    }

    #[must_use]
    pub fn fees(&self) -> &FirstEpochFeeLedger {
        &self.fees
    }

    /// Settles the previous epoch's positions if `current` has not been observed yet.
    ///
    /// All amounts are computed before any state is written, so an error leaves
    /// the book untouched. Returns `None` when the call is a no-op.
    pub fn observe(
        &mut self,
        oracle: &dyn FeeGrowthOracle,
        pool: PoolId,
        current: Epoch,
    ) -> HookResult<Option<SettlementReport>> {
        if !self.queue.needs_settlement(current) {
            debug!(pool = %pool, epoch = %current, "Epoch already observed");
            return Ok(None);
        }

        let settled = compute_first_epoch_fees(oracle, pool, &self.registry, self.queue.pending())?;
        for (key, amounts) in &settled {
            self.fees.record(*key, *amounts);
        }
        self.queue.mark_settled(current);

        debug!(
            pool = %pool,
            epoch = %current,
            positions = settled.len(),
            "Settled first-epoch fees"
        );
        Ok(Some(SettlementReport {
            epoch: current,
            settled,
        }))
    }

    /// Registers a new position in the open epoch. `current` must have been observed.
    pub fn open(&mut self, key: PositionKey, current: Epoch) -> HookResult<()> {
        self.registry.create(key, current)?;
        self.queue.enqueue(key);
        Ok(())
    }

    /// Clears every trace of `key`: record, queue membership and fee entry. Idempotent.
    pub fn destroy(&mut self, key: &PositionKey) {
        self.registry.destroy(key);
        self.queue.remove(key);
        self.fees.clear(key);
    }
}
