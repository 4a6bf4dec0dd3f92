//! The first-epoch guard: per-pool lifecycle state behind the hook callbacks.

use crate::book::PoolBook;
use crate::config::GuardConfig;
use crate::error::{HookError, HookResult};
use crate::events::{EventLog, HookEvent, HookEventKind};
use crate::hooks::{AddLiquidityParams, FeeRedirect, LiquidityHooks, RemoveLiquidityParams};
use crate::lifecycle::{LifecycleGuard, RedirectOutcome};
use crate::oracle::FeeGrowthOracle;
use crate::settlement::SettlementReport;
use snipe_guard_domain::{Epoch, FeeAmounts, PoolId, PositionKey, PositionPhase};
use std::collections::HashMap;
use tracing::{info, warn};

/// Isolates the fees a position earns in its creation epoch and hands them to
/// the pool's remaining liquidity when the position is withdrawn.
///
/// One instance serves every pool attached to it; state is kept per pool.
#[derive(Debug, Clone)]
pub struct FirstEpochGuard {
    config: GuardConfig,
    lifecycle: LifecycleGuard,
    books: HashMap<PoolId, PoolBook>,
    events: EventLog,
}

impl FirstEpochGuard {
    /// Creates a guard with the given configuration.
    #[must_use]
    pub fn new(config: GuardConfig) -> Self {
        Self {
            lifecycle: LifecycleGuard::new(&config),
            config,
            books: HashMap::new(),
            events: EventLog::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &GuardConfig {
        &self.config
    }

    #[must_use]
    pub fn lock_duration(&self) -> u64 {
        self.lifecycle.lock_duration()
    }

    #[must_use]
    pub fn same_epoch_capacity(&self) -> usize {
        self.lifecycle.capacity()
    }

    /// Bookkeeping for `pool`, if the pool has seen any operation.
    #[must_use]
    pub fn book(&self, pool: PoolId) -> Option<&PoolBook> {
        self.books.get(&pool)
    }

    #[must_use]
    pub fn creation_epoch(&self, pool: PoolId, key: &PositionKey) -> Option<Epoch> {
        self.book(pool).and_then(|b| b.registry.creation_epoch(key))
    }

    #[must_use]
    pub fn first_epoch_fees(&self, pool: PoolId, key: &PositionKey) -> FeeAmounts {
        self.book(pool)
            .map(|b| b.fees.get(key))
            .unwrap_or_default()
    }

    #[must_use]
    pub fn position_phase(&self, pool: PoolId, key: &PositionKey, current: Epoch) -> PositionPhase {
        let record = self.book(pool).and_then(|b| b.registry.get(key));
        self.lifecycle.phase(record, current)
    }

    #[must_use]
    pub fn last_settled_epoch(&self, pool: PoolId) -> Option<Epoch> {
        self.book(pool).and_then(|b| b.queue.last_settled_epoch())
    }

    /// Positions created in the pool's open epoch and not yet settled.
    #[must_use]
    pub fn queued_positions(&self, pool: PoolId) -> &[PositionKey] {
        self.book(pool).map(|b| b.queue.pending()).unwrap_or(&[])
    }

    #[must_use]
    pub fn events(&self) -> &[HookEvent] {
        self.events.all()
    }

    pub fn events_for(&self, pool: PoolId) -> impl Iterator<Item = &HookEvent> {
        self.events.for_pool(pool)
    }

    pub fn drain_events(&mut self) -> Vec<HookEvent> {
        self.events.drain()
    }

    /// Epoch observation step run at the start of every pool operation.
    ///
    /// Settles the previous epoch's queue the first time a later epoch is seen;
    /// repeated calls within one epoch are no-ops.
    pub fn observe(
        &mut self,
        oracle: &dyn FeeGrowthOracle,
        pool: PoolId,
        current: Epoch,
    ) -> HookResult<()> {
        let report = self
            .books
            .entry(pool)
            .or_default()
            .observe(oracle, pool, current)?;
        if let Some(report) = report {
            self.record_settlement(pool, report);
        }
        Ok(())
    }

    fn record_settlement(&mut self, pool: PoolId, report: SettlementReport) {
        if report.settled.is_empty() {
            return;
        }
        self.events.push(HookEvent::new(
            pool,
            report.epoch,
            HookEventKind::EpochSettled {
                positions: report.settled.len(),
            },
        ));
        for (key, amounts) in report.settled {
            self.events.push(HookEvent::new(
                pool,
                report.epoch,
                HookEventKind::FirstEpochFeesSettled { key, amounts },
            ));
        }
    }
}

impl Default for FirstEpochGuard {
    fn default() -> Self {
        Self::new(GuardConfig::default())
    }
}

impl LiquidityHooks for FirstEpochGuard {
    fn before_add_liquidity(
        &mut self,
        oracle: &dyn FeeGrowthOracle,
        params: &AddLiquidityParams,
    ) -> HookResult<()> {
        let AddLiquidityParams {
            pool,
            key,
            current_epoch,
        } = *params;

        let empty = PoolBook::default();
        let book = self.books.get(&pool).unwrap_or(&empty);
        self.lifecycle
            .check_creation(&book.registry, &book.queue, &key, current_epoch)
            .inspect_err(|e| warn!(pool = %pool, key = %key, error = %e, "Add liquidity rejected"))?;

        self.observe(oracle, pool, current_epoch)?;
        self.books
            .entry(pool)
            .or_default()
            .open(key, current_epoch)?;

        self.events.push(HookEvent::new(
            pool,
            current_epoch,
            HookEventKind::PositionOpened {
                key,
                range: key.range,
            },
        ));
        info!(
            pool = %pool,
            key = %key,
            epoch = %current_epoch,
            "Position opened"
        );
        Ok(())
    }

    fn before_remove_liquidity(
        &mut self,
        oracle: &dyn FeeGrowthOracle,
        params: &RemoveLiquidityParams,
    ) -> HookResult<()> {
        let RemoveLiquidityParams {
            pool,
            key,
            liquidity_delta,
            current_epoch,
        } = *params;

        let liquidity = oracle.position_info(pool, &key).liquidity;
        let record = self
            .book(pool)
            .and_then(|b| b.registry.get(&key).copied());
        self.lifecycle
            .check_removal(&key, record.as_ref(), liquidity, liquidity_delta, current_epoch)
            .inspect_err(|e| {
                warn!(pool = %pool, key = %key, error = %e, "Remove liquidity rejected")
            })?;

        self.observe(oracle, pool, current_epoch)
    }

    fn after_remove_liquidity(
        &mut self,
        oracle: &mut dyn FeeGrowthOracle,
        params: &RemoveLiquidityParams,
    ) -> HookResult<FeeRedirect> {
        let RemoveLiquidityParams {
            pool,
            key,
            current_epoch,
            ..
        } = *params;

        // Peek only: the ledger entry is consumed once the donation has succeeded.
        let pending = match self.book(pool) {
            Some(book) if book.registry.exists(&key) => book.fees.get(&key),
            _ => return Err(HookError::PositionNotFound { key }),
        };

        let remaining = oracle.pool_liquidity(pool);
        let outcome = self.lifecycle.redirect_outcome(pending, remaining);
        if outcome == RedirectOutcome::DonatedToPool {
            oracle.donate(pool, pending)?;
        }

        let consumed = match self.books.get_mut(&pool) {
            Some(book) => {
                let consumed = book.fees.consume_and_clear(&key);
                book.destroy(&key);
                consumed
            }
            None => pending,
        };

        match outcome {
            RedirectOutcome::DonatedToPool => {
                self.events.push(HookEvent::new(
                    pool,
                    current_epoch,
                    HookEventKind::FeesRedirected {
                        key,
                        amounts: consumed,
                    },
                ));
                info!(
                    pool = %pool,
                    key = %key,
                    amount0 = consumed.amount0,
                    amount1 = consumed.amount1,
                    remaining_liquidity = remaining,
                    "First-epoch fees redirected to pool"
                );
            }
            RedirectOutcome::ReturnedToOwner => {
                self.events.push(HookEvent::new(
                    pool,
                    current_epoch,
                    HookEventKind::FeesReturned {
                        key,
                        amounts: consumed,
                    },
                ));
                info!(
                    pool = %pool,
                    key = %key,
                    amount0 = consumed.amount0,
                    amount1 = consumed.amount1,
                    "Pool empty, first-epoch fees returned to owner"
                );
            }
            RedirectOutcome::NothingToRedirect => {}
        }

        self.events.push(HookEvent::new(
            pool,
            current_epoch,
            HookEventKind::PositionClosed { key, outcome },
        ));
        info!(pool = %pool, key = %key, outcome = ?outcome, "Position closed");

        Ok(FeeRedirect {
            key,
            consumed,
            outcome,
        })
    }

    fn before_swap(
        &mut self,
        oracle: &dyn FeeGrowthOracle,
        pool: PoolId,
        current_epoch: Epoch,
    ) -> HookResult<()> {
        self.observe(oracle, pool, current_epoch)
    }

    fn before_donate(
        &mut self,
        oracle: &dyn FeeGrowthOracle,
        pool: PoolId,
        current_epoch: Epoch,
    ) -> HookResult<()> {
        self.observe(oracle, pool, current_epoch)
    }
}
