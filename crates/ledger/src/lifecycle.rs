//! Lock and withdrawal rules.
//!
//! A position moves through `Nonexistent -> Locked -> Unlockable -> Nonexistent`.
//! The `Locked -> Unlockable` step is purely a function of the current epoch.

use crate::config::GuardConfig;
use crate::error::{HookError, HookResult};
use crate::registry::PositionRegistry;
use crate::settlement::EpochSettlementQueue;
use serde::{Deserialize, Serialize};
use snipe_guard_domain::{Epoch, FeeAmounts, PositionKey, PositionPhase, PositionRecord};

/// What happened to a withdrawn position's first-epoch fees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RedirectOutcome {
    /// Donated to the liquidity remaining in the pool.
    DonatedToPool,
    /// The pool is empty, the fees stay with the withdrawer.
    ReturnedToOwner,
    /// No first-epoch fees were isolated for the position.
    NothingToRedirect,
}

/// Enforces creation capacity, lock duration and all-or-nothing withdrawal.
#[derive(Debug, Clone, Copy)]
pub struct LifecycleGuard {
    lock_duration: u64,
    capacity: usize,
}

impl LifecycleGuard {
    #[must_use]
    pub fn new(config: &GuardConfig) -> Self {
        Self {
            lock_duration: config.lock_duration_epochs(),
            capacity: config.same_epoch_capacity(),
        }
    }

    #[must_use]
    pub fn lock_duration(&self) -> u64 {
        self.lock_duration
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Preconditions for creating `key` in `current`, evaluated as if `current`
    /// had already been observed.
    pub fn check_creation(
        &self,
        registry: &PositionRegistry,
        queue: &EpochSettlementQueue,
        key: &PositionKey,
        current: Epoch,
    ) -> HookResult<()> {
        if registry.exists(key) {
            return Err(HookError::AlreadyExists { key: *key });
        }
        if queue.len_after_observe(current) >= self.capacity {
            return Err(HookError::TooManyPositionsInEpoch {
                epoch: current,
                capacity: self.capacity,
            });
        }
        Ok(())
    }

    /// Preconditions for removing `liquidity_delta` from a position holding `liquidity`.
    pub fn check_removal(
        &self,
        key: &PositionKey,
        record: Option<&PositionRecord>,
        liquidity: u128,
        liquidity_delta: i128,
        current: Epoch,
    ) -> HookResult<()> {
        let Some(record) = record else {
            return Err(HookError::PositionNotFound { key: *key });
        };

        let elapsed = record.age(current);
        if elapsed < self.lock_duration {
            return Err(HookError::PositionLocked {
                key: *key,
                elapsed,
                required: self.lock_duration,
            });
        }

        // Removals carry a negative delta whose magnitude must equal the full liquidity.
        if liquidity_delta >= 0 || liquidity_delta.unsigned_abs() != liquidity {
            return Err(HookError::PositionPartiallyWithdrawn {
                key: *key,
                requested: liquidity_delta,
                liquidity,
            });
        }
        Ok(())
    }

    /// Phase of a key at `current`.
    #[must_use]
    pub fn phase(&self, record: Option<&PositionRecord>, current: Epoch) -> PositionPhase {
        match record {
            None => PositionPhase::Nonexistent,
            Some(r) if r.age(current) < self.lock_duration => PositionPhase::Locked,
            Some(_) => PositionPhase::Unlockable,
        }
    }

    /// Where consumed first-epoch fees go, given the liquidity left in the pool.
    #[must_use]
    pub fn redirect_outcome(&self, consumed: FeeAmounts, remaining_liquidity: u128) -> RedirectOutcome {
        if consumed.is_zero() {
            RedirectOutcome::NothingToRedirect
        } else if remaining_liquidity > 0 {
            RedirectOutcome::DonatedToPool
        } else {
            RedirectOutcome::ReturnedToOwner
        }
    }
}
