//! Operation dispatcher running pool operations through the lifecycle hooks.

use crate::clock::EpochClock;
use crate::engine::SimulatedAmm;
use crate::error::{EngineError, ManagerError};
use snipe_guard_domain::{Epoch, FeeAmounts, Owner, PoolId, PositionKey};
use snipe_guard_ledger::{
    AddLiquidityParams, LiquidityHooks, RedirectOutcome, RemoveLiquidityParams,
};
use tracing::{info, warn};

/// Result of a full withdrawal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Withdrawal {
    pub key: PositionKey,
    /// Principal liquidity returned.
    pub liquidity: u128,
    /// Fees the engine paid out on removal.
    pub fees_earned: FeeAmounts,
    /// Part of `fees_earned` taken back and donated to the pool.
    pub redirected: FeeAmounts,
    /// Fees the withdrawer keeps.
    pub net_fees: FeeAmounts,
    pub outcome: RedirectOutcome,
}

/// Drives a [`SimulatedAmm`] and calls the hooks around every operation.
///
/// `before_*` hooks run after the engine-side request has been validated and
/// before it is applied. A failing removal restores the pool's engine state.
#[derive(Debug, Clone)]
pub struct HookedPoolManager<H> {
    engine: SimulatedAmm,
    hooks: H,
    clock: EpochClock,
}

impl<H: LiquidityHooks> HookedPoolManager<H> {
    #[must_use]
    pub fn new(hooks: H) -> Self {
        Self {
            engine: SimulatedAmm::new(),
            hooks,
            clock: EpochClock::new(),
        }
    }

    #[must_use]
    pub fn with_clock(mut self, clock: EpochClock) -> Self {
        self.clock = clock;
        self
    }

    #[must_use]
    pub fn engine(&self) -> &SimulatedAmm {
        &self.engine
    }

    #[must_use]
    pub fn hooks(&self) -> &H {
        &self.hooks
    }

    #[must_use]
    pub fn current_epoch(&self) -> Epoch {
        self.clock.current()
    }

    pub fn advance_epoch(&mut self) -> Epoch {
        self.clock.advance()
    }

    pub fn advance_epochs(&mut self, epochs: u64) -> Epoch {
        self.clock.advance_by(epochs)
    }

    pub fn initialize_pool(&mut self, pool: PoolId, current_tick: i32) -> Result<(), ManagerError> {
        Ok(self.engine.initialize_pool(pool, current_tick)?)
    }

    /// Fees paid out to `owner` in `pool`, net of any redirection.
    #[must_use]
    pub fn collected(&self, pool: PoolId, owner: &Owner) -> FeeAmounts {
        self.engine.collected(pool, owner)
    }

    /// Opens a new position holding `liquidity`.
    pub fn add_liquidity(
        &mut self,
        pool: PoolId,
        key: PositionKey,
        liquidity: u128,
    ) -> Result<(), ManagerError> {
        let delta = i128::try_from(liquidity).map_err(|_| EngineError::LiquidityOverflow)?;
        self.engine.validate_modify(pool, &key, delta)?;

        let params = AddLiquidityParams {
            pool,
            key,
            current_epoch: self.clock.current(),
        };
        self.hooks.before_add_liquidity(&self.engine, &params)?;
        self.engine.modify_liquidity(pool, key, delta)?;
        Ok(())
    }

    /// Removes `liquidity` from a position and applies the fee redirection.
    pub fn remove_liquidity(
        &mut self,
        pool: PoolId,
        key: PositionKey,
        liquidity: u128,
    ) -> Result<Withdrawal, ManagerError> {
        let delta = i128::try_from(liquidity)
            .map(|l| -l)
            .map_err(|_| EngineError::LiquidityOverflow)?;
        self.engine.validate_modify(pool, &key, delta)?;

        let params = RemoveLiquidityParams {
            pool,
            key,
            liquidity_delta: delta,
            current_epoch: self.clock.current(),
        };
        self.hooks.before_remove_liquidity(&self.engine, &params)?;

        let checkpoint = self.engine.snapshot(pool)?;
        let result = self.apply_removal(&params, liquidity);
        if let Err(e) = &result {
            warn!(pool = %pool, key = %key, error = %e, "Removal aborted, restoring pool");
            self.engine.restore(pool, checkpoint);
        }
        result
    }

    fn apply_removal(
        &mut self,
        params: &RemoveLiquidityParams,
        liquidity: u128,
    ) -> Result<Withdrawal, ManagerError> {
        let RemoveLiquidityParams {
            pool,
            key,
            liquidity_delta,
            ..
        } = *params;

        let fees_earned = self.engine.modify_liquidity(pool, key, liquidity_delta)?;
        let redirect = self.hooks.after_remove_liquidity(&mut self.engine, params)?;
        let redirected = redirect.redirected();
        self.engine.charge(pool, key.owner, redirected)?;
        let net_fees = fees_earned
            .checked_sub(redirected)
            .ok_or(EngineError::InsufficientFees { owner: key.owner })?;

        info!(
            pool = %pool,
            key = %key,
            liquidity,
            net0 = net_fees.amount0,
            net1 = net_fees.amount1,
            outcome = ?redirect.outcome,
            "Liquidity withdrawn"
        );
        Ok(Withdrawal {
            key,
            liquidity,
            fees_earned,
            redirected,
            net_fees,
            outcome: redirect.outcome,
        })
    }

    /// Executes a swap generating `fees`.
    pub fn swap(&mut self, pool: PoolId, fees: FeeAmounts) -> Result<(), ManagerError> {
        self.engine.validate_fee_credit(pool)?;
        let epoch = self.clock.current();
        self.hooks.before_swap(&self.engine, pool, epoch)?;
        Ok(self.engine.swap(pool, fees)?)
    }

    /// Donates `amounts` to the pool's active liquidity.
    pub fn donate(&mut self, pool: PoolId, amounts: FeeAmounts) -> Result<(), ManagerError> {
        self.engine.validate_fee_credit(pool)?;
        let epoch = self.clock.current();
        self.hooks.before_donate(&self.engine, pool, epoch)?;
        Ok(self.engine.distribute(pool, amounts)?)
    }
}
