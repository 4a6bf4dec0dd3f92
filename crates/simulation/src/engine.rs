//! In-memory AMM engine with fee-growth accounting.
//!
//! A deliberately small model of a concentrated-liquidity pool: positions
//! over tick ranges, a fixed current tick, and Q128 fee-growth accumulators
//! fed by swap fees and donations. Fees owed to a position are paid to its
//! owner whenever its liquidity is modified.

use crate::error::EngineError;
use crate::state::PoolState;
use snipe_guard_domain::math::{fees_between, growth_for_amount};
use snipe_guard_domain::{
    FeeAmounts, FeeGrowthPair, MathError, Owner, PoolId, PositionKey, TickRange,
};
use snipe_guard_ledger::{FeeGrowthOracle, OracleError, PositionInfo};
use std::collections::HashMap;
use tracing::debug;

/// Multi-pool simulated AMM.
#[derive(Debug, Clone, Default)]
pub struct SimulatedAmm {
    pools: HashMap<PoolId, PoolState>,
}

impl SimulatedAmm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty pool priced at `current_tick`.
    pub fn initialize_pool(&mut self, pool: PoolId, current_tick: i32) -> Result<(), EngineError> {
        if self.pools.contains_key(&pool) {
            return Err(EngineError::PoolAlreadyInitialized { pool });
        }
        self.pools.insert(pool, PoolState::new(current_tick));
        debug!(pool = %pool, tick = current_tick, "Pool initialized");
        Ok(())
    }

    pub fn pool(&self, pool: PoolId) -> Result<&PoolState, EngineError> {
        self.pools
            .get(&pool)
            .ok_or(EngineError::PoolNotInitialized { pool })
    }

    fn pool_mut(&mut self, pool: PoolId) -> Result<&mut PoolState, EngineError> {
        self.pools
            .get_mut(&pool)
            .ok_or(EngineError::PoolNotInitialized { pool })
    }

    /// Checks that [`SimulatedAmm::modify_liquidity`] would accept the request.
    pub fn validate_modify(
        &self,
        pool: PoolId,
        key: &PositionKey,
        liquidity_delta: i128,
    ) -> Result<(), EngineError> {
        let state = self.pool(pool)?;
        if !key.range.is_valid() {
            return Err(EngineError::InvalidRange { range: key.range });
        }
        if liquidity_delta == 0 {
            return Err(EngineError::ZeroLiquidityDelta);
        }

        let current = state.position(key).map_or(0, |info| info.liquidity);
        let amount = liquidity_delta.unsigned_abs();
        if liquidity_delta > 0 {
            current
                .checked_add(amount)
                .ok_or(EngineError::LiquidityOverflow)?;
            if state.in_range(key.range) {
                state
                    .active_liquidity
                    .checked_add(amount)
                    .ok_or(EngineError::LiquidityOverflow)?;
            }
        } else {
            if state.position(key).is_none() {
                return Err(EngineError::PositionNotFound { key: *key });
            }
            if amount > current {
                return Err(EngineError::InsufficientLiquidity {
                    key: *key,
                    available: current,
                    requested: amount,
                });
            }
        }
        Ok(())
    }

    /// Applies a liquidity change and pays the position's accrued fees to its owner.
    ///
    /// Returns the fees paid.
    pub fn modify_liquidity(
        &mut self,
        pool: PoolId,
        key: PositionKey,
        liquidity_delta: i128,
    ) -> Result<FeeAmounts, EngineError> {
        self.validate_modify(pool, &key, liquidity_delta)?;
        let state = self.pool_mut(pool)?;

        let inside = state.fee_growth_inside(key.range);
        let info = state.position(&key).copied().unwrap_or_default();
        let owed = fees_between(inside, info.fee_growth_inside_last, info.liquidity)?;

        // Bounds were checked by `validate_modify`.
        let amount = liquidity_delta.unsigned_abs();
        let liquidity = if liquidity_delta > 0 {
            info.liquidity + amount
        } else {
            info.liquidity - amount
        };

        let credited = state
            .collected(&key.owner)
            .checked_add(owed)
            .ok_or(EngineError::Math(MathError::AmountOverflow))?;
        state.collected.insert(key.owner, credited);

        if state.in_range(key.range) {
            state.active_liquidity = if liquidity_delta > 0 {
                state.active_liquidity + amount
            } else {
                state.active_liquidity - amount
            };
        }
        if liquidity == 0 {
            state.positions.remove(&key);
        } else {
            state.positions.insert(
                key,
                PositionInfo {
                    liquidity,
                    fee_growth_inside_last: inside,
                },
            );
        }

        debug!(
            pool = %pool,
            key = %key,
            delta = liquidity_delta,
            liquidity,
            fees0 = owed.amount0,
            fees1 = owed.amount1,
            "Liquidity modified"
        );
        Ok(owed)
    }

    /// Fails unless the pool has liquidity able to receive fees.
    pub fn validate_fee_credit(&self, pool: PoolId) -> Result<(), EngineError> {
        if self.pool(pool)?.active_liquidity == 0 {
            return Err(EngineError::NoActiveLiquidity { pool });
        }
        Ok(())
    }

    /// Spreads `amounts` over the active liquidity through the global growth.
    fn credit_fees(&mut self, pool: PoolId, amounts: FeeAmounts) -> Result<(), EngineError> {
        self.validate_fee_credit(pool)?;
        let state = self.pool_mut(pool)?;
        let increment = FeeGrowthPair::new(
            growth_for_amount(amounts.amount0, state.active_liquidity)?,
            growth_for_amount(amounts.amount1, state.active_liquidity)?,
        );
        state.fee_growth_global = state.fee_growth_global.wrapping_add(increment);
        Ok(())
    }

    /// Accrues the fees generated by a swap.
    pub fn swap(&mut self, pool: PoolId, fees: FeeAmounts) -> Result<(), EngineError> {
        self.credit_fees(pool, fees)?;
        debug!(pool = %pool, fee0 = fees.amount0, fee1 = fees.amount1, "Swap fees accrued");
        Ok(())
    }

    /// Distributes a donation to the active liquidity.
    pub fn distribute(&mut self, pool: PoolId, amounts: FeeAmounts) -> Result<(), EngineError> {
        self.credit_fees(pool, amounts)?;
        debug!(
            pool = %pool,
            amount0 = amounts.amount0,
            amount1 = amounts.amount1,
            "Donation distributed"
        );
        Ok(())
    }

    /// Takes back `amounts` from the fees already paid to `owner`.
    pub fn charge(
        &mut self,
        pool: PoolId,
        owner: Owner,
        amounts: FeeAmounts,
    ) -> Result<(), EngineError> {
        if amounts.is_zero() {
            return Ok(());
        }
        let state = self.pool_mut(pool)?;
        let remaining = state
            .collected(&owner)
            .checked_sub(amounts)
            .ok_or(EngineError::InsufficientFees { owner })?;
        state.collected.insert(owner, remaining);
        Ok(())
    }

    /// Fees paid out to `owner` in `pool`.
    #[must_use]
    pub fn collected(&self, pool: PoolId, owner: &Owner) -> FeeAmounts {
        self.pools
            .get(&pool)
            .map(|state| state.collected(owner))
            .unwrap_or_default()
    }

    /// Copy of a pool's state, for restoring after an aborted operation.
    pub fn snapshot(&self, pool: PoolId) -> Result<PoolState, EngineError> {
        self.pool(pool).cloned()
    }

    pub fn restore(&mut self, pool: PoolId, state: PoolState) {
        self.pools.insert(pool, state);
    }
}

impl FeeGrowthOracle for SimulatedAmm {
    fn position_info(&self, pool: PoolId, key: &PositionKey) -> PositionInfo {
        self.pools
            .get(&pool)
            .and_then(|state| state.position(key))
            .copied()
            .unwrap_or_default()
    }

    fn fee_growth_inside(&self, pool: PoolId, range: TickRange) -> FeeGrowthPair {
        self.pools
            .get(&pool)
            .map(|state| state.fee_growth_inside(range))
            .unwrap_or_default()
    }

    fn pool_liquidity(&self, pool: PoolId) -> u128 {
        self.pools
            .get(&pool)
            .map_or(0, |state| state.active_liquidity)
    }

    fn donate(&mut self, pool: PoolId, amounts: FeeAmounts) -> Result<(), OracleError> {
        self.distribute(pool, amounts)
            .map_err(|e| OracleError::DonationRejected {
                reason: e.to_string(),
            })
    }
}
