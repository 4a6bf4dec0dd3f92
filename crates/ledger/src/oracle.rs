//! Read access to the AMM engine's fee accounting.

use crate::error::OracleError;
use snipe_guard_domain::{FeeAmounts, FeeGrowthPair, PoolId, PositionKey, TickRange};

/// A position as currently tracked by the AMM engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PositionInfo {
    /// Liquidity currently held by the position.
    pub liquidity: u128,
    /// Fee growth inside the position's range at its last modification.
    pub fee_growth_inside_last: FeeGrowthPair,
}

/// Fee-growth accumulators and donation entry point of the AMM engine.
///
/// Implemented by the engine; the guard only reads from it, except for
/// [`FeeGrowthOracle::donate`] which redistributes isolated fees.
pub trait FeeGrowthOracle {
    /// Current state of a position. Unknown positions report zero liquidity.
    fn position_info(&self, pool: PoolId, key: &PositionKey) -> PositionInfo;

    /// Cumulative fee growth inside `range`.
    fn fee_growth_inside(&self, pool: PoolId, range: TickRange) -> FeeGrowthPair;

    /// Liquidity currently earning fees in the pool.
    fn pool_liquidity(&self, pool: PoolId) -> u128;

    /// Credits `amounts` as additional fees to the pool's current liquidity.
    fn donate(&mut self, pool: PoolId, amounts: FeeAmounts) -> Result<(), OracleError>;
}
