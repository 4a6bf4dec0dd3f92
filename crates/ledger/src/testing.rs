//! Fixtures shared by the unit tests.

use crate::error::OracleError;
use crate::oracle::{FeeGrowthOracle, PositionInfo};
use primitive_types::U256;
use snipe_guard_domain::{
    FeeAmounts, FeeGrowth, FeeGrowthPair, Owner, PoolId, PositionKey, Q128, Salt, TickRange,
};
use std::collections::HashMap;

pub(crate) fn pool(n: u64) -> PoolId {
    PoolId::from_low_u64(n)
}

pub(crate) fn key(owner: u64, salt: u64) -> PositionKey {
    PositionKey::new(
        Owner::from_low_u64(owner),
        TickRange::new(-60, 60),
        Salt::from_low_u64(salt),
    )
}

/// Growth of `a` and `b` whole tokens per unit of liquidity.
pub(crate) fn growth(a: u64, b: u64) -> FeeGrowthPair {
    FeeGrowthPair::new(
        FeeGrowth(Q128 * U256::from(a)),
        FeeGrowth(Q128 * U256::from(b)),
    )
}

/// Hand-driven stand-in for the AMM engine.
#[derive(Debug, Default)]
pub(crate) struct MockOracle {
    positions: HashMap<(PoolId, PositionKey), PositionInfo>,
    inside: HashMap<(PoolId, TickRange), FeeGrowthPair>,
    liquidity: HashMap<PoolId, u128>,
    pub(crate) donations: Vec<(PoolId, FeeAmounts)>,
    pub(crate) reject_donations: bool,
}

impl MockOracle {
    pub(crate) fn set_position(
        &mut self,
        pool: PoolId,
        key: PositionKey,
        liquidity: u128,
        inside_last: FeeGrowthPair,
    ) {
        self.positions.insert(
            (pool, key),
            PositionInfo {
                liquidity,
                fee_growth_inside_last: inside_last,
            },
        );
    }

    /// Opens a position at the current inside growth and adds it to pool liquidity.
    pub(crate) fn open(&mut self, pool: PoolId, key: PositionKey, liquidity: u128) {
        let inside = self.fee_growth_inside(pool, key.range);
        self.set_position(pool, key, liquidity, inside);
        *self.liquidity.entry(pool).or_default() += liquidity;
    }

    /// Removes a position's liquidity from the pool.
    pub(crate) fn close(&mut self, pool: PoolId, key: &PositionKey) {
        if let Some(info) = self.positions.remove(&(pool, *key)) {
            *self.liquidity.entry(pool).or_default() -= info.liquidity;
        }
    }

    pub(crate) fn set_inside(&mut self, pool: PoolId, range: TickRange, growth: FeeGrowthPair) {
        self.inside.insert((pool, range), growth);
    }

    pub(crate) fn bump_inside(&mut self, pool: PoolId, range: TickRange, increment: FeeGrowthPair) {
        let entry = self.inside.entry((pool, range)).or_default();
        *entry = entry.wrapping_add(increment);
    }
}

impl FeeGrowthOracle for MockOracle {
    fn position_info(&self, pool: PoolId, key: &PositionKey) -> PositionInfo {
        self.positions
            .get(&(pool, *key))
            .copied()
            .unwrap_or_default()
    }

    fn fee_growth_inside(&self, pool: PoolId, range: TickRange) -> FeeGrowthPair {
        self.inside.get(&(pool, range)).copied().unwrap_or_default()
    }

    fn pool_liquidity(&self, pool: PoolId) -> u128 {
        self.liquidity.get(&pool).copied().unwrap_or_default()
    }

    fn donate(&mut self, pool: PoolId, amounts: FeeAmounts) -> Result<(), OracleError> {
        if self.reject_donations {
            return Err(OracleError::DonationRejected {
                reason: "donations disabled".to_string(),
            });
        }
        self.donations.push((pool, amounts));
        Ok(())
    }
}
