//! Per-pool state of the simulated AMM.

use snipe_guard_domain::{FeeAmounts, FeeGrowthPair, Owner, PositionKey, TickRange};
use snipe_guard_ledger::PositionInfo;
use std::collections::HashMap;

/// Current state of a simulated pool.
///
/// The price never moves, so a range either always contains the current
/// tick or never does. Ranges that do not contain it never accrue growth.
#[derive(Debug, Clone)]
pub struct PoolState {
    /// Tick the pool price sits at.
    pub current_tick: i32,
    /// Cumulative fee growth per unit of active liquidity.
    pub fee_growth_global: FeeGrowthPair,
    /// Liquidity of the positions whose range contains the current tick.
    pub active_liquidity: u128,
    pub(crate) positions: HashMap<PositionKey, PositionInfo>,
    pub(crate) collected: HashMap<Owner, FeeAmounts>,
}

impl PoolState {
    /// Creates an empty pool at `current_tick`.
    #[must_use]
    pub fn new(current_tick: i32) -> Self {
        Self {
            current_tick,
            fee_growth_global: FeeGrowthPair::ZERO,
            active_liquidity: 0,
            positions: HashMap::new(),
            collected: HashMap::new(),
        }
    }

    /// Whether `range` earns fees at the current price.
    #[must_use]
    pub fn in_range(&self, range: TickRange) -> bool {
        range.contains(self.current_tick)
    }

    /// Cumulative fee growth inside `range`.
    #[must_use]
    pub fn fee_growth_inside(&self, range: TickRange) -> FeeGrowthPair {
        if self.in_range(range) {
            self.fee_growth_global
        } else {
            FeeGrowthPair::ZERO
        }
    }

    #[must_use]
    pub fn position(&self, key: &PositionKey) -> Option<&PositionInfo> {
        self.positions.get(key)
    }

    /// Number of positions holding liquidity.
    #[must_use]
    pub fn position_count(&self) -> usize {
        self.positions.len()
    }

    /// Fees paid out to `owner` so far.
    #[must_use]
    pub fn collected(&self, owner: &Owner) -> FeeAmounts {
        self.collected.get(owner).copied().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snipe_guard_domain::{FeeGrowth, Q128};

    #[test]
    fn test_in_range_is_half_open() {
        let state = PoolState::new(0);
        assert!(state.in_range(TickRange::new(-60, 60)));
        assert!(state.in_range(TickRange::new(0, 60)));
        assert!(!state.in_range(TickRange::new(-60, 0)));
    }

    #[test]
    fn test_out_of_range_growth_stays_zero() {
        let mut state = PoolState::new(100);
        state.fee_growth_global = FeeGrowthPair::new(FeeGrowth(Q128), FeeGrowth(Q128));

        assert_eq!(
            state.fee_growth_inside(TickRange::new(0, 200)),
            state.fee_growth_global
        );
        assert_eq!(
            state.fee_growth_inside(TickRange::new(-200, 0)),
            FeeGrowthPair::ZERO
        );
    }

    #[test]
    fn test_unknown_owner_has_collected_nothing() {
        let state = PoolState::new(0);
        assert_eq!(state.collected(&Owner::from_low_u64(9)), FeeAmounts::ZERO);
        assert_eq!(state.position_count(), 0);
    }
}
