//! Callback contract invoked by the pool operation dispatcher.

use crate::error::HookResult;
use crate::lifecycle::RedirectOutcome;
use crate::oracle::FeeGrowthOracle;
use serde::{Deserialize, Serialize};
use snipe_guard_domain::{Epoch, FeeAmounts, PoolId, PositionKey};

/// Request to add liquidity, as seen by the hooks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddLiquidityParams {
    pub pool: PoolId,
    /// Position being created; carries the range bounds.
    pub key: PositionKey,
    pub current_epoch: Epoch,
}

/// Request to remove liquidity, as seen by the hooks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoveLiquidityParams {
    pub pool: PoolId,
    pub key: PositionKey,
    /// Signed liquidity change; removals are negative.
    pub liquidity_delta: i128,
    pub current_epoch: Epoch,
}

/// Result of the post-removal fee redistribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeRedirect {
    pub key: PositionKey,
    /// First-epoch fees consumed from the ledger.
    pub consumed: FeeAmounts,
    pub outcome: RedirectOutcome,
}

impl FeeRedirect {
    /// Amounts taken from the withdrawer and donated to the pool.
    #[must_use]
    pub fn redirected(&self) -> FeeAmounts {
        match self.outcome {
            RedirectOutcome::DonatedToPool => self.consumed,
            RedirectOutcome::ReturnedToOwner | RedirectOutcome::NothingToRedirect => {
                FeeAmounts::ZERO
            }
        }
    }
}

/// One method per pool lifecycle hook, called synchronously by the dispatcher.
///
/// A `before_*` error aborts the operation before the engine applies it.
pub trait LiquidityHooks {
    fn before_add_liquidity(
        &mut self,
        oracle: &dyn FeeGrowthOracle,
        params: &AddLiquidityParams,
    ) -> HookResult<()>;

    fn before_remove_liquidity(
        &mut self,
        oracle: &dyn FeeGrowthOracle,
        params: &RemoveLiquidityParams,
    ) -> HookResult<()>;

    /// Called once the engine has removed the liquidity.
    fn after_remove_liquidity(
        &mut self,
        oracle: &mut dyn FeeGrowthOracle,
        params: &RemoveLiquidityParams,
    ) -> HookResult<FeeRedirect>;

    fn before_swap(
        &mut self,
        oracle: &dyn FeeGrowthOracle,
        pool: PoolId,
        current_epoch: Epoch,
    ) -> HookResult<()>;

    fn before_donate(
        &mut self,
        oracle: &dyn FeeGrowthOracle,
        pool: PoolId,
        current_epoch: Epoch,
    ) -> HookResult<()>;
}
