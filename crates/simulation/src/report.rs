//! Fee-share metrics for scenario reports.

use crate::engine::SimulatedAmm;
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use snipe_guard_domain::{FeeAmounts, Owner, PoolId};

/// Fraction of `total` represented by `captured`.
///
/// `None` when `total` is zero or a value does not fit a `Decimal`.
#[must_use]
pub fn fee_share(captured: u128, total: u128) -> Option<Decimal> {
    if total == 0 {
        return None;
    }
    let captured = Decimal::from_u128(captured)?;
    let total = Decimal::from_u128(total)?;
    captured.checked_div(total)
}

/// Fees collected by one owner and their share of the group's total.
#[derive(Debug, Clone, PartialEq)]
pub struct FeeShare {
    pub owner: Owner,
    pub collected: FeeAmounts,
    pub share0: Option<Decimal>,
    pub share1: Option<Decimal>,
}

/// Splits the fees collected in `pool` among `owners`.
#[must_use]
pub fn fee_shares(amm: &SimulatedAmm, pool: PoolId, owners: &[Owner]) -> Vec<FeeShare> {
    let collected: Vec<_> = owners
        .iter()
        .map(|owner| (*owner, amm.collected(pool, owner)))
        .collect();
    let total0 = collected
        .iter()
        .fold(0u128, |acc, (_, fees)| acc.saturating_add(fees.amount0));
    let total1 = collected
        .iter()
        .fold(0u128, |acc, (_, fees)| acc.saturating_add(fees.amount1));

    collected
        .into_iter()
        .map(|(owner, fees)| FeeShare {
            owner,
            collected: fees,
            share0: fee_share(fees.amount0, total0),
            share1: fee_share(fees.amount1, total1),
        })
        .collect()
}
