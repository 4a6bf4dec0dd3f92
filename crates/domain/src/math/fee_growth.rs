//! Fixed-point fee-growth arithmetic.
//!
//! Fee-growth accumulators are Q128.128 fixed-point values stored in 256 bits.
//! They only ever increase, and may wrap at 2^256, so every difference between
//! two readings is taken modulo 2^256. Multiplying a growth delta by a `u128`
//! liquidity can exceed 256 bits, hence the 512-bit intermediate.

use crate::error::MathError;
use crate::value_objects::FeeAmounts;
use primitive_types::{U256, U512};
use serde::{Deserialize, Serialize};

/// Fixed-point base of the fee-growth accumulators, 2^128.
pub const Q128: U256 = U256([0, 0, 1, 0]);

/// A per-unit-liquidity fee accumulator reading (Q128.128, modulo 2^256).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FeeGrowth(pub U256);

impl FeeGrowth {
    pub const ZERO: Self = Self(U256([0, 0, 0, 0]));

    /// Growth accrued since `earlier`, modulo 2^256.
    #[must_use]
    pub fn delta_since(self, earlier: FeeGrowth) -> FeeGrowth {
        let (delta, _wrapped) = self.0.overflowing_sub(earlier.0);
        FeeGrowth(delta)
    }

    /// Advances the accumulator by `increment`, modulo 2^256.
    #[must_use]
    pub fn wrapping_add(self, increment: FeeGrowth) -> FeeGrowth {
        let (sum, _wrapped) = self.0.overflowing_add(increment.0);
        FeeGrowth(sum)
    }
}

impl From<U256> for FeeGrowth {
    fn from(v: U256) -> Self {
        Self(v)
    }
}

/// Fee-growth readings for both pool assets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FeeGrowthPair {
    pub growth0: FeeGrowth,
    pub growth1: FeeGrowth,
}

impl FeeGrowthPair {
    pub const ZERO: Self = Self {
        growth0: FeeGrowth::ZERO,
        growth1: FeeGrowth::ZERO,
    };

    #[must_use]
    pub fn new(growth0: FeeGrowth, growth1: FeeGrowth) -> Self {
        Self { growth0, growth1 }
    }

    /// Component-wise modular delta, see [`FeeGrowth::delta_since`].
    #[must_use]
    pub fn delta_since(self, earlier: FeeGrowthPair) -> FeeGrowthPair {
        Self {
            growth0: self.growth0.delta_since(earlier.growth0),
            growth1: self.growth1.delta_since(earlier.growth1),
        }
    }

    #[must_use]
    pub fn wrapping_add(self, increment: FeeGrowthPair) -> FeeGrowthPair {
        Self {
            growth0: self.growth0.wrapping_add(increment.growth0),
            growth1: self.growth1.wrapping_add(increment.growth1),
        }
    }
}

/// Computes `floor(a * b / denominator)` without intermediate overflow.
///
/// Fails when the denominator is zero or the quotient does not fit in 256 bits.
pub fn mul_div(a: U256, b: U256, denominator: U256) -> Result<U256, MathError> {
    if denominator.is_zero() {
        return Err(MathError::DivisionByZero);
    }
    let product: U512 = a.full_mul(b);
    let quotient = product / U512::from(denominator);
    U256::try_from(quotient).map_err(|_| MathError::AmountOverflow)
}

/// Token amount owed to `liquidity` units for an accrued growth `delta`.
///
/// `floor(delta * liquidity / 2^128)`, failing if the amount exceeds `u128`.
pub fn fees_owed(delta: FeeGrowth, liquidity: u128) -> Result<u128, MathError> {
    let amount = mul_div(delta.0, U256::from(liquidity), Q128)?;
    if amount > U256::from(u128::MAX) {
        return Err(MathError::AmountOverflow);
    }
    Ok(amount.as_u128())
}

/// Both-asset amounts owed for growth accrued between `last` and `current`.
pub fn fees_between(
    current: FeeGrowthPair,
    last: FeeGrowthPair,
    liquidity: u128,
) -> Result<FeeAmounts, MathError> {
    let delta = current.delta_since(last);
    Ok(FeeAmounts {
        amount0: fees_owed(delta.growth0, liquidity)?,
        amount1: fees_owed(delta.growth1, liquidity)?,
    })
}

/// Growth increment produced by distributing `amount` over `liquidity` units.
///
/// `floor(amount * 2^128 / liquidity)`.
pub fn growth_for_amount(amount: u128, liquidity: u128) -> Result<FeeGrowth, MathError> {
    let growth = mul_div(U256::from(amount), Q128, U256::from(liquidity))?;
    Ok(FeeGrowth(growth))
}
