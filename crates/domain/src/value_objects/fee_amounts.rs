use serde::{Deserialize, Serialize};
use std::fmt;

/// A pair of non-negative token amounts, one per pool asset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FeeAmounts {
    pub amount0: u128,
    pub amount1: u128,
}

impl FeeAmounts {
    pub const ZERO: Self = Self {
        amount0: 0,
        amount1: 0,
    };

    #[must_use]
    pub const fn new(amount0: u128, amount1: u128) -> Self {
        Self { amount0, amount1 }
    }

    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.amount0 == 0 && self.amount1 == 0
    }

    /// Component-wise checked addition.
    #[must_use]
    pub fn checked_add(self, other: Self) -> Option<Self> {
        Some(Self {
            amount0: self.amount0.checked_add(other.amount0)?,
            amount1: self.amount1.checked_add(other.amount1)?,
        })
    }

    /// Component-wise checked subtraction.
    #[must_use]
    pub fn checked_sub(self, other: Self) -> Option<Self> {
        Some(Self {
            amount0: self.amount0.checked_sub(other.amount0)?,
            amount1: self.amount1.checked_sub(other.amount1)?,
        })
    }
}

impl fmt::Display for FeeAmounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.amount0, self.amount1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_arithmetic() {
        let a = FeeAmounts::new(10, 20);
        let b = FeeAmounts::new(3, 25);

        assert_eq!(a.checked_add(b), Some(FeeAmounts::new(13, 45)));
        assert_eq!(a.checked_sub(b), None);
        assert_eq!(
            FeeAmounts::new(u128::MAX, 0).checked_add(FeeAmounts::new(1, 0)),
            None
        );
    }

    #[test]
    fn test_zero() {
        assert!(FeeAmounts::ZERO.is_zero());
        assert!(FeeAmounts::default().is_zero());
        assert!(!FeeAmounts::new(0, 1).is_zero());
    }
}
