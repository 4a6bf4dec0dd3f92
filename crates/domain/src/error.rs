use thiserror::Error;

/// Errors raised by fixed-point fee arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MathError {
    /// A computed token amount does not fit the amount width.
    #[error("fee amount overflows 128 bits")]
    AmountOverflow,
    /// Division by zero (e.g. distributing fees over zero liquidity).
    #[error("division by zero")]
    DivisionByZero,
}
