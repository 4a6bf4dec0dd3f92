//! Error types for the lifecycle hooks.

use snipe_guard_domain::{Epoch, MathError, PositionKey};
use thiserror::Error;

/// Result alias used by every hook callback.
pub type HookResult<T> = Result<T, HookError>;

/// Reasons a pool operation is rejected by the guard.
///
/// Every error aborts the triggering operation; the guard is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HookError {
    /// A live record already exists for the key. Use a different salt.
    #[error("position {key} already exists")]
    AlreadyExists { key: PositionKey },

    /// The open epoch already holds as many new positions as allowed.
    #[error("epoch {epoch} already holds {capacity} new positions")]
    TooManyPositionsInEpoch { epoch: Epoch, capacity: usize },

    /// The lock duration has not elapsed since creation.
    #[error("position {key} is locked: {elapsed} of {required} epochs elapsed")]
    PositionLocked {
        key: PositionKey,
        elapsed: u64,
        required: u64,
    },

    /// Only a removal of the position's entire liquidity is accepted.
    #[error("position {key} must be withdrawn entirely: requested {requested}, holds {liquidity}")]
    PositionPartiallyWithdrawn {
        key: PositionKey,
        requested: i128,
        liquidity: u128,
    },

    /// No live record exists for the key.
    #[error("position {key} not found")]
    PositionNotFound { key: PositionKey },

    #[error("fee arithmetic failed: {0}")]
    Math(#[from] MathError),

    #[error("fee growth oracle error: {0}")]
    Oracle(#[from] OracleError),
}

/// Errors surfaced by the AMM engine behind [`crate::FeeGrowthOracle`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OracleError {
    #[error("donation rejected: {reason}")]
    DonationRejected { reason: String },
}

/// Invalid guard configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("same-epoch position capacity must be at least 1")]
    ZeroCapacity,
}
