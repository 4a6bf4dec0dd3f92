use snipe_guard_domain::{MathError, Owner, PoolId, PositionKey, TickRange};
use snipe_guard_ledger::HookError;
use thiserror::Error;

/// Errors raised by the simulated AMM engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Pool {pool} is not initialized")]
    PoolNotInitialized { pool: PoolId },

    #[error("Pool {pool} is already initialized")]
    PoolAlreadyInitialized { pool: PoolId },

    #[error("Invalid tick range {range}")]
    InvalidRange { range: TickRange },

    #[error("Liquidity delta must be non-zero")]
    ZeroLiquidityDelta,

    #[error("Position {key} not found")]
    PositionNotFound { key: PositionKey },

    #[error("Position {key} holds {available} liquidity, cannot remove {requested}")]
    InsufficientLiquidity {
        key: PositionKey,
        available: u128,
        requested: u128,
    },

    #[error("Liquidity overflow")]
    LiquidityOverflow,

    #[error("Pool {pool} has no active liquidity to credit fees to")]
    NoActiveLiquidity { pool: PoolId },

    #[error("Owner {owner} has not collected enough fees to be charged")]
    InsufficientFees { owner: Owner },

    #[error(transparent)]
    Math(#[from] MathError),
}

/// Errors raised by the hooked pool manager.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ManagerError {
    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    #[error("Hook error: {0}")]
    Hook(#[from] HookError),
}
