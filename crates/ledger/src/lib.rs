//! First-epoch fee isolation ledger.
//!
//! This crate holds the bookkeeping layered on top of an AMM engine to
//! protect liquidity providers from sniping:
//! - Position registry stamped with the creation epoch
//! - Lazy batched settlement of the fees accrued in a position's creation epoch
//! - Minimum holding duration and all-or-nothing withdrawal
//! - Redistribution of isolated fees to the remaining liquidity
//! - Lifecycle event log

/// Prelude module for convenient imports.
pub mod prelude;

/// Per-pool bookkeeping.
pub mod book;
/// Guard configuration.
pub mod config;
/// Error types.
pub mod error;
/// Lifecycle events.
pub mod events;
/// Isolated first-epoch fees.
pub mod fee_ledger;
/// The guard implementing the lifecycle hooks.
pub mod guard;
/// Hook callback contract.
pub mod hooks;
/// Lock and withdrawal rules.
pub mod lifecycle;
/// AMM engine contract.
pub mod oracle;
/// Position registry.
pub mod registry;
/// Epoch settlement.
pub mod settlement;

#[cfg(test)]
pub(crate) mod testing;

pub use config::GuardConfig;
pub use error::{ConfigError, HookError, HookResult, OracleError};
pub use guard::FirstEpochGuard;
pub use hooks::{AddLiquidityParams, FeeRedirect, LiquidityHooks, RemoveLiquidityParams};
pub use lifecycle::RedirectOutcome;
pub use oracle::{FeeGrowthOracle, PositionInfo};
