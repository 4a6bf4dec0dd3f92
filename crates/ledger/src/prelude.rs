//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types from the crate.
//!
//! # Example
//!
//! ```rust
//! use snipe_guard_ledger::prelude::*;
//! ```

// Guard
pub use crate::config::GuardConfig;
pub use crate::guard::FirstEpochGuard;

// Hooks
pub use crate::hooks::{AddLiquidityParams, FeeRedirect, LiquidityHooks, RemoveLiquidityParams};
pub use crate::lifecycle::{LifecycleGuard, RedirectOutcome};

// Oracle
pub use crate::oracle::{FeeGrowthOracle, PositionInfo};

// Bookkeeping
pub use crate::book::PoolBook;
pub use crate::fee_ledger::FirstEpochFeeLedger;
pub use crate::registry::PositionRegistry;
pub use crate::settlement::{EpochSettlementQueue, SettlementReport};

// Events
pub use crate::events::{EventLog, HookEvent, HookEventKind};

// Errors
pub use crate::error::{ConfigError, HookError, HookResult, OracleError};
