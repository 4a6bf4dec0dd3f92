//! Reference AMM harness for the first-epoch guard.
//!
//! An in-memory engine implementing the fee-growth oracle, an epoch clock,
//! and a pool manager that dispatches liquidity, swap and donation
//! operations through [`snipe_guard_ledger::LiquidityHooks`].

/// Prelude module for convenient imports.
pub mod prelude;

/// Epoch source.
pub mod clock;
/// Simulated AMM engine.
pub mod engine;
/// Error types.
pub mod error;
/// Hooked operation dispatcher.
pub mod manager;
/// Fee-share metrics.
pub mod report;
/// Per-pool engine state.
pub mod state;

pub use clock::EpochClock;
pub use engine::SimulatedAmm;
pub use error::{EngineError, ManagerError};
pub use manager::{HookedPoolManager, Withdrawal};
