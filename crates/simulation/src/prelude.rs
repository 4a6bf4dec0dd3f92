//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types from the crate.
//!
//! # Example
//!
//! ```rust
//! use snipe_guard_simulation::prelude::*;
//! ```

// Engine
pub use crate::engine::SimulatedAmm;
pub use crate::state::PoolState;

// Epochs
pub use crate::clock::EpochClock;

// Dispatch
pub use crate::manager::{HookedPoolManager, Withdrawal};

// Errors
pub use crate::error::{EngineError, ManagerError};

// Reports
pub use crate::report::{FeeShare, fee_share, fee_shares};
