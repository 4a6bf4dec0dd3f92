//! Domain types for first-epoch fee isolation.
//!
//! Value objects (epochs, tick ranges, fee amounts), position and pool
//! identities, and the Q128 fee-growth arithmetic shared by the ledger and
//! the simulation engine.

/// Position and pool identities.
pub mod entities;
/// Lifecycle enums.
pub mod enums;
/// Error types.
pub mod error;
/// Fixed-point fee arithmetic.
pub mod math;
/// Value objects.
pub mod value_objects;

pub use entities::{Owner, PoolId, PositionKey, PositionRecord, Salt};
pub use enums::PositionPhase;
pub use error::MathError;
pub use math::{FeeGrowth, FeeGrowthPair, Q128};
pub use value_objects::{Epoch, FeeAmounts, TickRange};
