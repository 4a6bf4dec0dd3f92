pub mod pool;
pub mod position;

// Re-export for easier access
pub use pool::PoolId;
pub use position::{Owner, PositionKey, PositionRecord, Salt};
