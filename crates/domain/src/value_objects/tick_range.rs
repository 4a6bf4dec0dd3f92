use serde::{Deserialize, Serialize};
use std::fmt;

/// Price range of a position expressed as tick bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TickRange {
    pub lower: i32,
    pub upper: i32,
}

impl TickRange {
    /// Creates a new range. Bounds are not validated, see [`TickRange::is_valid`].
    #[must_use]
    pub const fn new(lower: i32, upper: i32) -> Self {
        Self { lower, upper }
    }

    /// A range is usable only when its lower bound is strictly below its upper bound.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.lower < self.upper
    }

    /// Whether `tick` lies inside `[lower, upper)`.
    #[must_use]
    pub const fn contains(&self, tick: i32) -> bool {
        tick >= self.lower && tick < self.upper
    }
}

impl fmt::Display for TickRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.lower, self.upper)
    }
}
