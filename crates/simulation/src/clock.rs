//! External epoch source driving the simulation.

use snipe_guard_domain::Epoch;

/// Monotonic epoch counter. Epochs advance only between pool operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EpochClock {
    current: Epoch,
}

impl EpochClock {
    /// Clock starting at epoch 1.
    #[must_use]
    pub fn new() -> Self {
        Self::starting_at(Epoch(1))
    }

    #[must_use]
    pub fn starting_at(epoch: Epoch) -> Self {
        Self { current: epoch }
    }

    #[must_use]
    pub fn current(&self) -> Epoch {
        self.current
    }

    /// Moves to the next epoch and returns it.
    pub fn advance(&mut self) -> Epoch {
        self.current = self.current.next();
        self.current
    }

    /// Moves `epochs` epochs forward and returns the new epoch.
    pub fn advance_by(&mut self, epochs: u64) -> Epoch {
        self.current = Epoch(self.current.number().saturating_add(epochs));
        self.current
    }
}

impl Default for EpochClock {
    fn default() -> Self {
        Self::new()
    }
}
