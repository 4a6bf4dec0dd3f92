//! Guard configuration.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Configuration of a [`crate::FirstEpochGuard`], fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGuardConfig")]
pub struct GuardConfig {
    /// Epochs a position must stay open before it may be withdrawn.
    lock_duration_epochs: u64,
    /// Maximum number of positions created within a single epoch.
    same_epoch_capacity: usize,
}

impl GuardConfig {
    pub const DEFAULT_LOCK_DURATION_EPOCHS: u64 = 1;
    pub const DEFAULT_SAME_EPOCH_CAPACITY: usize = 64;

    /// Creates a validated configuration.
    pub fn new(lock_duration_epochs: u64, same_epoch_capacity: usize) -> Result<Self, ConfigError> {
        if same_epoch_capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        Ok(Self {
            lock_duration_epochs,
            same_epoch_capacity,
        })
    }

    /// Sets the lock duration.
    #[must_use]
    pub fn with_lock_duration(mut self, epochs: u64) -> Self {
        self.lock_duration_epochs = epochs;
        self
    }

    /// Sets the same-epoch capacity.
    pub fn with_same_epoch_capacity(self, capacity: usize) -> Result<Self, ConfigError> {
        Self::new(self.lock_duration_epochs, capacity)
    }

    #[must_use]
    pub fn lock_duration_epochs(&self) -> u64 {
        self.lock_duration_epochs
    }

    #[must_use]
    pub fn same_epoch_capacity(&self) -> usize {
        self.same_epoch_capacity
    }
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            lock_duration_epochs: Self::DEFAULT_LOCK_DURATION_EPOCHS,
            same_epoch_capacity: Self::DEFAULT_SAME_EPOCH_CAPACITY,
        }
    }
}

#[derive(Deserialize)]
#[serde(default)]
struct RawGuardConfig {
    lock_duration_epochs: u64,
    same_epoch_capacity: usize,
}

impl Default for RawGuardConfig {
    fn default() -> Self {
        let defaults = GuardConfig::default();
        Self {
            lock_duration_epochs: defaults.lock_duration_epochs,
            same_epoch_capacity: defaults.same_epoch_capacity,
        }
    }
}

impl TryFrom<RawGuardConfig> for GuardConfig {
    type Error = ConfigError;

    fn try_from(raw: RawGuardConfig) -> Result<Self, Self::Error> {
        Self::new(raw.lock_duration_epochs, raw.same_epoch_capacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GuardConfig::default();
        assert_eq!(config.lock_duration_epochs(), 1);
        assert_eq!(config.same_epoch_capacity(), 64);
    }

    #[test]
    fn test_zero_capacity_rejected() {
        assert_eq!(GuardConfig::new(5, 0), Err(ConfigError::ZeroCapacity));
        assert_eq!(
            GuardConfig::default().with_same_epoch_capacity(0),
            Err(ConfigError::ZeroCapacity)
        );
    }

    #[test]
    fn test_builder() {
        let config = GuardConfig::default()
            .with_lock_duration(0)
            .with_same_epoch_capacity(3)
            .unwrap();
        assert_eq!(config.lock_duration_epochs(), 0);
        assert_eq!(config.same_epoch_capacity(), 3);
    }

    #[test]
    fn test_deserialize_validates() {
        let config: GuardConfig =
            serde_json::from_str(r#"{"lock_duration_epochs": 10, "same_epoch_capacity": 2}"#)
                .unwrap();
        assert_eq!(config, GuardConfig::new(10, 2).unwrap());

        let partial: GuardConfig = serde_json::from_str(r#"{"lock_duration_epochs": 4}"#).unwrap();
        assert_eq!(partial.same_epoch_capacity(), 64);

        let invalid = serde_json::from_str::<GuardConfig>(r#"{"same_epoch_capacity": 0}"#);
        assert!(invalid.is_err());
    }
}
