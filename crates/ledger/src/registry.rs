//! Per-pool registry of live positions.

use crate::error::{HookError, HookResult};
use snipe_guard_domain::{Epoch, PositionKey, PositionRecord};
use std::collections::HashMap;

/// Maps position keys to their creation epoch and range.
#[derive(Debug, Clone, Default)]
pub struct PositionRegistry {
    records: HashMap<PositionKey, PositionRecord>,
}

impl PositionRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new position created in `epoch`.
    ///
    /// Fails with [`HookError::AlreadyExists`] while a record for `key` is live.
    pub fn create(&mut self, key: PositionKey, epoch: Epoch) -> HookResult<PositionRecord> {
        if self.records.contains_key(&key) {
            return Err(HookError::AlreadyExists { key });
        }
        let record = PositionRecord::new(epoch, key.range);
        self.records.insert(key, record);
        Ok(record)
    }

    /// Removes the record for `key`, returning it if it was live. Idempotent.
    pub fn destroy(&mut self, key: &PositionKey) -> Option<PositionRecord> {
        self.records.remove(key)
    }

    #[must_use]
    pub fn get(&self, key: &PositionKey) -> Option<&PositionRecord> {
        self.records.get(key)
    }

    #[must_use]
    pub fn exists(&self, key: &PositionKey) -> bool {
        self.records.contains_key(key)
    }

    #[must_use]
    pub fn creation_epoch(&self, key: &PositionKey) -> Option<Epoch> {
        self.records.get(key).map(|r| r.creation_epoch)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
