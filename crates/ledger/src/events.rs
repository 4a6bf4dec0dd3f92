//! Lifecycle events emitted by the guard.

use crate::lifecycle::RedirectOutcome;
use serde::{Deserialize, Serialize};
use snipe_guard_domain::{Epoch, FeeAmounts, PoolId, PositionKey, TickRange};

/// Kind of lifecycle event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum HookEventKind {
    /// A position was registered and queued for settlement.
    PositionOpened { key: PositionKey, range: TickRange },
    /// The open epoch's queue was settled.
    EpochSettled { positions: usize },
    /// First-epoch fees were isolated for a position.
    FirstEpochFeesSettled { key: PositionKey, amounts: FeeAmounts },
    /// Isolated fees were handed to the remaining liquidity.
    FeesRedirected { key: PositionKey, amounts: FeeAmounts },
    /// Isolated fees went back to the withdrawer because the pool is empty.
    FeesReturned { key: PositionKey, amounts: FeeAmounts },
    /// A position was fully withdrawn and its record destroyed.
    PositionClosed {
        key: PositionKey,
        outcome: RedirectOutcome,
    },
}

/// A recorded lifecycle event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HookEvent {
    /// Event ID.
    pub id: String,
    /// Pool the event belongs to.
    pub pool: PoolId,
    /// Epoch of the operation that produced the event.
    pub epoch: Epoch,
    /// Wall-clock time at which the event was recorded.
    pub recorded_at: chrono::DateTime<chrono::Utc>,
    /// Event payload.
    pub kind: HookEventKind,
}

impl HookEvent {
    /// Creates a new event stamped with a fresh ID and the current time.
    #[must_use]
    pub fn new(pool: PoolId, epoch: Epoch, kind: HookEventKind) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            pool,
            epoch,
            recorded_at: chrono::Utc::now(),
            kind,
        }
    }
}

/// Append-only event log.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<HookEvent>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: HookEvent) {
        self.events.push(event);
    }

    /// All events in emission order.
    #[must_use]
    pub fn all(&self) -> &[HookEvent] {
        &self.events
    }

    /// Events belonging to `pool`.
    pub fn for_pool(&self, pool: PoolId) -> impl Iterator<Item = &HookEvent> {
        self.events.iter().filter(move |e| e.pool == pool)
    }

    /// Removes and returns every recorded event.
    pub fn drain(&mut self) -> Vec<HookEvent> {
        std::mem::take(&mut self.events)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{key, pool};

    #[test]
    fn test_event_creation() {
        let k = key(1, 0);
        let event = HookEvent::new(
            pool(1),
            Epoch(3),
            HookEventKind::PositionOpened {
                key: k,
                range: k.range,
            },
        );
        assert_eq!(event.epoch, Epoch(3));
        assert!(!event.id.is_empty());
    }

    #[test]
    fn test_log_filters_and_drains() {
        let mut log = EventLog::new();
        log.push(HookEvent::new(pool(1), Epoch(1), HookEventKind::EpochSettled { positions: 0 }));
        log.push(HookEvent::new(pool(2), Epoch(1), HookEventKind::EpochSettled { positions: 2 }));

        assert_eq!(log.for_pool(pool(2)).count(), 1);
        assert_eq!(log.drain().len(), 2);
        assert!(log.is_empty());
    }

    #[test]
    fn test_event_serializes() {
        let k = key(1, 0);
        let event = HookEvent::new(
            pool(1),
            Epoch(2),
            HookEventKind::FeesRedirected {
                key: k,
                amounts: FeeAmounts::new(10, 0),
            },
        );
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["epoch"], 2);
        assert!(json["kind"]["FeesRedirected"].is_object());
    }
}
