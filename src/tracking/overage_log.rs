//! Caller-owned, chronologically ordered sequence of overage events.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{OverageEvent, YearMonth};

use super::{RollingWindowStatus, evaluate_threshold_status};

/// An ordered, duplicate-free sequence of overage events.
///
/// The log is owned and mutated by the caller. It keeps every event it is
/// given; nothing expires automatically. Use [`OverageLog::prune_before`] to
/// drop events that no longer matter.
///
/// # Example
///
/// ```
/// use minijob_engine::models::{OverageEvent, YearMonth};
/// use minijob_engine::tracking::{OverageLog, ThresholdState};
///
/// let mut log = OverageLog::new();
/// log.record(OverageEvent::new(5, 2025).unwrap());
/// log.record(OverageEvent::new(0, 2025).unwrap());
///
/// assert_eq!(log.events()[0], OverageEvent::new(0, 2025).unwrap());
/// let status = log.status(YearMonth::new(6, 2025).unwrap());
/// assert_eq!(status.state, ThresholdState::TwoWarning);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<OverageEvent>", into = "Vec<OverageEvent>")]
pub struct OverageLog {
    events: Vec<OverageEvent>,
}

impl OverageLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an event, keeping the log sorted.
    ///
    /// Returns `false` if the month was already recorded.
    pub fn record(&mut self, event: OverageEvent) -> bool {
        match self.events.binary_search(&event) {
            Ok(_) => false,
            Err(position) => {
                self.events.insert(position, event);
                debug!(period = %event.period(), total = self.events.len(), "Recorded overage event");
                true
            }
        }
    }

    /// Removes an event. Returns `false` if it was not recorded.
    pub fn remove(&mut self, event: OverageEvent) -> bool {
        match self.events.binary_search(&event) {
            Ok(position) => {
                self.events.remove(position);
                true
            }
            Err(_) => false,
        }
    }

    /// Removes every event.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Removes every event strictly before `cutoff` and returns how many were dropped.
    pub fn prune_before(&mut self, cutoff: YearMonth) -> usize {
        let before = self.events.len();
        self.events.retain(|event| event.period() >= cutoff);
        let pruned = before - self.events.len();
        if pruned > 0 {
            debug!(cutoff = %cutoff, pruned, "Pruned overage events");
        }
        pruned
    }

    /// Replaces the whole log.
    pub fn replace_all(&mut self, events: impl IntoIterator<Item = OverageEvent>) {
        *self = events.into_iter().collect();
    }

    /// The events in chronological order.
    pub fn events(&self) -> &[OverageEvent] {
        &self.events
    }

    /// Number of recorded events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether no event is recorded.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Evaluates the rolling-window status of the recorded events.
    pub fn status(&self, now: YearMonth) -> RollingWindowStatus {
        evaluate_threshold_status(&self.events, now)
    }
}

impl FromIterator<OverageEvent> for OverageLog {
    fn from_iter<I: IntoIterator<Item = OverageEvent>>(iter: I) -> Self {
        let mut events: Vec<OverageEvent> = iter.into_iter().collect();
        events.sort();
        events.dedup();
        Self { events }
    }
}

impl From<Vec<OverageEvent>> for OverageLog {
    fn from(events: Vec<OverageEvent>) -> Self {
        events.into_iter().collect()
    }
}

impl From<OverageLog> for Vec<OverageEvent> {
    fn from(log: OverageLog) -> Self {
        log.events
    }
}
