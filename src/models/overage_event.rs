//! Overage event model.

use serde::{Deserialize, Serialize};

use crate::error::EngineResult;

use super::{Month, YearMonth};

/// A month in which the base gross wage exceeded the earnings threshold.
///
/// Events are created explicitly by the caller; nothing in the engine infers
/// them from history. They order chronologically.
///
/// # Example
///
/// ```
/// use minijob_engine::models::OverageEvent;
///
/// let event = OverageEvent::new(5, 2025).unwrap();
/// assert_eq!(event.month_index(), 5);
/// assert_eq!(event.year(), 2025);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OverageEvent(YearMonth);

impl OverageEvent {
    /// Creates an event from a 0-based month index and a year.
    pub fn new(month_index: u8, year: i32) -> EngineResult<Self> {
        YearMonth::new(month_index, year).map(Self)
    }

    /// Creates an event for the given month.
    pub fn of(month: Month, year: i32) -> EngineResult<Self> {
        YearMonth::of(month, year).map(Self)
    }

    /// The month the overage occurred in.
    pub fn period(&self) -> YearMonth {
        self.0
    }

    /// The 0-based month index.
    pub fn month_index(&self) -> u8 {
        self.0.month_index()
    }

    /// The calendar year.
    pub fn year(&self) -> i32 {
        self.0.year()
    }
}

impl From<YearMonth> for OverageEvent {
    fn from(period: YearMonth) -> Self {
        Self(period)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_invalid_month() {
        assert!(OverageEvent::new(12, 2025).is_err());
    }

    #[test]
    fn test_events_order_by_year_then_month() {
        let early = OverageEvent::new(11, 2024).unwrap();
        let late = OverageEvent::new(0, 2025).unwrap();
        assert!(early < late);
    }

    #[test]
    fn test_serializes_as_plain_pair() {
        let event = OverageEvent::of(Month::June, 2025).unwrap();
        let json = serde_json::to_value(event).unwrap();
        assert_eq!(json, serde_json::json!({"year": 2025, "month_index": 5}));

        let back: OverageEvent = serde_json::from_value(json).unwrap();
        assert_eq!(back, event);
    }
}
