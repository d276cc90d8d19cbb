//! Threshold status classification over a rolling window.
//!
//! Within one 12-month window anchored at the first recorded overage, at
//! most two overages are tolerated. The third one forfeits the mini-job
//! status for that window.

use serde::{Deserialize, Serialize};

use crate::models::{OverageEvent, YearMonth};

use super::RollingWindow;

/// Number of overages tolerated inside a single window.
pub const TOLERATED_OVERAGES: u32 = 2;

/// Classification of the overage count inside the active window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThresholdState {
    /// No overage recorded.
    Clear,
    /// One overage inside the window; one more is tolerated.
    OneWarning,
    /// Two overages inside the window; none more is tolerated.
    TwoWarning,
    /// Three or more overages inside the window; mini-job status is forfeited.
    Exceeded,
}

impl ThresholdState {
    /// Classifies a count of overages inside one window.
    pub fn from_count(count: usize) -> Self {
        match count {
            0 => ThresholdState::Clear,
            1 => ThresholdState::OneWarning,
            2 => ThresholdState::TwoWarning,
            _ => ThresholdState::Exceeded,
        }
    }

    /// Further overages tolerated before the mini-job status is forfeited.
    pub fn remaining_tolerance(self) -> u32 {
        match self {
            ThresholdState::Clear => TOLERATED_OVERAGES,
            ThresholdState::OneWarning => TOLERATED_OVERAGES - 1,
            ThresholdState::TwoWarning | ThresholdState::Exceeded => 0,
        }
    }

    /// Whether the mini-job status is forfeited.
    pub fn is_forfeited(self) -> bool {
        self == ThresholdState::Exceeded
    }

    /// A short message suitable for warning the user.
    pub fn describe(self) -> &'static str {
        match self {
            ThresholdState::Clear => "No threshold overage recorded",
            ThresholdState::OneWarning => {
                "Threshold exceeded once in the current 12-month window; one more overage is tolerated"
            }
            ThresholdState::TwoWarning => {
                "Threshold exceeded twice in the current 12-month window; another overage forfeits mini-job status"
            }
            ThresholdState::Exceeded => {
                "Threshold exceeded more than twice in the current 12-month window; mini-job status is forfeited"
            }
        }
    }
}

/// The derived status of a sequence of overage events.
///
/// Never stored; recomputed on every query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollingWindowStatus {
    /// The classification.
    pub state: ThresholdState,
    /// The window anchored at the first event, if any event exists.
    pub window: Option<RollingWindow>,
    /// Number of events inside the window.
    pub events_in_window: usize,
    /// Further overages tolerated.
    pub remaining_tolerance: u32,
    /// Whether `now` lies inside the window.
    pub window_active: bool,
    /// Months of the window left, counting `now`.
    pub months_remaining: u32,
    /// Human-readable summary of the state.
    pub message: String,
}

/// Evaluates the rolling-window status of a sequence of overage events.
///
/// The events are sorted chronologically (and deduplicated) before
/// evaluation, so callers may pass them in any order. The window starts at
/// the earliest event and spans twelve consecutive months; only events
/// inside it are counted. Events after the window are left for the caller to
/// prune.
///
/// `now` does not change the classification. It only determines whether the
/// window is still running and how many months of it remain.
///
/// # Examples
///
/// ```
/// use minijob_engine::models::{OverageEvent, YearMonth};
/// use minijob_engine::tracking::{ThresholdState, evaluate_threshold_status};
///
/// let events = vec![
///     OverageEvent::new(0, 2025).unwrap(),
///     OverageEvent::new(5, 2025).unwrap(),
/// ];
/// let now = YearMonth::new(6, 2025).unwrap();
///
/// let status = evaluate_threshold_status(&events, now);
/// assert_eq!(status.state, ThresholdState::TwoWarning);
/// assert_eq!(status.remaining_tolerance, 0);
/// ```
pub fn evaluate_threshold_status(events: &[OverageEvent], now: YearMonth) -> RollingWindowStatus {
    let mut sorted: Vec<OverageEvent> = events.to_vec();
    sorted.sort();
    sorted.dedup();

    let Some(first) = sorted.first() else {
        let state = ThresholdState::Clear;
        return RollingWindowStatus {
            state,
            window: None,
            events_in_window: 0,
            remaining_tolerance: state.remaining_tolerance(),
            window_active: false,
            months_remaining: 0,
            message: state.describe().to_string(),
        };
    };

    let window = RollingWindow::starting_at(first.period());
    let events_in_window = sorted
        .iter()
        .filter(|event| window.contains(event.period()))
        .count();
    let state = ThresholdState::from_count(events_in_window);

    RollingWindowStatus {
        state,
        window: Some(window),
        events_in_window,
        remaining_tolerance: state.remaining_tolerance(),
        window_active: window.contains(now),
        months_remaining: window.months_remaining(now),
        message: format!("{} ({})", state.describe(), window),
    }
}
