//! Threshold tracking over a rolling 12-month window ("Zeitjahr").
//!
//! Callers record a month in an [`OverageLog`] whenever its base gross wage
//! exceeded the earnings threshold. [`evaluate_threshold_status`] classifies
//! the recorded events into a [`ThresholdState`] over a [`RollingWindow`]
//! anchored at the first overage.

mod overage_log;
mod status;
mod window;

pub use overage_log::OverageLog;
pub use status::{RollingWindowStatus, TOLERATED_OVERAGES, ThresholdState, evaluate_threshold_status};
pub use window::{RollingWindow, WINDOW_MONTHS};
