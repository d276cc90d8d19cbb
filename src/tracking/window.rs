//! Rolling 12-month window ("Zeitjahr") arithmetic.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::YearMonth;

/// Number of consecutive calendar months in a rolling window.
pub const WINDOW_MONTHS: u32 = 12;

/// A window of twelve consecutive calendar months, anchored at a start month.
///
/// This is never a calendar year: a window starting in July runs until June
/// of the following year.
///
/// # Example
///
/// ```
/// use minijob_engine::models::YearMonth;
/// use minijob_engine::tracking::RollingWindow;
///
/// let window = RollingWindow::starting_at(YearMonth::new(6, 2025).unwrap());
/// assert_eq!(window.end(), YearMonth::new(5, 2026).unwrap());
/// assert!(window.contains(YearMonth::new(0, 2026).unwrap()));
/// assert!(!window.contains(YearMonth::new(6, 2026).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollingWindow {
    start: YearMonth,
    end: YearMonth,
}

impl RollingWindow {
    /// Creates the window whose first month is `start`.
    ///
    /// The end month index is `(start + 11) mod 12` and the end year is
    /// `start_year + floor((start + 11) / 12)`.
    pub fn starting_at(start: YearMonth) -> Self {
        Self {
            start,
            end: start.plus_months(WINDOW_MONTHS - 1),
        }
    }

    /// The first month of the window.
    pub fn start(&self) -> YearMonth {
        self.start
    }

    /// The last month of the window (inclusive).
    pub fn end(&self) -> YearMonth {
        self.end
    }

    /// Whether `month` falls within the window, both ends inclusive.
    pub fn contains(&self, month: YearMonth) -> bool {
        let offset = month.months_since(self.start);
        (0..i64::from(WINDOW_MONTHS)).contains(&offset)
    }

    /// Months left in the window counting `now` itself, or zero if `now`
    /// lies outside the window.
    pub fn months_remaining(&self, now: YearMonth) -> u32 {
        if self.contains(now) {
            (self.end.months_since(now) + 1) as u32
        } else {
            0
        }
    }
}

impl fmt::Display for RollingWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} – {}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ym(month_index: u8, year: i32) -> YearMonth {
        YearMonth::new(month_index, year).unwrap()
    }

    #[test]
    fn test_window_from_january_ends_in_december() {
        let window = RollingWindow::starting_at(ym(0, 2025));
        assert_eq!(window.end(), ym(11, 2025));
    }

    #[test]
    fn test_window_crosses_year_boundary() {
        let window = RollingWindow::starting_at(ym(5, 2025));
        assert_eq!(window.end(), ym(4, 2026));
    }

    #[test]
    fn test_window_from_december() {
        let window = RollingWindow::starting_at(ym(11, 2025));
        assert_eq!(window.end(), ym(10, 2026));
    }

    #[test]
    fn test_contains_is_inclusive_at_both_ends() {
        let window = RollingWindow::starting_at(ym(3, 2025));

        assert!(window.contains(ym(3, 2025)));
        assert!(window.contains(ym(2, 2026)));
        assert!(!window.contains(ym(2, 2025)));
        assert!(!window.contains(ym(3, 2026)));
    }

    #[test]
    fn test_months_remaining() {
        let window = RollingWindow::starting_at(ym(0, 2025));

        assert_eq!(window.months_remaining(ym(0, 2025)), 12);
        assert_eq!(window.months_remaining(ym(11, 2025)), 1);
        assert_eq!(window.months_remaining(ym(0, 2026)), 0);
        assert_eq!(window.months_remaining(ym(11, 2024)), 0);
    }

    #[test]
    fn test_display() {
        let window = RollingWindow::starting_at(ym(0, 2025));
        assert_eq!(window.to_string(), "Jan 2025 – Dec 2025");
    }
}
