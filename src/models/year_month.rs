//! Year-month model used for overage events and window arithmetic.

use std::fmt;
use std::ops::RangeInclusive;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::Month;

/// A specific calendar month of a specific year.
///
/// Ordering is chronological: by year, then by month.
///
/// # Example
///
/// ```
/// use minijob_engine::models::{Month, YearMonth};
///
/// let start = YearMonth::new(3, 2025).unwrap();
/// assert_eq!(start.month(), Month::April);
/// assert_eq!(start.plus_months(11), YearMonth::new(2, 2026).unwrap());
/// assert!(YearMonth::new(12, 2025).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawYearMonth")]
pub struct YearMonth {
    year: i32,
    month_index: u8,
}

#[derive(Deserialize)]
struct RawYearMonth {
    month_index: u8,
    year: i32,
}

impl TryFrom<RawYearMonth> for YearMonth {
    type Error = EngineError;

    fn try_from(raw: RawYearMonth) -> Result<Self, Self::Error> {
        YearMonth::new(raw.month_index, raw.year)
    }
}

impl YearMonth {
    /// Creates a year-month from a 0-based month index.
    ///
    /// Fails with [`EngineError::InvalidInput`] when the index exceeds 11 or
    /// the year lies outside the range of calendar dates (see
    /// [`YearMonth::year_range`]).
    pub fn new(month_index: u8, year: i32) -> EngineResult<Self> {
        if month_index > 11 {
            return Err(EngineError::invalid_input(
                "month_index",
                format!("must lie between 0 and 11, got {}", month_index),
            ));
        }
        Self::check_year(year)?;
        Ok(Self { year, month_index })
    }

    /// Creates a year-month from a [`Month`].
    ///
    /// Fails with [`EngineError::InvalidInput`] when the year is out of range.
    pub fn of(month: Month, year: i32) -> EngineResult<Self> {
        Self::new(month.index(), year)
    }

    /// Years accepted by [`YearMonth::new`]: those of chrono's `NaiveDate`.
    pub fn year_range() -> RangeInclusive<i32> {
        NaiveDate::MIN.year()..=NaiveDate::MAX.year()
    }

    fn check_year(year: i32) -> EngineResult<()> {
        let range = Self::year_range();
        if !range.contains(&year) {
            return Err(EngineError::invalid_input(
                "year",
                format!(
                    "must lie between {} and {}, got {}",
                    range.start(),
                    range.end(),
                    year
                ),
            ));
        }
        Ok(())
    }

    /// The year-month containing the given date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month_index: date.month0() as u8,
        }
    }

    /// The calendar year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The 0-based month index.
    pub fn month_index(&self) -> u8 {
        self.month_index
    }

    /// The calendar month.
    pub fn month(&self) -> Month {
        Month::ALL[usize::from(self.month_index)]
    }

    /// Number of months since January of year 0.
    pub fn ordinal(&self) -> i64 {
        i64::from(self.year) * 12 + i64::from(self.month_index)
    }

    /// Signed number of months from `earlier` to `self`.
    pub fn months_since(&self, earlier: YearMonth) -> i64 {
        self.ordinal() - earlier.ordinal()
    }

    /// The year-month `months` months later.
    ///
    /// Saturates at the last month representable by `i32` years; offsets
    /// used by the rolling window stay far below that from any valid start.
    pub fn plus_months(&self, months: u32) -> Self {
        let ordinal = self.ordinal() + i64::from(months);
        match i32::try_from(ordinal.div_euclid(12)) {
            Ok(year) => Self {
                year,
                month_index: ordinal.rem_euclid(12) as u8,
            },
            Err(_) => Self {
                year: i32::MAX,
                month_index: 11,
            },
        }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month().short_name(), self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ym(month_index: u8, year: i32) -> YearMonth {
        YearMonth::new(month_index, year).unwrap()
    }

    #[test]
    fn test_new_rejects_month_index_above_11() {
        match YearMonth::new(12, 2025) {
            Err(EngineError::InvalidInput { field, .. }) => assert_eq!(field, "month_index"),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_new_rejects_year_outside_calendar_range() {
        match YearMonth::new(6, i32::MAX) {
            Err(EngineError::InvalidInput { field, .. }) => assert_eq!(field, "year"),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
        assert!(YearMonth::new(0, i32::MIN).is_err());

        let last = *YearMonth::year_range().end();
        assert!(YearMonth::of(Month::July, last).is_ok());
        assert!(YearMonth::of(Month::July, last + 1).is_err());
    }

    #[test]
    fn test_window_end_from_last_valid_year_stays_after_start() {
        let last = *YearMonth::year_range().end();
        let start = ym(6, last);
        let end = start.plus_months(11);

        assert!(end > start);
        assert_eq!(end.year(), last + 1);
        assert_eq!(end.month(), Month::June);
    }

    #[test]
    fn test_plus_months_large_offset_moves_forward() {
        let end = YearMonth::of(Month::July, 2025).unwrap().plus_months(u32::MAX);
        assert!(end > ym(6, 2025));
    }

    #[test]
    fn test_deserialize_rejects_year_out_of_range() {
        let json = format!(r#"{{"month_index": 6, "year": {}}}"#, i32::MAX);
        assert!(serde_json::from_str::<YearMonth>(&json).is_err());
    }

    #[test]
    fn test_ordering_is_chronological() {
        let mut months = vec![ym(0, 2026), ym(11, 2025), ym(5, 2025), ym(0, 2025)];
        months.sort();
        assert_eq!(months, vec![ym(0, 2025), ym(5, 2025), ym(11, 2025), ym(0, 2026)]);
    }

    #[test]
    fn test_months_since_across_year_boundary() {
        assert_eq!(ym(2, 2026).months_since(ym(10, 2025)), 4);
        assert_eq!(ym(10, 2025).months_since(ym(2, 2026)), -4);
        assert_eq!(ym(4, 2025).months_since(ym(4, 2025)), 0);
    }

    #[test]
    fn test_plus_months_wraps_year() {
        assert_eq!(ym(0, 2025).plus_months(11), ym(11, 2025));
        assert_eq!(ym(6, 2025).plus_months(11), ym(5, 2026));
        assert_eq!(ym(11, 2025).plus_months(1), ym(0, 2026));
    }

    #[test]
    fn test_from_date() {
        let date = NaiveDate::from_ymd_opt(2025, 7, 31).unwrap();
        assert_eq!(YearMonth::from_date(date), ym(6, 2025));
    }

    #[test]
    fn test_display() {
        assert_eq!(ym(0, 2025).to_string(), "Jan 2025");
        assert_eq!(ym(11, 2026).to_string(), "Dec 2026");
    }

    #[test]
    fn test_deserialize_validates_month_index() {
        let ok: YearMonth = serde_json::from_str(r#"{"month_index": 5, "year": 2025}"#).unwrap();
        assert_eq!(ok, ym(5, 2025));

        let err = serde_json::from_str::<YearMonth>(r#"{"month_index": 12, "year": 2025}"#);
        assert!(err.is_err());
    }

    #[test]
    fn test_serialize_shape() {
        let json = serde_json::to_value(ym(5, 2025)).unwrap();
        assert_eq!(json, serde_json::json!({"year": 2025, "month_index": 5}));
    }
}
