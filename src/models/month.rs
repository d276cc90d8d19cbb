//! Calendar month model.
//!
//! Months are identified by a 0-based index internally and by their German
//! name in transfer files.

use serde::{Deserialize, Serialize};

/// A calendar month.
///
/// # Example
///
/// ```
/// use minijob_engine::models::Month;
///
/// assert_eq!(Month::March.index(), 2);
/// assert_eq!(Month::March.german_name(), "März");
/// assert_eq!(Month::from_german_name("märz"), Some(Month::March));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Month {
    /// Januar.
    January,
    /// Februar.
    February,
    /// März.
    March,
    /// April.
    April,
    /// Mai.
    May,
    /// Juni.
    June,
    /// Juli.
    July,
    /// August.
    August,
    /// September.
    September,
    /// Oktober.
    October,
    /// November.
    November,
    /// Dezember.
    December,
}

impl Month {
    /// All twelve months in calendar order.
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// Returns the 0-based month index (January = 0).
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Returns the month for a 0-based index, or `None` if out of range.
    pub fn from_index(index: u8) -> Option<Month> {
        Self::ALL.get(usize::from(index)).copied()
    }

    /// Returns the German month name used as the key in transfer files.
    pub fn german_name(self) -> &'static str {
        match self {
            Month::January => "Januar",
            Month::February => "Februar",
            Month::March => "März",
            Month::April => "April",
            Month::May => "Mai",
            Month::June => "Juni",
            Month::July => "Juli",
            Month::August => "August",
            Month::September => "September",
            Month::October => "Oktober",
            Month::November => "November",
            Month::December => "Dezember",
        }
    }

    /// Looks up a month by its German name, ignoring case and surrounding whitespace.
    pub fn from_german_name(name: &str) -> Option<Month> {
        let name = name.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|m| m.german_name().to_lowercase() == name)
    }

    /// Returns the three-letter English abbreviation.
    pub fn short_name(self) -> &'static str {
        match self {
            Month::January => "Jan",
            Month::February => "Feb",
            Month::March => "Mar",
            Month::April => "Apr",
            Month::May => "May",
            Month::June => "Jun",
            Month::July => "Jul",
            Month::August => "Aug",
            Month::September => "Sep",
            Month::October => "Oct",
            Month::November => "Nov",
            Month::December => "Dec",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indices_follow_calendar_order() {
        for (i, month) in Month::ALL.iter().enumerate() {
            assert_eq!(usize::from(month.index()), i);
            assert_eq!(Month::from_index(i as u8), Some(*month));
        }
    }

    #[test]
    fn test_from_index_out_of_range() {
        assert_eq!(Month::from_index(12), None);
    }

    #[test]
    fn test_german_names_round_trip() {
        for month in Month::ALL {
            assert_eq!(Month::from_german_name(month.german_name()), Some(month));
        }
    }

    #[test]
    fn test_german_name_lookup_is_case_insensitive() {
        assert_eq!(Month::from_german_name("DEZEMBER"), Some(Month::December));
        assert_eq!(Month::from_german_name("  mai "), Some(Month::May));
    }

    #[test]
    fn test_unknown_german_name() {
        assert_eq!(Month::from_german_name("Brumaire"), None);
        assert_eq!(Month::from_german_name("January"), None);
    }

    #[test]
    fn test_month_serialization() {
        let json = serde_json::to_string(&Month::September).unwrap();
        assert_eq!(json, "\"september\"");

        let month: Month = serde_json::from_str("\"march\"").unwrap();
        assert_eq!(month, Month::March);
    }
}
