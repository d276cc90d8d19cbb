//! Column layout of the transfer table.

/// Row key column holding the German month name.
pub const MONTH: &str = "Monat";
/// Hourly wage column.
pub const HOURLY_WAGE: &str = "grundlohn";
/// Hours worked column.
pub const HOURS: &str = "stunden";
/// Sunday/public holiday surcharge flag column.
pub const SUNDAY_HOLIDAY_ENABLED: &str = "se_zuschlag";
/// Sunday/public holiday surcharge hours column.
pub const SUNDAY_HOLIDAY_HOURS: &str = "se_zuschlag_stunden";
/// Night surcharge flag column.
pub const NIGHT_ENABLED: &str = "nacht_zuschlag";
/// Night surcharge hours column.
pub const NIGHT_HOURS: &str = "nacht_zuschlag_stunden";

/// Columns every import must carry, in export order.
pub const REQUIRED: [&str; 7] = [
    MONTH,
    HOURLY_WAGE,
    HOURS,
    SUNDAY_HOLIDAY_ENABLED,
    SUNDAY_HOLIDAY_HOURS,
    NIGHT_ENABLED,
    NIGHT_HOURS,
];

/// Row key of the optional row carrying the overage events.
pub const EVENT_ROW_KEY: &str = "Ueberschreitungen";

/// Number of overage event slots in the table.
pub const EVENT_SLOTS: usize = 3;

/// Name of the month-index column of an event slot (0-based slot).
pub fn event_month(slot: usize) -> String {
    format!("ueberschreitung_{}_monat", slot + 1)
}

/// Name of the year column of an event slot (0-based slot).
pub fn event_year(slot: usize) -> String {
    format!("ueberschreitung_{}_jahr", slot + 1)
}

/// Table column of a [`MonthlyInput`](crate::models::MonthlyInput) field.
pub(crate) fn for_field(field: &str) -> &'static str {
    match field {
        "hourly_wage" => HOURLY_WAGE,
        "hours" => HOURS,
        "sunday_holiday_surcharge_enabled" => SUNDAY_HOLIDAY_ENABLED,
        "sunday_holiday_surcharge_hours" => SUNDAY_HOLIDAY_HOURS,
        "night_surcharge_enabled" => NIGHT_ENABLED,
        "night_surcharge_hours" => NIGHT_HOURS,
        _ => MONTH,
    }
}

/// Literal written for a flag.
pub(crate) fn format_flag(value: bool) -> &'static str {
    if value { "True" } else { "False" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_column_names_are_one_based() {
        assert_eq!(event_month(0), "ueberschreitung_1_monat");
        assert_eq!(event_year(2), "ueberschreitung_3_jahr");
    }

    #[test]
    fn test_field_mapping() {
        assert_eq!(for_field("hourly_wage"), "grundlohn");
        assert_eq!(for_field("night_surcharge_hours"), "nacht_zuschlag_stunden");
    }

    #[test]
    fn test_format_flag() {
        assert_eq!(format_flag(true), "True");
        assert_eq!(format_flag(false), "False");
    }
}
