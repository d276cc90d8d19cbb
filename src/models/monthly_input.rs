//! Monthly input model.
//!
//! This module defines the [`MonthlyInput`] struct holding one calendar
//! month's work parameters, together with the validation applied at the
//! ingestion boundary.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::MinijobConfig;
use crate::error::{EngineError, EngineResult};

/// One calendar month's work parameters.
///
/// # Example
///
/// ```
/// use minijob_engine::config::MinijobConfig;
/// use minijob_engine::models::MonthlyInput;
/// use rust_decimal::Decimal;
///
/// let config = MinijobConfig::reference();
/// let input = MonthlyInput::with_defaults(&config);
/// assert_eq!(input.hourly_wage, Decimal::new(1282, 2));
/// assert_eq!(input.hours, Decimal::new(24, 0));
/// assert!(!input.sunday_holiday_surcharge_enabled);
/// assert!(input.validate(&config).is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyInput {
    /// Hourly wage in EUR.
    pub hourly_wage: Decimal,
    /// Hours worked this month.
    pub hours: Decimal,
    /// Whether the Sunday/public holiday surcharge applies.
    #[serde(default)]
    pub sunday_holiday_surcharge_enabled: bool,
    /// Hours eligible for the Sunday/public holiday surcharge.
    #[serde(default)]
    pub sunday_holiday_surcharge_hours: Decimal,
    /// Whether the night surcharge applies.
    #[serde(default)]
    pub night_surcharge_enabled: bool,
    /// Hours eligible for the night surcharge.
    #[serde(default)]
    pub night_surcharge_hours: Decimal,
}

impl MonthlyInput {
    /// Creates the input assigned to a month that has never been edited:
    /// minimum wage, the default hours and no surcharges.
    pub fn with_defaults(config: &MinijobConfig) -> Self {
        Self {
            hourly_wage: config.minimum_wage(),
            hours: config.limits().default_monthly_hours,
            sunday_holiday_surcharge_enabled: false,
            sunday_holiday_surcharge_hours: Decimal::ZERO,
            night_surcharge_enabled: false,
            night_surcharge_hours: Decimal::ZERO,
        }
    }

    /// Checks every invariant of a monthly input.
    ///
    /// Out-of-range values are rejected, never clamped:
    /// - `hourly_wage` must lie between the configured minimum and maximum wage
    /// - `hours` must lie between 0 and the configured monthly ceiling
    /// - both surcharge hour counts must lie between 0 and `hours`
    pub fn validate(&self, config: &MinijobConfig) -> EngineResult<()> {
        if self.hourly_wage < config.minimum_wage() {
            return Err(EngineError::invalid_input(
                "hourly_wage",
                format!(
                    "{} is below the minimum wage of {}",
                    self.hourly_wage,
                    config.minimum_wage()
                ),
            ));
        }

        if self.hourly_wage > config.max_hourly_wage() {
            return Err(EngineError::invalid_input(
                "hourly_wage",
                format!(
                    "{} exceeds the maximum hourly wage of {}",
                    self.hourly_wage,
                    config.max_hourly_wage()
                ),
            ));
        }

        if self.hours < Decimal::ZERO {
            return Err(EngineError::invalid_input(
                "hours",
                format!("must not be negative, got {}", self.hours),
            ));
        }

        if self.hours > config.max_monthly_hours() {
            return Err(EngineError::invalid_input(
                "hours",
                format!(
                    "{} exceeds the monthly maximum of {}",
                    self.hours,
                    config.max_monthly_hours()
                ),
            ));
        }

        Self::check_surcharge_hours(
            "sunday_holiday_surcharge_hours",
            self.sunday_holiday_surcharge_hours,
            self.hours,
        )?;
        Self::check_surcharge_hours("night_surcharge_hours", self.night_surcharge_hours, self.hours)
    }

    fn check_surcharge_hours(field: &str, value: Decimal, hours: Decimal) -> EngineResult<()> {
        if value < Decimal::ZERO {
            return Err(EngineError::invalid_input(
                field,
                format!("must not be negative, got {}", value),
            ));
        }
        if value > hours {
            return Err(EngineError::invalid_input(
                field,
                format!("{} exceeds the {} hours worked", value, hours),
            ));
        }
        Ok(())
    }
}

impl Default for MonthlyInput {
    fn default() -> Self {
        Self::with_defaults(&MinijobConfig::reference())
    }
}
