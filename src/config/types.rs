//! Configuration types for mini-job calculations.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML files of a configuration directory.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Statutory limits and metadata from `limits.yaml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Limits {
    /// Human-readable name of the configuration (e.g., "Minijob 2025").
    pub name: String,
    /// The calendar year these limits apply to.
    pub year: i32,
    /// Statutory minimum hourly wage (Mindestlohn).
    pub minimum_wage: Decimal,
    /// Highest hourly wage a monthly input may carry.
    pub max_hourly_wage: Decimal,
    /// Monthly earnings threshold (Minijob-Grenze), compared against base gross only.
    pub threshold: Decimal,
    /// Maximum hours a single month may carry.
    pub max_monthly_hours: Decimal,
    /// Hours assigned to a month that has never been edited.
    pub default_monthly_hours: Decimal,
}

/// Deduction rates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeductionRates {
    /// Employee pension-insurance share applied within the threshold.
    pub pension_rate: Decimal,
    /// Simplified flat rate applied once the threshold is exceeded.
    pub flat_rate: Decimal,
}

/// Tax-free surcharge rates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurchargeRates {
    /// Sunday and public holiday surcharge.
    pub sunday_holiday: Decimal,
    /// Night work surcharge.
    pub night: Decimal,
}

/// Rate configuration from `rates.yaml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateConfig {
    /// Deduction rates.
    pub deductions: DeductionRates,
    /// Surcharge rates.
    pub surcharges: SurchargeRates,
}

/// The complete mini-job configuration.
///
/// # Example
///
/// ```
/// use minijob_engine::config::MinijobConfig;
/// use rust_decimal::Decimal;
///
/// let config = MinijobConfig::reference();
/// assert_eq!(config.threshold(), Decimal::new(55600, 2));
/// assert_eq!(config.minimum_wage(), Decimal::new(1282, 2));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinijobConfig {
    limits: Limits,
    rates: RateConfig,
}

impl MinijobConfig {
    /// Creates a new MinijobConfig from its component parts.
    pub fn new(limits: Limits, rates: RateConfig) -> Self {
        Self { limits, rates }
    }

    /// The built-in 2025 reference configuration.
    pub fn reference() -> Self {
        Self {
            limits: Limits {
                name: "Minijob 2025".to_string(),
                year: 2025,
                minimum_wage: Decimal::new(1282, 2),
                max_hourly_wage: Decimal::new(50000, 2),
                threshold: Decimal::new(55600, 2),
                max_monthly_hours: Decimal::new(40, 0),
                default_monthly_hours: Decimal::new(24, 0),
            },
            rates: RateConfig {
                deductions: DeductionRates {
                    pension_rate: Decimal::new(36, 3),
                    flat_rate: Decimal::new(30, 2),
                },
                surcharges: SurchargeRates {
                    sunday_holiday: Decimal::new(30, 2),
                    night: Decimal::new(25, 2),
                },
            },
        }
    }

    /// Returns the statutory limits.
    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Returns the rate configuration.
    pub fn rates(&self) -> &RateConfig {
        &self.rates
    }

    /// Returns the minimum hourly wage.
    pub fn minimum_wage(&self) -> Decimal {
        self.limits.minimum_wage
    }

    /// Returns the highest accepted hourly wage.
    pub fn max_hourly_wage(&self) -> Decimal {
        self.limits.max_hourly_wage
    }

    /// Returns the monthly earnings threshold.
    pub fn threshold(&self) -> Decimal {
        self.limits.threshold
    }

    /// Returns the monthly hour ceiling.
    pub fn max_monthly_hours(&self) -> Decimal {
        self.limits.max_monthly_hours
    }

    /// Returns the surcharge rates.
    pub fn surcharges(&self) -> &SurchargeRates {
        &self.rates.surcharges
    }

    /// Returns the deduction rates.
    pub fn deductions(&self) -> &DeductionRates {
        &self.rates.deductions
    }

    /// Checks the values for internal consistency.
    ///
    /// Returns a description of the first problem found.
    pub fn check_consistency(&self) -> Result<(), String> {
        let limits = &self.limits;
        if limits.minimum_wage <= Decimal::ZERO {
            return Err("minimum_wage must be positive".to_string());
        }
        if limits.max_hourly_wage < limits.minimum_wage {
            return Err(format!(
                "max_hourly_wage {} must not be below minimum_wage {}",
                limits.max_hourly_wage, limits.minimum_wage
            ));
        }
        if limits.threshold <= Decimal::ZERO {
            return Err("threshold must be positive".to_string());
        }
        if limits.max_monthly_hours <= Decimal::ZERO {
            return Err("max_monthly_hours must be positive".to_string());
        }
        if limits.default_monthly_hours < Decimal::ZERO
            || limits.default_monthly_hours > limits.max_monthly_hours
        {
            return Err(format!(
                "default_monthly_hours {} must lie between 0 and max_monthly_hours {}",
                limits.default_monthly_hours, limits.max_monthly_hours
            ));
        }

        // Base wage plus both surcharges at most triples the base wage.
        let largest_base = limits.max_hourly_wage.checked_mul(limits.max_monthly_hours);
        if largest_base
            .and_then(|base| base.checked_mul(Decimal::from(3)))
            .is_none()
        {
            return Err(format!(
                "max_hourly_wage {} × max_monthly_hours {} is too large to compute with",
                limits.max_hourly_wage, limits.max_monthly_hours
            ));
        }

        let rates = [
            ("pension_rate", self.rates.deductions.pension_rate),
            ("flat_rate", self.rates.deductions.flat_rate),
            ("sunday_holiday", self.rates.surcharges.sunday_holiday),
            ("night", self.rates.surcharges.night),
        ];
        for (name, rate) in rates {
            if rate < Decimal::ZERO || rate > Decimal::ONE {
                return Err(format!("{} must lie between 0 and 1, got {}", name, rate));
            }
        }

        Ok(())
    }
}

impl Default for MinijobConfig {
    fn default() -> Self {
        Self::reference()
    }
}
