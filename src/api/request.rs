//! Request types for the mini-job engine API.
//!
//! This module defines the JSON request structures for every endpoint.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Month, MonthlyInput, OverageEvent, YearMonth};

/// Request body for the `/calculate` endpoint: one month's work parameters.
///
/// Amounts may be sent as JSON strings (`"12.82"`) or numbers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
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

impl From<CalculationRequest> for MonthlyInput {
    fn from(req: CalculationRequest) -> Self {
        MonthlyInput {
            hourly_wage: req.hourly_wage,
            hours: req.hours,
            sunday_holiday_surcharge_enabled: req.sunday_holiday_surcharge_enabled,
            sunday_holiday_surcharge_hours: req.sunday_holiday_surcharge_hours,
            night_surcharge_enabled: req.night_surcharge_enabled,
            night_surcharge_hours: req.night_surcharge_hours,
        }
    }
}

impl From<MonthlyInput> for CalculationRequest {
    fn from(input: MonthlyInput) -> Self {
        CalculationRequest {
            hourly_wage: input.hourly_wage,
            hours: input.hours,
            sunday_holiday_surcharge_enabled: input.sunday_holiday_surcharge_enabled,
            sunday_holiday_surcharge_hours: input.sunday_holiday_surcharge_hours,
            night_surcharge_enabled: input.night_surcharge_enabled,
            night_surcharge_hours: input.night_surcharge_hours,
        }
    }
}

/// Request body for the `/threshold/status` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThresholdStatusRequest {
    /// Recorded overage events, in any order.
    #[serde(default)]
    pub events: Vec<OverageEvent>,
    /// The month the status is evaluated for. Defaults to the current UTC month.
    #[serde(default)]
    pub now: Option<YearMonth>,
}

/// Request body for the `/ledger/summary` endpoint.
///
/// Months are keyed by lowercase English name (`"january"`). Months that are
/// not listed take the default input.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LedgerSummaryRequest {
    /// Inputs per month.
    #[serde(default)]
    pub months: BTreeMap<Month, CalculationRequest>,
}
