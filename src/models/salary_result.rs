//! Salary result models for the mini-job engine.
//!
//! This module contains the [`SalaryResult`] type capturing the itemized pay
//! breakdown for one month, and the audit structures recording how it was
//! derived.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Rounds a monetary amount to cents for presentation.
///
/// Internal computation always keeps full precision; this is applied only
/// when values are displayed or summarized for people.
///
/// # Example
///
/// ```
/// use minijob_engine::models::round_currency;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_currency(Decimal::from_str("11.07648").unwrap()), Decimal::from_str("11.08").unwrap());
/// assert_eq!(round_currency(Decimal::from_str("0.125").unwrap()), Decimal::from_str("0.13").unwrap());
/// ```
pub fn round_currency(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Which deduction rule applied to a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeductionKind {
    /// Base gross within the threshold: pension-insurance share only.
    PensionInsurance,
    /// Base gross above the threshold: simplified flat rate instead.
    FlatRate,
}

/// The itemized pay breakdown for one month.
///
/// Always recomputable from its [`MonthlyInput`](super::MonthlyInput); never
/// mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryResult {
    /// Hourly wage × hours, the quantity compared against the threshold.
    pub base_gross: Decimal,
    /// Tax-free Sunday/public holiday surcharge.
    pub sunday_holiday_surcharge: Decimal,
    /// Tax-free night surcharge.
    pub night_surcharge: Decimal,
    /// Sum of both surcharges.
    pub surcharge_total: Decimal,
    /// Base gross plus surcharges.
    pub combined_gross: Decimal,
    /// Which deduction rule applied.
    pub deduction_kind: DeductionKind,
    /// Pension-insurance deduction (zero when the flat rate applied).
    pub pension_insurance: Decimal,
    /// Flat-rate deduction (zero when pension insurance applied).
    pub flat_rate_deduction: Decimal,
    /// Total deductions.
    pub total_deductions: Decimal,
    /// Combined gross minus deductions.
    pub net: Decimal,
    /// Whether the base gross exceeded the threshold.
    pub exceeds_threshold: bool,
    /// Remaining earnings headroom under the threshold.
    pub headroom: Decimal,
    /// Whole additional hours that fit into the headroom.
    pub headroom_hours: u32,
}

impl SalaryResult {
    /// Returns a copy with every amount rounded to cents for display.
    pub fn rounded(&self) -> SalaryResult {
        SalaryResult {
            base_gross: round_currency(self.base_gross),
            sunday_holiday_surcharge: round_currency(self.sunday_holiday_surcharge),
            night_surcharge: round_currency(self.night_surcharge),
            surcharge_total: round_currency(self.surcharge_total),
            combined_gross: round_currency(self.combined_gross),
            deduction_kind: self.deduction_kind,
            pension_insurance: round_currency(self.pension_insurance),
            flat_rate_deduction: round_currency(self.flat_rate_deduction),
            total_deductions: round_currency(self.total_deductions),
            net: round_currency(self.net),
            exceeds_threshold: self.exceeds_threshold,
            headroom: round_currency(self.headroom),
            headroom_hours: self.headroom_hours,
        }
    }
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// Reference to the statute the rule derives from.
    pub legal_ref: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
}

/// A validated month calculation: the result plus how it was reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyCalculation {
    /// The pay breakdown.
    pub result: SalaryResult,
    /// The audit trace of every rule applied.
    pub audit_trace: AuditTrace,
}
