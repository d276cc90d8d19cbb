//! Calculation logic for the mini-job engine.
//!
//! This module contains the calculation functions for one month's pay:
//! base gross wage, tax-free Sunday/holiday and night surcharges, the
//! threshold-dependent deduction, and the remaining headroom under the
//! earnings threshold. [`compute_salary`] and [`calculate_month`] combine
//! them into a [`SalaryResult`](crate::models::SalaryResult).

mod base_wage;
mod deduction;
mod headroom;
mod surcharges;
mod wage_calculator;

pub use base_wage::{BaseWageResult, calculate_base_wage};
pub use deduction::{DeductionResult, calculate_deduction, exceeds_threshold};
pub use headroom::{HeadroomResult, calculate_headroom};
pub use surcharges::{SurchargeResult, calculate_surcharges, effective_surcharge_hours};
pub use wage_calculator::{calculate_month, compute_salary};
