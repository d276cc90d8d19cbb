//! Core data models for the mini-job engine.
//!
//! This module contains all the domain models used throughout the engine.

mod month;
mod monthly_input;
mod overage_event;
mod salary_result;
mod year_month;

pub use month::Month;
pub use monthly_input::MonthlyInput;
pub use overage_event::OverageEvent;
pub use salary_result::{
    AuditStep, AuditTrace, AuditWarning, DeductionKind, MonthlyCalculation, SalaryResult,
    round_currency,
};
pub use year_month::YearMonth;
