//! The yearly ledger of monthly inputs and its aggregation.

mod monthly_ledger;
mod summary;

pub use monthly_ledger::MonthlyLedger;
pub use summary::{MonthSummary, YearlySummary, YearlyTotals};
