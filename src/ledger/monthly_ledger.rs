//! A year of monthly inputs.

use tracing::debug;

use crate::config::MinijobConfig;
use crate::error::EngineResult;
use crate::models::{Month, MonthlyInput};

/// Twelve monthly inputs, one per calendar month.
///
/// Entries are only ever replaced as whole records, and only with input that
/// passed validation, so every stored entry satisfies the
/// [`MonthlyInput`] invariants. The ledger has no serde representation;
/// it is persisted through [`export_csv`](crate::transfer::export_csv) and
/// rebuilt by [`import_csv`](crate::transfer::import_csv), which validates
/// every row.
///
/// # Example
///
/// ```
/// use minijob_engine::config::MinijobConfig;
/// use minijob_engine::ledger::MonthlyLedger;
/// use minijob_engine::models::{Month, MonthlyInput};
/// use rust_decimal::Decimal;
///
/// let config = MinijobConfig::reference();
/// let mut ledger = MonthlyLedger::new(&config);
///
/// let mut may = ledger.get(Month::May).clone();
/// may.hours = Decimal::new(30, 0);
/// ledger.replace(Month::May, may, &config).unwrap();
///
/// assert_eq!(ledger.get(Month::May).hours, Decimal::new(30, 0));
/// assert_eq!(ledger.get(Month::June).hours, Decimal::new(24, 0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyLedger {
    entries: [MonthlyInput; 12],
}

impl MonthlyLedger {
    /// Creates a ledger with every month at its default input.
    pub fn new(config: &MinijobConfig) -> Self {
        Self {
            entries: std::array::from_fn(|_| MonthlyInput::with_defaults(config)),
        }
    }

    /// Returns the input for a month.
    pub fn get(&self, month: Month) -> &MonthlyInput {
        &self.entries[usize::from(month.index())]
    }

    /// Replaces a month's input after validating it.
    ///
    /// On error the ledger is unchanged.
    pub fn replace(
        &mut self,
        month: Month,
        input: MonthlyInput,
        config: &MinijobConfig,
    ) -> EngineResult<()> {
        input.validate(config)?;
        debug!(month = month.german_name(), hours = %input.hours, wage = %input.hourly_wage, "Replaced month");
        self.entries[usize::from(month.index())] = input;
        Ok(())
    }

    /// Iterates over all months in calendar order.
    pub fn iter(&self) -> impl Iterator<Item = (Month, &MonthlyInput)> {
        Month::ALL.into_iter().zip(self.entries.iter())
    }
}

impl Default for MonthlyLedger {
    fn default() -> Self {
        Self::new(&MinijobConfig::reference())
    }
}
