//! Yearly aggregation and month-by-month comparison view.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::compute_salary;
use crate::config::MinijobConfig;
use crate::error::EngineResult;
use crate::models::{Month, MonthlyInput, OverageEvent, SalaryResult};

use super::MonthlyLedger;

/// One row of the comparison view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthSummary {
    /// The calendar month.
    pub month: Month,
    /// The month's input.
    pub input: MonthlyInput,
    /// The month's pay breakdown at full precision.
    pub result: SalaryResult,
}

/// Sums over all twelve months.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct YearlyTotals {
    /// Total base gross wage.
    pub base_gross: Decimal,
    /// Total tax-free surcharges.
    pub surcharge_total: Decimal,
    /// Total combined gross.
    pub combined_gross: Decimal,
    /// Total deductions.
    pub total_deductions: Decimal,
    /// Total net pay.
    pub net: Decimal,
    /// Total hours worked.
    pub hours: Decimal,
}

/// A year's pay, month by month and in total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlySummary {
    /// One row per month in calendar order.
    pub months: Vec<MonthSummary>,
    /// Sums over all months.
    pub totals: YearlyTotals,
    /// Months whose base gross exceeded the threshold.
    pub exceeding_months: Vec<Month>,
    /// Number of months within the threshold.
    pub months_within_threshold: usize,
}

impl MonthlyLedger {
    /// Computes every month and aggregates the results.
    ///
    /// Months are independent of each other; the summary only depends on the
    /// ledger and the configuration.
    ///
    /// # Example
    ///
    /// ```
    /// use minijob_engine::config::MinijobConfig;
    /// use minijob_engine::ledger::MonthlyLedger;
    /// use rust_decimal::Decimal;
    /// use std::str::FromStr;
    ///
    /// let config = MinijobConfig::reference();
    /// let summary = MonthlyLedger::new(&config).summarize(&config);
    ///
    /// // 12 × 307.68
    /// assert_eq!(summary.totals.base_gross, Decimal::from_str("3692.16").unwrap());
    /// assert!(summary.exceeding_months.is_empty());
    /// ```
    pub fn summarize(&self, config: &MinijobConfig) -> YearlySummary {
        let months: Vec<MonthSummary> = self
            .iter()
            .map(|(month, input)| MonthSummary {
                month,
                input: input.clone(),
                result: compute_salary(input, config),
            })
            .collect();

        let totals = months
            .iter()
            .fold(YearlyTotals::default(), |mut totals, row| {
                totals.base_gross += row.result.base_gross;
                totals.surcharge_total += row.result.surcharge_total;
                totals.combined_gross += row.result.combined_gross;
                totals.total_deductions += row.result.total_deductions;
                totals.net += row.result.net;
                totals.hours += row.input.hours;
                totals
            });

        let exceeding_months: Vec<Month> = months
            .iter()
            .filter(|row| row.result.exceeds_threshold)
            .map(|row| row.month)
            .collect();
        let months_within_threshold = months.len() - exceeding_months.len();

        YearlySummary {
            months,
            totals,
            exceeding_months,
            months_within_threshold,
        }
    }

    /// Overage events for every month of `year` whose base gross exceeds the
    /// threshold.
    ///
    /// Nothing is recorded; the caller decides which events to add to its
    /// [`OverageLog`](crate::tracking::OverageLog).
    ///
    /// Fails with [`EngineError::InvalidInput`](crate::error::EngineError::InvalidInput)
    /// when `year` lies outside [`YearMonth::year_range`](crate::models::YearMonth::year_range).
    pub fn overage_candidates(
        &self,
        year: i32,
        config: &MinijobConfig,
    ) -> EngineResult<Vec<OverageEvent>> {
        self.iter()
            .filter(|(_, input)| compute_salary(input, config).exceeds_threshold)
            .map(|(month, _)| OverageEvent::of(month, year))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracking::{OverageLog, ThresholdState};
    use crate::models::YearMonth;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_input(wage: &str, hours: &str) -> MonthlyInput {
        MonthlyInput {
            hourly_wage: dec(wage),
            hours: dec(hours),
            ..MonthlyInput::default()
        }
    }

    fn ledger_with_overages(config: &MinijobConfig, months: &[Month]) -> MonthlyLedger {
        let mut ledger = MonthlyLedger::new(config);
        for month in months {
            ledger
                .replace(*month, create_input("20.00", "30"), config)
                .unwrap();
        }
        ledger
    }

    #[test]
    fn test_default_year_totals() {
        let config = MinijobConfig::reference();
        let summary = MonthlyLedger::new(&config).summarize(&config);

        assert_eq!(summary.months.len(), 12);
        assert_eq!(summary.totals.base_gross, dec("3692.16"));
        assert_eq!(summary.totals.total_deductions, dec("132.91776"));
        assert_eq!(summary.totals.net, dec("3559.24224"));
        assert_eq!(summary.totals.hours, dec("288"));
        assert_eq!(summary.months_within_threshold, 12);
    }

    #[test]
    fn test_rows_match_individual_computation() {
        let config = MinijobConfig::reference();
        let ledger = ledger_with_overages(&config, &[Month::April]);
        let summary = ledger.summarize(&config);

        for row in &summary.months {
            assert_eq!(row.result, compute_salary(ledger.get(row.month), &config));
        }
    }

    #[test]
    fn test_exceeding_months_are_listed() {
        let config = MinijobConfig::reference();
        let ledger = ledger_with_overages(&config, &[Month::February, Month::August]);
        let summary = ledger.summarize(&config);

        assert_eq!(summary.exceeding_months, vec![Month::February, Month::August]);
        assert_eq!(summary.months_within_threshold, 10);
        // 10 × 307.68 + 2 × 600
        assert_eq!(summary.totals.base_gross, dec("4276.80"));
    }

    #[test]
    fn test_overage_candidates_feed_tracker() {
        let config = MinijobConfig::reference();
        let ledger =
            ledger_with_overages(&config, &[Month::January, Month::June, Month::July]);

        let candidates = ledger.overage_candidates(2025, &config).unwrap();
        assert_eq!(
            candidates,
            vec![
                OverageEvent::of(Month::January, 2025).unwrap(),
                OverageEvent::of(Month::June, 2025).unwrap(),
                OverageEvent::of(Month::July, 2025).unwrap(),
            ]
        );

        let log: OverageLog = candidates.into_iter().collect();
        let status = log.status(YearMonth::of(Month::July, 2025).unwrap());
        assert_eq!(status.state, ThresholdState::Exceeded);
    }

    #[test]
    fn test_no_candidates_when_within_threshold() {
        let config = MinijobConfig::reference();
        assert!(
            MonthlyLedger::new(&config)
                .overage_candidates(2025, &config)
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn test_overage_candidates_reject_year_out_of_range() {
        let config = MinijobConfig::reference();
        let ledger = ledger_with_overages(&config, &[Month::May]);

        assert!(ledger.overage_candidates(i32::MAX, &config).is_err());
    }
}
