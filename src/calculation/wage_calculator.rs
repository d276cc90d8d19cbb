//! Monthly wage calculation.
//!
//! Turns one [`MonthlyInput`] into an itemized [`SalaryResult`] by applying,
//! in order: base wage, tax-free surcharges, deduction and threshold headroom.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::MinijobConfig;
use crate::error::EngineResult;
use crate::models::{
    AuditStep, AuditTrace, AuditWarning, MonthlyCalculation, MonthlyInput, SalaryResult,
};

use super::{calculate_base_wage, calculate_deduction, calculate_headroom, calculate_surcharges};

/// Computes the pay breakdown for one month.
///
/// Pure and total over the configured limits: no side effects and no
/// failure for any wage and hours up to the configured ceilings. Surcharge
/// hours above the hours worked are capped and a zero wage yields zero
/// headroom hours. Use [`calculate_month`] to reject such input instead.
///
/// # Panics
///
/// Amounts far beyond the configured ceilings (e.g. a wage near
/// [`Decimal::MAX`]) overflow `Decimal` arithmetic. [`calculate_month`]
/// rejects them before computing.
///
/// # Examples
///
/// ```
/// use minijob_engine::calculation::compute_salary;
/// use minijob_engine::config::MinijobConfig;
/// use minijob_engine::models::MonthlyInput;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let config = MinijobConfig::reference();
/// let input = MonthlyInput {
///     hourly_wage: Decimal::from_str("20.0").unwrap(),
///     hours: Decimal::from_str("30").unwrap(),
///     ..MonthlyInput::with_defaults(&config)
/// };
///
/// let result = compute_salary(&input, &config);
/// assert!(result.exceeds_threshold);
/// assert_eq!(result.net, Decimal::from_str("420.0").unwrap());
/// ```
pub fn compute_salary(input: &MonthlyInput, config: &MinijobConfig) -> SalaryResult {
    run_steps(input, config).0
}

/// Validates a month's input and computes its pay breakdown with an audit trace.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`](crate::error::EngineError::InvalidInput)
/// if the input violates any invariant (see [`MonthlyInput::validate`]).
pub fn calculate_month(
    input: &MonthlyInput,
    config: &MinijobConfig,
) -> EngineResult<MonthlyCalculation> {
    input.validate(config)?;

    let (result, steps) = run_steps(input, config);

    let mut warnings = Vec::new();
    if result.exceeds_threshold {
        warnings.push(AuditWarning {
            code: "THRESHOLD_EXCEEDED".to_string(),
            message: format!(
                "Base gross €{} exceeds the mini-job threshold of €{}; record an overage event for this month",
                result.base_gross.normalize(),
                config.threshold().normalize()
            ),
            severity: "high".to_string(),
        });
    } else if result.headroom_hours == 0 && result.headroom > Decimal::ZERO {
        warnings.push(AuditWarning {
            code: "HEADROOM_BELOW_ONE_HOUR".to_string(),
            message: format!(
                "Only €{} remain under the threshold, less than one hour at €{}",
                result.headroom.normalize(),
                input.hourly_wage.normalize()
            ),
            severity: "medium".to_string(),
        });
    }

    debug!(
        base_gross = %result.base_gross,
        combined_gross = %result.combined_gross,
        net = %result.net,
        exceeds_threshold = result.exceeds_threshold,
        "Calculated month"
    );

    Ok(MonthlyCalculation {
        result,
        audit_trace: AuditTrace { steps, warnings },
    })
}

fn run_steps(input: &MonthlyInput, config: &MinijobConfig) -> (SalaryResult, Vec<AuditStep>) {
    let base = calculate_base_wage(input.hourly_wage, input.hours, 1);
    let surcharges = calculate_surcharges(input, config.surcharges(), 2);
    let deduction = calculate_deduction(base.base_gross, config, 3);
    let headroom = calculate_headroom(base.base_gross, input.hourly_wage, config.threshold(), 4);

    let combined_gross = base.base_gross + surcharges.total;
    let net = combined_gross - deduction.total;

    let result = SalaryResult {
        base_gross: base.base_gross,
        sunday_holiday_surcharge: surcharges.sunday_holiday,
        night_surcharge: surcharges.night,
        surcharge_total: surcharges.total,
        combined_gross,
        deduction_kind: deduction.kind,
        pension_insurance: deduction.pension_insurance,
        flat_rate_deduction: deduction.flat_rate,
        total_deductions: deduction.total,
        net,
        exceeds_threshold: super::exceeds_threshold(base.base_gross, config.threshold()),
        headroom: headroom.headroom,
        headroom_hours: headroom.headroom_hours,
    };

    let steps = vec![
        base.audit_step,
        surcharges.audit_step,
        deduction.audit_step,
        headroom.audit_step,
    ];

    (result, steps)
}
