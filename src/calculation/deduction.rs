//! Deduction calculation.
//!
//! Exactly one of two rules applies, decided on the base gross wage alone:
//! - within the threshold (`base_gross ≤ threshold`) the employee's
//!   pension-insurance share is deducted
//! - above it a simplified flat rate replaces the pension share, standing in
//!   for full social-insurance contributions
//!
//! Surcharges are never part of the deduction base.

use rust_decimal::Decimal;

use crate::config::MinijobConfig;
use crate::models::{AuditStep, DeductionKind};

/// The result of a deduction calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct DeductionResult {
    /// Which rule applied.
    pub kind: DeductionKind,
    /// Pension-insurance deduction (zero under the flat rate).
    pub pension_insurance: Decimal,
    /// Flat-rate deduction (zero under pension insurance).
    pub flat_rate: Decimal,
    /// The deduction actually taken.
    pub total: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Returns true when the base gross wage lies above the threshold.
///
/// A base gross exactly equal to the threshold is still within it.
pub fn exceeds_threshold(base_gross: Decimal, threshold: Decimal) -> bool {
    base_gross > threshold
}

/// Calculates the deduction for a month's base gross wage.
///
/// # Examples
///
/// ```
/// use minijob_engine::calculation::calculate_deduction;
/// use minijob_engine::config::MinijobConfig;
/// use minijob_engine::models::DeductionKind;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let config = MinijobConfig::reference();
///
/// let within = calculate_deduction(Decimal::from_str("307.68").unwrap(), &config, 3);
/// assert_eq!(within.kind, DeductionKind::PensionInsurance);
/// assert_eq!(within.total, Decimal::from_str("11.07648").unwrap());
///
/// let above = calculate_deduction(Decimal::from_str("600").unwrap(), &config, 3);
/// assert_eq!(above.kind, DeductionKind::FlatRate);
/// assert_eq!(above.total, Decimal::from_str("180").unwrap());
/// ```
pub fn calculate_deduction(
    base_gross: Decimal,
    config: &MinijobConfig,
    step_number: u32,
) -> DeductionResult {
    let threshold = config.threshold();
    let rates = config.deductions();

    let (kind, rate, rule_name, legal_ref) = if exceeds_threshold(base_gross, threshold) {
        (
            DeductionKind::FlatRate,
            rates.flat_rate,
            "Flat-Rate Deduction",
            "§ 8 Abs. 1 Nr. 1 SGB IV",
        )
    } else {
        (
            DeductionKind::PensionInsurance,
            rates.pension_rate,
            "Pension Insurance Deduction",
            "§ 168 Abs. 1 Nr. 1b SGB VI",
        )
    };

    let total = base_gross * rate;
    let (pension_insurance, flat_rate) = match kind {
        DeductionKind::PensionInsurance => (total, Decimal::ZERO),
        DeductionKind::FlatRate => (Decimal::ZERO, total),
    };

    let comparison = match kind {
        DeductionKind::PensionInsurance => "≤",
        DeductionKind::FlatRate => ">",
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "deduction".to_string(),
        rule_name: rule_name.to_string(),
        legal_ref: legal_ref.to_string(),
        input: serde_json::json!({
            "base_gross": base_gross.normalize().to_string(),
            "threshold": threshold.normalize().to_string()
        }),
        output: serde_json::json!({
            "kind": kind,
            "rate": rate.normalize().to_string(),
            "amount": total.normalize().to_string()
        }),
        reasoning: format!(
            "Base gross €{} {} threshold €{}: €{} × {} = €{}",
            base_gross.normalize(),
            comparison,
            threshold.normalize(),
            base_gross.normalize(),
            rate.normalize(),
            total.normalize()
        ),
    };

    DeductionResult {
        kind,
        pension_insurance,
        flat_rate,
        total,
        audit_step,
    }
}
