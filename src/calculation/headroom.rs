//! Remaining headroom under the earnings threshold.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::models::AuditStep;

/// The result of a headroom calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct HeadroomResult {
    /// `max(0, threshold − base_gross)`.
    pub headroom: Decimal,
    /// Whole additional hours that fit into the headroom at the given wage.
    pub headroom_hours: u32,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates how much more may be earned this month before the threshold.
///
/// A non-positive hourly wage yields zero headroom hours instead of a
/// division by zero.
///
/// # Examples
///
/// ```
/// use minijob_engine::calculation::calculate_headroom;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let dec = |s: &str| Decimal::from_str(s).unwrap();
/// let result = calculate_headroom(dec("307.68"), dec("12.82"), dec("556.00"), 4);
/// assert_eq!(result.headroom, dec("248.32"));
/// assert_eq!(result.headroom_hours, 19);
/// ```
pub fn calculate_headroom(
    base_gross: Decimal,
    hourly_wage: Decimal,
    threshold: Decimal,
    step_number: u32,
) -> HeadroomResult {
    let headroom = (threshold - base_gross).max(Decimal::ZERO);

    let headroom_hours = if hourly_wage > Decimal::ZERO {
        (headroom / hourly_wage).floor().to_u32().unwrap_or(u32::MAX)
    } else {
        0
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "threshold_headroom".to_string(),
        rule_name: "Threshold Headroom".to_string(),
        legal_ref: "§ 8 Abs. 1a SGB IV".to_string(),
        input: serde_json::json!({
            "base_gross": base_gross.normalize().to_string(),
            "hourly_wage": hourly_wage.normalize().to_string(),
            "threshold": threshold.normalize().to_string()
        }),
        output: serde_json::json!({
            "headroom": headroom.normalize().to_string(),
            "headroom_hours": headroom_hours
        }),
        reasoning: format!(
            "€{} − €{} leaves €{} ({} whole hours at €{})",
            threshold.normalize(),
            base_gross.normalize(),
            headroom.normalize(),
            headroom_hours,
            hourly_wage.normalize()
        ),
    };

    HeadroomResult {
        headroom,
        headroom_hours,
        audit_step,
    }
}
