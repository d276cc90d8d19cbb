//! Base gross wage calculation.
//!
//! The base gross wage is the only quantity the earnings threshold is
//! compared against. Surcharges never enter it.

use rust_decimal::Decimal;

use crate::models::AuditStep;

/// The result of a base wage calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct BaseWageResult {
    /// Hourly wage × hours.
    pub base_gross: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the base gross wage for a month.
///
/// # Examples
///
/// ```
/// use minijob_engine::calculation::calculate_base_wage;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = calculate_base_wage(Decimal::from_str("12.82").unwrap(), Decimal::from_str("24").unwrap(), 1);
/// assert_eq!(result.base_gross, Decimal::from_str("307.68").unwrap());
/// ```
pub fn calculate_base_wage(hourly_wage: Decimal, hours: Decimal, step_number: u32) -> BaseWageResult {
    let base_gross = hourly_wage * hours;

    let audit_step = AuditStep {
        step_number,
        rule_id: "base_wage".to_string(),
        rule_name: "Base Gross Wage".to_string(),
        legal_ref: "§ 14 SGB IV".to_string(),
        input: serde_json::json!({
            "hourly_wage": hourly_wage.normalize().to_string(),
            "hours": hours.normalize().to_string()
        }),
        output: serde_json::json!({
            "base_gross": base_gross.normalize().to_string()
        }),
        reasoning: format!(
            "{} hours × €{} = €{}",
            hours.normalize(),
            hourly_wage.normalize(),
            base_gross.normalize()
        ),
    };

    BaseWageResult {
        base_gross,
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_minimum_wage_24_hours() {
        let result = calculate_base_wage(dec("12.82"), dec("24"), 1);
        assert_eq!(result.base_gross, dec("307.68"));
    }

    #[test]
    fn test_fractional_hours() {
        let result = calculate_base_wage(dec("13.50"), dec("10.5"), 1);
        assert_eq!(result.base_gross, dec("141.75"));
    }

    #[test]
    fn test_zero_hours() {
        let result = calculate_base_wage(dec("12.82"), dec("0"), 1);
        assert_eq!(result.base_gross, Decimal::ZERO);
    }

    #[test]
    fn test_audit_step_has_correct_information() {
        let result = calculate_base_wage(dec("20.00"), dec("30"), 4);

        assert_eq!(result.audit_step.step_number, 4);
        assert_eq!(result.audit_step.rule_id, "base_wage");
        assert_eq!(result.audit_step.input["hourly_wage"].as_str().unwrap(), "20");
        assert_eq!(result.audit_step.input["hours"].as_str().unwrap(), "30");
        assert_eq!(result.audit_step.output["base_gross"].as_str().unwrap(), "600");
        assert!(result.audit_step.reasoning.contains("€600"));
    }
}
