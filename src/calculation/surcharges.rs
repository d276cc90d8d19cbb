//! Tax-free surcharge calculation.
//!
//! Sunday/public holiday and night surcharges are paid on top of the base
//! wage. They are tax-free (§ 3b EStG) and count neither towards the
//! earnings threshold nor towards the deduction base.

use rust_decimal::Decimal;

use crate::config::SurchargeRates;
use crate::models::{AuditStep, MonthlyInput};

/// The result of a surcharge calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct SurchargeResult {
    /// Sunday/public holiday surcharge amount.
    pub sunday_holiday: Decimal,
    /// Night surcharge amount.
    pub night: Decimal,
    /// Sum of both surcharges.
    pub total: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Returns the hours a surcharge is actually paid on.
///
/// Disabled surcharges yield zero. Enabled surcharges are capped at the
/// hours worked; inputs that passed validation never hit the cap.
pub fn effective_surcharge_hours(enabled: bool, surcharge_hours: Decimal, hours: Decimal) -> Decimal {
    if !enabled {
        return Decimal::ZERO;
    }
    surcharge_hours.min(hours).max(Decimal::ZERO)
}

/// Calculates both tax-free surcharges for a month.
///
/// Each enabled surcharge pays `effective_hours × hourly_wage × rate`.
///
/// # Examples
///
/// ```
/// use minijob_engine::calculation::calculate_surcharges;
/// use minijob_engine::config::MinijobConfig;
/// use minijob_engine::models::MonthlyInput;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let config = MinijobConfig::reference();
/// let input = MonthlyInput {
///     sunday_holiday_surcharge_enabled: true,
///     sunday_holiday_surcharge_hours: Decimal::from_str("12").unwrap(),
///     ..MonthlyInput::with_defaults(&config)
/// };
///
/// let result = calculate_surcharges(&input, config.surcharges(), 2);
/// // 12 hours × €12.82 × 0.30 = €46.152
/// assert_eq!(result.total, Decimal::from_str("46.152").unwrap());
/// ```
pub fn calculate_surcharges(
    input: &MonthlyInput,
    rates: &SurchargeRates,
    step_number: u32,
) -> SurchargeResult {
    let sunday_hours = effective_surcharge_hours(
        input.sunday_holiday_surcharge_enabled,
        input.sunday_holiday_surcharge_hours,
        input.hours,
    );
    let night_hours = effective_surcharge_hours(
        input.night_surcharge_enabled,
        input.night_surcharge_hours,
        input.hours,
    );

    let sunday_holiday = input.hourly_wage * sunday_hours * rates.sunday_holiday;
    let night = input.hourly_wage * night_hours * rates.night;
    let total = sunday_holiday + night;

    let reasoning = if total.is_zero() {
        "No surcharges apply".to_string()
    } else {
        format!(
            "Sunday/holiday: {} hours × €{} × {} = €{}; night: {} hours × €{} × {} = €{}; total €{}",
            sunday_hours.normalize(),
            input.hourly_wage.normalize(),
            rates.sunday_holiday.normalize(),
            sunday_holiday.normalize(),
            night_hours.normalize(),
            input.hourly_wage.normalize(),
            rates.night.normalize(),
            night.normalize(),
            total.normalize()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "tax_free_surcharges".to_string(),
        rule_name: "Tax-Free Surcharges".to_string(),
        legal_ref: "§ 3b EStG".to_string(),
        input: serde_json::json!({
            "hourly_wage": input.hourly_wage.normalize().to_string(),
            "hours": input.hours.normalize().to_string(),
            "sunday_holiday_enabled": input.sunday_holiday_surcharge_enabled,
            "sunday_holiday_hours": input.sunday_holiday_surcharge_hours.normalize().to_string(),
            "night_enabled": input.night_surcharge_enabled,
            "night_hours": input.night_surcharge_hours.normalize().to_string()
        }),
        output: serde_json::json!({
            "sunday_holiday_effective_hours": sunday_hours.normalize().to_string(),
            "night_effective_hours": night_hours.normalize().to_string(),
            "sunday_holiday": sunday_holiday.normalize().to_string(),
            "night": night.normalize().to_string(),
            "total": total.normalize().to_string()
        }),
        reasoning,
    };

    SurchargeResult {
        sunday_holiday,
        night,
        total,
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MinijobConfig;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn rates() -> SurchargeRates {
        MinijobConfig::reference().surcharges().clone()
    }

    fn create_input(sunday: Option<&str>, night: Option<&str>) -> MonthlyInput {
        MonthlyInput {
            hourly_wage: dec("12.82"),
            hours: dec("24"),
            sunday_holiday_surcharge_enabled: sunday.is_some(),
            sunday_holiday_surcharge_hours: sunday.map(dec).unwrap_or_default(),
            night_surcharge_enabled: night.is_some(),
            night_surcharge_hours: night.map(dec).unwrap_or_default(),
        }
    }

    #[test]
    fn test_no_surcharges() {
        let result = calculate_surcharges(&create_input(None, None), &rates(), 1);

        assert_eq!(result.total, Decimal::ZERO);
        assert_eq!(result.audit_step.reasoning, "No surcharges apply");
    }

    #[test]
    fn test_sunday_surcharge_12_hours() {
        let result = calculate_surcharges(&create_input(Some("12"), None), &rates(), 1);

        assert_eq!(result.sunday_holiday, dec("46.152"));
        assert_eq!(result.night, Decimal::ZERO);
        assert_eq!(result.total, dec("46.152"));
    }

    #[test]
    fn test_night_surcharge_8_hours() {
        let result = calculate_surcharges(&create_input(None, Some("8")), &rates(), 1);

        // 8 × 12.82 × 0.25 = 25.64
        assert_eq!(result.night, dec("25.64"));
        assert_eq!(result.total, dec("25.64"));
    }

    #[test]
    fn test_both_surcharges_are_summed() {
        let result = calculate_surcharges(&create_input(Some("12"), Some("8")), &rates(), 1);

        assert_eq!(result.total, dec("71.792"));
    }

    #[test]
    fn test_disabled_surcharge_ignores_hours() {
        let mut input = create_input(None, None);
        input.night_surcharge_hours = dec("10");

        let result = calculate_surcharges(&input, &rates(), 1);
        assert_eq!(result.night, Decimal::ZERO);
    }

    #[test]
    fn test_surcharge_hours_are_capped_at_hours_worked() {
        let mut input = create_input(Some("30"), None);
        input.hours = dec("10");

        let result = calculate_surcharges(&input, &rates(), 1);

        // capped to 10 hours: 10 × 12.82 × 0.30 = 38.46
        assert_eq!(result.sunday_holiday, dec("38.46"));
        assert_eq!(
            result.audit_step.output["sunday_holiday_effective_hours"]
                .as_str()
                .unwrap(),
            "10"
        );
    }

    #[test]
    fn test_effective_hours_never_negative() {
        assert_eq!(effective_surcharge_hours(true, dec("-3"), dec("10")), Decimal::ZERO);
    }

    #[test]
    fn test_audit_step_has_correct_information() {
        let result = calculate_surcharges(&create_input(Some("12"), None), &rates(), 2);

        assert_eq!(result.audit_step.step_number, 2);
        assert_eq!(result.audit_step.rule_id, "tax_free_surcharges");
        assert_eq!(result.audit_step.legal_ref, "§ 3b EStG");
        assert_eq!(result.audit_step.output["total"].as_str().unwrap(), "46.152");
        assert!(result.audit_step.reasoning.contains("46.152"));
    }
}
