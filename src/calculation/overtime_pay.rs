//! Overtime pay calculation.
//!
//! Regular hours are capped at the weekly threshold and paid at the base
//! rate. Overtime hours are paid at the base rate times the multiplier.
//! Regular hours entered above the threshold are capped, not moved into
//! overtime: the user states overtime hours separately.

use serde::{Deserialize, Serialize};

use super::defaults::CalculatorDefaults;
use super::render;
use super::threshold_split::split_hours;
use crate::format::NumberFormatter;
use crate::models::{CalculatorKind, CalculatorResult, RawInput};
use crate::normalize::{normalize_non_negative, normalize_positive_or};

/// Form fields for the overtime calculator.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OvertimePayInput {
    /// Base hourly rate.
    pub hourly_rate: RawInput,
    /// Regular hours worked in the week.
    pub regular_hours: RawInput,
    /// Overtime hours worked in the week.
    pub overtime_hours: RawInput,
    /// Overtime multiplier (default 1.5).
    pub overtime_multiplier: RawInput,
    /// Weekly cap on regular hours (default 40).
    pub overtime_threshold: RawInput,
}

/// The outcome of an overtime pay calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OvertimeBreakdown {
    /// The hourly rate used.
    pub hourly_rate: f64,
    /// Regular hours after capping at the threshold.
    pub regular_hours: f64,
    /// Overtime hours used.
    pub overtime_hours: f64,
    /// The multiplier used.
    pub multiplier: f64,
    /// The threshold used.
    pub threshold: f64,
    /// `hourly_rate * multiplier`.
    pub overtime_rate: f64,
    /// `hourly_rate * regular_hours`.
    pub regular_pay: f64,
    /// `overtime_rate * overtime_hours`.
    pub overtime_pay: f64,
    /// `regular_pay + overtime_pay`.
    pub total_pay: f64,
}

/// Calculates regular, overtime and total pay for a week.
///
/// # Example
///
/// ```
/// use payroll_calc::calculation::{calculate_overtime_pay, CalculatorDefaults, OvertimePayInput};
///
/// let input = OvertimePayInput {
///     hourly_rate: "20".into(),
///     regular_hours: "45".into(),
///     overtime_hours: "5".into(),
///     overtime_multiplier: "1.5".into(),
///     ..OvertimePayInput::default()
/// };
/// let pay = calculate_overtime_pay(&input, &CalculatorDefaults::default());
/// assert_eq!(pay.regular_pay, 800.0);
/// assert_eq!(pay.overtime_pay, 150.0);
/// assert_eq!(pay.total_pay, 950.0);
/// ```
pub fn calculate_overtime_pay(
    input: &OvertimePayInput,
    defaults: &CalculatorDefaults,
) -> OvertimeBreakdown {
    let hourly_rate = normalize_non_negative(&input.hourly_rate);
    let threshold = normalize_positive_or(&input.overtime_threshold, defaults.overtime_threshold);
    let multiplier =
        normalize_positive_or(&input.overtime_multiplier, defaults.overtime_multiplier);

    let regular_hours =
        split_hours(normalize_non_negative(&input.regular_hours), threshold).regular;
    let overtime_hours = normalize_non_negative(&input.overtime_hours);

    let overtime_rate = hourly_rate * multiplier;
    let regular_pay = hourly_rate * regular_hours;
    let overtime_pay = overtime_rate * overtime_hours;

    OvertimeBreakdown {
        hourly_rate,
        regular_hours,
        overtime_hours,
        multiplier,
        threshold,
        overtime_rate,
        regular_pay,
        overtime_pay,
        total_pay: regular_pay + overtime_pay,
    }
}

impl OvertimeBreakdown {
    /// Share of total pay that comes from overtime, as a percentage.
    ///
    /// Undefined (NaN) when total pay is zero.
    pub fn overtime_share(&self) -> f64 {
        self.overtime_pay / self.total_pay * 100.0
    }

    /// Renders the breakdown as a results panel.
    pub fn to_result(&self, formatter: &NumberFormatter) -> CalculatorResult {
        CalculatorResult::new(CalculatorKind::OvertimePay)
            .with_entry("Regular hours", render::hours(formatter, self.regular_hours))
            .with_entry("Overtime hours", render::hours(formatter, self.overtime_hours))
            .with_entry("Overtime rate", render::money(formatter, self.overtime_rate))
            .with_entry("Regular pay", render::money(formatter, self.regular_pay))
            .with_entry("Overtime pay", render::money(formatter, self.overtime_pay))
            .with_entry("Total pay", render::money(formatter, self.total_pay))
            .with_entry(
                "Overtime share of pay",
                render::percent(formatter, self.overtime_share(), 1),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FALLBACK_GLYPH, ResultValue};

    fn input(rate: &str, regular: &str, overtime: &str, multiplier: &str) -> OvertimePayInput {
        OvertimePayInput {
            hourly_rate: rate.into(),
            regular_hours: regular.into(),
            overtime_hours: overtime.into(),
            overtime_multiplier: multiplier.into(),
            overtime_threshold: RawInput::Missing,
        }
    }

    fn calc(rate: &str, regular: &str, overtime: &str, multiplier: &str) -> OvertimeBreakdown {
        calculate_overtime_pay(
            &input(rate, regular, overtime, multiplier),
            &CalculatorDefaults::default(),
        )
    }

    #[test]
    fn test_regular_hours_capped_at_threshold() {
        let pay = calc("20", "45", "5", "1.5");
        assert_eq!(pay.regular_hours, 40.0);
        assert_eq!(pay.regular_pay, 800.0);
        assert_eq!(pay.overtime_pay, 150.0);
        assert_eq!(pay.total_pay, 950.0);
    }

    #[test]
    fn test_under_threshold() {
        let pay = calc("15", "32", "0", "1.5");
        assert_eq!(pay.regular_pay, 480.0);
        assert_eq!(pay.overtime_pay, 0.0);
        assert_eq!(pay.total_pay, 480.0);
    }

    #[test]
    fn test_blank_multiplier_defaults_to_time_and_a_half() {
        let pay = calc("20", "40", "2", "");
        assert_eq!(pay.multiplier, 1.5);
        assert_eq!(pay.overtime_rate, 30.0);
        assert_eq!(pay.overtime_pay, 60.0);
    }

    #[test]
    fn test_double_time() {
        let pay = calc("20", "40", "4", "2");
        assert_eq!(pay.overtime_pay, 160.0);
        assert_eq!(pay.total_pay, 960.0);
    }

    #[test]
    fn test_negative_hours_are_zero() {
        let pay = calc("20", "-10", "-5", "1.5");
        assert_eq!(pay.regular_hours, 0.0);
        assert_eq!(pay.overtime_hours, 0.0);
        assert_eq!(pay.total_pay, 0.0);
    }

    #[test]
    fn test_negative_rate_is_zero() {
        let pay = calc("-20", "40", "5", "1.5");
        assert_eq!(pay.total_pay, 0.0);
    }

    #[test]
    fn test_custom_threshold() {
        let overtime = OvertimePayInput {
            overtime_threshold: "38".into(),
            ..input("20", "40", "0", "1.5")
        };
        let pay = calculate_overtime_pay(&overtime, &CalculatorDefaults::default());
        assert_eq!(pay.threshold, 38.0);
        assert_eq!(pay.regular_pay, 760.0);
    }

    #[test]
    fn test_everything_blank_is_zero_result() {
        let pay =
            calculate_overtime_pay(&OvertimePayInput::default(), &CalculatorDefaults::default());
        assert_eq!(pay.total_pay, 0.0);
        assert_eq!(pay.threshold, 40.0);
        assert_eq!(pay.multiplier, 1.5);
    }

    #[test]
    fn test_overtime_share() {
        let pay = calc("20", "45", "5", "1.5");
        assert!((pay.overtime_share() - 15.789473).abs() < 1e-5);
    }

    #[test]
    fn test_to_result_entries() {
        let result = calc("20", "45", "5", "1.5").to_result(&NumberFormatter::default());
        assert_eq!(result.calculator, CalculatorKind::OvertimePay);
        assert_eq!(
            result.get("Total pay"),
            Some(&ResultValue::Text("$950.00".to_string()))
        );
        assert_eq!(
            result.get("Overtime rate"),
            Some(&ResultValue::Text("$30.00".to_string()))
        );
        assert_eq!(
            result.get("Overtime share of pay"),
            Some(&ResultValue::Text("15.8%".to_string()))
        );
    }

    #[test]
    fn test_zero_total_share_shows_glyph() {
        let result =
            calculate_overtime_pay(&OvertimePayInput::default(), &CalculatorDefaults::default())
                .to_result(&NumberFormatter::default());
        let share = result.get("Overtime share of pay").unwrap();
        assert_eq!(share, &ResultValue::Missing);
        assert_eq!(share.display(), FALLBACK_GLYPH);
        assert_eq!(
            result.get("Total pay"),
            Some(&ResultValue::Text("$0.00".to_string()))
        );
    }
}
