//! Hourly-to-salary conversion.
//!
//! Converts an hourly wage into annual, monthly and weekly pay. Blank or
//! non-positive hours and weeks fall back to the configured defaults, and a
//! negative rate is treated as zero, so the salary is never negative.

use serde::{Deserialize, Serialize};

use super::defaults::CalculatorDefaults;
use super::render;
use crate::format::NumberFormatter;
use crate::models::{CalculatorKind, CalculatorResult, RawInput, ResultValue};
use crate::normalize::{normalize_non_negative, normalize_positive_or};

/// Form fields for the hourly-to-salary calculator.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HourlyToSalaryInput {
    /// Hourly wage.
    pub hourly_rate: RawInput,
    /// Hours worked per week (default 40).
    pub hours_per_week: RawInput,
    /// Paid weeks per year (default 52).
    pub weeks_per_year: RawInput,
}

/// The outcome of an hourly-to-salary conversion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SalaryBreakdown {
    /// The hourly rate used, after normalization.
    pub hourly_rate: f64,
    /// The hours per week used.
    pub hours_per_week: f64,
    /// The weeks per year used.
    pub weeks_per_year: f64,
    /// `hourly_rate * hours_per_week * weeks_per_year`.
    pub annual: f64,
    /// `annual / 12`.
    pub monthly: f64,
    /// `hourly_rate * hours_per_week`.
    pub weekly: f64,
}

/// Converts an hourly wage into annual, monthly and weekly pay.
///
/// # Example
///
/// ```
/// use payroll_calc::calculation::{calculate_hourly_to_salary, CalculatorDefaults, HourlyToSalaryInput};
///
/// let input = HourlyToSalaryInput {
///     hourly_rate: "25".into(),
///     hours_per_week: "40".into(),
///     weeks_per_year: "52".into(),
/// };
/// let salary = calculate_hourly_to_salary(&input, &CalculatorDefaults::default());
/// assert_eq!(salary.annual, 52000.0);
/// assert_eq!(salary.weekly, 1000.0);
/// ```
pub fn calculate_hourly_to_salary(
    input: &HourlyToSalaryInput,
    defaults: &CalculatorDefaults,
) -> SalaryBreakdown {
    let hourly_rate = normalize_non_negative(&input.hourly_rate);
    let hours_per_week = normalize_positive_or(&input.hours_per_week, defaults.hours_per_week);
    let weeks_per_year = normalize_positive_or(&input.weeks_per_year, defaults.weeks_per_year);

    let weekly = hourly_rate * hours_per_week;
    let annual = weekly * weeks_per_year;

    SalaryBreakdown {
        hourly_rate,
        hours_per_week,
        weeks_per_year,
        annual,
        monthly: annual / 12.0,
        weekly,
    }
}

impl SalaryBreakdown {
    /// Renders the breakdown as a results panel.
    pub fn to_result(&self, formatter: &NumberFormatter) -> CalculatorResult {
        CalculatorResult::new(CalculatorKind::HourlyToSalary)
            .with_entry("Annual salary", render::money(formatter, self.annual))
            .with_entry("Monthly pay", render::money(formatter, self.monthly))
            .with_entry("Weekly pay", render::money(formatter, self.weekly))
            .with_entry("Hours per week", render::hours(formatter, self.hours_per_week))
            .with_entry("Weeks per year", ResultValue::number(self.weeks_per_year))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(rate: &str, hours: &str, weeks: &str) -> HourlyToSalaryInput {
        HourlyToSalaryInput {
            hourly_rate: rate.into(),
            hours_per_week: hours.into(),
            weeks_per_year: weeks.into(),
        }
    }

    fn calc(rate: &str, hours: &str, weeks: &str) -> SalaryBreakdown {
        calculate_hourly_to_salary(&input(rate, hours, weeks), &CalculatorDefaults::default())
    }

    #[test]
    fn test_standard_full_time() {
        let salary = calc("25", "40", "52");
        assert_eq!(salary.annual, 52000.0);
        assert!((salary.monthly - 4333.333333).abs() < 1e-5);
        assert_eq!(salary.weekly, 1000.0);
    }

    #[test]
    fn test_blank_hours_and_weeks_use_defaults() {
        let salary = calc("25", "", "");
        assert_eq!(salary.hours_per_week, 40.0);
        assert_eq!(salary.weeks_per_year, 52.0);
        assert_eq!(salary.annual, 52000.0);
    }

    #[test]
    fn test_non_positive_hours_and_weeks_use_defaults() {
        let salary = calc("20", "-10", "0");
        assert_eq!(salary.hours_per_week, 40.0);
        assert_eq!(salary.weeks_per_year, 52.0);
        assert_eq!(salary.annual, 41600.0);
    }

    #[test]
    fn test_custom_defaults() {
        let defaults = CalculatorDefaults {
            hours_per_week: 37.5,
            ..CalculatorDefaults::default()
        };
        let salary = calculate_hourly_to_salary(&input("20", "", ""), &defaults);
        assert_eq!(salary.weekly, 750.0);
        assert_eq!(salary.annual, 39000.0);
    }

    #[test]
    fn test_negative_rate_is_zero() {
        let salary = calc("-25", "40", "52");
        assert_eq!(salary.hourly_rate, 0.0);
        assert_eq!(salary.annual, 0.0);
        assert_eq!(salary.monthly, 0.0);
    }

    #[test]
    fn test_garbage_rate_is_zero() {
        let salary = calc("twenty", "40", "52");
        assert_eq!(salary.annual, 0.0);
        assert!(!salary.annual.is_nan());
    }

    #[test]
    fn test_part_time() {
        let salary = calc("18.50", "20", "48");
        assert_eq!(salary.weekly, 370.0);
        assert_eq!(salary.annual, 17760.0);
    }

    #[test]
    fn test_to_result_formats_currency() {
        let result = calc("25", "40", "52").to_result(&NumberFormatter::default());
        assert_eq!(result.calculator, CalculatorKind::HourlyToSalary);
        assert_eq!(
            result.get("Annual salary"),
            Some(&ResultValue::Text("$52,000.00".to_string()))
        );
        assert_eq!(
            result.get("Monthly pay"),
            Some(&ResultValue::Text("$4,333.33".to_string()))
        );
        assert_eq!(
            result.get("Weekly pay"),
            Some(&ResultValue::Text("$1,000.00".to_string()))
        );
        assert_eq!(result.get("Weeks per year"), Some(&ResultValue::Number(52.0)));
    }

    #[test]
    fn test_overflowing_salary_shows_missing() {
        let huge = HourlyToSalaryInput {
            hourly_rate: RawInput::Number(f64::MAX),
            ..HourlyToSalaryInput::default()
        };
        let salary = calculate_hourly_to_salary(&huge, &CalculatorDefaults::default());
        let result = salary.to_result(&NumberFormatter::default());
        assert_eq!(result.get("Annual salary"), Some(&ResultValue::Missing));
        assert_eq!(result.entries.len(), 5);
    }
}
