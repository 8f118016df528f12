//! Salary-to-hourly conversion, the inverse of hourly-to-salary.

use serde::{Deserialize, Serialize};

use super::defaults::CalculatorDefaults;
use super::render;
use crate::format::NumberFormatter;
use crate::models::{CalculatorKind, CalculatorResult, RawInput};
use crate::normalize::{normalize_non_negative, normalize_positive_or};

/// Form fields for the salary-to-hourly calculator.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SalaryToHourlyInput {
    /// Gross annual salary.
    pub annual_salary: RawInput,
    /// Hours worked per week (default 40).
    pub hours_per_week: RawInput,
    /// Paid weeks per year (default 52).
    pub weeks_per_year: RawInput,
}

/// The outcome of a salary-to-hourly conversion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HourlyBreakdown {
    /// The salary used, after normalization.
    pub annual_salary: f64,
    /// The hours per week used.
    pub hours_per_week: f64,
    /// The weeks per year used.
    pub weeks_per_year: f64,
    /// `annual_salary / (hours_per_week * weeks_per_year)`.
    pub hourly_rate: f64,
    /// `annual_salary / weeks_per_year`.
    pub weekly: f64,
    /// `annual_salary / 12`.
    pub monthly: f64,
}

/// Converts an annual salary into an equivalent hourly rate.
///
/// Hours and weeks are always positive after defaulting, so the divisions
/// are well defined.
///
/// # Example
///
/// ```
/// use payroll_calc::calculation::{calculate_salary_to_hourly, CalculatorDefaults, SalaryToHourlyInput};
///
/// let input = SalaryToHourlyInput {
///     annual_salary: "52000".into(),
///     ..SalaryToHourlyInput::default()
/// };
/// let hourly = calculate_salary_to_hourly(&input, &CalculatorDefaults::default());
/// assert_eq!(hourly.hourly_rate, 25.0);
/// ```
pub fn calculate_salary_to_hourly(
    input: &SalaryToHourlyInput,
    defaults: &CalculatorDefaults,
) -> HourlyBreakdown {
    let annual_salary = normalize_non_negative(&input.annual_salary);
    let hours_per_week = normalize_positive_or(&input.hours_per_week, defaults.hours_per_week);
    let weeks_per_year = normalize_positive_or(&input.weeks_per_year, defaults.weeks_per_year);

    HourlyBreakdown {
        annual_salary,
        hours_per_week,
        weeks_per_year,
        hourly_rate: annual_salary / (hours_per_week * weeks_per_year),
        weekly: annual_salary / weeks_per_year,
        monthly: annual_salary / 12.0,
    }
}

impl HourlyBreakdown {
    /// Renders the breakdown as a results panel.
    pub fn to_result(&self, formatter: &NumberFormatter) -> CalculatorResult {
        CalculatorResult::new(CalculatorKind::SalaryToHourly)
            .with_entry("Hourly rate", render::money(formatter, self.hourly_rate))
            .with_entry("Weekly pay", render::money(formatter, self.weekly))
            .with_entry("Monthly pay", render::money(formatter, self.monthly))
            .with_entry("Hours per week", render::hours(formatter, self.hours_per_week))
    }
}
