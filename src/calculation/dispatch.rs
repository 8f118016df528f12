//! Routing raw form state to the right calculator.

use serde_json::{Map, Value};

use super::defaults::CalculatorDefaults;
use super::hourly_to_salary::{HourlyToSalaryInput, calculate_hourly_to_salary};
use super::overtime_pay::{OvertimePayInput, calculate_overtime_pay};
use super::salary_to_hourly::{SalaryToHourlyInput, calculate_salary_to_hourly};
use super::timecard::{TimecardInput, calculate_timecard};
use crate::format::NumberFormatter;
use crate::models::{CalculatorKind, CalculatorResult, RawInput, TimecardDay};

/// A bag of named form fields as submitted by the page.
///
/// Field values stay untyped until a calculator normalizes them. Anything
/// other than a JSON object is treated as an empty form.
///
/// # Example
///
/// ```
/// use payroll_calc::calculation::CalculatorInput;
/// use payroll_calc::models::RawInput;
/// use serde_json::json;
///
/// let input = CalculatorInput::from_json(json!({"hourly_rate": "25"}));
/// assert_eq!(input.field("hourly_rate"), RawInput::Text("25".to_string()));
/// assert_eq!(input.field("hours_per_week"), RawInput::Missing);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CalculatorInput {
    fields: Map<String, Value>,
}

impl CalculatorInput {
    /// Creates an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps a JSON value.
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::Object(fields) => Self { fields },
            _ => Self::default(),
        }
    }

    /// Sets a field, returning the form for chaining.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Reads a field; absent fields are [`RawInput::Missing`].
    pub fn field(&self, name: &str) -> RawInput {
        self.fields.get(name).map(RawInput::from).unwrap_or_default()
    }

    /// Reads the `days` array of a timecard; anything else yields no days.
    pub fn days(&self) -> Vec<TimecardDay> {
        match self.fields.get("days") {
            Some(Value::Array(days)) => days.iter().map(TimecardDay::from).collect(),
            _ => Vec::new(),
        }
    }

    /// Whether the form holds a field with this name, even a blank one.
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Names of the fields present.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

impl From<Value> for CalculatorInput {
    fn from(value: Value) -> Self {
        Self::from_json(value)
    }
}

/// Runs the calculator `kind` over raw form fields.
///
/// Never fails: missing or malformed fields normalize to zero or to the
/// configured defaults, and the result always has every entry.
///
/// # Example
///
/// ```
/// use payroll_calc::calculation::{calculate, CalculatorDefaults, CalculatorInput};
/// use payroll_calc::format::NumberFormatter;
/// use payroll_calc::models::{CalculatorKind, ResultValue};
///
/// let input = CalculatorInput::new()
///     .with("hourly_rate", "20")
///     .with("regular_hours", "45")
///     .with("overtime_hours", "5");
/// let result = calculate(
///     CalculatorKind::OvertimePay,
///     &input,
///     &CalculatorDefaults::default(),
///     &NumberFormatter::default(),
/// );
/// assert_eq!(result.get("Total pay"), Some(&ResultValue::Text("$950.00".to_string())));
/// ```
pub fn calculate(
    kind: CalculatorKind,
    input: &CalculatorInput,
    defaults: &CalculatorDefaults,
    formatter: &NumberFormatter,
) -> CalculatorResult {
    match kind {
        CalculatorKind::HourlyToSalary => {
            let fields = HourlyToSalaryInput {
                hourly_rate: input.field("hourly_rate"),
                hours_per_week: input.field("hours_per_week"),
                weeks_per_year: input.field("weeks_per_year"),
            };
            calculate_hourly_to_salary(&fields, defaults).to_result(formatter)
        }
        CalculatorKind::SalaryToHourly => {
            let fields = SalaryToHourlyInput {
                annual_salary: input.field("annual_salary"),
                hours_per_week: input.field("hours_per_week"),
                weeks_per_year: input.field("weeks_per_year"),
            };
            calculate_salary_to_hourly(&fields, defaults).to_result(formatter)
        }
        CalculatorKind::OvertimePay => {
            let fields = OvertimePayInput {
                hourly_rate: input.field("hourly_rate"),
                regular_hours: input.field("regular_hours"),
                overtime_hours: input.field("overtime_hours"),
                overtime_multiplier: input.field("overtime_multiplier"),
                overtime_threshold: input.field("overtime_threshold"),
            };
            calculate_overtime_pay(&fields, defaults).to_result(formatter)
        }
        CalculatorKind::Timecard => {
            let fields = TimecardInput {
                days: input.days(),
                hourly_rate: input.field("hourly_rate"),
                overtime_multiplier: input.field("overtime_multiplier"),
                overtime_threshold: input.field("overtime_threshold"),
            };
            calculate_timecard(&fields, defaults).to_result(formatter)
        }
    }
}
