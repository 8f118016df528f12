//! Calculator result models.
//!
//! This module contains the [`CalculatorResult`] type and its associated
//! structures: an ordered list of labeled values that the presentation layer
//! renders as a results panel or copies to the clipboard as text.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Placeholder shown in a result slot that has no usable value.
pub const FALLBACK_GLYPH: &str = "—";

/// Identifies one of the calculators offered by the engine.
///
/// # Example
///
/// ```
/// use payroll_calc::models::CalculatorKind;
///
/// let kind = CalculatorKind::from_slug("overtime-pay").unwrap();
/// assert_eq!(kind, CalculatorKind::OvertimePay);
/// assert_eq!(kind.title(), "Overtime Pay Calculator");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CalculatorKind {
    /// Hourly rate to annual, monthly and weekly pay.
    HourlyToSalary,
    /// Annual salary to hourly, weekly and monthly pay.
    SalaryToHourly,
    /// Regular plus overtime pay for a week.
    OvertimePay,
    /// Weekly timecard totals from clock-in/clock-out pairs.
    Timecard,
}

impl CalculatorKind {
    /// Every calculator, in the order they are listed to users.
    pub const ALL: [CalculatorKind; 4] = [
        CalculatorKind::HourlyToSalary,
        CalculatorKind::SalaryToHourly,
        CalculatorKind::OvertimePay,
        CalculatorKind::Timecard,
    ];

    /// The URL slug for this calculator.
    pub fn slug(self) -> &'static str {
        match self {
            CalculatorKind::HourlyToSalary => "hourly-to-salary",
            CalculatorKind::SalaryToHourly => "salary-to-hourly",
            CalculatorKind::OvertimePay => "overtime-pay",
            CalculatorKind::Timecard => "timecard",
        }
    }

    /// The page title for this calculator.
    pub fn title(self) -> &'static str {
        match self {
            CalculatorKind::HourlyToSalary => "Hourly to Salary Calculator",
            CalculatorKind::SalaryToHourly => "Salary to Hourly Calculator",
            CalculatorKind::OvertimePay => "Overtime Pay Calculator",
            CalculatorKind::Timecard => "Timecard Calculator",
        }
    }

    /// A one-sentence description of what the calculator does.
    pub fn description(self) -> &'static str {
        match self {
            CalculatorKind::HourlyToSalary => {
                "Convert an hourly wage into annual, monthly and weekly pay."
            }
            CalculatorKind::SalaryToHourly => {
                "Convert an annual salary into an equivalent hourly rate."
            }
            CalculatorKind::OvertimePay => {
                "Work out regular pay, overtime pay and the total for a week."
            }
            CalculatorKind::Timecard => {
                "Add up daily clock-in and clock-out times into weekly hours."
            }
        }
    }

    /// The form fields this calculator reads, in form order.
    ///
    /// ```
    /// use payroll_calc::models::CalculatorKind;
    ///
    /// assert!(CalculatorKind::Timecard.fields().contains(&"days"));
    /// assert!(!CalculatorKind::Timecard.fields().contains(&"annual_salary"));
    /// ```
    pub fn fields(self) -> &'static [&'static str] {
        match self {
            CalculatorKind::HourlyToSalary => &["hourly_rate", "hours_per_week", "weeks_per_year"],
            CalculatorKind::SalaryToHourly => {
                &["annual_salary", "hours_per_week", "weeks_per_year"]
            }
            CalculatorKind::OvertimePay => &[
                "hourly_rate",
                "regular_hours",
                "overtime_hours",
                "overtime_multiplier",
                "overtime_threshold",
            ],
            CalculatorKind::Timecard => &[
                "days",
                "hourly_rate",
                "overtime_multiplier",
                "overtime_threshold",
            ],
        }
    }

    /// Looks up a calculator by its slug.
    pub fn from_slug(slug: &str) -> EngineResult<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.slug() == slug)
            .ok_or_else(|| EngineError::UnknownCalculator {
                slug: slug.to_string(),
            })
    }
}

/// The value held by a single result slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResultValue {
    /// A plain number, shown as-is.
    Number(f64),
    /// Text that has already been formatted (e.g. currency).
    Text(String),
    /// No usable value.
    Missing,
}

impl ResultValue {
    /// Renders the value for display.
    ///
    /// Missing values, blank text and non-finite numbers all render as
    /// [`FALLBACK_GLYPH`]. Zero is a real value and renders as `"0"`.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_calc::models::{ResultValue, FALLBACK_GLYPH};
    ///
    /// assert_eq!(ResultValue::Number(0.0).display(), "0");
    /// assert_eq!(ResultValue::Number(f64::NAN).display(), FALLBACK_GLYPH);
    /// assert_eq!(ResultValue::Text("   ".to_string()).display(), FALLBACK_GLYPH);
    /// ```
    pub fn display(&self) -> String {
        match self {
            ResultValue::Number(n) if n.is_finite() => {
                // -0.0 would otherwise print as "-0"
                if *n == 0.0 {
                    "0".to_string()
                } else {
                    n.to_string()
                }
            }
            ResultValue::Text(text) if !text.trim().is_empty() => text.clone(),
            _ => FALLBACK_GLYPH.to_string(),
        }
    }

    /// Wraps a number, mapping non-finite values to [`ResultValue::Missing`].
    pub fn number(value: f64) -> Self {
        if value.is_finite() {
            ResultValue::Number(value)
        } else {
            ResultValue::Missing
        }
    }
}

impl From<Option<f64>> for ResultValue {
    fn from(value: Option<f64>) -> Self {
        value.map_or(ResultValue::Missing, ResultValue::number)
    }
}

/// A single labeled slot in a results panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultEntry {
    /// The label shown next to the value.
    pub label: String,
    /// The value itself.
    pub value: ResultValue,
}

impl ResultEntry {
    /// Creates a new entry.
    pub fn new(label: impl Into<String>, value: ResultValue) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// The complete output of one calculator run.
///
/// Entries are kept in display order.
///
/// # Example
///
/// ```
/// use payroll_calc::models::{CalculatorKind, CalculatorResult, ResultEntry, ResultValue};
///
/// let result = CalculatorResult {
///     calculator: CalculatorKind::Timecard,
///     entries: vec![
///         ResultEntry::new("Total hours", ResultValue::Number(44.0)),
///         ResultEntry::new("Total pay", ResultValue::Missing),
///     ],
/// };
/// assert_eq!(
///     result.summary(),
///     "Timecard Calculator\nTotal hours: 44\nTotal pay: —"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorResult {
    /// The calculator that produced this result.
    pub calculator: CalculatorKind,
    /// Labeled values in display order.
    pub entries: Vec<ResultEntry>,
}

impl CalculatorResult {
    /// Creates an empty result for a calculator.
    pub fn new(calculator: CalculatorKind) -> Self {
        Self {
            calculator,
            entries: Vec::new(),
        }
    }

    /// Appends an entry, returning the result for chaining.
    pub fn with_entry(mut self, label: impl Into<String>, value: ResultValue) -> Self {
        self.entries.push(ResultEntry::new(label, value));
        self
    }

    /// Looks up the value for a label.
    pub fn get(&self, label: &str) -> Option<&ResultValue> {
        self.entries
            .iter()
            .find(|entry| entry.label == label)
            .map(|entry| &entry.value)
    }

    /// A plain-text summary suitable for copying to the clipboard.
    ///
    /// The first line is the calculator title, followed by one
    /// `label: value` line per entry.
    pub fn summary(&self) -> String {
        let mut lines = Vec::with_capacity(self.entries.len() + 1);
        lines.push(self.calculator.title().to_string());
        for entry in &self.entries {
            lines.push(format!("{}: {}", entry.label, entry.value.display()));
        }
        lines.join("\n")
    }
}
