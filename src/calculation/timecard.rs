//! Timecard aggregation.
//!
//! Sums the hours of each day on a weekly timecard and splits the total at
//! the weekly overtime threshold. When an hourly rate is given, regular and
//! overtime pay are calculated the same way as the overtime calculator.

use serde::{Deserialize, Serialize};

use super::defaults::CalculatorDefaults;
use super::render;
use super::threshold_split::{HoursSplit, split_hours};
use crate::format::NumberFormatter;
use crate::models::{CalculatorKind, CalculatorResult, RawInput, ResultValue, TimecardDay};
use crate::normalize::{normalize_non_negative, normalize_positive_or};

/// Form fields for the timecard calculator.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TimecardInput {
    /// Days in the order they were entered.
    pub days: Vec<TimecardDay>,
    /// Optional hourly rate for pay totals.
    pub hourly_rate: RawInput,
    /// Overtime multiplier (default 1.5).
    pub overtime_multiplier: RawInput,
    /// Weekly overtime threshold (default 40).
    pub overtime_threshold: RawInput,
}

/// The outcome of a timecard aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimecardBreakdown {
    /// Hours for each day, in input order.
    pub day_hours: Vec<f64>,
    /// Sum of all day hours.
    pub total_hours: f64,
    /// Total split at the threshold.
    pub split: HoursSplit,
    /// The threshold used.
    pub threshold: f64,
    /// The hourly rate used (zero when not given).
    pub hourly_rate: f64,
    /// The overtime multiplier used.
    pub multiplier: f64,
    /// `hourly_rate * split.regular`.
    pub regular_pay: f64,
    /// `hourly_rate * multiplier * split.overtime`.
    pub overtime_pay: f64,
    /// `regular_pay + overtime_pay`.
    pub total_pay: f64,
}

/// Aggregates a weekly timecard.
///
/// # Examples
///
/// ```
/// use payroll_calc::calculation::{calculate_timecard, CalculatorDefaults, TimecardInput};
/// use payroll_calc::models::TimecardDay;
///
/// let input = TimecardInput {
///     days: vec![
///         TimecardDay::new("08:00", "17:00"),
///         TimecardDay::new("08:00", "17:00"),
///         TimecardDay::new("08:00", "17:00"),
///         TimecardDay::new("08:00", "17:00"),
///         TimecardDay::new("08:00", "16:00"),
///     ],
///     ..TimecardInput::default()
/// };
/// let card = calculate_timecard(&input, &CalculatorDefaults::default());
/// assert_eq!(card.total_hours, 44.0);
/// assert_eq!(card.split.regular, 40.0);
/// assert_eq!(card.split.overtime, 4.0);
/// ```
pub fn calculate_timecard(
    input: &TimecardInput,
    defaults: &CalculatorDefaults,
) -> TimecardBreakdown {
    let day_hours: Vec<f64> = input.days.iter().map(TimecardDay::worked_hours).collect();
    let total_hours: f64 = day_hours.iter().sum();

    let threshold = normalize_positive_or(&input.overtime_threshold, defaults.overtime_threshold);
    let multiplier =
        normalize_positive_or(&input.overtime_multiplier, defaults.overtime_multiplier);
    let hourly_rate = normalize_non_negative(&input.hourly_rate);

    let split = split_hours(total_hours, threshold);
    let regular_pay = hourly_rate * split.regular;
    let overtime_pay = hourly_rate * multiplier * split.overtime;

    TimecardBreakdown {
        day_hours,
        total_hours,
        split,
        threshold,
        hourly_rate,
        multiplier,
        regular_pay,
        overtime_pay,
        total_pay: regular_pay + overtime_pay,
    }
}

impl TimecardBreakdown {
    /// Number of days with any hours recorded.
    pub fn days_worked(&self) -> usize {
        self.day_hours.iter().filter(|hours| **hours > 0.0).count()
    }

    /// Renders the breakdown as a results panel.
    ///
    /// Pay entries are only included when an hourly rate was given.
    pub fn to_result(&self, formatter: &NumberFormatter) -> CalculatorResult {
        let mut result = CalculatorResult::new(CalculatorKind::Timecard)
            .with_entry("Days worked", ResultValue::number(self.days_worked() as f64))
            .with_entry("Total hours", render::hours(formatter, self.total_hours))
            .with_entry("Regular hours", render::hours(formatter, self.split.regular))
            .with_entry("Overtime hours", render::hours(formatter, self.split.overtime));

        if self.hourly_rate > 0.0 {
            result = result
                .with_entry("Regular pay", render::money(formatter, self.regular_pay))
                .with_entry("Overtime pay", render::money(formatter, self.overtime_pay))
                .with_entry("Total pay", render::money(formatter, self.total_pay));
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn week(days: &[(&str, &str)]) -> TimecardInput {
        TimecardInput {
            days: days
                .iter()
                .map(|(clock_in, clock_out)| TimecardDay::new(*clock_in, *clock_out))
                .collect(),
            ..TimecardInput::default()
        }
    }

    #[test]
    fn test_empty_timecard_is_zero() {
        let card = calculate_timecard(&TimecardInput::default(), &CalculatorDefaults::default());
        assert_eq!(card.total_hours, 0.0);
        assert_eq!(card.split.regular, 0.0);
        assert_eq!(card.split.overtime, 0.0);
        assert_eq!(card.total_pay, 0.0);
        assert_eq!(card.days_worked(), 0);
    }

    #[test]
    fn test_forty_four_hours_splits_four_overtime() {
        let input = week(&[
            ("08:00", "17:00"),
            ("08:00", "17:00"),
            ("08:00", "17:00"),
            ("08:00", "17:00"),
            ("08:00", "16:00"),
        ]);
        let card = calculate_timecard(&input, &CalculatorDefaults::default());
        assert_eq!(card.day_hours, vec![9.0, 9.0, 9.0, 9.0, 8.0]);
        assert_eq!(card.total_hours, 44.0);
        assert_eq!(card.split.regular, 40.0);
        assert_eq!(card.split.overtime, 4.0);
    }

    #[test]
    fn test_malformed_day_counts_as_zero() {
        let input = week(&[("09:00", "17:00"), ("oops", "17:00"), ("09:00", "17:00")]);
        let card = calculate_timecard(&input, &CalculatorDefaults::default());
        assert_eq!(card.day_hours, vec![8.0, 0.0, 8.0]);
        assert_eq!(card.total_hours, 16.0);
        assert_eq!(card.days_worked(), 2);
    }

    #[test]
    fn test_custom_threshold() {
        let input = TimecardInput {
            overtime_threshold: "8".into(),
            ..week(&[("08:00", "18:00")])
        };
        let card = calculate_timecard(&input, &CalculatorDefaults::default());
        assert_eq!(card.split.regular, 8.0);
        assert_eq!(card.split.overtime, 2.0);
    }

    #[test]
    fn test_pay_with_rate() {
        let input = TimecardInput {
            hourly_rate: "20".into(),
            ..week(&[
                ("08:00", "17:00"),
                ("08:00", "17:00"),
                ("08:00", "17:00"),
                ("08:00", "17:00"),
                ("08:00", "16:00"),
            ])
        };
        let card = calculate_timecard(&input, &CalculatorDefaults::default());
        assert_eq!(card.regular_pay, 800.0);
        assert_eq!(card.overtime_pay, 120.0);
        assert_eq!(card.total_pay, 920.0);
    }

    #[test]
    fn test_result_without_rate_omits_pay() {
        let card = calculate_timecard(&week(&[("09:00", "17:00")]), &CalculatorDefaults::default());
        let result = card.to_result(&NumberFormatter::default());
        assert_eq!(result.entries.len(), 4);
        assert_eq!(result.get("Total pay"), None);
        assert_eq!(result.get("Days worked"), Some(&ResultValue::Number(1.0)));
        assert_eq!(
            result.get("Total hours"),
            Some(&ResultValue::Text("8".to_string()))
        );
    }

    #[test]
    fn test_result_with_rate_includes_pay() {
        let input = TimecardInput {
            hourly_rate: 25.into(),
            ..week(&[("09:00", "17:30")])
        };
        let result = calculate_timecard(&input, &CalculatorDefaults::default())
            .to_result(&NumberFormatter::default());
        assert_eq!(result.entries.len(), 7);
        assert_eq!(
            result.get("Total pay"),
            Some(&ResultValue::Text("$212.50".to_string()))
        );
    }

    #[test]
    fn test_empty_result_shows_zero_not_glyph() {
        let result = calculate_timecard(&TimecardInput::default(), &CalculatorDefaults::default())
            .to_result(&NumberFormatter::default());
        assert_eq!(result.get("Days worked").unwrap().display(), "0");
        assert_eq!(result.get("Total hours").unwrap().display(), "0");
    }
}
