//! Default calculator parameters.

use serde::{Deserialize, Serialize};

/// Standard full-time hours per week.
pub const DEFAULT_HOURS_PER_WEEK: f64 = 40.0;

/// Paid weeks per year.
pub const DEFAULT_WEEKS_PER_YEAR: f64 = 52.0;

/// Weekly hours after which overtime applies.
pub const DEFAULT_OVERTIME_THRESHOLD: f64 = 40.0;

/// Time-and-a-half.
pub const DEFAULT_OVERTIME_MULTIPLIER: f64 = 1.5;

/// Values substituted for blank, zero or negative calculator fields.
///
/// # Example
///
/// ```
/// use payroll_calc::calculation::CalculatorDefaults;
///
/// let defaults = CalculatorDefaults::default();
/// assert_eq!(defaults.hours_per_week, 40.0);
/// assert_eq!(defaults.overtime_multiplier, 1.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorDefaults {
    /// Hours per week when the field is blank or not positive.
    pub hours_per_week: f64,
    /// Weeks per year when the field is blank or not positive.
    pub weeks_per_year: f64,
    /// Weekly overtime threshold in hours.
    pub overtime_threshold: f64,
    /// Overtime pay multiplier.
    pub overtime_multiplier: f64,
}

impl Default for CalculatorDefaults {
    fn default() -> Self {
        Self {
            hours_per_week: DEFAULT_HOURS_PER_WEEK,
            weeks_per_year: DEFAULT_WEEKS_PER_YEAR,
            overtime_threshold: DEFAULT_OVERTIME_THRESHOLD,
            overtime_multiplier: DEFAULT_OVERTIME_MULTIPLIER,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_yaml_fields_take_defaults() {
        let defaults: CalculatorDefaults = serde_yaml::from_str("hours_per_week: 37.5").unwrap();
        assert_eq!(defaults.hours_per_week, 37.5);
        assert_eq!(defaults.weeks_per_year, DEFAULT_WEEKS_PER_YEAR);
        assert_eq!(defaults.overtime_threshold, DEFAULT_OVERTIME_THRESHOLD);
        assert_eq!(defaults.overtime_multiplier, DEFAULT_OVERTIME_MULTIPLIER);
    }
}
