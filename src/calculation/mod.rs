//! Payroll calculators.
//!
//! Each calculator is a pure function from untyped form fields to a numeric
//! breakdown, plus a `to_result` that renders the breakdown into a
//! [`CalculatorResult`](crate::models::CalculatorResult). None of them can
//! fail: unusable fields normalize to zero or to the configured defaults.
//!
//! The overtime and timecard calculators share [`split_hours`] for dividing
//! hours at the weekly threshold.

mod defaults;
mod dispatch;
mod hourly_to_salary;
mod overtime_pay;
mod render;
mod salary_to_hourly;
mod threshold_split;
mod timecard;

pub use defaults::{
    CalculatorDefaults, DEFAULT_HOURS_PER_WEEK, DEFAULT_OVERTIME_MULTIPLIER,
    DEFAULT_OVERTIME_THRESHOLD, DEFAULT_WEEKS_PER_YEAR,
};
pub use dispatch::{CalculatorInput, calculate};
pub use hourly_to_salary::{HourlyToSalaryInput, SalaryBreakdown, calculate_hourly_to_salary};
pub use overtime_pay::{OvertimeBreakdown, OvertimePayInput, calculate_overtime_pay};
pub use salary_to_hourly::{HourlyBreakdown, SalaryToHourlyInput, calculate_salary_to_hourly};
pub use threshold_split::{HoursSplit, split_hours};
pub use timecard::{TimecardBreakdown, TimecardInput, calculate_timecard};
