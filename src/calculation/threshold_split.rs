//! Regular/overtime hour splitting.
//!
//! Both the overtime and timecard calculators divide hours at a weekly
//! threshold. They share this one primitive so the threshold and capping
//! rules cannot drift apart.

use serde::{Deserialize, Serialize};

/// Hours divided at an overtime threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoursSplit {
    /// Hours up to the threshold.
    pub regular: f64,
    /// Hours beyond the threshold.
    pub overtime: f64,
}

/// Splits `total` hours into regular hours (capped at `threshold`) and
/// overtime hours (the excess).
///
/// Negative totals are treated as zero, so neither side is ever negative.
///
/// # Examples
///
/// ```
/// use payroll_calc::calculation::split_hours;
///
/// let split = split_hours(44.0, 40.0);
/// assert_eq!(split.regular, 40.0);
/// assert_eq!(split.overtime, 4.0);
///
/// let split = split_hours(32.0, 40.0);
/// assert_eq!(split.regular, 32.0);
/// assert_eq!(split.overtime, 0.0);
/// ```
pub fn split_hours(total: f64, threshold: f64) -> HoursSplit {
    let total = total.max(0.0);
    let threshold = threshold.max(0.0);

    let regular = if total <= threshold { total } else { threshold };
    let overtime = if total > threshold {
        total - threshold
    } else {
        0.0
    };

    HoursSplit { regular, overtime }
}
