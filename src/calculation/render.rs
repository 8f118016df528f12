//! Turning calculator numbers into result slots.
//!
//! A non-finite number never reaches the formatter: it becomes
//! [`ResultValue::Missing`] so the slot shows the fallback glyph instead of
//! a misleading `$0.00`.

use crate::format::NumberFormatter;
use crate::models::ResultValue;

pub(crate) fn money(formatter: &NumberFormatter, value: f64) -> ResultValue {
    if value.is_finite() {
        ResultValue::Text(formatter.currency(value))
    } else {
        ResultValue::Missing
    }
}

pub(crate) fn hours(formatter: &NumberFormatter, value: f64) -> ResultValue {
    if value.is_finite() {
        ResultValue::Text(formatter.hours(value))
    } else {
        ResultValue::Missing
    }
}

pub(crate) fn percent(
    formatter: &NumberFormatter,
    value: f64,
    max_fraction_digits: i64,
) -> ResultValue {
    if value.is_finite() {
        ResultValue::Text(formatter.percent(value, max_fraction_digits))
    } else {
        ResultValue::Missing
    }
}
