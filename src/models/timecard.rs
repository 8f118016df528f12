//! Timecard day model.
//!
//! This module defines [`TimecardDay`], one row of a weekly timecard with a
//! clock-in time, a clock-out time and an unpaid break.

use chrono::{NaiveTime, Timelike};
use serde_json::Value;

use super::RawInput;
use crate::normalize::normalize_non_negative;

const MINUTES_PER_DAY: f64 = 24.0 * 60.0;

/// One day on a timecard, exactly as typed into the form.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TimecardDay {
    /// Clock-in time, e.g. `"09:00"`.
    pub clock_in: RawInput,
    /// Clock-out time, e.g. `"17:30"`.
    pub clock_out: RawInput,
    /// Unpaid break length in minutes.
    pub break_minutes: RawInput,
}

impl TimecardDay {
    /// Creates a day from clock-in and clock-out text with no break.
    pub fn new(clock_in: impl Into<RawInput>, clock_out: impl Into<RawInput>) -> Self {
        Self {
            clock_in: clock_in.into(),
            clock_out: clock_out.into(),
            break_minutes: RawInput::Missing,
        }
    }

    /// Sets the unpaid break length.
    pub fn with_break(mut self, minutes: impl Into<RawInput>) -> Self {
        self.break_minutes = minutes.into();
        self
    }

    /// Calculates the hours worked on this day.
    ///
    /// A clock-out earlier than the clock-in is treated as an overnight shift
    /// that ends the next day. Unpaid break minutes are subtracted and the
    /// result never goes below zero. If either clock time is malformed the
    /// day counts as zero hours.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_calc::models::TimecardDay;
    ///
    /// let day = TimecardDay::new("09:00", "17:30").with_break("30");
    /// assert_eq!(day.worked_hours(), 8.0);
    ///
    /// let overnight = TimecardDay::new("22:00", "06:00");
    /// assert_eq!(overnight.worked_hours(), 8.0);
    ///
    /// let malformed = TimecardDay::new("nine", "17:00");
    /// assert_eq!(malformed.worked_hours(), 0.0);
    /// ```
    pub fn worked_hours(&self) -> f64 {
        let (Some(start), Some(end)) = (parse_clock(&self.clock_in), parse_clock(&self.clock_out))
        else {
            return 0.0;
        };

        let start_minutes = minutes_since_midnight(start);
        let end_minutes = minutes_since_midnight(end);

        let span_minutes = if end_minutes >= start_minutes {
            end_minutes - start_minutes
        } else {
            end_minutes + MINUTES_PER_DAY - start_minutes
        };

        let worked_minutes = (span_minutes - normalize_non_negative(&self.break_minutes)).max(0.0);
        worked_minutes / 60.0
    }
}

impl From<&Value> for TimecardDay {
    fn from(value: &Value) -> Self {
        match value {
            Value::Object(fields) => Self {
                clock_in: fields.get("clock_in").map(RawInput::from).unwrap_or_default(),
                clock_out: fields.get("clock_out").map(RawInput::from).unwrap_or_default(),
                break_minutes: fields
                    .get("break_minutes")
                    .map(RawInput::from)
                    .unwrap_or_default(),
            },
            _ => Self::default(),
        }
    }
}

/// Parses `HH:MM` or `HH:MM:SS` text into a time of day.
fn parse_clock(input: &RawInput) -> Option<NaiveTime> {
    let text = input.as_text()?.trim();
    NaiveTime::parse_from_str(text, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(text, "%H:%M:%S"))
        .ok()
}

fn minutes_since_midnight(time: NaiveTime) -> f64 {
    f64::from(time.num_seconds_from_midnight()) / 60.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_simple_day() {
        let day = TimecardDay::new("09:00", "17:00");
        assert_eq!(day.worked_hours(), 8.0);
    }

    #[test]
    fn test_unpaid_break_subtracted() {
        let day = TimecardDay::new("08:00", "16:30").with_break(30);
        assert_eq!(day.worked_hours(), 8.0);
    }

    #[test]
    fn test_break_longer_than_shift_floors_at_zero() {
        let day = TimecardDay::new("09:00", "10:00").with_break("90");
        assert_eq!(day.worked_hours(), 0.0);
    }

    #[test]
    fn test_negative_break_ignored() {
        let day = TimecardDay::new("09:00", "17:00").with_break(-60);
        assert_eq!(day.worked_hours(), 8.0);
    }

    #[test]
    fn test_garbage_break_ignored() {
        let day = TimecardDay::new("09:00", "17:00").with_break("lunch");
        assert_eq!(day.worked_hours(), 8.0);
    }

    #[test]
    fn test_overnight_wraps_past_midnight() {
        let day = TimecardDay::new("22:00", "06:00");
        assert_eq!(day.worked_hours(), 8.0);
    }

    #[test]
    fn test_same_clock_times_is_zero() {
        let day = TimecardDay::new("09:00", "09:00");
        assert_eq!(day.worked_hours(), 0.0);
    }

    #[test]
    fn test_seconds_precision() {
        let day = TimecardDay::new("09:00:00", "09:45:00");
        assert_eq!(day.worked_hours(), 0.75);
    }

    #[test]
    fn test_malformed_clock_is_zero() {
        assert_eq!(TimecardDay::new("", "17:00").worked_hours(), 0.0);
        assert_eq!(TimecardDay::new("09:00", "25:00").worked_hours(), 0.0);
        assert_eq!(TimecardDay::new(9, 17).worked_hours(), 0.0);
        assert_eq!(TimecardDay::default().worked_hours(), 0.0);
    }

    #[test]
    fn test_surrounding_whitespace_trimmed() {
        let day = TimecardDay::new(" 09:00 ", "12:00\n");
        assert_eq!(day.worked_hours(), 3.0);
    }

    #[test]
    fn test_from_json_object() {
        let value = json!({"clock_in": "09:00", "clock_out": "17:00", "break_minutes": 60});
        let day = TimecardDay::from(&value);
        assert_eq!(day.clock_in, RawInput::Text("09:00".to_string()));
        assert_eq!(day.break_minutes, RawInput::Number(60.0));
        assert_eq!(day.worked_hours(), 7.0);
    }

    #[test]
    fn test_from_json_non_object_is_empty_day() {
        let day = TimecardDay::from(&json!("09:00-17:00"));
        assert_eq!(day, TimecardDay::default());
        assert_eq!(day.worked_hours(), 0.0);
    }
}
