//! Core data models for the payroll calculator engine.
//!
//! Everything here is a transient value object: created per calculation and
//! discarded once the caller has read it.

mod calculator_result;
mod raw_input;
mod timecard;

pub use calculator_result::{
    CalculatorKind, CalculatorResult, FALLBACK_GLYPH, ResultEntry, ResultValue,
};
pub use raw_input::RawInput;
pub use timecard::TimecardDay;
