//! Currency, percent and hour formatting.
//!
//! Formatting is split into a fallible [`LocaleEngine`] and a never-fail
//! layer on top of it. Callers only ever see the never-fail layer.
//!
//! # Example
//!
//! ```
//! use payroll_calc::format::{format_currency, format_percent, DEFAULT_CURRENCY, DEFAULT_LOCALE};
//!
//! assert_eq!(format_currency(1234.5, DEFAULT_LOCALE, DEFAULT_CURRENCY), "$1,234.50");
//! assert_eq!(format_percent(12.345, 1, DEFAULT_LOCALE), "12.3%");
//! ```

mod engine;
mod formatter;

pub use engine::{BuiltinLocaleEngine, LocaleEngine, MAX_FRACTION_DIGITS};
pub use formatter::{
    DEFAULT_CURRENCY, DEFAULT_LOCALE, DEFAULT_PERCENT_DIGITS, NumberFormatter, fallback_currency,
    fallback_percent, format_currency, format_currency_with, format_percent, format_percent_with,
};
