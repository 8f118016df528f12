//! Never-fail currency and percent formatting.
//!
//! Every function here normalizes its input first, asks a [`LocaleEngine`]
//! for locale-aware text and, if the engine refuses, falls back to a fixed
//! pattern. Nothing in this module returns an error or panics.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use super::engine::{BuiltinLocaleEngine, LocaleEngine, MAX_FRACTION_DIGITS};
use crate::models::RawInput;
use crate::normalize::normalize;

/// Locale used when none is configured.
pub const DEFAULT_LOCALE: &str = "en-US";

/// Currency used when none is configured.
pub const DEFAULT_CURRENCY: &str = "USD";

/// Default maximum fraction digits for percentages.
pub const DEFAULT_PERCENT_DIGITS: i64 = 2;

/// Formats a value as currency with the built-in engine.
///
/// Falls back to `"$"` followed by the value with two fixed decimals when the
/// locale or currency code is not usable.
///
/// # Examples
///
/// ```
/// use payroll_calc::format::format_currency;
///
/// assert_eq!(format_currency(1234.5, "en-US", "USD"), "$1,234.50");
/// assert_eq!(format_currency(1234.5, "en-US", "not a code"), "$1234.50");
/// assert_eq!(format_currency("garbage", "en-US", "USD"), "$0.00");
/// ```
pub fn format_currency(value: impl Into<RawInput>, locale: &str, currency_code: &str) -> String {
    format_currency_with(&BuiltinLocaleEngine, value, locale, currency_code)
}

/// Formats a value as a percentage with the built-in engine.
///
/// The number is rendered with up to `max_fraction_digits` fraction digits
/// and a literal `%` is appended.
///
/// # Examples
///
/// ```
/// use payroll_calc::format::format_percent;
///
/// assert_eq!(format_percent(12.345, 1, "en-US"), "12.3%");
/// assert_eq!(format_percent(0, 2, "en-US"), "0%");
/// ```
pub fn format_percent(
    value: impl Into<RawInput>,
    max_fraction_digits: i64,
    locale: &str,
) -> String {
    format_percent_with(&BuiltinLocaleEngine, value, max_fraction_digits, locale)
}

/// [`format_currency`] against an arbitrary engine.
pub fn format_currency_with(
    engine: &dyn LocaleEngine,
    value: impl Into<RawInput>,
    locale: &str,
    currency_code: &str,
) -> String {
    let value = normalize(value);
    match engine.currency(value, locale, currency_code) {
        Ok(text) => text,
        Err(err) => {
            debug!(
                error = %err,
                locale,
                currency_code,
                "Currency formatting fell back to fixed pattern"
            );
            fallback_currency(value)
        }
    }
}

/// [`format_percent`] against an arbitrary engine.
pub fn format_percent_with(
    engine: &dyn LocaleEngine,
    value: impl Into<RawInput>,
    max_fraction_digits: i64,
    locale: &str,
) -> String {
    let value = normalize(value);
    match engine.decimal(value, max_fraction_digits, locale) {
        Ok(text) => format!("{text}%"),
        Err(err) => {
            debug!(
                error = %err,
                locale,
                max_fraction_digits,
                "Percent formatting fell back to fixed pattern"
            );
            fallback_percent(value, max_fraction_digits)
        }
    }
}

/// Fixed `$` pattern with two decimals and no grouping.
pub fn fallback_currency(value: f64) -> String {
    format!("${:.2}", positive_zero(value))
}

/// Fixed pattern with the digit count clamped to `0..=20`.
pub fn fallback_percent(value: f64, max_fraction_digits: i64) -> String {
    let digits = max_fraction_digits.clamp(0, MAX_FRACTION_DIGITS) as usize;
    format!("{:.*}%", digits, positive_zero(value))
}

fn positive_zero(value: f64) -> f64 {
    if value == 0.0 { 0.0 } else { value }
}

/// A formatter bound to one locale and currency.
///
/// Built once from configuration and shared; calculators take it by
/// reference rather than reading any global locale setting.
///
/// # Example
///
/// ```
/// use payroll_calc::format::NumberFormatter;
///
/// let formatter = NumberFormatter::new("de-DE", "EUR");
/// assert_eq!(formatter.currency(1234.5), "1.234,50\u{a0}€");
/// assert_eq!(formatter.percent(7.25, 2), "7,25%");
/// assert_eq!(formatter.hours(37.5), "37,5");
/// ```
#[derive(Clone)]
pub struct NumberFormatter {
    engine: Arc<dyn LocaleEngine>,
    locale: String,
    currency: String,
}

impl NumberFormatter {
    /// Creates a formatter backed by the built-in engine.
    pub fn new(locale: impl Into<String>, currency: impl Into<String>) -> Self {
        Self::with_engine(Arc::new(BuiltinLocaleEngine), locale, currency)
    }

    /// Creates a formatter backed by a custom engine.
    pub fn with_engine(
        engine: Arc<dyn LocaleEngine>,
        locale: impl Into<String>,
        currency: impl Into<String>,
    ) -> Self {
        Self {
            engine,
            locale: locale.into(),
            currency: currency.into(),
        }
    }

    /// The configured locale tag.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// The configured currency code.
    pub fn currency_code(&self) -> &str {
        &self.currency
    }

    /// Formats a monetary value.
    pub fn currency(&self, value: impl Into<RawInput>) -> String {
        format_currency_with(self.engine.as_ref(), value, &self.locale, &self.currency)
    }

    /// Formats a percentage with up to `max_fraction_digits` fraction digits.
    pub fn percent(&self, value: impl Into<RawInput>, max_fraction_digits: i64) -> String {
        format_percent_with(self.engine.as_ref(), value, max_fraction_digits, &self.locale)
    }

    /// Formats an hour count with up to two fraction digits.
    pub fn hours(&self, value: impl Into<RawInput>) -> String {
        let value = normalize(value);
        match self.engine.decimal(value, 2, &self.locale) {
            Ok(text) => text,
            Err(err) => {
                debug!(
                    error = %err,
                    locale = %self.locale,
                    "Hours formatting fell back to fixed pattern"
                );
                format!("{:.2}", positive_zero(value))
            }
        }
    }
}

impl Default for NumberFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_LOCALE, DEFAULT_CURRENCY)
    }
}

impl fmt::Debug for NumberFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NumberFormatter")
            .field("locale", &self.locale)
            .field("currency", &self.currency)
            .finish_non_exhaustive()
    }
}
