//! Locale-aware number formatting engine.
//!
//! The engine is the fallible half of formatting: it knows a fixed set of
//! locales and currencies and reports anything else as a [`FormatError`].
//! Rounding is done on `rust_decimal` values, half away from zero, so
//! `12.345` rounds to `12.35` the way a user reading the decimal expects.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::FormatError;

/// Largest fraction digit count the engine accepts.
pub const MAX_FRACTION_DIGITS: i64 = 20;

const NBSP: &str = "\u{a0}";

/// A locale-aware formatting facility that may fail per call.
pub trait LocaleEngine: Send + Sync {
    /// Formats `value` as currency, with between the currency's minor-unit
    /// digits and two fraction digits.
    fn currency(
        &self,
        value: f64,
        locale: &str,
        currency_code: &str,
    ) -> Result<String, FormatError>;

    /// Formats `value` as a plain grouped number with at most
    /// `max_fraction_digits` fraction digits and no trailing zeros.
    fn decimal(
        &self,
        value: f64,
        max_fraction_digits: i64,
        locale: &str,
    ) -> Result<String, FormatError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SymbolPosition {
    Prefix,
    Suffix,
}

/// Number conventions for one locale.
#[derive(Debug, Clone, Copy)]
struct LocaleConventions {
    tag: &'static str,
    group_separator: &'static str,
    decimal_separator: &'static str,
    symbol_position: SymbolPosition,
    home_currency: &'static str,
}

const LOCALES: &[LocaleConventions] = &[
    LocaleConventions {
        tag: "en-US",
        group_separator: ",",
        decimal_separator: ".",
        symbol_position: SymbolPosition::Prefix,
        home_currency: "USD",
    },
    LocaleConventions {
        tag: "en-GB",
        group_separator: ",",
        decimal_separator: ".",
        symbol_position: SymbolPosition::Prefix,
        home_currency: "GBP",
    },
    LocaleConventions {
        tag: "en-AU",
        group_separator: ",",
        decimal_separator: ".",
        symbol_position: SymbolPosition::Prefix,
        home_currency: "AUD",
    },
    LocaleConventions {
        tag: "en-CA",
        group_separator: ",",
        decimal_separator: ".",
        symbol_position: SymbolPosition::Prefix,
        home_currency: "CAD",
    },
    LocaleConventions {
        tag: "de-DE",
        group_separator: ".",
        decimal_separator: ",",
        symbol_position: SymbolPosition::Suffix,
        home_currency: "EUR",
    },
    LocaleConventions {
        tag: "fr-FR",
        group_separator: "\u{202f}",
        decimal_separator: ",",
        symbol_position: SymbolPosition::Suffix,
        home_currency: "EUR",
    },
    LocaleConventions {
        tag: "ja-JP",
        group_separator: ",",
        decimal_separator: ".",
        symbol_position: SymbolPosition::Prefix,
        home_currency: "JPY",
    },
];

/// Currency display data.
#[derive(Debug, Clone, Copy)]
struct CurrencyInfo {
    code: &'static str,
    /// Symbol used inside the currency's home locale.
    local_symbol: &'static str,
    /// Symbol used everywhere else.
    symbol: &'static str,
    minor_digits: u32,
}

const CURRENCIES: &[CurrencyInfo] = &[
    CurrencyInfo {
        code: "USD",
        local_symbol: "$",
        symbol: "US$",
        minor_digits: 2,
    },
    CurrencyInfo {
        code: "EUR",
        local_symbol: "€",
        symbol: "€",
        minor_digits: 2,
    },
    CurrencyInfo {
        code: "GBP",
        local_symbol: "£",
        symbol: "£",
        minor_digits: 2,
    },
    CurrencyInfo {
        code: "AUD",
        local_symbol: "$",
        symbol: "A$",
        minor_digits: 2,
    },
    CurrencyInfo {
        code: "CAD",
        local_symbol: "$",
        symbol: "CA$",
        minor_digits: 2,
    },
    CurrencyInfo {
        code: "NZD",
        local_symbol: "$",
        symbol: "NZ$",
        minor_digits: 2,
    },
    CurrencyInfo {
        code: "MXN",
        local_symbol: "$",
        symbol: "MX$",
        minor_digits: 2,
    },
    CurrencyInfo {
        code: "INR",
        local_symbol: "₹",
        symbol: "₹",
        minor_digits: 2,
    },
    CurrencyInfo {
        code: "CHF",
        local_symbol: "CHF",
        symbol: "CHF",
        minor_digits: 2,
    },
    CurrencyInfo {
        code: "JPY",
        local_symbol: "￥",
        symbol: "¥",
        minor_digits: 0,
    },
    CurrencyInfo {
        code: "KRW",
        local_symbol: "₩",
        symbol: "₩",
        minor_digits: 0,
    },
];

/// The engine shipped with the crate.
///
/// Supports `en-US`, `en-GB`, `en-AU`, `en-CA`, `de-DE`, `fr-FR` and
/// `ja-JP`. Locale tags match case-insensitively and accept `_` in place
/// of `-`.
///
/// # Example
///
/// ```
/// use payroll_calc::format::{BuiltinLocaleEngine, LocaleEngine};
///
/// let engine = BuiltinLocaleEngine;
/// assert_eq!(engine.currency(1234.5, "en-US", "USD").unwrap(), "$1,234.50");
/// assert!(engine.currency(1234.5, "xx-XX", "USD").is_err());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinLocaleEngine;

impl BuiltinLocaleEngine {
    /// Returns true if the engine knows the given locale tag.
    pub fn supports_locale(locale: &str) -> bool {
        lookup_locale(locale).is_ok()
    }
}

impl LocaleEngine for BuiltinLocaleEngine {
    fn currency(
        &self,
        value: f64,
        locale: &str,
        currency_code: &str,
    ) -> Result<String, FormatError> {
        let conventions = lookup_locale(locale)?;
        let code = validate_currency_code(currency_code)?;
        let info = CURRENCIES.iter().find(|c| c.code == code);

        let minor_digits = info.map_or(2, |c| c.minor_digits);
        let rounded = round_digits(value, 2, minor_digits)?;
        let number = render_grouped(&rounded.digits, &conventions);
        let sign = rounded.sign();

        let symbol = match info {
            Some(c) if c.code == conventions.home_currency => c.local_symbol.to_string(),
            Some(c) => c.symbol.to_string(),
            None => code.clone(),
        };

        Ok(match conventions.symbol_position {
            SymbolPosition::Prefix => {
                let spacer = if symbol.ends_with(|ch: char| ch.is_ascii_alphabetic()) {
                    NBSP
                } else {
                    ""
                };
                format!("{sign}{symbol}{spacer}{number}")
            }
            SymbolPosition::Suffix => format!("{sign}{number}{NBSP}{symbol}"),
        })
    }

    fn decimal(
        &self,
        value: f64,
        max_fraction_digits: i64,
        locale: &str,
    ) -> Result<String, FormatError> {
        if !(0..=MAX_FRACTION_DIGITS).contains(&max_fraction_digits) {
            return Err(FormatError::FractionDigitsOutOfRange {
                digits: max_fraction_digits,
            });
        }
        let conventions = lookup_locale(locale)?;
        let rounded = round_digits(value, max_fraction_digits as u32, 0)?;
        let number = render_grouped(&rounded.digits, &conventions);
        Ok(format!("{}{number}", rounded.sign()))
    }
}

fn lookup_locale(locale: &str) -> Result<LocaleConventions, FormatError> {
    let wanted = locale.trim().replace('_', "-");
    LOCALES
        .iter()
        .find(|c| c.tag.eq_ignore_ascii_case(&wanted))
        .copied()
        .ok_or_else(|| FormatError::UnsupportedLocale {
            locale: locale.to_string(),
        })
}

fn validate_currency_code(code: &str) -> Result<String, FormatError> {
    if code.len() == 3 && code.chars().all(|c| c.is_ascii_alphabetic()) {
        Ok(code.to_ascii_uppercase())
    } else {
        Err(FormatError::InvalidCurrencyCode {
            code: code.to_string(),
        })
    }
}

/// A rounded value as plain ASCII digits of its magnitude, plus its sign.
struct RoundedDigits {
    negative: bool,
    digits: String,
}

impl RoundedDigits {
    fn sign(&self) -> &'static str {
        if self.negative { "-" } else { "" }
    }
}

/// Rounds to at most `max_digits` fraction digits, keeping at least
/// `min_digits`.
///
/// Magnitudes that `Decimal` cannot hold at the required scale are rendered
/// from the float itself. At that size an `f64` has no fractional part left
/// to round, so only the padding matters.
fn round_digits(
    value: f64,
    max_digits: u32,
    min_digits: u32,
) -> Result<RoundedDigits, FormatError> {
    if !value.is_finite() {
        return Err(FormatError::NonFiniteValue { value });
    }

    let rounded = Decimal::from_f64(value).and_then(|d| round_decimal(d, max_digits, min_digits));
    let digits = match rounded {
        Some(rounded) => rounded.abs().to_string(),
        None => format!("{:.*}", min_digits as usize, value.abs()),
    };
    // A value that rounds to zero carries no sign
    let negative = value.is_sign_negative() && digits.bytes().any(|b| matches!(b, b'1'..=b'9'));

    Ok(RoundedDigits { negative, digits })
}

/// Rounds half away from zero, strips trailing zeros down to `min_digits`.
///
/// Returns `None` when the 96-bit mantissa has no room for `min_digits`.
fn round_decimal(value: Decimal, max_digits: u32, min_digits: u32) -> Option<Decimal> {
    let mut rounded = value
        .round_dp_with_strategy(max_digits, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    if rounded.scale() < min_digits {
        rounded.rescale(min_digits);
    }
    (rounded.scale() >= min_digits).then_some(rounded)
}

/// Renders plain `digits[.fraction]` with locale group and decimal separators.
fn render_grouped(plain: &str, conventions: &LocaleConventions) -> String {
    let (int_part, frac_part) = match plain.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (plain, None),
    };

    let mut grouped = String::with_capacity(plain.len() * 2);
    let len = int_part.len();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push_str(conventions.group_separator);
        }
        grouped.push(ch);
    }

    if let Some(frac) = frac_part {
        grouped.push_str(conventions.decimal_separator);
        grouped.push_str(frac);
    }
    grouped
}
