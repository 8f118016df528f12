//! Numeric normalization of raw form input.
//!
//! Every calculator reads its fields through [`normalize`], so blank or
//! garbage fields degrade to zero-valued results instead of failing. The
//! functions here are total: they never return an error.

use crate::models::RawInput;

/// Coerces arbitrary input into a finite number.
///
/// - Numbers are returned unchanged when finite, otherwise `0`.
/// - Text is trimmed and its longest leading decimal prefix is parsed, so
///   `"12.5abc"` becomes `12.5`. Text with no numeric prefix, or whose
///   prefix overflows, becomes `0`.
/// - Booleans, missing values and anything else become `0`.
///
/// # Examples
///
/// ```
/// use payroll_calc::normalize::normalize;
///
/// assert_eq!(normalize("12.5abc"), 12.5);
/// assert_eq!(normalize("  40 "), 40.0);
/// assert_eq!(normalize(""), 0.0);
/// assert_eq!(normalize(f64::NAN), 0.0);
/// assert_eq!(normalize(None::<f64>), 0.0);
/// ```
pub fn normalize(input: impl Into<RawInput>) -> f64 {
    match input.into() {
        RawInput::Number(n) => finite_or_zero(n),
        RawInput::Text(text) => parse_leading_number(&text).map_or(0.0, finite_or_zero),
        RawInput::Bool(_) | RawInput::Missing | RawInput::Other => 0.0,
    }
}

/// Normalizes and clamps negative values to zero.
///
/// ```
/// use payroll_calc::normalize::normalize_non_negative;
///
/// assert_eq!(normalize_non_negative("-5"), 0.0);
/// assert_eq!(normalize_non_negative("5"), 5.0);
/// ```
pub fn normalize_non_negative(input: impl Into<RawInput>) -> f64 {
    normalize(input).max(0.0)
}

/// Normalizes and substitutes `default` for anything that is not positive.
///
/// ```
/// use payroll_calc::normalize::normalize_positive_or;
///
/// assert_eq!(normalize_positive_or("", 40.0), 40.0);
/// assert_eq!(normalize_positive_or("-3", 40.0), 40.0);
/// assert_eq!(normalize_positive_or("37.5", 40.0), 37.5);
/// ```
pub fn normalize_positive_or(input: impl Into<RawInput>, default: f64) -> f64 {
    let value = normalize(input);
    if value > 0.0 { value } else { default }
}

fn finite_or_zero(n: f64) -> f64 {
    if n.is_finite() { n } else { 0.0 }
}

/// Parses the longest leading decimal number in `text`.
///
/// Accepts an optional sign, digits with an optional fractional part, and an
/// optional exponent. The exponent is only consumed when at least one digit
/// follows it. Returns `None` when there is no mantissa digit.
fn parse_leading_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    let prefix = leading_number_prefix(trimmed)?;
    prefix.parse::<f64>().ok()
}

fn leading_number_prefix(text: &str) -> Option<&str> {
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        // A bare "." with no digits on either side is not a number
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    // Every consumed byte is ASCII, so `end` is a char boundary
    Some(&text[..end])
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
