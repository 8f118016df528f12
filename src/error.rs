//! Error types for the payroll calculator engine.
//!
//! The calculation core itself never fails: unusable input normalizes to zero
//! and formatting falls back to a fixed pattern. The errors in this module
//! cover the surrounding plumbing (configuration loading, calculator lookup)
//! and the locale engine whose failures the formatter absorbs.

use thiserror::Error;

/// The main error type for the engine's configuration and routing layers.
///
/// # Example
///
/// ```
/// use payroll_calc::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/site.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/site.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but holds a value the engine cannot use.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The offending field.
        field: String,
        /// What is wrong with it.
        message: String,
    },

    /// No calculator is registered under the requested slug.
    #[error("Unknown calculator: {slug}")]
    UnknownCalculator {
        /// The slug that was requested.
        slug: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

/// Failures of the locale-aware formatting engine.
///
/// These never reach callers of the formatter; they select the fixed-pattern
/// fallback instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    /// The locale tag is not known to the engine.
    #[error("Unsupported locale: {locale}")]
    UnsupportedLocale {
        /// The requested locale tag.
        locale: String,
    },

    /// The currency code is not a three-letter ISO 4217 style code.
    #[error("Invalid currency code: {code}")]
    InvalidCurrencyCode {
        /// The requested code.
        code: String,
    },

    /// The requested number of fraction digits is outside 0..=20.
    #[error("Fraction digits out of range: {digits}")]
    FractionDigitsOutOfRange {
        /// The requested digit count.
        digits: i64,
    },

    /// The value is NaN or infinite.
    #[error("Value is not a finite number: {value}")]
    NonFiniteValue {
        /// The value that was rejected.
        value: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/site.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/site.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_config_displays_field_and_message() {
        let error = EngineError::InvalidConfig {
            field: "defaults.hours_per_week".to_string(),
            message: "must be greater than zero".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid configuration field 'defaults.hours_per_week': must be greater than zero"
        );
    }

    #[test]
    fn test_unknown_calculator_displays_slug() {
        let error = EngineError::UnknownCalculator {
            slug: "mortgage".to_string(),
        };
        assert_eq!(error.to_string(), "Unknown calculator: mortgage");
    }

    #[test]
    fn test_format_errors_display() {
        assert_eq!(
            FormatError::UnsupportedLocale {
                locale: "xx-YY".to_string()
            }
            .to_string(),
            "Unsupported locale: xx-YY"
        );
        assert_eq!(
            FormatError::FractionDigitsOutOfRange { digits: 40 }.to_string(),
            "Fraction digits out of range: 40"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
        assert_error::<FormatError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_config_not_found() -> EngineResult<()> {
            Err(EngineError::ConfigNotFound {
                path: "/test".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_config_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
