//! Configuration types for the calculator site.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::Deserialize;

use crate::calculation::CalculatorDefaults;
use crate::format::{DEFAULT_CURRENCY, DEFAULT_LOCALE, NumberFormatter};

/// Identifying information about the site.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SiteMetadata {
    /// Human-readable site name.
    pub name: String,
    /// Canonical base URL.
    pub url: String,
}

impl Default for SiteMetadata {
    fn default() -> Self {
        Self {
            name: "Payroll Calculators".to_string(),
            url: "http://localhost:3000".to_string(),
        }
    }
}

/// Locale and currency used for all formatted output.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FormattingConfig {
    /// BCP 47 locale tag, e.g. `"en-US"`.
    pub locale: String,
    /// ISO 4217 currency code, e.g. `"USD"`.
    pub currency: String,
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE.to_string(),
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

/// Analytics settings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Whether events are recorded at all.
    pub enabled: bool,
    /// Measurement id events are tagged with.
    pub measurement_id: Option<String>,
}

/// Structure of `site.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteFile {
    /// Site metadata.
    pub site: SiteMetadata,
    /// Formatting settings.
    #[serde(default)]
    pub formatting: FormattingConfig,
    /// Analytics settings.
    #[serde(default)]
    pub analytics: AnalyticsConfig,
}

/// Structure of `calculators.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct CalculatorsFile {
    /// Values substituted for blank calculator fields.
    #[serde(default)]
    pub defaults: CalculatorDefaults,
}

/// The complete site configuration.
///
/// Everything the engine needs from its environment is held here and passed
/// down explicitly; nothing reads process-wide settings.
///
/// # Example
///
/// ```
/// use payroll_calc::config::SiteConfig;
///
/// let config = SiteConfig::default();
/// assert_eq!(config.formatting().locale, "en-US");
/// assert_eq!(config.defaults().overtime_threshold, 40.0);
/// assert!(!config.analytics().enabled);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SiteConfig {
    metadata: SiteMetadata,
    formatting: FormattingConfig,
    analytics: AnalyticsConfig,
    defaults: CalculatorDefaults,
}

impl SiteConfig {
    /// Creates a SiteConfig from its component parts.
    pub fn new(
        metadata: SiteMetadata,
        formatting: FormattingConfig,
        analytics: AnalyticsConfig,
        defaults: CalculatorDefaults,
    ) -> Self {
        Self {
            metadata,
            formatting,
            analytics,
            defaults,
        }
    }

    /// Returns the site metadata.
    pub fn site(&self) -> &SiteMetadata {
        &self.metadata
    }

    /// Returns the formatting settings.
    pub fn formatting(&self) -> &FormattingConfig {
        &self.formatting
    }

    /// Returns the analytics settings.
    pub fn analytics(&self) -> &AnalyticsConfig {
        &self.analytics
    }

    /// Returns the calculator defaults.
    pub fn defaults(&self) -> &CalculatorDefaults {
        &self.defaults
    }

    /// Builds a formatter for the configured locale and currency.
    pub fn formatter(&self) -> NumberFormatter {
        NumberFormatter::new(&self.formatting.locale, &self.formatting.currency)
    }
}
