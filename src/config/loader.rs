//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading site
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use tracing::warn;

use crate::calculation::CalculatorDefaults;
use crate::error::{EngineError, EngineResult};
use crate::format::BuiltinLocaleEngine;

use super::types::{CalculatorsFile, SiteConfig, SiteFile};

/// Loads and provides access to site configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── site.yaml         # Site metadata, formatting and analytics
/// └── calculators.yaml  # Calculator defaults
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_calc::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Loaded site: {}", loader.config().site().name);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: SiteConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if a file is missing, is not valid YAML, or holds a
    /// value the calculators cannot use (a blank locale or a non-positive
    /// default).
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let site = Self::load_yaml::<SiteFile>(&path.join("site.yaml"))?;
        let calculators = Self::load_yaml::<CalculatorsFile>(&path.join("calculators.yaml"))?;

        let config = SiteConfig::new(
            site.site,
            site.formatting,
            site.analytics,
            calculators.defaults,
        );
        Self::validate(&config)?;

        if !BuiltinLocaleEngine::supports_locale(&config.formatting().locale) {
            warn!(
                locale = %config.formatting().locale,
                "Configured locale is not supported; output will use the fixed fallback format"
            );
        }

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn validate(config: &SiteConfig) -> EngineResult<()> {
        if config.formatting().locale.trim().is_empty() {
            return Err(EngineError::InvalidConfig {
                field: "formatting.locale".to_string(),
                message: "must not be blank".to_string(),
            });
        }
        if config.formatting().currency.trim().is_empty() {
            return Err(EngineError::InvalidConfig {
                field: "formatting.currency".to_string(),
                message: "must not be blank".to_string(),
            });
        }

        let CalculatorDefaults {
            hours_per_week,
            weeks_per_year,
            overtime_threshold,
            overtime_multiplier,
        } = *config.defaults();
        for (field, value) in [
            ("defaults.hours_per_week", hours_per_week),
            ("defaults.weeks_per_year", weeks_per_year),
            ("defaults.overtime_threshold", overtime_threshold),
            ("defaults.overtime_multiplier", overtime_multiplier),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(EngineError::InvalidConfig {
                    field: field.to_string(),
                    message: format!("must be a positive number, got {}", value),
                });
            }
        }
        Ok(())
    }

    /// Returns the underlying site configuration.
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> SiteConfig {
        self.config
    }
}
