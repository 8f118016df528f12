//! Application state for the payroll calculator API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::analytics::{AnalyticsSink, sink_from_config};
use crate::config::{ConfigLoader, SiteConfig};
use crate::format::NumberFormatter;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers: the
/// loaded site configuration, the formatter built from it, and the
/// analytics sink. Nothing in here is mutated after construction.
#[derive(Clone)]
pub struct AppState {
    config: Arc<SiteConfig>,
    formatter: Arc<NumberFormatter>,
    analytics: Arc<dyn AnalyticsSink>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(loader: ConfigLoader) -> Self {
        Self::from_config(loader.into_config())
    }

    /// Creates application state directly from a configuration.
    pub fn from_config(config: SiteConfig) -> Self {
        let analytics = sink_from_config(config.analytics());
        Self::with_analytics(config, analytics)
    }

    /// Creates application state with an explicit analytics sink.
    pub fn with_analytics(config: SiteConfig, analytics: Arc<dyn AnalyticsSink>) -> Self {
        let formatter = config.formatter();
        Self {
            config: Arc::new(config),
            formatter: Arc::new(formatter),
            analytics,
        }
    }

    /// Returns the site configuration.
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Returns the shared number formatter.
    pub fn formatter(&self) -> &NumberFormatter {
        &self.formatter
    }

    /// Returns the analytics sink.
    pub fn analytics(&self) -> &dyn AnalyticsSink {
        self.analytics.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        // axum state must be Clone
        fn assert_clone<T: Clone + Send + Sync>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_default_state_disables_analytics() {
        let state = AppState::from_config(SiteConfig::default());
        assert!(!state.analytics().is_enabled());
        assert_eq!(state.formatter().locale(), "en-US");
    }
}
