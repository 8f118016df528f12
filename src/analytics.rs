//! Analytics events for calculator usage.
//!
//! Events are fire-and-forget: a sink can never fail or block a calculation.
//! The measurement id comes from configuration at construction time rather
//! than from the process environment.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use crate::config::AnalyticsConfig;
use crate::models::CalculatorKind;

/// A named analytics event with string parameters.
///
/// # Example
///
/// ```
/// use payroll_calc::analytics::AnalyticsEvent;
/// use payroll_calc::models::CalculatorKind;
///
/// let event = AnalyticsEvent::field_changed(CalculatorKind::OvertimePay, "hourly_rate");
/// assert_eq!(event.name, "calculator_field_changed");
/// assert_eq!(event.params["calculator"], "overtime-pay");
/// assert_eq!(event.params["field"], "hourly_rate");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyticsEvent {
    /// Event name.
    pub name: String,
    /// Event parameters, ordered by key.
    pub params: BTreeMap<String, String>,
}

impl AnalyticsEvent {
    /// Creates an event with no parameters.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: BTreeMap::new(),
        }
    }

    /// Adds a parameter, returning the event for chaining.
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// A calculator produced a result.
    pub fn calculator_used(kind: CalculatorKind) -> Self {
        Self::new("calculator_used").with_param("calculator", kind.slug())
    }

    /// The user edited a field of a calculator.
    pub fn field_changed(kind: CalculatorKind, field: &str) -> Self {
        Self::new("calculator_field_changed")
            .with_param("calculator", kind.slug())
            .with_param("field", field)
    }
}

/// Destination for analytics events.
pub trait AnalyticsSink: Send + Sync {
    /// Records an event. Must not block or fail.
    fn track(&self, event: &AnalyticsEvent);

    /// Whether events sent here go anywhere.
    fn is_enabled(&self) -> bool {
        true
    }
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl AnalyticsSink for NoopSink {
    fn track(&self, _event: &AnalyticsEvent) {}

    fn is_enabled(&self) -> bool {
        false
    }
}

/// Emits every event as a structured `tracing` record.
#[derive(Debug, Clone)]
pub struct TracingSink {
    measurement_id: String,
}

impl TracingSink {
    /// Creates a sink tagged with the given measurement id.
    pub fn new(measurement_id: impl Into<String>) -> Self {
        Self {
            measurement_id: measurement_id.into(),
        }
    }

    /// The measurement id events are tagged with.
    pub fn measurement_id(&self) -> &str {
        &self.measurement_id
    }
}

impl AnalyticsSink for TracingSink {
    fn track(&self, event: &AnalyticsEvent) {
        let params = serde_json::to_string(&event.params).unwrap_or_default();
        info!(
            target: "analytics",
            measurement_id = %self.measurement_id,
            event = %event.name,
            params = %params,
            "Analytics event"
        );
    }
}

/// Builds the sink described by configuration.
///
/// Tracking is only enabled when the config turns it on and provides a
/// non-blank measurement id; otherwise events are dropped.
pub fn sink_from_config(config: &AnalyticsConfig) -> Arc<dyn AnalyticsSink> {
    match config.measurement_id.as_deref().map(str::trim) {
        Some(id) if config.enabled && !id.is_empty() => Arc::new(TracingSink::new(id)),
        _ => Arc::new(NoopSink),
    }
}
