//! Response types for the payroll calculator API.
//!
//! This module defines the success payloads and the error response
//! structures for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{CalculatorKind, CalculatorResult, ResultEntry, ResultValue};

/// One calculator as listed by `GET /calculators`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorInfo {
    /// URL slug used with `POST /calculate/:slug`.
    pub slug: String,
    /// Page title.
    pub title: String,
    /// Short description.
    pub description: String,
}

impl From<CalculatorKind> for CalculatorInfo {
    fn from(kind: CalculatorKind) -> Self {
        Self {
            slug: kind.slug().to_string(),
            title: kind.title().to_string(),
            description: kind.description().to_string(),
        }
    }
}

/// A result slot as returned to clients.
///
/// Carries both the raw value and its display string so clients never have
/// to reimplement the fallback glyph rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryView {
    /// Label shown next to the value.
    pub label: String,
    /// The value itself; `null` when missing.
    pub value: ResultValue,
    /// The value as it should be displayed.
    pub display: String,
}

impl From<&ResultEntry> for EntryView {
    fn from(entry: &ResultEntry) -> Self {
        Self {
            label: entry.label.clone(),
            value: entry.value.clone(),
            display: entry.value.display(),
        }
    }
}

/// Response body for `POST /calculate/:slug`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResponse {
    /// The calculator that ran.
    pub calculator: CalculatorKind,
    /// Result slots in display order.
    pub entries: Vec<EntryView>,
    /// Plain-text summary for copying.
    pub summary: String,
}

impl From<&CalculatorResult> for CalculationResponse {
    fn from(result: &CalculatorResult) -> Self {
        Self {
            calculator: result.calculator,
            entries: result.entries.iter().map(EntryView::from).collect(),
            summary: result.summary(),
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates an unknown calculator error response.
    pub fn unknown_calculator(slug: &str) -> Self {
        let available: Vec<&str> = CalculatorKind::ALL.iter().map(|kind| kind.slug()).collect();
        Self::with_details(
            "UNKNOWN_CALCULATOR",
            format!("Unknown calculator: {}", slug),
            format!("Available calculators: {}", available.join(", ")),
        )
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::UnknownCalculator { slug } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::unknown_calculator(&slug),
            },
            // Remaining variants are all configuration failures
            other => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    other.to_string(),
                ),
            },
        }
    }
}
