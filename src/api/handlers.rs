//! HTTP request handlers for the payroll calculator API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::Value;
use tracing::{info, warn};
use uuid::Uuid;

use crate::analytics::AnalyticsEvent;
use crate::calculation::{CalculatorInput, calculate};
use crate::models::CalculatorKind;

use super::response::{ApiError, ApiErrorResponse, CalculationResponse, CalculatorInfo};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculators", get(list_calculators_handler))
        .route("/calculate/:slug", post(calculate_handler))
        .with_state(state)
}

/// Handler for GET /calculators.
async fn list_calculators_handler() -> Json<Vec<CalculatorInfo>> {
    Json(CalculatorKind::ALL.into_iter().map(CalculatorInfo::from).collect())
}

/// Handler for POST /calculate/:slug.
///
/// Accepts a JSON object of raw form fields and returns the calculator's
/// result panel. Field values are never rejected; only an unknown slug or
/// a body that is not JSON at all produce an error.
async fn calculate_handler(
    Path(slug): Path<String>,
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, calculator = %slug, "Processing calculation request");

    let kind = match CalculatorKind::from_slug(&slug) {
        Ok(kind) => kind,
        Err(err) => {
            warn!(correlation_id = %correlation_id, calculator = %slug, "Unknown calculator");
            return ApiErrorResponse::from(err).into_response();
        }
    };

    let body = match payload {
        Ok(Json(body)) => body,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                other => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %other.body_text(),
                        "Request body rejected"
                    );
                    ApiError::malformed_json("Failed to parse request body")
                }
            };
            return ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error,
            }
            .into_response();
        }
    };

    let input = CalculatorInput::from_json(body);
    // Only fields the calculator reads are reported; other keys are ignored
    for field in kind.fields().iter().filter(|field| input.contains(field)) {
        state.analytics().track(&AnalyticsEvent::field_changed(kind, field));
    }

    let start_time = Instant::now();
    let result = calculate(kind, &input, state.config().defaults(), state.formatter());
    state.analytics().track(&AnalyticsEvent::calculator_used(kind));

    info!(
        correlation_id = %correlation_id,
        calculator = %kind.slug(),
        entries = result.entries.len(),
        duration_us = start_time.elapsed().as_micros(),
        "Calculation completed successfully"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(CalculationResponse::from(&result)),
    )
        .into_response()
}
