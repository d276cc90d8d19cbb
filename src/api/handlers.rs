//! HTTP request handlers for the mini-job engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::calculate_month;
use crate::error::EngineError;
use crate::ledger::MonthlyLedger;
use crate::models::{MonthlyInput, YearMonth};
use crate::tracking::evaluate_threshold_status;

use super::request::{CalculationRequest, LedgerSummaryRequest, ThresholdStatusRequest};
use super::response::{ApiError, ApiErrorResponse, CalculationResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/threshold/status", post(threshold_status_handler))
        .route("/ledger/summary", post(ledger_summary_handler))
        .with_state(state)
}

/// Handler for POST /calculate endpoint.
///
/// Validates one month's input and returns its pay breakdown.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let input: MonthlyInput = match payload {
        Ok(Json(req)) => req.into(),
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let start_time = Instant::now();
    match calculate_month(&input, state.config()) {
        Ok(calculation) => {
            info!(
                correlation_id = %correlation_id,
                base_gross = %calculation.result.base_gross,
                net = %calculation.result.net,
                exceeds_threshold = calculation.result.exceeds_threshold,
                duration_us = start_time.elapsed().as_micros(),
                "Calculation completed successfully"
            );
            let rounded = calculation.result.rounded();
            json_response(
                StatusCode::OK,
                CalculationResponse {
                    calculation_id: Uuid::new_v4(),
                    timestamp: Utc::now(),
                    engine_version: env!("CARGO_PKG_VERSION").to_string(),
                    result: calculation.result,
                    rounded,
                    audit_trace: calculation.audit_trace,
                },
            )
        }
        Err(err) => error_response(err, correlation_id, "Calculation rejected"),
    }
}

/// Handler for POST /threshold/status endpoint.
///
/// Classifies the given overage events over their rolling window.
async fn threshold_status_handler(
    payload: Result<Json<ThresholdStatusRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing threshold status request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let now = request
        .now
        .unwrap_or_else(|| YearMonth::from_date(Utc::now().date_naive()));
    let status = evaluate_threshold_status(&request.events, now);

    info!(
        correlation_id = %correlation_id,
        events = request.events.len(),
        state = ?status.state,
        "Threshold status evaluated"
    );
    json_response(StatusCode::OK, status)
}

/// Handler for POST /ledger/summary endpoint.
///
/// Builds a ledger from the listed months and summarizes the year.
async fn ledger_summary_handler(
    State(state): State<AppState>,
    payload: Result<Json<LedgerSummaryRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing ledger summary request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let config = state.config();
    let mut ledger = MonthlyLedger::new(config);
    for (month, req) in request.months {
        if let Err(err) = ledger.replace(month, req.into(), config) {
            return error_response(err, correlation_id, "Ledger month rejected");
        }
    }

    let summary = ledger.summarize(config);
    info!(
        correlation_id = %correlation_id,
        exceeding_months = summary.exceeding_months.len(),
        net = %summary.totals.net,
        "Ledger summary completed"
    );
    json_response(StatusCode::OK, summary)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(err: EngineError, correlation_id: Uuid, context: &str) -> Response {
    warn!(correlation_id = %correlation_id, error = %err, "{}", context);
    let api_error: ApiErrorResponse = err.into();
    json_response(api_error.status, api_error.error)
}

fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's detailed message
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::missing_field(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
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
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    json_response(StatusCode::BAD_REQUEST, error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use crate::ledger::YearlySummary;
    use crate::models::DeductionKind;
    use crate::tracking::{RollingWindowStatus, ThresholdState};
    use axum::body::Body;
    use axum::http::Request;
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use tower::ServiceExt;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_state() -> AppState {
        let config = ConfigLoader::load("./config/minijob_2025").expect("Failed to load config");
        AppState::new(config)
    }

    async fn post_json(uri: &str, body: impl Into<Body>) -> Response {
        create_router(create_test_state())
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(body.into())
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    async fn read_body<T: serde::de::DeserializeOwned>(response: Response) -> T {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_calculate_default_month_returns_200() {
        let response = post_json("/calculate", r#"{"hourly_wage": "12.82", "hours": "24"}"#).await;

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "application/json");

        let body: CalculationResponse = read_body(response).await;
        assert_eq!(body.result.base_gross, dec("307.68"));
        assert_eq!(body.result.deduction_kind, DeductionKind::PensionInsurance);
        assert_eq!(body.rounded.net, dec("296.60"));
        assert_eq!(body.audit_trace.steps.len(), 4);
        assert_eq!(body.engine_version, env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_calculate_over_threshold_applies_flat_rate() {
        let response = post_json("/calculate", r#"{"hourly_wage": 20, "hours": 30}"#).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body: CalculationResponse = read_body(response).await;
        assert!(body.result.exceeds_threshold);
        assert_eq!(body.result.deduction_kind, DeductionKind::FlatRate);
        assert_eq!(body.result.net, dec("420"));
        assert_eq!(body.audit_trace.warnings[0].code, "THRESHOLD_EXCEEDED");
    }

    #[tokio::test]
    async fn test_calculate_below_minimum_wage_returns_400() {
        let response = post_json("/calculate", r#"{"hourly_wage": "10.00", "hours": "24"}"#).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = read_body(response).await;
        assert_eq!(error.code, "INVALID_INPUT");
        assert_eq!(error.details.as_deref(), Some("hourly_wage"));
    }

    #[tokio::test]
    async fn test_calculate_largest_decimal_wage_returns_400() {
        let body = format!(r#"{{"hourly_wage": "{}", "hours": "40"}}"#, Decimal::MAX);
        let response = post_json("/calculate", body).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = read_body(response).await;
        assert_eq!(error.code, "INVALID_INPUT");
        assert_eq!(error.details.as_deref(), Some("hourly_wage"));
    }

    #[tokio::test]
    async fn test_calculate_malformed_json_returns_400() {
        let response = post_json("/calculate", "{invalid json").await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = read_body(response).await;
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_calculate_missing_field_returns_400() {
        let response = post_json("/calculate", r#"{"hours": "24"}"#).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = read_body(response).await;
        assert_eq!(error.code, "MISSING_FIELD");
        assert!(error.message.contains("hourly_wage"));
    }

    #[tokio::test]
    async fn test_threshold_status_three_events_exceeded() {
        let body = r#"{
            "events": [
                {"year": 2025, "month_index": 5},
                {"year": 2025, "month_index": 0},
                {"year": 2025, "month_index": 9}
            ],
            "now": {"year": 2025, "month_index": 10}
        }"#;
        let response = post_json("/threshold/status", body).await;

        assert_eq!(response.status(), StatusCode::OK);
        let status: RollingWindowStatus = read_body(response).await;
        assert_eq!(status.state, ThresholdState::Exceeded);
        assert_eq!(status.events_in_window, 3);
    }

    #[tokio::test]
    async fn test_threshold_status_without_events_is_clear() {
        let response = post_json("/threshold/status", r#"{"events": []}"#).await;

        assert_eq!(response.status(), StatusCode::OK);
        let status: RollingWindowStatus = read_body(response).await;
        assert_eq!(status.state, ThresholdState::Clear);
        assert_eq!(status.remaining_tolerance, 2);
    }

    #[tokio::test]
    async fn test_threshold_status_year_out_of_range_returns_400() {
        let body = r#"{"events": [{"year": 2147483647, "month_index": 11}]}"#;
        let response = post_json("/threshold/status", body).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = read_body(response).await;
        assert_eq!(error.code, "MALFORMED_JSON");
        assert!(error.message.contains("year"));
    }

    #[tokio::test]
    async fn test_ledger_summary_fills_unlisted_months_with_defaults() {
        let body = r#"{"months": {"july": {"hourly_wage": "20.00", "hours": "30"}}}"#;
        let response = post_json("/ledger/summary", body).await;

        assert_eq!(response.status(), StatusCode::OK);
        let summary: YearlySummary = read_body(response).await;
        assert_eq!(summary.months.len(), 12);
        assert_eq!(summary.exceeding_months, vec![crate::models::Month::July]);
        // 11 × 307.68 + 600
        assert_eq!(summary.totals.base_gross, dec("3984.48"));
    }

    #[tokio::test]
    async fn test_ledger_summary_rejects_invalid_month() {
        let body = r#"{"months": {"may": {"hourly_wage": "12.82", "hours": "41"}}}"#;
        let response = post_json("/ledger/summary", body).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = read_body(response).await;
        assert_eq!(error.code, "INVALID_INPUT");
    }
}
