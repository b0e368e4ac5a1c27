//! HTTP request handlers for the Working Time Engine API.
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
use tracing::{info, warn};
use uuid::Uuid;

use crate::report::ComplianceReporter;

use super::request::{CheckRequest, ReportRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/compliance/check", post(check_handler))
        .route("/compliance/report", post(report_handler))
        .with_state(state)
}

/// Handler for POST /compliance/check endpoint.
///
/// Evaluates one worker's entries over the requested period.
async fn check_handler(
    State(state): State<AppState>,
    payload: Result<Json<CheckRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing compliance check request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let start_time = Instant::now();
    match state.engine().evaluate(
        &request.entries,
        request.holiday_group.as_ref(),
        request.period_start,
        request.period_end,
    ) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                entries = request.entries.len(),
                workdays = result.workdays,
                average = result.average,
                compliance = result.compliance,
                duration_us = start_time.elapsed().as_micros(),
                "Compliance check completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(result),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Compliance check failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for POST /compliance/report endpoint.
///
/// Builds a report page for the submitted workers.
async fn report_handler(
    State(state): State<AppState>,
    payload: Result<Json<ReportRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing compliance report request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let now = request.now.unwrap_or_else(|| Utc::now().fixed_offset());
    let query = request.query.clone();
    let (workers, source) = request.into_workers_and_source();

    let start_time = Instant::now();
    match ComplianceReporter::new(state.engine(), &source).build(&workers, &query, now) {
        Ok(page) => {
            info!(
                correlation_id = %correlation_id,
                workers = workers.len(),
                total_rows = page.total_rows,
                duration_us = start_time.elapsed().as_micros(),
                "Compliance report completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(page),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Compliance report failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Turns a JSON extraction failure into a 400 response.
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
                ApiError::validation_error(body_text)
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

    ApiErrorResponse::bad_request(error).into_response()
}
