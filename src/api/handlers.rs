//! HTTP request handlers for the pricing API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{compute_cost, compute_playtime};
use crate::models::{BookingRequest, BudgetRequest};

use super::request::{CostRequest, PlaytimeRequest};
use super::response::{ApiError, ApiErrorResponse, RateSheet};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/cost", post(cost_handler))
        .route("/playtime", post(playtime_handler))
        .route("/rates", get(rates_handler))
        .with_state(state)
}

/// Handler for POST /cost.
///
/// Prices a fixed start/end booking.
async fn cost_handler(
    State(state): State<AppState>,
    payload: Result<Json<CostRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing cost request");

    let request: BookingRequest = match payload {
        Ok(Json(req)) => req.into(),
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let started = Instant::now();
    let result = compute_cost(state.config(), &request);

    match result.into_result() {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                day_of_week = request.day_of_week,
                total_cost = %result.total_cost,
                segments = result.lines.len(),
                duration_us = started.elapsed().as_micros(),
                "Cost calculated"
            );
            json_response(StatusCode::OK, result)
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Cost calculation failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for POST /playtime.
///
/// Converts a budget into playing time.
async fn playtime_handler(
    State(state): State<AppState>,
    payload: Result<Json<PlaytimeRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing playtime request");

    let request: BudgetRequest = match payload {
        Ok(Json(req)) => req.into(),
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let started = Instant::now();
    let result = compute_playtime(state.config(), &request);

    match result.into_result() {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                budget = %request.budget,
                play_minutes = result.total_play_minutes,
                duration_us = started.elapsed().as_micros(),
                "Playtime calculated"
            );
            json_response(StatusCode::OK, result)
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Playtime calculation failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for GET /rates.
async fn rates_handler(State(state): State<AppState>) -> Response {
    json_response(StatusCode::OK, RateSheet::from(state.config()))
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Maps a JSON extraction failure to a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
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

    json_response(StatusCode::BAD_REQUEST, error)
}
