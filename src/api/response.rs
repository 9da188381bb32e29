//! Response types for the pricing API.
//!
//! This module defines the error response structures, the rate sheet body
//! and the mapping from [`PricingError`] to HTTP responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::config::{FacilityMetadata, OperatingWindow, PricingConfig, RateTable};
use crate::error::PricingError;

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

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
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

impl From<PricingError> for ApiErrorResponse {
    fn from(error: PricingError) -> Self {
        let status = if error.is_user_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        let details = match &error {
            PricingError::InvalidInput { .. } => "The request contains an invalid value",
            PricingError::FacilityClosedAtStart { .. } => {
                "Choose a start time within opening hours"
            }
            PricingError::BookingExceedsOperatingHours { .. } => {
                "Choose an end time no later than closing time"
            }
            PricingError::NoRateDefined { .. } | PricingError::InvalidRateTable { .. } => {
                "The rate table is misconfigured"
            }
            PricingError::ConfigNotFound { .. } | PricingError::ConfigParseError { .. } => {
                "The pricing configuration could not be loaded"
            }
        };

        ApiErrorResponse {
            status,
            error: ApiError::with_details(error.code(), error.to_string(), details),
        }
    }
}

/// Body of `GET /rates`: everything a price list needs.
#[derive(Debug, Clone, Serialize)]
pub struct RateSheet {
    /// Venue metadata.
    pub facility: FacilityMetadata,
    /// Opening hours.
    pub operating_window: OperatingWindow,
    /// Human-readable opening hours.
    pub opening_hours: String,
    /// Rate segments per classification.
    pub rates: RateTable,
}

impl From<&PricingConfig> for RateSheet {
    fn from(config: &PricingConfig) -> Self {
        Self {
            facility: config.facility().clone(),
            operating_window: *config.window(),
            opening_hours: config.window().describe(),
            rates: config.rates().clone(),
        }
    }
}
