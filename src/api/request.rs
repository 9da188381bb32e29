//! Request types for the pricing API.
//!
//! This module defines the JSON request bodies for the `/cost` and
//! `/playtime` endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{BookingRequest, BudgetRequest};

/// Request body for the `/cost` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostRequest {
    /// Day of week the booking starts on, 0 = Sunday .. 6 = Saturday.
    pub day_of_week: i32,
    /// Start time as `"HH:MM"`.
    pub start_time: String,
    /// End time as `"HH:MM"`.
    pub end_time: String,
    /// Whether member pricing applies.
    #[serde(default)]
    pub is_member: bool,
}

/// Request body for the `/playtime` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaytimeRequest {
    /// Amount of money available.
    pub budget: Decimal,
    /// Day of week play starts on, 0 = Sunday .. 6 = Saturday.
    pub day_of_week: i32,
    /// Start time as `"HH:MM"`.
    pub start_time: String,
    /// Whether member pricing applies.
    #[serde(default)]
    pub is_member: bool,
}

impl From<CostRequest> for BookingRequest {
    fn from(req: CostRequest) -> Self {
        BookingRequest {
            day_of_week: req.day_of_week,
            start_time: req.start_time,
            end_time: req.end_time,
            is_member: req.is_member,
        }
    }
}

impl From<PlaytimeRequest> for BudgetRequest {
    fn from(req: PlaytimeRequest) -> Self {
        BudgetRequest {
            budget: req.budget,
            day_of_week: req.day_of_week,
            start_time: req.start_time,
            is_member: req.is_member,
        }
    }
}
