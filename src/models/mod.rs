//! Core data models for the pricing engine.
//!
//! This module contains the request, classification and result types shared
//! by the calculators and the HTTP layer.

mod booking;
mod calculation_result;
mod day_classification;

pub use booking::{BookingRequest, BudgetRequest};
pub use calculation_result::{CostResult, PlaytimeResult, RateLine, round_money};
pub use day_classification::DayClassification;
