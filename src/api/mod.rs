//! HTTP API module for the pricing engine.
//!
//! This module provides the REST endpoints for pricing bookings, turning
//! budgets into playing time and publishing the active rate sheet.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CostRequest, PlaytimeRequest};
pub use response::{ApiError, ApiErrorResponse, RateSheet};
pub use state::AppState;
