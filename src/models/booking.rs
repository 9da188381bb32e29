//! Booking and budget request models.
//!
//! Requests carry the raw values a booking form produces: an integer day of
//! week (0 = Sunday .. 6 = Saturday), `"HH:MM"` 24-hour clock strings and a
//! membership flag. Parsing and range checks happen in the calculators so
//! that bad input comes back as an error result rather than a panic.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A fixed start/end table booking to be priced.
///
/// An `end_time` at or before `start_time` means the booking runs past
/// midnight into the next calendar day.
///
/// # Example
///
/// ```
/// use cue_rates::models::BookingRequest;
///
/// let booking = BookingRequest {
///     day_of_week: 5,
///     start_time: "22:00".to_string(),
///     end_time: "01:00".to_string(),
///     is_member: true,
/// };
/// assert_eq!(booking.day_of_week, 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
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

/// A fixed budget to be turned into playing time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetRequest {
    /// Amount of money available. Must be positive.
    pub budget: Decimal,
    /// Day of week play starts on, 0 = Sunday .. 6 = Saturday.
    pub day_of_week: i32,
    /// Start time as `"HH:MM"`.
    pub start_time: String,
    /// Whether member pricing applies.
    #[serde(default)]
    pub is_member: bool,
}
