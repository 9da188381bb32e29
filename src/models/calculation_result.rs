//! Calculation result models for the pricing engine.
//!
//! This module contains [`CostResult`] and [`PlaytimeResult`], the plain-data
//! values returned by the cost calculator and the budget simulator. Both carry
//! an optional [`PricingError`] instead of failing, so that UI code can read
//! `error` directly and interpolate the remaining fields into display strings.

use chrono::NaiveDateTime;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::error::{PricingError, PricingResult};

use super::DayClassification;

/// Rounds a value to two decimal places for display.
///
/// Midpoints round away from zero, and the result always carries exactly two
/// decimal places (`86.4` becomes `86.40`).
///
/// # Example
///
/// ```
/// use cue_rates::models::round_money;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let rounded = round_money(Decimal::from_str("23.605").unwrap());
/// assert_eq!(rounded.to_string(), "23.61");
/// ```
pub fn round_money(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

/// One rate segment walked by a booking.
///
/// # Example
///
/// ```
/// use cue_rates::models::{DayClassification, RateLine};
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let line = RateLine {
///     start: NaiveDateTime::parse_from_str("2026-01-19 10:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     end: NaiveDateTime::parse_from_str("2026-01-19 18:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     classification: DayClassification::Weekday,
///     minutes: 480,
///     rate: Decimal::from_str("10.80").unwrap(),
///     amount: Decimal::from_str("86.40").unwrap(),
/// };
/// assert_eq!(line.minutes, 480);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RateLine {
    /// Start of the segment on the reference calendar.
    pub start: NaiveDateTime,
    /// End of the segment (exclusive).
    pub end: NaiveDateTime,
    /// Classification of the calendar day the segment falls on.
    pub classification: DayClassification,
    /// Length of the segment in whole minutes.
    pub minutes: i64,
    /// Hourly rate applied to the segment.
    pub rate: Decimal,
    /// Cost of the segment, rounded for display.
    pub amount: Decimal,
}

/// The result of pricing a fixed start/end booking.
///
/// On failure `error` is set, `total_cost` and `average_rate` are zero and
/// `lines` is empty. `total_duration_hours` still reports the requested length
/// whenever both times parsed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostResult {
    /// Total price of the booking.
    pub total_cost: Decimal,
    /// Effective hourly rate (`total_cost / total_duration_hours`).
    pub average_rate: Decimal,
    /// Length of the booking in hours.
    pub total_duration_hours: Decimal,
    /// Per-segment breakdown, in chronological order.
    pub lines: Vec<RateLine>,
    /// Why the booking could not be priced, if it could not.
    pub error: Option<PricingError>,
}

impl CostResult {
    /// Builds a failed result.
    pub fn failed(error: PricingError, total_duration_hours: Decimal) -> Self {
        Self {
            total_cost: round_money(Decimal::ZERO),
            average_rate: round_money(Decimal::ZERO),
            total_duration_hours: round_money(total_duration_hours),
            lines: Vec::new(),
            error: Some(error),
        }
    }

    /// Converts the result into a `Result`, moving any error out.
    pub fn into_result(mut self) -> PricingResult<Self> {
        match self.error.take() {
            Some(error) => Err(error),
            None => Ok(self),
        }
    }
}

/// The result of turning a budget into playing time.
///
/// On failure `error` is set and every duration is zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaytimeResult {
    /// Playable minutes rounded to the nearest whole minute.
    pub total_play_minutes: i64,
    /// Playable minutes before rounding.
    pub exact_play_minutes: Decimal,
    /// Display string such as `"1 hour(s) and 42 minute(s)"`.
    pub formatted_duration: String,
    /// Money consumed by the simulated play.
    pub budget_spent: Decimal,
    /// Money left over when play had to stop (closing time or iteration cap).
    pub remaining_budget: Decimal,
    /// Clock time (`"HH:MM"`) at which play ends.
    pub ends_at: Option<String>,
    /// Why the budget could not be simulated, if it could not.
    pub error: Option<PricingError>,
}

impl PlaytimeResult {
    /// Builds a failed result.
    pub fn failed(error: PricingError) -> Self {
        Self {
            total_play_minutes: 0,
            exact_play_minutes: Decimal::ZERO,
            formatted_duration: "0 minutes".to_string(),
            budget_spent: round_money(Decimal::ZERO),
            remaining_budget: round_money(Decimal::ZERO),
            ends_at: None,
            error: Some(error),
        }
    }

    /// Converts the result into a `Result`, moving any error out.
    pub fn into_result(mut self) -> PricingResult<Self> {
        match self.error.take() {
            Some(error) => Err(error),
            None => Ok(self),
        }
    }
}
