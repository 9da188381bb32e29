//! Booking cost calculation.
//!
//! This module prices a fixed start/end booking by walking it across rate
//! segment boundaries, including bookings that run past midnight into the
//! next day's overnight segment.

use chrono::{Duration, NaiveDateTime, Timelike};
use rust_decimal::Decimal;
use tracing::debug;

use crate::config::PricingConfig;
use crate::error::{PricingError, PricingResult};
use crate::models::{BookingRequest, CostResult, RateLine, round_money};

use super::calendar::{anchor, format_clock, parse_clock_time, weekday_from_index};
use super::rate_resolver::RateResolver;

const MINUTES_PER_HOUR: Decimal = Decimal::from_parts(60, 0, 0, false, 0);

/// A booking placed on the reference calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BookingSpan {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl BookingSpan {
    fn minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}

/// A walked segment before display rounding.
struct WalkedSegment {
    line: RateLine,
    exact_amount: Decimal,
}

/// Prices a booking.
///
/// The booking is anchored on the reference calendar; an end time at or
/// before the start time moves to the next day. Each rate segment the booking
/// touches is charged `rate / 60` per whole minute, and totals are rounded to
/// two decimal places only once the walk is complete.
///
/// Failures are returned in [`CostResult::error`]:
/// - `InvalidInput` for a bad day index or time string
/// - `FacilityClosedAtStart` when the start lies in the closed window
/// - `BookingExceedsOperatingHours` when the booking runs into closing time
/// - `NoRateDefined` when an open hour has no rate segment
///
/// # Examples
///
/// ```
/// use cue_rates::calculation::compute_cost;
/// use cue_rates::config::PricingConfig;
/// use cue_rates::models::BookingRequest;
///
/// let config = PricingConfig::standard();
/// let booking = BookingRequest {
///     day_of_week: 1,
///     start_time: "10:00".to_string(),
///     end_time: "18:00".to_string(),
///     is_member: false,
/// };
///
/// let result = compute_cost(&config, &booking);
/// assert!(result.error.is_none());
/// assert_eq!(result.total_cost.to_string(), "86.40");
/// assert_eq!(result.total_duration_hours.to_string(), "8.00");
/// ```
pub fn compute_cost(config: &PricingConfig, request: &BookingRequest) -> CostResult {
    let resolver = RateResolver::new(config);

    let span = match booking_span(&resolver, request) {
        Ok(span) => span,
        Err(error) => {
            debug!(error = %error, "Booking rejected before pricing");
            return CostResult::failed(error, Decimal::ZERO);
        }
    };
    let duration_hours = Decimal::from(span.minutes()) / MINUTES_PER_HOUR;

    match walk_segments(&resolver, span, request.is_member) {
        Ok(segments) => build_result(segments, span),
        Err(error) => {
            debug!(error = %error, "Booking could not be priced");
            CostResult::failed(error, duration_hours)
        }
    }
}

/// Parses and anchors the request, rejecting starts in the closed window.
fn booking_span(resolver: &RateResolver<'_>, request: &BookingRequest) -> PricingResult<BookingSpan> {
    let weekday = weekday_from_index(request.day_of_week)?;
    let start_time = parse_clock_time("start_time", &request.start_time)?;
    let end_time = parse_clock_time("end_time", &request.end_time)?;

    if !resolver.is_open_at(start_time.hour(), start_time.minute()) {
        return Err(PricingError::FacilityClosedAtStart {
            time: request.start_time.clone(),
            window: resolver.window().describe(),
        });
    }

    let start = anchor(weekday, start_time);
    let mut end = anchor(weekday, end_time);
    if end <= start {
        end += Duration::days(1);
    }

    Ok(BookingSpan { start, end })
}

/// Walks the booking segment by segment.
fn walk_segments(
    resolver: &RateResolver<'_>,
    span: BookingSpan,
    is_member: bool,
) -> PricingResult<Vec<WalkedSegment>> {
    let mut segments = Vec::new();
    let mut current = span.start;

    while current < span.end {
        let active = resolver
            .rate_at(current, is_member)
            .ok_or_else(|| resolver.missing_rate_error(current))?;

        let segment_end = active.ends_at.min(span.end);
        let minutes = (segment_end - current).num_minutes();
        let exact_amount = active.rate * Decimal::from(minutes) / MINUTES_PER_HOUR;

        debug!(
            start = %format_clock(current),
            end = %format_clock(segment_end),
            classification = %active.classification,
            rate = %active.rate,
            minutes,
            "Priced booking segment"
        );

        segments.push(WalkedSegment {
            line: RateLine {
                start: current,
                end: segment_end,
                classification: active.classification,
                minutes,
                rate: active.rate,
                amount: round_money(exact_amount),
            },
            exact_amount,
        });

        current = segment_end;
    }

    Ok(segments)
}

fn build_result(segments: Vec<WalkedSegment>, span: BookingSpan) -> CostResult {
    let total_cost: Decimal = segments.iter().map(|s| s.exact_amount).sum();
    let duration_hours = Decimal::from(span.minutes()) / MINUTES_PER_HOUR;
    let average_rate = if duration_hours.is_zero() {
        Decimal::ZERO
    } else {
        total_cost / duration_hours
    };

    CostResult {
        total_cost: round_money(total_cost),
        average_rate: round_money(average_rate),
        total_duration_hours: round_money(duration_hours),
        lines: segments.into_iter().map(|s| s.line).collect(),
        error: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DayClassification;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn booking(day_of_week: i32, start: &str, end: &str, is_member: bool) -> BookingRequest {
        BookingRequest {
            day_of_week,
            start_time: start.to_string(),
            end_time: end.to_string(),
            is_member,
        }
    }

    fn cost(day_of_week: i32, start: &str, end: &str, is_member: bool) -> CostResult {
        compute_cost(&PricingConfig::standard(), &booking(day_of_week, start, end, is_member))
    }

    // ==========================================================================
    // CC-001: Monday 10:00-18:00 non-member = 8h × $10.80 = $86.40
    // ==========================================================================
    #[test]
    fn test_cc_001_monday_daytime_public() {
        let result = cost(1, "10:00", "18:00", false);

        assert!(result.error.is_none(), "{:?}", result.error);
        assert_eq!(result.total_cost, dec("86.40"));
        assert_eq!(result.average_rate, dec("10.80"));
        assert_eq!(result.total_duration_hours, dec("8.00"));
        assert_eq!(result.lines.len(), 1);
        assert_eq!(result.lines[0].classification, DayClassification::Weekday);
    }

    // ==========================================================================
    // CC-002: Friday 22:00-02:00 member runs into the closed window
    // ==========================================================================
    #[test]
    fn test_cc_002_friday_overnight_past_closing() {
        let result = cost(5, "22:00", "02:00", true);

        match result.error {
            Some(PricingError::BookingExceedsOperatingHours { ref at, .. }) => {
                assert_eq!(at, "01:00");
            }
            ref other => panic!("Expected BookingExceedsOperatingHours, got {:?}", other),
        }
        assert_eq!(result.total_cost, Decimal::ZERO);
        assert_eq!(result.total_duration_hours, dec("4.00"));
        assert!(result.lines.is_empty());
    }

    // ==========================================================================
    // CC-003: Friday 22:00-01:00 member = 2h × $11.80 + 1h × $11.80 = $35.40
    // ==========================================================================
    #[test]
    fn test_cc_003_friday_overnight_to_closing() {
        let result = cost(5, "22:00", "01:00", true);

        assert!(result.error.is_none(), "{:?}", result.error);
        assert_eq!(result.lines.len(), 2);

        assert_eq!(result.lines[0].classification, DayClassification::FridaySaturday);
        assert_eq!(result.lines[0].minutes, 120);
        assert_eq!(result.lines[0].amount, dec("23.60"));

        // After midnight the walk is on Saturday's overnight segment.
        assert_eq!(result.lines[1].classification, DayClassification::FridaySaturday);
        assert_eq!(result.lines[1].minutes, 60);
        assert_eq!(result.lines[1].amount, dec("11.80"));

        assert_eq!(result.total_cost, dec("35.40"));
        assert_eq!(result.total_duration_hours, dec("3.00"));
    }

    // ==========================================================================
    // CC-004: booking crossing a daytime/evening boundary
    // Weekday 16:30-19:15 public = 1.5h × $10.80 + 1.25h × $12.80 = $32.20
    // ==========================================================================
    #[test]
    fn test_cc_004_crosses_evening_boundary() {
        let result = cost(3, "16:30", "19:15", false);

        assert!(result.error.is_none());
        assert_eq!(result.lines.len(), 2);
        assert_eq!(result.lines[0].amount, dec("16.20"));
        assert_eq!(result.lines[1].amount, dec("16.00"));
        assert_eq!(result.total_cost, dec("32.20"));
        // 32.20 / 2.75 = 11.709...
        assert_eq!(result.average_rate, dec("11.71"));
        assert_eq!(result.total_duration_hours, dec("2.75"));
    }

    // ==========================================================================
    // CC-005: Sunday night rolls into Monday's overnight segment
    // Sunday 23:00-00:30 public = 1h × $12.80 + 0.5h × $12.80 = $19.20
    // ==========================================================================
    #[test]
    fn test_cc_005_sunday_night_into_monday() {
        let result = cost(0, "23:00", "00:30", false);

        assert!(result.error.is_none());
        assert_eq!(result.lines[0].classification, DayClassification::Sunday);
        assert_eq!(result.lines[1].classification, DayClassification::Weekday);
        assert_eq!(result.total_cost, dec("19.20"));
    }

    // ==========================================================================
    // CC-006: start == end is a full-day booking of 24 hours
    // ==========================================================================
    #[test]
    fn test_cc_006_full_day_booking_duration() {
        let result = cost(2, "12:00", "12:00", false);

        assert_eq!(result.total_duration_hours, dec("24.00"));
        assert!(matches!(
            result.error,
            Some(PricingError::BookingExceedsOperatingHours { .. })
        ));
    }

    // ==========================================================================
    // CC-007: 01:01 start is closed on every day
    // ==========================================================================
    #[test]
    fn test_cc_007_start_just_after_closing() {
        for day in 0..7 {
            let result = cost(day, "01:01", "11:00", false);
            assert!(
                matches!(
                    result.error,
                    Some(PricingError::FacilityClosedAtStart { .. })
                ),
                "day {}: {:?}",
                day,
                result.error
            );
        }
    }

    #[test]
    fn test_cc_008_start_at_closing_instant_exceeds_hours() {
        let result = cost(4, "01:00", "01:30", false);
        assert!(matches!(
            result.error,
            Some(PricingError::BookingExceedsOperatingHours { .. })
        ));
    }

    #[test]
    fn test_cc_009_member_pricing() {
        let result = cost(6, "12:00", "14:00", true);
        assert_eq!(result.total_cost, dec("21.60"));
        assert_eq!(result.average_rate, dec("10.80"));
    }

    #[test]
    fn test_cc_010_invalid_inputs() {
        let bad_day = cost(9, "10:00", "12:00", false);
        assert!(matches!(
            bad_day.error,
            Some(PricingError::InvalidInput { ref field, .. }) if field == "day_of_week"
        ));

        let bad_end = cost(1, "10:00", "6pm", false);
        assert!(matches!(
            bad_end.error,
            Some(PricingError::InvalidInput { ref field, .. }) if field == "end_time"
        ));
        assert_eq!(bad_end.total_duration_hours, Decimal::ZERO);
    }

    #[test]
    fn test_cc_011_line_amounts_round_but_total_does_not_drift() {
        // 7 minutes at $10.80 = $1.26 exactly
        let result = cost(1, "10:00", "10:07", false);
        assert_eq!(result.total_cost, dec("1.26"));

        // 17:59-18:01 straddles the boundary: 1 min × $10.80 + 1 min × $12.80
        // = 0.18 + 0.21333... = 0.39333... → $0.39
        let result = cost(1, "17:59", "18:01", false);
        assert_eq!(result.lines[1].amount, dec("0.21"));
        assert_eq!(result.total_cost, dec("0.39"));
    }
}
