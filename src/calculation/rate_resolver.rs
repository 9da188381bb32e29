//! Rate resolution over the configured rate table.
//!
//! This module classifies days, looks up the hourly price for a clock hour,
//! answers whether the hall is open, and computes where the rate segment
//! active at a moment ends. Both the cost calculator and the budget simulator
//! go through [`RateResolver`], so they can never disagree on a price.

use chrono::{Datelike, Duration, NaiveDateTime, Timelike};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::config::{OperatingWindow, PricingConfig, RateSegment, RateTable};
use crate::error::{PricingError, PricingResult};
use crate::models::DayClassification;

use super::calendar::{format_clock, start_of_day, weekday_from_index};

/// Classifies a day index (0 = Sunday .. 6 = Saturday).
///
/// # Example
///
/// ```
/// use cue_rates::calculation::classify_day;
/// use cue_rates::models::DayClassification;
///
/// assert_eq!(classify_day(0).unwrap(), DayClassification::Sunday);
/// assert_eq!(classify_day(4).unwrap(), DayClassification::Weekday);
/// assert_eq!(classify_day(6).unwrap(), DayClassification::FridaySaturday);
/// ```
pub fn classify_day(day_of_week: i32) -> PricingResult<DayClassification> {
    weekday_from_index(day_of_week).map(DayClassification::from)
}

/// The rate in force at a particular moment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActiveRate {
    /// Classification of the moment's calendar day.
    pub classification: DayClassification,
    /// Hourly price.
    pub rate: Decimal,
    /// When the segment providing this rate ends. Always after the moment.
    pub ends_at: NaiveDateTime,
}

/// Read-only view over a rate table and operating window.
#[derive(Debug, Clone, Copy)]
pub struct RateResolver<'a> {
    pub(super) table: &'a RateTable,
    pub(super) window: &'a OperatingWindow,
}

impl<'a> RateResolver<'a> {
    /// Creates a resolver over a validated configuration.
    pub fn new(config: &'a PricingConfig) -> Self {
        Self {
            table: config.rates(),
            window: config.window(),
        }
    }

    /// Returns the operating window.
    pub fn window(&self) -> &OperatingWindow {
        self.window
    }

    /// Returns whether the hall is open at the given clock time.
    pub fn is_open_at(&self, hour: u32, minute: u32) -> bool {
        self.window.is_open_at(hour, minute)
    }

    /// Finds the segment covering an hour.
    ///
    /// The overnight `{0, 1}` segment is checked first for hour 0.
    pub fn segment_for_hour(
        &self,
        classification: DayClassification,
        hour: u32,
    ) -> Option<&'a RateSegment> {
        let segments = self.table.segments(classification);
        if hour == 0 {
            if let Some(overnight) = segments.iter().find(|s| s.is_overnight()) {
                return Some(overnight);
            }
        }
        segments.iter().find(|s| s.contains(hour))
    }

    /// Returns the hourly price, or zero when no segment covers the hour.
    ///
    /// # Example
    ///
    /// ```
    /// use cue_rates::calculation::RateResolver;
    /// use cue_rates::config::PricingConfig;
    /// use cue_rates::models::DayClassification;
    /// use rust_decimal::Decimal;
    ///
    /// let config = PricingConfig::standard();
    /// let resolver = RateResolver::new(&config);
    ///
    /// assert_eq!(
    ///     resolver.rate_for_hour(DayClassification::Weekday, 12, false),
    ///     Decimal::new(1080, 2)
    /// );
    /// assert_eq!(resolver.rate_for_hour(DayClassification::Weekday, 5, false), Decimal::ZERO);
    /// ```
    pub fn rate_for_hour(
        &self,
        classification: DayClassification,
        hour: u32,
        is_member: bool,
    ) -> Decimal {
        self.segment_for_hour(classification, hour)
            .map(|segment| segment.rate(is_member))
            .unwrap_or(Decimal::ZERO)
    }

    /// Resolves the rate in force at a moment, or `None` when nothing is
    /// charged for that hour.
    ///
    /// The moment's own calendar day is classified, so 00:30 on a Saturday
    /// uses Saturday's overnight segment.
    pub fn rate_at(&self, moment: NaiveDateTime, is_member: bool) -> Option<ActiveRate> {
        let classification = DayClassification::from(moment.weekday());
        let segment = self.segment_for_hour(classification, moment.hour())?;
        let rate = segment.rate(is_member);
        if rate <= Decimal::ZERO {
            return None;
        }

        Some(ActiveRate {
            classification,
            rate,
            ends_at: self.segment_end(moment, segment),
        })
    }

    /// The instant at which `segment`, active at `moment`, ends.
    ///
    /// An `end_hour` of 24 lands on the next midnight; the overnight segment
    /// ends at 01:00 of the moment's own day. If boundary arithmetic fails to
    /// move forward, the step is forced to one minute so walks always end.
    pub fn segment_end(&self, moment: NaiveDateTime, segment: &RateSegment) -> NaiveDateTime {
        let boundary = start_of_day(moment) + Duration::hours(i64::from(segment.end_hour));
        if boundary <= moment {
            moment + Duration::minutes(1)
        } else {
            boundary
        }
    }

    /// Describes why no rate applies at `moment`.
    ///
    /// An hour the hall is open for means the table is broken; anything else
    /// means the booking has run into closing time.
    pub fn missing_rate_error(&self, moment: NaiveDateTime) -> PricingError {
        let hour = moment.hour();
        if self.window.is_bookable_hour(hour) {
            PricingError::NoRateDefined {
                classification: DayClassification::from(moment.weekday()),
                hour,
            }
        } else {
            PricingError::BookingExceedsOperatingHours {
                at: format_clock(moment),
                window: self.window.describe(),
            }
        }
    }
}
