//! Configuration types for table pricing.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files, together with the
//! built-in default rate table.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{PricingError, PricingResult};
use crate::models::DayClassification;

/// Metadata about the venue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacilityMetadata {
    /// The venue's display name.
    pub name: String,
    /// ISO 4217 code the rates are quoted in.
    pub currency: String,
}

impl Default for FacilityMetadata {
    fn default() -> Self {
        Self {
            name: "Pool Hall".to_string(),
            currency: "GBP".to_string(),
        }
    }
}

/// The daily span during which the hall is open.
///
/// The hall opens at `opens_hour:00` and closes at `closes_hour:00` the next
/// calendar day. The closing instant itself still counts as open, so with the
/// default window 01:00 is open, 01:01 is closed and 10:00 is open again.
///
/// # Example
///
/// ```
/// use cue_rates::config::OperatingWindow;
///
/// let window = OperatingWindow::default();
/// assert!(window.is_open_at(1, 0));
/// assert!(!window.is_open_at(1, 1));
/// assert!(!window.is_open_at(9, 59));
/// assert!(window.is_open_at(10, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatingWindow {
    /// Hour the hall opens.
    pub opens_hour: u32,
    /// Hour the hall closes, on the calendar day after opening.
    pub closes_hour: u32,
}

impl Default for OperatingWindow {
    fn default() -> Self {
        Self {
            opens_hour: 10,
            closes_hour: 1,
        }
    }
}

impl OperatingWindow {
    /// Returns whether the hall is open at the given clock time.
    pub fn is_open_at(&self, hour: u32, minute: u32) -> bool {
        let closed = (hour == self.closes_hour && minute >= 1)
            || (hour > self.closes_hour && hour < self.opens_hour);
        !closed
    }

    /// Returns whether the hall is open for the whole of the given hour.
    ///
    /// Exactly these hours must carry a rate segment.
    pub fn is_bookable_hour(&self, hour: u32) -> bool {
        hour < 24 && self.is_open_at(hour, 0) && self.is_open_at(hour, 59)
    }

    /// Human-readable form, e.g. `"10:00 to 01:00 the next day"`.
    pub fn describe(&self) -> String {
        format!(
            "{:02}:00 to {:02}:00 the next day",
            self.opens_hour, self.closes_hour
        )
    }

    /// Checks the window wraps past midnight and stays on the clock.
    pub fn validate(&self) -> PricingResult<()> {
        if self.opens_hour >= 24 || self.closes_hour >= self.opens_hour {
            return Err(PricingError::InvalidRateTable {
                message: format!(
                    "operating window must open before midnight and close the next day, got {}",
                    self.describe()
                ),
            });
        }
        Ok(())
    }
}

/// A half-open clock interval `[start_hour, end_hour)` with two prices.
///
/// The `{0, 1}` segment is the overnight carry-over hour: it belongs to the
/// calendar day after the evening it continues.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateSegment {
    /// First hour covered.
    pub start_hour: u32,
    /// First hour no longer covered (24 means midnight).
    pub end_hour: u32,
    /// Hourly price for non-members.
    pub public_rate: Decimal,
    /// Hourly price for members.
    pub member_rate: Decimal,
}

impl RateSegment {
    /// Creates a segment from hour bounds and prices.
    pub fn new(start_hour: u32, end_hour: u32, public_rate: Decimal, member_rate: Decimal) -> Self {
        Self {
            start_hour,
            end_hour,
            public_rate,
            member_rate,
        }
    }

    /// Returns whether this is the 00:00 to 01:00 overnight segment.
    pub fn is_overnight(&self) -> bool {
        self.start_hour == 0 && self.end_hour == 1
    }

    /// Returns whether the segment covers the given hour.
    pub fn contains(&self, hour: u32) -> bool {
        self.start_hour <= hour && hour < self.end_hour
    }

    /// The hourly price for the given membership status.
    pub fn rate(&self, is_member: bool) -> Decimal {
        if is_member {
            self.member_rate
        } else {
            self.public_rate
        }
    }
}

/// Ordered rate segments for each day classification.
///
/// # Example
///
/// ```
/// use cue_rates::config::{OperatingWindow, RateTable};
/// use cue_rates::models::DayClassification;
///
/// let table = RateTable::standard();
/// assert!(table.validate(&OperatingWindow::default()).is_ok());
/// assert_eq!(table.segments(DayClassification::Sunday).len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateTable {
    /// Monday to Thursday segments.
    pub weekday: Vec<RateSegment>,
    /// Friday and Saturday segments.
    pub friday_saturday: Vec<RateSegment>,
    /// Sunday segments.
    pub sunday: Vec<RateSegment>,
}

impl RateTable {
    /// The house rate table.
    ///
    /// | Classification  | Daytime              | Evening              | 00:00-01:00   |
    /// |-----------------|----------------------|----------------------|---------------|
    /// | Weekday         | 10-18: 10.80 / 9.80  | 18-24: 12.80 / 11.80 | 12.80 / 11.80 |
    /// | Friday-Saturday | 10-18: 11.80 / 10.80 | 18-24: 13.80 / 11.80 | 12.80 / 11.80 |
    /// | Sunday          | 10-14: 11.80 / 10.80 | 14-24: 12.80 / 11.80 | 12.80 / 11.80 |
    pub fn standard() -> Self {
        let overnight = RateSegment::new(0, 1, Decimal::new(1280, 2), Decimal::new(1180, 2));
        Self {
            weekday: vec![
                RateSegment::new(10, 18, Decimal::new(1080, 2), Decimal::new(980, 2)),
                RateSegment::new(18, 24, Decimal::new(1280, 2), Decimal::new(1180, 2)),
                overnight.clone(),
            ],
            friday_saturday: vec![
                RateSegment::new(10, 18, Decimal::new(1180, 2), Decimal::new(1080, 2)),
                RateSegment::new(18, 24, Decimal::new(1380, 2), Decimal::new(1180, 2)),
                overnight.clone(),
            ],
            sunday: vec![
                RateSegment::new(10, 14, Decimal::new(1180, 2), Decimal::new(1080, 2)),
                RateSegment::new(14, 24, Decimal::new(1280, 2), Decimal::new(1180, 2)),
                overnight,
            ],
        }
    }

    /// Returns the segments for a classification.
    pub fn segments(&self, classification: DayClassification) -> &[RateSegment] {
        match classification {
            DayClassification::Weekday => &self.weekday,
            DayClassification::FridaySaturday => &self.friday_saturday,
            DayClassification::Sunday => &self.sunday,
        }
    }

    /// Checks the table against itself and against the operating window.
    ///
    /// For every classification and every hour 0-23, exactly one segment must
    /// cover a bookable hour and no segment may cover a closed one. Bounds
    /// must be on the clock and prices positive.
    pub fn validate(&self, window: &OperatingWindow) -> PricingResult<()> {
        window.validate()?;

        for classification in DayClassification::ALL {
            let segments = self.segments(classification);

            for segment in segments {
                if segment.start_hour >= segment.end_hour || segment.end_hour > 24 {
                    return Err(invalid_table(format!(
                        "{} segment {:02}-{:02} is not a valid clock interval",
                        classification, segment.start_hour, segment.end_hour
                    )));
                }
                if segment.public_rate <= Decimal::ZERO || segment.member_rate <= Decimal::ZERO {
                    return Err(invalid_table(format!(
                        "{} segment {:02}-{:02} must have positive rates",
                        classification, segment.start_hour, segment.end_hour
                    )));
                }
            }

            for hour in 0..24 {
                let matches = segments.iter().filter(|s| s.contains(hour)).count();
                let bookable = window.is_bookable_hour(hour);

                if bookable && matches != 1 {
                    return Err(invalid_table(format!(
                        "{} hour {:02} is open but matches {} segments",
                        classification, hour, matches
                    )));
                }
                if !bookable && matches != 0 {
                    return Err(invalid_table(format!(
                        "{} hour {:02} is closed but has a rate",
                        classification, hour
                    )));
                }
            }
        }

        Ok(())
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self::standard()
    }
}

fn invalid_table(message: String) -> PricingError {
    PricingError::InvalidRateTable { message }
}

/// Facility configuration file structure (`facility.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct FacilityConfig {
    /// Venue metadata.
    #[serde(flatten)]
    pub metadata: FacilityMetadata,
    /// Opening hours.
    #[serde(default)]
    pub operating_window: OperatingWindow,
}

/// The complete, validated pricing configuration.
///
/// Immutable once built; share it by reference or behind an `Arc`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PricingConfig {
    metadata: FacilityMetadata,
    window: OperatingWindow,
    rates: RateTable,
}

impl PricingConfig {
    /// Creates a configuration, rejecting tables that disagree with the window.
    pub fn new(
        metadata: FacilityMetadata,
        window: OperatingWindow,
        rates: RateTable,
    ) -> PricingResult<Self> {
        rates.validate(&window)?;
        Ok(Self {
            metadata,
            window,
            rates,
        })
    }

    /// The built-in configuration: default window and [`RateTable::standard`].
    pub fn standard() -> Self {
        Self {
            metadata: FacilityMetadata::default(),
            window: OperatingWindow::default(),
            rates: RateTable::standard(),
        }
    }

    /// Returns the venue metadata.
    pub fn facility(&self) -> &FacilityMetadata {
        &self.metadata
    }

    /// Returns the operating window.
    pub fn window(&self) -> &OperatingWindow {
        &self.window
    }

    /// Returns the rate table.
    pub fn rates(&self) -> &RateTable {
        &self.rates
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self::standard()
    }
}
