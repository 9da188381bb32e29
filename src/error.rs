//! Error types for the pricing engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while pricing a booking or
//! simulating a budget.

use serde::ser::{Serialize, SerializeStruct, Serializer};
use thiserror::Error;

use crate::models::DayClassification;

/// The main error type for the pricing engine.
///
/// Calculation entry points never return this directly to the caller: it is
/// carried as data in the `error` field of [`CostResult`](crate::models::CostResult)
/// and [`PlaytimeResult`](crate::models::PlaytimeResult). Configuration loading
/// returns it through [`PricingResult`].
///
/// # Example
///
/// ```
/// use cue_rates::error::PricingError;
///
/// let error = PricingError::FacilityClosedAtStart {
///     time: "01:01".to_string(),
///     window: "10:00 to 01:00 the next day".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "The hall is not open at 01:01 (open 10:00 to 01:00 the next day)"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    /// A request field was missing, malformed or out of range.
    #[error("Invalid {field}: {message}")]
    InvalidInput {
        /// The offending field.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// The requested start time falls inside the closed window.
    #[error("The hall is not open at {time} (open {window})")]
    FacilityClosedAtStart {
        /// The requested start time.
        time: String,
        /// Human-readable operating window.
        window: String,
    },

    /// A bookable hour has no matching rate segment.
    ///
    /// This signals a rate table misconfiguration rather than a user error.
    #[error("No rate defined for {classification} at hour {hour:02}")]
    NoRateDefined {
        /// The day classification that was searched.
        classification: DayClassification,
        /// The hour that had no segment.
        hour: u32,
    },

    /// A fixed-length booking runs into the closed window.
    #[error("Booking extends beyond operating hours at {at} (open {window})")]
    BookingExceedsOperatingHours {
        /// Clock time at which the booking reaches a closed hour.
        at: String,
        /// Human-readable operating window.
        window: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The rate table disagrees with itself or with the operating window.
    #[error("Invalid rate table: {message}")]
    InvalidRateTable {
        /// A description of the inconsistency.
        message: String,
    },
}

impl PricingError {
    /// Returns a stable machine-readable code for the error.
    pub fn code(&self) -> &'static str {
        match self {
            PricingError::InvalidInput { .. } => "INVALID_INPUT",
            PricingError::FacilityClosedAtStart { .. } => "FACILITY_CLOSED_AT_START",
            PricingError::NoRateDefined { .. } => "NO_RATE_DEFINED",
            PricingError::BookingExceedsOperatingHours { .. } => {
                "BOOKING_EXCEEDS_OPERATING_HOURS"
            }
            PricingError::ConfigNotFound { .. } => "CONFIG_NOT_FOUND",
            PricingError::ConfigParseError { .. } => "CONFIG_PARSE_ERROR",
            PricingError::InvalidRateTable { .. } => "INVALID_RATE_TABLE",
        }
    }

    /// Whether the error is caused by the caller's input rather than by the
    /// engine's configuration.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            PricingError::InvalidInput { .. }
                | PricingError::FacilityClosedAtStart { .. }
                | PricingError::BookingExceedsOperatingHours { .. }
        )
    }

    pub(crate) fn invalid_input(field: &str, message: impl Into<String>) -> Self {
        PricingError::InvalidInput {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

// Results are plain data handed to UI code, so errors serialise as a flat
// `{ code, message }` pair instead of the enum shape.
impl Serialize for PricingError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("PricingError", 2)?;
        state.serialize_field("code", self.code())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}

/// A type alias for Results that return PricingError.
pub type PricingResult<T> = Result<T, PricingError>;
