//! Day classification model.
//!
//! Days of the week that share a rate schedule are grouped into a
//! [`DayClassification`].

use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// Grouping of weekdays sharing an identical rate schedule.
///
/// # Example
///
/// ```
/// use cue_rates::models::DayClassification;
/// use chrono::Weekday;
///
/// assert_eq!(DayClassification::from(Weekday::Fri), DayClassification::FridaySaturday);
/// assert_eq!(DayClassification::from(Weekday::Tue), DayClassification::Weekday);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayClassification {
    /// Monday through Thursday.
    Weekday,
    /// Friday and Saturday.
    FridaySaturday,
    /// Sunday.
    Sunday,
}

impl DayClassification {
    /// Every classification, in table order.
    pub const ALL: [DayClassification; 3] = [
        DayClassification::Weekday,
        DayClassification::FridaySaturday,
        DayClassification::Sunday,
    ];
}

impl From<Weekday> for DayClassification {
    fn from(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Fri | Weekday::Sat => DayClassification::FridaySaturday,
            Weekday::Sun => DayClassification::Sunday,
            Weekday::Mon | Weekday::Tue | Weekday::Wed | Weekday::Thu => {
                DayClassification::Weekday
            }
        }
    }
}

impl std::fmt::Display for DayClassification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayClassification::Weekday => write!(f, "Weekday"),
            DayClassification::FridaySaturday => write!(f, "Friday-Saturday"),
            DayClassification::Sunday => write!(f, "Sunday"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monday_to_thursday_are_weekdays() {
        for weekday in [Weekday::Mon, Weekday::Tue, Weekday::Wed, Weekday::Thu] {
            assert_eq!(DayClassification::from(weekday), DayClassification::Weekday);
        }
    }

    #[test]
    fn test_friday_and_saturday_share_a_classification() {
        assert_eq!(
            DayClassification::from(Weekday::Fri),
            DayClassification::FridaySaturday
        );
        assert_eq!(
            DayClassification::from(Weekday::Sat),
            DayClassification::FridaySaturday
        );
    }

    #[test]
    fn test_sunday_stands_alone() {
        assert_eq!(DayClassification::from(Weekday::Sun), DayClassification::Sunday);
    }

    #[test]
    fn test_serializes_snake_case() {
        let json = serde_json::to_string(&DayClassification::FridaySaturday).unwrap();
        assert_eq!(json, "\"friday_saturday\"");

        let parsed: DayClassification = serde_json::from_str("\"sunday\"").unwrap();
        assert_eq!(parsed, DayClassification::Sunday);
    }

    #[test]
    fn test_display() {
        assert_eq!(DayClassification::FridaySaturday.to_string(), "Friday-Saturday");
    }
}
