//! Reference calendar and clock-time parsing.
//!
//! Requests only name a day of week, so every calculation runs on a fixed
//! reference week: day 0 (Sunday) is 2026-01-18 and the other days follow
//! it. Day-of-week arithmetic across midnight is then plain date arithmetic.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Weekday};

use crate::error::{PricingError, PricingResult};

/// Converts a day index (0 = Sunday .. 6 = Saturday) to a [`Weekday`].
///
/// # Example
///
/// ```
/// use cue_rates::calculation::weekday_from_index;
/// use chrono::Weekday;
///
/// assert_eq!(weekday_from_index(0).unwrap(), Weekday::Sun);
/// assert_eq!(weekday_from_index(5).unwrap(), Weekday::Fri);
/// assert!(weekday_from_index(7).is_err());
/// ```
pub fn weekday_from_index(day_of_week: i32) -> PricingResult<Weekday> {
    match day_of_week {
        0 => Ok(Weekday::Sun),
        1 => Ok(Weekday::Mon),
        2 => Ok(Weekday::Tue),
        3 => Ok(Weekday::Wed),
        4 => Ok(Weekday::Thu),
        5 => Ok(Weekday::Fri),
        6 => Ok(Weekday::Sat),
        _ => Err(PricingError::invalid_input(
            "day_of_week",
            format!("must be between 0 (Sunday) and 6 (Saturday), got {}", day_of_week),
        )),
    }
}

/// Parses a strict 24-hour `"HH:MM"` string.
///
/// `field` names the request field in the error message.
///
/// # Example
///
/// ```
/// use cue_rates::calculation::parse_clock_time;
/// use chrono::NaiveTime;
///
/// assert_eq!(
///     parse_clock_time("start_time", "09:30").unwrap(),
///     NaiveTime::from_hms_opt(9, 30, 0).unwrap()
/// );
/// assert!(parse_clock_time("start_time", "9:30").is_err());
/// assert!(parse_clock_time("start_time", "24:00").is_err());
/// ```
pub fn parse_clock_time(field: &str, value: &str) -> PricingResult<NaiveTime> {
    let malformed = || {
        PricingError::invalid_input(field, format!("expected HH:MM (24-hour), got '{}'", value))
    };

    let bytes = value.as_bytes();
    if bytes.len() != 5 || bytes[2] != b':' {
        return Err(malformed());
    }
    let digits = [bytes[0], bytes[1], bytes[3], bytes[4]];
    if !digits.iter().all(u8::is_ascii_digit) {
        return Err(malformed());
    }

    let hour = u32::from(bytes[0] - b'0') * 10 + u32::from(bytes[1] - b'0');
    let minute = u32::from(bytes[3] - b'0') * 10 + u32::from(bytes[4] - b'0');

    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(|| {
        PricingError::invalid_input(field, format!("'{}' is not a valid time of day", value))
    })
}

/// The reference calendar's Sunday.
pub fn reference_sunday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 18).expect("2026-01-18 is a valid date")
}

/// Places a weekday and clock time on the reference calendar.
pub fn anchor(weekday: Weekday, time: NaiveTime) -> NaiveDateTime {
    let offset = i64::from(weekday.num_days_from_sunday());
    (reference_sunday() + Duration::days(offset)).and_time(time)
}

/// Formats a moment as `"HH:MM"`.
pub fn format_clock(moment: NaiveDateTime) -> String {
    format!("{:02}:{:02}", moment.hour(), moment.minute())
}

/// Midnight at the start of the moment's calendar day.
pub(crate) fn start_of_day(moment: NaiveDateTime) -> NaiveDateTime {
    moment.date().and_time(NaiveTime::MIN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_reference_sunday_is_a_sunday() {
        assert_eq!(reference_sunday().weekday(), Weekday::Sun);
    }

    #[test]
    fn test_anchor_preserves_weekday_for_every_index() {
        for index in 0..7 {
            let weekday = weekday_from_index(index).unwrap();
            let moment = anchor(weekday, time(12, 0));
            assert_eq!(moment.weekday(), weekday);
            assert_eq!(moment.weekday().num_days_from_sunday() as i32, index);
        }
    }

    #[test]
    fn test_anchor_saturday_rolls_into_sunday() {
        let saturday_night = anchor(Weekday::Sat, time(23, 0));
        let next = saturday_night + Duration::hours(1);
        assert_eq!(next.weekday(), Weekday::Sun);
    }

    #[test]
    fn test_negative_day_index_is_rejected() {
        match weekday_from_index(-1) {
            Err(PricingError::InvalidInput { field, .. }) => assert_eq!(field, "day_of_week"),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_clock_time_accepts_boundaries() {
        assert_eq!(parse_clock_time("t", "00:00").unwrap(), time(0, 0));
        assert_eq!(parse_clock_time("t", "23:59").unwrap(), time(23, 59));
    }

    #[test]
    fn test_parse_clock_time_rejects_malformed_input() {
        for bad in ["", "1000", "10:0", "10-00", "ab:cd", "+1:00", "10:60", "25:00", " 10:00"] {
            assert!(parse_clock_time("start_time", bad).is_err(), "accepted '{}'", bad);
        }
    }

    #[test]
    fn test_parse_clock_time_error_names_field() {
        let error = parse_clock_time("end_time", "noon").unwrap_err();
        assert_eq!(
            error.to_string(),
            "Invalid end_time: expected HH:MM (24-hour), got 'noon'"
        );
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(anchor(Weekday::Mon, time(9, 5))), "09:05");
    }
}
