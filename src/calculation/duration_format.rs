//! Human-readable durations.

/// Formats whole minutes for display.
///
/// # Example
///
/// ```
/// use cue_rates::calculation::format_duration;
///
/// assert_eq!(format_duration(102), "1 hour(s) and 42 minute(s)");
/// assert_eq!(format_duration(120), "2 hour(s)");
/// assert_eq!(format_duration(45), "45 minute(s)");
/// assert_eq!(format_duration(0), "0 minutes");
/// ```
pub fn format_duration(total_minutes: i64) -> String {
    let total_minutes = total_minutes.max(0);
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;

    match (hours, minutes) {
        (0, 0) => "0 minutes".to_string(),
        (0, m) => format!("{} minute(s)", m),
        (h, 0) => format!("{} hour(s)", h),
        (h, m) => format!("{} hour(s) and {} minute(s)", h, m),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_units() {
        assert_eq!(format_duration(1), "1 minute(s)");
        assert_eq!(format_duration(60), "1 hour(s)");
        assert_eq!(format_duration(61), "1 hour(s) and 1 minute(s)");
    }

    #[test]
    fn test_negative_is_treated_as_zero() {
        assert_eq!(format_duration(-5), "0 minutes");
    }
}
