//! Date-derived values

use chrono::{Datelike, NaiveDate};

/// Weekday index for a strict `YYYY-MM-DD` date string.
///
/// Returns 0 for Sunday through 6 for Saturday, or `None` for anything that
/// is not a valid calendar date in exactly that shape (wrong separator,
/// non-numeric, wrong length, impossible date).
///
/// # Example
/// ```
/// use field_calc::weekday_index;
///
/// assert_eq!(weekday_index("2024-03-18"), Some(1)); // a Monday
/// assert_eq!(weekday_index("2024/03/18"), None);
/// ```
pub fn weekday_index(date_text: &str) -> Option<u32> {
    let bytes = date_text.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    for (i, b) in bytes.iter().enumerate() {
        if i != 4 && i != 7 && !b.is_ascii_digit() {
            return None;
        }
    }

    let year: i32 = date_text[0..4].parse().ok()?;
    let month: u32 = date_text[5..7].parse().ok()?;
    let day: u32 = date_text[8..10].parse().ok()?;

    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    Some(date.weekday().num_days_from_sunday())
}
