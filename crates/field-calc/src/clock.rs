//! Clock time parsing and durations

/// Parse a loosely formatted clock time into minutes since midnight.
///
/// Non-digit characters are ignored; the last two remaining digits are the
/// minutes and everything before them the hours, so `"7:30"`, `"730"` and
/// `"07.30 Uhr"` all mean 450. Returns `None` when fewer than three digits
/// remain or when the result would be out of range (hours > 23 or
/// minutes > 59).
pub fn parse_clock_minutes(text: &str) -> Option<u32> {
    let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() < 3 {
        return None;
    }

    let split = digits.len() - 2;
    let hours: u32 = digits[..split].parse().ok()?;
    let minutes: u32 = digits[split..].parse().ok()?;

    if hours > 23 || minutes > 59 {
        return None;
    }

    Some(hours * 60 + minutes)
}

/// Elapsed time between two clock times as decimal hours.
///
/// Intervals are assumed to be shorter than 24 hours; when `to` is earlier
/// than `from` the interval wraps past midnight. The result uses a comma as
/// decimal separator with two fraction digits (`"4,00"`). Either endpoint
/// failing to parse yields an empty string.
pub fn duration_hours(from_text: &str, to_text: &str) -> String {
    let (from, to) = match (parse_clock_minutes(from_text), parse_clock_minutes(to_text)) {
        (Some(f), Some(t)) => (f, t),
        _ => return String::new(),
    };

    let mut minutes = to as i32 - from as i32;
    if minutes < 0 {
        minutes += 24 * 60;
    }

    format!("{:.2}", minutes as f64 / 60.0).replace('.', ",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_common_shapes() {
        assert_eq!(parse_clock_minutes("07:30"), Some(450));
        assert_eq!(parse_clock_minutes("730"), Some(450));
        assert_eq!(parse_clock_minutes("07.30 Uhr"), Some(450));
        assert_eq!(parse_clock_minutes("00:00"), Some(0));
        assert_eq!(parse_clock_minutes("23:59"), Some(1439));
    }

    #[test]
    fn parse_rejects_out_of_range() {
        assert_eq!(parse_clock_minutes("24:00"), None);
        assert_eq!(parse_clock_minutes("12:60"), None);
        assert_eq!(parse_clock_minutes("99:99"), None);
    }

    #[test]
    fn parse_rejects_too_few_digits() {
        assert_eq!(parse_clock_minutes(""), None);
        assert_eq!(parse_clock_minutes("7"), None);
        assert_eq!(parse_clock_minutes("95"), None);
        assert_eq!(parse_clock_minutes("keine"), None);
    }

    #[test]
    fn duration_basic() {
        assert_eq!(duration_hours("09:00", "17:30"), "8,50");
        assert_eq!(duration_hours("09:00", "09:00"), "0,00");
        assert_eq!(duration_hours("06:45", "07:00"), "0,25");
    }

    #[test]
    fn duration_wraps_past_midnight() {
        assert_eq!(duration_hours("22:00", "02:00"), "4,00");
        assert_eq!(duration_hours("23:30", "00:15"), "0,75");
    }

    #[test]
    fn duration_empty_on_bad_endpoint() {
        assert_eq!(duration_hours("", "09:00"), "");
        assert_eq!(duration_hours("09:00", ""), "");
        assert_eq!(duration_hours("x", "y"), "");
    }
}
