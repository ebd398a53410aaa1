//! Time-phrase normalization to 24-hour `HH:MM`.
//!
//! Two grammars, tried most-specific first:
//!
//! 1. Explicit numeric: `H:MM [am|pm]`.
//! 2. Idiomatic phrase: optional `half past` / `quarter past` /
//!    `quarter to` prefix, an hour, an optional `o'clock`, and an
//!    optional am/pm suffix.
//!
//! The am/pm adjustment is applied after the phrase computes the base
//! hour. Phrases neither grammar recognizes are returned unchanged -
//! callers treat an unchanged value as "not confidently normalized" but
//! still display it.

use once_cell::sync::Lazy;
use regex::Regex;

static NUMERIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,2}):(\d{2})\s*(am|pm)?\b").unwrap());

// Idiomatic grammar. "o'clock" is consumed between the hour and the
// period so that "3 o'clock pm" keeps its suffix. The prefix only
// matches the literal phrases: a bare "H to H" range is NOT "quarter
// to" and falls through to the plain-hour branch, which takes the
// first hour (the range start).
static IDIOM: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(half past|quarter past|quarter to)?\s*(\d{1,2})\s*(?:o'?clock)?\s*(am|pm)?")
        .unwrap()
});

/// Normalize a raw time phrase to zero-padded 24-hour `HH:MM`.
///
/// Returns the input unchanged when no grammar matches.
///
/// ```rust
/// use sked::normalize::normalize_time;
///
/// assert_eq!(normalize_time("2:30 pm"), "14:30");
/// assert_eq!(normalize_time("half past 3 pm"), "15:30");
/// assert_eq!(normalize_time("quarter to 1"), "12:45");
/// assert_eq!(normalize_time("sometime soon"), "sometime soon");
/// ```
#[must_use]
pub fn normalize_time(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();

    if let Some(caps) = NUMERIC.captures(&lowered) {
        let hour: u32 = caps[1].parse().unwrap_or(0);
        let minute: u32 = caps[2].parse().unwrap_or(0);
        let period = caps.get(3).map(|m| m.as_str());
        let hour = adjust_period(hour, period);
        return format!("{:02}:{:02}", hour, minute);
    }

    if let Some(caps) = IDIOM.captures(&lowered) {
        let phrase = caps.get(1).map(|m| m.as_str());
        let mut hour: u32 = caps[2].parse().unwrap_or(0);
        let period = caps.get(3).map(|m| m.as_str());

        let minute = match phrase {
            Some("half past") => 30,
            Some("quarter past") => 15,
            Some("quarter to") => {
                // "quarter to 1" wraps to hour 12, never -1.
                hour = hour.checked_sub(1).unwrap_or(12);
                if hour < 1 {
                    hour = 12;
                }
                45
            }
            _ => 0,
        };

        let hour = adjust_period(hour, period);
        return format!("{:02}:{:02}", hour, minute);
    }

    raw.to_string()
}

/// Apply am/pm to a 12-hour base hour: `pm` adds 12 unless the hour is
/// already 12; `am` maps 12 to 0.
fn adjust_period(hour: u32, period: Option<&str>) -> u32 {
    match period {
        Some("pm") if hour != 12 => hour + 12,
        Some("am") if hour == 12 => 0,
        _ => hour,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_formats() {
        assert_eq!(normalize_time("2:30 pm"), "14:30");
        assert_eq!(normalize_time("2:30pm"), "14:30");
        assert_eq!(normalize_time("12:15 am"), "00:15");
        assert_eq!(normalize_time("12:15 pm"), "12:15");
        assert_eq!(normalize_time("9:05"), "09:05");
        assert_eq!(normalize_time("23:10"), "23:10");
    }

    #[test]
    fn test_bare_hour_with_period() {
        assert_eq!(normalize_time("3pm"), "15:00");
        assert_eq!(normalize_time("3 pm"), "15:00");
        assert_eq!(normalize_time("12 am"), "00:00");
        assert_eq!(normalize_time("12 pm"), "12:00");
    }

    #[test]
    fn test_half_and_quarter_past() {
        assert_eq!(normalize_time("half past 3"), "03:30");
        assert_eq!(normalize_time("half past 3 pm"), "15:30");
        assert_eq!(normalize_time("quarter past 11 am"), "11:15");
        assert_eq!(normalize_time("half past 12 am"), "00:30");
    }

    #[test]
    fn test_quarter_to_wraps_at_boundaries() {
        assert_eq!(normalize_time("quarter to 4"), "03:45");
        assert_eq!(normalize_time("quarter to 1"), "12:45");
        assert_eq!(normalize_time("quarter to 1 pm"), "12:45");
        assert_eq!(normalize_time("quarter to 1 am"), "00:45");
        assert_eq!(normalize_time("quarter to 13"), "12:45");
    }

    #[test]
    fn test_oclock() {
        assert_eq!(normalize_time("3 o'clock"), "03:00");
        assert_eq!(normalize_time("3 o'clock pm"), "15:00");
        assert_eq!(normalize_time("10 oclock"), "10:00");
    }

    #[test]
    fn test_numeric_range_takes_start_hour() {
        // "12 to 1" is a range, not an idiomatic "quarter to" phrase.
        assert_eq!(normalize_time("12 to 1"), "12:00");
        assert_eq!(normalize_time("2 to 3 pm"), "02:00");
    }

    #[test]
    fn test_unrecognized_returned_unchanged() {
        assert_eq!(normalize_time("noonish"), "noonish");
        assert_eq!(normalize_time("later today"), "later today");
        assert_eq!(normalize_time(""), "");
    }
}
