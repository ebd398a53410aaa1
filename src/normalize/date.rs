//! Date-phrase normalization anchored at a reference "today".
//!
//! Resolution order (first match wins):
//!
//! 1. "next week" - the Monday strictly after `today` (a full week when
//!    `today` is itself a Monday).
//! 2. "next month" - the 1st of the following month, with year rollover.
//! 3. A weekday name - the next occurrence strictly after `today`.
//! 4. A general relative/absolute parser ("today", "tomorrow",
//!    "March 5th", "5 March 2025", "the 5th", `DD-MM-YY`, `YYYY-MM-DD`).
//!
//! Nothing resolving is not an error: the function returns `None` and
//! the pipeline falls back to the carried date, then `today`.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// A resolved calendar date, rendered as `DD-MM-YY` everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CanonicalDate(NaiveDate);

impl CanonicalDate {
    /// Wrap a resolved date.
    #[must_use]
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// The underlying calendar date.
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for CanonicalDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%d-%m-%y"))
    }
}

impl FromStr for CanonicalDate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s.trim(), "%d-%m-%y")
            .map(CanonicalDate)
            .map_err(|e| Error::parse(format!("not a DD-MM-YY date: {e}")))
    }
}

impl From<NaiveDate> for CanonicalDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

const WEEKDAYS: &[(&str, Weekday)] = &[
    ("monday", Weekday::Mon),
    ("tuesday", Weekday::Tue),
    ("wednesday", Weekday::Wed),
    ("thursday", Weekday::Thu),
    ("friday", Weekday::Fri),
    ("saturday", Weekday::Sat),
    ("sunday", Weekday::Sun),
];

const MONTHS: &[&str] = &[
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

static MONTH_DAY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b(january|february|march|april|may|june|july|august|september|october|november|december)\s+(\d{1,2})(?:st|nd|rd|th)?(?:,?\s*(\d{4}))?\b",
    )
    .unwrap()
});

static DAY_MONTH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b(\d{1,2})(?:st|nd|rd|th)?\s+(?:of\s+)?(january|february|march|april|may|june|july|august|september|october|november|december)(?:\s+(\d{4}))?\b",
    )
    .unwrap()
});

static BARE_ORDINAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:the\s+)?(\d{1,2})(?:st|nd|rd|th)\b").unwrap());

/// Normalize a raw date phrase against a reference `today`.
///
/// Returns `None` when nothing resolves; callers fall back to the
/// carried date, then to `today`.
///
/// ```rust
/// use chrono::NaiveDate;
/// use sked::normalize::normalize_date;
///
/// let today = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(); // a Monday
/// let monday = normalize_date("next week", today).unwrap();
/// assert_eq!(monday.to_string(), "10-03-25");
/// ```
#[must_use]
pub fn normalize_date(raw: &str, today: NaiveDate) -> Option<CanonicalDate> {
    let lowered = raw.trim().to_lowercase();
    if lowered.is_empty() {
        return None;
    }

    if lowered.contains("next week") {
        return Some(CanonicalDate(next_monday(today)));
    }
    if lowered.contains("next month") {
        return Some(CanonicalDate(first_of_next_month(today)?));
    }
    for (name, weekday) in WEEKDAYS {
        if lowered.contains(name) {
            return Some(CanonicalDate(next_weekday(today, *weekday)));
        }
    }

    parse_relative_or_absolute(&lowered, today).map(CanonicalDate)
}

/// The Monday of next week: offset is always >= 1, a full seven days
/// when `today` is itself a Monday.
fn next_monday(today: NaiveDate) -> NaiveDate {
    let mut ahead = 7 - i64::from(today.weekday().num_days_from_monday());
    if ahead <= 0 {
        ahead += 7;
    }
    today + Duration::days(ahead)
}

/// The 1st of the month after `today`, with December rolling the year.
fn first_of_next_month(today: NaiveDate) -> Option<NaiveDate> {
    let month = today.month() % 12 + 1;
    let year = today.year() + i32::try_from(today.month() / 12).ok()?;
    NaiveDate::from_ymd_opt(year, month, 1)
}

/// The next occurrence of `target` strictly after `today`.
fn next_weekday(today: NaiveDate, target: Weekday) -> NaiveDate {
    let mut ahead = i64::from(target.num_days_from_monday())
        - i64::from(today.weekday().num_days_from_monday());
    if ahead <= 0 {
        ahead += 7;
    }
    today + Duration::days(ahead)
}

/// General parser for forms the keyword branches do not cover.
fn parse_relative_or_absolute(lowered: &str, today: NaiveDate) -> Option<NaiveDate> {
    if lowered.contains("day after tomorrow") {
        return Some(today + Duration::days(2));
    }
    if lowered.contains("tomorrow") {
        return Some(today + Duration::days(1));
    }
    if lowered.contains("yesterday") {
        return Some(today - Duration::days(1));
    }
    if lowered.contains("today") || lowered.contains("tonight") {
        return Some(today);
    }

    // Canonical and ISO forms parse exactly; this is what makes the
    // normalizer idempotent over its own output.
    if let Ok(date) = NaiveDate::parse_from_str(lowered.trim(), "%d-%m-%y") {
        return Some(date);
    }
    if let Ok(date) = NaiveDate::parse_from_str(lowered.trim(), "%Y-%m-%d") {
        return Some(date);
    }

    if let Some(caps) = MONTH_DAY.captures(lowered) {
        let month = month_number(&caps[1])?;
        let day: u32 = caps[2].parse().ok()?;
        let year: i32 = caps
            .get(3)
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or_else(|| today.year());
        return NaiveDate::from_ymd_opt(year, month, day);
    }
    if let Some(caps) = DAY_MONTH.captures(lowered) {
        let day: u32 = caps[1].parse().ok()?;
        let month = month_number(&caps[2])?;
        let year: i32 = caps
            .get(3)
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or_else(|| today.year());
        return NaiveDate::from_ymd_opt(year, month, day);
    }
    if let Some(caps) = BARE_ORDINAL.captures(lowered) {
        let day: u32 = caps[1].parse().ok()?;
        return NaiveDate::from_ymd_opt(today.year(), today.month(), day);
    }

    None
}

fn month_number(name: &str) -> Option<u32> {
    MONTHS
        .iter()
        .position(|m| *m == name)
        .map(|i| u32::try_from(i + 1).unwrap_or(1))
}
