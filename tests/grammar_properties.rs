//! Grammar-level properties: the time round-trip and date idempotence.

use chrono::NaiveDate;
use proptest::prelude::*;
use sked::{normalize_date, normalize_time};

/// Idiomatic phrase for an (hour, minute) pair, using the same period
/// token as the numeric form.
fn idiomatic_phrase(hour: u32, minute: u32, period: &str) -> String {
    match minute {
        0 => format!("{hour} o'clock {period}"),
        15 => format!("quarter past {hour} {period}"),
        30 => format!("half past {hour} {period}"),
        45 => format!("quarter to {} {period}", hour % 12 + 1),
        _ => unreachable!("grid covers quarter-hour minutes only"),
    }
}

#[test]
fn time_grammar_round_trip() {
    // For every hour 1..=12, quarter-hour minute, and period, the
    // idiomatic phrase and the numeric equivalent agree.
    for hour in 1u32..=12 {
        for minute in [0u32, 15, 30, 45] {
            for period in ["am", "pm"] {
                let idiomatic = normalize_time(&idiomatic_phrase(hour, minute, period));
                let numeric = normalize_time(&format!("{hour}:{minute:02} {period}"));
                assert_eq!(
                    idiomatic, numeric,
                    "mismatch at {hour}:{minute:02} {period}"
                );
            }
        }
    }
}

#[test]
fn quarter_to_boundary_hours_wrap() {
    assert_eq!(normalize_time("quarter to 1"), "12:45");
    assert_eq!(normalize_time("quarter to 1 pm"), "12:45");
    assert_eq!(normalize_time("quarter to 1 am"), "00:45");
}

#[test]
fn canonical_date_is_idempotent_on_fixed_anchor() {
    let anchor = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
    for phrase in ["next week", "next month", "Friday", "tomorrow", "March 21st"] {
        let first = normalize_date(phrase, anchor).expect(phrase);
        let second = normalize_date(&first.to_string(), anchor).expect("canonical reparse");
        assert_eq!(first, second, "not idempotent for {phrase:?}");
    }
}

proptest! {
    /// Canonical DD-MM-YY strings round-trip through the normalizer
    /// regardless of the anchor date.
    #[test]
    fn canonical_form_round_trips(
        year in 2000i32..2069,
        month in 1u32..=12,
        day in 1u32..=28,
        anchor_offset in 0i64..3650,
    ) {
        let date = NaiveDate::from_ymd_opt(year, month, day).unwrap();
        let canonical = format!("{}", date.format("%d-%m-%y"));
        let anchor = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()
            + chrono::Duration::days(anchor_offset);
        let resolved = normalize_date(&canonical, anchor).unwrap();
        prop_assert_eq!(resolved.date(), date);
        prop_assert_eq!(resolved.to_string(), canonical);
    }

    /// The time normalizer is total: no input panics, and recognized
    /// output is always zero-padded HH:MM.
    #[test]
    fn normalize_time_never_panics(input in ".{0,40}") {
        let _ = normalize_time(&input);
    }

    /// The date normalizer is total over arbitrary input.
    #[test]
    fn normalize_date_never_panics(input in ".{0,40}", offset in 0i64..3650) {
        let anchor = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()
            + chrono::Duration::days(offset);
        let _ = normalize_date(&input, anchor);
    }

    /// Hour/minute numerics inside the 12-hour grammar always produce
    /// HH:MM output.
    #[test]
    fn numeric_grammar_output_shape(hour in 1u32..=12, minute in 0u32..60) {
        let out = normalize_time(&format!("{hour}:{minute:02}"));
        prop_assert_eq!(out.len(), 5);
        prop_assert_eq!(out.as_bytes()[2], b':');
    }
}
