//! Calendar writer contract: resolved records become external calendar
//! entries.
//!
//! The record's `DD-MM-YY` date is reformatted to an ISO date before
//! handoff; a record with no `HH:MM` in its time field becomes an
//! all-day entry.

use chrono::{NaiveDate, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::record::ScheduleRecord;
use crate::Result;

static HHMM: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(\d{2}):(\d{2})\b").unwrap());

/// One entry ready for an external calendar.
///
/// `date` serializes as an ISO `YYYY-MM-DD` string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEntry {
    /// Event title.
    pub title: String,
    /// Calendar date.
    pub date: NaiveDate,
    /// Start time; `None` for an all-day entry.
    pub start_time: Option<NaiveTime>,
    /// End time; equals `start_time` when the record carried one time.
    pub end_time: Option<NaiveTime>,
}

impl CalendarEntry {
    /// Convert a schedule record into a calendar entry.
    ///
    /// The first `HH:MM` in the time field is the start, a second one
    /// the end. A record whose date is not `DD-MM-YY` is a boundary
    /// error - the pipeline never produces one, but records may also
    /// arrive from external consumers.
    pub fn from_record(record: &ScheduleRecord) -> Result<Self> {
        let date = NaiveDate::parse_from_str(&record.date, "%d-%m-%y")
            .map_err(|_| Error::invalid_input(format!("invalid date format: {}", record.date)))?;

        let mut times = HHMM.captures_iter(&record.time).filter_map(|caps| {
            let hour: u32 = caps[1].parse().ok()?;
            let minute: u32 = caps[2].parse().ok()?;
            NaiveTime::from_hms_opt(hour, minute, 0)
        });
        let start_time = times.next();
        let end_time = times.next().or(start_time);

        Ok(Self {
            title: record.event.clone(),
            date,
            start_time,
            end_time,
        })
    }

    /// Whether this entry spans the whole day.
    #[must_use]
    pub fn is_all_day(&self) -> bool {
        self.start_time.is_none()
    }

    /// The date in ISO `YYYY-MM-DD` form for the external API.
    #[must_use]
    pub fn iso_date(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// External calendar backend.
pub trait CalendarWriter: Send + Sync {
    /// Create one calendar entry.
    fn insert(&self, entry: &CalendarEntry) -> Result<()>;

    /// Backend name for diagnostics.
    fn name(&self) -> &'static str {
        "calendar"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::NO_TIME;

    #[test]
    fn test_single_time_duplicates_into_end() {
        let record = ScheduleRecord::new("Meeting", "10-03-25", "15:00", false);
        let entry = CalendarEntry::from_record(&record).unwrap();
        assert_eq!(entry.iso_date(), "2025-03-10");
        assert_eq!(entry.start_time, NaiveTime::from_hms_opt(15, 0, 0));
        assert_eq!(entry.end_time, entry.start_time);
        assert!(!entry.is_all_day());
    }

    #[test]
    fn test_two_times_become_start_and_end() {
        let record = ScheduleRecord::new("Workshop", "10-03-25", "09:30, 11:00", false);
        let entry = CalendarEntry::from_record(&record).unwrap();
        assert_eq!(entry.start_time, NaiveTime::from_hms_opt(9, 30, 0));
        assert_eq!(entry.end_time, NaiveTime::from_hms_opt(11, 0, 0));
    }

    #[test]
    fn test_no_time_yields_all_day_entry() {
        let record = ScheduleRecord::new("Deadline", "01-04-25", NO_TIME, false);
        let entry = CalendarEntry::from_record(&record).unwrap();
        assert!(entry.is_all_day());
        assert_eq!(entry.end_time, None);
        assert_eq!(entry.iso_date(), "2025-04-01");
    }

    #[test]
    fn test_invalid_date_is_a_boundary_error() {
        let record = ScheduleRecord::new("Meeting", "No Date", "15:00", false);
        assert!(CalendarEntry::from_record(&record).is_err());
    }

    #[test]
    fn test_entry_serializes_iso_date() {
        let record = ScheduleRecord::new("Meeting", "10-03-25", "15:00", false);
        let entry = CalendarEntry::from_record(&record).unwrap();
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("2025-03-10"));
    }
}
