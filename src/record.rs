//! Schedule records - the externally visible result type.

use serde::{Deserialize, Serialize};

/// Sentinel event label used when no event text could be extracted.
pub const UNKNOWN_EVENT: &str = "Unknown Event";

/// Sentinel date string used when no date could be resolved.
pub const NO_DATE: &str = "No Date";

/// Sentinel time string used when no time could be resolved.
pub const NO_TIME: &str = "No Time";

/// One extracted schedule entry.
///
/// Serialized with the consumer-facing keys `Event`, `Date`, `Time` and
/// `Cancelled`. Fields are never empty: the constructor substitutes the
/// documented sentinels. A cancelled record additionally carries the
/// `": Cancelled"` suffix on its event label; the boolean and the suffix
/// are two renderings of the same flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRecord {
    /// Human-readable event label.
    #[serde(rename = "Event")]
    pub event: String,
    /// Canonical date in `DD-MM-YY`, or the "No Date" sentinel.
    #[serde(rename = "Date")]
    pub date: String,
    /// Canonical time `HH:MM` (comma-joined when several), or "No Time".
    #[serde(rename = "Time")]
    pub time: String,
    /// Whether the clause contained a cancellation marker.
    #[serde(rename = "Cancelled", default)]
    pub cancelled: bool,
}

impl ScheduleRecord {
    /// Create a record, substituting sentinels for empty fields.
    #[must_use]
    pub fn new(
        event: impl Into<String>,
        date: impl Into<String>,
        time: impl Into<String>,
        cancelled: bool,
    ) -> Self {
        let event = event.into();
        let date = date.into();
        let time = time.into();
        Self {
            event: if event.is_empty() {
                UNKNOWN_EVENT.to_string()
            } else {
                event
            },
            date: if date.is_empty() {
                NO_DATE.to_string()
            } else {
                date
            },
            time: if time.is_empty() {
                NO_TIME.to_string()
            } else {
                time
            },
            cancelled,
        }
    }

    /// Whether this record carries a resolved time (not the sentinel).
    #[must_use]
    pub fn has_time(&self) -> bool {
        self.time != NO_TIME
    }
}
