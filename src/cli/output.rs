//! Output formatting utilities for CLI commands.

use std::io::{self, Write};

use crate::record::ScheduleRecord;
use crate::Result;

/// Write output to file or stdout.
pub fn write_output(content: &str, path: Option<&str>) -> Result<()> {
    if let Some(path) = path {
        std::fs::write(path, content)?;
    } else {
        let mut stdout = io::stdout();
        stdout.write_all(content.as_bytes())?;
        stdout.flush()?;
    }
    Ok(())
}

/// Log an info message to stderr (respects the quiet flag).
pub fn log_info(msg: &str, quiet: bool) {
    if !quiet {
        eprintln!("{msg}");
    }
}

/// Render records as an aligned plain-text table.
#[must_use]
pub fn render_human(records: &[ScheduleRecord]) -> String {
    if records.is_empty() {
        return "no schedule records found\n".to_string();
    }

    let event_width = records
        .iter()
        .map(|r| r.event.len())
        .max()
        .unwrap_or(0)
        .max("EVENT".len());
    let date_width = records
        .iter()
        .map(|r| r.date.len())
        .max()
        .unwrap_or(0)
        .max("DATE".len());

    let mut out = String::new();
    out.push_str(&format!(
        "{:<event_width$}  {:<date_width$}  TIME\n",
        "EVENT", "DATE"
    ));
    for record in records {
        out.push_str(&format!(
            "{:<event_width$}  {:<date_width$}  {}\n",
            record.event, record.date, record.time
        ));
    }
    out
}

/// Render records as JSON, pretty-printed when writing to a terminal.
pub fn render_json(records: &[ScheduleRecord], pretty: bool) -> Result<String> {
    let mut json = if pretty {
        serde_json::to_string_pretty(records)
    } else {
        serde_json::to_string(records)
    }
    .map_err(|e| crate::Error::parse(format!("serialization failed: {e}")))?;
    json.push('\n');
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_human_alignment() {
        let records = vec![
            ScheduleRecord::new("Meeting", "10-03-25", "15:00", false),
            ScheduleRecord::new("Chemistry class", "03-03-25", "15:30", false),
        ];
        let table = render_human(&records);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("EVENT"));
        assert!(lines[1].contains("Meeting"));
        assert!(lines[2].contains("15:30"));
    }

    #[test]
    fn test_render_human_empty() {
        assert!(render_human(&[]).contains("no schedule records"));
    }

    #[test]
    fn test_render_json_is_parseable() {
        let records = vec![ScheduleRecord::new("Call", "01-01-25", "09:00", false)];
        let json = render_json(&records, false).unwrap();
        let back: Vec<ScheduleRecord> = serde_json::from_str(json.trim()).unwrap();
        assert_eq!(back, records);
    }
}
