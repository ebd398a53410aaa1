//! Shared CLI helpers: input resolution and anchor-date parsing.

use std::io::Read;

use chrono::NaiveDate;

use crate::{Error, Result};

/// Resolve the input text: inline argument, file, or stdin.
pub fn get_input_text(text: Option<&str>, file: Option<&str>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text.to_string());
    }
    if let Some(path) = file {
        return Ok(std::fs::read_to_string(path)?);
    }
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    if buffer.trim().is_empty() {
        return Err(Error::invalid_input(
            "no text provided (pass TEXT, --file, or pipe to stdin)",
        ));
    }
    Ok(buffer)
}

/// Parse a reference date in `DD-MM-YY` or `YYYY-MM-DD` form.
pub fn parse_anchor(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%d-%m-%y")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"))
        .map_err(|_| {
            Error::invalid_input(format!(
                "invalid --today value {raw:?} (expected DD-MM-YY or YYYY-MM-DD)"
            ))
        })
}
