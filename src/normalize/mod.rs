//! Normalization grammars for raw date and time phrases.
//!
//! Two independent grammars, each deterministic and total:
//!
//! - [`time::normalize_time`] maps idiomatic or numeric time phrases to
//!   zero-padded 24-hour `HH:MM`, returning the input unchanged when no
//!   grammar matches.
//! - [`date::normalize_date`] maps relative, weekday and absolute date
//!   phrases to a [`date::CanonicalDate`] (`DD-MM-YY`), returning `None`
//!   when nothing resolves so the caller can fall back to carried
//!   context.

pub mod date;
pub mod time;

pub use date::{normalize_date, CanonicalDate};
pub use time::normalize_time;
