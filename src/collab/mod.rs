//! External collaborator contracts.
//!
//! The extraction core is pure; everything that talks to the outside
//! world is specified here at its interface and injected by the
//! embedder:
//!
//! - [`store::DocumentStore`] - read-only source-text fragments merged
//!   ahead of caller-provided input.
//! - [`summary::Summarizer`] - abstractive text shortening with derived
//!   length bounds.
//! - [`calendar::CalendarWriter`] - pushes resolved records into an
//!   external calendar as [`calendar::CalendarEntry`] values.
//!
//! None of these traits has a network-backed implementation in this
//! crate; the contracts plus their pure helper logic (deduplication,
//! length-bound math, record conversion) are the deliverable.

pub mod calendar;
pub mod store;
pub mod summary;

pub use calendar::{CalendarEntry, CalendarWriter};
pub use store::{combine_with_stored, DocumentStore, InMemoryStore};
pub use summary::{LengthBounds, Summarizer};
