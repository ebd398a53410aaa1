//! # sked
//!
//! Natural-language schedule extraction: one paragraph of free-form
//! text in, an ordered sequence of structured schedule records out.
//!
//! - **Segmentation**: sentences split on terminal periods, clauses
//!   split when a sentence mentions several date/time entities
//! - **Normalization**: idiomatic and numeric time phrases to `HH:MM`,
//!   relative and absolute date phrases to `DD-MM-YY`
//! - **Labeling**: a prioritized heuristic cascade derives a short
//!   event label from annotated tokens
//! - **Context**: the most recently resolved date carries forward
//!   across clauses within a paragraph
//! - **Cancellation**: detected per clause, rendered both as a boolean
//!   and a label suffix
//!
//! ## Quick start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use sked::SchedulePipeline;
//!
//! let pipeline = SchedulePipeline::default();
//! let today = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
//! let records = pipeline.process("Chemistry class at half past 3 pm.", today);
//!
//! assert_eq!(records[0].event, "Chemistry class");
//! assert_eq!(records[0].time, "15:30");
//! ```
//!
//! ## Design
//!
//! - **Trait-based annotation**: tagging and entity recognition sit
//!   behind the [`Annotator`] trait; the built-in
//!   [`HeuristicAnnotator`] is a deterministic zero-dependency backend
//! - **Graceful degradation**: unresolvable phrases fall back to
//!   carried context and documented sentinels, never errors
//! - **No hidden state**: the per-paragraph date context is a local
//!   value threaded through the clauses; one pipeline instance is safe
//!   to share across threads
//!
//! The surrounding collaborators (document store, summarizer, calendar
//! writer) are specified as traits in [`collab`] and injected by the
//! embedder.

#![warn(missing_docs)]

pub mod annotate;
pub mod collab;
mod error;
pub mod label;
pub mod normalize;
mod pipeline;
mod record;
pub mod segment;
mod token;

pub mod cli;

// =============================================================================
// Sealed Trait Pattern
// =============================================================================
//
// The Annotator trait is "sealed" - it can only be implemented by types
// in this crate. Backends rely on internal invariants (token indices
// matching span indices, deterministic output); sealing lets those be
// assumed in generic code. Tests use MockAnnotator instead of rolling
// their own implementation.

mod sealed {
    /// Sealed trait marker. Cannot be implemented outside this crate.
    pub trait Sealed {}

    impl Sealed for super::annotate::HeuristicAnnotator {}
    impl Sealed for super::MockAnnotator {}
}

/// Trait for annotation backends.
///
/// Given a clause, a backend produces tokens with part-of-speech tags
/// and lemmas plus DATE/TIME entity spans. Implementations must be
/// deterministic for identical input and free of side effects.
///
/// # Sealed Trait
///
/// This trait is **sealed** - it can only be implemented by types
/// defined in this crate. For tests, use [`MockAnnotator`].
pub trait Annotator: sealed::Sealed + Send + Sync {
    /// Annotate a clause.
    ///
    /// Callers treat an `Err` as "zero tokens, zero entities" -
    /// degraded output, not a hard failure.
    fn annotate(&self, clause: &str) -> Result<Annotation>;

    /// Backend name.
    fn name(&self) -> &'static str {
        "unknown"
    }

    /// Check whether the backend is ready.
    fn is_available(&self) -> bool {
        true
    }
}

/// A mock annotation backend for testing.
///
/// Returns a fixed annotation for every clause, or a fixed error when
/// built with [`MockAnnotator::failing`] - useful for exercising the
/// pipeline's degradation path.
///
/// # Example
///
/// ```rust
/// use sked::{Annotator, MockAnnotator};
/// use sked::{AnnotatedToken, EntityKind, EntitySpan, PartOfSpeech};
///
/// let mock = MockAnnotator::new("test-mock")
///     .with_tokens(vec![AnnotatedToken::new("standup", PartOfSpeech::Noun, "standup", 0)])
///     .with_entities(vec![EntitySpan::new("9am", EntityKind::Time, 1, 2)]);
///
/// let annotation = mock.annotate("standup 9am").unwrap();
/// assert_eq!(annotation.entities.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockAnnotator {
    name: &'static str,
    tokens: Vec<AnnotatedToken>,
    entities: Vec<EntitySpan>,
    failure: Option<&'static str>,
}

impl MockAnnotator {
    /// Create a new mock backend.
    #[must_use]
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            tokens: Vec::new(),
            entities: Vec::new(),
            failure: None,
        }
    }

    /// Create a mock backend that always fails.
    #[must_use]
    pub fn failing(message: &'static str) -> Self {
        Self {
            name: "failing-mock",
            tokens: Vec::new(),
            entities: Vec::new(),
            failure: Some(message),
        }
    }

    /// Set the tokens to return.
    #[must_use]
    pub fn with_tokens(mut self, tokens: Vec<AnnotatedToken>) -> Self {
        self.tokens = tokens;
        self
    }

    /// Set the entity spans to return.
    #[must_use]
    pub fn with_entities(mut self, entities: Vec<EntitySpan>) -> Self {
        self.entities = entities;
        self
    }
}

impl Annotator for MockAnnotator {
    fn annotate(&self, _clause: &str) -> Result<Annotation> {
        if let Some(message) = self.failure {
            return Err(Error::annotation(message));
        }
        Ok(Annotation {
            tokens: self.tokens.clone(),
            entities: self.entities.clone(),
        })
    }

    fn name(&self) -> &'static str {
        self.name
    }
}

// Re-exports
pub use annotate::HeuristicAnnotator;
pub use error::{Error, Result};
pub use label::{LabelExtractor, NO_EVENT};
pub use normalize::{normalize_date, normalize_time, CanonicalDate};
pub use pipeline::{ParseContext, SchedulePipeline};
pub use record::{ScheduleRecord, NO_DATE, NO_TIME, UNKNOWN_EVENT};
pub use token::{AnnotatedToken, Annotation, EntityKind, EntitySpan, PartOfSpeech};

pub mod prelude {
    //! Commonly used items, re-exported for convenience.
    //!
    //! ```rust
    //! use sked::prelude::*;
    //!
    //! let pipeline = SchedulePipeline::default();
    //! let records = pipeline.process_today("Standup at 9:15 am.");
    //! assert_eq!(records[0].time, "09:15");
    //! ```
    pub use crate::annotate::HeuristicAnnotator;
    pub use crate::collab::{CalendarEntry, CalendarWriter, DocumentStore, Summarizer};
    pub use crate::error::{Error, Result};
    pub use crate::normalize::{normalize_date, normalize_time, CanonicalDate};
    pub use crate::record::ScheduleRecord;
    pub use crate::token::{AnnotatedToken, Annotation, EntityKind, EntitySpan, PartOfSpeech};
    pub use crate::{Annotator, MockAnnotator, SchedulePipeline};
}
