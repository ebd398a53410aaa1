//! Annotation backends.
//!
//! An [`crate::Annotator`] turns a clause into tokens with
//! part-of-speech tags and lemmas plus DATE/TIME entity spans. The
//! pipeline treats any backend failure as "zero tokens, zero entities" -
//! degraded output, never a hard failure.
//!
//! One backend ships with the crate:
//!
//! - [`HeuristicAnnotator`] - zero-dependency lexicon + suffix tagging
//!   and pattern-based entity recognition. Deterministic and fast;
//!   accepts the usual heuristic error rate as a source of degraded
//!   output.
//!
//! For tests, [`crate::MockAnnotator`] returns a fixed annotation.

pub mod heuristic;

pub use heuristic::HeuristicAnnotator;
