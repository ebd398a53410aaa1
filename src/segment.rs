//! Sentence splitting and clause segmentation.
//!
//! Sentences come from splitting the paragraph on the period character.
//! A sentence mentioning two or more DATE/TIME entities is split further
//! on commas and the standalone word "and", so two genuinely distinct
//! events are not merged into one record. A sentence that merely
//! mentions a start and an end time may be over-split - an accepted
//! heuristic trade-off.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::token::Annotation;

static CLAUSE_BOUNDARY: Lazy<Regex> = Lazy::new(|| Regex::new(r",|\band\b").unwrap());

/// Split a paragraph into sentences on terminal periods, re-appending
/// the period and discarding empty fragments.
#[must_use]
pub fn split_sentences(paragraph: &str) -> Vec<String> {
    paragraph
        .split('.')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| format!("{s}."))
        .collect()
}

/// Segment a sentence into independently-processable clauses.
///
/// The caller provides the sentence-level annotation so entity
/// recognition runs once. Returns at least one clause.
#[must_use]
pub fn segment(sentence: &str, annotation: &Annotation) -> Vec<String> {
    if annotation.entities.len() >= 2 {
        let parts: Vec<String> = CLAUSE_BOUNDARY
            .split(sentence)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();
        if !parts.is_empty() {
            log::debug!("segmented into {} clauses: {:?}", parts.len(), parts);
            return parts;
        }
    }
    vec![sentence.trim().to_string()]
}
