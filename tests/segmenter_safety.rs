//! Segmenter safety: sentences with at most one DATE/TIME entity are
//! never split; sentences with two or more split only on commas and
//! the standalone word "and".

use sked::segment::segment;
use sked::{Annotator, HeuristicAnnotator};

fn clauses(sentence: &str) -> Vec<String> {
    let annotation = HeuristicAnnotator::new().annotate(sentence).unwrap();
    segment(sentence, &annotation)
}

#[test]
fn zero_entity_sentences_stay_whole() {
    for sentence in [
        "We should talk, and soon.",
        "Budget review, planning, and sign-off.",
        "Nothing here.",
    ] {
        assert_eq!(clauses(sentence), vec![sentence.to_string()], "{sentence}");
    }
}

#[test]
fn single_entity_sentences_stay_whole() {
    for sentence in [
        "Meeting at 3pm, with snacks and drinks.",
        "Submit the report by Friday, please.",
        "Lunch and learn tomorrow.",
    ] {
        assert_eq!(clauses(sentence), vec![sentence.to_string()], "{sentence}");
    }
}

#[test]
fn multi_entity_sentences_split_only_on_boundaries() {
    let parts = clauses("Standup at 9am, lunch at noon and retro at 4pm.");
    assert_eq!(
        parts,
        vec!["Standup at 9am", "lunch at noon", "retro at 4pm."]
    );
}

#[test]
fn embedded_and_is_not_a_boundary() {
    // "Sandwich" and "brand" contain "and" without word boundaries.
    let parts = clauses("Sandwich tasting at 2pm and brand review at 4pm.");
    assert_eq!(
        parts,
        vec!["Sandwich tasting at 2pm", "brand review at 4pm."]
    );
}

#[test]
fn split_fragments_are_trimmed_and_nonempty() {
    let parts = clauses("Meeting on Friday, , and review at 4pm.");
    assert!(!parts.is_empty());
    for part in &parts {
        assert_eq!(part, part.trim());
        assert!(!part.is_empty());
    }
}
