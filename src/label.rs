//! Event-label extraction via a prioritized heuristic cascade.
//!
//! Rules are tried in order; the first applicable one wins:
//!
//! 1. Priority dictionary - a fixed action-word to activity-noun map,
//!    checked as substrings of the lower-cased clause.
//! 2. Verb lemma match against the same dictionary.
//! 3. Syntactic templates over the token sequence.
//! 4. All nouns, space-joined.
//! 5. First verb, converted to a noun form or a synthesized gerund.
//! 6. The clause text unchanged.
//!
//! Post-processing strips stray am/pm markers, collapses results that
//! are nothing but adjectives and adverbs into the "No event" sentinel,
//! and capitalizes the first letter.

use crate::annotate::heuristic::tag_word;
use crate::token::{Annotation, PartOfSpeech};

/// Sentinel label for clauses with no extractable event text.
pub const NO_EVENT: &str = "No event";

/// Fixed action-word to activity-noun map. Checked in order, so the
/// slice keeps iteration deterministic. Generic nouns ("class",
/// "session") are deliberately absent: descriptive noun-noun labels
/// like "Chemistry class" should survive to the template rules.
const PRIORITY_WORDS: &[(&str, &str)] = &[
    ("meet", "meeting"),
    ("submit", "submission"),
    ("present", "presentation"),
    ("deadline", "deadline"),
    ("plan", "planning"),
    ("report", "report"),
    ("discuss", "discussion"),
    ("launch", "launch"),
    ("lecture", "lecture"),
    ("workshop", "workshop"),
    ("interview", "interview"),
    ("review", "review"),
    ("conference", "conference"),
];

/// Noun forms for the gerund fallback. A verb outside this table gets a
/// synthesized "-ing" form instead.
const DERIVED_NOUNS: &[(&str, &str)] = &[
    ("discuss", "discussion"),
    ("submit", "submission"),
    ("present", "presentation"),
    ("decide", "decision"),
    ("celebrate", "celebration"),
    ("organize", "organization"),
    ("prepare", "preparation"),
    ("invite", "invitation"),
    ("arrive", "arrival"),
    ("deliver", "delivery"),
];

/// Stateless event-label extractor.
///
/// Holds no mutable state - the rule tables are compile-time constants,
/// so one instance can be shared by reference across invocations.
#[derive(Debug, Clone, Copy, Default)]
pub struct LabelExtractor;

impl LabelExtractor {
    /// Create a new extractor.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Derive a short human-readable label for the clause.
    #[must_use]
    pub fn extract(&self, clause: &str, annotation: &Annotation) -> String {
        let raw = self
            .priority_match(clause)
            .or_else(|| self.lemma_match(annotation))
            .or_else(|| self.template_match(annotation))
            .or_else(|| self.all_nouns(annotation))
            .or_else(|| self.gerund_fallback(annotation))
            .unwrap_or_else(|| clause.trim().trim_end_matches('.').trim().to_string());

        postprocess(raw, annotation)
    }

    /// Rule 1: any dictionary key occurring as a substring of the
    /// lower-cased clause returns its mapped noun immediately.
    fn priority_match(&self, clause: &str) -> Option<String> {
        let lowered = clause.to_lowercase();
        PRIORITY_WORDS
            .iter()
            .find(|(word, _)| lowered.contains(word))
            .map(|(_, noun)| (*noun).to_string())
    }

    /// Rule 2: a verb token whose base-form lemma is a dictionary key.
    fn lemma_match(&self, annotation: &Annotation) -> Option<String> {
        annotation
            .tokens
            .iter()
            .filter(|t| t.pos == PartOfSpeech::Verb)
            .find_map(|t| {
                PRIORITY_WORDS
                    .iter()
                    .find(|(word, _)| *word == t.lemma)
                    .map(|(_, noun)| (*noun).to_string())
            })
    }

    /// Rule 3: first contiguous match of a syntactic template, in
    /// template priority order. Tokens inside DATE/TIME spans and
    /// number-like tokens never participate.
    fn template_match(&self, annotation: &Annotation) -> Option<String> {
        use PartOfSpeech::{Adj, Adp, Noun, Verb};

        let eligible: Vec<Option<PartOfSpeech>> = annotation
            .tokens
            .iter()
            .map(|t| {
                if annotation.in_entity(t.index) || t.pos == PartOfSpeech::Num {
                    None
                } else {
                    Some(t.pos)
                }
            })
            .collect();

        let templates: &[&[TemplateSlot]] = &[
            &[TemplateSlot::Required(Noun), TemplateSlot::Optional(Noun)],
            &[TemplateSlot::Required(Adj), TemplateSlot::Required(Noun)],
            &[TemplateSlot::Required(Verb), TemplateSlot::Optional(Noun)],
            &[
                TemplateSlot::Required(Verb),
                TemplateSlot::Optional(Adp),
                TemplateSlot::Required(Noun),
            ],
            &[
                TemplateSlot::Required(Noun),
                TemplateSlot::Required(Adp),
                TemplateSlot::Required(Noun),
            ],
        ];

        for template in templates {
            for start in 0..eligible.len() {
                if let Some(end) = match_template(template, &eligible, start) {
                    let words: Vec<&str> = annotation.tokens[start..end]
                        .iter()
                        .map(|t| t.text.as_str())
                        .collect();
                    return Some(words.join(" "));
                }
            }
        }

        None
    }

    /// Rule 4: every noun outside entity spans, space-joined.
    fn all_nouns(&self, annotation: &Annotation) -> Option<String> {
        let nouns: Vec<&str> = annotation
            .tokens
            .iter()
            .filter(|t| t.pos == PartOfSpeech::Noun && !annotation.in_entity(t.index))
            .map(|t| t.text.as_str())
            .collect();
        if nouns.is_empty() {
            None
        } else {
            Some(nouns.join(" "))
        }
    }

    /// Rule 5: the first verb, as a derived noun form when one exists,
    /// otherwise a synthesized gerund.
    fn gerund_fallback(&self, annotation: &Annotation) -> Option<String> {
        let verb = annotation
            .tokens
            .iter()
            .find(|t| t.pos == PartOfSpeech::Verb)?;
        let derived = DERIVED_NOUNS
            .iter()
            .find(|(base, _)| *base == verb.lemma)
            .map(|(_, noun)| (*noun).to_string());
        Some(derived.unwrap_or_else(|| format!("{}ing", verb.lemma)))
    }
}

#[derive(Debug, Clone, Copy)]
enum TemplateSlot {
    Required(PartOfSpeech),
    Optional(PartOfSpeech),
}

/// Try to match a template at `start`. Returns the exclusive end index
/// of the matched span. Every consumed token must be eligible.
fn match_template(
    template: &[TemplateSlot],
    eligible: &[Option<PartOfSpeech>],
    start: usize,
) -> Option<usize> {
    let mut pos = start;
    for slot in template {
        match slot {
            TemplateSlot::Required(tag) => {
                if eligible.get(pos).copied().flatten() != Some(*tag) {
                    return None;
                }
                pos += 1;
            }
            TemplateSlot::Optional(tag) => {
                if eligible.get(pos).copied().flatten() == Some(*tag) {
                    pos += 1;
                }
            }
        }
    }
    Some(pos)
}

/// Strip am/pm markers, collapse adjective/adverb-only results into the
/// sentinel, capitalize the first letter.
fn postprocess(raw: String, annotation: &Annotation) -> String {
    let cleaned = raw.replace(" am", "").replace(" pm", "");
    let cleaned = cleaned.trim().to_string();
    if cleaned.is_empty() {
        return NO_EVENT.to_string();
    }

    let only_modifiers = cleaned.split_whitespace().all(|word| {
        let pos = annotation
            .tokens
            .iter()
            .find(|t| t.text.eq_ignore_ascii_case(word))
            .map(|t| t.pos)
            .unwrap_or_else(|| tag_word(word));
        matches!(pos, PartOfSpeech::Adj | PartOfSpeech::Adv)
    });
    if only_modifiers {
        return NO_EVENT.to_string();
    }

    capitalize(&cleaned)
}

/// Detect a cancellation marker in the clause (either spelling).
#[must_use]
pub fn is_cancelled(clause: &str) -> bool {
    let lowered = clause.to_lowercase();
    lowered.contains("cancelled") || lowered.contains("canceled")
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotate::HeuristicAnnotator;
    use crate::Annotator;

    fn extract(clause: &str) -> String {
        let annotation = HeuristicAnnotator::new().annotate(clause).unwrap();
        LabelExtractor::new().extract(clause, &annotation)
    }

    #[test]
    fn test_priority_dictionary_wins() {
        assert_eq!(extract("Meeting with Bob next Monday at 3pm."), "Meeting");
        assert_eq!(extract("Submit the report by Friday."), "Submission");
        assert_eq!(extract("We should discuss the budget."), "Discussion");
    }

    #[test]
    fn test_noun_noun_template() {
        assert_eq!(extract("Chemistry class at half past 3 pm."), "Chemistry class");
    }

    #[test]
    fn test_noun_pair_skips_entity_tokens() {
        // "tomorrow" sits in a DATE span and never joins the label.
        let label = extract("Budget numbers tomorrow.");
        assert_eq!(label, "Budget numbers");
    }

    #[test]
    fn test_lone_verb_template() {
        let annotation = HeuristicAnnotator::new().annotate("Will sync later.").unwrap();
        let label = LabelExtractor::new().extract("Will sync later.", &annotation);
        assert_eq!(label, "Sync");
    }

    #[test]
    fn test_all_nouns_rule_directly() {
        use crate::token::{AnnotatedToken, Annotation, PartOfSpeech};
        let annotation = Annotation {
            tokens: vec![
                AnnotatedToken::new("team", PartOfSpeech::Noun, "team", 0),
                AnnotatedToken::new("offsite", PartOfSpeech::Noun, "offsite", 1),
            ],
            entities: vec![],
        };
        assert_eq!(
            LabelExtractor::new().all_nouns(&annotation).as_deref(),
            Some("team offsite")
        );
    }

    #[test]
    fn test_gerund_rule_directly() {
        use crate::token::{AnnotatedToken, Annotation, PartOfSpeech};
        let annotation = Annotation {
            tokens: vec![AnnotatedToken::new("discussing", PartOfSpeech::Verb, "discuss", 0)],
            entities: vec![],
        };
        let extractor = LabelExtractor::new();
        // Derived noun form when the table has one.
        assert_eq!(
            extractor.gerund_fallback(&annotation).as_deref(),
            Some("discussion")
        );
        // Synthesized gerund otherwise.
        let annotation = Annotation {
            tokens: vec![AnnotatedToken::new("go", PartOfSpeech::Verb, "go", 0)],
            entities: vec![],
        };
        assert_eq!(extractor.gerund_fallback(&annotation).as_deref(), Some("going"));
    }

    #[test]
    fn test_adjective_adverb_residue_is_no_event() {
        assert_eq!(extract("Quickly walked outside."), NO_EVENT);
    }

    #[test]
    fn test_clause_text_final_fallback() {
        // No nouns, verbs, or dictionary hits - the clause itself comes
        // back, capitalized and without its period.
        let label = extract("The they of.");
        assert_eq!(label, "The they of");
    }

    #[test]
    fn test_capitalization() {
        assert_eq!(extract("lecture on databases."), "Lecture");
    }

    #[test]
    fn test_cancellation_detection() {
        assert!(is_cancelled("The meeting is cancelled."));
        assert!(is_cancelled("Canceled: standup"));
        assert!(!is_cancelled("Cancellation policy review."));
    }
}
