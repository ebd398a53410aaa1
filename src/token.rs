//! Token and entity-span types produced by annotation backends.

use serde::{Deserialize, Serialize};

/// Coarse part-of-speech classification.
///
/// A deliberately small tag set: the label extractor only distinguishes
/// nouns, verbs, adjectives, adverbs, prepositions and number-like
/// tokens. Everything else collapses into [`PartOfSpeech::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartOfSpeech {
    /// Noun (NOUN)
    Noun,
    /// Verb (VERB)
    Verb,
    /// Adjective (ADJ)
    Adj,
    /// Adverb (ADV)
    Adv,
    /// Adposition/preposition (ADP)
    Adp,
    /// Numeral or number-like token (NUM)
    Num,
    /// Anything else (determiners, pronouns, auxiliaries, particles)
    Other,
}

impl PartOfSpeech {
    /// Convert to the standard UPOS-style label string.
    #[must_use]
    pub fn as_label(&self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "NOUN",
            PartOfSpeech::Verb => "VERB",
            PartOfSpeech::Adj => "ADJ",
            PartOfSpeech::Adv => "ADV",
            PartOfSpeech::Adp => "ADP",
            PartOfSpeech::Num => "NUM",
            PartOfSpeech::Other => "X",
        }
    }

    /// Parse from a label string. Unknown labels map to `Other`.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label.to_uppercase().as_str() {
            "NOUN" | "PROPN" => PartOfSpeech::Noun,
            "VERB" | "AUX" => PartOfSpeech::Verb,
            "ADJ" => PartOfSpeech::Adj,
            "ADV" => PartOfSpeech::Adv,
            "ADP" | "PREP" => PartOfSpeech::Adp,
            "NUM" => PartOfSpeech::Num,
            _ => PartOfSpeech::Other,
        }
    }
}

impl std::fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_label())
    }
}

/// A single token of a clause with its annotations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnotatedToken {
    /// Surface form as it appears in the clause.
    pub text: String,
    /// Part-of-speech tag.
    pub pos: PartOfSpeech,
    /// Lemma (base form for verbs, lower-cased surface otherwise).
    pub lemma: String,
    /// Position in the clause (0-based token index).
    pub index: usize,
}

impl AnnotatedToken {
    /// Create a new annotated token.
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        pos: PartOfSpeech,
        lemma: impl Into<String>,
        index: usize,
    ) -> Self {
        Self {
            text: text.into(),
            pos,
            lemma: lemma.into(),
            index,
        }
    }
}

/// Entity label: the recognizers only emit DATE and TIME spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    /// Calendar date expression ("next Monday", "March 5th")
    Date,
    /// Clock time expression ("3pm", "half past 3")
    Time,
}

impl EntityKind {
    /// Convert to the standard label string.
    #[must_use]
    pub fn as_label(&self) -> &'static str {
        match self {
            EntityKind::Date => "DATE",
            EntityKind::Time => "TIME",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_label())
    }
}

/// A recognized DATE or TIME span over contiguous tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntitySpan {
    /// Surface text of the span as matched in the clause.
    pub text: String,
    /// DATE or TIME.
    pub kind: EntityKind,
    /// First token index covered by the span.
    pub start: usize,
    /// One past the last token index covered by the span.
    pub end: usize,
}

impl EntitySpan {
    /// Create a new entity span.
    #[must_use]
    pub fn new(text: impl Into<String>, kind: EntityKind, start: usize, end: usize) -> Self {
        Self {
            text: text.into(),
            kind,
            start,
            end,
        }
    }

    /// Check whether a token index falls inside this span.
    #[must_use]
    pub fn covers(&self, index: usize) -> bool {
        index >= self.start && index < self.end
    }

    /// Check if this span overlaps another.
    #[must_use]
    pub fn overlaps(&self, other: &EntitySpan) -> bool {
        !(self.end <= other.start || other.end <= self.start)
    }
}

/// Output of one annotation pass over a clause.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Annotation {
    /// Tokens in clause order.
    pub tokens: Vec<AnnotatedToken>,
    /// Recognized entity spans in order of appearance.
    pub entities: Vec<EntitySpan>,
}

impl Annotation {
    /// The degraded "nothing recognized" annotation.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// DATE spans in order of appearance.
    pub fn dates(&self) -> impl Iterator<Item = &EntitySpan> {
        self.entities.iter().filter(|e| e.kind == EntityKind::Date)
    }

    /// TIME spans in order of appearance.
    pub fn times(&self) -> impl Iterator<Item = &EntitySpan> {
        self.entities.iter().filter(|e| e.kind == EntityKind::Time)
    }

    /// Check whether a token index is covered by any entity span.
    #[must_use]
    pub fn in_entity(&self, index: usize) -> bool {
        self.entities.iter().any(|e| e.covers(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pos_label_roundtrip() {
        let tags = [
            PartOfSpeech::Noun,
            PartOfSpeech::Verb,
            PartOfSpeech::Adj,
            PartOfSpeech::Adv,
            PartOfSpeech::Adp,
            PartOfSpeech::Num,
        ];
        for t in tags {
            assert_eq!(t, PartOfSpeech::from_label(t.as_label()));
        }
    }

    #[test]
    fn test_span_covers() {
        let span = EntitySpan::new("next Monday", EntityKind::Date, 3, 5);
        assert!(!span.covers(2));
        assert!(span.covers(3));
        assert!(span.covers(4));
        assert!(!span.covers(5));
    }

    #[test]
    fn test_span_overlap() {
        let a = EntitySpan::new("3pm", EntityKind::Time, 2, 3);
        let b = EntitySpan::new("Monday", EntityKind::Date, 3, 4);
        let c = EntitySpan::new("Monday at 3pm", EntityKind::Date, 1, 4);
        assert!(!a.overlaps(&b));
        assert!(a.overlaps(&c));
        assert!(c.overlaps(&b));
    }

    #[test]
    fn test_annotation_filters() {
        let ann = Annotation {
            tokens: vec![],
            entities: vec![
                EntitySpan::new("Friday", EntityKind::Date, 0, 1),
                EntitySpan::new("2:30 pm", EntityKind::Time, 2, 4),
            ],
        };
        assert_eq!(ann.dates().count(), 1);
        assert_eq!(ann.times().count(), 1);
        assert!(ann.in_entity(0));
        assert!(!ann.in_entity(1));
        assert!(ann.in_entity(3));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn overlap_is_symmetric(
            s1 in 0usize..50,
            len1 in 1usize..10,
            s2 in 0usize..50,
            len2 in 1usize..10,
        ) {
            let a = EntitySpan::new("a", EntityKind::Date, s1, s1 + len1);
            let b = EntitySpan::new("b", EntityKind::Time, s2, s2 + len2);
            prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
        }

        #[test]
        fn covers_matches_range(s in 0usize..50, len in 1usize..10, i in 0usize..80) {
            let span = EntitySpan::new("x", EntityKind::Time, s, s + len);
            prop_assert_eq!(span.covers(i), i >= s && i < s + len);
        }
    }
}
