//! Heuristic annotation - lexicon and suffix tagging with pattern-based
//! DATE/TIME recognition.
//!
//! A zero-dependency stand-in for a full tagging model. The goal is not
//! linguistic completeness but deterministic, cheap annotations that are
//! right often enough for the extraction cascade downstream:
//!
//! 1. Closed-class words (prepositions, determiners, auxiliaries) are
//!    free features - a small fixed lexicon covers them.
//! 2. Derivational suffixes carry most of the open-class signal
//!    (`-ly` adverbs, `-ful`/`-ive`/`-ous` adjectives).
//! 3. Verbs are claimed only from a small action-verb lexicon (base or
//!    inflected); `-ed` forms outside it read as adjectival participles.
//! 4. Everything left is a noun - the safest default for event text.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::token::{AnnotatedToken, Annotation, EntityKind, EntitySpan, PartOfSpeech};
use crate::{Annotator, Result};

/// Heuristic annotation backend.
///
/// Deterministic for identical input, no side effects, always
/// available. Recognition errors (wrong span boundaries, missed
/// entities) are an accepted source of degraded output.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicAnnotator;

impl HeuristicAnnotator {
    /// Create a new heuristic annotator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

// =============================================================================
// Lexicons (small, fixed cost)
// =============================================================================

const PREPOSITIONS: &[&str] = &[
    "at", "on", "in", "by", "to", "for", "with", "from", "of", "about", "during", "until",
    "till", "before", "after", "near", "over", "under", "between", "into", "through", "past",
];

// Determiners, pronouns, auxiliaries, conjunctions, time-of-day markers.
const CLOSED_CLASS: &[&str] = &[
    "the", "a", "an", "this", "that", "these", "those", "my", "your", "his", "her", "its",
    "our", "their", "and", "or", "but", "so", "if", "as", "am", "pm", "is", "are", "was",
    "were", "be", "been", "being", "has", "have", "had", "do", "does", "did", "will", "shall",
    "would", "should", "can", "could", "may", "might", "must", "not", "no", "it", "he", "she",
    "we", "they", "you", "i", "me", "him", "us", "them", "there", "who", "what", "when",
    "where", "why", "how", "which", "due", "all", "each", "every", "some", "any",
];

const COMMON_ADVERBS: &[&str] = &[
    "quickly", "slowly", "soon", "later", "early", "late", "very", "really", "quite", "too",
    "again", "already", "just", "now", "then", "here", "outside", "inside", "away", "maybe",
    "perhaps", "also", "please", "tomorrow", "today", "yesterday", "tonight", "definitely",
    "probably", "urgently",
];

const COMMON_ADJECTIVES: &[&str] = &[
    "new", "big", "small", "important", "urgent", "quick", "good", "great", "annual",
    "weekly", "daily", "monthly", "final", "next", "last", "first", "free", "busy",
    "available", "main", "short", "long", "brief",
];

// Lexical nouns ending in -ing that must not be read as gerunds.
const ING_NOUNS: &[&str] = &[
    "meeting", "briefing", "training", "morning", "evening", "wedding", "building", "opening",
];

// Action verbs the tagger is allowed to claim, in base form. Inflected
// forms are mapped back here before the check.
const ACTION_VERBS: &[&str] = &[
    "meet", "discuss", "submit", "present", "schedule", "plan", "attend", "join", "review",
    "call", "prepare", "finish", "start", "begin", "launch", "organize", "arrange", "cancel",
    "postpone", "remind", "send", "email", "deliver", "complete", "visit", "host", "teach",
    "give", "take", "go", "come", "leave", "arrive", "move", "hold", "catch", "set", "get",
    "make", "write", "read", "sync", "confirm", "reschedule",
];

// Irregular past forms of the action-verb lexicon.
const IRREGULAR_PAST: &[(&str, &str)] = &[
    ("met", "meet"),
    ("taught", "teach"),
    ("held", "hold"),
    ("went", "go"),
    ("came", "come"),
    ("gave", "give"),
    ("took", "take"),
    ("left", "leave"),
    ("got", "get"),
    ("made", "make"),
    ("wrote", "write"),
    ("sent", "send"),
    ("caught", "catch"),
    ("began", "begin"),
];

const ADJ_SUFFIXES: &[&str] = &["ful", "ous", "ive", "able", "ible", "ish", "ic", "ary"];

// =============================================================================
// Word-level analysis
// =============================================================================

/// Tag a single word. Shared with the label extractor's post-processing
/// step, which needs to classify words that may not appear in the
/// clause (dictionary outputs like "submission").
pub(crate) fn tag_word(word: &str) -> PartOfSpeech {
    analyze_word(word).0
}

/// Tag a word and compute its lemma (verb base form for verbs,
/// lower-cased surface otherwise).
pub(crate) fn analyze_word(word: &str) -> (PartOfSpeech, String) {
    let lower = word.to_lowercase();

    if CLOSED_CLASS.contains(&lower.as_str()) {
        return (PartOfSpeech::Other, lower);
    }
    if PREPOSITIONS.contains(&lower.as_str()) {
        return (PartOfSpeech::Adp, lower);
    }
    if lower.starts_with(|c: char| c.is_ascii_digit()) {
        return (PartOfSpeech::Num, lower);
    }
    if COMMON_ADVERBS.contains(&lower.as_str()) || (lower.len() > 3 && lower.ends_with("ly")) {
        return (PartOfSpeech::Adv, lower);
    }
    if ING_NOUNS.contains(&lower.as_str()) {
        return (PartOfSpeech::Noun, lower);
    }
    if let Some(base) = verb_base(&lower) {
        return (PartOfSpeech::Verb, base);
    }
    if COMMON_ADJECTIVES.contains(&lower.as_str())
        || ADJ_SUFFIXES.iter().any(|s| lower.ends_with(s))
        || (lower.len() > 3 && lower.ends_with("ed"))
    {
        return (PartOfSpeech::Adj, lower);
    }

    (PartOfSpeech::Noun, lower)
}

/// Map a lower-cased word to its base form when that base is a known
/// action verb. Returns `None` for everything else - the tagger never
/// claims verbs outside the lexicon.
pub(crate) fn verb_base(lower: &str) -> Option<String> {
    if ACTION_VERBS.contains(&lower) {
        return Some(lower.to_string());
    }
    if let Some((_, base)) = IRREGULAR_PAST.iter().find(|(past, _)| *past == lower) {
        return Some((*base).to_string());
    }

    for suffix in ["ing", "ed", "es", "s"] {
        if let Some(stem) = lower.strip_suffix(suffix) {
            if stem.len() < 2 {
                continue;
            }
            if ACTION_VERBS.contains(&stem) {
                return Some(stem.to_string());
            }
            // Doubled final consonant: planning -> plan.
            let bytes = stem.as_bytes();
            if bytes.len() >= 2 && bytes[bytes.len() - 1] == bytes[bytes.len() - 2] {
                let undoubled = &stem[..stem.len() - 1];
                if ACTION_VERBS.contains(&undoubled) {
                    return Some(undoubled.to_string());
                }
            }
            // Dropped final e: arranging -> arrange.
            let restored = format!("{stem}e");
            if ACTION_VERBS.contains(&restored.as_str()) {
                return Some(restored);
            }
        }
    }

    None
}

// =============================================================================
// Tokenization
// =============================================================================

#[derive(Debug, Clone, Copy)]
struct RawToken<'a> {
    text: &'a str,
    start: usize,
    end: usize,
}

/// Split on whitespace, then trim edge punctuation. Word-internal
/// punctuation (the colon in "2:30", the apostrophe in "o'clock")
/// survives; byte offsets refer to the trimmed region.
fn tokenize(clause: &str) -> Vec<RawToken<'_>> {
    let mut tokens = Vec::new();
    let mut word_start = None;

    for (i, c) in clause.char_indices() {
        if c.is_whitespace() {
            if let Some(start) = word_start.take() {
                push_trimmed(clause, start, i, &mut tokens);
            }
        } else if word_start.is_none() {
            word_start = Some(i);
        }
    }
    if let Some(start) = word_start {
        push_trimmed(clause, start, clause.len(), &mut tokens);
    }

    tokens
}

fn push_trimmed<'a>(clause: &'a str, start: usize, end: usize, out: &mut Vec<RawToken<'a>>) {
    let word = &clause[start..end];
    let trimmed_front = word.trim_start_matches(|c: char| !c.is_alphanumeric());
    let lead = word.len() - trimmed_front.len();
    let trimmed = trimmed_front.trim_end_matches(|c: char| !c.is_alphanumeric());
    if trimmed.is_empty() {
        return;
    }
    out.push(RawToken {
        text: trimmed,
        start: start + lead,
        end: start + lead + trimmed.len(),
    });
}

// =============================================================================
// Entity recognition
// =============================================================================

static DATE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    const MONTHS: &str =
        "january|february|march|april|may|june|july|august|september|october|november|december";
    vec![
        Regex::new(r"(?i)\b(?:next week|next month|day after tomorrow|tomorrow|today|tonight|yesterday)\b").unwrap(),
        Regex::new(r"(?i)\b(?:(?:next|this|coming)\s+)?(?:monday|tuesday|wednesday|thursday|friday|saturday|sunday)\b").unwrap(),
        Regex::new(&format!(
            r"(?i)\b(?:{MONTHS})\s+\d{{1,2}}(?:st|nd|rd|th)?(?:,?\s*\d{{4}})?\b"
        ))
        .unwrap(),
        Regex::new(&format!(
            r"(?i)\b\d{{1,2}}(?:st|nd|rd|th)?\s+(?:of\s+)?(?:{MONTHS})(?:\s+\d{{4}})?\b"
        ))
        .unwrap(),
        Regex::new(r"(?i)\bthe\s+\d{1,2}(?:st|nd|rd|th)\b").unwrap(),
        Regex::new(r"\b\d{2}-\d{2}-\d{2}\b").unwrap(),
        Regex::new(r"\b\d{4}-\d{2}-\d{2}\b").unwrap(),
    ]
});

static TIME_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"(?i)\b(?:half past|quarter past|quarter to)\s+\d{1,2}\s*(?:am|pm)?\b")
            .unwrap(),
        Regex::new(r"(?i)\b\d{1,2}\s*o'?clock(?:\s*(?:am|pm))?\b").unwrap(),
        Regex::new(r"(?i)\b\d{1,2}:\d{2}\s*(?:am|pm)?\b").unwrap(),
        Regex::new(r"(?i)\b\d{1,2}\s*(?:am|pm)\b").unwrap(),
    ]
});

/// Run the pattern tables in priority order; the first pattern to claim
/// a byte range wins, later overlapping matches are dropped.
fn recognize(clause: &str, tokens: &[RawToken<'_>]) -> Vec<EntitySpan> {
    let mut claimed: Vec<(usize, usize, EntityKind)> = Vec::new();

    for (patterns, kind) in [
        (&*DATE_PATTERNS, EntityKind::Date),
        (&*TIME_PATTERNS, EntityKind::Time),
    ] {
        for pattern in patterns {
            for m in pattern.find_iter(clause) {
                let overlaps = claimed
                    .iter()
                    .any(|(s, e, _)| m.start() < *e && m.end() > *s);
                if !overlaps {
                    claimed.push((m.start(), m.end(), kind));
                }
            }
        }
    }

    claimed.sort_by_key(|(start, _, _)| *start);

    let mut spans = Vec::new();
    for (start, end, kind) in claimed {
        let covered: Vec<usize> = tokens
            .iter()
            .enumerate()
            .filter(|(_, t)| t.start < end && t.end > start)
            .map(|(i, _)| i)
            .collect();
        if let (Some(&first), Some(&last)) = (covered.first(), covered.last()) {
            spans.push(EntitySpan::new(
                clause[start..end].to_string(),
                kind,
                first,
                last + 1,
            ));
        }
    }

    spans
}

impl Annotator for HeuristicAnnotator {
    fn annotate(&self, clause: &str) -> Result<Annotation> {
        if clause.trim().is_empty() {
            return Ok(Annotation::empty());
        }

        let raw = tokenize(clause);
        let tokens = raw
            .iter()
            .enumerate()
            .map(|(i, t)| {
                let (pos, lemma) = analyze_word(t.text);
                AnnotatedToken::new(t.text, pos, lemma, i)
            })
            .collect();
        let entities = recognize(clause, &raw);

        Ok(Annotation { tokens, entities })
    }

    fn name(&self) -> &'static str {
        "heuristic"
    }

    fn is_available(&self) -> bool {
        true
    }
}
