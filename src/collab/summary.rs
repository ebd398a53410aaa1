//! Summarization contract: independent text shortening consumed by a
//! separate endpoint, not part of the extraction core.

use crate::Result;

/// Word-count bounds handed to a summarization backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthBounds {
    /// Minimum summary length in words.
    pub min_words: usize,
    /// Maximum summary length in words.
    pub max_words: usize,
}

impl LengthBounds {
    /// Derive bounds from the input text: the target is 40% of the
    /// input word count, the ceiling never drops below 50 words and the
    /// floor never below 20.
    #[must_use]
    pub fn for_text(text: &str) -> Self {
        let words = text.split_whitespace().count();
        let target = words * 2 / 5;
        Self {
            max_words: target.max(50),
            min_words: (target / 2).max(20),
        }
    }
}

/// Abstractive summarization backend.
pub trait Summarizer: Send + Sync {
    /// Produce a shorter text within the given bounds.
    fn summarize(&self, text: &str, bounds: LengthBounds) -> Result<String>;

    /// Backend name for diagnostics.
    fn name(&self) -> &'static str {
        "summarizer"
    }
}
