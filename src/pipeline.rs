//! Paragraph-to-records orchestration.
//!
//! The pipeline is a pure, synchronous computation: every step is a
//! total function over its inputs plus the paragraph-scoped
//! [`ParseContext`]. The context is created fresh per invocation and
//! threaded through the clauses, never stored on the pipeline itself,
//! so one pipeline instance can serve concurrent callers.

use chrono::NaiveDate;

use crate::label::{is_cancelled, LabelExtractor, NO_EVENT};
use crate::normalize::{normalize_date, normalize_time, CanonicalDate};
use crate::record::ScheduleRecord;
use crate::segment::{segment, split_sentences};
use crate::token::Annotation;
use crate::Annotator;

/// Mutable per-paragraph state: the most recently resolved date,
/// carried forward to clauses that lack their own.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParseContext {
    /// The most recently resolved date, if any.
    pub current_date: Option<CanonicalDate>,
}

impl ParseContext {
    /// Fresh context with no carried date.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// The schedule-extraction pipeline.
///
/// A stateless service object: constructed once with an annotation
/// backend, then shared by reference. All per-request state lives in a
/// local [`ParseContext`].
///
/// ```rust
/// use chrono::NaiveDate;
/// use sked::SchedulePipeline;
///
/// let pipeline = SchedulePipeline::default();
/// let today = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(); // a Monday
/// let records = pipeline.process("Meeting with Bob next Monday at 3pm.", today);
///
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].event, "Meeting");
/// assert_eq!(records[0].date, "10-03-25");
/// assert_eq!(records[0].time, "15:00");
/// ```
pub struct SchedulePipeline {
    annotator: Box<dyn Annotator>,
    extractor: LabelExtractor,
}

impl Default for SchedulePipeline {
    fn default() -> Self {
        Self::new(Box::new(crate::annotate::HeuristicAnnotator::new()))
    }
}

impl SchedulePipeline {
    /// Create a pipeline around an annotation backend.
    #[must_use]
    pub fn new(annotator: Box<dyn Annotator>) -> Self {
        Self {
            annotator,
            extractor: LabelExtractor::new(),
        }
    }

    /// Name of the annotation backend in use.
    #[must_use]
    pub fn annotator_name(&self) -> &'static str {
        self.annotator.name()
    }

    /// Process a paragraph anchored at the local current date.
    #[must_use]
    pub fn process_today(&self, paragraph: &str) -> Vec<ScheduleRecord> {
        self.process(paragraph, chrono::Local::now().date_naive())
    }

    /// Process a paragraph into schedule records, anchored at `today`.
    ///
    /// Records appear in clause order. Output is byte-identical for
    /// identical `(paragraph, today)` inputs.
    #[must_use]
    pub fn process(&self, paragraph: &str, today: NaiveDate) -> Vec<ScheduleRecord> {
        let mut ctx = ParseContext::new();
        let mut records = Vec::new();

        for sentence in split_sentences(paragraph) {
            let sentence_annotation = self.annotate_or_empty(&sentence);
            for clause in segment(&sentence, &sentence_annotation) {
                if let Some(record) = self.process_clause(&clause, today, &mut ctx) {
                    records.push(record);
                }
            }
        }

        records
    }

    /// Process one clause, updating the carried date on any successful
    /// resolution. Returns `None` when the suppression invariant holds:
    /// no event text and no resolved time means the clause is noise.
    fn process_clause(
        &self,
        clause: &str,
        today: NaiveDate,
        ctx: &mut ParseContext,
    ) -> Option<ScheduleRecord> {
        let annotation = self.annotate_or_empty(clause);

        let mut resolved: Vec<CanonicalDate> = Vec::new();
        for span in annotation.dates() {
            match normalize_date(&span.text, today) {
                Some(date) => {
                    ctx.current_date = Some(date);
                    resolved.push(date);
                }
                None => log::debug!("unresolvable date phrase: {:?}", span.text),
            }
        }
        let date_field = if resolved.is_empty() {
            ctx.current_date
                .unwrap_or_else(|| CanonicalDate::new(today))
                .to_string()
        } else {
            resolved
                .iter()
                .map(CanonicalDate::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        };

        let times: Vec<String> = annotation
            .times()
            .map(|span| normalize_time(&span.text))
            .collect();
        let time_field = times.join(", ");

        let mut event = self.extractor.extract(clause, &annotation);
        if event == NO_EVENT && times.is_empty() {
            return None;
        }
        let cancelled = is_cancelled(clause);
        if cancelled {
            event.push_str(": Cancelled");
        }

        Some(ScheduleRecord::new(event, date_field, time_field, cancelled))
    }

    /// Annotation failure degrades to "zero tokens, zero entities".
    fn annotate_or_empty(&self, text: &str) -> Annotation {
        match self.annotator.annotate(text) {
            Ok(annotation) => annotation,
            Err(e) => {
                log::warn!("annotation failed, degrading to empty output: {e}");
                Annotation::empty()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::NO_TIME;
    use crate::MockAnnotator;

    fn anchor() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 3).unwrap() // a Monday
    }

    #[test]
    fn test_empty_paragraph_yields_no_records() {
        let pipeline = SchedulePipeline::default();
        assert!(pipeline.process("", anchor()).is_empty());
        assert!(pipeline.process("   ...   ", anchor()).is_empty());
    }

    #[test]
    fn test_clause_without_date_uses_today() {
        let pipeline = SchedulePipeline::default();
        let records = pipeline.process("Discuss the budget.", anchor());
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].date, "03-03-25");
        assert_eq!(records[0].time, NO_TIME);
    }

    #[test]
    fn test_failing_annotator_degrades_to_clause_text() {
        let pipeline = SchedulePipeline::new(Box::new(MockAnnotator::failing("broken")));
        let records = pipeline.process("Team lunch tomorrow.", anchor());
        // No entities and no tokens: label extraction falls through to
        // the clause text, the date defaults to today.
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].event, "Team lunch tomorrow");
        assert_eq!(records[0].date, "03-03-25");
    }

    #[test]
    fn test_cancellation_sets_flag_and_suffix() {
        let pipeline = SchedulePipeline::default();
        let records = pipeline.process("The meeting is cancelled.", anchor());
        assert_eq!(records.len(), 1);
        assert!(records[0].cancelled);
        assert_eq!(records[0].event, "Meeting: Cancelled");
        assert_eq!(records[0].date, "03-03-25");
    }

    #[test]
    fn test_context_is_not_shared_between_invocations() {
        let pipeline = SchedulePipeline::default();
        let first = pipeline.process("Report due next week. Also discuss budget.", anchor());
        assert_eq!(first[1].date, "10-03-25");
        // A fresh paragraph starts with no carried date.
        let second = pipeline.process("Discuss the budget.", anchor());
        assert_eq!(second[0].date, "03-03-25");
    }
}
