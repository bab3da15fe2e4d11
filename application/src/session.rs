//! Assessment session — container state and change handling
//!
//! The session is the single owner of the tally and the notes. Widgets
//! report changes with a question identifier; identifiers outside the
//! fixed catalog are logged and discarded, leaving state unchanged.

use aiq_domain::{AiqRating, Mark, QUESTIONS, Relevance, RelevanceTally};
use serde::Serialize;
use tracing::warn;

/// In-memory state for one screening session
pub struct AssessmentSession {
    tally: RelevanceTally,
    notes: String,
    rating: AiqRating,
}

impl AssessmentSession {
    /// Fresh session: every question `Unset`, empty notes.
    ///
    /// The rating is derived immediately, so a fresh session already reads
    /// `Low` (0 relevant), never `Undetermined`.
    pub fn new() -> Self {
        let tally = RelevanceTally::new();
        let rating = AiqRating::derive(&tally);
        Self {
            tally,
            notes: String::new(),
            rating,
        }
    }

    /// Apply a three-way toggle for a question and recompute the rating.
    ///
    /// Unknown identifiers are the one defined error condition: log a
    /// warning and discard the update.
    pub fn toggle(&mut self, id: &str, mark: Mark) {
        let next = self.tally.get(id).toggle(mark);
        match self.tally.set(id, next) {
            Ok(()) => self.rating = AiqRating::derive(&self.tally),
            Err(err) => warn!(%id, "discarding relevance change: {err}"),
        }
    }

    /// Current judgment for a question
    pub fn relevance(&self, id: &str) -> Relevance {
        self.tally.get(id)
    }

    /// Rating derived from the current tally
    pub fn rating(&self) -> AiqRating {
        self.rating
    }

    pub fn relevant_count(&self) -> usize {
        self.tally.relevant_count()
    }

    /// Replace the notes text. Any content is accepted.
    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.notes = notes.into();
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn notes_mut(&mut self) -> &mut String {
        &mut self.notes
    }

    /// Immutable snapshot of the full assessment for the exit summary
    pub fn snapshot(&self) -> AssessmentSummary {
        let questions = QUESTIONS
            .iter()
            .map(|q| QuestionSummary {
                id: q.id,
                prompt: q.prompt,
                relevance: self.tally.get(q.id),
            })
            .collect();

        AssessmentSummary {
            questions,
            relevant_count: self.tally.relevant_count(),
            rating: self.rating,
            notes: self.notes.clone(),
        }
    }
}

impl Default for AssessmentSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Serializable snapshot of a finished (or abandoned) assessment
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentSummary {
    pub questions: Vec<QuestionSummary>,
    pub relevant_count: usize,
    pub rating: AiqRating,
    pub notes: String,
}

/// One question's judgment within a summary
#[derive(Debug, Clone, Serialize)]
pub struct QuestionSummary {
    pub id: &'static str,
    pub prompt: &'static str,
    pub relevance: Relevance,
}
