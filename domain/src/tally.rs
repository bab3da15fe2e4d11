//! Relevance tally — one judgment per catalog question

use crate::error::DomainError;
use crate::question::{QUESTIONS, Question};
use crate::relevance::Relevance;
use serde::Serialize;
use std::collections::BTreeMap;

/// The complete set of relevance judgments across the fixed catalog.
///
/// Invariant: a tally built with [`RelevanceTally::new`] holds exactly one
/// entry per catalog identifier, all initialized to `Unset`. Only
/// [`RelevanceTally::empty`] (the pre-initialization state) violates
/// completeness, and [`AiqRating::derive`](crate::AiqRating::derive) guards
/// against it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelevanceTally {
    entries: BTreeMap<&'static str, Relevance>,
}

impl RelevanceTally {
    /// Fully populated tally with every catalog question `Unset`
    pub fn new() -> Self {
        let entries = QUESTIONS.iter().map(|q| (q.id, Relevance::Unset)).collect();
        Self { entries }
    }

    /// Tally with no entries at all (the state before initialization)
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Set the judgment for a question.
    ///
    /// Identifiers outside the fixed catalog are rejected; the tally is
    /// left unchanged.
    pub fn set(&mut self, id: &str, relevance: Relevance) -> Result<(), DomainError> {
        let question =
            Question::find(id).ok_or_else(|| DomainError::UnknownQuestion(id.to_string()))?;
        self.entries.insert(question.id, relevance);
        Ok(())
    }

    /// Current judgment for a question (`Unset` when the entry is missing)
    pub fn get(&self, id: &str) -> Relevance {
        self.entries.get(id).copied().unwrap_or_default()
    }

    /// Whether every catalog question has an entry
    pub fn is_complete(&self) -> bool {
        QUESTIONS.iter().all(|q| self.entries.contains_key(q.id))
    }

    /// Number of questions currently judged relevant
    pub fn relevant_count(&self) -> usize {
        self.entries.values().filter(|r| r.is_relevant()).count()
    }

    /// Iterate entries in catalog order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Relevance)> + '_ {
        QUESTIONS.iter().map(|q| (q.id, self.get(q.id)))
    }
}

impl Default for RelevanceTally {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::question::question_count;

    #[test]
    fn test_new_is_complete_and_all_unset() {
        let tally = RelevanceTally::new();
        assert!(tally.is_complete());
        assert_eq!(tally.relevant_count(), 0);
        for (_, relevance) in tally.iter() {
            assert_eq!(relevance, Relevance::Unset);
        }
    }

    #[test]
    fn test_empty_is_incomplete() {
        assert!(!RelevanceTally::empty().is_complete());
    }

    #[test]
    fn test_set_known_id() {
        let mut tally = RelevanceTally::new();
        tally.set("q2", Relevance::Relevant).unwrap();
        assert_eq!(tally.get("q2"), Relevance::Relevant);
        assert_eq!(tally.relevant_count(), 1);
    }

    #[test]
    fn test_set_unknown_id_is_rejected() {
        let mut tally = RelevanceTally::new();
        let before = tally.clone();
        let err = tally.set("q99", Relevance::Relevant).unwrap_err();
        assert!(matches!(err, DomainError::UnknownQuestion(ref id) if id == "q99"));
        assert_eq!(tally, before);
    }

    #[test]
    fn test_relevant_count_ignores_non_relevant() {
        let mut tally = RelevanceTally::new();
        tally.set("q1", Relevance::Relevant).unwrap();
        tally.set("q2", Relevance::NonRelevant).unwrap();
        tally.set("q3", Relevance::NonRelevant).unwrap();
        assert_eq!(tally.relevant_count(), 1);
    }

    #[test]
    fn test_iter_follows_catalog_order() {
        let tally = RelevanceTally::new();
        let ids: Vec<&str> = tally.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["q1", "q2", "q3", "q4", "q5", "q6"]);
        assert_eq!(ids.len(), question_count());
    }
}
