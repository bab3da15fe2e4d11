//! Fixed question catalog (value objects)
//!
//! The assessment always asks the same 6 questions in the same order.
//! The catalog is defined at build time and never mutated.

use serde::Serialize;

/// A single interview question in the fixed catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    /// Stable identifier, unique within the catalog
    pub id: &'static str,
    /// The question text shown to the screener
    pub prompt: &'static str,
    /// What the question probes for (shown dimmed below the prompt)
    pub hint: Option<&'static str>,
}

/// The fixed, ordered catalog of assessment questions
pub const QUESTIONS: [Question; 6] = [
    Question {
        id: "q1",
        prompt: "Tell me about a time when you adopted a new technology or tool on your own. \
                 What motivated you, and what was the result?",
        hint: Some("Looks for curiosity and initiative"),
    },
    Question {
        id: "q2",
        prompt: "How do you stay up to date with new trends or tools in your field? \
                 Have you come across anything AI-related?",
        hint: Some("Assesses awareness and interest"),
    },
    Question {
        id: "q3",
        prompt: "Have you experimented with any AI tools, even casually? \
                 (e.g., ChatGPT, image generators, automation bots)",
        hint: Some("Gauges willingness to experiment"),
    },
    Question {
        id: "q4",
        prompt: "Can you think of a repetitive or time-consuming task in your role that \
                 could benefit from automation or AI?",
        hint: Some("Tests ability to identify practical AI opportunities"),
    },
    Question {
        id: "q5",
        prompt: "Tell me about a time you had to change your way of working because of a \
                 new process or tool. How did you respond?",
        hint: Some("Evaluates adaptability"),
    },
    Question {
        id: "q6",
        prompt: "Can you open an AI tool of your choice and show me how you would use it to \
                 solve something or get a result? Pls walk me through the process, step by step",
        hint: Some("Demonstrates practical application skill"),
    },
];

/// Number of questions in the catalog
pub const fn question_count() -> usize {
    QUESTIONS.len()
}

impl Question {
    /// Look up a catalog question by identifier
    pub fn find(id: &str) -> Option<&'static Question> {
        QUESTIONS.iter().find(|q| q.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_six_questions() {
        assert_eq!(QUESTIONS.len(), 6);
        assert_eq!(question_count(), 6);
    }

    #[test]
    fn test_catalog_ids_are_unique() {
        let mut ids: Vec<&str> = QUESTIONS.iter().map(|q| q.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), QUESTIONS.len());
    }

    #[test]
    fn test_catalog_order_is_stable() {
        let ids: Vec<&str> = QUESTIONS.iter().map(|q| q.id).collect();
        assert_eq!(ids, vec!["q1", "q2", "q3", "q4", "q5", "q6"]);
    }

    #[test]
    fn test_find_known_id() {
        let q = Question::find("q3").unwrap();
        assert_eq!(q.id, "q3");
        assert!(q.prompt.contains("AI tools"));
    }

    #[test]
    fn test_find_unknown_id() {
        assert!(Question::find("q99").is_none());
        assert!(Question::find("").is_none());
    }

    #[test]
    fn test_every_question_has_a_hint() {
        for q in &QUESTIONS {
            assert!(q.hint.is_some(), "question {} is missing its hint", q.id);
        }
    }
}
