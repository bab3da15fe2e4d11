//! Relevance judgment (value object)

use serde::{Deserialize, Serialize};

/// Tri-state relevance judgment for a single question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Relevance {
    Relevant,
    NonRelevant,
    /// No judgment recorded yet (initial state)
    #[default]
    Unset,
}

/// The two-valued selection a screener can make on a question.
///
/// Distinct from [`Relevance`]: a screener never selects `Unset` directly,
/// it is only reached by toggling a mark off again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    Relevant,
    NonRelevant,
}

impl Relevance {
    /// Apply a three-way toggle: selecting the mark this judgment already
    /// holds clears it to `Unset`; any other selection overwrites.
    #[must_use]
    pub fn toggle(self, mark: Mark) -> Relevance {
        let selected = Relevance::from(mark);
        if self == selected {
            Relevance::Unset
        } else {
            selected
        }
    }

    pub fn is_relevant(self) -> bool {
        self == Relevance::Relevant
    }

    pub fn is_unset(self) -> bool {
        self == Relevance::Unset
    }
}

impl From<Mark> for Relevance {
    fn from(mark: Mark) -> Self {
        match mark {
            Mark::Relevant => Relevance::Relevant,
            Mark::NonRelevant => Relevance::NonRelevant,
        }
    }
}

impl std::fmt::Display for Relevance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Relevance::Relevant => "relevant",
            Relevance::NonRelevant => "non-relevant",
            Relevance::Unset => "unset",
        };
        write!(f, "{}", s)
    }
}
