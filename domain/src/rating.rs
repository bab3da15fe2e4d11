//! AIQ rating derivation
//!
//! The only real decision logic in the system: map the number of relevant
//! judgments in a complete tally to a three-level rating.

use crate::tally::RelevanceTally;
use serde::{Deserialize, Serialize};

/// Derived AIQ rating shown to the screener
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AiqRating {
    High,
    Medium,
    Low,
    /// Tally not yet fully populated; no rating can be shown
    #[default]
    Undetermined,
}

impl AiqRating {
    /// Derive the rating from a tally.
    ///
    /// The threshold table is product policy, reverse-engineered from the
    /// original form and reproduced exactly:
    ///
    /// | relevant count | rating |
    /// |----------------|--------|
    /// | 5-6            | High   |
    /// | 4              | Medium |
    /// | 0-3            | Low    |
    ///
    /// Note that 0 relevant judgments yields `Low`, not `Undetermined`;
    /// `Undetermined` only means the tally is missing entries. Non-relevant
    /// judgments never offset relevant ones.
    pub fn derive(tally: &RelevanceTally) -> AiqRating {
        if !tally.is_complete() {
            return AiqRating::Undetermined;
        }

        match tally.relevant_count() {
            n if n >= 5 => AiqRating::High,
            4 => AiqRating::Medium,
            _ => AiqRating::Low,
        }
    }

    /// Whether a rating can be displayed
    pub fn is_determined(self) -> bool {
        self != AiqRating::Undetermined
    }

    /// Label used by the rating panel and the exit summary
    pub fn label(self) -> &'static str {
        match self {
            AiqRating::High => "High",
            AiqRating::Medium => "Medium",
            AiqRating::Low => "Low",
            AiqRating::Undetermined => "Undetermined",
        }
    }
}

impl std::fmt::Display for AiqRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
