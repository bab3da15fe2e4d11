//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Unknown question identifier: {0}")]
    UnknownQuestion(String),
}

impl DomainError {
    /// Check if this error is a rejected question identifier
    pub fn is_unknown_question(&self) -> bool {
        matches!(self, DomainError::UnknownQuestion(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_question_display() {
        let error = DomainError::UnknownQuestion("q99".to_string());
        assert_eq!(error.to_string(), "Unknown question identifier: q99");
    }

    #[test]
    fn test_is_unknown_question() {
        assert!(DomainError::UnknownQuestion("x".to_string()).is_unknown_question());
    }
}
