//! Domain layer for aiq-screener
//!
//! This crate contains the core types of the assessment form and the one
//! piece of real decision logic: deriving an AIQ rating from a relevance
//! tally. It has no dependencies on presentation or terminal concerns.
//!
//! # Core Concepts
//!
//! ## Relevance
//!
//! Each fixed question carries a tri-state judgment by the screener:
//! relevant, non-relevant, or unset. Selecting the judgment a question
//! already holds clears it back to unset (three-way toggle).
//!
//! ## AIQ Rating
//!
//! The rating is derived, never stored: count the relevant judgments in a
//! complete tally and map the count through a fixed threshold table.

pub mod error;
pub mod question;
pub mod rating;
pub mod relevance;
pub mod tally;

// Re-export commonly used types
pub use error::DomainError;
pub use question::{QUESTIONS, Question, question_count};
pub use rating::AiqRating;
pub use relevance::{Mark, Relevance};
pub use tally::RelevanceTally;
