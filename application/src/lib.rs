//! Application layer for aiq-screener
//!
//! Owns the in-memory assessment state for one page view: the relevance
//! tally, the screener notes, and the derived rating. The presentation
//! layer pushes relevance changes and notes edits here and reads the
//! recomputed rating back (unidirectional data flow).

pub mod session;

pub use session::{AssessmentSession, AssessmentSummary, QuestionSummary};
