//! Presentation layer for aiq-screener
//!
//! This crate contains the ratatui-based assessment form, CLI definitions,
//! and the console summary formatter.

pub mod cli;
pub mod output;
pub mod tui;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use output::summary::SummaryFormatter;
pub use tui::TuiApp;
