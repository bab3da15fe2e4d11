//! TUI module for aiq-screener
//!
//! Renders the assessment form with ratatui: question list with tri-state
//! relevance toggles, live AIQ level display, and a notes field.

mod app;
mod mode;
mod state;
mod widgets;

pub use app::TuiApp;
pub use mode::{Action, KeyHandler, Mode};
pub use state::TuiState;
pub use widgets::MainLayout;
