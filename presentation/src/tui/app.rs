//! TUI application — synchronous run loop
//!
//! All state transitions happen inside key-event handling; there is no
//! background work, so the loop is a plain draw / read / dispatch cycle.
//! The terminal is restored on exit and on panic.

use super::mode::{KeyHandler, Mode};
use super::state::TuiState;
use super::widgets::{
    MainLayout, header::HeaderWidget, help::HelpWidget, notes::NotesWidget,
    question_list::QuestionListWidget, rating::RatingWidget, status_bar::StatusBarWidget,
};
use aiq_application::{AssessmentSession, AssessmentSummary};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Frame, Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;

/// Poll timeout — lets flash messages expire without a key press
const TICK: Duration = Duration::from_millis(250);

/// Main TUI application
pub struct TuiApp {
    state: TuiState,
}

impl TuiApp {
    pub fn new(session: AssessmentSession) -> Self {
        Self {
            state: TuiState::new(session),
        }
    }

    /// Run the form until the screener quits
    pub fn run(&mut self) -> io::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Install panic hook to restore terminal
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            original_hook(info);
        }));

        let result = self.event_loop(&mut terminal);

        // Teardown
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        while !self.state.should_quit {
            self.state.expire_flash();
            terminal.draw(|frame| render(frame, &self.state))?;

            if event::poll(TICK)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        let action = KeyHandler::handle(self.state.mode, key);
                        self.state.apply(action);
                    }
                    // Resize triggers a redraw on the next iteration
                    _ => {}
                }
            }
        }
        Ok(())
    }

    /// Final snapshot of the assessment after the loop ends
    pub fn into_summary(self) -> AssessmentSummary {
        self.state.session.snapshot()
    }
}

fn render(frame: &mut Frame, state: &TuiState) {
    let layout = MainLayout::compute(frame.area(), state.notes_line_count() as u16);

    frame.render_widget(HeaderWidget::new(state), layout.header);
    frame.render_widget(QuestionListWidget::new(state), layout.questions);
    frame.render_widget(RatingWidget::new(state), layout.rating);
    frame.render_widget(NotesWidget::new(state), layout.notes);
    frame.render_widget(StatusBarWidget::new(state), layout.status_bar);

    if state.mode == Mode::Help {
        let overlay = MainLayout::centered_overlay(70, 60, frame.area());
        frame.render_widget(HelpWidget, overlay);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aiq_domain::AiqRating;

    #[test]
    fn test_summary_reflects_session() {
        let mut session = AssessmentSession::new();
        session.toggle("q1", aiq_domain::Mark::Relevant);
        session.set_notes("notes");

        let app = TuiApp::new(session);
        let summary = app.into_summary();
        assert_eq!(summary.relevant_count, 1);
        assert_eq!(summary.rating, AiqRating::Low);
        assert_eq!(summary.notes, "notes");
    }
}
