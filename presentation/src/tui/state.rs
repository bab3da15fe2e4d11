//! TUI application state
//!
//! Single source of truth for everything the TUI renders. The session
//! (tally + notes + rating) is owned here; widgets only borrow it.

use super::mode::{Action, Mode};
use aiq_application::AssessmentSession;
use aiq_domain::{Mark, QUESTIONS, question_count};
use std::time::{Duration, Instant};

/// How long a flash message stays visible in the status bar
const FLASH_TTL: Duration = Duration::from_secs(2);

/// Central TUI state — owned by the run loop
pub struct TuiState {
    // -- Mode --
    pub mode: Mode,

    // -- Assessment state (container) --
    pub session: AssessmentSession,

    // -- Row cursor: 0..question_count() are questions, question_count() is the notes row --
    pub cursor: usize,

    // -- Byte offset into the notes buffer --
    pub notes_cursor: usize,

    // -- Transient status-bar message --
    pub flash_message: Option<(String, Instant)>,

    // -- Lifecycle --
    pub should_quit: bool,
}

impl TuiState {
    pub fn new(session: AssessmentSession) -> Self {
        Self {
            mode: Mode::default(),
            session,
            cursor: 0,
            notes_cursor: 0,
            flash_message: None,
            should_quit: false,
        }
    }

    /// Index of the notes row (one past the last question)
    pub fn notes_row(&self) -> usize {
        question_count()
    }

    pub fn on_notes_row(&self) -> bool {
        self.cursor == self.notes_row()
    }

    /// Identifier of the question under the cursor, if any
    pub fn selected_question(&self) -> Option<&'static str> {
        QUESTIONS.get(self.cursor).map(|q| q.id)
    }

    /// Apply a user action to the state
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,

            Action::CursorUp => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            Action::CursorDown => {
                if self.cursor < self.notes_row() {
                    self.cursor += 1;
                }
            }

            Action::ToggleRelevant => self.toggle_selected(Mark::Relevant),
            Action::ToggleNonRelevant => self.toggle_selected(Mark::NonRelevant),

            Action::Activate => {
                if self.on_notes_row() {
                    self.enter_notes();
                } else {
                    self.toggle_selected(Mark::Relevant);
                }
            }
            Action::EditNotes => {
                self.cursor = self.notes_row();
                self.enter_notes();
            }

            Action::ShowHelp => self.mode = Mode::Help,
            Action::ExitToNormal => self.mode = Mode::Normal,

            // -- Notes editing --
            Action::InsertChar(c) => self.insert_char(c),
            Action::InsertNewline => self.insert_char('\n'),
            Action::DeleteChar => self.delete_char(),
            Action::CursorLeft => self.cursor_left(),
            Action::CursorRight => self.cursor_right(),
            Action::CursorStart => self.notes_cursor = 0,
            Action::CursorEnd => self.notes_cursor = self.session.notes().len(),

            Action::None => {}
        }
        self.expire_flash();
    }

    fn enter_notes(&mut self) {
        self.mode = Mode::Notes;
        self.notes_cursor = self.session.notes().len();
    }

    fn toggle_selected(&mut self, mark: Mark) {
        let Some(id) = self.selected_question() else {
            return;
        };
        self.session.toggle(id, mark);
        let relevance = self.session.relevance(id);
        self.flash(format!("{} -> {}", id, relevance));
    }

    // -- Notes editing (byte-accurate UTF-8 cursor arithmetic) --

    fn insert_char(&mut self, c: char) {
        let cursor = self.notes_cursor;
        self.session.notes_mut().insert(cursor, c);
        self.notes_cursor += c.len_utf8();
    }

    fn delete_char(&mut self) {
        let cursor = self.notes_cursor;
        if cursor > 0 {
            let notes = self.session.notes_mut();
            let prev_char_len = notes[..cursor]
                .chars()
                .next_back()
                .map(|c| c.len_utf8())
                .unwrap_or(0);
            notes.remove(cursor - prev_char_len);
            self.notes_cursor -= prev_char_len;
        }
    }

    fn cursor_left(&mut self) {
        let cursor = self.notes_cursor;
        if cursor > 0 {
            let notes = self.session.notes();
            let prev_char_len = notes[..cursor]
                .chars()
                .next_back()
                .map(|c| c.len_utf8())
                .unwrap_or(0);
            self.notes_cursor -= prev_char_len;
        }
    }

    fn cursor_right(&mut self) {
        let cursor = self.notes_cursor;
        let notes = self.session.notes();
        if cursor < notes.len() {
            let next_char_len = notes[cursor..]
                .chars()
                .next()
                .map(|c| c.len_utf8())
                .unwrap_or(0);
            self.notes_cursor += next_char_len;
        }
    }

    /// Number of lines in the notes buffer (for layout height)
    pub fn notes_line_count(&self) -> usize {
        let notes = self.session.notes();
        notes.lines().count().max(1) + usize::from(notes.ends_with('\n'))
    }

    // -- Flash messages --

    pub fn flash(&mut self, message: impl Into<String>) {
        self.flash_message = Some((message.into(), Instant::now()));
    }

    /// Drop the flash message once its TTL has passed
    pub fn expire_flash(&mut self) {
        if let Some((_, since)) = &self.flash_message
            && since.elapsed() >= FLASH_TTL
        {
            self.flash_message = None;
        }
    }
}
