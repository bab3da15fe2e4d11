//! TUI mode system
//!
//! Defines the mode-based interaction model:
//! - Normal mode: move between rows, toggle relevance marks
//! - Notes mode: free-text editing of the screener notes
//! - Help mode: overlay with the key reference

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Navigation and relevance toggles
    #[default]
    Normal,
    /// Editing the notes field
    Notes,
    /// Help overlay (any key closes)
    Help,
}

impl Mode {
    /// Get the mode indicator string for the status bar
    pub fn indicator(&self) -> &'static str {
        match self {
            Self::Normal => "NORMAL",
            Self::Notes => "NOTES",
            Self::Help => "HELP",
        }
    }

    /// Get the mode color for the status bar
    pub fn color(&self) -> ratatui::style::Color {
        use ratatui::style::Color;
        match self {
            Self::Normal => Color::Blue,
            Self::Notes => Color::Green,
            Self::Help => Color::Magenta,
        }
    }
}

/// User action derived from key events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Move the row cursor up
    CursorUp,
    /// Move the row cursor down
    CursorDown,
    /// Toggle the Relevant mark on the highlighted question
    ToggleRelevant,
    /// Toggle the Non-Relevant mark on the highlighted question
    ToggleNonRelevant,
    /// Activate the highlighted row (toggle a question, open notes)
    Activate,
    /// Jump to the notes field and start editing
    EditNotes,
    /// Leave the current mode back to Normal
    ExitToNormal,
    /// Show the help overlay
    ShowHelp,
    /// Quit the application
    Quit,
    /// Insert character into the notes buffer
    InsertChar(char),
    /// Insert a newline into the notes buffer
    InsertNewline,
    /// Delete character before the notes cursor (Backspace)
    DeleteChar,
    /// Move the notes cursor left
    CursorLeft,
    /// Move the notes cursor right
    CursorRight,
    /// Move the notes cursor to start of buffer
    CursorStart,
    /// Move the notes cursor to end of buffer
    CursorEnd,
    /// No action
    None,
}

/// Key event handler - maps key events to actions based on current mode
pub struct KeyHandler;

impl KeyHandler {
    /// Handle key event in the given mode
    pub fn handle(mode: Mode, key: KeyEvent) -> Action {
        match mode {
            Mode::Normal => Self::handle_normal(key),
            Mode::Notes => Self::handle_notes(key),
            Mode::Help => Self::handle_help(key),
        }
    }

    fn handle_normal(key: KeyEvent) -> Action {
        match (key.code, key.modifiers) {
            // Quit
            (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,

            // Navigation
            (KeyCode::Char('k'), KeyModifiers::NONE) | (KeyCode::Up, _) => Action::CursorUp,
            (KeyCode::Char('j'), KeyModifiers::NONE) | (KeyCode::Down, _) => Action::CursorDown,

            // Relevance toggles
            (KeyCode::Char('r'), KeyModifiers::NONE) => Action::ToggleRelevant,
            (KeyCode::Char('n'), KeyModifiers::NONE) => Action::ToggleNonRelevant,

            // Row activation / notes editing
            (KeyCode::Enter, _) => Action::Activate,
            (KeyCode::Char('i'), KeyModifiers::NONE) => Action::EditNotes,

            // Help
            (KeyCode::Char('?'), _) => Action::ShowHelp,

            _ => Action::None,
        }
    }

    fn handle_notes(key: KeyEvent) -> Action {
        match (key.code, key.modifiers) {
            (KeyCode::Esc, _) => Action::ExitToNormal,
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
            (KeyCode::Enter, _) => Action::InsertNewline,
            (KeyCode::Char(c), _) => Action::InsertChar(c),
            (KeyCode::Backspace, _) => Action::DeleteChar,
            (KeyCode::Left, _) => Action::CursorLeft,
            (KeyCode::Right, _) => Action::CursorRight,
            (KeyCode::Home, _) => Action::CursorStart,
            (KeyCode::End, _) => Action::CursorEnd,
            _ => Action::None,
        }
    }

    fn handle_help(key: KeyEvent) -> Action {
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
            // Any other key closes the overlay
            _ => Action::ExitToNormal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_default() {
        assert_eq!(Mode::default(), Mode::Normal);
    }

    #[test]
    fn test_mode_indicator() {
        assert_eq!(Mode::Normal.indicator(), "NORMAL");
        assert_eq!(Mode::Notes.indicator(), "NOTES");
        assert_eq!(Mode::Help.indicator(), "HELP");
    }

    #[test]
    fn test_mode_color() {
        use ratatui::style::Color;
        assert_eq!(Mode::Normal.color(), Color::Blue);
        assert_eq!(Mode::Notes.color(), Color::Green);
        assert_eq!(Mode::Help.color(), Color::Magenta);
    }

    #[test]
    fn test_normal_mode_key_handling() {
        // Quit commands
        let key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(KeyHandler::handle(Mode::Normal, key), Action::Quit);

        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(KeyHandler::handle(Mode::Normal, key), Action::Quit);

        // Navigation
        let key = KeyEvent::new(KeyCode::Char('k'), KeyModifiers::NONE);
        assert_eq!(KeyHandler::handle(Mode::Normal, key), Action::CursorUp);

        let key = KeyEvent::new(KeyCode::Up, KeyModifiers::NONE);
        assert_eq!(KeyHandler::handle(Mode::Normal, key), Action::CursorUp);

        let key = KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE);
        assert_eq!(KeyHandler::handle(Mode::Normal, key), Action::CursorDown);

        let key = KeyEvent::new(KeyCode::Down, KeyModifiers::NONE);
        assert_eq!(KeyHandler::handle(Mode::Normal, key), Action::CursorDown);

        // Relevance toggles
        let key = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE);
        assert_eq!(KeyHandler::handle(Mode::Normal, key), Action::ToggleRelevant);

        let key = KeyEvent::new(KeyCode::Char('n'), KeyModifiers::NONE);
        assert_eq!(
            KeyHandler::handle(Mode::Normal, key),
            Action::ToggleNonRelevant
        );

        // Activation and notes
        let key = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(KeyHandler::handle(Mode::Normal, key), Action::Activate);

        let key = KeyEvent::new(KeyCode::Char('i'), KeyModifiers::NONE);
        assert_eq!(KeyHandler::handle(Mode::Normal, key), Action::EditNotes);

        // Help
        let key = KeyEvent::new(KeyCode::Char('?'), KeyModifiers::NONE);
        assert_eq!(KeyHandler::handle(Mode::Normal, key), Action::ShowHelp);

        // Unknown key
        let key = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        assert_eq!(KeyHandler::handle(Mode::Normal, key), Action::None);
    }

    #[test]
    fn test_notes_mode_key_handling() {
        // Exit to normal
        let key = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(KeyHandler::handle(Mode::Notes, key), Action::ExitToNormal);

        // Newline instead of submit
        let key = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(KeyHandler::handle(Mode::Notes, key), Action::InsertNewline);

        // Character insertion — including keys that are commands in Normal mode
        let key = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        assert_eq!(KeyHandler::handle(Mode::Notes, key), Action::InsertChar('a'));

        let key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(KeyHandler::handle(Mode::Notes, key), Action::InsertChar('q'));

        let key = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE);
        assert_eq!(KeyHandler::handle(Mode::Notes, key), Action::InsertChar('r'));

        // Editing
        let key = KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE);
        assert_eq!(KeyHandler::handle(Mode::Notes, key), Action::DeleteChar);

        // Cursor movement
        let key = KeyEvent::new(KeyCode::Left, KeyModifiers::NONE);
        assert_eq!(KeyHandler::handle(Mode::Notes, key), Action::CursorLeft);

        let key = KeyEvent::new(KeyCode::Right, KeyModifiers::NONE);
        assert_eq!(KeyHandler::handle(Mode::Notes, key), Action::CursorRight);

        let key = KeyEvent::new(KeyCode::Home, KeyModifiers::NONE);
        assert_eq!(KeyHandler::handle(Mode::Notes, key), Action::CursorStart);

        let key = KeyEvent::new(KeyCode::End, KeyModifiers::NONE);
        assert_eq!(KeyHandler::handle(Mode::Notes, key), Action::CursorEnd);

        // Ctrl+C still quits
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(KeyHandler::handle(Mode::Notes, key), Action::Quit);
    }

    #[test]
    fn test_help_mode_any_key_closes() {
        let key = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        assert_eq!(KeyHandler::handle(Mode::Help, key), Action::ExitToNormal);

        let key = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(KeyHandler::handle(Mode::Help, key), Action::ExitToNormal);

        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(KeyHandler::handle(Mode::Help, key), Action::Quit);
    }

    #[test]
    fn test_mode_transitions() {
        // Normal -> Help -> Normal
        let action = KeyHandler::handle(
            Mode::Normal,
            KeyEvent::new(KeyCode::Char('?'), KeyModifiers::NONE),
        );
        assert_eq!(action, Action::ShowHelp);

        let action = KeyHandler::handle(
            Mode::Help,
            KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE),
        );
        assert_eq!(action, Action::ExitToNormal);

        // Normal -> Notes -> Normal
        let action = KeyHandler::handle(
            Mode::Normal,
            KeyEvent::new(KeyCode::Char('i'), KeyModifiers::NONE),
        );
        assert_eq!(action, Action::EditNotes);

        let action = KeyHandler::handle(
            Mode::Notes,
            KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE),
        );
        assert_eq!(action, Action::ExitToNormal);
    }
}
