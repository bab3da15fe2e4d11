//! Notes widget — free-text area for screener notes
//!
//! Multiline: text is split on `\n` and rendered as multiple `Line`s
//! inside a `Paragraph`. A block cursor is drawn while Notes mode is
//! active; the view scrolls so the cursor line stays visible.

use crate::tui::mode::Mode;
use crate::tui::state::TuiState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct NotesWidget<'a> {
    state: &'a TuiState,
}

impl<'a> NotesWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for NotesWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let active = self.state.mode == Mode::Notes;
        let text = self.state.session.notes();
        let cursor_pos = self.state.notes_cursor;

        let border_style = if active {
            Style::default().fg(Color::Green)
        } else if self.state.on_notes_row() {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Screener Notes ")
            .style(border_style);

        let lines = if active {
            build_active_lines(text, cursor_pos)
        } else {
            build_inactive_lines(text)
        };

        // Scroll so the cursor line stays visible
        let inner_height = area.height.saturating_sub(2) as usize;
        let scroll_offset = if lines.len() > inner_height {
            let cursor_line = find_cursor_line(text, cursor_pos);
            if cursor_line >= inner_height {
                (cursor_line + 1).saturating_sub(inner_height)
            } else {
                0
            }
        } else {
            0
        };

        Paragraph::new(lines)
            .block(block)
            .scroll((scroll_offset as u16, 0))
            .render(area, buf);
    }
}

/// Build lines for active (Notes) mode with block cursor rendering
fn build_active_lines(text: &str, cursor_pos: usize) -> Vec<Line<'_>> {
    let cursor_style = Style::default().fg(Color::Black).bg(Color::Green);

    let raw_lines: Vec<&str> = if text.is_empty() {
        vec![""]
    } else {
        text.split('\n').collect()
    };

    let mut lines = Vec::with_capacity(raw_lines.len());
    let mut byte_offset = 0;

    for line_text in &raw_lines {
        let line_start = byte_offset;
        let line_end = line_start + line_text.len();

        let mut spans: Vec<Span<'_>> = Vec::new();
        let cursor_on_line = cursor_pos >= line_start && cursor_pos <= line_end;

        if cursor_on_line {
            let local_cursor = cursor_pos - line_start;
            let before = &line_text[..local_cursor];
            let after = &line_text[local_cursor..];

            spans.push(Span::raw(before));

            if after.is_empty() {
                // Cursor at end of line — show block cursor on a space
                spans.push(Span::styled(" ", cursor_style));
            } else {
                let ch = after.chars().next().unwrap();
                let ch_len = ch.len_utf8();
                spans.push(Span::styled(&after[..ch_len], cursor_style));
                if ch_len < after.len() {
                    spans.push(Span::raw(&after[ch_len..]));
                }
            }
        } else {
            spans.push(Span::raw(*line_text));
        }

        lines.push(Line::from(spans));

        // Advance past the line content and its '\n' separator
        byte_offset = line_end + 1;
    }

    lines
}

/// Build lines for inactive mode — no cursor, placeholder when empty
fn build_inactive_lines(text: &str) -> Vec<Line<'_>> {
    if text.is_empty() {
        return vec![Line::from(Span::styled(
            "Enter screener notes here...",
            Style::default().fg(Color::DarkGray),
        ))];
    }

    text.split('\n')
        .map(|line_text| {
            Line::from(Span::styled(line_text, Style::default().fg(Color::Gray)))
        })
        .collect()
}

/// Find which line (0-indexed) the cursor is on
fn find_cursor_line(text: &str, cursor_pos: usize) -> usize {
    text[..cursor_pos.min(text.len())]
        .chars()
        .filter(|&c| c == '\n')
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_cursor_line() {
        assert_eq!(find_cursor_line("", 0), 0);
        assert_eq!(find_cursor_line("abc", 2), 0);
        assert_eq!(find_cursor_line("ab\ncd", 3), 1);
        assert_eq!(find_cursor_line("ab\ncd\n", 6), 2);
        // Out-of-range cursor clamps to the end
        assert_eq!(find_cursor_line("ab\ncd", 99), 1);
    }

    #[test]
    fn test_active_lines_cursor_at_end() {
        let lines = build_active_lines("ab", 2);
        assert_eq!(lines.len(), 1);
        // before-text span + trailing block cursor span
        assert_eq!(lines[0].spans.len(), 2);
    }

    #[test]
    fn test_active_lines_multiline() {
        let lines = build_active_lines("ab\ncd", 4);
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_inactive_empty_shows_placeholder() {
        let lines = build_inactive_lines("");
        assert_eq!(lines.len(), 1);
        assert_eq!(
            lines[0].spans[0].content,
            "Enter screener notes here..."
        );
    }
}
