//! Question list widget — numbered prompts with tri-state relevance marks
//!
//! Each question renders as a mark column pair (Relevant / Non-Relevant),
//! the numbered prompt, and a dimmed hint line below. The highlighted row
//! follows the Normal-mode cursor.

use crate::tui::state::TuiState;
use aiq_domain::{QUESTIONS, Relevance};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

pub struct QuestionListWidget<'a> {
    state: &'a TuiState,
}

impl<'a> QuestionListWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }

    fn marks(relevance: Relevance) -> (&'static str, &'static str) {
        match relevance {
            Relevance::Relevant => ("[x]", "[ ]"),
            Relevance::NonRelevant => ("[ ]", "[x]"),
            Relevance::Unset => ("[ ]", "[ ]"),
        }
    }
}

impl<'a> Widget for QuestionListWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines: Vec<Line> = Vec::with_capacity(QUESTIONS.len() * 3 + 1);

        // Column legend
        lines.push(Line::from(Span::styled(
            "    Rel Non",
            Style::default().fg(Color::DarkGray),
        )));

        for (index, question) in QUESTIONS.iter().enumerate() {
            let relevance = self.state.session.relevance(question.id);
            let (rel_mark, non_mark) = Self::marks(relevance);
            let selected = self.state.cursor == index;

            let number_style = if selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            };

            let rel_style = if relevance.is_relevant() {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            let non_style = if relevance == Relevance::NonRelevant {
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };

            let prompt_style = if selected {
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            lines.push(Line::from(vec![
                Span::styled(format!("{:02}", index + 1), number_style),
                Span::raw("  "),
                Span::styled(rel_mark, rel_style),
                Span::raw(" "),
                Span::styled(non_mark, non_style),
                Span::raw("  "),
                Span::styled(question.prompt, prompt_style),
            ]));

            if let Some(hint) = question.hint {
                lines.push(Line::from(vec![
                    Span::raw("            "),
                    Span::styled(
                        format!("({})", hint),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]));
            }
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Questions ")
            .style(Style::default().fg(Color::White));

        // Keep the selected row in view on short terminals
        let inner_height = area.height.saturating_sub(2) as usize;
        let selected_line = 1 + self.state.cursor.min(QUESTIONS.len().saturating_sub(1)) * 2;
        let scroll_offset = if lines.len() > inner_height && selected_line >= inner_height {
            (selected_line + 1).saturating_sub(inner_height)
        } else {
            0
        };

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((scroll_offset as u16, 0))
            .render(area, buf);
    }
}
