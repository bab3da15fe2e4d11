//! Help overlay widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

pub struct HelpWidget;

impl HelpWidget {
    fn key_line(key: &'static str, description: &'static str) -> Line<'static> {
        Line::from(vec![
            Span::styled(
                format!("  {:<12}", key),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(description),
        ])
    }
}

impl Widget for HelpWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let lines = vec![
            Line::from(""),
            Self::key_line("j / k", "move between questions and the notes field"),
            Self::key_line("r", "toggle Relevant on the highlighted question"),
            Self::key_line("n", "toggle Non-Relevant on the highlighted question"),
            Self::key_line("Enter", "toggle Relevant, or open notes on the notes row"),
            Self::key_line("i", "jump to the notes field and edit"),
            Self::key_line("Esc", "leave notes editing"),
            Self::key_line("?", "toggle this overlay"),
            Self::key_line("q / Ctrl+C", "quit and print the summary"),
            Line::from(""),
            Line::from(Span::styled(
                "  Marking a question with the value it already holds clears it.",
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(Span::styled(
                "  AIQ level: 5-6 relevant = High, 4 = Medium, 0-3 = Low.",
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Help ")
            .style(Style::default().fg(Color::White));

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
