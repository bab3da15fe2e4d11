//! Rating widget — three mutually exclusive AIQ level indicators
//!
//! Display-only. At most one indicator is lit; none when the rating is
//! undetermined.

use crate::tui::state::TuiState;
use aiq_domain::AiqRating;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct RatingWidget<'a> {
    state: &'a TuiState,
}

impl<'a> RatingWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }

    fn level_color(level: AiqRating) -> Color {
        match level {
            AiqRating::High => Color::Green,
            AiqRating::Medium => Color::Yellow,
            AiqRating::Low => Color::Red,
            AiqRating::Undetermined => Color::DarkGray,
        }
    }
}

impl<'a> Widget for RatingWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rating = self.state.session.rating();

        let mut spans = vec![Span::styled(
            "AIQ Level:  ",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )];

        for level in [AiqRating::High, AiqRating::Medium, AiqRating::Low] {
            let active = rating == level;
            let (indicator, style) = if active {
                (
                    "(x)",
                    Style::default()
                        .fg(Self::level_color(level))
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ("( )", Style::default().fg(Color::Gray))
            };
            spans.push(Span::styled(indicator, style));
            spans.push(Span::raw(" "));
            let label_style = if active {
                Style::default()
                    .fg(Self::level_color(level))
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            spans.push(Span::styled(level.label(), label_style));
            spans.push(Span::raw("   "));
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::White));

        Paragraph::new(Line::from(spans))
            .block(block)
            .render(area, buf);
    }
}
