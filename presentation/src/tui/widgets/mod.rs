//! TUI widgets — ratatui components for the form layout
//!
//! Layout:
//! ┌── Header (3) ────────────────────────────────────┐
//! ├── Questions (flex) ──────────────────────────────┤
//! ├── Rating (3) ────────────────────────────────────┤
//! ├── Notes (3..=8, grows with content) ─────────────┤
//! └── StatusBar (1) ─────────────────────────────────┘

pub mod header;
pub mod help;
pub mod notes;
pub mod question_list;
pub mod rating;
pub mod status_bar;

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Maximum number of text lines the notes area grows to
const MAX_NOTES_LINES: u16 = 6;

/// Compute the main layout regions from a terminal area
pub struct MainLayout {
    pub header: Rect,
    pub questions: Rect,
    pub rating: Rect,
    pub notes: Rect,
    pub status_bar: Rect,
}

impl MainLayout {
    /// Compute layout with dynamic notes height.
    ///
    /// `notes_lines` is the number of text lines in the notes buffer. The
    /// notes area grows from 3 (1 line + borders) up to `MAX_NOTES_LINES + 2`,
    /// capped so the question list is never pushed out of the terminal.
    pub fn compute(area: Rect, notes_lines: u16) -> Self {
        let header_h: u16 = 3;
        let rating_h: u16 = 3;
        let status_h: u16 = 1;

        let max_for_notes = area.height.saturating_sub(header_h + rating_h + status_h);
        let desired_h = (notes_lines + 2).clamp(3, MAX_NOTES_LINES + 2);
        let notes_h = desired_h.min(max_for_notes).max(1);

        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(header_h),
                Constraint::Fill(1),
                Constraint::Length(rating_h),
                Constraint::Length(notes_h),
                Constraint::Length(status_h),
            ])
            .split(area);

        Self {
            header: vertical[0],
            questions: vertical[1],
            rating: vertical[2],
            notes: vertical[3],
            status_bar: vertical[4],
        }
    }

    /// Centered overlay rectangle for the help dialog
    pub fn centered_overlay(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
        let vert = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(area);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(vert[1])[1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_regions_tile_the_area() {
        let area = Rect::new(0, 0, 80, 30);
        let layout = MainLayout::compute(area, 1);

        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.rating.height, 3);
        assert_eq!(layout.notes.height, 3);
        assert_eq!(layout.status_bar.height, 1);
        assert_eq!(layout.questions.height, 30 - 3 - 3 - 3 - 1);
    }

    #[test]
    fn test_notes_area_grows_with_content() {
        let area = Rect::new(0, 0, 80, 30);
        let layout = MainLayout::compute(area, 4);
        assert_eq!(layout.notes.height, 6);

        // Clamped at the maximum
        let layout = MainLayout::compute(area, 40);
        assert_eq!(layout.notes.height, MAX_NOTES_LINES + 2);
    }

    #[test]
    fn test_tiny_terminal_does_not_underflow() {
        let area = Rect::new(0, 0, 20, 5);
        let layout = MainLayout::compute(area, 10);
        assert!(layout.notes.height >= 1);
    }

    #[test]
    fn test_centered_overlay_is_inside_area() {
        let area = Rect::new(0, 0, 80, 30);
        let overlay = MainLayout::centered_overlay(60, 50, area);
        assert!(overlay.x >= area.x && overlay.right() <= area.right());
        assert!(overlay.y >= area.y && overlay.bottom() <= area.bottom());
    }
}
