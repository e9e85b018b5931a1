use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Span;
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

const SPINNER: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Bottom line: status on the left, key hints on the right.
pub struct Footer {
    pub status_message: String,
    pub search_visible: bool,
    pub is_fetching: bool,
    pub spinner_frame: usize,
}

impl Footer {
    pub fn new(status_message: String, search_visible: bool, is_fetching: bool, spinner_frame: usize) -> Self {
        Self {
            status_message,
            search_visible,
            is_fetching,
            spinner_frame,
        }
    }

    /// Returns the instruction text for the current focus
    fn instruction_text(&self) -> &'static str {
        if self.search_visible {
            "type to filter · (Esc) close search · (↑↓) scroll · (Ctrl+C) quit"
        } else {
            "(↑↓/PgUp/PgDn) scroll · (/) search · (Esc) back · (q) quit"
        }
    }
}

impl Component for Footer {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let hints = self.instruction_text();
        let [status_area, hints_area] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(hints.chars().count() as u16),
        ])
        .areas(area);

        let status = if self.is_fetching {
            let spinner = SPINNER[self.spinner_frame % SPINNER.len()];
            format!("{} {}", spinner, self.status_message)
        } else {
            self.status_message.clone()
        };

        frame.render_widget(Span::styled(status, Style::default().fg(Color::Gray)), status_area);
        frame.render_widget(
            Paragraph::new(hints).style(Style::default().fg(Color::DarkGray)),
            hints_area,
        );
    }
}
