//! # SearchBox Component
//!
//! Single-line text input for the movie search query.
//!
//! ## Responsibilities
//!
//! - Capture text input and paste
//! - Handle editing (backspace, delete, cursor movement)
//! - Report every query change to the parent
//!
//! ## State Management
//!
//! The buffer and the cursor (a byte offset on a char boundary) are internal
//! state. The parent owns the authoritative query in `App::search_query` and
//! is told about changes through `SearchEvent::QueryChanged`.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

const PLACEHOLDER: &str = "Search movies...";

/// Height of the rendered box (1 line of text + borders).
pub const SEARCH_BOX_HEIGHT: u16 = 3;

/// High-level events emitted by the SearchBox
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    /// The query text changed; carries the full new query
    QueryChanged(String),
}

#[derive(Debug, Default)]
pub struct SearchBox {
    /// Text buffer (Internal State)
    pub buffer: String,
    /// Cursor as a byte offset into `buffer`
    cursor: usize,
}

impl SearchBox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn changed(&self) -> Option<SearchEvent> {
        Some(SearchEvent::QueryChanged(self.buffer.clone()))
    }
}

impl Component for SearchBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Yellow));
        let inner = block.inner(area);

        // Keep the cursor inside the visible window by scrolling horizontally
        let cursor_col = self.buffer[..self.cursor].width() as u16;
        let h_scroll = cursor_col.saturating_sub(inner.width.saturating_sub(1));

        let paragraph = if self.buffer.is_empty() {
            Paragraph::new(PLACEHOLDER).style(
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )
        } else {
            Paragraph::new(self.buffer.as_str())
                .style(Style::default().fg(Color::Green))
                .scroll((0, h_scroll))
        };

        frame.render_widget(paragraph.block(block), area);

        if inner.width > 0 && inner.height > 0 {
            frame.set_cursor_position((inner.x + cursor_col - h_scroll, inner.y));
        }
    }
}

impl EventHandler for SearchBox {
    type Event = SearchEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                self.changed()
            }
            TuiEvent::Paste(text) => {
                // Single-line input: newlines become spaces
                let text: String = text
                    .chars()
                    .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
                    .collect();
                self.buffer.insert_str(self.cursor, &text);
                self.cursor += text.len();
                self.changed()
            }
            TuiEvent::Backspace => {
                if self.cursor == 0 {
                    return None;
                }
                let prev = prev_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(prev..self.cursor);
                self.cursor = prev;
                self.changed()
            }
            TuiEvent::Delete => {
                if self.cursor >= self.buffer.len() {
                    return None;
                }
                let next = next_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(self.cursor..next);
                self.changed()
            }
            TuiEvent::CursorLeft => {
                self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                None
            }
            TuiEvent::CursorRight => {
                self.cursor = next_char_boundary(&self.buffer, self.cursor);
                None
            }
            TuiEvent::Home => {
                self.cursor = 0;
                None
            }
            TuiEvent::End => {
                self.cursor = self.buffer.len();
                None
            }
            _ => None,
        }
    }
}

fn prev_char_boundary(s: &str, pos: usize) -> usize {
    s[..pos].char_indices().next_back().map(|(i, _)| i).unwrap_or(0)
}

fn next_char_boundary(s: &str, pos: usize) -> usize {
    s[pos..]
        .chars()
        .next()
        .map(|c| pos + c.len_utf8())
        .unwrap_or(pos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn typed(text: &str) -> SearchBox {
        let mut input = SearchBox::new();
        for c in text.chars() {
            input.handle_event(&TuiEvent::InputChar(c));
        }
        input
    }

    #[test]
    fn test_typing_reports_full_query() {
        let mut input = SearchBox::new();
        assert_eq!(
            input.handle_event(&TuiEvent::InputChar('h')),
            Some(SearchEvent::QueryChanged("h".to_string()))
        );
        assert_eq!(
            input.handle_event(&TuiEvent::InputChar('e')),
            Some(SearchEvent::QueryChanged("he".to_string()))
        );
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut input = SearchBox::new();
        assert_eq!(input.handle_event(&TuiEvent::Backspace), None);
    }

    #[test]
    fn test_edit_in_the_middle_with_multibyte_chars() {
        let mut input = typed("Amélie");
        input.handle_event(&TuiEvent::CursorLeft);
        input.handle_event(&TuiEvent::CursorLeft);
        input.handle_event(&TuiEvent::CursorLeft);
        // cursor now before 'l'
        assert_eq!(
            input.handle_event(&TuiEvent::Backspace),
            Some(SearchEvent::QueryChanged("Amlie".to_string()))
        );
        assert_eq!(
            input.handle_event(&TuiEvent::Delete),
            Some(SearchEvent::QueryChanged("Amie".to_string()))
        );
    }

    #[test]
    fn test_home_end_move_cursor() {
        let mut input = typed("Dune");
        input.handle_event(&TuiEvent::Home);
        assert_eq!(input.cursor(), 0);
        input.handle_event(&TuiEvent::End);
        assert_eq!(input.cursor(), 4);
    }

    #[test]
    fn test_paste_flattens_newlines() {
        let mut input = SearchBox::new();
        let res = input.handle_event(&TuiEvent::Paste("the\nbirds".to_string()));
        assert_eq!(res, Some(SearchEvent::QueryChanged("the birds".to_string())));
    }

    #[test]
    fn test_render_shows_placeholder_when_empty() {
        let backend = TestBackend::new(40, SEARCH_BOX_HEIGHT);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut input = SearchBox::new();

        terminal
            .draw(|f| {
                input.render(f, f.area());
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer.content().iter().map(|c| c.symbol()).collect::<String>();
        assert!(text.contains("Search movies..."));
    }
}
