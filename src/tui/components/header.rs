//! # Header Component
//!
//! Top bar of the collection view: back icon, page title, search icon.
//!
//! ## Design Decisions
//!
//! ### Stateless Component
//!
//! Header is purely presentational. It receives the title and the search
//! box visibility as props and has no internal state:
//!
//! ```rust,ignore
//! let mut header = Header::new(app.title.clone(), app.search_visible);
//! header.render(frame, area);
//! ```
//!
//! ### Icons
//!
//! The catalog ships `Back.png` and `search.png`; in a terminal they are
//! drawn as glyph labels. Their screen regions are exposed through
//! [`Header::back_region`] and [`Header::search_region`] so mouse clicks
//! can be hit tested against exactly what was drawn.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

pub const BACK_LABEL: &str = " ◀ Back ";
pub const SEARCH_LABEL: &str = " Search ⌕ ";

pub struct Header {
    /// Title from the most recent page resource
    pub title: String,
    /// Whether the search box is currently shown (highlights the icon)
    pub search_visible: bool,
}

impl Header {
    pub fn new(title: String, search_visible: bool) -> Self {
        Self {
            title,
            search_visible,
        }
    }

    /// Screen region occupied by the back icon.
    pub fn back_region(area: Rect) -> Rect {
        let width = (BACK_LABEL.width() as u16).min(area.width);
        Rect::new(area.x, area.y, width, area.height.min(1))
    }

    /// Screen region occupied by the search icon.
    pub fn search_region(area: Rect) -> Rect {
        let width = (SEARCH_LABEL.width() as u16).min(area.width);
        Rect::new(
            area.x + area.width.saturating_sub(width),
            area.y,
            width,
            area.height.min(1),
        )
    }
}

impl Component for Header {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let icon_style = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
        let search_style = if self.search_visible {
            icon_style.bg(Color::DarkGray)
        } else {
            icon_style
        };

        let back_area = Self::back_region(area);
        let search_area = Self::search_region(area);
        let title_area = Rect::new(
            back_area.right(),
            area.y,
            search_area.x.saturating_sub(back_area.right()),
            area.height.min(1),
        );

        frame.render_widget(Span::styled(BACK_LABEL, icon_style), back_area);
        frame.render_widget(Span::styled(SEARCH_LABEL, search_style), search_area);

        let title = Paragraph::new(Line::from(Span::styled(
            self.title.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(title, title_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered_text(header: &mut Header, width: u16) -> String {
        let backend = TestBackend::new(width, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                header.render(f, f.area());
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_header_shows_icons_and_title() {
        let mut header = Header::new("Romantic Comedy".to_string(), false);
        let text = rendered_text(&mut header, 80);
        assert!(text.contains("Back"));
        assert!(text.contains("Romantic Comedy"));
        assert!(text.contains("Search"));
    }

    #[test]
    fn test_header_empty_title() {
        let mut header = Header::new(String::new(), true);
        let text = rendered_text(&mut header, 40);
        assert!(text.contains("Back"));
        assert!(text.contains("Search"));
    }

    #[test]
    fn test_icon_regions_sit_at_both_edges() {
        let area = Rect::new(0, 0, 80, 1);
        let back = Header::back_region(area);
        let search = Header::search_region(area);
        assert_eq!(back.x, 0);
        assert_eq!(back.width, BACK_LABEL.width() as u16);
        assert_eq!(search.right(), 80);
        assert!(back.right() <= search.x);
    }
}
