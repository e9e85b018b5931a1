use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Paragraph, Widget};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::catalog::asset_url;

/// Lines reserved for the title label under the poster.
const MAX_LABEL_LINES: usize = 2;

/// One movie: its poster and, below it, its title.
///
/// A terminal cannot show the bitmap, so the poster area shows what a
/// browser shows for a missing image: the alternative text (the title),
/// plus the image source so a broken path is visible.
///
/// Pure function of its props. It's created fresh each frame by
/// `PosterGrid` for the tiles in view.
#[derive(Debug, Clone)]
pub struct PosterTile<'a> {
    pub title: &'a str,
    /// `<base>/images/<poster_url>`
    pub poster_source: String,
    pub is_hovered: bool,
}

impl<'a> PosterTile<'a> {
    pub fn new(base_url: &str, title: &'a str, poster_url: &str, is_hovered: bool) -> Self {
        Self {
            title,
            poster_source: asset_url(base_url, poster_url),
            is_hovered,
        }
    }

    /// Alternative text of the poster image.
    pub fn alt_text(&self) -> &str {
        self.title
    }
}

impl Widget for PosterTile<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.is_hovered {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }
        let width = inner.width as usize;

        // Title label at the bottom
        let mut label = wrap_title(self.title, width);
        let label_height = (label.len() as u16).min(inner.height);
        label.truncate(label_height as usize);
        let label_area = Rect::new(
            inner.x,
            inner.bottom() - label_height,
            inner.width,
            label_height,
        );
        let label_style = if self.is_hovered {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };
        Paragraph::new(label.into_iter().map(Line::from).collect::<Vec<_>>())
            .style(label_style)
            .render(label_area, buf);

        // Poster placeholder fills the rest, separated by a rule when there is room
        let poster_height = inner.height - label_height;
        if poster_height == 0 {
            return;
        }
        let rule_height = u16::from(poster_height >= 3);
        let poster_area = Rect::new(inner.x, inner.y, inner.width, poster_height - rule_height);
        if rule_height == 1 {
            let rule = "─".repeat(width);
            Paragraph::new(rule)
                .style(Style::default().fg(Color::DarkGray))
                .render(
                    Rect::new(inner.x, poster_area.bottom(), inner.width, 1),
                    buf,
                );
        }

        let alt_style = Style::default()
            .fg(Color::Gray)
            .add_modifier(Modifier::ITALIC | Modifier::DIM);
        let source_style = Style::default().fg(Color::DarkGray);
        let mut lines = vec![Line::styled(truncate_end(self.alt_text(), width), alt_style)];
        if poster_area.height >= 2 {
            lines.push(Line::styled(truncate_start(&self.poster_source, width), source_style));
        }
        let top_pad = poster_area.height.saturating_sub(lines.len() as u16) / 2;
        let content_area = Rect::new(
            poster_area.x,
            poster_area.y + top_pad,
            poster_area.width,
            poster_area.height - top_pad,
        );
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(content_area, buf);
    }
}

/// Wraps the title to at most `MAX_LABEL_LINES` lines, ellipsizing the last one.
fn wrap_title(title: &str, width: usize) -> Vec<String> {
    let options = textwrap::Options::new(width)
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace);
    let wrapped = textwrap::wrap(title.trim(), options);

    let mut lines: Vec<String> = wrapped
        .iter()
        .take(MAX_LABEL_LINES)
        .map(|l| l.to_string())
        .collect();
    if wrapped.len() > MAX_LABEL_LINES
        && let Some(last) = lines.last_mut()
    {
        let mut with_rest = last.clone();
        with_rest.push_str(" …");
        *last = truncate_end(&with_rest, width);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Keeps the start of `s`, replacing the overflow with `…`.
fn truncate_end(s: &str, width: usize) -> String {
    if s.width() <= width {
        return s.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Keeps the end of `s`, replacing the overflow with `…`.
fn truncate_start(s: &str, width: usize) -> String {
    if s.width() <= width {
        return s.to_string();
    }
    let mut tail: Vec<char> = Vec::new();
    let mut used = 0;
    for c in s.chars().rev() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        tail.push(c);
        used += w;
    }
    std::iter::once('…').chain(tail.into_iter().rev()).collect()
}
