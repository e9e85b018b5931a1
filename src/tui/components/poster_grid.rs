//! # PosterGrid Component
//!
//! Scrollable grid of poster tiles.
//!
//! ## Responsibilities
//!
//! - Lay the filtered movies out in as many columns as fit
//! - Manage scrolling and report scroll geometry to the parent
//! - Hit testing for mouse hover
//! - Show the "No Movies Available" placeholder for an empty listing
//!
//! ## Architecture
//!
//! `PosterGrid` is a transient component (created each frame) that wraps
//! `&'a mut PosterGridState` (persistent state) and the listed movies (props).
//!
//! Since `Component::render` takes `&mut self`, the render pass records the
//! geometry it used (columns, content height, which key sits in which cell)
//! so that scroll events and mouse hits between frames see exactly what is
//! on screen.

use ratatui::Frame;
use ratatui::layout::{Alignment, Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Paragraph;
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::pagination::ScrollMetrics;
use crate::core::search::ListedMovie;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::poster_tile::PosterTile;
use crate::tui::event::TuiEvent;

pub const EMPTY_PLACEHOLDER: &str = "No Movies Available";

/// Scroll and geometry state for the grid.
/// Must be persisted in the parent TuiState.
pub struct PosterGridState {
    /// Scroll offset and view state
    pub scroll_state: ScrollViewState,
    /// Last known viewport height
    pub viewport_height: u16,
    /// Height of the laid-out grid at the last render
    pub content_height: u16,
    /// Columns used at the last render
    pub columns: u16,
    /// Tile size used at the last render
    pub tile_size: Size,
    /// Listing keys in cell order at the last render
    pub rendered_keys: Vec<usize>,
    /// Key of the tile under the mouse pointer
    pub hovered_key: Option<usize>,
}

impl Default for PosterGridState {
    fn default() -> Self {
        Self::new()
    }
}

impl PosterGridState {
    pub fn new() -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
            viewport_height: 0,
            content_height: 0,
            columns: 1,
            tile_size: Size::new(0, 0),
            rendered_keys: Vec::new(),
            hovered_key: None,
        }
    }

    /// Clamp scroll offset so it never exceeds the content bounds.
    pub fn clamp_scroll(&mut self) {
        let max_y = self.content_height.saturating_sub(self.viewport_height);
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }

    /// Current scroll geometry, in rows.
    pub fn metrics(&self) -> ScrollMetrics {
        ScrollMetrics::new(
            u32::from(self.scroll_state.offset().y),
            u32::from(self.content_height),
            u32::from(self.viewport_height),
        )
    }

    /// Key of the tile drawn at screen cell `(column, row)`, if any.
    pub fn tile_at(&self, column: u16, row: u16, area: Rect) -> Option<usize> {
        if !area.contains(Position { x: column, y: row }) {
            return None;
        }
        let tile_w = self.tile_size.width;
        let tile_h = self.tile_size.height;
        if tile_w == 0 || tile_h == 0 {
            return None;
        }
        let x = column - area.x;
        if x >= self.columns.saturating_mul(tile_w) {
            return None;
        }
        let y = u32::from(row - area.y) + u32::from(self.scroll_state.offset().y);
        let cell = (y / u32::from(tile_h)) as usize * self.columns as usize + (x / tile_w) as usize;
        self.rendered_keys.get(cell).copied()
    }
}

/// Grid geometry for a given width and listing size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub columns: u16,
    pub rows: u16,
    pub content_height: u16,
}

impl GridLayout {
    pub fn compute(content_width: u16, tile_size: Size, count: usize) -> Self {
        let columns = (content_width / tile_size.width.max(1)).max(1);
        let rows = u16::try_from(count.div_ceil(columns as usize)).unwrap_or(u16::MAX);
        Self {
            columns,
            rows,
            content_height: rows.saturating_mul(tile_size.height),
        }
    }
}

pub struct PosterGrid<'a> {
    pub state: &'a mut PosterGridState,
    pub movies: &'a [ListedMovie<'a>],
    pub base_url: &'a str,
    pub tile_size: Size,
}

impl<'a> PosterGrid<'a> {
    pub fn new(
        state: &'a mut PosterGridState,
        movies: &'a [ListedMovie<'a>],
        base_url: &'a str,
        tile_size: Size,
    ) -> Self {
        Self {
            state,
            movies,
            base_url,
            tile_size,
        }
    }
}

impl<'a> Component for PosterGrid<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let content_width = area.width.saturating_sub(1); // -1 for scrollbar safe area
        let layout = GridLayout::compute(content_width, self.tile_size, self.movies.len());

        // 1. Record geometry for events between frames
        self.state.viewport_height = area.height;
        self.state.content_height = layout.content_height;
        self.state.columns = layout.columns;
        self.state.tile_size = self.tile_size;
        self.state.rendered_keys = self.movies.iter().map(|m| m.key).collect();

        if self.movies.is_empty() {
            self.state.scroll_state.set_offset(Position { x: 0, y: 0 });
            let placeholder = Paragraph::new(EMPTY_PLACEHOLDER)
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC));
            let middle = Rect::new(area.x, area.y + area.height / 2, area.width, area.height.min(1));
            frame.render_widget(placeholder, middle);
            return;
        }

        // 2. Clamp scroll offset (the listing may have shrunk since last frame)
        self.state.clamp_scroll();

        // 3. Render only the rows in view
        let tile_h = self.tile_size.height.max(1);
        let offset = self.state.scroll_state.offset().y;
        let first_row = offset / tile_h;
        let last_row = (offset.saturating_add(area.height) / tile_h).min(layout.rows.saturating_sub(1));
        let columns = layout.columns as usize;

        let mut scroll_view = ScrollView::new(Size::new(content_width, layout.content_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Always)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let visible = self
            .movies
            .iter()
            .enumerate()
            .skip(first_row as usize * columns)
            .take((last_row - first_row + 1) as usize * columns);

        for (i, listed) in visible {
            let col = (i % columns) as u16;
            let row = (i / columns) as u16;
            let rect = Rect::new(
                col * self.tile_size.width,
                row.saturating_mul(self.tile_size.height),
                self.tile_size.width,
                self.tile_size.height,
            );
            let tile = PosterTile::new(
                self.base_url,
                &listed.movie.name,
                &listed.movie.poster_image,
                self.state.hovered_key == Some(listed.key),
            );
            scroll_view.render_widget(tile, rect);
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}

/// The grid emits its scroll geometry after every scroll so the parent
/// can decide whether to request the next page.
impl EventHandler for PosterGridState {
    type Event = ScrollMetrics;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::ScrollUp => self.scroll_state.scroll_up(),
            TuiEvent::ScrollDown => self.scroll_state.scroll_down(),
            TuiEvent::ScrollPageUp => self.scroll_state.scroll_page_up(),
            TuiEvent::ScrollPageDown => self.scroll_state.scroll_page_down(),
            TuiEvent::Home => self.scroll_state.scroll_to_top(),
            TuiEvent::End => self.scroll_state.scroll_to_bottom(),
            _ => return None,
        }
        self.clamp_scroll();
        Some(self.metrics())
    }
}
