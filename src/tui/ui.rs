use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::search_box::SEARCH_BOX_HEIGHT;
use crate::tui::components::{Footer, Header, PosterGrid};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};

/// Screen regions of the collection view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewAreas {
    pub header: Rect,
    pub search: Option<Rect>,
    pub grid: Rect,
    pub footer: Rect,
}

/// What a mouse position lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Back,
    Search,
    Grid,
}

pub fn layout_areas(frame_area: Rect, search_visible: bool) -> ViewAreas {
    use Constraint::{Length, Min};
    if search_visible {
        let [header, search, grid, footer] =
            Layout::vertical([Length(1), Length(SEARCH_BOX_HEIGHT), Min(0), Length(1)])
                .areas(frame_area);
        ViewAreas {
            header,
            search: Some(search),
            grid,
            footer,
        }
    } else {
        let [header, grid, footer] =
            Layout::vertical([Length(1), Min(0), Length(1)]).areas(frame_area);
        ViewAreas {
            header,
            search: None,
            grid,
            footer,
        }
    }
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    let areas = layout_areas(frame.area(), app.search_visible);

    let mut header = Header::new(app.title.clone(), app.search_visible);
    header.render(frame, areas.header);

    if let Some(search_area) = areas.search {
        tui.search_box.render(frame, search_area);
    }

    let listed = app.filtered_movies();
    let mut grid = PosterGrid::new(&mut tui.grid, &listed, &tui.base_url, tui.tile_size);
    grid.render(frame, areas.grid);

    let mut footer = Footer::new(
        app.status_message.clone(),
        app.search_visible,
        app.pagination.is_fetching(),
        spinner_frame,
    );
    footer.render(frame, areas.footer);
}

/// Hit test: given a screen cell, find which interactive region (if any) is there
pub fn hit_test(column: u16, row: u16, frame_area: Rect, search_visible: bool) -> Option<Hit> {
    let areas = layout_areas(frame_area, search_visible);
    let position = Position { x: column, y: row };

    if Header::back_region(areas.header).contains(position) {
        Some(Hit::Back)
    } else if Header::search_region(areas.header).contains(position) {
        Some(Hit::Search)
    } else if areas.grid.contains(position) {
        Some(Hit::Grid)
    } else {
        None
    }
}
