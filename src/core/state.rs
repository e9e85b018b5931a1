//! # Application State
//!
//! Core state of the movie collection view. This module contains domain
//! logic only - no TUI-specific types. Presentation state (scroll offsets,
//! hover, the search box's cursor) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── movies: Vec<Movie>          // accumulated, append-only for one mount
//! ├── page: u32                   // last page requested, starts at 1
//! ├── pagination: Pagination      // Idle | Fetching{page, token} | Exhausted
//! ├── title: String               // from the most recent page resource
//! ├── search_query: String        // current filter text
//! ├── search_visible: bool        // search box shown
//! ├── scroll_threshold: u32       // near-bottom margin, in rows
//! ├── status_message: String      // footer text
//! └── mounted: bool               // mount happened and unmount has not
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::catalog::Movie;
use crate::core::config::{DEFAULT_SCROLL_THRESHOLD, ResolvedConfig};
use crate::core::pagination::{FetchToken, Pagination};
use crate::core::search::{ListedMovie, filter_movies};

pub struct App {
    pub movies: Vec<Movie>,
    pub page: u32,
    pub pagination: Pagination,
    pub title: String,
    pub search_query: String,
    pub search_visible: bool,
    pub scroll_threshold: u32,
    pub status_message: String,
    pub mounted: bool,
    next_token: u64,
}

impl Default for App {
    fn default() -> Self {
        Self::new(DEFAULT_SCROLL_THRESHOLD)
    }
}

impl App {
    pub fn new(scroll_threshold: u32) -> Self {
        Self {
            movies: Vec::new(),
            page: 1,
            pagination: Pagination::Idle,
            title: String::new(),
            search_query: String::new(),
            search_visible: false,
            scroll_threshold,
            status_message: String::new(),
            mounted: false,
            next_token: 0,
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self::new(config.scroll_threshold)
    }

    pub fn has_more(&self) -> bool {
        self.pagination.has_more()
    }

    /// Movies matching the current search query, keyed by unfiltered position.
    pub fn filtered_movies(&self) -> Vec<ListedMovie<'_>> {
        filter_movies(&self.movies, &self.search_query)
    }

    /// Discards everything a previous mount accumulated. Settings and the
    /// token counter survive, so tokens from the old mount never match again.
    pub(crate) fn reset_view(&mut self) {
        self.movies.clear();
        self.page = 1;
        self.pagination = Pagination::Idle;
        self.title.clear();
        self.search_query.clear();
        self.search_visible = false;
        self.status_message.clear();
    }

    /// Moves into `Fetching` for `self.page` under a fresh token.
    pub(crate) fn begin_fetch(&mut self) -> FetchToken {
        let token = FetchToken::new(self.next_token);
        self.next_token += 1;
        self.pagination = Pagination::Fetching {
            page: self.page,
            token,
        };
        token
    }
}
