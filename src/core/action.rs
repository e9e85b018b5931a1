//! # Actions
//!
//! Everything that can happen in the collection view becomes an `Action`.
//! The view appears? That's `Action::Mount`.
//! A page arrives? That's `Action::PageLoaded { token, page }`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state and returns an `Effect` describing the I/O the caller has to
//! perform. No side effects here. I/O happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, error, info};

use crate::catalog::{CatalogError, Page};
use crate::core::pagination::{FetchToken, Pagination, ScrollMetrics};
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The view was shown. Starts from page 1 with an empty list; a mount
    /// while already mounted is ignored.
    Mount,
    /// The grid was scrolled (or a scroll key was pressed).
    Scrolled(ScrollMetrics),
    /// A fetch finished with a decoded page.
    PageLoaded { token: FetchToken, page: Page },
    /// A fetch failed.
    PageFailed {
        token: FetchToken,
        error: CatalogError,
    },
    SetSearchQuery(String),
    ToggleSearch,
    Back,
    Quit,
}

/// I/O requested by `update()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Fetch page `page`; report back with `token`.
    FetchPage { page: u32, token: FetchToken },
    /// Leave the view the way a history "back" would.
    NavigateBack,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Mount => {
            if app.mounted {
                debug!("Mount ignored: already mounted");
                return Effect::None;
            }
            app.reset_view();
            app.mounted = true;
            start_fetch(app)
        }
        Action::Scrolled(metrics) => {
            if !metrics.is_near_bottom(app.scroll_threshold) {
                return Effect::None;
            }
            match app.pagination {
                Pagination::Idle if app.mounted => {
                    app.page += 1;
                    start_fetch(app)
                }
                Pagination::Fetching { page, .. } => {
                    debug!("Near bottom while page {} is in flight", page);
                    Effect::None
                }
                _ => Effect::None,
            }
        }
        Action::PageLoaded { token, page } => {
            if !app.pagination.accepts(token) {
                debug!("Dropping stale page result (token={})", token.id());
                return Effect::None;
            }
            app.title = page.title;
            if page.movies.is_empty() {
                info!("Page {} is empty, pagination finished", app.page);
                app.pagination = Pagination::Exhausted;
            } else {
                info!("Page {} added {} movies", app.page, page.movies.len());
                app.movies.extend(page.movies);
                app.pagination = Pagination::Idle;
            }
            refresh_status(app);
            Effect::None
        }
        Action::PageFailed { token, error } => {
            if !app.pagination.accepts(token) {
                debug!("Dropping stale page failure (token={}): {}", token.id(), error);
                return Effect::None;
            }
            error!("Error fetching page {}: {}", app.page, error);
            if let Some(title) = error.page_title() {
                app.title = title.to_string();
            }
            app.pagination = Pagination::Exhausted;
            refresh_status(app);
            Effect::None
        }
        Action::SetSearchQuery(query) => {
            app.search_query = query;
            refresh_status(app);
            Effect::None
        }
        Action::ToggleSearch => {
            app.search_visible = !app.search_visible;
            Effect::None
        }
        Action::Back => {
            unmount(app);
            Effect::NavigateBack
        }
        Action::Quit => {
            unmount(app);
            Effect::Quit
        }
    }
}

fn start_fetch(app: &mut App) -> Effect {
    let token = app.begin_fetch();
    app.status_message = format!("Loading page {}...", app.page);
    Effect::FetchPage {
        page: app.page,
        token,
    }
}

/// Drops the in-flight token so a late result cannot touch this mount's state.
fn unmount(app: &mut App) {
    app.mounted = false;
    if app.pagination.is_fetching() {
        app.pagination = Pagination::Idle;
    }
}

fn refresh_status(app: &mut App) {
    let total = app.movies.len();
    let count = if app.search_query.is_empty() {
        format!("{} movies", total)
    } else {
        format!("{} of {} movies", app.filtered_movies().len(), total)
    };
    app.status_message = match app.pagination {
        Pagination::Exhausted => format!("{} | all pages loaded", count),
        Pagination::Fetching { page, .. } => format!("{} | loading page {}...", count, page),
        Pagination::Idle => count,
    };
}
