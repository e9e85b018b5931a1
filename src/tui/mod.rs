//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the collection
//! view, translates input into core::Action values and carries out the
//! Effects that `update()` returns.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! - **Fetching**: draws every ~80ms so the footer spinner moves.
//! - **Idle**: sleeps up to 500ms, only redraws on events, results from
//!   background fetches, or terminal resize.
//!
//! ## Fetches
//!
//! Each `Effect::FetchPage` spawns one tokio task that sends a
//! `PageLoaded` or `PageFailed` action back over an mpsc channel. Results
//! carry the token they were started with, so anything arriving after the
//! view is left is ignored by `update()`; the task itself is aborted too.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use ratatui::layout::Size;
use tokio::task::AbortHandle;

use crate::catalog::{HttpPageSource, PageSource, asset_url};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::pagination::FetchToken;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{PosterGridState, SearchBox, SearchEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::ui::Hit;

/// Icon assets shipped with the catalog.
const BACK_ICON: &str = "Back.png";
const SEARCH_ICON: &str = "search.png";

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    // Persistent component states
    pub grid: PosterGridState,
    pub search_box: SearchBox,
    // Props for the poster tiles
    pub base_url: String,
    pub tile_size: Size,
}

impl TuiState {
    pub fn new(base_url: String, tile_size: Size) -> Self {
        Self {
            grid: PosterGridState::new(),
            search_box: SearchBox::new(),
            base_url,
            tile_size,
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self::new(
            config.base_url.clone(),
            Size::new(config.tile_width, config.tile_height),
        )
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBlock, // Non-blinking: avoids blink timer reset from continuous redraws
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, DisableBracketedPaste, Hide);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let source: Arc<dyn PageSource> = Arc::new(HttpPageSource::new(config.base_url.clone()));
    info!(
        "Catalog source '{}': icons {} and {}",
        source.name(),
        asset_url(&config.base_url, BACK_ICON),
        asset_url(&config.base_url, SEARCH_ICON)
    );

    let mut app = App::from_config(&config);
    let mut tui = TuiState::from_config(&config);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background fetches
    let (tx, rx) = mpsc::channel();
    let mut active_fetch: Option<AbortHandle> = None;

    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    let effect = update(&mut app, Action::Mount);
    let mut should_quit = apply_effect(effect, &source, &tx, &mut active_fetch);

    while !should_quit {
        let fetching = app.pagination.is_fetching();
        if fetching {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short while fetching (~12fps), long when idle
        let timeout = if fetching {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let frame_area = terminal.get_frame().area();
            let actions = route_event(&event, &app, &mut tui, frame_area);
            for action in actions {
                let effect = update(&mut app, action);
                if apply_effect(effect, &source, &tx, &mut active_fetch) {
                    should_quit = true;
                }
            }
            if should_quit {
                break;
            }
        }

        if should_quit {
            break;
        }

        // Handle results from background fetches
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            let effect = update(&mut app, action);
            if apply_effect(effect, &source, &tx, &mut active_fetch) {
                should_quit = true;
                break;
            }
        }
    }

    // Leaving the view: nothing in flight may outlive it
    abort_fetch(&mut active_fetch);

    ratatui::restore();
    info!("Collection view closed");
    Ok(())
}

/// Translates one input event into the actions it causes.
///
/// Component-local events (typing in the search box, hover) update
/// `TuiState` directly and are only turned into actions when the core
/// state needs to know.
fn route_event(
    event: &TuiEvent,
    app: &App,
    tui: &mut TuiState,
    frame_area: ratatui::layout::Rect,
) -> Vec<Action> {
    match event {
        // Resize just needs a redraw
        TuiEvent::Resize => Vec::new(),
        TuiEvent::ForceQuit => vec![Action::Quit],
        TuiEvent::ToggleSearch => vec![Action::ToggleSearch],

        // Mouse hover: only the grid reacts
        TuiEvent::MouseMove(col, row) => {
            let grid_area = ui::layout_areas(frame_area, app.search_visible).grid;
            tui.grid.hovered_key = tui.grid.tile_at(*col, *row, grid_area);
            Vec::new()
        }

        TuiEvent::MouseClick(col, row) => {
            match ui::hit_test(*col, *row, frame_area, app.search_visible) {
                Some(Hit::Back) => vec![Action::Back],
                Some(Hit::Search) => vec![Action::ToggleSearch],
                // Clicking a tile selects it for terminals without motion reports
                Some(Hit::Grid) => {
                    let grid_area = ui::layout_areas(frame_area, app.search_visible).grid;
                    tui.grid.hovered_key = tui.grid.tile_at(*col, *row, grid_area);
                    Vec::new()
                }
                None => {
                    tui.grid.hovered_key = None;
                    Vec::new()
                }
            }
        }

        // Scroll events always go to the grid
        TuiEvent::ScrollUp
        | TuiEvent::ScrollDown
        | TuiEvent::ScrollPageUp
        | TuiEvent::ScrollPageDown => scroll_grid(event, tui),

        // Search box open: it owns the keyboard
        _ if app.search_visible => match event {
            TuiEvent::Escape => vec![Action::ToggleSearch],
            _ => match tui.search_box.handle_event(event) {
                Some(SearchEvent::QueryChanged(query)) => vec![Action::SetSearchQuery(query)],
                None => Vec::new(),
            },
        },

        // Search box closed: single-key commands
        TuiEvent::InputChar('q') => vec![Action::Quit],
        TuiEvent::InputChar('/') => vec![Action::ToggleSearch],
        TuiEvent::Escape | TuiEvent::Backspace => vec![Action::Back],
        TuiEvent::Home | TuiEvent::End => scroll_grid(event, tui),
        _ => Vec::new(),
    }
}

fn scroll_grid(event: &TuiEvent, tui: &mut TuiState) -> Vec<Action> {
    match tui.grid.handle_event(event) {
        Some(metrics) => vec![Action::Scrolled(metrics)],
        None => Vec::new(),
    }
}

/// Performs the I/O described by `effect`. Returns true when the view should close.
fn apply_effect(
    effect: Effect,
    source: &Arc<dyn PageSource>,
    tx: &mpsc::Sender<Action>,
    active_fetch: &mut Option<AbortHandle>,
) -> bool {
    match effect {
        Effect::None => false,
        Effect::FetchPage { page, token } => {
            *active_fetch = Some(spawn_fetch(source.clone(), page, token, tx.clone()));
            false
        }
        Effect::NavigateBack => {
            info!("Back requested, leaving collection view");
            abort_fetch(active_fetch);
            true
        }
        Effect::Quit => {
            abort_fetch(active_fetch);
            true
        }
    }
}

fn abort_fetch(active_fetch: &mut Option<AbortHandle>) {
    if let Some(handle) = active_fetch.take() {
        debug!("Aborting in-flight fetch");
        handle.abort();
    }
}

fn spawn_fetch(
    source: Arc<dyn PageSource>,
    page: u32,
    token: FetchToken,
    tx: mpsc::Sender<Action>,
) -> AbortHandle {
    info!("Spawning fetch for page {} (token={})", page, token.id());
    let handle = tokio::spawn(async move {
        let action = match source.fetch_page(page).await {
            Ok(page) => Action::PageLoaded { token, page },
            Err(error) => Action::PageFailed { token, error },
        };
        if tx.send(action).is_err() {
            warn!("Failed to deliver page {} result: receiver dropped", page);
        }
    });
    handle.abort_handle()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;
    use ratatui::layout::Rect;
    use wiremock::{
        matchers::{method, path},
        Mock, MockServer, ResponseTemplate,
    };

    const FRAME: Rect = Rect {
        x: 0,
        y: 0,
        width: 80,
        height: 24,
    };

    fn test_tui() -> TuiState {
        TuiState::new("http://localhost:3000".to_string(), Size::new(20, 6))
    }

    #[test]
    fn test_force_quit_always_quits() {
        let mut app = test_app();
        app.search_visible = true;
        let mut tui = test_tui();
        assert_eq!(
            route_event(&TuiEvent::ForceQuit, &app, &mut tui, FRAME),
            vec![Action::Quit]
        );
    }

    #[test]
    fn test_q_quits_only_when_search_is_closed() {
        let mut app = test_app();
        let mut tui = test_tui();
        assert_eq!(
            route_event(&TuiEvent::InputChar('q'), &app, &mut tui, FRAME),
            vec![Action::Quit]
        );

        app.search_visible = true;
        assert_eq!(
            route_event(&TuiEvent::InputChar('q'), &app, &mut tui, FRAME),
            vec![Action::SetSearchQuery("q".to_string())]
        );
    }

    #[test]
    fn test_escape_closes_search_then_goes_back() {
        let mut app = test_app();
        let mut tui = test_tui();
        app.search_visible = true;
        assert_eq!(
            route_event(&TuiEvent::Escape, &app, &mut tui, FRAME),
            vec![Action::ToggleSearch]
        );
        app.search_visible = false;
        assert_eq!(
            route_event(&TuiEvent::Escape, &app, &mut tui, FRAME),
            vec![Action::Back]
        );
    }

    #[test]
    fn test_clicks_on_header_icons() {
        let app = test_app();
        let mut tui = test_tui();
        assert_eq!(
            route_event(&TuiEvent::MouseClick(1, 0), &app, &mut tui, FRAME),
            vec![Action::Back]
        );
        assert_eq!(
            route_event(&TuiEvent::MouseClick(78, 0), &app, &mut tui, FRAME),
            vec![Action::ToggleSearch]
        );
        assert!(route_event(&TuiEvent::MouseClick(40, 10), &app, &mut tui, FRAME).is_empty());
    }

    #[test]
    fn test_scroll_reports_metrics() {
        let app = test_app();
        let mut tui = test_tui();
        let actions = route_event(&TuiEvent::ScrollDown, &app, &mut tui, FRAME);
        assert!(matches!(actions.as_slice(), [Action::Scrolled(_)]));
    }

    #[test]
    fn test_grid_click_selects_tile_and_outside_click_clears() {
        let mut app = test_app();
        let mut tui = test_tui();
        app.movies = vec![crate::test_support::movie("Dune")];
        // Geometry as a render would leave it: one 20x6 tile at the grid origin
        tui.grid.columns = 3;
        tui.grid.tile_size = Size::new(20, 6);
        tui.grid.content_height = 6;
        tui.grid.viewport_height = 22;
        tui.grid.rendered_keys = vec![0];

        assert!(route_event(&TuiEvent::MouseClick(2, 2), &app, &mut tui, FRAME).is_empty());
        assert_eq!(tui.grid.hovered_key, Some(0));

        // Title row between the icons
        route_event(&TuiEvent::MouseClick(40, 0), &app, &mut tui, FRAME);
        assert_eq!(tui.grid.hovered_key, None);
    }

    /// Waits up to `timeout` for the fetch task to report back.
    async fn recv_action(rx: &mpsc::Receiver<Action>, timeout: Duration) -> Option<Action> {
        let deadline = Instant::now() + timeout;
        while Instant::now() < deadline {
            if let Ok(action) = rx.try_recv() {
                return Some(action);
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        None
    }

    async fn serve_first_page(server: &MockServer, delay: Duration) {
        Mock::given(method("GET"))
            .and(path("/data/page1.json"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(
                        r#"{"page":{"title":"Drama","content-items":{"content":[{"name":"Dune","poster-image":"p1.jpg"}]}}}"#,
                    )
                    .set_delay(delay),
            )
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_fetch_effect_reports_page_with_its_token() {
        let mock_server = MockServer::start().await;
        serve_first_page(&mock_server, Duration::ZERO).await;
        let source: Arc<dyn PageSource> = Arc::new(HttpPageSource::new(mock_server.uri()));
        let (tx, rx) = mpsc::channel();
        let mut active = None;

        let token = FetchToken::new(7);
        assert!(!apply_effect(Effect::FetchPage { page: 1, token }, &source, &tx, &mut active));
        assert!(active.is_some());

        match recv_action(&rx, Duration::from_secs(5)).await {
            Some(Action::PageLoaded { token: got, page }) => {
                assert_eq!(got, token);
                assert_eq!(page.title, "Drama");
                assert_eq!(page.movies.len(), 1);
            }
            other => panic!("expected PageLoaded, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_failure_reports_page_failed_with_its_token() {
        // Nothing mounted: every request is a 404
        let mock_server = MockServer::start().await;
        let source: Arc<dyn PageSource> = Arc::new(HttpPageSource::new(mock_server.uri()));
        let (tx, rx) = mpsc::channel();
        let mut active = None;

        let token = FetchToken::new(3);
        apply_effect(Effect::FetchPage { page: 1, token }, &source, &tx, &mut active);

        match recv_action(&rx, Duration::from_secs(5)).await {
            Some(Action::PageFailed { token: got, error }) => {
                assert_eq!(got, token);
                assert_eq!(error, crate::catalog::CatalogError::Status { status: 404 });
            }
            other => panic!("expected PageFailed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_leaving_view_aborts_in_flight_fetch() {
        let mock_server = MockServer::start().await;
        serve_first_page(&mock_server, Duration::from_millis(300)).await;
        let source: Arc<dyn PageSource> = Arc::new(HttpPageSource::new(mock_server.uri()));
        let (tx, rx) = mpsc::channel();
        let mut active = None;

        apply_effect(
            Effect::FetchPage {
                page: 1,
                token: FetchToken::new(1),
            },
            &source,
            &tx,
            &mut active,
        );
        assert!(apply_effect(Effect::NavigateBack, &source, &tx, &mut active));
        assert!(active.is_none());

        assert_eq!(recv_action(&rx, Duration::from_millis(800)).await, None);
    }

    #[test]
    fn test_quit_effect_closes_view() {
        let source: Arc<dyn PageSource> = Arc::new(HttpPageSource::new("http://localhost:3000"));
        let (tx, _rx) = mpsc::channel();
        let mut active = None;
        assert!(apply_effect(Effect::Quit, &source, &tx, &mut active));
        assert!(apply_effect(Effect::NavigateBack, &source, &tx, &mut active));
        assert!(!apply_effect(Effect::None, &source, &tx, &mut active));
        assert!(active.is_none());
    }
}
