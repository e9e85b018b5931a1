//! # Pagination
//!
//! Explicit state machine that decides when the next page is requested.
//!
//! ```text
//!            mount                       scroll near bottom
//!   (start) ──────► Fetching(1)   Idle ───────────────────► Fetching(page+1)
//!                        │          ▲                             │
//!                        │          └──── loaded, non-empty ──────┤
//!                        │                                        │
//!                        └────────► Exhausted ◄── empty | error ──┘
//! ```
//!
//! Every fetch carries a [`FetchToken`]. A result is only applied when its
//! token matches the fetch currently in flight, so late answers for a
//! fetch that was abandoned (unmount) are dropped.

/// Identifies one issued page fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FetchToken(u64);

impl FetchToken {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn id(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pagination {
    /// Nothing in flight; a near-bottom scroll requests the next page.
    Idle,
    /// A request for `page` is in flight.
    Fetching { page: u32, token: FetchToken },
    /// An empty page or a failure ended pagination for this mount.
    Exhausted,
}

impl Pagination {
    pub fn has_more(&self) -> bool {
        !matches!(self, Pagination::Exhausted)
    }

    pub fn is_fetching(&self) -> bool {
        matches!(self, Pagination::Fetching { .. })
    }

    /// True when `token` belongs to the fetch currently in flight.
    pub fn accepts(&self, token: FetchToken) -> bool {
        matches!(self, Pagination::Fetching { token: current, .. } if *current == token)
    }
}

/// Scroll geometry of the grid viewport, in terminal rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollMetrics {
    /// Offset of the first visible row.
    pub scroll_top: u32,
    /// Total height of the scrollable content.
    pub scroll_height: u32,
    /// Height of the visible viewport.
    pub client_height: u32,
}

impl ScrollMetrics {
    pub fn new(scroll_top: u32, scroll_height: u32, client_height: u32) -> Self {
        Self {
            scroll_top,
            scroll_height,
            client_height,
        }
    }

    /// `scroll_height - scroll_top <= client_height + threshold`
    pub fn is_near_bottom(&self, threshold: u32) -> bool {
        self.scroll_height.saturating_sub(self.scroll_top)
            <= self.client_height.saturating_add(threshold)
    }
}
