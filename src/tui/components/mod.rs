//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as parameters:
//! - `Header`: Back icon, page title, search icon
//! - `PosterTile`: One movie's poster placeholder and title
//! - `Footer`: Status line and key hints
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit events:
//! - `SearchBox`: Single-line query input
//! - `PosterGrid`: Scrollable tile grid with geometry caching
//!
//! ## Props-Based Data Flow
//!
//! Components receive external data as "props" (struct fields), not by
//! directly accessing global state. The base URL, for instance, reaches
//! `PosterTile` through `PosterGrid`, never through the environment.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── header.rs        (Top bar)
//! ├── search_box.rs    (Query input)
//! ├── poster_tile.rs   (Single movie renderer)
//! ├── poster_grid.rs   (Scrollable tile container)
//! └── footer.rs        (Status and hints)
//! ```

pub mod footer;
pub mod header;
pub mod poster_grid;
pub mod poster_tile;
pub mod search_box;

pub use footer::Footer;
pub use header::Header;
pub use poster_grid::{PosterGrid, PosterGridState};
pub use poster_tile::PosterTile;
pub use search_box::{SearchBox, SearchEvent};
