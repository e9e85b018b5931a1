//! # Core Application Logic
//!
//! This module contains the collection view's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                   ┌────────────┴────────────┐
//!                   ▼                         ▼
//!            ┌────────────┐            ┌────────────┐
//!            │    TUI     │            │  Catalog   │
//!            │  Adapter   │            │  (HTTP)    │
//!            │ (ratatui)  │            │            │
//!            └────────────┘            └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all view state in one place
//! - [`action`]: The `Action` enum, `Effect` enum and `update()`
//! - [`pagination`]: The fetch state machine and scroll geometry
//! - [`search`]: Query filtering with stable keys
//! - [`config`]: Config file, env and CLI resolution

pub mod action;
pub mod config;
pub mod pagination;
pub mod search;
pub mod state;
