//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::catalog::{Movie, Page};
use crate::core::state::App;

/// A movie whose poster path is derived from its name.
pub fn movie(name: &str) -> Movie {
    Movie::new(name, format!("{}.jpg", name.to_lowercase().replace(' ', "-")))
}

/// A page resource holding `names` in order.
pub fn page_of(title: &str, names: &[&str]) -> Page {
    Page {
        title: title.to_string(),
        movies: names.iter().map(|n| movie(n)).collect(),
    }
}

/// Creates a test App with the default scroll threshold.
pub fn test_app() -> App {
    App::default()
}
