//! # Catalog
//!
//! Where movies come from. The catalog is a numbered series of JSON page
//! resources; this module knows their wire format and how to fetch them.
//! It knows nothing about pagination policy or rendering.

pub mod http;
pub mod source;
pub mod types;

pub use http::{HttpPageSource, asset_url, page_url};
pub use source::{CatalogError, PageSource};
pub use types::{Movie, Page, parse_page};
