use std::fmt;

use async_trait::async_trait;

use super::types::Page;

/// Errors that can occur while fetching a page resource.
///
/// Every variant ends pagination the same way; the distinction only
/// matters for the log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Transport failure (DNS, connection refused, body read interrupted).
    Network(String),
    /// The server answered with a non-success status.
    Status { status: u16 },
    /// The body was not a page resource (invalid JSON or missing fields).
    /// `title` is set when the page title could still be read.
    Parse {
        message: String,
        title: Option<String>,
    },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Network(msg) => write!(f, "network error: {msg}"),
            CatalogError::Status { status } => write!(f, "unexpected HTTP status {status}"),
            CatalogError::Parse { message, .. } => write!(f, "parse error: {message}"),
        }
    }
}

impl std::error::Error for CatalogError {}

impl CatalogError {
    /// Title of the page that failed to decode, if it had a readable one.
    pub fn page_title(&self) -> Option<&str> {
        match self {
            CatalogError::Parse { title, .. } => title.as_deref(),
            _ => None,
        }
    }
}

/// Anything that can hand out numbered page resources.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Returns the name of the source, for logging.
    fn name(&self) -> &str;

    /// Fetches and decodes page `page` (1-based).
    async fn fetch_page(&self, page: u32) -> Result<Page, CatalogError>;
}
