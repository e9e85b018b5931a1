//! Catalog domain types and the page resource wire format.

use serde::Deserialize;

/// One movie in the collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movie {
    pub name: String,
    /// Relative path fragment under `<base>/images/`.
    pub poster_image: String,
}

impl Movie {
    pub fn new(name: impl Into<String>, poster_image: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            poster_image: poster_image.into(),
        }
    }
}

/// A decoded page resource: the page title plus its batch of movies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub title: String,
    pub movies: Vec<Movie>,
}

// ============================================================================
// Wire Types
// ============================================================================

/// Top-level body of `data/page<N>.json`.
#[derive(Deserialize, Debug)]
pub(crate) struct PageDocument {
    page: PageBody,
}

#[derive(Deserialize, Debug)]
struct PageBody {
    #[serde(default)]
    title: Option<String>,
    #[serde(rename = "content-items")]
    content_items: ContentItems,
}

#[derive(Deserialize, Debug)]
struct ContentItems {
    content: Vec<ContentItem>,
}

#[derive(Deserialize, Debug)]
struct ContentItem {
    name: String,
    #[serde(rename = "poster-image")]
    poster_image: String,
}

impl From<PageDocument> for Page {
    fn from(doc: PageDocument) -> Self {
        let movies = doc
            .page
            .content_items
            .content
            .into_iter()
            .map(|item| Movie {
                name: item.name,
                poster_image: item.poster_image,
            })
            .collect();

        Page {
            title: doc.page.title.unwrap_or_default(),
            movies,
        }
    }
}

/// Only the title of a page resource, for bodies that fail to decode fully.
#[derive(Deserialize, Debug)]
struct TitleDocument {
    page: TitleBody,
}

#[derive(Deserialize, Debug)]
struct TitleBody {
    #[serde(default)]
    title: Option<String>,
}

/// Reads just `page.title` from a body, ignoring everything else.
pub fn peek_title(body: &str) -> Option<String> {
    serde_json::from_str::<TitleDocument>(body)
        .ok()
        .and_then(|doc| doc.page.title)
}

/// Parses a page resource body. Unknown fields are ignored; missing ones are errors.
pub fn parse_page(body: &str) -> Result<Page, serde_json::Error> {
    serde_json::from_str::<PageDocument>(body).map(Page::from)
}
