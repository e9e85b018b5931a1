//! HTTP page source: reads `<base>/data/page<N>.json` with reqwest.

use async_trait::async_trait;
use log::{debug, info, warn};

use crate::catalog::types::{parse_page, peek_title};
use crate::catalog::{CatalogError, Page, PageSource};

/// Builds the URL of page resource `page` under `base_url`.
pub fn page_url(base_url: &str, page: u32) -> String {
    format!("{}/data/page{}.json", base_url, page)
}

/// Builds the URL of an image asset under `base_url`.
///
/// `relative_path` is used verbatim; a malformed fragment yields a URL
/// that simply fails to load.
pub fn asset_url(base_url: &str, relative_path: &str) -> String {
    format!("{}/images/{}", base_url, relative_path)
}

/// Catalog pages served over plain HTTP.
pub struct HttpPageSource {
    base_url: String,
    client: reqwest::Client,
}

impl HttpPageSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl PageSource for HttpPageSource {
    fn name(&self) -> &str {
        "http"
    }

    async fn fetch_page(&self, page: u32) -> Result<Page, CatalogError> {
        let url = page_url(&self.base_url, page);
        info!("Fetching page {} from {}", page, url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        debug!("Page {} response status: {}", page, response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            warn!("Page {} request failed with HTTP {}", page, status);
            return Err(CatalogError::Status { status });
        }

        let body = response
            .text()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        let parsed = parse_page(&body).map_err(|e| CatalogError::Parse {
            message: e.to_string(),
            title: peek_title(&body),
        })?;
        debug!(
            "Page {} decoded: title={:?}, items={}",
            page,
            parsed.title,
            parsed.movies.len()
        );
        Ok(parsed)
    }
}
