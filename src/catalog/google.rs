//! Google Books catalog over the public volumes API.
//!
//! - `GET {base}/volumes?q={query}` for search
//! - `GET {base}/volumes/{id}` for a single book
//!
//! An API key is optional; anonymous requests are rate limited but work.

use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::Url;
use serde::de::DeserializeOwned;

use super::provider::{Catalog, CatalogError};
use super::types::{CatalogItem, SearchResponse};
use crate::core::config::DEFAULT_CATALOG_BASE_URL;

pub struct GoogleBooksCatalog {
    base_url: String,
    api_key: Option<String>,
    client: reqwest::Client,
}

impl GoogleBooksCatalog {
    pub fn new(base_url: Option<String>, api_key: Option<String>) -> Self {
        let base_url = base_url
            .unwrap_or_else(|| DEFAULT_CATALOG_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        Self {
            base_url,
            api_key,
            client: reqwest::Client::new(),
        }
    }

    /// `{base}/seg/...` with each segment percent-encoded, so an id can't
    /// reach into the query or fragment.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, CatalogError> {
        let invalid = |detail: String| {
            CatalogError::Network(format!("invalid catalog URL {}: {}", self.base_url, detail))
        };
        let mut url = Url::parse(&self.base_url).map_err(|e| invalid(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| invalid("cannot carry a path".to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Issue a GET and decode the JSON body, mapping failures onto `CatalogError`.
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        query: &[(&str, &str)],
    ) -> Result<T, CatalogError> {
        let mut request = self.client.get(url).query(query);
        if let Some(key) = &self.api_key {
            request = request.query(&[("key", key.as_str())]);
        }

        let response = request
            .send()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        debug!("Catalog response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Catalog API error: {} - {}", status, err_body);
            return Err(CatalogError::Api {
                status,
                message: err_body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;
        serde_json::from_str(&body).map_err(|e| CatalogError::Parse(e.to_string()))
    }
}

#[async_trait]
impl Catalog for GoogleBooksCatalog {
    fn name(&self) -> &str {
        "googlebooks"
    }

    async fn search(&self, query: &str) -> Result<Vec<CatalogItem>, CatalogError> {
        info!("Catalog search: q={:?}", query);
        let url = self.endpoint(&["volumes"])?;
        let response: SearchResponse = self.get_json(url, &[("q", query)]).await?;
        info!(
            "Catalog search returned {} items (total {})",
            response.items.len(),
            response.total_items
        );
        Ok(response.items)
    }

    async fn volume(&self, id: &str) -> Result<CatalogItem, CatalogError> {
        info!("Catalog volume lookup: id={}", id);
        let url = self.endpoint(&["volumes", id])?;
        self.get_json(url, &[]).await
    }
}
