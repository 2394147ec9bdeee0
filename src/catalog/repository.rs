use std::sync::Arc;

use log::warn;

use super::provider::Catalog;
use super::types::CatalogItem;
use crate::core::resource::Resource;

/// Wraps a catalog and turns every call into a `Resource`.
///
/// Exactly one request per call. No retries, paging or caching; errors
/// stop here and become `Resource::Failure`.
#[derive(Clone)]
pub struct CatalogRepository {
    catalog: Arc<dyn Catalog>,
}

impl CatalogRepository {
    pub fn new(catalog: Arc<dyn Catalog>) -> Self {
        Self { catalog }
    }

    pub async fn search_books(&self, query: &str) -> Resource<Vec<CatalogItem>> {
        let result = self.catalog.search(query).await;
        if let Err(e) = &result {
            warn!("Search for {:?} failed: {}", query, e);
        }
        Resource::from_result(result)
    }

    pub async fn get_book_detail(&self, id: &str) -> Resource<CatalogItem> {
        let result = self.catalog.volume(id).await;
        if let Err(e) = &result {
            warn!("Detail lookup for {} failed: {}", id, e);
        }
        Resource::from_result(result)
    }
}
