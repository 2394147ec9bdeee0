use std::fmt;

use async_trait::async_trait;

use super::types::CatalogItem;

/// Errors that can occur while talking to the catalog.
#[derive(Debug)]
pub enum CatalogError {
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// Catalog returned an error response.
    Api { status: u16, message: String },
    /// Failed to decode the catalog's response.
    Parse(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Network(msg) => write!(f, "network error: {msg}"),
            CatalogError::Api { status, message } => {
                write!(f, "catalog error (HTTP {status}): {message}")
            }
            CatalogError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for CatalogError {}

/// A remote book catalog. One call, one request.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Returns the name of the catalog backend.
    fn name(&self) -> &str;

    /// Full-text search over the catalog.
    async fn search(&self, query: &str) -> Result<Vec<CatalogItem>, CatalogError>;

    /// Fetch a single volume by its catalog id.
    async fn volume(&self, id: &str) -> Result<CatalogItem, CatalogError>;
}
