//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use async_trait::async_trait;

use crate::catalog::{Catalog, CatalogError, CatalogItem};
use crate::core::config::DEFAULT_QUERY;
use crate::core::session;
use crate::core::state::App;
use crate::library::{CurrentUser, FileStore};
use crate::services::Services;

/// A catalog with nothing in it, for tests that don't need real API calls.
pub struct EmptyCatalog;

#[async_trait]
impl Catalog for EmptyCatalog {
    fn name(&self) -> &str {
        "empty"
    }

    async fn search(&self, _query: &str) -> Result<Vec<CatalogItem>, CatalogError> {
        Ok(Vec::new())
    }

    async fn volume(&self, id: &str) -> Result<CatalogItem, CatalogError> {
        Err(CatalogError::Api {
            status: 404,
            message: format!("no volume {id}"),
        })
    }
}

/// Services over an empty catalog and a fresh store in a temp directory.
pub fn test_services() -> Services {
    let dir = std::env::temp_dir().join(format!("shelf-test-{}", uuid::Uuid::new_v4()));
    let store = FileStore::open(&dir).unwrap();
    Services::new(
        Arc::new(EmptyCatalog),
        Arc::new(store),
        session::session_path(&dir),
    )
}

/// Creates a signed-out test App on the splash screen.
pub fn test_app() -> App {
    App::new(Arc::new(test_services()), DEFAULT_QUERY.to_string(), None)
}

pub fn test_user() -> CurrentUser {
    CurrentUser {
        id: "user-1".to_string(),
        email: "ada@example.com".to_string(),
        display_name: "ada".to_string(),
    }
}
