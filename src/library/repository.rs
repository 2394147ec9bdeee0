use std::sync::Arc;

use log::{info, warn};

use super::store::{BOOKS, DocumentStore, StoreError};
use super::types::SavedBook;
use crate::core::resource::Resource;

/// Read side of the `books` collection.
///
/// Returns every document, whoever owns it. Callers narrow to the current
/// user with [`crate::library::shelf::Shelf`].
#[derive(Clone)]
pub struct LibraryRepository {
    store: Arc<dyn DocumentStore>,
}

impl LibraryRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub async fn get_all_saved_books(&self) -> Resource<Vec<SavedBook>> {
        let result = self.load().await;
        match &result {
            Ok(books) => info!("Loaded {} saved books from {}", books.len(), self.store.name()),
            Err(e) => warn!("Loading saved books failed: {}", e),
        }
        Resource::from_result(result)
    }

    async fn load(&self) -> Result<Vec<SavedBook>, StoreError> {
        self.store
            .list(BOOKS)
            .await?
            .iter()
            .map(|doc| -> Result<SavedBook, StoreError> {
                let mut book: SavedBook = doc.decode()?;
                // Documents saved before their id patch landed still know their key
                if book.id.is_empty() {
                    book.id = doc.id.clone();
                }
                Ok(book)
            })
            .collect()
    }
}
