//! # Services
//!
//! Runs the I/O that `update()` asks for. Each [`Effect`] is one call to the
//! catalog or the document store; its result is turned back into the
//! [`Action`] the reducer expects. Failures never escape: they become
//! `Resource::Failure` or an `Err(message)` inside the action.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::{info, warn};
use serde_json::{Map, Value};

use crate::catalog::{Catalog, CatalogRepository, GoogleBooksCatalog};
use crate::core::action::{Action, Effect};
use crate::core::config::ResolvedConfig;
use crate::core::resource::Resource;
use crate::core::session;
use crate::library::accounts::{self, AuthError};
use crate::library::{
    BOOKS, CurrentUser, DocumentStore, FileStore, LibraryRepository, SavedBook, SavedBookPatch,
    StoreError,
};

pub struct Services {
    pub catalog: CatalogRepository,
    pub library: LibraryRepository,
    store: Arc<dyn DocumentStore>,
    session_path: PathBuf,
}

impl Services {
    pub fn new(
        catalog: Arc<dyn Catalog>,
        store: Arc<dyn DocumentStore>,
        session_path: PathBuf,
    ) -> Self {
        Self {
            catalog: CatalogRepository::new(catalog),
            library: LibraryRepository::new(store.clone()),
            store,
            session_path,
        }
    }

    /// Google Books catalog plus a file store under the configured directory.
    pub fn from_config(config: &ResolvedConfig) -> Result<Self, StoreError> {
        let catalog = GoogleBooksCatalog::new(
            Some(config.catalog_base_url.clone()),
            config.catalog_api_key.clone(),
        );
        let store = FileStore::open(&config.store_dir)?;
        Ok(Self::new(
            Arc::new(catalog),
            Arc::new(store),
            session::session_path(&config.store_dir),
        ))
    }

    pub fn store(&self) -> &dyn DocumentStore {
        self.store.as_ref()
    }

    pub fn session_path(&self) -> &Path {
        &self.session_path
    }

    /// Run one effect. `None` when the effect produces nothing to report.
    pub async fn perform(&self, effect: Effect) -> Option<Action> {
        match effect {
            Effect::None | Effect::Quit => None,
            Effect::Search(query) => {
                info!("Searching catalog for {:?}", query);
                Some(Action::SearchCompleted(
                    self.catalog.search_books(&query).await,
                ))
            }
            Effect::LoadBook(id) => {
                info!("Loading catalog volume {}", id);
                Some(Action::BookLoaded(self.catalog.get_book_detail(&id).await))
            }
            Effect::LoadLibrary => Some(Action::LibraryLoaded(
                self.library.get_all_saved_books().await,
            )),
            Effect::SaveBook(book) => Some(Action::BookSaved(
                self.save_book(book).await.map_err(|e| e.to_string()),
            )),
            Effect::UpdateBook { id, patch } => Some(Action::BookUpdated(
                self.update_book(&id, &patch).await.map_err(|e| e.to_string()),
            )),
            Effect::DeleteBook(id) => Some(Action::BookDeleted(
                self.delete_book(&id).await.map_err(|e| e.to_string()),
            )),
            Effect::SignIn(email) => {
                let result = accounts::sign_in(self.store(), &email).await;
                Some(Action::SignedIn(self.remember(result)))
            }
            Effect::CreateAccount(email) => {
                let result = accounts::create_account(self.store(), &email).await;
                Some(Action::SignedIn(self.remember(result)))
            }
            Effect::SignOut => {
                if let Err(e) = session::clear_session(&self.session_path) {
                    warn!("Failed to clear session: {}", e);
                }
                None
            }
        }
    }

    /// Insert the book, then write the generated id back into the document
    /// so later reads see it as a field.
    async fn save_book(&self, book: SavedBook) -> Result<String, StoreError> {
        let fields = serde_json::to_value(&book).map_err(StoreError::Parse)?;
        let id = self.store.add(BOOKS, fields).await?;

        let mut patch = Map::new();
        patch.insert("id".to_string(), Value::String(id.clone()));
        self.store.update(BOOKS, &id, patch).await?;

        info!(
            "Saved {:?} ({}) for {} as {}",
            book.title, book.google_book_id, book.user_id, id
        );
        Ok(id)
    }

    async fn update_book(&self, id: &str, patch: &SavedBookPatch) -> Result<(), StoreError> {
        self.store.update(BOOKS, id, patch.to_fields()).await?;
        info!("Updated book {}", id);
        Ok(())
    }

    async fn delete_book(&self, id: &str) -> Result<(), StoreError> {
        self.store.delete(BOOKS, id).await?;
        info!("Deleted book {}", id);
        Ok(())
    }

    /// Persist a successful sign-in so the next launch skips the login screen.
    fn remember(&self, result: Result<CurrentUser, AuthError>) -> Resource<CurrentUser> {
        if let Ok(user) = &result
            && let Err(e) = session::save_session(&self.session_path, user)
        {
            warn!("Failed to save session: {}", e);
        }
        Resource::from_result(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{test_services, test_user};

    #[test]
    fn test_quit_and_none_report_nothing() {
        let services = test_services();
        assert_eq!(tokio_test::block_on(services.perform(Effect::None)), None);
        assert_eq!(tokio_test::block_on(services.perform(Effect::Quit)), None);
    }

    #[test]
    fn test_save_writes_id_field() {
        let services = test_services();
        let book = SavedBook {
            title: "Dune".to_string(),
            google_book_id: "vol-1".to_string(),
            user_id: test_user().id,
            ..Default::default()
        };

        let id = match tokio_test::block_on(services.perform(Effect::SaveBook(book))) {
            Some(Action::BookSaved(Ok(id))) => id,
            other => panic!("unexpected {other:?}"),
        };

        let books = tokio_test::block_on(services.library.get_all_saved_books());
        let books = books.data().unwrap();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].id, id);
        assert_eq!(books[0].google_book_id, "vol-1");
    }

    #[test]
    fn test_update_missing_book_reports_error() {
        let services = test_services();
        let patch = SavedBookPatch {
            notes: Some("gone".to_string()),
            ..Default::default()
        };
        let action = tokio_test::block_on(services.perform(Effect::UpdateBook {
            id: "nope".to_string(),
            patch,
        }));
        assert!(matches!(action, Some(Action::BookUpdated(Err(_)))));
    }

    #[test]
    fn test_create_account_remembers_session() {
        let services = test_services();
        let action = tokio_test::block_on(
            services.perform(Effect::CreateAccount("ada@example.com".to_string())),
        );
        let user = match action {
            Some(Action::SignedIn(Resource::Success(user))) => user,
            other => panic!("unexpected {other:?}"),
        };
        assert_eq!(user.display_name, "ada");
        assert_eq!(session::load_session(services.session_path()), Some(user));

        tokio_test::block_on(services.perform(Effect::SignOut));
        assert_eq!(session::load_session(services.session_path()), None);
    }

    #[test]
    fn test_unknown_account_is_failure() {
        let services = test_services();
        let action = tokio_test::block_on(
            services.perform(Effect::SignIn("nobody@example.com".to_string())),
        );
        assert!(matches!(action, Some(Action::SignedIn(Resource::Failure(_)))));
        assert_eq!(session::load_session(services.session_path()), None);
    }
}
