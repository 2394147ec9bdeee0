use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use shelf::catalog::{Catalog, CatalogError, CatalogItem, VolumeInfo};
use shelf::core::action::{Action, Effect, update};
use shelf::core::resource::Resource;
use shelf::core::route::Route;
use shelf::core::session;
use shelf::core::state::App;
use shelf::core::viewmodel::UpdateEdit;
use shelf::library::{BOOKS, DocumentStore, FileStore, LibraryRepository};
use shelf::services::Services;

// ============================================================================
// Helper Functions
// ============================================================================

/// A catalog that knows exactly one book.
struct OneBookCatalog;

fn earthsea() -> CatalogItem {
    CatalogItem {
        id: "vol-earthsea".to_string(),
        volume_info: VolumeInfo {
            title: "A Wizard of Earthsea".to_string(),
            authors: vec!["Ursula K. Le Guin".to_string()],
            page_count: Some(183),
            published_date: "1968".to_string(),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[async_trait]
impl Catalog for OneBookCatalog {
    fn name(&self) -> &str {
        "one-book"
    }

    async fn search(&self, _query: &str) -> Result<Vec<CatalogItem>, CatalogError> {
        Ok(vec![earthsea()])
    }

    async fn volume(&self, id: &str) -> Result<CatalogItem, CatalogError> {
        if id == "vol-earthsea" {
            Ok(earthsea())
        } else {
            Err(CatalogError::Api {
                status: 404,
                message: format!("no volume {id}"),
            })
        }
    }
}

fn temp_store_dir() -> PathBuf {
    std::env::temp_dir().join(format!("shelf-it-{}", uuid::Uuid::new_v4()))
}

fn app_at(dir: &Path) -> App {
    let store = FileStore::open(dir).unwrap();
    let services = Services::new(
        Arc::new(OneBookCatalog),
        Arc::new(store),
        session::session_path(dir),
    );
    let user = session::load_session(services.session_path());
    App::new(Arc::new(services), "Android".to_string(), user)
}

/// Apply an action and keep performing effects until the app settles,
/// the way the event loop would.
async fn drive(app: &mut App, action: Action) {
    let mut effect = update(app, action);
    loop {
        if matches!(effect, Effect::None | Effect::Quit) {
            return;
        }
        let services = app.services.clone();
        match services.perform(effect).await {
            Some(next) => effect = update(app, next),
            None => return,
        }
    }
}

// ============================================================================
// End-to-end reading flow
// ============================================================================

#[tokio::test]
async fn test_full_reading_flow() {
    let dir = temp_store_dir();
    let mut app = app_at(&dir);

    drive(&mut app, Action::SplashFinished).await;
    assert_eq!(*app.route(), Route::Login);

    // Sign up
    drive(&mut app, Action::Navigate(Route::CreateAccount)).await;
    drive(&mut app, Action::CreateAccount("Ada@Example.com".to_string())).await;
    assert_eq!(*app.route(), Route::Home);
    let user = app.user.clone().expect("signed in");
    assert_eq!(user.display_name, "ada");
    assert!(app.home.library.data().is_some_and(|b| b.is_empty()));

    // Search and open the book
    drive(&mut app, Action::Navigate(Route::Search)).await;
    assert_eq!(app.search.query, "Android");
    assert_eq!(app.search.results.data().map(Vec::len), Some(1));
    drive(&mut app, Action::Navigate(Route::Detail("vol-earthsea".to_string()))).await;
    assert_eq!(
        app.detail.book.data().map(|b| b.title()),
        Some("A Wizard of Earthsea")
    );

    // Save it
    drive(&mut app, Action::SaveBook).await;
    assert_eq!(*app.route(), Route::Search);
    let books = app.home.books().to_vec();
    assert_eq!(books.len(), 1);
    assert_eq!(books[0].google_book_id, "vol-earthsea");
    assert_eq!(books[0].user_id, user.id);
    assert_eq!(books[0].page_count, Some(183));
    assert!(!books[0].id.is_empty());

    // A second save is refused
    drive(&mut app, Action::Navigate(Route::Detail("vol-earthsea".to_string()))).await;
    drive(&mut app, Action::SaveBook).await;
    assert_eq!(app.status_message, "Already on your reading list");
    assert_eq!(app.home.books().len(), 1);

    // Start reading, rate it
    drive(&mut app, Action::Navigate(Route::Update("vol-earthsea".to_string()))).await;
    assert!(app.update.book.data().is_some());
    drive(&mut app, Action::EditUpdate(UpdateEdit::ToggleStarted)).await;
    drive(&mut app, Action::EditUpdate(UpdateEdit::Rating(5))).await;
    drive(&mut app, Action::EditUpdate(UpdateEdit::Notes("Ged!".to_string()))).await;
    drive(&mut app, Action::SubmitUpdate(Utc::now())).await;
    assert_eq!(app.status_message, "Book Updated Successfully");
    assert_eq!(*app.route(), Route::Home);
    let stats = app.stats();
    assert_eq!(stats.reading, 1);
    assert_eq!(stats.finished, 0);
    assert_eq!(app.home.books()[0].notes, "Ged!");

    // Finish it
    drive(&mut app, Action::Navigate(Route::Update("vol-earthsea".to_string()))).await;
    drive(&mut app, Action::EditUpdate(UpdateEdit::ToggleFinished)).await;
    drive(&mut app, Action::SubmitUpdate(Utc::now())).await;
    let stats = app.stats();
    assert_eq!(stats.reading, 0);
    assert_eq!(stats.finished, 1);
    assert_eq!(stats.favourites, 1);

    // Delete it
    drive(&mut app, Action::Navigate(Route::Update("vol-earthsea".to_string()))).await;
    drive(&mut app, Action::DeleteBook).await;
    assert_eq!(app.status_message, "Book Deleted");
    assert_eq!(*app.route(), Route::Home);
    assert!(app.home.books().is_empty());
}

#[tokio::test]
async fn test_session_survives_restart_until_sign_out() {
    let dir = temp_store_dir();

    let mut app = app_at(&dir);
    drive(&mut app, Action::SplashFinished).await;
    drive(&mut app, Action::CreateAccount("grace@example.com".to_string())).await;
    assert!(app.user.is_some());

    // Next launch goes straight home
    let mut restarted = app_at(&dir);
    assert_eq!(
        restarted.user.as_ref().map(|u| u.email.as_str()),
        Some("grace@example.com")
    );
    drive(&mut restarted, Action::SplashFinished).await;
    assert_eq!(*restarted.route(), Route::Home);

    drive(&mut restarted, Action::SignOut).await;
    assert_eq!(*restarted.route(), Route::Login);
    assert!(app_at(&dir).user.is_none());

    // The account itself is still there
    let mut again = app_at(&dir);
    drive(&mut again, Action::SplashFinished).await;
    drive(&mut again, Action::SignIn("grace@example.com".to_string())).await;
    assert_eq!(*again.route(), Route::Home);
}

#[tokio::test]
async fn test_sign_in_unknown_email_stays_on_login() {
    let dir = temp_store_dir();
    let mut app = app_at(&dir);
    drive(&mut app, Action::SplashFinished).await;
    drive(&mut app, Action::SignIn("nobody@example.com".to_string())).await;

    assert_eq!(*app.route(), Route::Login);
    assert_eq!(app.login.error(), Some("no account for nobody@example.com"));
    assert!(app.user.is_none());
}

// ============================================================================
// Shared collection
// ============================================================================

#[tokio::test]
async fn test_other_users_books_are_not_shown() {
    let dir = temp_store_dir();
    let store = FileStore::open(&dir).unwrap();
    store
        .add(
            BOOKS,
            json!({
                "title": "Someone Else's Book",
                "googleBookId": "vol-other",
                "userId": "another-user",
                "rating": 5.0
            }),
        )
        .await
        .unwrap();

    let mut app = app_at(&dir);
    drive(&mut app, Action::SplashFinished).await;
    drive(&mut app, Action::CreateAccount("ada@example.com".to_string())).await;

    assert_eq!(app.home.books().len(), 1);
    let stats = app.stats();
    assert_eq!(stats.reading + stats.finished + stats.not_started, 0);

    // Opening it by id is refused too
    drive(&mut app, Action::Navigate(Route::Update("vol-other".to_string()))).await;
    assert_eq!(
        app.update.book.error(),
        Some("This book is not on your reading list")
    );
}

#[tokio::test]
async fn test_file_store_persists_across_reopen() {
    let dir = temp_store_dir();
    let id = {
        let store = FileStore::open(&dir).unwrap();
        store.add(BOOKS, json!({ "title": "Emma" })).await.unwrap()
    };

    let store = FileStore::open(&dir).unwrap();
    let docs = store.list(BOOKS).await.unwrap();
    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0].id, id);
    assert_eq!(docs[0].fields["title"], "Emma");

    store.delete(BOOKS, &id).await.unwrap();
    assert!(store.list(BOOKS).await.unwrap().is_empty());
    // Deleting twice is fine
    store.delete(BOOKS, &id).await.unwrap();
}

// ============================================================================
// Failed loads
// ============================================================================

#[tokio::test]
async fn test_corrupt_collection_is_failure() {
    let dir = temp_store_dir();
    let store = FileStore::open(&dir).unwrap();
    std::fs::write(dir.join("books.json"), "{ not json").unwrap();

    let repo = LibraryRepository::new(Arc::new(store));
    let result = repo.get_all_saved_books().await;

    assert!(matches!(result, Resource::Failure(_)));
    assert!(!result.is_loading());
    assert!(result.data().is_none());
}

#[tokio::test]
async fn test_mistyped_document_is_failure() {
    let dir = temp_store_dir();
    let store = FileStore::open(&dir).unwrap();
    store
        .add(
            BOOKS,
            json!({ "title": "Emma", "googleBookId": "vol-emma", "rating": "five" }),
        )
        .await
        .unwrap();

    let repo = LibraryRepository::new(Arc::new(store));
    let result = repo.get_all_saved_books().await;

    assert!(!result.is_loading());
    assert!(result.error().is_some_and(|msg| !msg.is_empty()));
}

#[tokio::test]
async fn test_failed_library_shows_on_home() {
    let dir = temp_store_dir();
    let mut app = app_at(&dir);
    drive(&mut app, Action::SplashFinished).await;
    drive(&mut app, Action::CreateAccount("ada@example.com".to_string())).await;

    std::fs::write(dir.join("books.json"), "[]").unwrap();
    drive(&mut app, Action::Refresh).await;

    assert!(app.home.library.error().is_some());
    assert!(!app.home.library.is_loading());
}
