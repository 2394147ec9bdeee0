//! # Actions
//!
//! Everything that can happen in Shelf becomes an `Action`.
//! User presses Enter on a search? That's `Action::SubmitSearch(query)`.
//! Catalog answers? That's `Action::SearchCompleted(resource)`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` describing the one piece of I/O that
//! should happen next. No side effects here. I/O happens in
//! [`crate::services`], and its result comes back as another `Action`.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//!                                               │
//!            Action  ◄──  Services::perform()  ◄┘
//! ```

use chrono::{DateTime, Utc};
use log::{debug, info, warn};

use crate::catalog::CatalogItem;
use crate::core::resource::Resource;
use crate::core::route::Route;
use crate::core::state::App;
use crate::core::viewmodel::{SaveBlocked, UpdateEdit};
use crate::library::{CurrentUser, SavedBook, SavedBookPatch};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Navigate(Route),
    Back,
    Quit,
    /// The splash delay ran out.
    SplashFinished,
    SignIn(String),
    CreateAccount(String),
    SignedIn(Resource<CurrentUser>),
    SignOut,
    SubmitSearch(String),
    SearchCompleted(Resource<Vec<CatalogItem>>),
    BookLoaded(Resource<CatalogItem>),
    Refresh,
    LibraryLoaded(Resource<Vec<SavedBook>>),
    /// Save the book open on the detail screen.
    SaveBook,
    /// Id of the new document, or the failure message.
    BookSaved(Result<String, String>),
    EditUpdate(UpdateEdit),
    /// Submit the update form. Newly marked dates are stamped with this time.
    SubmitUpdate(DateTime<Utc>),
    BookUpdated(Result<(), String>),
    DeleteBook,
    BookDeleted(Result<(), String>),
}

/// I/O requested by `update()`. The event loop hands each one to
/// [`Services::perform`](crate::services::Services::perform).
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Quit,
    Search(String),
    LoadBook(String),
    LoadLibrary,
    SaveBook(SavedBook),
    UpdateBook { id: String, patch: SavedBookPatch },
    DeleteBook(String),
    SignIn(String),
    CreateAccount(String),
    SignOut,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Quit => Effect::Quit,
        Action::Navigate(route) => navigate(app, route),
        Action::Back => {
            if app.navigator.back() {
                enter(app)
            } else {
                Effect::None
            }
        }
        Action::SplashFinished => {
            if *app.navigator.current() != Route::Splash {
                return Effect::None;
            }
            let next = if app.user.is_some() {
                Route::Home
            } else {
                Route::Login
            };
            app.navigator.replace(next);
            enter(app)
        }
        Action::SignIn(email) => app.login.sign_in(&email),
        Action::CreateAccount(email) => app.login.create_account(&email),
        Action::SignedIn(outcome) => {
            app.login.on_signed_in(outcome.clone());
            match outcome {
                Resource::Success(user) => {
                    app.status_message = format!("Signed in as {}", user.display_name);
                    app.user = Some(user);
                    app.navigator.replace(Route::Home);
                    enter(app)
                }
                Resource::Failure(message) => {
                    app.status_message = message;
                    Effect::None
                }
                Resource::Loading => Effect::None,
            }
        }
        Action::SignOut => {
            if let Some(user) = app.user.take() {
                info!("Signing out {}", user.id);
            }
            app.reset_screens();
            app.status_message = String::from("Signed out");
            app.navigator.replace(Route::Login);
            Effect::SignOut
        }
        Action::SubmitSearch(query) => app.search.search(&query),
        Action::SearchCompleted(results) => {
            app.search.on_results(results);
            Effect::None
        }
        Action::BookLoaded(book) => {
            app.detail.on_book(book);
            Effect::None
        }
        Action::Refresh => app.home.refresh(),
        Action::LibraryLoaded(library) => {
            app.home.on_library(library);
            if let (Route::Update(_), Some(user)) = (app.navigator.current(), app.user.as_ref()) {
                app.update.on_library(&app.home.library, user);
            }
            Effect::None
        }
        Action::SaveBook => {
            let Some(user) = app.user.as_ref() else {
                return Effect::None;
            };
            match app.detail.save(user, &app.home.library) {
                Ok(effect) => {
                    app.status_message = String::from("Saving...");
                    effect
                }
                Err(SaveBlocked::LibraryNotLoaded) => {
                    app.status_message = SaveBlocked::LibraryNotLoaded.to_string();
                    // A failed load would block saving for good, so try again
                    if matches!(app.home.library, Resource::Failure(_)) {
                        app.home.refresh()
                    } else {
                        Effect::None
                    }
                }
                Err(blocked) => {
                    debug!("Save refused: {}", blocked);
                    app.status_message = blocked.to_string();
                    Effect::None
                }
            }
        }
        Action::BookSaved(Ok(id)) => {
            info!("Saved book as {}", id);
            app.status_message = String::from("Book saved to your reading list");
            app.navigator.back();
            // The duplicate check reads the library, so pick up the new document
            app.home.refresh()
        }
        Action::BookSaved(Err(e)) => {
            app.status_message = format!("Save failed: {}", e);
            Effect::None
        }
        Action::EditUpdate(edit) => {
            app.update.edit(edit);
            Effect::None
        }
        Action::SubmitUpdate(now) => {
            let effect = app.update.submit(now);
            if effect == Effect::None {
                app.status_message = String::from("Nothing to update");
            }
            effect
        }
        Action::BookUpdated(Ok(())) => {
            app.status_message = String::from("Book Updated Successfully");
            go_home(app)
        }
        Action::BookUpdated(Err(e)) => {
            app.status_message = format!("Update failed: {}", e);
            Effect::None
        }
        Action::DeleteBook => app.update.delete(),
        Action::BookDeleted(Ok(())) => {
            app.status_message = String::from("Book Deleted");
            go_home(app)
        }
        Action::BookDeleted(Err(e)) => {
            app.status_message = format!("Delete failed: {}", e);
            Effect::None
        }
    }
}

fn navigate(app: &mut App, route: Route) -> Effect {
    if route.requires_user() && app.user.is_none() {
        warn!("{} needs a signed-in user, showing login", route);
        app.navigator.replace(Route::Login);
    } else {
        app.navigator.navigate(route);
    }
    enter(app)
}

/// Pop back to Home, or make it the root if it isn't on the stack.
fn go_home(app: &mut App) -> Effect {
    while *app.navigator.current() != Route::Home && app.navigator.back() {}
    if *app.navigator.current() != Route::Home {
        app.navigator.replace(Route::Home);
    }
    enter(app)
}

/// Whatever the newly shown screen needs loaded.
fn enter(app: &mut App) -> Effect {
    let route = app.navigator.current().clone();
    info!("Showing {}", route);
    match route {
        Route::Splash => Effect::None,
        Route::Login | Route::CreateAccount => {
            app.login.reset();
            Effect::None
        }
        Route::Home | Route::Stats => app.home.refresh(),
        Route::Search => app.search.on_enter(&app.default_query),
        Route::Detail(id) => app.detail.open(&id),
        Route::Update(id) => {
            let Some(user) = app.user.as_ref() else {
                return Effect::None;
            };
            let effect = match app.home.library {
                Resource::Success(_) => Effect::None,
                _ => app.home.refresh(),
            };
            app.update.open(&id, &app.home.library, user);
            effect
        }
    }
}
