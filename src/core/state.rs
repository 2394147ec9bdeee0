//! # Application State
//!
//! Core business state for Shelf. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── services: Arc<Services>       // catalog + store, used by effects
//! ├── user: Option<CurrentUser>     // signed-in identity
//! ├── navigator: Navigator          // back stack, current screen on top
//! ├── login / home / search / detail / update   // per-screen view-models
//! ├── status_message: String        // status bar text
//! └── default_query: String         // first search on the search screen
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use std::sync::Arc;

use crate::core::route::{Navigator, Route};
use crate::core::viewmodel::{
    DetailViewModel, HomeViewModel, LoginViewModel, SearchViewModel, UpdateViewModel,
};
use crate::library::{CurrentUser, ReadingStats};
use crate::services::Services;

pub struct App {
    pub services: Arc<Services>,
    /// Passed explicitly to whatever needs an owner; `None` means signed out.
    pub user: Option<CurrentUser>,
    pub navigator: Navigator,
    pub login: LoginViewModel,
    pub home: HomeViewModel,
    pub search: SearchViewModel,
    pub detail: DetailViewModel,
    pub update: UpdateViewModel,
    pub status_message: String,
    pub default_query: String,
}

impl App {
    /// Start on the splash screen. `user` is the remembered session, if any.
    pub fn new(services: Arc<Services>, default_query: String, user: Option<CurrentUser>) -> Self {
        Self {
            services,
            user,
            navigator: Navigator::new(Route::Splash),
            login: LoginViewModel::new(),
            home: HomeViewModel::new(),
            search: SearchViewModel::new(),
            detail: DetailViewModel::new(),
            update: UpdateViewModel::new(),
            status_message: String::from("Welcome to Shelf!"),
            default_query,
        }
    }

    pub fn route(&self) -> &Route {
        self.navigator.current()
    }

    /// Reading counts for the signed-in user. Zero when signed out.
    pub fn stats(&self) -> ReadingStats {
        match &self.user {
            Some(user) => self.home.shelf(user).stats(),
            None => ReadingStats::default(),
        }
    }

    /// Drop everything loaded for the previous user.
    pub fn reset_screens(&mut self) {
        self.login = LoginViewModel::new();
        self.home = HomeViewModel::new();
        self.search = SearchViewModel::new();
        self.detail = DetailViewModel::new();
        self.update = UpdateViewModel::new();
    }
}

#[cfg(test)]
mod tests {
    use crate::core::resource::Resource;
    use crate::core::route::Route;
    use crate::library::SavedBook;
    use crate::test_support::{test_app, test_user};

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.status_message, "Welcome to Shelf!");
        assert_eq!(*app.route(), Route::Splash);
        assert_eq!(app.default_query, "Android");
        assert!(app.user.is_none());
    }

    #[test]
    fn test_stats_count_only_current_user() {
        let mut app = test_app();
        app.user = Some(test_user());
        app.home.on_library(Resource::Success(vec![
            SavedBook {
                user_id: test_user().id,
                ..Default::default()
            },
            SavedBook {
                user_id: "someone-else".to_string(),
                ..Default::default()
            },
        ]));
        assert_eq!(app.stats().not_started, 1);
        assert_eq!(app.stats().reading, 0);
    }
}
